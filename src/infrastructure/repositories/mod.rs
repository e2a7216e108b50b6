// Team source implementations (data access layer)
// Adapters that implement domain collaborator interfaces

pub mod in_memory_team_source;
pub mod json_team_source;

pub use in_memory_team_source::InMemoryTeamSource;
pub use json_team_source::JsonFileTeamSource;
