// Collaborator ports
// Traits the outside world implements to feed teams in and show rosters

pub mod roster_viewer;
pub mod team_source;

pub use roster_viewer::RosterViewer;
pub use team_source::TeamSource;
