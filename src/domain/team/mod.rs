// Team domain module
// Contains the team record, its roster entries and color coding

#![allow(clippy::module_inception)]

pub mod player;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use player::Player;
pub use team::Team;
pub use value_objects::{color_for, TeamColor};
