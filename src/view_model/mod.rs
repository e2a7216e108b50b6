// View model module
// Memoized pipeline state and the render-ready snapshot it produces

pub mod roster_view;
pub mod snapshot;

pub use roster_view::{RosterView, StageStats};
pub use snapshot::{CategoryTiles, RosterSnapshot, SubgroupTiles, TeamTile};
