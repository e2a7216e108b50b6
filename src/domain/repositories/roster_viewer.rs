use uuid::Uuid;

use crate::domain::team::Player;

/// Detail view opened when a team tile is clicked
pub trait RosterViewer {
    /// Show the roster of the given team
    fn show_roster(&self, team_id: Uuid, roster: &[Player]);
}
