use async_trait::async_trait;

use crate::domain::team::Team;
use crate::errors::RosterResult;

/// Source of the team list
///
/// Defines the contract for loading teams in their canonical order.
/// Implementations own transport and storage details.
#[async_trait]
pub trait TeamSource: Send + Sync {
    /// Fetch every team, preserving source order
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>>;
}
