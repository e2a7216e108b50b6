use async_trait::async_trait;

use crate::domain::repositories::TeamSource;
use crate::domain::team::Team;
use crate::errors::RosterResult;

/// TeamSource backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamSource {
    teams: Vec<Team>,
}

impl InMemoryTeamSource {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }
}

#[async_trait]
impl TeamSource for InMemoryTeamSource {
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>> {
        Ok(self.teams.clone())
    }
}
