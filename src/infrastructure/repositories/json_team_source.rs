use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::repositories::TeamSource;
use crate::domain::team::Team;
use crate::errors::{RosterError, RosterResult};

/// TeamSource reading a JSON array of teams from disk
///
/// Each element follows the [`Team`] wire shape; `players` is accepted as an
/// alias of `roster`, and every field may be absent.
pub struct JsonFileTeamSource {
    path: PathBuf,
}

impl JsonFileTeamSource {
    /// Creates a new JsonFileTeamSource
    ///
    /// # Arguments
    /// * `path` - Location of the JSON file; read on every fetch
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TeamSource for JsonFileTeamSource {
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RosterError::SourceRead {
                path: self.path.clone(),
                source,
            })?;

        let teams: Vec<Team> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), teams = teams.len(), "loaded teams");

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn write_temp(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("roster-board-{}.json", Uuid::new_v4()));
        tokio::fs::write(&path, content)
            .await
            .expect("write temp file");
        path
    }

    #[tokio::test]
    async fn reads_teams_from_file() {
        let path = write_temp(
            r#"[
                {"name": "Alfa", "category": "A"},
                {"name": "Beta", "category": "A", "subcategory": "1", "players": [{"name": "Ana"}]},
                {"category": "B"}
            ]"#,
        )
        .await;

        let teams = JsonFileTeamSource::new(&path).fetch_teams().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(teams.len(), 3);
        assert_eq!(teams[1].subcategory(), Some("1"));
        assert_eq!(teams[1].roster().len(), 1);
        assert!(teams[2].name().is_none());
    }

    #[tokio::test]
    async fn loose_player_fields_do_not_reject_the_list() {
        let path = write_temp(
            r#"[
                {"name": "Alfa", "players": [{"name": "Ana", "number": 300}, {"number": "7"}]},
                {"name": "Beta", "players": [{"name": "Luz", "number": null, "captain": true}]}
            ]"#,
        )
        .await;

        let teams = JsonFileTeamSource::new(&path).fetch_teams().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(teams.len(), 2);
        let alfa = teams[0].roster();
        assert_eq!(alfa[0].number(), Some(300));
        assert_eq!(alfa[1].name(), "");
        assert_eq!(alfa[1].number(), Some(7));
        assert!(teams[1].roster()[0].extra().contains_key("captain"));
    }

    #[tokio::test]
    async fn missing_file_is_source_error() {
        let source = JsonFileTeamSource::new("/definitely/not/here/teams.json");

        let err = source.fetch_teams().await.unwrap_err();

        assert!(matches!(err, RosterError::SourceRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here/teams.json"));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let path = write_temp("{ not json").await;

        let err = JsonFileTeamSource::new(&path).fetch_teams().await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(err, RosterError::JsonError(_)));
    }
}
