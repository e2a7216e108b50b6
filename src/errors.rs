use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Errors raised at the edges of the roster board
///
/// The categorization stages themselves never fail; these cover loading
/// teams, reading configuration and resolving clicked teams.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read team source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
