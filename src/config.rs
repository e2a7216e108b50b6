use std::path::PathBuf;

use crate::domain::categorization::CategorySelection;
use crate::errors::{RosterError, RosterResult};

pub const TEAMS_PATH_VAR: &str = "ROSTER_TEAMS_JSON";
pub const SEARCH_VAR: &str = "ROSTER_SEARCH";
pub const CATEGORY_VAR: &str = "ROSTER_CATEGORY";
pub const DEFAULT_TEAMS_PATH: &str = "data/teams.sample.json";

/// Runtime settings for the roster board binary
#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    pub teams_path: PathBuf,
    pub search_term: String,
    pub selection: CategorySelection,
}

impl RosterConfig {
    /// Reads settings from the process environment
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let teams_path = lookup(TEAMS_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("{TEAMS_PATH_VAR} not set, using {DEFAULT_TEAMS_PATH}");
                DEFAULT_TEAMS_PATH.to_string()
            });

        Self {
            teams_path: PathBuf::from(teams_path),
            search_term: lookup(SEARCH_VAR).unwrap_or_default(),
            selection: lookup(CATEGORY_VAR)
                .filter(|c| !c.is_empty())
                .map(CategorySelection::from_key)
                .unwrap_or_default(),
        }
    }

    /// Applies `--teams`, `--search` and `--category` overrides
    pub fn with_args<I>(mut self, args: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| RosterError::ConfigError(format!("{flag} requires a value")))
            };
            match flag.as_str() {
                "--teams" => self.teams_path = PathBuf::from(value()?),
                "--search" => self.search_term = value()?,
                "--category" => self.selection = CategorySelection::from_key(value()?),
                _ => {
                    return Err(RosterError::ConfigError(format!("Unknown argument: {flag}")));
                }
            }
        }
        Ok(self)
    }
}
