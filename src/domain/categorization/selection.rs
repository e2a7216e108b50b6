use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::grouping::GroupedTeams;

/// Selector key that stands for every category
pub const ALL_KEY: &str = "all";

/// Category chosen in the picker
///
/// Round-trips through its key: `"all"` or the category key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// Builds a selection from a picker key
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == ALL_KEY {
            CategorySelection::All
        } else {
            CategorySelection::Category(key)
        }
    }

    /// Returns the picker key for this selection
    pub fn key(&self) -> &str {
        match self {
            CategorySelection::All => ALL_KEY,
            CategorySelection::Category(key) => key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

impl Serialize for CategorySelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for CategorySelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(key))
    }
}

/// Keeps only the selected category
///
/// `All` returns the groups unchanged. An unknown key yields empty groups,
/// not an error.
pub fn filter_by_category(groups: &GroupedTeams, selection: &CategorySelection) -> GroupedTeams {
    match selection {
        CategorySelection::All => groups.clone(),
        CategorySelection::Category(key) => match groups.get(key) {
            Some(category) => {
                let mut selected = GroupedTeams::new();
                selected.insert(key.clone(), category.clone());
                selected
            }
            None => {
                tracing::debug!(category = %key, "selected category not present");
                GroupedTeams::new()
            }
        },
    }
}
