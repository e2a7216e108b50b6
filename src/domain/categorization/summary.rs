use serde::{Deserialize, Serialize};

use super::grouping::GroupedTeams;
use super::selection::ALL_KEY;

pub const ALL_LABEL: &str = "Todas";
pub const CATEGORY_LABEL_PREFIX: &str = "Cat. ";

/// One option of the category picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEntry {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Builds picker entries: an `all` entry followed by one entry per category
///
/// Must be fed the unfiltered grouping so counts stay put while the user
/// types a search term.
///
/// # Example
/// ```
/// use roster_board::domain::categorization::{group, summarize};
/// use roster_board::domain::team::Team;
///
/// let entries = summarize(&group(&[
///     Team::new("Alfa").with_category("A"),
///     Team::new("Gamma"),
/// ]));
///
/// assert_eq!(entries[0].key, "all");
/// assert_eq!(entries[0].count, 2);
/// assert_eq!(entries[1].label, "Cat. A");
/// ```
pub fn summarize(groups: &GroupedTeams) -> Vec<SelectorEntry> {
    let mut entries = Vec::with_capacity(groups.len() + 1);

    entries.push(SelectorEntry {
        key: ALL_KEY.to_string(),
        label: ALL_LABEL.to_string(),
        count: groups.total_teams(),
    });

    entries.extend(groups.iter().map(|(key, category)| SelectorEntry {
        key: key.to_string(),
        label: format!("{CATEGORY_LABEL_PREFIX}{key}"),
        count: category.team_count(),
    }));

    entries
}
