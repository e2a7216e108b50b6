use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::team::Team;

/// Bucket for teams that carry no category
pub const DEFAULT_CATEGORY: &str = "Sin Categoría";

/// Teams sharing one category, split into direct teams and subgroups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    /// Teams without a subcategory, in input order
    pub teams: Vec<Team>,
    /// Subgroups keyed by `category-subcategory`, in first-encounter order
    pub subgroups: IndexMap<String, SubgroupGroup>,
}

impl CategoryGroup {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
            subgroups: IndexMap::new(),
        }
    }

    /// Direct teams plus every subgroup's teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
            + self
                .subgroups
                .values()
                .map(|subgroup| subgroup.teams.len())
                .sum::<usize>()
    }

    /// True when there are no direct teams and no subgroups left
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.subgroups.is_empty()
    }

    /// Every team in this category: direct teams first, then subgroups in order
    pub fn all_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams
            .iter()
            .chain(self.subgroups.values().flat_map(|s| s.teams.iter()))
    }
}

/// Teams sharing one category and one subcategory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgroupGroup {
    /// Composite label, `category-subcategory`
    pub name: String,
    pub teams: Vec<Team>,
}

/// Category key → group, in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedTeams {
    categories: IndexMap<String, CategoryGroup>,
}

impl GroupedTeams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CategoryGroup> {
        self.categories.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryGroup)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of teams across every bucket
    pub fn total_teams(&self) -> usize {
        self.categories.values().map(CategoryGroup::team_count).sum()
    }

    /// Every team, category by category
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.categories.values().flat_map(CategoryGroup::all_teams)
    }

    pub(crate) fn insert(&mut self, key: String, group: CategoryGroup) {
        self.categories.insert(key, group);
    }
}

impl FromIterator<(String, CategoryGroup)> for GroupedTeams {
    fn from_iter<I: IntoIterator<Item = (String, CategoryGroup)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

/// Category key for a team; missing or empty categories use [`DEFAULT_CATEGORY`]
///
/// Whitespace is significant: `"  "` is a category of its own.
pub fn category_key(team: &Team) -> &str {
    team.category()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Composite subgroup key, or `None` when the team belongs in the direct list
pub fn subgroup_key(team: &Team) -> Option<String> {
    team.subcategory()
        .filter(|s| !s.is_empty())
        .map(|sub| format!("{}-{}", category_key(team), sub))
}

/// Partitions teams into categories and subgroups
///
/// Each team lands in exactly one bucket. Order inside every bucket follows
/// the input; categories and subgroups appear in first-encounter order.
///
/// # Example
/// ```
/// use roster_board::domain::categorization::group;
/// use roster_board::domain::team::Team;
///
/// let teams = vec![
///     Team::new("Alfa").with_category("A"),
///     Team::new("Beta").with_category("A").with_subcategory("1"),
///     Team::new("Gamma"),
/// ];
///
/// let groups = group(&teams);
/// let a = groups.get("A").expect("category A");
///
/// assert_eq!(a.teams.len(), 1);
/// assert_eq!(a.subgroups["A-1"].teams.len(), 1);
/// assert!(groups.contains_key("Sin Categoría"));
/// ```
pub fn group(teams: &[Team]) -> GroupedTeams {
    let mut categories: IndexMap<String, CategoryGroup> = IndexMap::new();

    for team in teams {
        let key = category_key(team);
        let category = categories
            .entry(key.to_string())
            .or_insert_with(|| CategoryGroup::new(key));

        match subgroup_key(team) {
            Some(sub_key) => category
                .subgroups
                .entry(sub_key)
                .or_insert_with_key(|k| SubgroupGroup {
                    name: k.clone(),
                    teams: Vec::new(),
                })
                .teams
                .push(team.clone()),
            None => category.teams.push(team.clone()),
        }
    }

    tracing::trace!(
        teams = teams.len(),
        categories = categories.len(),
        "grouped teams"
    );

    GroupedTeams { categories }
}
