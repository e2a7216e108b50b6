use crate::domain::team::Team;

use super::grouping::{CategoryGroup, GroupedTeams, SubgroupGroup};

/// Case-insensitive substring match against the team name
///
/// Unnamed teams never match a non-empty term.
pub fn matches_search(team: &Team, term: &str) -> bool {
    term.is_empty() || name_contains(team, &term.to_lowercase())
}

fn name_contains(team: &Team, needle: &str) -> bool {
    team.name()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}

/// Narrows grouped teams to those whose name contains `term`
///
/// An empty term returns the groups unchanged. Otherwise direct teams and
/// each subgroup are filtered on their own; emptied subgroups are removed,
/// and a category with no direct teams and no subgroups left is removed too.
/// Category and subgroup names are never matched.
///
/// # Example
/// ```
/// use roster_board::domain::categorization::{filter_by_search, group};
/// use roster_board::domain::team::Team;
///
/// let groups = group(&[
///     Team::new("Alfa").with_category("A"),
///     Team::new("Beta").with_category("A").with_subcategory("1"),
///     Team::new("Gamma"),
/// ]);
///
/// let found = filter_by_search(&groups, "bet");
/// assert_eq!(found.len(), 1);
/// assert!(found.get("A").unwrap().teams.is_empty());
/// ```
pub fn filter_by_search(groups: &GroupedTeams, term: &str) -> GroupedTeams {
    if term.is_empty() {
        return groups.clone();
    }

    let needle = term.to_lowercase();
    let keep = |team: &&Team| name_contains(team, &needle);

    let filtered: GroupedTeams = groups
        .iter()
        .filter_map(|(key, category)| {
            let teams: Vec<Team> = category.teams.iter().filter(keep).cloned().collect();
            let subgroups = category
                .subgroups
                .iter()
                .filter_map(|(sub_key, subgroup)| {
                    let teams: Vec<Team> =
                        subgroup.teams.iter().filter(keep).cloned().collect();
                    (!teams.is_empty()).then(|| {
                        (
                            sub_key.clone(),
                            SubgroupGroup {
                                name: subgroup.name.clone(),
                                teams,
                            },
                        )
                    })
                })
                .collect();

            let narrowed = CategoryGroup {
                name: category.name.clone(),
                teams,
                subgroups,
            };
            (!narrowed.is_empty()).then(|| (key.to_string(), narrowed))
        })
        .collect();

    tracing::trace!(
        term,
        before = groups.total_teams(),
        after = filtered.total_teams(),
        "applied search filter"
    );

    filtered
}
