use uuid::Uuid;

use super::snapshot::RosterSnapshot;
use crate::domain::categorization::{
    filter_by_category, filter_by_search, group, summarize, CategorySelection, GroupedTeams,
    SelectorEntry,
};
use crate::domain::repositories::{RosterViewer, TeamSource};
use crate::domain::team::Team;
use crate::errors::{RosterError, RosterResult};

/// How many times each stage has been computed since construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageStats {
    pub grouping: u64,
    pub summary: u64,
    pub search: u64,
    pub selection: u64,
}

/// Input version counters; bumped only when an input really changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct InputVersions {
    teams: u64,
    search: u64,
    selection: u64,
}

/// A stage output tagged with the input versions it was built from
#[derive(Debug, Clone)]
struct Memo<K, T> {
    built_from: K,
    value: T,
}

/// Memoized roster board pipeline
///
/// Owns the three inputs (team list, search term, selected category) and
/// caches every stage output. Changing an input only recomputes the stages
/// that depend on it: typing a search term never regroups teams or
/// recounts the picker.
///
/// # Example
/// ```
/// use roster_board::domain::categorization::CategorySelection;
/// use roster_board::domain::team::Team;
/// use roster_board::view_model::RosterView;
///
/// let mut view = RosterView::new(vec![
///     Team::new("Alfa").with_category("A"),
///     Team::new("Beta").with_category("A").with_subcategory("1"),
///     Team::new("Gamma"),
/// ]);
///
/// view.set_search_term("bet");
/// view.select_category(CategorySelection::from_key("A"));
///
/// assert_eq!(view.visible().total_teams(), 1);
/// assert_eq!(view.summary()[0].count, 3);
/// ```
#[derive(Debug, Clone)]
pub struct RosterView {
    teams: Vec<Team>,
    search_term: String,
    selection: CategorySelection,
    versions: InputVersions,
    grouped: Memo<u64, GroupedTeams>,
    summary: Memo<u64, Vec<SelectorEntry>>,
    searched: Memo<(u64, u64), GroupedTeams>,
    visible: Memo<(u64, u64, u64), GroupedTeams>,
    stats: StageStats,
}

impl Default for RosterView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RosterView {
    /// Builds every stage for the given teams with no search and `all` selected
    pub fn new(teams: Vec<Team>) -> Self {
        let grouped = group(&teams);
        let summary = summarize(&grouped);
        let searched = grouped.clone();
        let visible = grouped.clone();

        Self {
            teams,
            search_term: String::new(),
            selection: CategorySelection::All,
            versions: InputVersions::default(),
            grouped: Memo { built_from: 0, value: grouped },
            summary: Memo { built_from: 0, value: summary },
            searched: Memo { built_from: (0, 0), value: searched },
            visible: Memo { built_from: (0, 0, 0), value: visible },
            stats: StageStats {
                grouping: 1,
                summary: 1,
                search: 1,
                selection: 1,
            },
        }
    }

    /// Replaces the team list; no-op when the list is unchanged
    pub fn set_teams(&mut self, teams: Vec<Team>) {
        if teams == self.teams {
            return;
        }
        self.teams = teams;
        self.versions.teams += 1;
        self.refresh();
    }

    /// Updates the search term; no-op when the term is unchanged
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.versions.search += 1;
        self.refresh();
    }

    /// Updates the selected category; no-op when the selection is unchanged
    pub fn select_category(&mut self, selection: CategorySelection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.versions.selection += 1;
        self.refresh();
    }

    /// Replaces the team list with whatever the source currently returns
    pub async fn reload(&mut self, source: &dyn TeamSource) -> RosterResult<()> {
        let teams = source.fetch_teams().await?;
        tracing::info!(teams = teams.len(), "reloaded team list");
        self.set_teams(teams);
        Ok(())
    }

    fn refresh(&mut self) {
        let InputVersions {
            teams,
            search,
            selection,
        } = self.versions;

        if self.grouped.built_from != teams {
            self.grouped = Memo {
                built_from: teams,
                value: group(&self.teams),
            };
            self.stats.grouping += 1;
        }

        if self.summary.built_from != teams {
            self.summary = Memo {
                built_from: teams,
                value: summarize(&self.grouped.value),
            };
            self.stats.summary += 1;
        }

        if self.searched.built_from != (teams, search) {
            self.searched = Memo {
                built_from: (teams, search),
                value: filter_by_search(&self.grouped.value, &self.search_term),
            };
            self.stats.search += 1;
        }

        if self.visible.built_from != (teams, search, selection) {
            self.visible = Memo {
                built_from: (teams, search, selection),
                value: filter_by_category(&self.searched.value, &self.selection),
            };
            self.stats.selection += 1;
        }

        tracing::debug!(
            search = %self.search_term,
            selection = %self.selection,
            visible = self.visible.value.total_teams(),
            "refreshed roster view"
        );
    }

    // ===== Getters =====

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    /// Unfiltered grouping of the current team list
    pub fn grouped(&self) -> &GroupedTeams {
        &self.grouped.value
    }

    /// Picker entries; independent of search term and selection
    pub fn summary(&self) -> &[SelectorEntry] {
        &self.summary.value
    }

    /// Groups after search and category selection
    pub fn visible(&self) -> &GroupedTeams {
        &self.visible.value
    }

    pub fn stats(&self) -> StageStats {
        self.stats
    }

    pub fn find_team(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == team_id)
    }

    /// Handles a click on a team tile by opening its roster
    ///
    /// # Returns
    /// * `Ok(())` - The viewer was handed the team's id and roster
    /// * `Err(RosterError::TeamNotFound)` - No team with that id in the current list
    pub fn open_team(&self, team_id: Uuid, viewer: &dyn RosterViewer) -> RosterResult<()> {
        let team = self
            .find_team(team_id)
            .ok_or(RosterError::TeamNotFound(team_id))?;

        viewer.show_roster(team.id(), team.roster());
        Ok(())
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::build(
            &self.search_term,
            &self.selection,
            self.summary(),
            self.visible(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::categorization::DEFAULT_CATEGORY;
    use crate::domain::team::Player;
    use crate::infrastructure::repositories::InMemoryTeamSource;
    use std::cell::RefCell;

    fn scenario_teams() -> Vec<Team> {
        vec![
            Team::new("Alfa").with_category("A"),
            Team::new("Beta")
                .with_category("A")
                .with_subcategory("1")
                .with_roster(vec![Player::new("Ana").with_number(9)]),
            Team::new("Gamma"),
        ]
    }

    #[derive(Default)]
    struct RecordingViewer {
        opened: RefCell<Vec<(Uuid, usize)>>,
    }

    impl RosterViewer for RecordingViewer {
        fn show_roster(&self, team_id: Uuid, roster: &[Player]) {
            self.opened.borrow_mut().push((team_id, roster.len()));
        }
    }

    #[test]
    fn new_view_shows_everything() {
        let view = RosterView::new(scenario_teams());

        assert_eq!(view.visible(), view.grouped());
        assert_eq!(view.summary().len(), 3);
        assert!(view.selection().is_all());
        assert_eq!(view.search_term(), "");
    }

    #[test]
    fn typing_does_not_regroup_or_recount() {
        let mut view = RosterView::new(scenario_teams());
        let summary_before = view.summary().to_vec();

        for term in ["b", "be", "bet"] {
            view.set_search_term(term);
            assert_eq!(view.summary(), summary_before.as_slice(), "after {term:?}");
        }

        let stats = view.stats();
        assert_eq!(stats.grouping, 1);
        assert_eq!(stats.summary, 1);
        assert_eq!(stats.search, 4);
        assert_eq!(stats.selection, 4);
        assert_eq!(view.summary(), summary_before.as_slice());
        assert_eq!(view.visible().total_teams(), 1);
    }

    #[test]
    fn selector_counts_hold_when_search_empties_view() {
        let mut view = RosterView::new(scenario_teams());
        let summary_before = view.summary().to_vec();

        view.set_search_term("zeta");

        assert!(view.visible().is_empty());
        assert_eq!(view.summary(), summary_before.as_slice());
        assert_eq!(view.summary()[0].count, 3);
    }

    #[test]
    fn selecting_only_reruns_selection() {
        let mut view = RosterView::new(scenario_teams());
        view.set_search_term("a");

        view.select_category(CategorySelection::from_key(DEFAULT_CATEGORY));

        let stats = view.stats();
        assert_eq!(stats.search, 2);
        assert_eq!(stats.selection, 3);
        assert_eq!(view.visible().keys().collect::<Vec<_>>(), vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn unchanged_inputs_do_not_recompute() {
        let mut view = RosterView::new(scenario_teams());
        let teams = view.teams().to_vec();

        view.set_teams(teams);
        view.set_search_term("");
        view.select_category(CategorySelection::All);

        assert_eq!(
            view.stats(),
            StageStats {
                grouping: 1,
                summary: 1,
                search: 1,
                selection: 1,
            }
        );
    }

    #[test]
    fn new_team_list_recomputes_everything() {
        let mut view = RosterView::new(scenario_teams());
        view.set_search_term("a");

        let mut teams = scenario_teams();
        teams.push(Team::new("Delta").with_category("B"));
        view.set_teams(teams);

        let stats = view.stats();
        assert_eq!(stats.grouping, 2);
        assert_eq!(stats.summary, 2);
        assert_eq!(view.summary()[0].count, 4);
        assert!(view.visible().contains_key("B"));
    }

    #[test]
    fn search_and_selection_compose() {
        let mut view = RosterView::new(scenario_teams());

        view.set_search_term("bet");
        view.select_category(CategorySelection::from_key(DEFAULT_CATEGORY));
        assert!(view.visible().is_empty());

        view.select_category(CategorySelection::from_key("A"));
        let a = view.visible().get("A").unwrap();
        assert!(a.teams.is_empty());
        assert_eq!(a.subgroups["A-1"].teams.len(), 1);
    }

    #[test]
    fn open_team_hands_roster_to_viewer() {
        let view = RosterView::new(scenario_teams());
        let beta = view.teams()[1].id();
        let viewer = RecordingViewer::default();

        view.open_team(beta, &viewer).expect("team exists");

        assert_eq!(viewer.opened.borrow().as_slice(), &[(beta, 1)]);
    }

    #[test]
    fn open_unknown_team_fails() {
        let view = RosterView::new(scenario_teams());
        let viewer = RecordingViewer::default();
        let missing = Uuid::new_v4();

        let err = view.open_team(missing, &viewer).unwrap_err();

        assert!(matches!(err, RosterError::TeamNotFound(id) if id == missing));
        assert!(viewer.opened.borrow().is_empty());
    }

    #[test]
    fn snapshot_reflects_filters() {
        let mut view = RosterView::new(scenario_teams());
        view.set_search_term("gam");

        let snapshot = view.snapshot();

        assert_eq!(snapshot.search_term, "gam");
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.categories[0].key, DEFAULT_CATEGORY);
        assert_eq!(snapshot.selector[0].count, 3);
    }

    #[tokio::test]
    async fn reload_pulls_from_source() {
        let mut view = RosterView::default();
        let source = InMemoryTeamSource::new(scenario_teams());

        view.reload(&source).await.expect("reload");

        assert_eq!(view.teams().len(), 3);
        assert_eq!(view.grouped().len(), 2);
        assert_eq!(view.stats().grouping, 2);
    }
}
