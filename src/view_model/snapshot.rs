use serde::Serialize;
use uuid::Uuid;

use crate::domain::categorization::{
    CategoryGroup, CategorySelection, GroupedTeams, SelectorEntry, SubgroupGroup,
};
use crate::domain::team::{color_for, Team, TeamColor};

/// Everything a renderer needs for one frame of the roster board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSnapshot {
    pub search_term: String,
    pub selected: CategorySelection,
    pub selector: Vec<SelectorEntry>,
    pub categories: Vec<CategoryTiles>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTiles {
    pub key: String,
    pub name: String,
    pub teams: Vec<TeamTile>,
    pub subgroups: Vec<SubgroupTiles>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgroupTiles {
    pub key: String,
    pub name: String,
    pub teams: Vec<TeamTile>,
}

/// A clickable team tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTile {
    pub id: Uuid,
    pub name: Option<String>,
    pub badge: String,
    pub color: TeamColor,
    pub color_hex: &'static str,
    pub players: usize,
}

impl From<&Team> for TeamTile {
    fn from(team: &Team) -> Self {
        let color = color_for(team);
        Self {
            id: team.id(),
            name: team.name().map(str::to_string),
            badge: team.badge(),
            color,
            color_hex: color.hex(),
            players: team.roster().len(),
        }
    }
}

impl SubgroupTiles {
    fn from_group(key: &str, subgroup: &SubgroupGroup) -> Self {
        Self {
            key: key.to_string(),
            name: subgroup.name.clone(),
            teams: subgroup.teams.iter().map(TeamTile::from).collect(),
        }
    }
}

impl CategoryTiles {
    fn from_group(key: &str, category: &CategoryGroup) -> Self {
        Self {
            key: key.to_string(),
            name: category.name.clone(),
            teams: category.teams.iter().map(TeamTile::from).collect(),
            subgroups: category
                .subgroups
                .iter()
                .map(|(sub_key, subgroup)| SubgroupTiles::from_group(sub_key, subgroup))
                .collect(),
        }
    }
}

impl RosterSnapshot {
    pub(crate) fn build(
        search_term: &str,
        selected: &CategorySelection,
        selector: &[SelectorEntry],
        visible: &GroupedTeams,
    ) -> Self {
        Self {
            search_term: search_term.to_string(),
            selected: selected.clone(),
            selector: selector.to_vec(),
            categories: visible
                .iter()
                .map(|(key, category)| CategoryTiles::from_group(key, category))
                .collect(),
        }
    }

    /// True when no tile would be drawn
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
