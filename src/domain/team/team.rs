use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Player;

/// Team record as supplied by the team source
///
/// The categorization pipeline only reads `name`, `category` and
/// `subcategory`; the roster is carried through untouched for the
/// detail view.
///
/// # Invariants
/// - `id` is unique within one team list
/// - A missing or empty `subcategory` means the team has no subgroup
///
/// # Example
/// ```
/// use roster_board::domain::team::Team;
///
/// let team = Team::new("Halcones")
///     .with_category("Sub-12")
///     .with_subcategory("A");
///
/// assert_eq!(team.name(), Some("Halcones"));
/// assert_eq!(team.subcategory(), Some("A"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default, alias = "players")]
    roster: Vec<Player>,
}

impl Team {
    /// Creates a named team with a fresh id and no category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            category: None,
            subcategory: None,
            roster: Vec::new(),
        }
    }

    /// Creates a team without a name
    ///
    /// Such teams are still grouped, but never match a non-empty search.
    pub fn unnamed() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            category: None,
            subcategory: None,
            roster: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_roster(mut self, roster: Vec<Player>) -> Self {
        self.roster = roster;
        self
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name, if it has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the raw category tag
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the raw subcategory tag
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    /// Returns the team's players in roster order
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Short badge text built from the last two characters of the name
    ///
    /// Unrelated to [`color_for`](super::color_for), which keys off the first
    /// character. Teams without a usable name get `"?"`.
    pub fn badge(&self) -> String {
        let Some(name) = self.name().map(str::trim).filter(|n| !n.is_empty()) else {
            return "?".to_string();
        };

        let chars: Vec<char> = name.chars().collect();
        let start = chars.len().saturating_sub(2);
        chars[start..].iter().collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_has_no_category() {
        let team = Team::new("Alfa");

        assert_eq!(team.name(), Some("Alfa"));
        assert!(team.category().is_none());
        assert!(team.subcategory().is_none());
        assert!(team.roster().is_empty());
    }

    #[test]
    fn unnamed_team() {
        let team = Team::unnamed().with_category("A");

        assert!(team.name().is_none());
        assert_eq!(team.category(), Some("A"));
    }

    #[test]
    fn with_id_overrides_generated_id() {
        let id = Uuid::new_v4();
        let team = Team::new("Alfa").with_id(id);

        assert_eq!(team.id(), id);
    }

    #[test]
    fn badge_uses_last_two_characters() {
        assert_eq!(Team::new("Halcones").badge(), "ES");
        assert_eq!(Team::new("Ñandúes  ").badge(), "ES");
        assert_eq!(Team::new("x").badge(), "X");
    }

    #[test]
    fn badge_fallback_for_missing_name() {
        assert_eq!(Team::unnamed().badge(), "?");
        assert_eq!(Team::new("   ").badge(), "?");
    }

    #[test]
    fn deserializes_players_alias_and_missing_fields() {
        let json = r#"{
            "id": "7f1d8c3a-2b6e-4f0a-9c1d-3e5f7a9b1c2d",
            "name": "Beta",
            "category": "A",
            "players": [{ "name": "Ana", "number": 9 }]
        }"#;

        let team: Team = serde_json::from_str(json).expect("valid team json");

        assert_eq!(team.name(), Some("Beta"));
        assert_eq!(team.category(), Some("A"));
        assert!(team.subcategory().is_none());
        assert_eq!(team.roster().len(), 1);
        assert_eq!(team.roster()[0].name(), "Ana");
    }
}
