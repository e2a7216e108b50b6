use serde::{Deserialize, Serialize};

use super::Team;

/// Color token used to tint a team tile
///
/// The palette order is fixed; [`color_for`] indexes into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Teal,
    Pink,
    Indigo,
}

impl TeamColor {
    /// Palette in indexing order
    pub const PALETTE: [TeamColor; 8] = [
        TeamColor::Blue,
        TeamColor::Green,
        TeamColor::Purple,
        TeamColor::Red,
        TeamColor::Orange,
        TeamColor::Teal,
        TeamColor::Pink,
        TeamColor::Indigo,
    ];

    /// Returns the stable string token for this color
    pub fn token(&self) -> &'static str {
        match self {
            TeamColor::Blue => "blue",
            TeamColor::Green => "green",
            TeamColor::Purple => "purple",
            TeamColor::Red => "red",
            TeamColor::Orange => "orange",
            TeamColor::Teal => "teal",
            TeamColor::Pink => "pink",
            TeamColor::Indigo => "indigo",
        }
    }

    /// Returns a hex value for renderers that need a concrete color
    pub fn hex(&self) -> &'static str {
        match self {
            TeamColor::Blue => "#3b82f6",
            TeamColor::Green => "#22c55e",
            TeamColor::Purple => "#a855f7",
            TeamColor::Red => "#ef4444",
            TeamColor::Orange => "#f97316",
            TeamColor::Teal => "#14b8a6",
            TeamColor::Pink => "#ec4899",
            TeamColor::Indigo => "#6366f1",
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Picks a palette color from the first character of the team name
///
/// The index is the first UTF-16 code unit of the name modulo the palette
/// size. Teams with a missing or empty name use index 0. Different names may
/// share a color.
///
/// # Example
/// ```
/// use roster_board::domain::team::{color_for, Team, TeamColor};
///
/// // 'A' is 65, 65 % 8 == 1
/// assert_eq!(color_for(&Team::new("Alfa")), TeamColor::Green);
/// assert_eq!(color_for(&Team::unnamed()), TeamColor::Blue);
/// ```
pub fn color_for(team: &Team) -> TeamColor {
    let index = team
        .name()
        .and_then(|name| name.encode_utf16().next())
        .map(|unit| usize::from(unit) % TeamColor::PALETTE.len())
        .unwrap_or(0);

    TeamColor::PALETTE[index]
}
