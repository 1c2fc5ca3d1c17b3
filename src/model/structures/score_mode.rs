use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::model::structures::{player_result::PlayerResult, sort_key::SortKey};

/// What the points column of a standings table means. Classified once when
/// the player list is loaded, never re-derived from row data afterwards.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScoreMode {
    /// The tournament tracks points; rows carry a score.
    Points = 0,
    /// No points are tracked; the column shows games played instead.
    GamesPlayed = 1
}

impl ScoreMode {
    /// Classifies a player list by the first row's score field.
    /// An empty list falls back to `GamesPlayed`.
    pub fn classify(players: &[PlayerResult]) -> ScoreMode {
        match players.first().and_then(|p| p.score) {
            Some(_) => ScoreMode::Points,
            None => ScoreMode::GamesPlayed
        }
    }

    /// The column a freshly loaded table is ordered by in this mode.
    pub fn default_sort_key(&self) -> SortKey {
        match self {
            ScoreMode::Points => SortKey::ByScore,
            ScoreMode::GamesPlayed => SortKey::ByRating
        }
    }
}
