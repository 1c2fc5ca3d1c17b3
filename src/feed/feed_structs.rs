use serde::{Deserialize, Serialize};

use crate::model::structures::player_result::{Player, PlayerResult};

/// One player row of the standings document, as serialized by the
/// broadcast backend.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRowDto {
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub rating_diff: Option<i32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub played: u32
}

/// Top-level standings document for one broadcast round.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsDto {
    pub tournament: String,
    pub players: Vec<PlayerRowDto>
}

impl From<PlayerRowDto> for PlayerResult {
    fn from(row: PlayerRowDto) -> Self {
        PlayerResult {
            player: Player {
                name: row.name,
                rating: row.rating
            },
            rating_diff: row.rating_diff,
            score: row.score,
            played: row.played
        }
    }
}
