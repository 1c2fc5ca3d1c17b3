use serde::{Deserialize, Serialize};

/// Identity of one tournament participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: Option<i32>
}

/// One participant's standing within a broadcast round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResult {
    pub player: Player,
    /// Rating change shown alongside the current rating.
    pub rating_diff: Option<i32>,
    /// Points total, in half-point increments. Absent when the
    /// tournament does not track points.
    pub score: Option<f64>,
    pub played: u32
}
