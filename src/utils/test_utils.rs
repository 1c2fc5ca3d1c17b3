use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::player_result::{Player, PlayerResult};

pub fn generate_player_result(
    name: &str,
    rating: Option<i32>,
    score: Option<f64>,
    played: u32
) -> PlayerResult {
    PlayerResult {
        player: Player {
            name: name.to_string(),
            rating
        },
        rating_diff: None,
        score,
        played
    }
}

/// Generates a full tournament field with ratings, half-point scores and
/// game counts drawn from a seeded RNG for reproducible results.
pub fn generate_field(count: usize) -> Vec<PlayerResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    (0..count)
        .map(|i| PlayerResult {
            player: Player {
                name: format!("player_{}", i),
                rating: Some(rng.random_range(1800..=2800))
            },
            rating_diff: Some(rng.random_range(-30..=30)),
            score: Some(rng.random_range(0..=18) as f64 * 0.5),
            played: rng.random_range(0..=9)
        })
        .collect()
}
