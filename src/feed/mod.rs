pub mod feed_structs;

use std::{fs, path::Path};

use thiserror::Error;
use tracing::{info, warn};

use crate::{feed::feed_structs::StandingsDto, model::structures::player_result::PlayerResult};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read standings feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed standings feed: {0}")]
    Malformed(#[from] serde_json::Error)
}

/// A loaded standings feed, converted to domain rows.
#[derive(Debug)]
pub struct Standings {
    pub tournament: String,
    pub players: Vec<PlayerResult>
}

/// Reads and parses a standings document from disk.
///
/// Failures here are the "unavailable" state the rendering layer shows;
/// the ranking board itself never sees an invalid input.
pub fn load_standings(path: &Path) -> Result<Standings, FeedError> {
    let raw = fs::read_to_string(path)?;
    parse_standings(&raw)
}

/// Parses a standings document from its JSON text.
pub fn parse_standings(raw: &str) -> Result<Standings, FeedError> {
    let dto: StandingsDto = serde_json::from_str(raw)?;

    if dto.players.is_empty() {
        // Valid input, but a live round always carries participants.
        warn!("standings feed for '{}' has no players", dto.tournament);
    }

    let players = dto.players.into_iter().map(PlayerResult::from).collect::<Vec<_>>();
    info!("loaded {} players for '{}'", players.len(), dto.tournament);

    Ok(Standings {
        tournament: dto.tournament,
        players
    })
}

#[cfg(test)]
mod tests {
    use crate::feed::{parse_standings, FeedError};

    #[test]
    fn test_parse_points_feed() {
        let raw = r#"{
            "tournament": "Candidates 2026",
            "players": [
                { "name": "Ann", "rating": 2710, "ratingDiff": 4, "score": 3.5, "played": 5 },
                { "name": "Bob", "rating": 2695, "ratingDiff": -2, "score": 3.0, "played": 5 }
            ]
        }"#;

        let standings = parse_standings(raw).unwrap();
        assert_eq!(standings.tournament, "Candidates 2026");
        assert_eq!(standings.players.len(), 2);
        assert_eq!(standings.players[0].player.name, "Ann");
        assert_eq!(standings.players[0].player.rating, Some(2710));
        assert_eq!(standings.players[0].rating_diff, Some(4));
        assert_eq!(standings.players[0].score, Some(3.5));
        assert_eq!(standings.players[0].played, 5);
    }

    #[test]
    fn test_parse_defaults_optional_fields() {
        let raw = r#"{
            "tournament": "Open Blitz",
            "players": [{ "name": "Cid" }]
        }"#;

        let standings = parse_standings(raw).unwrap();
        let row = &standings.players[0];
        assert_eq!(row.player.rating, None);
        assert_eq!(row.rating_diff, None);
        assert_eq!(row.score, None);
        assert_eq!(row.played, 0);
    }

    #[test]
    fn test_parse_empty_player_list_is_valid() {
        let raw = r#"{ "tournament": "Pre-round", "players": [] }"#;
        let standings = parse_standings(raw).unwrap();
        assert!(standings.players.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        let result = parse_standings("{ not json");
        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }
}
