use std::cmp::Ordering;

use crate::model::structures::{player_result::PlayerResult, sort_key::SortKey};

pub mod ranking_board;
pub mod structures;

/// Compares two rows in the natural direction of `key`, before any
/// whole-sequence reversal is applied.
///
/// Natural direction is asymmetric on purpose: name orders A→Z, while
/// rating and score order best-first, so a freshly sorted table always
/// leads with the strongest players.
pub fn compare(key: SortKey, a: &PlayerResult, b: &PlayerResult) -> Ordering {
    match key {
        SortKey::ByName => by_name(a, b),
        SortKey::ByRating => by_rating(a, b),
        SortKey::ByScore => by_score(a, b)
    }
}

fn by_name(a: &PlayerResult, b: &PlayerResult) -> Ordering {
    a.player.name.cmp(&b.player.name)
}

/// Higher rating first; unrated players sort after everyone rated and
/// compare equal among themselves (stability decides their order).
fn by_rating(a: &PlayerResult, b: &PlayerResult) -> Ordering {
    match (a.player.rating, b.player.rating) {
        (Some(ra), Some(rb)) => rb.cmp(&ra),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}

/// Higher score first; equal scores break by fewer games played.
/// Rows without a score sort after every scored row.
fn by_score(a: &PlayerResult, b: &PlayerResult) -> Ordering {
    match (a.score, b.score) {
        (Some(sa), Some(sb)) => sb.total_cmp(&sa).then_with(|| a.played.cmp(&b.played)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::{
        model::{compare, structures::sort_key::SortKey},
        utils::test_utils::generate_player_result
    };

    #[test]
    fn test_name_is_lexicographic_ascending() {
        let ann = generate_player_result("Ann", None, None, 0);
        let bob = generate_player_result("Bob", None, None, 0);

        assert_eq!(compare(SortKey::ByName, &ann, &bob), Ordering::Less);
        assert_eq!(compare(SortKey::ByName, &bob, &ann), Ordering::Greater);
        assert_eq!(compare(SortKey::ByName, &ann, &ann), Ordering::Equal);
    }

    #[test]
    fn test_rating_natural_order_is_highest_first() {
        let strong = generate_player_result("Ann", Some(2700), None, 0);
        let weak = generate_player_result("Bob", Some(2100), None, 0);

        assert_eq!(compare(SortKey::ByRating, &strong, &weak), Ordering::Less);
    }

    #[test]
    fn test_unrated_sorts_after_rated() {
        let rated = generate_player_result("Bob", Some(1500), None, 3);
        let unrated = generate_player_result("Ann", None, None, 5);

        assert_eq!(compare(SortKey::ByRating, &rated, &unrated), Ordering::Less);
        assert_eq!(compare(SortKey::ByRating, &unrated, &rated), Ordering::Greater);
    }

    #[test]
    fn test_two_unrated_compare_equal() {
        // Name must not leak in as a hidden tie-break; stability governs.
        let a = generate_player_result("Zed", None, None, 0);
        let b = generate_player_result("Ann", None, None, 0);

        assert_eq!(compare(SortKey::ByRating, &a, &b), Ordering::Equal);
    }

    #[test]
    fn test_score_natural_order_is_highest_first() {
        let leader = generate_player_result("C", None, Some(3.0), 5);
        let chaser = generate_player_result("A", None, Some(2.5), 4);

        assert_eq!(compare(SortKey::ByScore, &leader, &chaser), Ordering::Less);
    }

    #[test]
    fn test_equal_scores_break_by_fewer_games() {
        let busy = generate_player_result("A", None, Some(2.5), 4);
        let rested = generate_player_result("B", None, Some(2.5), 2);

        assert_eq!(compare(SortKey::ByScore, &rested, &busy), Ordering::Less);
        assert_eq!(compare(SortKey::ByScore, &busy, &rested), Ordering::Greater);
    }

    #[test]
    fn test_unscored_sorts_after_scored() {
        let scored = generate_player_result("A", None, Some(0.5), 1);
        let unscored = generate_player_result("B", None, None, 1);

        assert_eq!(compare(SortKey::ByScore, &scored, &unscored), Ordering::Less);
        assert_eq!(compare(SortKey::ByScore, &unscored, &scored), Ordering::Greater);
        assert_eq!(compare(SortKey::ByScore, &unscored, &unscored), Ordering::Equal);
    }
}
