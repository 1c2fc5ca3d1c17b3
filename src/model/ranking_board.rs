use tracing::debug;

use crate::model::{
    compare,
    structures::{
        player_result::{Player, PlayerResult},
        score_mode::ScoreMode,
        sort_key::SortKey
    }
};

/// Read-only view of the board handed to observers and the rendering
/// collaborator after each recompute.
#[derive(Debug, Clone, Copy)]
pub struct RankingState<'a> {
    pub order: &'a [PlayerResult],
    pub active_key: SortKey,
    pub descending: bool,
    pub score_mode: ScoreMode
}

/// Receives a notification whenever the display order is recomputed.
/// Replaces the reactive rebuild of the original screen with an explicit
/// callback seam, so the board stays independent of any UI toolkit.
pub trait StandingsObserver {
    fn standings_changed(&self, state: RankingState<'_>);
}

pub type SelectionHandler = Box<dyn Fn(&Player)>;

/// Sortable player ranking list for one broadcast round.
///
/// Owns the current display order plus the active sort key and direction.
/// The `descending` flag literally reverses the already-sorted sequence:
/// rating and score sort best-first in their natural direction, name sorts
/// A→Z, so the flag means "lowest first" for rating/score but "Z→A" for
/// name. The header arrow must reflect the flag as-is, independent of the
/// active key.
pub struct RankingBoard {
    order: Vec<PlayerResult>,
    active_key: SortKey,
    descending: bool,
    score_mode: ScoreMode,
    observers: Vec<Box<dyn StandingsObserver>>,
    selection_handler: Option<SelectionHandler>
}

impl RankingBoard {
    /// Builds a board from a freshly loaded player list.
    ///
    /// Classifies the score mode from the first row, picks that mode's
    /// default sort key and performs the initial sort with the direction
    /// flag cleared.
    pub fn new(players: Vec<PlayerResult>) -> RankingBoard {
        let score_mode = ScoreMode::classify(&players);

        let mut board = RankingBoard {
            order: players,
            active_key: score_mode.default_sort_key(),
            descending: false,
            score_mode,
            observers: Vec::new(),
            selection_handler: None
        };
        board.resort();

        board
    }

    /// Replaces the player list wholesale, as on a feed refresh.
    /// Re-runs mode classification and the initial sort, then notifies.
    pub fn set_players(&mut self, players: Vec<PlayerResult>) {
        self.order = players;
        self.score_mode = ScoreMode::classify(&self.order);
        self.active_key = self.score_mode.default_sort_key();
        self.descending = false;

        self.resort();
        self.notify();
    }

    /// Applies a header-cell interaction.
    ///
    /// Selecting a new column resets the direction; re-selecting the
    /// active column with `toggle` set flips it. The current order is then
    /// stably re-sorted by the column's natural comparator and reversed
    /// whole when `descending` is set.
    pub fn apply_sort(&mut self, key: SortKey, toggle: bool) {
        if key != self.active_key {
            self.active_key = key;
            self.descending = false;
        } else if toggle {
            self.descending = !self.descending;
        }

        self.resort();
        self.notify();
    }

    /// Registers a rendering collaborator for change notifications.
    pub fn add_observer(&mut self, observer: Box<dyn StandingsObserver>) {
        self.observers.push(observer);
    }

    /// Registers the navigation hook invoked when a row is selected.
    pub fn set_selection_handler(&mut self, handler: SelectionHandler) {
        self.selection_handler = Some(handler);
    }

    /// Resolves a row in the current order and hands the player's identity
    /// to the navigation hook. Out-of-range indices resolve to `None`.
    pub fn select_row(&self, index: usize) -> Option<&Player> {
        let player = self.order.get(index).map(|result| &result.player)?;

        if let Some(handler) = &self.selection_handler {
            handler(player);
        }

        Some(player)
    }

    pub fn order(&self) -> &[PlayerResult] {
        &self.order
    }

    pub fn active_key(&self) -> SortKey {
        self.active_key
    }

    pub fn descending(&self) -> bool {
        self.descending
    }

    pub fn score_mode(&self) -> ScoreMode {
        self.score_mode
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn state(&self) -> RankingState<'_> {
        RankingState {
            order: &self.order,
            active_key: self.active_key,
            descending: self.descending,
            score_mode: self.score_mode
        }
    }

    /// Recomputes the display order: stable sort by the active key's
    /// natural comparator, then a whole-sequence reversal when the
    /// direction flag is set.
    fn resort(&mut self) {
        let key = self.active_key;

        // Vec::sort_by is stable; equal rows keep their relative order.
        self.order.sort_by(|a, b| compare(key, a, b));
        if self.descending {
            self.order.reverse();
        }

        debug!(
            "standings resorted: key={:?} descending={} rows={}",
            self.active_key,
            self.descending,
            self.order.len()
        );
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.standings_changed(self.state());
        }
    }
}
