//! Move history engine for two-click move entry.
//!
//! `MoveListStore` owns the ordered move pairs, the undo/redo stacks and the
//! highlighted squares. Every click goes through `add_square`; `undo_move` and
//! `redo_move` walk the history one click at a time. The formatted `moves()`
//! view is derived on read and never stored.

use log::{debug, trace};

use crate::move_list::move_types::{FormattedMove, MovePair, RedoRecord, UndoRecord};

/// Move history plus linear undo/redo state for one board session.
#[derive(Debug, Clone, Default)]
pub struct MoveListStore {
    move_history: Vec<MovePair>,
    undo_stack: Vec<UndoRecord>,
    redo_stack: Vec<RedoRecord>,
    highlighted_squares: Vec<String>,
    version: u64,
}

impl MoveListStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by feeding each cell through `add_square`.
    pub fn from_clicks<I, S>(clicks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for cell in clicks {
            store.add_square(cell);
        }
        store
    }

    /// Record one click.
    ///
    /// Completes the last pair if it is pending, otherwise starts a new pair.
    /// Any pending redo timeline is discarded first.
    pub fn add_square(&mut self, cell: impl Into<String>) {
        let cell = cell.into();

        if !self.redo_stack.is_empty() {
            trace!("add_square discarding {} redo records", self.redo_stack.len());
            self.redo_stack.clear();
        }

        let history_len = self.move_history.len();
        match self.move_history.last_mut() {
            Some(last) if last.is_pending() => {
                debug!("add_square completes move {history_len} with {cell:?}");
                last.second_cell = cell;
            }
            _ => {
                debug!("add_square starts move {} with {cell:?}", history_len + 1);
                self.move_history.push(MovePair::pending(cell));
            }
        }

        self.version = self.version.wrapping_add(1);
        self.update_highlighted_squares();
    }

    /// Step back one click.
    ///
    /// A complete last pair loses its second cell (recorded on the redo stack).
    /// A pending last pair is removed and recorded on both stacks.
    /// Highlighted squares are left as they were.
    pub fn undo_move(&mut self) {
        let history_len = self.move_history.len();
        let Some(last) = self.move_history.last_mut() else {
            trace!("undo_move on empty history ignored");
            return;
        };

        if last.is_complete() {
            self.redo_stack.push(FormattedMove::from_pair(history_len, last));
            debug!(
                "undo_move clears second cell {:?} of move {history_len}",
                last.second_cell
            );
            last.second_cell.clear();
        } else if let Some(removed) = self.move_history.pop() {
            let record =
                FormattedMove::from_pair(history_len, &MovePair::pending(removed.first_cell));
            debug!("undo_move removes pending move {history_len} ({:?})", record.first_cell);
            self.undo_stack.push(record.clone());
            self.redo_stack.push(record);
        }

        self.version = self.version.wrapping_add(1);
    }

    /// Re-apply the most recently undone click.
    ///
    /// Highlighted squares are left as they were.
    pub fn redo_move(&mut self) {
        let Some(record) = self.redo_stack.pop() else {
            trace!("redo_move with empty redo stack ignored");
            return;
        };

        match self.move_history.last_mut() {
            Some(last) if last.is_pending() => {
                debug!("redo_move restores second cell {:?}", record.second_cell);
                last.second_cell = record.second_cell.clone();
            }
            _ => {
                debug!(
                    "redo_move re-adds move {:?} {:?}",
                    record.first_cell, record.second_cell
                );
                self.move_history.push(record.to_pair());
            }
        }

        self.undo_stack.push(FormattedMove::from_pair(
            self.move_history.len(),
            &record.to_pair(),
        ));
        self.version = self.version.wrapping_add(1);
    }

    /// Drop all history, both stacks and the highlights.
    pub fn reset_move_list(&mut self) {
        let had_state = !self.move_history.is_empty()
            || !self.undo_stack.is_empty()
            || !self.redo_stack.is_empty()
            || !self.highlighted_squares.is_empty();

        self.move_history.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.highlighted_squares.clear();

        if had_state {
            debug!("reset_move_list cleared session state");
            self.version = self.version.wrapping_add(1);
        }
    }

    /// Recompute the highlighted squares from the last formatted move.
    ///
    /// Pending last move highlights its first cell, a complete one highlights
    /// both cells, an empty history highlights nothing.
    pub fn update_highlighted_squares(&mut self) {
        self.highlighted_squares.clear();

        if let Some(last) = self.last_move() {
            if !last.first_cell.is_empty() {
                self.highlighted_squares.push(last.first_cell);
                if !last.second_cell.is_empty() {
                    self.highlighted_squares.push(last.second_cell);
                }
            }
        }

        trace!("highlighted squares now {:?}", self.highlighted_squares);
    }

    /// Formatted view of the whole history, one row per pair.
    pub fn moves(&self) -> Vec<FormattedMove> {
        self.move_history
            .iter()
            .enumerate()
            .map(|(index, pair)| FormattedMove::from_pair(index + 1, pair))
            .collect()
    }

    /// Formatted view of the last pair only.
    pub fn last_move(&self) -> Option<FormattedMove> {
        self.move_history
            .last()
            .map(|pair| FormattedMove::from_pair(self.move_history.len(), pair))
    }

    #[inline]
    pub fn is_move_list_empty(&self) -> bool {
        self.move_history.is_empty()
    }

    #[inline]
    pub fn highlighted_squares(&self) -> &[String] {
        &self.highlighted_squares
    }

    #[inline]
    pub fn is_highlighted(&self, cell: &str) -> bool {
        self.highlighted_squares.iter().any(|square| square == cell)
    }

    #[inline]
    pub fn move_history(&self) -> &[MovePair] {
        &self.move_history
    }

    #[inline]
    pub fn undo_stack(&self) -> &[UndoRecord] {
        &self.undo_stack
    }

    #[inline]
    pub fn redo_stack(&self) -> &[RedoRecord] {
        &self.redo_stack
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Counter bumped by every call that changed the store.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::MoveListStore;
    use crate::move_list::move_types::{FormattedMove, MovePair};

    fn row(number: &str, first: &str, second: &str) -> FormattedMove {
        FormattedMove {
            move_number: number.to_owned(),
            first_cell: first.to_owned(),
            second_cell: second.to_owned(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = MoveListStore::new();
        assert!(store.is_move_list_empty());
        assert!(store.moves().is_empty());
        assert!(store.highlighted_squares().is_empty());
        assert!(store.undo_stack().is_empty());
        assert!(store.redo_stack().is_empty());
    }

    #[test]
    fn single_click_highlights_first_cell() {
        let mut store = MoveListStore::new();
        store.add_square("a1");

        assert_eq!(store.moves(), vec![row("1.", "a1", "")]);
        assert_eq!(store.highlighted_squares(), ["a1"]);
        assert!(!store.is_move_list_empty());
    }

    #[test]
    fn two_clicks_complete_a_move_and_highlight_both() {
        let store = MoveListStore::from_clicks(["a1", "a2"]);

        assert_eq!(store.moves(), vec![row("1.", "a1", "a2")]);
        assert_eq!(store.highlighted_squares(), ["a1", "a2"]);
    }

    #[test]
    fn third_click_starts_new_pending_move() {
        let store = MoveListStore::from_clicks(["a1", "a2", "b1"]);

        assert_eq!(
            store.moves(),
            vec![row("1.", "a1", "a2"), row("2.", "b1", "")]
        );
        assert_eq!(store.highlighted_squares(), ["b1"]);
    }

    #[test]
    fn move_count_is_half_the_clicks_rounded_up() {
        let cells = ["a1", "a2", "b1", "b2", "c1", "c2", "d1"];
        for clicks in 0..=cells.len() {
            let store = MoveListStore::from_clicks(cells[..clicks].iter().copied());
            let moves = store.moves();
            assert_eq!(moves.len(), clicks.div_ceil(2));
            for earlier in moves.iter().take(moves.len().saturating_sub(1)) {
                assert!(!earlier.second_cell.is_empty());
            }
        }
    }

    #[test]
    fn duplicate_cells_are_accepted() {
        let store = MoveListStore::from_clicks(["e4", "e4", "e4"]);
        assert_eq!(store.moves(), vec![row("1.", "e4", "e4"), row("2.", "e4", "")]);
    }

    #[test]
    fn undo_of_complete_move_strips_second_cell() {
        let mut store = MoveListStore::from_clicks(["e2", "e4"]);
        store.undo_move();

        assert_eq!(store.move_history(), [MovePair::pending("e2")]);
        assert_eq!(store.redo_stack(), [row("1.", "e2", "e4")]);
        assert!(store.undo_stack().is_empty());
    }

    #[test]
    fn undo_of_pending_move_removes_it_and_records_on_both_stacks() {
        let mut store = MoveListStore::from_clicks(["e2", "e4", "g1"]);
        store.undo_move();

        assert_eq!(store.move_history(), [MovePair::new("e2", "e4")]);
        assert_eq!(store.undo_stack(), [row("2.", "g1", "")]);
        assert_eq!(store.redo_stack(), [row("2.", "g1", "")]);
    }

    #[test]
    fn undo_then_redo_restores_moves_after_any_click_count() {
        let cells = ["a1", "a2", "b1", "b2", "c1"];
        for clicks in 1..=cells.len() {
            let mut store = MoveListStore::from_clicks(cells[..clicks].iter().copied());
            let before = store.moves();
            store.undo_move();
            assert_ne!(store.moves(), before);
            store.redo_move();
            assert_eq!(store.moves(), before, "round trip after {clicks} clicks");
        }
    }

    #[test]
    fn undo_all_then_redo_all_replays_in_order() {
        let mut store = MoveListStore::from_clicks(["a1", "a2", "b1"]);
        let before = store.moves();

        for _ in 0..3 {
            store.undo_move();
        }
        assert!(store.is_move_list_empty());
        assert_eq!(store.redo_stack().len(), 3);

        for _ in 0..3 {
            store.redo_move();
        }
        assert_eq!(store.moves(), before);
        assert!(!store.can_redo());
    }

    #[test]
    fn redo_pushes_record_with_current_history_length() {
        let mut store = MoveListStore::from_clicks(["a1", "a2", "b1"]);
        store.undo_move();
        store.redo_move();

        assert_eq!(store.undo_stack().last(), Some(&row("2.", "b1", "")));
    }

    #[test]
    fn add_square_discards_redo_timeline() {
        let mut store = MoveListStore::from_clicks(["a1", "a2"]);
        store.undo_move();
        assert!(store.can_redo());

        store.add_square("h8");
        assert!(store.redo_stack().is_empty());

        let before = store.moves();
        store.redo_move();
        assert_eq!(store.moves(), before);
        assert_eq!(store.moves(), vec![row("1.", "a1", "h8")]);
    }

    #[test]
    fn undo_and_redo_on_empty_state_are_no_ops() {
        let mut store = MoveListStore::new();
        store.undo_move();
        store.redo_move();

        assert!(store.is_move_list_empty());
        assert!(store.undo_stack().is_empty());
        assert!(store.redo_stack().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn redo_without_undo_leaves_history_untouched() {
        let mut store = MoveListStore::from_clicks(["a1", "a2"]);
        let version = store.version();
        store.redo_move();

        assert_eq!(store.moves(), vec![row("1.", "a1", "a2")]);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut store = MoveListStore::from_clicks(["a1", "a2", "b1"]);
        store.undo_move();
        store.undo_move();

        store.reset_move_list();
        assert!(store.is_move_list_empty());
        assert!(store.moves().is_empty());
        assert!(store.highlighted_squares().is_empty());
        assert!(store.undo_stack().is_empty());
        assert!(store.redo_stack().is_empty());

        let version = store.version();
        store.reset_move_list();
        assert!(store.is_move_list_empty());
        assert_eq!(store.version(), version);
    }

    // Undo and redo leave highlights stale; only clicks and explicit
    // `update_highlighted_squares` calls recompute them.
    #[test]
    fn undo_and_redo_do_not_recompute_highlights() {
        let mut store = MoveListStore::from_clicks(["a1", "a2"]);
        assert_eq!(store.highlighted_squares(), ["a1", "a2"]);

        store.undo_move();
        assert_eq!(store.highlighted_squares(), ["a1", "a2"]);

        store.update_highlighted_squares();
        assert_eq!(store.highlighted_squares(), ["a1"]);

        store.redo_move();
        assert_eq!(store.highlighted_squares(), ["a1"]);

        store.update_highlighted_squares();
        assert_eq!(store.highlighted_squares(), ["a1", "a2"]);
    }

    #[test]
    fn update_highlights_is_repeatable() {
        let mut store = MoveListStore::from_clicks(["c3", "d4", "e5"]);
        store.update_highlighted_squares();
        let first = store.highlighted_squares().to_vec();
        store.update_highlighted_squares();
        assert_eq!(store.highlighted_squares(), first.as_slice());
        assert!(store.is_highlighted("e5"));
        assert!(!store.is_highlighted("c3"));
    }

    #[test]
    fn empty_first_cell_highlights_nothing() {
        let mut store = MoveListStore::new();
        store.add_square("");
        assert!(store.highlighted_squares().is_empty());

        store.add_square("b2");
        assert_eq!(store.moves(), vec![row("1.", "", "b2")]);
        assert!(store.highlighted_squares().is_empty());
    }

    #[test]
    fn version_moves_with_every_change() {
        let mut store = MoveListStore::new();
        store.add_square("a1");
        assert_eq!(store.version(), 1);
        store.undo_move();
        assert_eq!(store.version(), 2);
        store.redo_move();
        assert_eq!(store.version(), 3);
    }
}
