//! Value types shared by the move history engine and its presentation helpers.
//!
//! Cells are opaque square identifiers (for example `"e2"`). Nothing in this
//! module validates their format.

/// One logical move: a first click and an optional second click.
///
/// An empty `second_cell` marks the pair as pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovePair {
    pub first_cell: String,
    pub second_cell: String,
}

impl MovePair {
    #[inline]
    pub fn new(first_cell: impl Into<String>, second_cell: impl Into<String>) -> Self {
        Self {
            first_cell: first_cell.into(),
            second_cell: second_cell.into(),
        }
    }

    /// Pair with only its first cell entered.
    #[inline]
    pub fn pending(first_cell: impl Into<String>) -> Self {
        Self::new(first_cell, String::new())
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.second_cell.is_empty()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.second_cell.is_empty()
    }
}

/// Display row derived from a `MovePair`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedMove {
    /// `"<1-based index>."`, for example `"1."`.
    pub move_number: String,
    pub first_cell: String,
    pub second_cell: String,
}

impl FormattedMove {
    #[inline]
    pub fn from_pair(number: usize, pair: &MovePair) -> Self {
        Self {
            move_number: format_move_number(number),
            first_cell: pair.first_cell.clone(),
            second_cell: pair.second_cell.clone(),
        }
    }

    /// Rebuild the pair this row was formatted from. The move number is dropped.
    #[inline]
    pub fn to_pair(&self) -> MovePair {
        MovePair::new(self.first_cell.clone(), self.second_cell.clone())
    }
}

/// Entry pushed on the undo stack. `move_number` is the history length when
/// the record was taken and is informational only.
pub type UndoRecord = FormattedMove;

/// Entry pushed on the redo stack. Same shape and caveat as `UndoRecord`.
pub type RedoRecord = FormattedMove;

#[inline]
pub fn format_move_number(number: usize) -> String {
    format!("{number}.")
}

#[cfg(test)]
mod tests {
    use super::{format_move_number, FormattedMove, MovePair};

    #[test]
    fn pending_pair_has_empty_second_cell() {
        let pair = MovePair::pending("e2");
        assert!(pair.is_pending());
        assert!(!pair.is_complete());
        assert_eq!(pair.second_cell, "");
    }

    #[test]
    fn formatted_move_numbers_are_one_based_with_dot() {
        assert_eq!(format_move_number(1), "1.");
        assert_eq!(format_move_number(12), "12.");

        let row = FormattedMove::from_pair(3, &MovePair::new("g1", "f3"));
        assert_eq!(row.move_number, "3.");
        assert_eq!(row.to_pair(), MovePair::new("g1", "f3"));
    }
}
