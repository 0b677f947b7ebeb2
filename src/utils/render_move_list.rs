//! Move list rows for side panels and terminal output.

use crate::move_list::move_list_store::MoveListStore;
use crate::move_list::move_types::FormattedMove;

/// Shown instead of the list while no move has been entered.
pub const EMPTY_MOVE_LIST_MESSAGE: &str = "Ready to play?";

/// Alternating row style, by zero-based row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowParity {
    Even,
    Odd,
}

impl RowParity {
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowParity::Even
        } else {
            RowParity::Odd
        }
    }

    #[inline]
    pub const fn css_class(self) -> &'static str {
        match self {
            RowParity::Even => "even-row",
            RowParity::Odd => "odd-row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub parity: RowParity,
    pub formatted: FormattedMove,
}

pub fn move_rows(store: &MoveListStore) -> Vec<MoveRow> {
    store
        .moves()
        .into_iter()
        .enumerate()
        .map(|(index, formatted)| MoveRow {
            parity: RowParity::from_index(index),
            formatted,
        })
        .collect()
}

/// One line per move (`"1. e2 e4"`), or the placeholder message when empty.
pub fn render_move_list(store: &MoveListStore) -> String {
    if store.is_move_list_empty() {
        return EMPTY_MOVE_LIST_MESSAGE.to_owned();
    }

    move_rows(store)
        .iter()
        .map(|row| {
            let mut line = format!("{} {}", row.formatted.move_number, row.formatted.first_cell);
            if !row.formatted.second_cell.is_empty() {
                line.push(' ');
                line.push_str(&row.formatted.second_cell);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
