//! Terminal-oriented board renderer with highlighted squares.
//!
//! Draws a grid of square names from `a1` upwards and marks every square the
//! move list currently highlights. Used by the session front-end and tests.

use crate::move_list::move_list_store::MoveListStore;
use crate::utils::algebraic::{check_board_size, parse_square};

const HIGHLIGHTED_MARK: char = '*';
const EMPTY_MARK: char = '·';

/// Render a `files` x `ranks` board, highest rank first.
pub fn render_board(store: &MoveListStore, files: u8, ranks: u8) -> Result<String, String> {
    check_board_size(files, ranks)?;

    // Cells that are not square names or lie off this board are not drawn.
    let marked: Vec<(u8, u8)> = store
        .highlighted_squares()
        .iter()
        .filter_map(|cell| parse_square(cell).ok())
        .filter(|&(file, rank)| file < files && rank < ranks)
        .collect();

    let label_width = rank_label(ranks - 1).len();
    let mut out = String::new();
    push_file_header(&mut out, files, label_width);

    for rank in (0..ranks).rev() {
        let label = rank_label(rank);
        out.push_str(&format!("{label:>label_width$} "));

        for file in 0..files {
            if marked.contains(&(file, rank)) {
                out.push(HIGHLIGHTED_MARK);
            } else {
                out.push(EMPTY_MARK);
            }

            if file + 1 < files {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push_str(&label);
        out.push('\n');
    }

    push_file_header(&mut out, files, label_width);
    out.pop();

    Ok(out)
}

fn rank_label(rank: u8) -> String {
    (u16::from(rank) + 1).to_string()
}

fn push_file_header(out: &mut String, files: u8, label_width: usize) {
    out.push_str(&" ".repeat(label_width + 1));
    let names: Vec<String> = (0..files)
        .map(|file| char::from(b'a' + file).to_string())
        .collect();
    out.push_str(&names.join(" "));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::move_list::move_list_store::MoveListStore;

    #[test]
    fn renders_highlights_for_complete_move() {
        let store = MoveListStore::from_clicks(["a1", "b2"]);
        let board = render_board(&store, 3, 3).expect("3x3 board should render");

        let expected = "  a b c\n3 · · · 3\n2 · * · 2\n1 * · · 1\n  a b c";
        assert_eq!(board, expected);
    }

    #[test]
    fn empty_store_renders_no_marks() {
        let board = render_board(&MoveListStore::new(), 8, 8).expect("8x8 board should render");
        assert!(!board.contains('*'));
        assert_eq!(board.lines().count(), 10);
    }

    #[test]
    fn off_board_cells_are_not_drawn() {
        let store = MoveListStore::from_clicks(["z9"]);
        let board = render_board(&store, 8, 8).expect("8x8 board should render");
        assert!(!board.contains('*'));
    }

    #[test]
    fn non_square_cells_are_not_drawn() {
        let store = MoveListStore::from_clicks(["tower", "b1"]);
        let board = render_board(&store, 2, 1).expect("2x1 board should render");
        assert_eq!(board, "  a b\n1 · * 1\n  a b");
    }

    #[test]
    fn wide_rank_labels_are_padded() {
        let store = MoveListStore::from_clicks(["a10"]);
        let board = render_board(&store, 2, 10).expect("2x10 board should render");
        let mut lines = board.lines();
        assert_eq!(lines.next(), Some("   a b"));
        assert_eq!(lines.next(), Some("10 * · 10"));
        assert_eq!(lines.next(), Some(" 9 · · 9"));
    }

    #[test]
    fn invalid_board_size_is_an_error() {
        assert!(render_board(&MoveListStore::new(), 0, 8).is_err());
    }
}
