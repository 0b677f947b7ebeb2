//! Crate root module declarations for the click-driven move list.
//!
//! Exposes the move history engine, the text session front-end, and the
//! rendering, movetext and harness helpers so binaries, benches and external
//! UI layers can import stable module paths.

pub mod move_list {
    pub mod move_list_store;
    pub mod move_types;
}

pub mod session {
    pub mod session_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_text;
    pub mod render_board;
    pub mod render_move_list;
    pub mod session_harness;
}
