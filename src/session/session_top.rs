//! Line-oriented command front-end for a move list session.
//!
//! Reads one command per line, routes clicks and undo/redo requests to a
//! `MoveListStore`, and prints the list, highlights or board on request.
//! Problems with a command are reported as `info string` lines and never end
//! the loop; only `quit` (or end of input) does.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::move_list::move_list_store::MoveListStore;
use crate::utils::algebraic::check_board_size;
use crate::utils::move_text::{write_move_text_today, DEFAULT_EVENT_NAME};
use crate::utils::render_board::render_board;
use crate::utils::render_move_list::render_move_list;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub board_files: u8,
    pub board_ranks: u8,
    pub show_board_after_click: bool,
    pub event_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_files: 8,
            board_ranks: 8,
            show_board_after_click: false,
            event_name: DEFAULT_EVENT_NAME.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Apply `--board`, `--files N`, `--ranks N` and `--event NAME` from a command line.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--board" | "-b" => config.show_board_after_click = true,
                "--files" => config.board_files = parse_flag_value("--files", args.next())?,
                "--ranks" => config.board_ranks = parse_flag_value("--ranks", args.next())?,
                "--event" => {
                    config.event_name = args
                        .next()
                        .map(|v| v.as_ref().to_owned())
                        .ok_or("--event needs a value")?;
                }
                other => return Err(format!("unknown argument '{other}'")),
            }
        }

        check_board_size(config.board_files, config.board_ranks)?;
        Ok(config)
    }
}

fn parse_flag_value<S: AsRef<str>>(flag: &str, value: Option<S>) -> Result<u8, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .as_ref()
        .parse::<u8>()
        .map_err(|_| format!("invalid {flag} value '{}'", value.as_ref()))
}

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = SessionState::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    info!("session ended with {} moves", session.store().moves().len());
    Ok(())
}

/// One board session: the move list plus the display settings.
pub struct SessionState {
    store: MoveListStore,
    config: SessionConfig,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: MoveListStore::new(),
            config,
        }
    }

    #[inline]
    pub fn store(&self) -> &MoveListStore {
        &self.store
    }

    /// Handle one command line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!("session command {trimmed:?}");

        match cmd {
            "click" | "square" => match self.handle_click(parts.next(), parts.next()) {
                Ok(()) if self.config.show_board_after_click => self.write_board(out)?,
                Ok(()) => {}
                Err(err) => writeln!(out, "info string {cmd} error: {err}")?,
            },
            "undo" => {
                self.store.undo_move();
            }
            "redo" => {
                self.store.redo_move();
            }
            "reset" => {
                self.store.reset_move_list();
            }
            "refresh" => {
                self.store.update_highlighted_squares();
            }
            "moves" => {
                writeln!(out, "{}", render_move_list(&self.store))?;
            }
            "highlights" => {
                let squares = self.store.highlighted_squares();
                if squares.is_empty() {
                    writeln!(out, "highlighted none")?;
                } else {
                    writeln!(out, "highlighted {}", squares.join(" "))?;
                }
            }
            "board" => self.write_board(out)?,
            "export" => match write_move_text_today(&self.store, &self.config.event_name) {
                Ok(text) => write!(out, "{text}")?,
                Err(err) => writeln!(out, "info string export error: {err}")?,
            },
            "status" => {
                writeln!(
                    out,
                    "moves {} undo {} redo {} empty {}",
                    self.store.moves().len(),
                    self.store.undo_stack().len(),
                    self.store.redo_stack().len(),
                    self.store.is_move_list_empty()
                )?;
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "info string unknown command: {cmd}")?;
            }
        }

        Ok(false)
    }

    fn handle_click(&mut self, cell: Option<&str>, extra: Option<&str>) -> Result<(), String> {
        let cell = cell.ok_or("missing cell")?;
        if extra.is_some() {
            return Err("expected exactly one cell".to_owned());
        }

        self.store.add_square(cell);
        Ok(())
    }

    fn write_board(&self, out: &mut impl Write) -> io::Result<()> {
        match render_board(&self.store, self.config.board_files, self.config.board_ranks) {
            Ok(board) => writeln!(out, "{board}"),
            Err(err) => writeln!(out, "info string board error: {err}"),
        }
    }
}
