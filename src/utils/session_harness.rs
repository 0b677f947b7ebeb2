//! Seeded random click sessions for exercising the move list engine.
//!
//! Drives a `MoveListStore` with weighted random clicks, undos, redos and
//! resets over the squares of a board, and checks the history invariants after
//! every action. A violation ends the session with an error describing the
//! action that broke it.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::move_list::move_list_store::MoveListStore;
use crate::utils::algebraic::board_squares;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Click,
    Undo,
    Redo,
    Reset,
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub actions: u32,
    pub board_files: u8,
    pub board_ranks: u8,
    pub click_weight: u32,
    pub undo_weight: u32,
    pub redo_weight: u32,
    pub reset_weight: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            actions: 200,
            board_files: 8,
            board_ranks: 8,
            click_weight: 6,
            undo_weight: 3,
            redo_weight: 2,
            reset_weight: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HarnessResult {
    pub final_store: MoveListStore,
    pub clicks: u32,
    pub undos: u32,
    pub redos: u32,
    pub resets: u32,
    pub longest_history: usize,
}

#[derive(Debug, Clone)]
pub struct HarnessSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: HarnessConfig,
    pub verbose: bool,
}

impl Default for HarnessSeriesConfig {
    fn default() -> Self {
        Self {
            games: 16,
            base_seed: 0,
            per_game: HarnessConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HarnessSeriesStats {
    pub games: u16,
    pub actions: u64,
    pub clicks: u64,
    pub undos: u64,
    pub redos: u64,
    pub resets: u64,
    pub longest_history: usize,
}

impl HarnessSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} actions={} clicks={} undos={} redos={} resets={} longest_history={}",
            self.games,
            self.actions,
            self.clicks,
            self.undos,
            self.redos,
            self.resets,
            self.longest_history
        )
    }
}

/// Run one seeded session and check invariants after every action.
pub fn run_random_session(seed: u64, config: &HarnessConfig) -> Result<HarnessResult, String> {
    let squares = board_squares(config.board_files, config.board_ranks)?;
    let total_weight = config
        .click_weight
        .saturating_add(config.undo_weight)
        .saturating_add(config.redo_weight)
        .saturating_add(config.reset_weight);
    if config.click_weight == 0 || total_weight == 0 {
        return Err("Harness click weight must be non-zero".to_owned());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = MoveListStore::new();
    let mut result = HarnessResult {
        final_store: MoveListStore::new(),
        clicks: 0,
        undos: 0,
        redos: 0,
        resets: 0,
        longest_history: 0,
    };

    for step in 0..config.actions {
        let action = pick_action(rng.random_range(0..total_weight), config);
        match action {
            SessionAction::Click => {
                let square = &squares[rng.random_range(0..squares.len())];
                store.add_square(square.as_str());
                result.clicks += 1;
                if store.can_redo() {
                    return Err(format!("step {step}: click left redo records behind"));
                }
            }
            SessionAction::Undo => {
                check_undo_redo_round_trip(&store).map_err(|e| format!("step {step}: {e}"))?;
                store.undo_move();
                result.undos += 1;
            }
            SessionAction::Redo => {
                store.redo_move();
                result.redos += 1;
            }
            SessionAction::Reset => {
                store.reset_move_list();
                result.resets += 1;
                if !store.is_move_list_empty()
                    || !store.highlighted_squares().is_empty()
                    || !store.undo_stack().is_empty()
                    || store.can_redo()
                {
                    return Err(format!("step {step}: reset left state behind"));
                }
            }
        }

        check_history_invariants(&store).map_err(|e| format!("step {step} {action:?}: {e}"))?;
        result.longest_history = result.longest_history.max(store.move_history().len());
    }

    result.final_store = store;
    Ok(result)
}

/// Run `games` sessions with seeds derived from `base_seed`.
pub fn run_session_series(config: &HarnessSeriesConfig) -> Result<HarnessSeriesStats, String> {
    let mut stats = HarnessSeriesStats::default();

    for game in 0..config.games {
        let seed = config
            .base_seed
            .wrapping_add(u64::from(game).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let result = run_random_session(seed, &config.per_game)
            .map_err(|e| format!("session {game} (seed {seed}): {e}"))?;

        if config.verbose {
            println!(
                "session {} seed {} moves {} highlighted {:?}",
                game,
                seed,
                result.final_store.move_history().len(),
                result.final_store.highlighted_squares()
            );
        }

        stats.games += 1;
        stats.actions += u64::from(config.per_game.actions);
        stats.clicks += u64::from(result.clicks);
        stats.undos += u64::from(result.undos);
        stats.redos += u64::from(result.redos);
        stats.resets += u64::from(result.resets);
        stats.longest_history = stats.longest_history.max(result.longest_history);
    }

    Ok(stats)
}

/// Pending pairs only at the tail, and `moves()` numbered in step with the history.
pub fn check_history_invariants(store: &MoveListStore) -> Result<(), String> {
    let history = store.move_history();
    if let Some(index) = history
        .iter()
        .take(history.len().saturating_sub(1))
        .position(|pair| pair.is_pending())
    {
        return Err(format!("pending move {} is not the last move", index + 1));
    }

    let moves = store.moves();
    if moves.len() != history.len() {
        return Err(format!(
            "moves view has {} rows for {} pairs",
            moves.len(),
            history.len()
        ));
    }
    for (index, (formatted, pair)) in moves.iter().zip(history).enumerate() {
        if formatted.move_number != format!("{}.", index + 1)
            || formatted.first_cell != pair.first_cell
            || formatted.second_cell != pair.second_cell
        {
            return Err(format!("moves view row {} drifted from history", index + 1));
        }
    }

    if store.is_move_list_empty() != history.is_empty() {
        return Err("is_move_list_empty disagrees with history".to_owned());
    }

    Ok(())
}

/// Undo followed by redo, on a copy, must give back the same `moves()`.
pub fn check_undo_redo_round_trip(store: &MoveListStore) -> Result<(), String> {
    if store.is_move_list_empty() {
        return Ok(());
    }

    let mut probe = store.clone();
    let before = probe.moves();
    probe.undo_move();
    probe.redo_move();
    if probe.moves() != before {
        return Err(format!(
            "undo/redo round trip changed moves from {:?} to {:?}",
            before,
            probe.moves()
        ));
    }
    Ok(())
}

fn pick_action(roll: u32, config: &HarnessConfig) -> SessionAction {
    let mut bound = config.click_weight;
    if roll < bound {
        return SessionAction::Click;
    }
    bound = bound.saturating_add(config.undo_weight);
    if roll < bound {
        return SessionAction::Undo;
    }
    bound = bound.saturating_add(config.redo_weight);
    if roll < bound {
        return SessionAction::Redo;
    }
    SessionAction::Reset
}
