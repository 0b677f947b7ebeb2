//! Seeded random session series runner.
//!
//! Run with:
//! `cargo run --release --bin session_replay`
//! `cargo run --release --bin session_replay -- --verbose --games 100 --seed 7`

use clickmove::utils::session_harness::{run_session_series, HarnessConfig, HarnessSeriesConfig};

fn main() -> Result<(), String> {
    env_logger::init();

    let mut config = HarnessSeriesConfig {
        games: 32,
        base_seed: 1234,
        per_game: HarnessConfig {
            actions: 1_000,
            reset_weight: 1,
            ..HarnessConfig::default()
        },
        verbose: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--games" => {
                config.games = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or("--games needs a number")?;
            }
            "--seed" => {
                config.base_seed = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or("--seed needs a number")?;
            }
            "--actions" => {
                config.per_game.actions = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or("--actions needs a number")?;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    let stats = run_session_series(&config)?;
    println!("{}", stats.report());
    Ok(())
}
