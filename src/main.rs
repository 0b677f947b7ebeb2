use clickmove::session::session_top::{run_stdio_loop, SessionConfig};

fn main() {
    env_logger::init();

    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("clickmove: {err}");
            eprintln!("usage: clickmove [--board] [--files N] [--ranks N] [--event NAME]");
            std::process::exit(2);
        }
    };

    if let Err(err) = run_stdio_loop(config) {
        eprintln!("clickmove: {err}");
        std::process::exit(1);
    }
}
