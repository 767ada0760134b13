use std::process;

use clap::Parser;
use leaderboard::args::Args;
use leaderboard::Config;

fn main() {
    let args = Args::parse();

    // --verbose raises the default level, RUST_LOG still wins
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        log::error!("Could not build configuration: {err}");
        process::exit(1);
    });

    if let Err(e) = leaderboard::run(config) {
        log::error!("Fatal Error: {e}");
        process::exit(1);
    }
}
