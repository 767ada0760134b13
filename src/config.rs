use crate::args::{Algorithm, Args};
use crate::errors::RankError;
use crate::player::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;

const MAX_GENERATED_LEVEL: usize = 1500;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `algorithm` - Ranker(s) to run
/// * `interval` - Reporting interval and window size for the streaming ranker
/// * `players` - Population to rank, loaded from a file or generated
/// * `verbose` - Bool to determine if debug logging is enabled
///
#[derive(Clone, Debug)]
pub struct Config {
    pub algorithm: Algorithm,
    pub interval: usize,
    pub players: Vec<Player>,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Details
    ///
    /// 1. Rejects a zero reporting interval
    /// 2. Loads players from the input file if one was supplied
    /// 3. Otherwise generates `generate` players from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The interval is zero
    /// * The input file cannot be read
    ///
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        if args.interval == 0 {
            return Err(Box::new(RankError::ConfigError(
                "reporting interval must be positive".to_string(),
            )));
        }

        let players = match &args.input {
            Some(input) => load_players(input)?,
            None => generate_players(args.generate, args.seed),
        };
        log::info!("Ranking {} players", players.len());

        Ok(Config {
            algorithm: args.algorithm,
            interval: args.interval,
            players,
            verbose: args.verbose,
        })
    }
}

/// Reads `NAME,LEVEL` records from `path`.
///
/// Blank lines and lines starting with `#` are skipped. Records that fail to parse
/// are logged and skipped rather than aborting the whole load.
pub fn load_players(path: impl AsRef<Path>) -> Result<Vec<Player>, RankError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_players(&contents))
}

/// Parses every record in `contents`, in line order.
pub fn parse_players(contents: &str) -> Vec<Player> {
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    lines
        .par_iter()
        .filter_map(|(number, line)| match Player::from_record(line) {
            Ok(player) => Some(player),
            Err(e) => {
                log::warn!("Skipping line {}: {}", number, e);
                None
            }
        })
        .collect()
}

/// Generates `count` players with levels uniformly drawn from `1..=1500`.
///
/// The same seed always produces the same players.
pub fn generate_players(count: usize, seed: u64) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| Player::new(format!("PLAYER_{:06}", i), rng.gen_range(1..=MAX_GENERATED_LEVEL)))
        .collect()
}
