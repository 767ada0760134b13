pub mod args;
pub mod config;
pub mod errors;
pub mod heap;
pub mod offline;
pub mod online;
pub mod player;
pub mod progress;
pub mod stream;
pub mod traits;

pub use crate::config::Config;
pub use crate::errors::RankError;
pub use crate::player::{Player, RankingResult};
pub use crate::stream::{PlayerStream, VectorPlayerStream};
pub use crate::traits::FormatElapsed;

use crate::args::Algorithm;
use crate::progress::ProgressStream;
use std::error::Error;

// how many of the highest ranked players to print per result
const NUM_SHOWN: usize = 10;

/*
Runs the ranker(s) selected in the Config. Each ranker gets its own copy of the
players since the offline rankers reorder their input.
 */
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let run_heap = matches!(config.algorithm, Algorithm::Heap | Algorithm::All);
    let run_quickselect = matches!(config.algorithm, Algorithm::Quickselect | Algorithm::All);
    let run_online = matches!(config.algorithm, Algorithm::Online | Algorithm::All);

    if run_heap {
        let mut players = config.players.clone();
        print_result("Heap select", &offline::heap_rank(&mut players));
    }

    if run_quickselect {
        let mut players = config.players.clone();
        print_result("Quickselect", &offline::quick_select_rank(&mut players));
    }

    if run_online {
        let mut stream = ProgressStream::new(VectorPlayerStream::new(config.players.clone()));
        let result = online::rank_incoming(&mut stream, config.interval)?;
        stream.finish();
        print_result(&format!("Online (interval {})", config.interval), &result);
    }

    Ok(())
}

fn print_result(label: &str, result: &RankingResult) {
    println!(
        "\n{}: {} players selected in {}",
        label,
        result.top.len(),
        result.elapsed.format_elapsed()
    );

    for player in result.top.iter().rev().take(NUM_SHOWN) {
        println!("  {}", player);
    }
    if result.top.len() > NUM_SHOWN {
        println!("  ... {} more", result.top.len() - NUM_SHOWN);
    }

    if !result.cutoffs.is_empty() {
        println!("  Cutoffs:");
        for (count, level) in &result.cutoffs {
            println!("    after {:>8} players: {}", count, level);
        }
    }
}
