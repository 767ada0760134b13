use clap::{Parser, ValueEnum};

/// Which ranker(s) to run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Early-stopping heapsort over the full population
    Heap,
    /// Quickselect then quicksort of the top slice
    Quickselect,
    /// Single pass over a stream with a bounded window
    Online,
    /// All of the above, each on its own copy of the players
    All,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) Ranker to run
    #[arg(short = 'a', long = "algorithm", value_enum, default_value_t = Algorithm::All)]
    pub algorithm: Algorithm,

    /// (optional) Players read between cutoff checkpoints, also the size of the streaming window
    #[arg(short = 'i', long = "interval", default_value_t = 50)]
    pub interval: usize,

    /// (optional) Path to a file where each line is a NAME,LEVEL record
    #[arg(short = 'f', long = "input")]
    pub input: Option<String>,

    /// (optional) Number of random players to generate when no input file is given
    #[arg(short = 'g', long = "generate", default_value_t = 1000)]
    pub generate: usize,

    /// (optional) Seed for generated players
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    pub seed: u64,

    #[arg(short, long)]
    pub verbose: bool,
}
