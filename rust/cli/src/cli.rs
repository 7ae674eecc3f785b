//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "texasduel",
    version,
    about = "Heads-up Texas duel against a computer opponent"
)]
pub struct TexasDuelCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the computer on the terminal
    Play {
        /// Number of hands to play
        #[arg(long, default_value_t = 1)]
        hands: u32,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Chips each side starts with
        #[arg(long)]
        starting_chips: Option<u32>,
        /// Computer policy name
        #[arg(long)]
        policy: Option<String>,
    },
    /// Deal one hand and show both hole cards and the board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate 5 to 7 cards, e.g. `eval As Kd 10h 9c 2s`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
