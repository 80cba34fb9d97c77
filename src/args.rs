//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::batak::PersonalityKind;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of players at the table.
    #[arg(short, long, default_value_t = 4)]
    pub players: usize,

    /// Number of games to play.
    #[arg(short, long, default_value_t = 1)]
    pub games: u32,

    /// Seed for shuffling and robot choices.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Play this seat (1-based) from the console.
    #[arg(long, value_name = "SEAT")]
    pub human: Option<usize>,

    /// Robot personalities, one per seat. Defaults to cycling through all four.
    #[arg(short, long, value_delimiter = ',')]
    pub lineup: Vec<PersonalityKind>,

    /// Append each game's scores to this file.
    #[arg(short, long, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Leave undealt any cards that don't divide evenly between players.
    #[arg(long)]
    pub allow_remainder: bool,

    /// Write each game result to stderr as JSON.
    #[arg(long)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Log bids and plays.
    #[arg(short, long)]
    pub verbose: bool,
}
