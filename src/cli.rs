//! Command-line interface for the noughts binary.

use clap::Parser;

/// Tic-tac-toe in the terminal, optionally against an NPC opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with seedable NPC opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play against the NPC (it takes O).
    #[arg(long)]
    pub npc: bool,

    /// NPC difficulty: easy, medium, or hard.
    ///
    /// Unrecognized values fall back to easy.
    #[arg(long, default_value = "easy")]
    pub difficulty: String,

    /// Fixed RNG seed for reproducible NPC play.
    #[arg(long)]
    pub seed: Option<u64>,
}
