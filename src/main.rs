//! Interactive tic-tac-toe in the terminal.
//!
//! Turn loop, input parsing, and rendering live here; all game
//! semantics come from the `noughts` library.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{Coord, Difficulty, Game, GameError, Npc, Outcome, Player};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let difficulty = Difficulty::parse_lenient(&cli.difficulty);
    let mut npc = cli.npc.then(|| Npc::new(difficulty, cli.seed));
    if npc.is_some() {
        info!(%difficulty, seed = ?cli.seed, "starting game against the NPC");
    }

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nCurrent board:\n{}", game.board());

        let result = match (npc.as_mut(), game.to_move()) {
            (Some(strategy), Player::O) => {
                println!("NPC ({difficulty} difficulty) is making a move...");
                game.play_npc(strategy).map(|(_, outcome)| outcome)
            }
            _ => {
                print!(
                    "Player {}, enter your move as 'row col' (1-3 each): ",
                    game.to_move()
                );
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    // EOF abandons the game.
                    return Ok(());
                };
                match parse_move(&line?) {
                    Ok(coord) => game.play(coord),
                    Err(reason) => {
                        warn!(reason, "invalid input");
                        println!("Invalid input: {reason}");
                        continue;
                    }
                }
            }
        };

        match result {
            Ok(Outcome::InProgress) => {}
            Ok(outcome) => {
                println!("\nFinal board:\n{}", game.board());
                match outcome {
                    Outcome::Won(Player::X) if npc.is_some() => {
                        println!("Congratulations! You win!");
                    }
                    Outcome::Won(Player::O) if npc.is_some() => {
                        println!("NPC wins! Better luck next time.");
                    }
                    Outcome::Won(player) => println!("Player {player} wins!"),
                    _ => println!("It's a tie!"),
                }
                return Ok(());
            }
            // An illegal move costs nothing; the same player retries.
            Err(err @ GameError::Board(_)) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Parses 1-based "row col" input into a zero-based coordinate.
///
/// Range errors beyond the 1-based shift are left to the board, which
/// reports them as out of bounds.
fn parse_move(line: &str) -> Result<Coord, &'static str> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("enter two numbers separated by a space");
    };
    let row: usize = row.parse().map_err(|_| "rows and columns are numbers")?;
    let col: usize = col.parse().map_err(|_| "rows and columns are numbers")?;
    if row == 0 || col == 0 {
        return Err("rows and columns start at 1");
    }
    Ok(Coord::new(row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_shifts_to_zero_based() {
        assert_eq!(parse_move("1 1"), Ok(Coord::new(0, 0)));
        assert_eq!(parse_move(" 3  2 "), Ok(Coord::new(2, 1)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert!(parse_move("").is_err());
        assert!(parse_move("1").is_err());
        assert!(parse_move("1 2 3").is_err());
        assert!(parse_move("a b").is_err());
        assert!(parse_move("0 2").is_err());
    }

    #[test]
    fn test_parse_move_leaves_range_to_board() {
        // 1-based 4 becomes 0-based 3; the board rejects it.
        assert_eq!(parse_move("4 1"), Ok(Coord::new(3, 0)));
    }
}
