//! A tic-tac-toe engine with seedable NPC opponents.
//!
//! The crate is organized leaf-first:
//!
//! - **[`types`]**: `Player`, `Cell`, `Coord`, and `Move` value types
//! - **[`board`]**: the 3×3 grid, mutation, and occupancy queries
//! - **[`rules`]**: pure win/draw evaluation, shared by the game loop
//!   and the search
//! - **[`strategy`]**: the NPC decision procedures — random (easy),
//!   rule-based heuristic (medium), and optimal minimax with alpha-beta
//!   pruning (hard)
//! - **[`game`]**: the controller that alternates turns and drives a
//!   game to a terminal outcome
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, Game, Npc, Outcome};
//!
//! // Optimal play on both sides always ends in a draw.
//! let mut game = Game::new();
//! let mut npc = Npc::new(Difficulty::Hard, None);
//! while game.outcome() == Outcome::InProgress {
//!     game.play_npc(&mut npc)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Draw);
//! # Ok::<(), noughts::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod types;

pub use board::{Board, BoardError};
pub use game::{Game, GameError};
pub use rules::{Outcome, evaluate};
pub use strategy::{Difficulty, Heuristic, MoveStrategy, Npc, Optimal, Random, StrategyError};
pub use types::{Cell, Coord, Move, Player};
