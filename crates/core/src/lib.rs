//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and session logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free moves**: Lines are collapsed in stack buffers
//!
//! # Module Structure
//!
//! - [`line`]: the collapse primitive (compact, merge once, pad)
//! - [`board`]: N x N grid with row/column copy-out and write-back
//! - [`engine`]: moves, spawns, win/loss checks and the move transition
//! - [`game`]: session controller with sticky `won` and transient `lost`
//! - [`rng`]: seedable LCG for spawns
//! - [`snapshot`]: render-ready copy of a session
//! - [`config`]: board size and seed
//!
//! # Game Rules
//!
//! - **Collapse**: tiles slide toward the move direction; equal neighbours
//!   merge once per move, left to right in travel order
//! - **Spawn**: after every move that changes the board, a 2 or a 4 (equal
//!   odds) appears on a random empty cell
//! - **Win**: a 2048 tile; play may continue
//! - **Loss**: full board with no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Game};
//! use tui_2048_types::{GameAction, GameEvent};
//!
//! let board = Board::from_rows::<[u32; 4]>(&[
//!     [0, 0, 0, 0],
//!     [0, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 2],
//! ])
//! .unwrap();
//! let mut game = Game::from_board(board, 7);
//!
//! let outcome = game.handle_input(GameAction::MoveDown).unwrap();
//! assert_eq!(outcome.event, GameEvent::Moved);
//! assert_eq!(game.board().get(3, 1), Some(2));
//! assert_eq!(game.board().get(3, 3), Some(2));
//! assert_eq!(game.board().empty_count(), 13);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveResult};
pub use config::GameConfig;
pub use engine::{Engine, MoveOutcome, Spawn};
pub use error::ConfigError;
pub use game::{events_of, Game};
pub use line::{can_collapse, collapse_line, Collapse, Line};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, SpawnSnapshot};
