//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Key codes
//! are a presentation concern; the engine only ever sees abstract actions.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
