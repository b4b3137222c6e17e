//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders into a simple
//! framebuffer that is then flushed to a crossterm backend, diffing frames so
//! that a move only rewrites the tiles that changed.
//!
//! The view only reads [`core::GameSnapshot`]; nothing here can mutate a
//! session, so a failed or skipped frame never corrupts game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
