//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, controller, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is square. Its side length is chosen once at session start:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Classic 4x4 game |
//! | `MIN_BOARD_SIZE` | 2 | Smallest playable board |
//! | `MAX_BOARD_SIZE` | 16 | Upper bound for stack-allocated line buffers |
//!
//! # Tiles
//!
//! A [`Tile`] is `0` for an empty cell, otherwise a power of two between
//! `2` and [`MAX_TILE`]. Reaching [`WIN_TILE`] wins the game; play may
//! continue afterwards. Tiles at [`MAX_TILE`] no longer merge, so a move can
//! never overflow a `u32`.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE, WIN_TILE};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Quit.direction(), None);
//!
//! assert_eq!(Direction::from_str("D"), Some(Direction::Down));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// A single cell value. `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// Default board side length (4x4)
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 16;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Largest tile value; two of these do not merge
pub const MAX_TILE: Tile = 1 << 30;

/// Number of random tiles placed on an empty board at session start
pub const START_TILES: usize = 2;

/// Values a spawned tile can take, drawn with equal probability.
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Returns true for `0` and for powers of two in `2..=MAX_TILE`.
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// assert!(!is_valid_tile(1 << 31));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Returns true when two neighbouring tiles combine into one.
///
/// ```
/// use tui_2048_types::{can_merge, MAX_TILE};
///
/// assert!(can_merge(2, 2));
/// assert!(!can_merge(2, 4));
/// assert!(!can_merge(0, 0));
/// assert!(!can_merge(MAX_TILE, MAX_TILE));
/// ```
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// The four slide directions
///
/// A direction is a pure transform selector: it names which way tiles travel.
/// - **Left** / **Right**: rows are collapsed
/// - **Up** / **Down**: columns are collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Abstract commands accepted by the game controller
///
/// Key codes are mapped onto these by the input layer. Only the move
/// actions reach the engine; `Quit` is handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// End the session
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
    /// assert_eq!(GameAction::from_str("quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Quit => "quit",
        }
    }

    /// The slide direction for move actions, `None` otherwise
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Quit => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

/// Events surfaced to the presentation layer after a command
///
/// A single move can produce two events: `Won` is always reported first,
/// followed by exactly one of `Moved`, `NoOp` or `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Tiles moved and a new tile was spawned
    Moved,
    /// The move changed nothing; no tile was spawned
    NoOp,
    /// A 2048 tile appeared for the first time this session
    Won,
    /// No legal move remains
    Lost,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Moved => "moved",
            GameEvent::NoOp => "noop",
            GameEvent::Won => "won",
            GameEvent::Lost => "lost",
        }
    }
}
