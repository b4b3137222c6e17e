//! Engine module - board rules: moves, spawns, win and loss
//!
//! The engine owns the board and the spawn RNG. Apart from spawns, every
//! operation is a pure function of the board and a direction.
//!
//! [`Engine::apply_move`] is the single state transition the controller uses.
//! Its ordering is part of the observable contract:
//!
//! 1. Slide the board.
//! 2. Report a win if a 2048 tile exists and the session has not won yet.
//! 3. If nothing moved: report a loss when no move is left, otherwise a no-op.
//!    Nothing is spawned.
//! 4. If something moved: spawn a tile. A failed spawn is reported as a loss.

use arrayvec::ArrayVec;

use crate::board::{Board, MoveResult};
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{Direction, GameEvent, Tile, SPAWN_VALUES, WIN_TILE};

/// A tile placed by [`Engine::spawn_random_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Everything that happened during one [`Engine::apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// The slide changed at least one tile
    pub changed: bool,
    /// Sum of tiles created by merges
    pub merged: u64,
    /// First 2048 of the session
    pub won: bool,
    /// Tile spawned after a legal move
    pub spawned: Option<Spawn>,
    /// `Moved`, `NoOp` or `Lost`
    pub event: GameEvent,
}

impl MoveOutcome {
    /// Events in presentation order: `Won` first, then the move result
    pub fn events(&self) -> ArrayVec<GameEvent, 2> {
        let mut events = ArrayVec::new();
        if self.won {
            events.push(GameEvent::Won);
        }
        events.push(self.event);
        events
    }

    pub fn is_lost(&self) -> bool {
        self.event == GameEvent::Lost
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    rng: SimpleRng,
}

impl Engine {
    /// Create an engine over an empty board
    pub fn new(size: u8, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self::from_board(Board::new(size)?, seed))
    }

    /// Create an engine over a preset board
    pub fn from_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Empty the board, keeping the RNG sequence running
    pub fn reset(&mut self) {
        self.board.clear();
    }

    pub fn move_left(&mut self) -> MoveResult {
        self.board.slide(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveResult {
        self.board.slide(Direction::Right)
    }

    pub fn move_up(&mut self) -> MoveResult {
        self.board.slide(Direction::Up)
    }

    pub fn move_down(&mut self) -> MoveResult {
        self.board.slide(Direction::Down)
    }

    /// Slide the board in `dir`
    pub fn slide(&mut self, dir: Direction) -> MoveResult {
        match dir {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// True iff sliding in `dir` would change the board
    ///
    /// Computed without mutating; equivalent to snapshot, slide, compare.
    pub fn is_legal_move(&self, dir: Direction) -> bool {
        self.board.can_slide(dir)
    }

    /// Place a 2 or a 4 (equal odds) on a uniformly chosen empty cell
    ///
    /// Returns `None` when the board has no empty cell.
    pub fn spawn_random_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_count();
        if empty == 0 {
            return None;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let (row, col) = self.board.empty_cells().nth(pick)?;
        let value = self.rng.choose(&SPAWN_VALUES)?;
        self.board.set(row, col, value);

        Some(Spawn { row, col, value })
    }

    /// A 2048 tile is on the board right now
    pub fn is_winner(&self) -> bool {
        self.board.contains(WIN_TILE)
    }

    /// The board is full and no direction would change it
    pub fn is_loser(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    /// Apply one move: slide, then win check, then loss check or spawn
    ///
    /// `won_before` is the controller's sticky flag; a win is only reported
    /// the first time.
    pub fn apply_move(&mut self, dir: Direction, won_before: bool) -> MoveOutcome {
        let result = self.slide(dir);
        let won = !won_before && self.is_winner();

        let mut outcome = MoveOutcome {
            direction: dir,
            changed: result.changed,
            merged: result.merged,
            won,
            spawned: None,
            event: GameEvent::NoOp,
        };

        if !result.changed {
            if self.is_loser() {
                outcome.event = GameEvent::Lost;
            }
            return outcome;
        }

        match self.spawn_random_tile() {
            Some(spawn) => {
                outcome.spawned = Some(spawn);
                outcome.event = GameEvent::Moved;
            }
            None => outcome.event = GameEvent::Lost,
        }

        outcome
    }
}
