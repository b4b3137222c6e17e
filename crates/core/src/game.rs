//! Game module - the session controller
//!
//! [`Game`] wraps one [`Engine`] and the session flags. It turns abstract
//! [`GameAction`]s into engine moves and keeps the two flags apart:
//!
//! - `won` is sticky: set the first time a 2048 appears, never cleared
//!   until restart, even if that tile is merged away later.
//! - `lost` is transient: recomputed from every move attempt.
//!
//! Every mutating call takes `&mut self`, so one move (including its spawn)
//! always completes before the next command is looked at.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::engine::{Engine, MoveOutcome};
use crate::error::ConfigError;
use crate::snapshot::{GameSnapshot, SpawnSnapshot};
use crate::types::{GameAction, GameEvent, Tile, START_TILES};

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    engine: Engine,
    won: bool,
    lost: bool,
    started: bool,
    /// Legal moves applied this session.
    moves: u32,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    last_outcome: Option<MoveOutcome>,
}

impl Game {
    /// Create a session with an empty board. Call [`Game::start`] to place
    /// the opening tiles.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = Engine::new(config.size, config.seed)?;
        Ok(Self::with_engine(config, engine))
    }

    /// Create a session over a preset board (already started, no tiles added)
    ///
    /// `won` starts unset even if the board already holds a 2048, so the
    /// first move attempt announces the win like any other.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let config = GameConfig {
            size: board.size() as u8,
            seed,
        };
        let mut game = Self::with_engine(config, Engine::from_board(board, seed));
        game.started = true;
        game.lost = game.engine.is_loser();
        game
    }

    fn with_engine(config: GameConfig, engine: Engine) -> Self {
        Self {
            config,
            engine,
            won: false,
            lost: false,
            started: false,
            moves: 0,
            episode_id: 0,
            last_outcome: None,
        }
    }

    /// Place the opening tiles. Has no effect once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..START_TILES {
            self.engine.spawn_random_tile();
        }
        self.lost = self.engine.is_loser();
        info!(
            size = self.config.size,
            episode = self.episode_id,
            "session started"
        );
    }

    /// Throw the current board away and start again
    ///
    /// The spawn RNG keeps running, so the new game differs from the last.
    pub fn restart(&mut self) {
        info!(
            episode = self.episode_id,
            score = self.score(),
            moves = self.moves,
            "session restarted"
        );
        self.engine.reset();
        self.won = false;
        self.lost = false;
        self.started = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_outcome = None;
        self.start();
    }

    /// Apply a command
    ///
    /// Move actions run one engine move and return its outcome. Anything else
    /// (quit) returns `None` without touching the board. Commands before
    /// [`Game::start`] are ignored as well.
    pub fn handle_input(&mut self, action: GameAction) -> Option<MoveOutcome> {
        let dir = action.direction()?;
        if !self.started {
            return None;
        }

        let outcome = self.engine.apply_move(dir, self.won);

        if outcome.changed {
            self.moves = self.moves.wrapping_add(1);
        }
        self.lost = outcome.is_lost();
        self.last_outcome = Some(outcome);

        debug!(
            direction = dir.as_str(),
            changed = outcome.changed,
            merged = outcome.merged,
            event = outcome.event.as_str(),
            "move applied"
        );

        if outcome.won {
            self.won = true;
            info!(score = self.score(), moves = self.moves, "reached 2048");
        }
        if self.lost {
            info!(score = self.score(), moves = self.moves, "no moves left");
        }

        Some(outcome)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Sum of all tiles currently on the board
    pub fn score(&self) -> u64 {
        self.engine.board().sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.engine.board().max_tile()
    }

    /// Sticky: true from the first 2048 until restart
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Transient: reflects the most recent move attempt
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.engine.board();

        out.size = board.size() as u8;
        out.board.clear();
        out.board.extend_from_slice(board.cells());
        out.score = self.score();
        out.max_tile = board.max_tile();
        out.moves = self.moves;
        out.won = self.won;
        out.lost = self.lost;
        out.last_spawn = self
            .last_outcome
            .and_then(|o| o.spawned)
            .map(|s| SpawnSnapshot {
                row: s.row as u8,
                col: s.col as u8,
            });
        out.last_event = self.last_outcome.map(|o| o.event);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Flatten the outcome of [`Game::handle_input`] into its events.
pub fn events_of(outcome: Option<MoveOutcome>) -> impl Iterator<Item = GameEvent> {
    outcome.into_iter().flat_map(|o| o.events())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn game(rows: &[[Tile; 4]]) -> Game {
        Game::from_board(Board::from_rows(rows).unwrap(), 12345)
    }

    #[test]
    fn test_new_game_is_empty_until_started() {
        let mut g = Game::new(GameConfig::default()).unwrap();
        assert!(!g.started());
        assert_eq!(g.board().empty_count(), 16);
        assert_eq!(g.handle_input(GameAction::MoveLeft), None);

        g.start();
        assert!(g.started());
        assert_eq!(g.board().empty_count(), 14);
        assert!(!g.is_won());
        assert!(!g.is_lost());
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut g = Game::new(GameConfig::default()).unwrap();
        g.start();
        let board = g.board().clone();
        g.start();
        assert_eq!(g.board(), &board);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let err = Game::new(GameConfig::default().with_size(40)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSize(40));
    }

    #[test]
    fn test_configurable_size() {
        let mut g = Game::new(GameConfig::default().with_size(6)).unwrap();
        g.start();
        assert_eq!(g.board().size(), 6);
        assert_eq!(g.board().empty_count(), 34);
    }

    #[test]
    fn test_quit_does_not_touch_board() {
        let mut g = game(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = g.board().clone();
        assert_eq!(g.handle_input(GameAction::Quit), None);
        assert_eq!(g.board(), &before);
        assert_eq!(g.moves(), 0);
    }

    #[test]
    fn test_score_is_board_sum() {
        let mut g = game(&[[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
        assert_eq!(g.score(), 8);
        let outcome = g.handle_input(GameAction::MoveLeft).unwrap();
        let spawned = outcome.spawned.unwrap().value as u64;
        assert_eq!(g.score(), 8 + spawned);
        assert_eq!(g.moves(), 1);
    }

    #[test]
    fn test_won_is_sticky() {
        let mut g = game(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let outcome = g.handle_input(GameAction::MoveLeft).unwrap();
        assert!(outcome.won);
        assert!(g.is_won());

        // Clear the 2048 tile: the flag stays.
        g.engine.board_mut().set(0, 0, 0);
        let outcome = g.handle_input(GameAction::MoveRight).unwrap();
        assert!(!outcome.won);
        assert!(g.is_won());
    }

    #[test]
    fn test_preset_win_is_announced_on_first_attempt() {
        let mut g = game(&[[2048, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!g.is_won());

        let events: Vec<_> = events_of(g.handle_input(GameAction::MoveLeft)).collect();
        assert_eq!(events, vec![GameEvent::Won, GameEvent::NoOp]);
        assert!(g.is_won());

        let outcome = g.handle_input(GameAction::MoveRight).unwrap();
        assert!(!outcome.won);
    }

    #[test]
    fn test_won_announced_once() {
        let mut g = game(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let first = g.handle_input(GameAction::MoveLeft).unwrap();
        let second = g.handle_input(GameAction::MoveRight).unwrap();
        assert!(first.won);
        assert!(!second.won);
    }

    #[test]
    fn test_lost_is_transient() {
        let stuck = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let mut g = game(&stuck);
        let outcome = g.handle_input(GameAction::MoveDown).unwrap();
        assert_eq!(outcome.event, GameEvent::Lost);
        assert!(g.is_lost());

        // Freeing a cell makes the next attempt non-losing again.
        g.engine.board_mut().set(0, 0, 0);
        let outcome = g.handle_input(GameAction::MoveLeft).unwrap();
        assert_ne!(outcome.event, GameEvent::Lost);
        assert!(!g.is_lost());
    }

    #[test]
    fn test_restart_clears_flags_and_reseeds() {
        let mut g = game(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        g.handle_input(GameAction::MoveLeft);
        assert!(g.is_won());

        g.restart();
        assert!(!g.is_won());
        assert!(!g.is_lost());
        assert_eq!(g.moves(), 0);
        assert_eq!(g.episode_id(), 1);
        assert_eq!(g.board().empty_count(), 14);
        assert!(g.last_outcome().is_none());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut g = game(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        g.handle_input(GameAction::MoveLeft);
        let snap = g.snapshot();

        assert_eq!(snap.size, 4);
        assert_eq!(snap.board.len(), 16);
        assert_eq!(snap.tile(0, 0), Some(4));
        assert_eq!(snap.score, g.score());
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.last_event, Some(GameEvent::Moved));
        let spawn = snap.last_spawn.unwrap();
        assert_ne!(
            snap.tile(spawn.row as usize, spawn.col as usize),
            Some(0)
        );
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let g = game(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut snap = GameSnapshot::default();
        g.snapshot_into(&mut snap);
        g.snapshot_into(&mut snap);
        assert_eq!(snap.board.len(), 16);
        assert_eq!(snap.rows().count(), 4);
    }

    #[test]
    fn test_events_of() {
        let mut g = game(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let events: Vec<_> = events_of(g.handle_input(GameAction::MoveLeft)).collect();
        assert_eq!(events, vec![GameEvent::Won, GameEvent::Moved]);
        assert_eq!(events_of(g.handle_input(GameAction::Quit)).count(), 0);
    }

    #[test]
    fn test_all_directions_dispatch() {
        for dir in Direction::ALL {
            let mut g = game(&[[0; 4], [0, 2, 0, 0], [0; 4], [0; 4]]);
            let outcome = g.handle_input(GameAction::from(dir)).unwrap();
            assert_eq!(outcome.direction, dir);
            assert!(outcome.changed);
        }
    }
}
