use crate::types::{GameEvent, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnSnapshot {
    pub row: u8,
    pub col: u8,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub size: u8,
    /// Row-major tiles, `size * size` entries
    pub board: Vec<Tile>,
    pub score: u64,
    pub max_tile: Tile,
    pub moves: u32,
    pub won: bool,
    pub lost: bool,
    pub last_spawn: Option<SpawnSnapshot>,
    pub last_event: Option<GameEvent>,
}

impl GameSnapshot {
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        let n = self.size as usize;
        if row >= n || col >= n {
            return None;
        }
        self.board.get(row * n + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.board.chunks(self.size.max(1) as usize)
    }
}
