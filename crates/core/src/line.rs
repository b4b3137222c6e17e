//! Line module - the collapse primitive behind every move
//!
//! A line is one row or column, already oriented so tiles travel toward
//! index 0. Collapsing compacts the non-empty tiles and merges equal
//! neighbours in a single left-to-right pass. A tile produced by a merge is
//! never merged again in the same move, so `[2, 2, 2, 2]` becomes
//! `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`. Tiles at `MAX_TILE` stay as they are.
//!
//! Lines live in stack buffers ([`ArrayVec`]) so moves never allocate.

use arrayvec::ArrayVec;

use crate::types::{can_merge, Tile, MAX_BOARD_SIZE};

/// Maximum number of tiles in a line
pub const MAX_LINE: usize = MAX_BOARD_SIZE as usize;

/// A stack-allocated row or column
pub type Line = ArrayVec<Tile, MAX_LINE>;

/// Result of collapsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapse {
    /// Collapsed tiles, padded with zeros to the input length
    pub line: Line,
    /// Sum of the tiles created by merges
    pub merged: u64,
}

/// Collapse a line toward index 0.
///
/// # Panics
///
/// Panics if `line` is longer than [`MAX_LINE`].
///
/// # Examples
///
/// ```
/// use tui_2048_core::collapse_line;
///
/// assert_eq!(collapse_line(&[2, 2, 2, 2]).line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(collapse_line(&[4, 2, 2, 4]).line.as_slice(), &[4, 4, 4, 0]);
/// assert_eq!(collapse_line(&[0, 2, 0, 2]).merged, 4);
/// ```
pub fn collapse_line(line: &[Tile]) -> Collapse {
    let mut out = Line::new();
    let mut merged: u64 = 0;
    let mut pending: Option<Tile> = None;

    for &tile in line.iter().filter(|&&t| t != 0) {
        match pending {
            Some(prev) if can_merge(prev, tile) => {
                out.push(prev * 2);
                merged += u64::from(prev * 2);
                pending = None;
            }
            Some(prev) => {
                out.push(prev);
                pending = Some(tile);
            }
            None => pending = Some(tile),
        }
    }
    if let Some(prev) = pending {
        out.push(prev);
    }

    while out.len() < line.len() {
        out.push(0);
    }

    Collapse { line: out, merged }
}

/// Check whether collapsing would change the line, without building it.
///
/// A line changes iff a tile sits after an empty cell, or two equal tiles
/// are neighbours once empty cells are ignored.
pub fn can_collapse(line: &[Tile]) -> bool {
    let mut seen_gap = false;
    let mut last: Tile = 0;

    for &tile in line {
        if tile == 0 {
            seen_gap = true;
            continue;
        }
        if seen_gap || can_merge(tile, last) {
            return true;
        }
        last = tile;
    }

    false
}
