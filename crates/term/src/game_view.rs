//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Modal drawn over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// First 2048: acknowledged with any key, then play continues
    Won,
    /// No moves left: shows the final score
    Lost,
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(40, 36, 32);
const PANEL_W: u16 = 16;

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for four digits plus padding and a centered row.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Tile size that fits the viewport, shrinking to a compact layout
    /// (5x1) when the preferred one does not fit.
    fn tile_size(&self, n: u16, viewport: Viewport) -> (u16, u16) {
        let fits = |w: u16, h: u16| {
            n.saturating_mul(w).saturating_add(2) <= viewport.width
                && n.saturating_mul(h).saturating_add(2) <= viewport.height
        };
        if fits(self.cell_w, self.cell_h) {
            (self.cell_w, self.cell_h)
        } else {
            (5, 1)
        }
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell {
            ch: ' ',
            style: CellStyle::new(SCREEN_BG, SCREEN_BG),
        });

        let n = snap.size as u16;
        let (tile_w, tile_h) = self.tile_size(n, viewport);
        let frame_w = n * tile_w + 2;
        let frame_h = n * tile_h + 2;

        if frame_w > viewport.width || frame_h > viewport.height {
            let style = CellStyle::default();
            fb.put_str(0, 0, "terminal too small", style);
            return;
        }

        let with_panel = frame_w + 2 + PANEL_W <= viewport.width;
        let total_w = if with_panel { frame_w + 2 + PANEL_W } else { frame_w };
        let start_x = (viewport.width - total_w) / 2;
        let start_y = (viewport.height - frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 190, 180), SCREEN_BG);
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for row in 0..n {
            for col in 0..n {
                let tile = snap.tile(row as usize, col as usize).unwrap_or(0);
                let fresh = snap
                    .last_spawn
                    .is_some_and(|s| s.row as u16 == row && s.col as u16 == col);
                let x = start_x + 1 + col * tile_w;
                let y = start_y + 1 + row * tile_h;
                draw_tile(fb, x, y, tile_w, tile_h, tile, fresh);
            }
        }

        if with_panel {
            draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);
        }

        match overlay {
            Overlay::None => {}
            Overlay::Won => draw_modal(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["YOU WIN!", "any key: keep going"],
                None,
            ),
            Overlay::Lost => draw_modal(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "r: again  q: quit"],
                Some(snap.score),
            ),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }
}

fn draw_tile(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, tile: Tile, fresh: bool) {
    let bg = tile_color(tile);
    let fg = if tile <= 4 {
        Rgb::new(70, 60, 50)
    } else {
        Rgb::new(250, 245, 240)
    };
    let mut style = CellStyle::new(fg, bg);
    if tile >= 128 || fresh {
        style = style.bold();
    }

    fb.fill_rect(x, y, w, h, ' ', style);
    let mid = y + h / 2;
    if tile == 0 {
        fb.put_str_centered(x, mid, w, "·", CellStyle::new(Rgb::new(90, 84, 76), bg));
        return;
    }

    let digits = digit_count(tile as u64);
    let tx = x.saturating_add(w.saturating_sub(digits) / 2);
    fb.put_u64(tx, mid, tile as u64, style);
}

/// Background per tile value; larger tiles get warmer colors.
fn tile_color(tile: Tile) -> Rgb {
    const PALETTE: [Rgb; 12] = [
        BOARD_BG,
        Rgb::new(238, 228, 218), // 2
        Rgb::new(237, 224, 200), // 4
        Rgb::new(242, 177, 121), // 8
        Rgb::new(245, 149, 99),  // 16
        Rgb::new(246, 124, 95),  // 32
        Rgb::new(246, 94, 59),   // 64
        Rgb::new(237, 207, 114), // 128
        Rgb::new(237, 204, 97),  // 256
        Rgb::new(237, 200, 80),  // 512
        Rgb::new(237, 197, 63),  // 1024
        Rgb::new(237, 194, 46),  // 2048
    ];
    if tile == 0 {
        return PALETTE[0];
    }
    let exp = tile.trailing_zeros() as usize;
    PALETTE.get(exp).copied().unwrap_or(Rgb::new(60, 58, 50))
}

fn digit_count(mut v: u64) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
    let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let dim = CellStyle::new(Rgb::new(120, 120, 120), SCREEN_BG);

    let mut y = y;
    fb.put_str(x, y, "SCORE", label);
    fb.put_u64(x, y + 1, snap.score, value);
    y += 3;

    fb.put_str(x, y, "BEST TILE", label);
    fb.put_u64(x, y + 1, snap.max_tile as u64, value);
    y += 3;

    fb.put_str(x, y, "MOVES", label);
    fb.put_u64(x, y + 1, snap.moves as u64, value);
    y += 3;

    if snap.won {
        fb.put_str(x, y, "2048 reached", label);
        y += 2;
    }

    fb.put_str(x, y, "arrows/hjkl", dim);
    fb.put_str(x, y + 1, "q: quit", dim);
}

fn draw_modal(
    fb: &mut FrameBuffer,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[&str],
    score: Option<u64>,
) {
    let text_w = lines.iter().map(|l| l.chars().count() as u16).max().unwrap_or(0);
    let box_w = (text_w + 4).min(frame_w);
    let box_h = lines.len() as u16 + if score.is_some() { 3 } else { 2 };
    let x = frame_x + (frame_w - box_w) / 2;
    let y = frame_y + frame_h.saturating_sub(box_h) / 2;

    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.fill_rect(x, y, box_w, box_h, ' ', style);
    fb.draw_box(x, y, box_w, box_h, style);

    let mut ty = y + 1;
    for line in lines.iter().take(1) {
        fb.put_str_centered(x, ty, box_w, line, style);
        ty += 1;
    }
    if let Some(score) = score {
        let label = "score ";
        let w = label.len() as u16 + digit_count(score);
        let sx = x + box_w.saturating_sub(w) / 2;
        fb.put_str(sx, ty, label, style);
        fb.put_u64(sx + label.len() as u16, ty, score, style);
        ty += 1;
    }
    for line in lines.iter().skip(1) {
        fb.put_str_centered(x, ty, box_w, line, style);
        ty += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Game};

    fn snapshot(rows: &[[Tile; 4]]) -> GameSnapshot {
        Game::from_board(Board::from_rows(rows).unwrap(), 1).snapshot()
    }

    #[test]
    fn tile_colors_follow_exponent() {
        assert_eq!(tile_color(0), BOARD_BG);
        assert_eq!(tile_color(2), Rgb::new(238, 228, 218));
        assert_eq!(tile_color(2048), Rgb::new(237, 194, 46));
        assert_eq!(tile_color(1 << 14), Rgb::new(60, 58, 50));
    }

    #[test]
    fn digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(2048), 4);
    }

    #[test]
    fn falls_back_to_compact_tiles() {
        let view = GameView::default();
        assert_eq!(view.tile_size(4, Viewport::new(80, 24)), (7, 3));
        assert_eq!(view.tile_size(4, Viewport::new(24, 8)), (5, 1));
    }

    #[test]
    fn too_small_viewport_shows_message() {
        let snap = snapshot(&[[0; 4]; 4]);
        let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(18, 3));
        assert!(fb.row_text(0).starts_with("terminal too small"));
    }

    #[test]
    fn modal_lines_are_centered_in_frame() {
        let snap = snapshot(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let fb = GameView::default().render(&snap, Overlay::Lost, Viewport::new(30, 14));
        let text: Vec<String> = (0..14).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|l| l.contains("GAME OVER")));
        assert!(text.iter().any(|l| l.contains("score 48")));
    }
}
