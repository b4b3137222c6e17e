use tui_2048::core::{Board, Game};
use tui_2048::term::{FrameBuffer, GameView, Overlay, Viewport};
use tui_2048::types::{GameAction, Tile};

fn snapshot_of(rows: &[[Tile; 4]]) -> tui_2048::core::GameSnapshot {
    Game::from_board(Board::from_rows(rows).unwrap(), 1).snapshot()
}

fn screen_text(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_of(&[[0; 4]; 4]);
    let view = GameView::default();

    // With cell_w=7 and cell_h=3:
    // board = 4*7 by 4*3 => 28x12
    // plus border => 30x14
    let vp = Viewport::new(30, 14);
    let fb = view.render(&snap, Overlay::None, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_values() {
    let snap = snapshot_of(&[[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(30, 14));

    // Inside border: (1,1) origin. Tiles are 7x3, value on the middle row.
    assert_eq!(fb.get(4, 2).unwrap().ch, '2');
    assert_eq!(fb.get(3, 2).unwrap().ch, ' ');

    let row = fb.row_text(11);
    assert_eq!(row.chars().skip(23).take(4).collect::<String>(), "2048");

    // Empty tiles show a dot.
    assert_eq!(fb.get(11, 2).unwrap().ch, '·');
}

#[test]
fn term_view_tiles_of_different_values_differ_in_color() {
    let snap = snapshot_of(&[[2, 4, 8, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(30, 14));

    let two = fb.get(4, 2).unwrap().style.bg;
    let four = fb.get(11, 2).unwrap().style.bg;
    let eight = fb.get(18, 2).unwrap().style.bg;
    let empty = fb.get(25, 2).unwrap().style.bg;
    assert_ne!(two, four);
    assert_ne!(four, eight);
    assert_ne!(two, empty);
}

#[test]
fn term_view_side_panel_shows_score_and_moves() {
    let mut game = Game::from_board(
        Board::from_rows::<[Tile; 4]>(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
        1,
    );
    game.handle_input(GameAction::MoveLeft);
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(80, 24));
    let text = screen_text(&fb);

    // Board (30 wide) + gap + panel (16 wide) centered in 80 columns.
    let panel_x = 16 + 30 + 2;
    let score_row = text.iter().position(|l| l.contains("SCORE")).unwrap();
    let at_panel: String = text[score_row].chars().skip(panel_x).take(5).collect();
    assert_eq!(at_panel, "SCORE");
    assert!(text[score_row + 1].contains(&snap.score.to_string()));
    assert!(text.iter().any(|l| l.contains("MOVES")));
    assert!(text.iter().any(|l| l.contains("q: quit")));
    assert!(!text.iter().any(|l| l.contains("2048 reached")));
}

#[test]
fn term_view_panel_is_dropped_on_narrow_terminals() {
    let snap = snapshot_of(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(40, 14));
    assert!(!screen_text(&fb).iter().any(|l| l.contains("SCORE")));
}

#[test]
fn term_view_won_overlay() {
    let mut game = Game::from_board(
        Board::from_rows::<[Tile; 4]>(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
        1,
    );
    game.handle_input(GameAction::MoveLeft);
    let snap = game.snapshot();
    assert!(snap.won);

    let view = GameView::default();
    let plain = screen_text(&view.render(&snap, Overlay::None, Viewport::new(80, 24)));
    assert!(plain.iter().any(|l| l.contains("2048 reached")));
    assert!(!plain.iter().any(|l| l.contains("YOU WIN!")));

    let modal = screen_text(&view.render(&snap, Overlay::Won, Viewport::new(80, 24)));
    assert!(modal.iter().any(|l| l.contains("YOU WIN!")));
}

#[test]
fn term_view_lost_overlay_shows_final_score() {
    let snap = snapshot_of(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(snap.lost);

    let fb = GameView::default().render(&snap, Overlay::Lost, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.iter().any(|l| l.contains("GAME OVER")));
    assert!(text.iter().any(|l| l.contains("score 48")));
    assert!(text.iter().any(|l| l.contains("r: again")));
}

#[test]
fn term_view_renders_larger_boards_compactly() {
    let mut rows: Vec<Vec<Tile>> = vec![vec![0; 8]; 8];
    rows[7][7] = 128;
    let snap = Game::from_board(Board::from_rows(&rows).unwrap(), 1).snapshot();

    // 8*7+2 = 58 columns does not fit in 50; the compact 5x1 layout does.
    let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(50, 12));
    let text = screen_text(&fb);
    assert!(!text.iter().any(|l| l.contains("terminal too small")));
    assert!(text.iter().any(|l| l.contains("128")));
}
