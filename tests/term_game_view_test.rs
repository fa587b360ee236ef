use pharaoh_blocks::core::{GameSnapshot, GameState};
use pharaoh_blocks::term::{GameView, Viewport};
use pharaoh_blocks::types::{Cell, GameStatus, PieceKind};

fn all_text(fb: &pharaoh_blocks::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 12 cells * 2 columns + border = 26 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_merged_cell_two_columns_wide() {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::Playing;
    snap.board[19][0] = Cell::Merged(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_counters() {
    let mut game = GameState::new(1);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.rows = 21;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = all_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("ROWS"));
    assert!(text.contains("21"));
    assert!(text.contains("NEXT"));
}

#[test]
fn term_view_game_over_banner() {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::GameOver;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    assert!(all_text(&fb).contains("GAME OVER"));
}
