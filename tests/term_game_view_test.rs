use fruit_blocks::core::{FixedPieces, GameEngine, GameSnapshot};
use fruit_blocks::term::{FrameBuffer, GameView, Rgb, Viewport};
use fruit_blocks::types::{GameStatus, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn started(kind: PieceKind) -> GameEngine {
    let mut engine = GameEngine::with_source(FixedPieces::repeat(kind));
    engine.start();
    engine
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_empty_cells_as_dots() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 22));
    assert_eq!(fb.row_text(1), format!("│{}│", "·".repeat(20)));
}

#[test]
fn term_view_renders_locked_cell_in_piece_color() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = PieceKind::L.code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    let right = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, Rgb::from(PieceKind::L.color_rgb()));
}

#[test]
fn term_view_renders_active_piece() {
    let snap = started(PieceKind::O).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O spawns at column 4 on rows 0 and 1.
    for (x, y) in [(9, 1), (10, 1), (11, 1), (12, 1), (9, 2), (12, 2)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", x, y);
        assert_eq!(cell.style.fg, Rgb::new(0xFF, 0xFF, 0x00));
    }
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
    assert_eq!(fb.get(9, 3).unwrap().ch, '·');
}

#[test]
fn term_view_skips_rows_above_the_board() {
    let mut snap = started(PieceKind::I).snapshot();
    let mut active = snap.active.unwrap();
    active.shape = active.shape.rotated_cw();
    active.y = -2;
    snap.active = Some(active);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Vertical I at rows -2..=1: only rows 0 and 1 are visible.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(7, 0).unwrap().ch, '─');
    assert_eq!(fb.get(7, 1).unwrap().ch, '█');
    assert_eq!(fb.get(7, 2).unwrap().ch, '█');
    assert_eq!(fb.get(7, 3).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = started(PieceKind::T).snapshot();
    snap.score = 1234;
    snap.lines = 10;

    // Wider than the 22x22 board frame to allow a panel.
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("eggplant.png"));
}

#[test]
fn term_view_hides_side_panel_on_narrow_viewports() {
    let mut snap = GameSnapshot::default();
    snap.score = 1234;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_draws_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::GameOver;
    snap.score = 300;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let all = screen_text(&fb);

    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 300"));
    assert!(all.contains("r to restart"));
}

#[test]
fn term_view_has_no_overlay_while_running() {
    let snap = started(PieceKind::S).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}
