//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Board renderer with a side panel for score and controls.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
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

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Leave room for the side panel when the terminal is wide enough.
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Rows above the top edge are not drawn.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over() {
            draw_game_over(fb, snap.score, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG)
        };
        self.fill_cell(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(kind.color_rgb().into(), PLAY_BG)
        };
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Columns reserved for the side panel.
const PANEL_W: u16 = 18;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.set(x, y, style.cell('┌'));
    fb.set(x + w - 1, y, style.cell('┐'));
    fb.set(x, y + h - 1, style.cell('└'));
    fb.set(x + w - 1, y + h - 1, style.cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, y + h - 1, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(x + w - 1, y + dy, style.cell('│'));
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
    if x.saturating_add(12) > viewport.width {
        return;
    }

    let label = CellStyle {
        bold: true,
        ..CellStyle::default()
    };
    let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
    let hint = CellStyle { dim: true, ..value };

    let mut row = y;
    fb.put_str(x, row, "SCORE", label);
    fb.put_u32(x, row + 1, snap.score, value);
    row += 3;

    fb.put_str(x, row, "LINES", label);
    fb.put_u32(x, row + 1, snap.lines, value);
    row += 3;

    fb.put_str(x, row, "PIECE", label);
    if let Some(active) = snap.active {
        let style = CellStyle::plain(active.kind.color_rgb().into(), SCREEN_BG);
        fb.put_str(x, row + 1, piece_letter(active.kind), style);
        fb.put_str(x + 2, row + 1, active.kind.image_asset(), hint);
    } else {
        fb.put_str(x, row + 1, "-", value);
    }
    row += 3;

    for line in ["←/→  move", "↑    rotate", "↓    drop", "r    reset", "q    quit"] {
        if row >= viewport.height {
            break;
        }
        fb.put_str(x, row, line, hint);
        row += 1;
    }
}

fn draw_game_over(fb: &mut FrameBuffer, score: u32, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
    let style = CellStyle {
        bold: true,
        ..CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG)
    };
    let mid_y = start_y.saturating_add(frame_h / 2);
    let centered = |text_w: u16| start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);

    fb.put_str(centered(9), mid_y.saturating_sub(1), "GAME OVER", style);

    let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
    let score_x = centered(6 + digits);
    fb.put_str(score_x, mid_y, "SCORE ", style);
    fb.put_u32(score_x + 6, mid_y, score, style);

    fb.put_str(centered(12), mid_y + 1, "r to restart", style);
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::J => "J",
        PieceKind::L => "L",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
    }
}
