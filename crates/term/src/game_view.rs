//! GameView: paints a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{shape_for, GameSnapshot, Shape};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Cell, GameStatus, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(28, 24, 20);
const SAND: Rgb = Rgb::new(214, 190, 140);
const TEXT: Rgb = Rgb::new(220, 220, 220);
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

/// Board and side-panel layout.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

/// Top-left corner of the well interior.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn well_size(&self) -> (u16, u16) {
        (BOARD_WIDTH as u16 * self.cell_w + 2, BOARD_HEIGHT as u16 + 2)
    }

    /// Paint `snap` into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::new(TEXT, SCREEN_BG).glyph(' '));

        let (frame_w, frame_h) = self.well_size();
        let left = viewport.width.saturating_sub(frame_w + 16) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;
        let origin = Origin {
            x: left + 1,
            y: top + 1,
        };

        draw_border(fb, left, top, frame_w, frame_h, Style::new(SAND, SCREEN_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let glyph = match cell {
                    Cell::Merged(kind) => block_glyph(*kind),
                    Cell::Clear => Style::new(Rgb::new(70, 62, 50), WELL_BG).dim().glyph('·'),
                };
                self.paint_cell(fb, origin, x as i16, y as i16, glyph);
            }
        }

        if let Some(active) = snap.active {
            let glyph = block_glyph(active.kind);
            for (x, y) in active.cells() {
                if y >= 0 {
                    self.paint_cell(fb, origin, x as i16, y as i16, glyph);
                }
            }
        }

        self.draw_panel(fb, snap, left + frame_w + 2, top);

        if let Some(banner) = banner_text(snap.status) {
            let y = top + frame_h / 2;
            let x = left + frame_w.saturating_sub(banner.len() as u16) / 2;
            fb.put_str(x, y, banner, Style::new(SCREEN_BG, SAND).bold());
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i16, y: i16, glyph: Glyph) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return;
        }
        let px = origin.x + x as u16 * self.cell_w;
        let py = origin.y + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, glyph);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::new(SAND, SCREEN_BG).bold();
        let value = Style::new(TEXT, SCREEN_BG);

        let mut y = top;
        for (name, n) in [("SCORE", snap.score), ("ROWS", snap.rows), ("LEVEL", snap.level)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, x, y + 1, &shape_for(snap.next).shape, snap.next);
        y += 6;

        if snap.fast_drop {
            fb.put_str(x, y, "FAST", Style::new(SAND, SCREEN_BG).bold());
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, kind: PieceKind) {
        let glyph = block_glyph(kind);
        for (cx, cy) in shape.cells() {
            let px = x + cx as u16 * self.cell_w;
            fb.fill_rect(px, y + cy as u16, self.cell_w, 1, glyph);
        }
    }
}

fn block_glyph(kind: PieceKind) -> Glyph {
    Style::new(shape_for(kind).color, WELL_BG).bold().glyph('█')
}

fn banner_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Menu => Some(" PRESS ENTER "),
        GameStatus::Paused => Some(" PAUSED "),
        GameStatus::GameOver => Some(" GAME OVER "),
        GameStatus::Playing => None,
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.set(x, y, style.glyph('┌'));
    fb.set(right, y, style.glyph('┐'));
    fb.set(x, bottom, style.glyph('└'));
    fb.set(right, bottom, style.glyph('┘'));
    for dx in x + 1..right {
        fb.set(dx, y, style.glyph('─'));
        fb.set(dx, bottom, style.glyph('─'));
    }
    for dy in y + 1..bottom {
        fb.set(x, dy, style.glyph('│'));
        fb.set(right, dy, style.glyph('│'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_shows_banner() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(screen(&fb).contains("PRESS ENTER"));
    }

    #[test]
    fn test_playing_draws_active_piece_and_counters() {
        let mut game = GameState::new(1);
        game.start();
        let snap = game.snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        let text = screen(&fb);

        assert!(!text.contains("PRESS ENTER"));
        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        // Four active cells, two columns each, plus the preview.
        assert!(text.matches('█').count() >= 16);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut game = GameState::new(2);
        game.start();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn test_pause_banner() {
        let mut game = GameState::new(3);
        game.start();
        game.toggle_pause();
        let fb = GameView::new(1).render(&game.snapshot(), Viewport::new(60, 30));
        assert!(screen(&fb).contains("PAUSED"));
    }
}
