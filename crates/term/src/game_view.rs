//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Columns between the right edge of the board frame and the preview panel.
pub const PREVIEW_GAP: u16 = 3;

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);
const BORDER: CellStyle = CellStyle::new(Rgb::new(128, 128, 128), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the game.
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

    /// Size of the bordered board frame in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame. The frame is centered horizontally
    /// together with the preview panel and pinned to the top row.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, _) = self.frame_size();
        let total_w = frame_w + PREVIEW_GAP + 4 * self.cell_w;
        (viewport.width.saturating_sub(total_w) / 2, 0)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        let (origin_x, origin_y) = (start_x + 1, start_y + 1);
        for (y, row) in state.board().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, *color);
                }
            }
        }

        if state.game_over() {
            draw_centered(fb, start_x, start_y + frame_h / 2, frame_w, "GAME OVER");
        } else {
            self.draw_piece(fb, origin_x, origin_y, state.falling());
        }

        self.draw_preview(fb, start_x + frame_w + PREVIEW_GAP, start_y, state.next());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Draw a piece's cells relative to the board origin, skipping any that
    /// sit outside the grid.
    fn draw_piece(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, piece: &Piece) {
        for (x, y) in piece.cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, piece.color);
            }
        }
    }

    /// "NEXT" label with the next piece's shape beneath it, unrotated and
    /// anchored at its own top-left corner.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        fb.put_str(x, y + 1, "NEXT", LABEL);
        for (dx, dy) in piece.shape.offsets() {
            self.draw_block(fb, x, y + 3, dx as u16, dy as u16, piece.color);
        }
    }

    /// One grid cell. Two-column cells get bracket edges, standing in for the
    /// grid line around each block.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: BlockColor,
    ) {
        let style = CellStyle::new(Rgb::from(color), PLAYFIELD_BG).bold();
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = match (self.cell_w, dx) {
                    (1, _) => '█',
                    (_, 0) => '[',
                    (w, dx) if dx == w - 1 => ']',
                    _ => '█',
                };
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let pad = w.saturating_sub(text.chars().count() as u16) / 2;
    fb.put_str(x.saturating_add(pad), y, text, LABEL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_accounts_for_border() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }

    #[test]
    fn frame_is_centered_with_preview() {
        let view = GameView::default();
        // 22 frame + 3 gap + 8 preview = 33 wide.
        assert_eq!(view.frame_origin(Viewport::new(33, 22)), (0, 0));
        assert_eq!(view.frame_origin(Viewport::new(43, 22)), (5, 0));
        assert_eq!(view.frame_origin(Viewport::new(10, 5)), (0, 0));
    }
}
