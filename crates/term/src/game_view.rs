//! GameView: maps the engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use tui_gemswap_core::GameState;
use tui_gemswap_types::{CellStatus, GemColor, BOARD_SIZE};

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

/// Terminal renderer for the gem board.
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

/// Terminal color for each palette entry.
fn gem_rgb(color: GemColor) -> Rgb {
    match color {
        GemColor::Red => Rgb::new(224, 64, 64),
        GemColor::Green => Rgb::new(64, 176, 72),
        GemColor::Blue => Rgb::new(72, 96, 224),
        GemColor::Cyan => Rgb::new(64, 200, 208),
        GemColor::Magenta => Rgb::new(200, 64, 200),
        GemColor::Yellow => Rgb::new(228, 208, 64),
        GemColor::Lime => Rgb::new(160, 224, 64),
        GemColor::Beige => Rgb::new(216, 192, 152),
        GemColor::Pink => Rgb::new(240, 144, 184),
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_SIZE as u16) * self.cell_w;
        let board_px_h = (BOARD_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Ok(cell) = state.cell_at(row, col) {
                    self.draw_gem(&mut fb, start_x, start_y, row, col, cell.color, cell.status);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, start_x + frame_w, start_y);

        fb
    }

    fn draw_gem(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        color: GemColor,
        status: CellStatus,
    ) {
        let x0 = start_x + 1 + (col as u16) * self.cell_w;
        let y0 = start_y + 1 + (row as u16) * self.cell_h;

        let rgb = gem_rgb(color);
        let (ch, style) = match status {
            CellStatus::None => (
                '█',
                GlyphStyle {
                    fg: rgb,
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                },
            ),
            // The cursor rests here: dimmer block on a lit background.
            CellStatus::Selectable => (
                '▓',
                GlyphStyle {
                    fg: rgb,
                    bg: Rgb::new(70, 70, 80),
                    bold: true,
                },
            ),
            // Armed for a swap: inverted, unmistakable.
            CellStatus::Selected => (
                '▒',
                GlyphStyle {
                    fg: rgb,
                    bg: Rgb::new(235, 235, 235),
                    bold: true,
                },
            ),
        };

        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.put_char(x0 + dx, y0 + dy, ch, style);
            }
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: GlyphStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let text = GlyphStyle::default();

        let px = x + 2;
        fb.put_str(px, y + 1, &format!("SCORE-{}", state.score()), label);

        let cursor = state.cursor_cell();
        fb.put_str(
            px,
            y + 3,
            &format!(
                "({}, {}) {}",
                state.cursor_row(),
                state.cursor_col(),
                cursor.color.as_str()
            ),
            text,
        );
        if state.is_selected() {
            fb.put_str(px, y + 4, "selected", text);
        }

        fb.put_str(px, y + 6, "wasd/arrows move", text);
        fb.put_str(px, y + 7, "e/enter select", text);
        fb.put_str(px, y + 8, "q quit", text);
    }
}

/// Columns reserved right of the board for score and key help.
const SIDE_PANEL_W: u16 = 20;
