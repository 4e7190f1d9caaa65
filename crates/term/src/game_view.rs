//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Piece, RandomSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, COLUMNS, ROWS};

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK_EDGE: Rgb = Rgb::new(0, 0, 0);
const GRID_DOT: Rgb = Rgb::new(60, 60, 70);
const FRAME: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Largest cell width or height, in terminal columns or rows.
pub const MAX_CELL_SIZE: u16 = 4;

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

/// Where the board frame landed in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

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
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Render the current game state into a framebuffer.
    pub fn render<R: RandomSource>(
        &self,
        state: &GameState<R>,
        highscore: u32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = (COLUMNS as u16) * self.cell_w;
        let board_h = (ROWS as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let layout = Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        self.draw_frame(&mut fb, layout);

        // Frozen cells.
        for (y, row) in state.board().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(layout, x as u16, y as u16);
                match cell {
                    Cell::Occupied { color } => self.draw_block(&mut fb, px, py, *color),
                    Cell::Empty => self.draw_empty(&mut fb, px, py),
                }
            }
        }

        // Current piece, clipped to the visible rows.
        let current = state.current();
        for (x, y) in current.cells() {
            if x >= 0 && x < COLUMNS as i8 && y >= 0 && y < ROWS as i8 {
                let (px, py) = self.cell_origin(layout, x as u16, y as u16);
                self.draw_block(&mut fb, px, py, current.color);
            }
        }

        self.draw_side_panel(&mut fb, state, highscore, viewport, layout);

        if state.game_over() {
            self.draw_overlay_text(&mut fb, layout, "GAME OVER");
        }

        fb
    }

    fn cell_origin(&self, layout: Layout, x: u16, y: u16) -> (u16, u16) {
        (
            layout.start_x + 1 + x * self.cell_w,
            layout.start_y + 1 + y * self.cell_h,
        )
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        let style = CellStyle::new(FRAME, PLAYFIELD_BG);

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

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(GRID_DOT, PLAYFIELD_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    /// A filled block with a one-character outline on each side.
    ///
    /// One-column cells have no room for an outline and use a solid glyph.
    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: Rgb) {
        if self.cell_w == 1 {
            let style = CellStyle::new(color, PLAYFIELD_BG);
            fb.fill_rect(px, py, 1, self.cell_h, '█', style);
            return;
        }

        let style = CellStyle::new(BLOCK_EDGE, color);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        for dy in 0..self.cell_h {
            fb.put_char(px, py + dy, '[', style);
            fb.put_char(px + self.cell_w - 1, py + dy, ']', style);
        }
    }

    fn draw_side_panel<R: RandomSource>(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState<R>,
        highscore: u32,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(TEXT, PLAYFIELD_BG).bold();
        let value = CellStyle::new(TEXT, PLAYFIELD_BG);

        let stats = [
            ("SCORE", state.score().to_string()),
            ("HIGHSCORE", highscore.to_string()),
            ("LEVEL", state.level().to_string()),
            ("LINES", state.lines_cleared().to_string()),
            (
                "NEXT LEVEL",
                format!("{} pts", state.points_to_next_milestone()),
            ),
        ];

        let mut y = layout.start_y;
        for (name, text) in stats {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &text, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y.saturating_add(1), state.next());
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        for (col, row) in piece.shape.cells() {
            let px = x.saturating_add(col as u16 * self.cell_w);
            let py = y.saturating_add(row as u16 * self.cell_h);
            self.draw_block(fb, px, py, piece.color);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::new(TEXT, PLAYFIELD_BG).bold());
    }
}
