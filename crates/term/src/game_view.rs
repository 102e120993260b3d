//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette;
use crate::types::{Cell, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the bordered board lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Border size including the frame characters.
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keep blocks roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let x = match self.anchor_y {
            AnchorY::Center => viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            AnchorY::Top => 0,
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let layout = self.layout(viewport);
        self.draw_border(fb, layout);

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Occupied(shape) => {
                        self.draw_block(fb, layout, x as u16, y as u16, *shape)
                    }
                    Cell::Empty => self.fill_cell(fb, layout, x as u16, y as u16, ' ', palette::EMPTY),
                }
            }
        }

        // Active piece; rows above the board stay hidden.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, layout, x as u16, y as u16, active.shape);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over() {
            self.draw_game_over(fb, layout, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout) {
        let BoardLayout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;
        let style = palette::BORDER;

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

    fn draw_block(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16, shape: ShapeId) {
        self.fill_cell(fb, layout, x, y, '█', palette::block_style(shape));
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + 1 + cell_x * self.cell_w;
        let py = layout.y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", palette::LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, palette::VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", palette::LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, palette::VALUE);
        y = y.saturating_add(2);

        for line in HELP {
            fb.put_str(panel_x, y, line, palette::VALUE);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: BoardLayout, score: u32) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        self.put_centered(fb, layout, mid_y.saturating_sub(1), "GAME OVER");

        let digits = decimal_width(score);
        let label = "SCORE ";
        let w = label.len() as u16 + digits;
        let x = layout.x + layout.frame_w.saturating_sub(w) / 2;
        fb.put_str(x, mid_y, label, palette::OVERLAY);
        fb.put_u32(x + label.len() as u16, mid_y, score, palette::OVERLAY);

        self.put_centered(fb, layout, mid_y.saturating_add(2), "press any key");
    }

    fn put_centered(&self, fb: &mut FrameBuffer, layout: BoardLayout, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, palette::OVERLAY);
    }
}

/// Width of the side panel, used to center board and panel together.
const PANEL_W: u16 = 14;

const HELP: [&str; 4] = ["←→ move", "↓  drop", "↑  rotate", "q  quit"];

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}
