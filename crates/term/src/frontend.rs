//! TerminalFrontend: the terminal implementation of the core `Renderer`.

use std::io;

use anyhow::Result;
use crossterm::terminal;

use crate::core::driver::Renderer;
use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

/// Renders snapshots to the real terminal.
pub struct TerminalFrontend {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalFrontend {
    pub fn new(view: GameView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Renderer for TerminalFrontend {
    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        let (w, h) = terminal::size().unwrap_or(DEFAULT_VIEWPORT);
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}
