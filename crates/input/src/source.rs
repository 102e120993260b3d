//! Crossterm-backed [`InputSource`].

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tetromino_core::driver::InputSource;

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads key presses from the terminal.
///
/// Requires raw mode, which the terminal renderer enables.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }

    /// Block until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}

impl InputSource for CrosstermInput {
    /// Returns after at most one terminal event.
    ///
    /// Releases, resizes and unmapped keys yield `Ok(None)` right away so the
    /// game loop can check gravity.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Terminals without the kitty protocol report held keys as presses.
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Ok(handle_key_event(key)),
                KeyEventKind::Release => Ok(None),
            },
            _ => Ok(None),
        }
    }
}
