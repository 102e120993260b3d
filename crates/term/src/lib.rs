//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to the terminal with `crossterm`.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: shape colors and field styles
//! - [`game_view`]: snapshot to framebuffer (pure, unit-tested)
//! - [`renderer`]: raw mode, alternate screen and diff output
//! - [`frontend`]: ties the above together behind the core `Renderer` trait

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use frontend::TerminalFrontend;
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
