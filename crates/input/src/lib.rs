//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! [`CrosstermInput`], the terminal implementation of the core's
//! `InputSource` trait.

pub mod map;
pub mod source;

pub use tetromino_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::CrosstermInput;
