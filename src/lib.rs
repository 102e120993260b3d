//! TUI Tetromino (workspace facade crate).
//!
//! Re-exports the member crates under `tui_tetromino::{core,input,term,types}`
//! and adds the pieces only the binary needs: command-line configuration and
//! the JSONL session log.

pub mod config;
pub mod session_log;

pub use tetromino_core as core;
pub use tetromino_input as input;
pub use tetromino_term as term;
pub use tetromino_types as types;
