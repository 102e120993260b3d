//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and the loop that
//! drives them. It does no terminal I/O itself: the loop talks to the outside
//! world through the traits in [`driver`], which makes it:
//!
//! - **Deterministic**: the same seed (or scripted shape list) produces the same game
//! - **Testable**: fake clocks and scripted input run whole games headless
//! - **Portable**: the terminal front-end is just one implementation of the traits
//!
//! # Module Structure
//!
//! - [`shapes`]: static rotation tables for the seven tetrominoes
//! - [`piece`]: the active piece (shape, rotation, position)
//! - [`board`]: 10x20 grid with merge and line clearing
//! - [`collision`]: the placement test behind every move, rotation and spawn
//! - [`scoring`]: 100 points per cleared row
//! - [`rng`]: seedable uniform shape source and a scripted one
//! - [`game_state`]: spawn / fall / lock / clear state machine
//! - [`snapshot`]: read-only frame data for renderers
//! - [`driver`]: the poll/tick loop and its collaborator traits
//!
//! # Game Rules
//!
//! - Shapes are drawn uniformly at random, one independent draw per spawn
//! - Rotation steps through the stored states in order, with no wall kicks
//! - Gravity moves the piece down once more than 300ms have passed since the last fall
//! - A piece locks when gravity finds it resting on the stack or the floor
//! - The game ends when a freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use tetromino_core::{GameState, Phase, ScriptedPieces};
//! use tetromino_core::types::{GameAction, ShapeId};
//!
//! let mut game = GameState::with_source(ScriptedPieces::repeat(ShapeId::O));
//! game.start(0);
//!
//! assert!(game.apply_action(GameAction::MoveLeft));
//! game.tick(Some(GameAction::SoftDrop), 301);
//!
//! let piece = game.active().unwrap();
//! assert_eq!((piece.x, piece.y), (3, 2));
//! assert_eq!(game.phase(), Phase::Falling);
//! ```

pub mod board;
pub mod collision;
pub mod driver;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::collides;
pub use driver::{
    run, Clock, EventSink, GameEnd, InputSource, LoopConfig, ManualClock, MonotonicClock,
    Renderer, ScriptedInput,
};
pub use game_state::{GameEvent, GameState, Phase};
pub use piece::Piece;
pub use rng::{PieceSource, ScriptedPieces, UniformPieces};
pub use scoring::line_clear_score;
pub use shapes::{rotation, rotation_states, Matrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
