//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! used from the game core, the terminal front-end, and the session log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Pieces may hang above row 0 while spawning; those cells are never stored
//! on the board.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 300 | Time between automatic falls |
//! | `DEFAULT_POLL_MS` | 100 | Upper bound on one input poll |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{Cell, GameAction, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//!
//! let cell = Cell::Occupied(ShapeId::O);
//! assert_eq!(cell.shape(), Some(ShapeId::O));
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds.
///
/// A piece falls one row once strictly more than this much time has passed
/// since the last fall.
pub const GRAVITY_INTERVAL_MS: u64 = 300;

/// Default upper bound for a single input poll, in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 100;

/// Points awarded per cleared row.
pub const LINE_CLEAR_POINTS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_and_scoring_defaults() {
        assert_eq!(GRAVITY_INTERVAL_MS, 300);
        assert_eq!(DEFAULT_POLL_MS, 100);
        assert_eq!(LINE_CLEAR_POINTS, 100);
        assert!(DEFAULT_POLL_MS < GRAVITY_INTERVAL_MS);
    }

    #[test]
    fn shape_ids_roundtrip_through_strings() {
        for shape in ShapeId::ALL {
            assert_eq!(ShapeId::from_str(shape.as_str()), Some(shape));
        }
        assert_eq!(ShapeId::from_str("x"), None);
    }

    #[test]
    fn actions_parse_case_insensitively() {
        assert_eq!(GameAction::from_str("MoveLeft"), Some(GameAction::MoveLeft));
        assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
        assert_eq!(GameAction::from_str("QUIT"), Some(GameAction::Quit));
        assert_eq!(GameAction::from_str("hold"), None);
    }
}

/// The seven tetromino shapes
///
/// Declared in the order the rotation catalog lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeId {
    /// Every shape, in catalog order.
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::J,
        ShapeId::L,
        ShapeId::O,
        ShapeId::S,
        ShapeId::T,
        ShapeId::Z,
    ];

    /// Number of distinct shapes.
    pub const COUNT: usize = 7;

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("Z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("q"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            "o" => Some(ShapeId::O),
            "s" => Some(ShapeId::S),
            "t" => Some(ShapeId::T),
            "z" => Some(ShapeId::Z),
            _ => None,
        }
    }

    /// Lowercase string form, used by the session log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::J => "j",
            ShapeId::L => "l",
            ShapeId::O => "o",
            ShapeId::S => "s",
            ShapeId::T => "t",
            ShapeId::Z => "z",
        }
    }

    /// Uppercase letter for compact display.
    pub fn letter(&self) -> char {
        match self {
            ShapeId::I => 'I',
            ShapeId::J => 'J',
            ShapeId::L => 'L',
            ShapeId::O => 'O',
            ShapeId::S => 'S',
            ShapeId::T => 'T',
            ShapeId::Z => 'Z',
        }
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(ShapeId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Shape tag of an occupied cell.
    pub fn shape(&self) -> Option<ShapeId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(shape) => Some(*shape),
        }
    }
}

/// Player actions consumed by the game loop
///
/// "No action this tick" is expressed as `Option::<GameAction>::None` by the
/// input source rather than as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Leave the game immediately
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// camelCase string form
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Quit => "quit",
        }
    }
}
