//! Collision module - the single placement test used by every move
//!
//! Movement, rotation, gravity and spawn validity all ask the same question:
//! would the piece overlap a wall, the floor, or a settled cell after a given
//! offset and rotation? Rows above the board (`y < 0`) are open space, but
//! the side walls still apply there.

use crate::board::Board;
use crate::piece::Piece;
use crate::shapes::{filled_cells, rotation};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece`, moved by `(dx, dy)` and optionally switched to the
/// rotation `rotation_override`, would collide.
///
/// A filled cell at absolute `(x, y)` collides when `x < 0`, `x >= WIDTH`,
/// `y >= HEIGHT`, or when `y >= 0` and the board cell is occupied.
///
/// # Examples
///
/// ```
/// use tetromino_core::{collides, Board, Piece};
/// use tetromino_core::types::ShapeId;
///
/// let board = Board::new();
/// let piece = Piece::spawn(ShapeId::O);
/// assert!(!collides(&board, &piece, 0, 0, None));
/// assert!(collides(&board, &piece, 0, 19, None));
/// ```
pub fn collides(
    board: &Board,
    piece: &Piece,
    dx: i8,
    dy: i8,
    rotation_override: Option<i32>,
) -> bool {
    let matrix = rotation(piece.shape, rotation_override.unwrap_or(piece.rotation));
    filled_cells(matrix).any(|(cx, cy)| {
        let x = piece.x + cx + dx;
        let y = piece.y + cy + dy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}
