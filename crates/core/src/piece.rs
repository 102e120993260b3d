//! Piece module - the active falling tetromino

use crate::shapes::{filled_cells, matrix_width, normalize_rotation, rotation, Matrix};
use crate::types::{ShapeId, BOARD_WIDTH};

/// Active falling piece
///
/// `x`/`y` locate the top-left corner of the current occupancy matrix in
/// board coordinates. `y` may be negative while the piece hangs above the
/// visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    /// Rotation index, kept in `0..state_count(shape)`.
    pub rotation: i32,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered on row 0
    pub fn spawn(shape: ShapeId) -> Self {
        let width = matrix_width(rotation(shape, 0));
        Self {
            shape,
            rotation: 0,
            x: (BOARD_WIDTH as i8) / 2 - width / 2,
            y: 0,
        }
    }

    /// Occupancy matrix for the current rotation
    pub fn matrix(&self) -> Matrix {
        rotation(self.shape, self.rotation)
    }

    /// Absolute board positions of the filled cells in the current rotation.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        filled_cells(self.matrix()).map(move |(cx, cy)| (x + cx, y + cy))
    }

    /// Copy of this piece shifted by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece in rotation `index` (normalized).
    pub fn with_rotation(&self, index: i32) -> Self {
        Self {
            rotation: normalize_rotation(self.shape, index),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_by_matrix_width() {
        // 10/2 - 4/2
        assert_eq!(Piece::spawn(ShapeId::I).x, 3);
        // 10/2 - 2/2
        assert_eq!(Piece::spawn(ShapeId::O).x, 4);
        // 10/2 - 3/2
        for shape in [ShapeId::J, ShapeId::L, ShapeId::S, ShapeId::T, ShapeId::Z] {
            let piece = Piece::spawn(shape);
            assert_eq!(piece.x, 4, "{:?}", shape);
            assert_eq!(piece.y, 0);
            assert_eq!(piece.rotation, 0);
        }
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece {
            shape: ShapeId::O,
            rotation: 0,
            x: 2,
            y: 5,
        };
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }

    #[test]
    fn test_with_rotation_normalizes() {
        let piece = Piece::spawn(ShapeId::S);
        assert_eq!(piece.with_rotation(2).rotation, 0);
        assert_eq!(piece.with_rotation(3).rotation, 1);
        assert_eq!(piece.with_rotation(-1).rotation, 1);
    }

    #[test]
    fn test_shifted_keeps_shape_and_rotation() {
        let piece = Piece::spawn(ShapeId::T).with_rotation(1);
        let moved = piece.shifted(-1, 2);
        assert_eq!(moved.shape, ShapeId::T);
        assert_eq!(moved.rotation, 1);
        assert_eq!((moved.x, moved.y), (piece.x - 1, piece.y + 2));
    }
}
