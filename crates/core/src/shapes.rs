//! Shapes module - tetromino rotation tables
//!
//! Each shape stores only its distinct rotation states as occupancy matrices:
//! I, S and Z have two, O has one, J, L and T have four. A rotation index is
//! always reduced modulo the state count, so any integer names a valid state.

use crate::types::ShapeId;

/// Occupancy matrix: rows top to bottom, `true` marks a filled cell.
///
/// Rows of one matrix always have the same length.
pub type Matrix = &'static [&'static [bool]];

const X: bool = true;
const O: bool = false;

static I_STATES: [Matrix; 2] = [
    &[&[X, X, X, X]],
    &[&[X], &[X], &[X], &[X]],
];

static J_STATES: [Matrix; 4] = [
    &[&[X, O, O], &[X, X, X]],
    &[&[X, X], &[X, O], &[X, O]],
    &[&[X, X, X], &[O, O, X]],
    &[&[O, X], &[O, X], &[X, X]],
];

static L_STATES: [Matrix; 4] = [
    &[&[O, O, X], &[X, X, X]],
    &[&[X, O], &[X, O], &[X, X]],
    &[&[X, X, X], &[X, O, O]],
    &[&[X, X], &[O, X], &[O, X]],
];

static O_STATES: [Matrix; 1] = [&[&[X, X], &[X, X]]];

static S_STATES: [Matrix; 2] = [
    &[&[O, X, X], &[X, X, O]],
    &[&[X, O], &[X, X], &[O, X]],
];

static T_STATES: [Matrix; 4] = [
    &[&[O, X, O], &[X, X, X]],
    &[&[X, O], &[X, X], &[X, O]],
    &[&[X, X, X], &[O, X, O]],
    &[&[O, X], &[X, X], &[O, X]],
];

static Z_STATES: [Matrix; 2] = [
    &[&[X, X, O], &[O, X, X]],
    &[&[O, X], &[X, X], &[X, O]],
];

/// All rotation states of a shape, in clockwise order starting at spawn.
pub fn rotation_states(shape: ShapeId) -> &'static [Matrix] {
    match shape {
        ShapeId::I => &I_STATES,
        ShapeId::J => &J_STATES,
        ShapeId::L => &L_STATES,
        ShapeId::O => &O_STATES,
        ShapeId::S => &S_STATES,
        ShapeId::T => &T_STATES,
        ShapeId::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a shape.
pub fn state_count(shape: ShapeId) -> usize {
    rotation_states(shape).len()
}

/// Reduce any rotation index into `0..state_count(shape)`.
pub fn normalize_rotation(shape: ShapeId, index: i32) -> i32 {
    index.rem_euclid(state_count(shape) as i32)
}

/// Occupancy matrix for `index`, taken modulo the state count.
///
/// # Examples
///
/// ```
/// use tetromino_core::shapes::rotation;
/// use tetromino_core::types::ShapeId;
///
/// assert_eq!(rotation(ShapeId::I, 0), rotation(ShapeId::I, 2));
/// assert_eq!(rotation(ShapeId::T, -1), rotation(ShapeId::T, 3));
/// ```
pub fn rotation(shape: ShapeId, index: i32) -> Matrix {
    rotation_states(shape)[normalize_rotation(shape, index) as usize]
}

/// Width in columns of a matrix.
pub fn matrix_width(matrix: Matrix) -> i8 {
    matrix.first().map_or(0, |row| row.len() as i8)
}

/// Height in rows of a matrix.
pub fn matrix_height(matrix: Matrix) -> i8 {
    matrix.len() as i8
}

/// Offsets `(cx, cy)` of every filled cell, row by row.
pub fn filled_cells(matrix: Matrix) -> impl Iterator<Item = (i8, i8)> {
    matrix.iter().enumerate().flat_map(|(cy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(cx, _)| (cx as i8, cy as i8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_counts_match_distinct_rotations() {
        assert_eq!(state_count(ShapeId::I), 2);
        assert_eq!(state_count(ShapeId::S), 2);
        assert_eq!(state_count(ShapeId::Z), 2);
        assert_eq!(state_count(ShapeId::O), 1);
        assert_eq!(state_count(ShapeId::J), 4);
        assert_eq!(state_count(ShapeId::L), 4);
        assert_eq!(state_count(ShapeId::T), 4);
    }

    #[test]
    fn every_state_has_four_cells_and_rectangular_rows() {
        for shape in ShapeId::ALL {
            for &matrix in rotation_states(shape) {
                assert_eq!(filled_cells(matrix).count(), 4, "{:?}", shape);
                let w = matrix_width(matrix) as usize;
                assert!(matrix.iter().all(|row| row.len() == w), "{:?}", shape);
            }
        }
    }

    #[test]
    fn negative_indices_wrap() {
        assert_eq!(normalize_rotation(ShapeId::J, -1), 3);
        assert_eq!(normalize_rotation(ShapeId::I, -3), 1);
        assert_eq!(normalize_rotation(ShapeId::O, -7), 0);
    }

    #[test]
    fn filled_cells_of_t_spawn_state() {
        let cells: Vec<_> = filled_cells(rotation(ShapeId::T, 0)).collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn matrix_dimensions() {
        assert_eq!(matrix_width(rotation(ShapeId::I, 0)), 4);
        assert_eq!(matrix_height(rotation(ShapeId::I, 0)), 1);
        assert_eq!(matrix_width(rotation(ShapeId::I, 1)), 1);
        assert_eq!(matrix_height(rotation(ShapeId::I, 1)), 4);
        assert_eq!(matrix_width(rotation(ShapeId::O, 0)), 2);
    }
}
