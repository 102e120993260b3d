//! Board tests - grid access, merge and line clearing

use tui_tetromino::core::{Board, Piece};
use tui_tetromino::types::{Cell, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, shape: ShapeId) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Occupied(shape));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({}, {})", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Cell::Occupied(ShapeId::T)));
    assert_eq!(board.get(5, 10), Some(Cell::Occupied(ShapeId::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, Cell::Empty));
    assert_eq!(board.get(5, 10), Some(Cell::Empty));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Cell::Occupied(ShapeId::T)));
    assert!(!board.set(0, -1, Cell::Occupied(ShapeId::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Cell::Occupied(ShapeId::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Cell::Occupied(ShapeId::T)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_merge_tags_cells_with_shape() {
    let mut board = Board::new();
    let piece = Piece {
        shape: ShapeId::L,
        rotation: 0,
        x: 2,
        y: 18,
    };
    board.merge(&piece);

    // L spawn state: [001;111]
    assert_eq!(board.get(4, 18), Some(Cell::Occupied(ShapeId::L)));
    for x in 2..5 {
        assert_eq!(board.get(x, 19), Some(Cell::Occupied(ShapeId::L)));
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_merge_skips_cells_above_board() {
    let mut board = Board::new();
    // Vertical I with its top two cells above row 0
    let piece = Piece {
        shape: ShapeId::I,
        rotation: 1,
        x: 7,
        y: -2,
    };
    board.merge(&piece);

    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_occupied(7, 0));
    assert!(board.is_occupied(7, 1));
}

#[test]
fn test_clear_lines_without_full_rows_is_identity() {
    let mut board = Board::new();
    for y in 10..BOARD_HEIGHT as i8 {
        for x in 0..(BOARD_WIDTH as i8 - 1) {
            board.set((x + y) % BOARD_WIDTH as i8, y, Cell::Occupied(ShapeId::S));
        }
    }
    let before = board.clone();

    let cleared = board.clear_lines();
    assert!(cleared.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_line_shifts_rows_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ShapeId::I);
    board.set(3, 18, Cell::Occupied(ShapeId::T));
    board.set(6, 17, Cell::Occupied(ShapeId::J));

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[19]);

    assert_eq!(board.get(3, 19), Some(Cell::Occupied(ShapeId::T)));
    assert_eq!(board.get(6, 18), Some(Cell::Occupied(ShapeId::J)));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.row(0).iter().all(|c| c.is_empty()));
}

#[test]
fn test_clear_non_adjacent_lines_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ShapeId::I);
    board.set(0, 18, Cell::Occupied(ShapeId::O));
    fill_row(&mut board, 17, ShapeId::I);
    board.set(9, 16, Cell::Occupied(ShapeId::Z));

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[17, 19]);

    // Survivors keep their relative order, settled to the bottom
    assert_eq!(board.get(0, 19), Some(Cell::Occupied(ShapeId::O)));
    assert_eq!(board.get(9, 18), Some(Cell::Occupied(ShapeId::Z)));
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_clear_every_row() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, ShapeId::Z);
    }
    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert_eq!(board, Board::new());
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for x in 0..(BOARD_WIDTH as i8 - 1) {
        board.set(x, 19, Cell::Occupied(ShapeId::J));
    }
    assert!(!board.is_row_full(19));
    board.set(BOARD_WIDTH as i8 - 1, 19, Cell::Occupied(ShapeId::J));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}
