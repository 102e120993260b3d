use crate::game_state::Phase;
use crate::piece::Piece;
use crate::shapes::filled_cells;
use crate::types::{Cell, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    pub rotation: i32,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute positions of the filled cells, including any above the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        Piece::from(*self).cells()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame, copied out of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Cell at `(x, y)` with the active piece drawn over the board.
    ///
    /// Returns `None` outside the grid.
    pub fn cell_at(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        if let Some(active) = self.active {
            let piece = Piece::from(active);
            let hit = filled_cells(piece.matrix())
                .any(|(cx, cy)| piece.x + cx == x && piece.y + cy == y);
            if hit {
                return Some(Cell::Occupied(active.shape));
            }
        }
        Some(self.board[y as usize][x as usize])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            pieces_locked: 0,
        }
    }
}
