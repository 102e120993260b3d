//! Game state module - the spawn / fall / lock / clear state machine
//!
//! This module ties together the board, the active piece, the piece source and
//! scoring. Time is passed in by the caller as monotonic milliseconds, so the
//! state machine never reads a clock itself and runs identically under a real
//! terminal loop or a scripted test.
//!
//! One call to [`GameState::tick`] applies at most one player action and then
//! checks gravity. When gravity finds the piece resting on something, the
//! transient phases run to completion inside the same tick:
//!
//! ```text
//! Spawning -> Falling -> Locking -> Clearing -> Spawning | GameOver
//! ```

use arrayvec::ArrayVec;

use crate::board::{Board, ClearedRows};
use crate::collision::collides;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, ShapeId, GRAVITY_INTERVAL_MS};

/// Lifecycle phase of one game.
///
/// Between ticks a running game is always `Falling`; `Locking`, `Clearing`
/// and `Spawning` are passed through inside a tick. `Spawning` is also the
/// phase of a game that has not been started yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

/// Something that happened during the last `start`/`tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new piece entered the board.
    Spawned { shape: ShapeId, x: i8, y: i8 },
    /// The active piece was merged into the board.
    Locked {
        shape: ShapeId,
        rotation: i32,
        x: i8,
        y: i8,
    },
    /// Full rows were removed (top to bottom) and points awarded.
    LinesCleared { rows: ClearedRows, points: u32 },
    /// A freshly spawned piece collided; the game is finished.
    GameOver { score: u32 },
}

/// At most: locked, lines cleared, spawned or game over.
const MAX_EVENTS_PER_TICK: usize = 4;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    active: Option<Piece>,
    pieces: S,
    phase: Phase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    last_fall_ms: u64,
    events: ArrayVec<GameEvent, MAX_EVENTS_PER_TICK>,
}

impl GameState<UniformPieces> {
    /// Create a game whose shapes come from a seeded uniform source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformPieces::seeded(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game that draws its shapes from `pieces`
    pub fn with_source(pieces: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            pieces,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            last_fall_ms: 0,
            events: ArrayVec::new(),
        }
    }

    /// Start the game at time `now_ms` and spawn the first piece
    ///
    /// Has no effect once the game is running or over.
    pub fn start(&mut self, now_ms: u64) {
        if self.started() {
            return;
        }
        self.events.clear();
        self.last_fall_ms = now_ms;
        self.advance();
    }

    pub fn started(&self) -> bool {
        self.active.is_some() || self.phase != Phase::Spawning
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions before `start`
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn last_fall_ms(&self) -> u64 {
        self.last_fall_ms
    }

    pub fn piece_source(&self) -> &S {
        &self.pieces
    }

    /// Events produced by the most recent `start` or `tick`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events produced by the most recent `start` or `tick`
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_rows(),
            active: self.active.map(ActiveSnapshot::from),
            phase: self.phase,
            score: self.score,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
        }
    }

    /// Would the active piece collide after this offset/rotation?
    ///
    /// Without an active piece everything counts as blocked.
    pub fn collides(&self, dx: i8, dy: i8, rotation: Option<i32>) -> bool {
        match self.active {
            Some(piece) => collides(&self.board, &piece, dx, dy, rotation),
            None => true,
        }
    }

    /// Apply one player action to the falling piece
    ///
    /// Returns `true` when the piece moved or rotated. Blocked moves and
    /// rotations are silently rejected. `Quit` is never handled here; the loop
    /// that owns the game decides what quitting means.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Quit => false,
        }
    }

    /// Advance the game to `now_ms`
    ///
    /// Applies `action` first (at most one per tick), then lets gravity act
    /// once more than [`GRAVITY_INTERVAL_MS`] has passed since the last fall.
    /// A piece that cannot fall is locked, full rows are cleared and the next
    /// piece spawns, all within this call. Calling `tick` on a game that has
    /// not been started starts it.
    pub fn tick(&mut self, action: Option<GameAction>, now_ms: u64) {
        if !self.started() {
            self.start(now_ms);
            return;
        }
        if self.phase == Phase::GameOver {
            return;
        }
        self.events.clear();

        if let Some(action) = action {
            self.apply_action(action);
        }

        if now_ms.saturating_sub(self.last_fall_ms) > GRAVITY_INTERVAL_MS {
            self.last_fall_ms = now_ms;
            if !self.try_move(0, 1) {
                self.phase = Phase::Locking;
            }
        }

        self.advance();
    }

    /// Run transient phases until the game rests in `Falling` or `GameOver`
    fn advance(&mut self) {
        loop {
            match self.phase {
                Phase::Spawning => self.spawn_piece(),
                Phase::Locking => self.lock_piece(),
                Phase::Clearing => self.clear_rows(),
                Phase::Falling | Phase::GameOver => break,
            }
        }
    }

    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.pieces.next_shape());

        if collides(&self.board, &piece, 0, 0, None) {
            self.active = None;
            self.phase = Phase::GameOver;
            self.push_event(GameEvent::GameOver { score: self.score });
            return;
        }

        self.active = Some(piece);
        self.phase = Phase::Falling;
        self.push_event(GameEvent::Spawned {
            shape: piece.shape,
            x: piece.x,
            y: piece.y,
        });
    }

    fn lock_piece(&mut self) {
        if let Some(piece) = self.active.take() {
            self.board.merge(&piece);
            self.pieces_locked = self.pieces_locked.saturating_add(1);
            self.push_event(GameEvent::Locked {
                shape: piece.shape,
                rotation: piece.rotation,
                x: piece.x,
                y: piece.y,
            });
        }
        self.phase = Phase::Clearing;
    }

    fn clear_rows(&mut self) {
        let rows = self.board.clear_lines();
        if !rows.is_empty() {
            let points = line_clear_score(rows.len());
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(rows.len() as u32);
            self.push_event(GameEvent::LinesCleared { rows, points });
        }
        self.phase = Phase::Spawning;
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(piece) if !collides(&self.board, &piece, dx, dy, None) => {
                self.active = Some(piece.shifted(dx, dy));
                true
            }
            _ => false,
        }
    }

    /// Try to advance to the next rotation state, without wall kicks
    fn try_rotate(&mut self) -> bool {
        match self.active {
            Some(piece) => {
                let next = piece.rotation + 1;
                if collides(&self.board, &piece, 0, 0, Some(next)) {
                    return false;
                }
                self.active = Some(piece.with_rotation(next));
                true
            }
            None => false,
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        // Capacity covers the longest tick; anything beyond is dropped.
        let _ = self.events.try_push(event);
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::with_source(UniformPieces::from_os_rng())
    }
}
