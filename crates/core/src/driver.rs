//! Driver module - the poll/tick loop and the traits it runs over
//!
//! The loop owns a [`GameState`] and talks to the outside world only through
//! four small traits, so the same loop drives the terminal front-end and the
//! headless tests:
//!
//! - [`InputSource`]: waits up to a timeout for one [`GameAction`]
//! - [`Clock`]: monotonic milliseconds
//! - [`Renderer`]: draws a [`GameSnapshot`]
//! - [`EventSink`]: records [`GameEvent`]s, e.g. into a session log
//!
//! The input poll is the only place the loop waits, and it is bounded by the
//! poll timeout, so gravity keeps running while no key is pressed.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::game_state::{GameEvent, GameState};
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, DEFAULT_POLL_MS};

/// Source of player actions.
pub trait InputSource {
    /// Wait at most `timeout` for the next action.
    ///
    /// `Ok(None)` means nothing actionable arrived in time.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameAction>>;
}

/// Monotonic time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Receives one snapshot per loop iteration.
pub trait Renderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;
}

/// Receives the events of every tick, in order.
pub trait EventSink {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()>;

    /// Called once when the player quits.
    fn quit(&mut self, _score: u32, _now_ms: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Discards everything.
impl EventSink for () {
    fn record(&mut self, _event: &GameEvent, _now_ms: u64) -> io::Result<()> {
        Ok(())
    }
}

/// `None` discards everything.
impl<T: EventSink> EventSink for Option<T> {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()> {
        match self {
            Some(sink) => sink.record(event, now_ms),
            None => Ok(()),
        }
    }

    fn quit(&mut self, score: u32, now_ms: u64) -> io::Result<()> {
        match self {
            Some(sink) => sink.quit(score, now_ms),
            None => Ok(()),
        }
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()> {
        (**self).record(event, now_ms)
    }

    fn quit(&mut self, score: u32, now_ms: u64) -> io::Result<()> {
        (**self).quit(score, now_ms)
    }
}

impl<T: EventSink + ?Sized> EventSink for Box<T> {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()> {
        (**self).record(event, now_ms)
    }

    fn quit(&mut self, score: u32, now_ms: u64) -> io::Result<()> {
        (**self).quit(score, now_ms)
    }
}

/// How a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A spawned piece collided with the stack.
    GameOver { score: u32 },
    /// The player quit.
    Quit { score: u32 },
}

impl GameEnd {
    pub fn score(&self) -> u32 {
        match self {
            GameEnd::GameOver { score } | GameEnd::Quit { score } => *score,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEnd::GameOver { .. })
    }
}

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Upper bound for one input poll.
    pub poll_timeout: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

/// Run `game` until it ends.
///
/// Each iteration draws the current snapshot, polls for one action and ticks
/// the game with the clock's time. `Quit` ends the loop at once without the
/// game-over transition. On a natural game over the final snapshot is drawn
/// before returning. I/O errors from any collaborator abort the loop.
pub fn run<S, I, C, R, E>(
    game: &mut GameState<S>,
    input: &mut I,
    clock: &C,
    renderer: &mut R,
    events: &mut E,
    config: LoopConfig,
) -> io::Result<GameEnd>
where
    S: PieceSource,
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
    R: Renderer + ?Sized,
    E: EventSink + ?Sized,
{
    game.start(clock.now_ms());
    flush_events(game, events, clock.now_ms())?;

    loop {
        if game.game_over() {
            renderer.draw(&game.snapshot())?;
            return Ok(GameEnd::GameOver {
                score: game.score(),
            });
        }

        renderer.draw(&game.snapshot())?;

        let action = input.poll(config.poll_timeout)?;
        if action == Some(GameAction::Quit) {
            events.quit(game.score(), clock.now_ms())?;
            return Ok(GameEnd::Quit {
                score: game.score(),
            });
        }

        let now = clock.now_ms();
        game.tick(action, now);
        flush_events(game, events, now)?;
    }
}

fn flush_events<S, E>(game: &mut GameState<S>, events: &mut E, now_ms: u64) -> io::Result<()>
where
    S: PieceSource,
    E: EventSink + ?Sized,
{
    for event in game.drain_events() {
        events.record(&event, now_ms)?;
    }
    Ok(())
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for headless runs.
///
/// Clones share the same time, so a test can keep one handle while the loop
/// reads another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Replays a fixed list of poll results.
///
/// Every poll advances the attached clock (if any) by the full timeout, as a
/// real poll that waited without input would. Once the script is exhausted
/// it reports `Quit`, so a loop under test always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<GameAction>>,
    clock: Option<ManualClock>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<GameAction>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            clock: None,
            polls: 0,
        }
    }

    /// Advance `clock` by the poll timeout on every poll.
    pub fn with_clock(mut self, clock: ManualClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Number of polls served so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameAction>> {
        self.polls += 1;
        if let Some(clock) = &self.clock {
            clock.advance(timeout.as_millis() as u64);
        }
        Ok(self.script.pop_front().unwrap_or(Some(GameAction::Quit)))
    }
}

/// Renderer that keeps every snapshot it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<GameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.frames.push(*snapshot);
        Ok(())
    }
}

/// Event sink that keeps every event with its timestamp.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<(u64, GameEvent)>,
    pub quit: Option<(u32, u64)>,
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()> {
        self.events.push((now_ms, event.clone()));
        Ok(())
    }

    fn quit(&mut self, score: u32, now_ms: u64) -> io::Result<()> {
        self.quit = Some((score, now_ms));
        Ok(())
    }
}
