//! Terminal runner (default binary).
//!
//! Parses configuration, then plays one game on the alternate screen. The
//! terminal is restored before anything is printed.

use anyhow::{Context, Result};

use tui_tetromino::config::Config;
use tui_tetromino::core::{run, GameEnd, GameState, MonotonicClock};
use tui_tetromino::input::CrosstermInput;
use tui_tetromino::session_log::SessionLog;
use tui_tetromino::term::TerminalFrontend;

struct Summary {
    end: GameEnd,
    lines: u32,
    pieces: u32,
}

fn main() -> Result<()> {
    // Configuration problems surface before raw mode.
    let config = Config::load()?;
    let mut log = config
        .log_path
        .as_deref()
        .map(SessionLog::open)
        .transpose()?;

    let mut frontend = TerminalFrontend::default();
    frontend.enter()?;

    let result = play(&config, &mut frontend, &mut log);

    // Always try to restore terminal state.
    let restored = frontend.exit();
    let summary = result?;
    restored?;

    match summary.end {
        GameEnd::GameOver { score } => println!("[Game] Game over. Score: {score}"),
        GameEnd::Quit { score } => println!("[Game] Quit. Score: {score}"),
    }
    println!(
        "[Game] Lines: {}, pieces: {}",
        summary.lines, summary.pieces
    );
    if let (Some(path), Some(log)) = (&config.log_path, &log) {
        println!("[Game] Logged {} events to {}", log.seq(), path.display());
    }
    Ok(())
}

fn play<W: std::io::Write>(
    config: &Config,
    frontend: &mut TerminalFrontend,
    log: &mut Option<SessionLog<W>>,
) -> Result<Summary> {
    let mut game = GameState::with_source(config.piece_source());
    let mut input = CrosstermInput::new();
    let clock = MonotonicClock::new();

    let end = run(
        &mut game,
        &mut input,
        &clock,
        frontend,
        log,
        config.loop_config(),
    )
    .context("game loop failed")?;

    if end.is_game_over() {
        input
            .wait_for_key()
            .context("failed to read key on game over screen")?;
    }

    Ok(Summary {
        end,
        lines: game.lines(),
        pieces: game.pieces_locked(),
    })
}
