//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TETRIS_*` environment variable; an
//! explicit flag wins. Board size and gravity are fixed and not configurable.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::{LoopConfig, UniformPieces};
use crate::types::DEFAULT_POLL_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tui-tetromino",
    version,
    about = "Falling-block puzzle in the terminal. Complete rows to clear them; each row scores 100.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/h/a   Move left    Right/l/d  Move right\n  Down/j/s   Soft drop    Up/k/w     Rotate\n  q / Esc / Ctrl-C  Quit"
)]
pub struct Args {
    /// Seed for the shape sequence. Uses OS randomness if not set.
    #[arg(long, env = "TETRIS_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Append a JSONL event log to this file. Empty disables logging.
    #[arg(long = "log", env = "TETRIS_LOG_PATH", value_name = "PATH")]
    pub log_path: Option<String>,

    /// Upper bound for one input poll, in milliseconds.
    #[arg(
        long,
        env = "TETRIS_POLL_MS",
        default_value_t = DEFAULT_POLL_MS,
        value_name = "MS"
    )]
    pub poll_ms: u64,
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub poll_timeout: Duration,
}

/// Accepted range for `--poll-ms`.
pub const POLL_MS_RANGE: std::ops::RangeInclusive<u64> = 1..=1000;

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if !POLL_MS_RANGE.contains(&args.poll_ms) {
            bail!(
                "poll interval must be between {} and {} ms, got {}",
                POLL_MS_RANGE.start(),
                POLL_MS_RANGE.end(),
                args.poll_ms
            );
        }

        let log_path = args
            .log_path
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Ok(Self {
            seed: args.seed,
            log_path,
            poll_timeout: Duration::from_millis(args.poll_ms),
        })
    }

    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            poll_timeout: self.poll_timeout,
        }
    }

    pub fn piece_source(&self) -> UniformPieces {
        match self.seed {
            Some(seed) => UniformPieces::seeded(seed),
            None => UniformPieces::from_os_rng(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            poll_timeout: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}
