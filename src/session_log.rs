//! JSONL session log.
//!
//! One JSON object per line, one line per game event:
//!
//! ```text
//! {"seq":1,"ts_ms":0,"event":"spawned","shape":"t","x":4,"y":0}
//! {"seq":2,"ts_ms":4210,"event":"locked","shape":"t","rotation":1,"x":0,"y":17}
//! {"seq":3,"ts_ms":4210,"event":"lines_cleared","rows":[19],"count":1,"points":100}
//! ```
//!
//! `seq` starts at 1 and increases by one per line; `ts_ms` is the game clock.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{EventSink, GameEvent};

#[derive(Debug, Serialize)]
struct Record<'a> {
    seq: u64,
    ts_ms: u64,
    #[serde(flatten)]
    event: EventRecord<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum EventRecord<'a> {
    Spawned {
        shape: &'static str,
        x: i8,
        y: i8,
    },
    Locked {
        shape: &'static str,
        rotation: i32,
        x: i8,
        y: i8,
    },
    LinesCleared {
        rows: &'a [u8],
        count: usize,
        points: u32,
    },
    GameOver {
        score: u32,
    },
    Quit {
        score: u32,
    },
}

impl<'a> From<&'a GameEvent> for EventRecord<'a> {
    fn from(event: &'a GameEvent) -> Self {
        match event {
            GameEvent::Spawned { shape, x, y } => EventRecord::Spawned {
                shape: shape.as_str(),
                x: *x,
                y: *y,
            },
            GameEvent::Locked {
                shape,
                rotation,
                x,
                y,
            } => EventRecord::Locked {
                shape: shape.as_str(),
                rotation: *rotation,
                x: *x,
                y: *y,
            },
            GameEvent::LinesCleared { rows, points } => EventRecord::LinesCleared {
                rows: rows.as_slice(),
                count: rows.len(),
                points: *points,
            },
            GameEvent::GameOver { score } => EventRecord::GameOver { score: *score },
        }
    }
}

/// Writes game events as JSON lines.
pub struct SessionLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl SessionLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open session log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Number of lines written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, event: EventRecord<'_>, ts_ms: u64, flush: bool) -> io::Result<()> {
        self.seq += 1;
        let record = Record {
            seq: self.seq,
            ts_ms,
            event,
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        if flush {
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> EventSink for SessionLog<W> {
    fn record(&mut self, event: &GameEvent, now_ms: u64) -> io::Result<()> {
        let last = matches!(event, GameEvent::GameOver { .. });
        self.write_record(EventRecord::from(event), now_ms, last)
    }

    fn quit(&mut self, score: u32, now_ms: u64) -> io::Result<()> {
        self.write_record(EventRecord::Quit { score }, now_ms, true)
    }
}
