//! Session journal - JSON-lines record of what happened in a game
//!
//! When `TANKS_LOG_PATH` is set the game appends one JSON object per line:
//!
//! ```text
//! {"ts":1760680000123,"tick":0,"type":"start","width":1280,"height":720,"fire_cap":24}
//! {"ts":1760680000140,"tick":1,"type":"turn","turn":"right","facing":"right"}
//! {"ts":1760680000157,"tick":2,"type":"fire","shot":1,"x":308,"y":311}
//! {"ts":1760680000900,"tick":45,"type":"expired","count":1}
//! {"ts":1760680001200,"tick":63,"type":"quit","fired":1}
//! ```
//!
//! # Implementation
//!
//! - The file is opened up front so a bad path fails at startup
//! - Records cross an `std::sync::mpsc` channel to a dedicated writer thread;
//!   the game loop never touches the file
//! - Write errors end the writer quietly; the game keeps running
//! - Dropping the [`Journal`] closes the channel and joins the writer

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use tui_tanks_core::GameEvent;
use tui_tanks_types::{FIRE_CAP, HEIGHT, WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Start {
        width: i32,
        height: i32,
        fire_cap: u32,
    },
    Turn {
        turn: &'static str,
        facing: &'static str,
    },
    Fire {
        shot: u32,
        x: i32,
        y: i32,
    },
    FireSuppressed,
    Expired {
        count: u32,
    },
    Quit {
        fired: u32,
    },
}

impl Record {
    pub fn start() -> Self {
        Record::Start {
            width: WIDTH,
            height: HEIGHT,
            fire_cap: FIRE_CAP,
        }
    }
}

impl From<GameEvent> for Record {
    fn from(ev: GameEvent) -> Self {
        match ev {
            GameEvent::Turned { turn, facing } => Record::Turn {
                turn: turn.as_str(),
                facing: facing.as_str(),
            },
            GameEvent::Fired { x, y, shot } => Record::Fire { shot, x, y },
            GameEvent::FireSuppressed => Record::FireSuppressed,
            GameEvent::ProjectilesExpired { count } => Record::Expired { count },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Entry {
    ts: u64,
    tick: u64,
    #[serde(flatten)]
    record: Record,
}

/// Handle to the journal writer. A disabled journal ignores every record.
pub struct Journal {
    tx: Option<mpsc::Sender<Entry>>,
    writer: Option<thread::JoinHandle<()>>,
}

impl Journal {
    pub fn disabled() -> Self {
        Self {
            tx: None,
            writer: None,
        }
    }

    /// Open (append) the journal at `path` and start the writer thread.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;

        let (tx, rx) = mpsc::channel::<Entry>();
        let writer = thread::Builder::new()
            .name("tanks-journal".to_string())
            .spawn(move || write_entries(file, rx))
            .context("spawn journal writer")?;

        Ok(Self {
            tx: Some(tx),
            writer: Some(writer),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, tick: u64, record: Record) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        let entry = Entry {
            ts: now_ms(),
            tick,
            record,
        };
        // A closed channel means the writer gave up; keep playing.
        let _ = tx.send(entry);
    }

    pub fn record_events(&self, tick: u64, events: impl IntoIterator<Item = GameEvent>) {
        if !self.is_enabled() {
            return;
        }
        for ev in events {
            self.record(tick, ev.into());
        }
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        self.tx = None;
        if let Some(writer) = self.writer.take() {
            let _ = writer.join();
        }
    }
}

fn write_entries(file: File, rx: mpsc::Receiver<Entry>) {
    let mut out = BufWriter::new(file);
    let mut buf: Vec<u8> = Vec::with_capacity(256);

    'burst: while let Ok(first) = rx.recv() {
        let mut next = Some(first);
        while let Some(entry) = next {
            buf.clear();
            if serde_json::to_writer(&mut buf, &entry).is_ok() {
                buf.push(b'\n');
                if out.write_all(&buf).is_err() {
                    break 'burst;
                }
            }
            next = rx.try_recv().ok();
        }
        // Flush once the queue is drained so the file stays tail-able.
        if out.flush().is_err() {
            break;
        }
    }

    let _ = out.flush();
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
