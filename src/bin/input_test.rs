//! Key event probe.
//!
//! Prints every key event the terminal delivers together with what the game
//! would do with it. Useful for checking whether a terminal reports key
//! release and auto-repeat events, which decides how the forward key behaves.
//! Quit with q, Esc or Ctrl-C.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_tanks::input::{handle_key_event, is_forward_key, should_quit};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut out = io::stdout();
    write!(out, "press keys (q / Esc / Ctrl-C quits)\r\n")?;
    out.flush()?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        let kind = match key.kind {
            KeyEventKind::Press => "press",
            KeyEventKind::Repeat => "repeat",
            KeyEventKind::Release => "release",
        };
        let mapped = if should_quit(key) {
            "quit"
        } else if is_forward_key(key.code) {
            "forward (held)"
        } else {
            handle_key_event(key).map(|a| a.as_str()).unwrap_or("-")
        };
        write!(
            out,
            "{:<8} {:<24} -> {}\r\n",
            kind,
            format!("{:?}", key.code),
            mapped
        )?;
        out.flush()?;

        if should_quit(key) && key.kind == KeyEventKind::Press {
            return Ok(());
        }
    }
}
