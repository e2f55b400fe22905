//! Headless driver: command names on stdin, JSON observations on stdout.
//!
//! ```text
//! $ printf 'start\nhardDrop\n' | TETRIS_SEED=7 tetris-headless
//! ```
//!
//! One observation is printed before any input is read. Gravity never runs on
//! its own here; send `tick` to advance it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use tetris_engine::config::RunConfig;
use tetris_engine::observe::HeadlessSession;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    eprintln!("[tetris] headless session, seed {}", config.seed);

    let mut session = HeadlessSession::new(config.seed);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", session.observe()?)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        if let Some(reply) = session.handle_line(&line)? {
            writeln!(out, "{}", reply)?;
            out.flush()?;
        }
    }

    let state = session.game().state();
    eprintln!(
        "[tetris] input closed, score {} game_over {}",
        state.score(),
        state.is_game_over()
    );
    Ok(())
}
