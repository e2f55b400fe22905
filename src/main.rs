//! Terminal Tetris runner (default binary).
//!
//! Renders through the framebuffer-based terminal view and polls crossterm for
//! input until the next gravity tick is due.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_engine::config::RunConfig;
use tetris_engine::core::{Game, GameSnapshot, Gravity};
use tetris_engine::input::{command_for_key, should_quit};
use tetris_engine::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_engine::types::{Command, FAST_DROP_MS};

/// Poll timeout while no piece is falling.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    eprintln!(
        "[tetris] seed {} gravity {}ms",
        config.seed, config.gravity_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    let summary = result?;
    restored?;

    eprintln!(
        "[tetris] {} game(s) finished, final score {}",
        summary.games_over, summary.final_score
    );
    Ok(())
}

struct Summary {
    final_score: u32,
    games_over: u32,
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<Summary> {
    let mut game = Game::new(config.seed);
    let mut gravity = Gravity::new(config.gravity_ms);
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut games_over = 0;
    let mut last = Instant::now();
    let mut last_soft_drop: Option<Instant> = None;
    let soft_drop_repeat = Duration::from_millis(FAST_DROP_MS as u64);

    loop {
        game.state().snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if game.state().accepts_ticks() {
            Duration::from_millis(gravity.until_next_ms() as u64)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(Summary {
                            final_score: game.state().score(),
                            games_over,
                        });
                    }
                    if let Some(cmd) = command_for_key(key) {
                        // Held soft drop repeats no faster than the fast-drop cadence.
                        if cmd == Command::SoftDrop {
                            let now = Instant::now();
                            let repeating = last_soft_drop
                                .is_some_and(|t| now.duration_since(t) < soft_drop_repeat);
                            if repeating {
                                continue;
                            }
                            last_soft_drop = Some(now);
                        }
                        let was_over = game.state().is_game_over();
                        game.apply_action(cmd);
                        if cmd == Command::Start {
                            gravity.reset();
                        } else if !was_over && game.state().is_game_over() {
                            games_over += 1;
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;

        let due = gravity.advance(elapsed, game.state().accepts_ticks());
        for _ in 0..due {
            if !game.state().accepts_ticks() {
                break;
            }
            game.tick();
            if game.state().is_game_over() {
                games_over += 1;
            }
        }
    }
}
