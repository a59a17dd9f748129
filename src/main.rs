//! Terminal Flappy Bird runner (default binary).
//!
//! Hosts the frame clock: one update pass (with a single level-sampled jump
//! input) and one render pass per 16ms tick. All game rules live in the
//! `core` crate; this loop only moves data across the adapter boundary.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::core::{GameState, Scene};
use tui_flappy::input::{is_jump_key, should_quit, JumpState};
use tui_flappy::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_flappy::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let mut jump = JumpState::new();
    let mut scene = Scene::new();
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        scene.rebuild(&game);
        view.render_into(scene.commands(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_jump_key(key) {
                            jump.key_down();
                        }
                    }
                    KeyEventKind::Release => {
                        if is_jump_key(key) {
                            jump.key_up();
                        }
                    }
                },
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.update(jump.sample());
        }
    }
}

/// Seed the gap sequence from the wall clock, one run per seed.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
