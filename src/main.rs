//! Terminal falling-block puzzle (default binary).
//!
//! Fixed-timestep frame loop: draw, poll input until the next tick is due,
//! feed measured elapsed time to the engine, drain events into the status
//! line.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Engine;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(clock_seed());
    engine.initialize();

    let view = GameView;
    let mut status = String::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&view.render(&engine, &status))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
            }
        }

        // Tick with measured elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            engine.tick(elapsed.as_millis() as u32);
        }

        for event in engine.take_events() {
            match event {
                GameEvent::LinesCleared(1) => status = "Cleared 1 line".to_string(),
                GameEvent::LinesCleared(n) => status = format!("Cleared {n} lines"),
                GameEvent::LeveledUp(level) => status = format!("Level {level}!"),
                GameEvent::GameOver { score, .. } => {
                    status = format!("Game over. Final score: {score}")
                }
                GameEvent::Moved | GameEvent::Rotated | GameEvent::Locked => {}
            }
        }
    }
}
