//! Terminal blockfall runner.
//!
//! Owns the fixed-timestep loop: wall-clock lag is accumulated and converted
//! into whole ticks, each forwarded to the core exactly once and in order.
//! Input and rendering happen between ticks only.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{map_key, should_quit, KeyLatch};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MICROS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Seed once per process.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);

    let view = GameView::default();
    let mut latch = KeyLatch::new();

    let tick_duration = Duration::from_micros(TICK_MICROS);
    let mut previous = Instant::now();
    let mut lag = Duration::ZERO;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&game, Viewport::new(w, h));
        term.draw(&frame)?;

        // Wait for input at most until the next tick is due.
        let timeout = tick_duration.saturating_sub(lag);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(button) = map_key(key.code) {
                            // Repeats refresh the latch but press only once.
                            if latch.press(button) {
                                game.button_down(button);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(button) = map_key(key.code) {
                            if latch.release(button) {
                                game.button_up(button);
                            }
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        lag += now - previous;
        previous = now;

        while lag >= tick_duration {
            lag -= tick_duration;

            // Synthetic releases for terminals without key-up events.
            for button in latch.tick(tick_duration) {
                game.button_up(button);
            }

            game.tick();
        }
    }
}
