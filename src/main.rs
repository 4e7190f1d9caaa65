//! Terminal runner (default binary).
//!
//! Polls crossterm input and a monotonic clock, feeds both into the engine,
//! and renders the resulting state through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::Config;
use blockfall::core::GameState;
use blockfall::input::handle_key_event;
use blockfall::store::HighScoreStore;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{FRAME_MS, GAME_OVER_HOLD_MS};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let store = HighScoreStore::new(&config.highscore_path);
    let highscore = store.load();

    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    let view = GameView::new(config.cell_width, 1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, &mut game, highscore);

    // The record is written before the game-over hold, but any failure is
    // only reported once the terminal is restored.
    let saved = result
        .is_ok()
        .then(|| store.save_if_higher(game.score(), highscore));
    let result = result.and_then(|()| hold_game_over_screen());

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if let Some(Err(err)) = saved {
        eprintln!(
            "[HighScore] could not save {} to {}: {:#}",
            game.score(),
            store.path().display(),
            err
        );
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &mut GameState,
    highscore: u32,
) -> Result<()> {
    let started = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    while !game.game_over() {
        render(term, view, game, highscore)?;

        // Handle input until the frame is over.
        let deadline = Instant::now() + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if game.game_over() {
                break;
            }
        }

        // Gravity.
        let now_ms = started.elapsed().as_millis() as u64;
        game.tick(now_ms);
    }

    render(term, view, game, highscore)
}

fn render(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &GameState,
    highscore: u32,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    term.draw(view.render(game, highscore, Viewport::new(w, h)))
}

/// Keep the final frame up for a while; any key press ends it early.
fn hold_game_over_screen() -> Result<()> {
    let deadline = Instant::now() + Duration::from_millis(GAME_OVER_HOLD_MS);
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if timeout.is_zero() || !event::poll(timeout)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
