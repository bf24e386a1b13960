//! Terminal 2048 runner (default binary).
//!
//! Wires the board engine to crossterm input and the framebuffer renderer.
//! All game rules live in `tui_2048::core`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{FileStore, GameSnapshot, GameState, HighScoreStore, RandSource, TileRng};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::logging::setup_logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;
use tui_2048::GameConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    // Logging is best effort; the game is playable without it.
    let _logger = setup_logging(&config.log_dir).ok();
    log::info!("starting with {:?}", config);

    let rng = match config.seed {
        Some(seed) => RandSource::seeded(seed),
        None => RandSource::from_entropy(),
    };
    let store = FileStore::new(&config.highscore_path);
    let mut game = GameState::new(config.size, rng, store)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "session over: score {} best {} moves {}",
        game.score(),
        game.high_score(),
        game.moves()
    );
    result
}

fn run<R: TileRng, S: HighScoreStore>(
    term: &mut TerminalRenderer,
    game: &mut GameState<R, S>,
) -> Result<()> {
    let view = GameView::default();
    let mut swipe = SwipeTracker::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse_event(mouse).map(GameAction::Move),
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            let changed = game.apply_action(action);
            dirty |= changed;
            if changed && game.is_game_over() {
                log::debug!("no moves left at score {}", game.score());
            }
        }
    }
}
