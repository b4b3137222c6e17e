//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer. Input is
//! read blocking: the board only changes in response to a key, so there is
//! no tick loop.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::core::{events_of, Game, GameConfig, GameSnapshot};
use tui_2048::input::{handle_key_event, is_restart, should_quit};
use tui_2048::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, GameEvent};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Slide and merge tiles to reach 2048")]
struct Args {
    /// Board side length, 2 to 16 (overrides TUI2048_SIZE).
    #[arg(long, short)]
    size: Option<u8>,
    /// Seed for tile spawns (overrides TUI2048_SEED; random when neither is set).
    #[arg(long)]
    seed: Option<u32>,
    /// Write logs to this file. Without it nothing is logged, since the
    /// terminal belongs to the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log)?;
    }

    let config = resolve_config(&args);
    let mut game = Game::new(config).context("invalid game configuration")?;
    game.start();
    info!(size = config.size, seed = config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up terminal")?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    info!(score = game.score(), moves = game.moves(), "exiting");
    result
}

fn resolve_config(args: &Args) -> GameConfig {
    let mut config = GameConfig::from_env();
    if let Some(size) = args.size {
        config.size = size;
    }
    config.seed = match args.seed {
        Some(seed) => seed,
        None if std::env::var_os("TUI2048_SEED").is_some() => config.seed,
        None => rand::random(),
    };
    config
}

fn init_logging(path: &Path, filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// What the loop should do after a key press.
enum Flow {
    Continue,
    Quit,
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    // Won and Lost can arrive from the same move; show them in order.
    let mut overlays: VecDeque<Overlay> = VecDeque::new();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let overlay = overlays.front().copied().unwrap_or(Overlay::None);
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Resize(..) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Flow::Quit = handle_key(key, game, &mut overlays) {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}

fn handle_key(key: KeyEvent, game: &mut Game, overlays: &mut VecDeque<Overlay>) -> Flow {
    match overlays.front() {
        Some(Overlay::Won) => {
            // Any key dismisses the win dialog; quit still quits.
            overlays.pop_front();
            return if should_quit(key) {
                Flow::Quit
            } else {
                Flow::Continue
            };
        }
        Some(Overlay::Lost) => {
            if should_quit(key) {
                return Flow::Quit;
            }
            if is_restart(key) {
                overlays.clear();
                game.restart();
            }
            return Flow::Continue;
        }
        Some(Overlay::None) | None => {}
    }

    let Some(action) = handle_key_event(key) else {
        return Flow::Continue;
    };
    if action == GameAction::Quit {
        return Flow::Quit;
    }

    for event in events_of(game.handle_input(action)) {
        match event {
            GameEvent::Won => overlays.push_back(Overlay::Won),
            GameEvent::Lost => overlays.push_back(Overlay::Lost),
            GameEvent::Moved | GameEvent::NoOp => {}
        }
    }
    Flow::Continue
}
