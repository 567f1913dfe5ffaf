//! Terminal runner (default binary).
//!
//! Fixed-rate loop: drain pending key presses, apply one gravity tick, draw,
//! then sleep out the rest of the frame.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameState, TickOutcome};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::DEFAULT_FPS;

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames (and gravity steps) per second.
    #[arg(short, long)]
    fps: Option<u32>,

    /// Write log records to this file. Filter with RUST_LOG (default: info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let fps = args.fps.unwrap_or(DEFAULT_FPS).max(1);
    log::info!("starting with seed {seed} at {fps} fps");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, fps);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }

    match result? {
        Exit::Quit => log::info!("quit by player"),
        Exit::GameOver => println!("Game Over"),
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u64, fps: u32) -> Result<Exit> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_secs(1) / fps;

    loop {
        let frame_start = Instant::now();

        // Input: everything that arrived since the last frame.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(Exit::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if let TickOutcome::GameOver { .. } = game.tick() {
            log::info!("replay this game with --seed {}", game.seed());
            return Ok(Exit::GameOver);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Send log records to `path`. The terminal itself is busy drawing the game.
fn init_logging(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
