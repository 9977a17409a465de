//! Terminal runner (default binary).
//!
//! Owns the I/O around the game core: command-line configuration, logging,
//! the fixed-interval tick loop, key polling and terminal rendering.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::cli::Args;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();

    // Silent unless RUST_LOG is set; redirect stderr to keep the screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = args.game_config().context("invalid game configuration")?;

    // Restore the terminal before printing a panic.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        eprint!("{panic_info}\n\n");
    }));

    let mut game = GameState::with_rng(config, args.randomizer());
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "session ended: {} pieces, {} rows cleared, {} ticks",
        game.pieces_spawned(),
        game.rows_cleared(),
        game.ticks()
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, args: &Args) -> Result<()> {
    let view = GameView::new(args.cell_width, 1);
    let tick_duration = args.tick_duration();
    let mut snapshot = GameSnapshot::new(game.grid().rows(), game.grid().cols());
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();

            if let Some(event) = game.take_last_event() {
                if !event.cleared_rows.is_empty() {
                    info!("cleared rows {:?}", event.cleared_rows.as_slice());
                }
            }
        }
    }
}
