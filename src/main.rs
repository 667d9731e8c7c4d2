use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use maze_chase::render::outcome_message;
use maze_chase::terminal::{self, TerminalGuard};
use maze_chase::{input, menu};
use maze_chase::{Game, LevelData, RandomDirections, Renderer, Session, Settings, Theme};

const END_SCREEN_HOLD: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    let settings = Settings::parse();
    init_tracing(&settings)?;

    let theme_path = settings.theme_path();
    let theme = Theme::load(&theme_path).map_err(|err| {
        error!(%err, "failed to load theme");
        err
    })?;

    let mut term = TerminalGuard::enter().context("failed to set up terminal")?;

    let difficulty = match settings.level {
        Some(level) => level,
        None => match menu::select_level(term.stdout(), event::read)
            .context("level prompt failed")?
        {
            Some(level) => level,
            None => {
                info!("no level chosen, exiting");
                return Ok(());
            }
        },
    };

    let maze_path = settings.maze_path(difficulty);
    let level = LevelData::load(&maze_path).map_err(|err| {
        error!(%err, "failed to load maze");
        err
    })?;
    info!(level = difficulty.label(), path = %maze_path.display(), "maze loaded");

    let game = Game::new(level, settings.lives);
    let renderer = Renderer::for_game(theme, &game);
    let rng = match settings.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let (events, _reader) = input::spawn_reader(event::read);
    let mut session = Session::new(game, RandomDirections::new(rng), renderer, settings.tick());
    let state = session.run(term.stdout(), &events, terminal::viewport)?;

    // Let the closing frame sit for a moment, or until a key is pressed.
    events.try_iter().for_each(drop);
    let _ = events.recv_timeout(END_SCREEN_HOLD);
    drop(term);

    println!(
        "{} Final score: {}",
        outcome_message(state),
        session.game().score()
    );
    Ok(())
}

/// Logs go to a file; the terminal belongs to the game.
fn init_tracing(settings: &Settings) -> Result<()> {
    let file = File::create(&settings.log_file)
        .with_context(|| format!("failed to create log file {}", settings.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
