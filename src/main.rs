//! Pixel Runner entry point
//!
//! Loads settings, opens the terminal frontend and runs the game loop.
//! Logs go to stderr; redirect them (`2>runner.log`) to keep the screen clean.

use std::io;

use pixel_runner::audio::TerminalBell;
use pixel_runner::platform::SystemClock;
use pixel_runner::platform::terminal::{TerminalInput, TerminalRenderer, TerminalSession};
use pixel_runner::settings::DEFAULT_SETTINGS_FILE;
use pixel_runner::{Game, JsonFileStore, Settings, World};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Pixel Runner starting...");

    let settings = Settings::load(DEFAULT_SETTINGS_FILE);
    let world = World::from_settings(&settings);
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "World {}x{}, scale {:.3}, seed {seed}",
        world.width,
        world.height,
        world.scale
    );

    let store = JsonFileStore::new(&settings.scores_path);
    let mut game = Game::new(world, store, SystemClock::new(), seed);

    let session = TerminalSession::start()?;
    let mut input = TerminalInput::new(session.key_release_events());
    let mut renderer = TerminalRenderer::new(io::stdout());
    let mut audio = TerminalBell::new(io::stdout(), settings.sfx_volume, settings.music_volume);

    let result = game.run(&mut input, &mut renderer, &mut audio);
    drop(session);

    log::info!("Best score this session: {}", game.state().leaderboard.top_score());
    result
}
