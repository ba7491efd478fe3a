mod display;

use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use alien_invasion::config::{Config, DEFAULT_CONFIG_PATH};
use alien_invasion::error::GameResult;
use alien_invasion::game::Game;
use alien_invasion::settings::Settings;

use display::{ShipSprite, TerminalBackend};

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down a descending alien fleet in the terminal")]
struct Args {
    /// TOML config file; compiled defaults are used if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the target frame rate
    #[arg(long)]
    fps: Option<u32>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to `path` so records never land on the game screen. Without a path,
/// records go to stderr (redirect it when playing).
fn init_logging(path: Option<&Path>) -> GameResult<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(path) = path {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    let args = Args::parse();

    let (mut config, source) = Config::load_or_default(&args.config)?;
    if let Some(fps) = args.fps {
        config.runtime.fps = fps;
        config.validate()?;
    }
    init_logging(config.runtime.log_file.as_deref())?;
    info!("{source}");

    // Assets load before the terminal is taken over so failures print cleanly.
    let sprite = ShipSprite::load(config.ship.sprite.as_deref())?;

    let mut game = Game::new(Settings::from_config(&config));
    let out = BufWriter::new(stdout());
    let mut backend = TerminalBackend::new(out, &game.settings, sprite, config.runtime.fps)?;

    let result = game.run(&mut backend);

    // Always restore the terminal
    backend.restore();

    result
}
