//! Application layer: the playing session and the headless command line runner.

pub mod game;
pub mod map;
pub mod session;

pub use game::Game;
pub use map::{render_map, save_map};
pub use session::{Autopilot, SessionSummary, run_session};

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use crate::player::collision::CollisionPolicy;
use crate::save::{DEFAULT_WORLD_FILE, load_world, save_world};
use crate::utils::settings::{GameSettings, load_settings, save_settings};
use crate::world::generator::DecorationPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// World seed text (random when omitted)
    #[arg(long)]
    pub seed: Option<String>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    pub ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Settings file, as written by `--write-settings`
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Resume from a saved world instead of generating one
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Save the world here when the session ends
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_WORLD_FILE)]
    pub save: Option<PathBuf>,

    /// Grow trees as well as structures
    #[arg(long, default_value_t = false)]
    pub trees: bool,

    /// Cancel blocked moves instead of snapping to the obstacle
    #[arg(long, default_value_t = false)]
    pub cancel_on_contact: bool,

    /// Write the effective settings here when the session ends
    #[arg(long)]
    pub write_settings: Option<PathBuf>,

    /// Write a one-pixel-per-tile PNG of the world when the session ends
    #[arg(long)]
    pub map: Option<PathBuf>,
}

impl Args {
    fn game_settings(&self) -> GameSettings {
        let mut settings = match &self.settings {
            Some(path) => match load_settings(path) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        "Failed to load settings from {}: {}, using defaults",
                        path.display(),
                        e
                    );
                    GameSettings::default()
                }
            },
            None => GameSettings::default(),
        };
        if self.trees {
            settings.generation.decoration = DecorationPolicy::Both;
        }
        if self.cancel_on_contact {
            settings.physics.collision_policy = CollisionPolicy::CancelOnContact;
        }
        settings
    }
}

pub fn run_game() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<(), Box<dyn Error>> {
    let settings = args.game_settings();
    let mut game = match &args.load {
        Some(path) => Game::from_saved(load_world(path)?, settings)?,
        None => Game::new(args.seed.as_deref(), settings)?,
    };

    let summary = run_session(&mut game, args.ticks, args.dt)?;
    tracing::info!(
        "Ran {} ticks: {} landings, {} damage taken, {} deaths, {} tiles mined",
        summary.ticks,
        summary.landings,
        summary.damage,
        summary.deaths,
        summary.mined
    );
    tracing::info!(
        "Player at ({:.1}, {:.1}) with {} health on seed {}",
        game.player.position.x,
        game.player.position.y,
        game.player.health,
        game.world.seed
    );
    for (tile, count) in game.inventory.items() {
        tracing::info!("  {:?} x{}", tile, count);
    }

    if let Some(path) = &args.save {
        save_world(path, &game.to_saved())?;
    }
    if let Some(path) = &args.write_settings {
        save_settings(path, &game.settings)?;
        tracing::info!("Settings written to {}", path.display());
    }
    if let Some(path) = &args.map {
        save_map(path, &game.world)?;
    }
    Ok(())
}
