use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, GameEngine};
use grid_snake::logging::{self, LogTarget};
use grid_snake::modes::{AutoplayConfig, AutoplayMode, HumanMode, autoplay::format_reports};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a bounded grid with grow, shrink and bonus food")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Half-extent of the board in world units
    #[arg(long)]
    grid_length: Option<i32>,

    /// Cell size in world units
    #[arg(long)]
    cell: Option<i32>,

    /// Step-threshold multiplier, 0.5 (fast) to 20 (slow)
    #[arg(long)]
    speed_factor: Option<f32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the cheat autopilot on
    #[arg(long)]
    cheat: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Games to play in autoplay mode
    #[arg(long, default_value = "10")]
    games: usize,

    /// Step cap per game in autoplay mode
    #[arg(long, default_value = "5000")]
    max_steps: u32,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Let the cheat autopilot play without a UI
    Autoplay,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_length) = self.grid_length {
            config.grid_length = grid_length;
        }
        if let Some(cell) = self.cell {
            config.cell = cell;
        }
        if let Some(speed_factor) = self.speed_factor {
            config.speed_factor = speed_factor;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn engine(&self, config: GameConfig) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, &cli.mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Autoplay) => LogTarget::Stderr,
        (None, Mode::Human) => LogTarget::Disabled,
    };
    logging::init(log_target)?;

    let config = cli.game_config()?;
    tracing::info!(?config, "configuration loaded");

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::with_engine(cli.engine(config));
            if cli.cheat {
                human_mode.enable_cheat();
            }
            human_mode.run().await?;
        }
        Mode::Autoplay => {
            let autoplay_config = AutoplayConfig {
                games: cli.games,
                max_steps: cli.max_steps,
            };
            let mut autoplay = AutoplayMode::new(cli.engine(config), autoplay_config);
            let reports = autoplay.run();

            println!("{}", format_reports(&reports));
            println!("{}", autoplay.metrics().format_summary());
        }
    }

    Ok(())
}
