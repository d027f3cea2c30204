use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lower bound of the step-threshold multiplier (fastest play)
pub const MIN_SPEED_FACTOR: f32 = 0.5;
/// Upper bound of the step-threshold multiplier (slowest play)
pub const MAX_SPEED_FACTOR: f32 = 20.0;
/// Increment applied by a single speed-up or speed-down request
pub const SPEED_FACTOR_STEP: f32 = 0.5;

/// Configuration for the game
///
/// All distances are world units. Positions on the board are integer
/// multiples of `cell` and the playable extent is
/// `[-grid_length, grid_length)` on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Half-extent of the square board
    pub grid_length: i32,
    /// Size of one grid cell; every snake step moves exactly one cell
    pub cell: i32,
    /// Length of the snake at the start of a game
    pub initial_snake_length: usize,
    /// Shrink food never takes the snake below this length
    pub min_snake_length: usize,
    /// Base number of frames between two steps, before score scaling
    pub step_frames: u32,
    /// Distance kept between spawned food and the walls
    pub spawn_margin: i32,
    /// Constant z coordinate of every snake segment and food item
    pub elevation: i32,
    /// Multiplier on the step threshold; lower is faster
    pub speed_factor: f32,
    /// Period of the host frame timer in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_length: 600,
            cell: 40,
            initial_snake_length: 5,
            min_snake_length: 3,
            step_frames: 12,
            spawn_margin: 60,
            elevation: 20,
            speed_factor: 1.0,
            frame_interval_ms: 16,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(grid_length: i32, cell: i32) -> Self {
        Self {
            grid_length,
            cell,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Largest spawnable coordinate magnitude, snapped down to the grid
    pub fn spawn_extent(&self) -> i32 {
        ((self.grid_length - self.spawn_margin) / self.cell) * self.cell
    }

    /// Number of cells along one axis of the spawn area
    pub fn spawn_cells_per_axis(&self) -> i64 {
        2 * i64::from(self.spawn_extent() / self.cell) + 1
    }

    /// Number of cells along one axis of the whole board
    pub fn cells_per_axis(&self) -> usize {
        (2 * self.grid_length / self.cell) as usize
    }

    /// Check the invariants the engine relies on.
    ///
    /// Food spawning retries until it finds a free cell, so the spawn area
    /// must stay comfortably larger than the snake for the whole game. Only
    /// the starting layout can be checked here.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell > 0, "cell size must be positive, got {}", self.cell);
        ensure!(
            self.grid_length > 0,
            "grid length must be positive, got {}",
            self.grid_length
        );
        ensure!(
            self.grid_length % self.cell == 0,
            "grid length {} is not a multiple of the cell size {}",
            self.grid_length,
            self.cell
        );
        ensure!(
            self.spawn_margin >= 0 && self.spawn_margin < self.grid_length,
            "spawn margin {} must be within [0, {})",
            self.spawn_margin,
            self.grid_length
        );
        ensure!(self.min_snake_length >= 1, "minimum snake length must be at least 1");
        ensure!(
            self.min_snake_length <= self.initial_snake_length,
            "minimum snake length {} exceeds initial length {}",
            self.min_snake_length,
            self.initial_snake_length
        );
        ensure!(self.step_frames > 0, "step frames must be positive");
        ensure!(
            (MIN_SPEED_FACTOR..=MAX_SPEED_FACTOR).contains(&self.speed_factor),
            "speed factor {} outside [{}, {}]",
            self.speed_factor,
            MIN_SPEED_FACTOR,
            MAX_SPEED_FACTOR
        );

        let tail_offset = (self.initial_snake_length as i64 - 1) * i64::from(self.cell);
        if tail_offset >= i64::from(self.grid_length) {
            bail!(
                "initial snake of length {} does not fit inside a grid of half-extent {}",
                self.initial_snake_length,
                self.grid_length
            );
        }

        // every segment blocks its 3x3 neighbourhood from spawning
        let spawn_cells = self.spawn_cells_per_axis().pow(2);
        let blocked = 9 * self.initial_snake_length as i64;
        ensure!(
            spawn_cells > blocked + 3,
            "spawn area of {} cells is too small for a snake of length {}",
            spawn_cells,
            self.initial_snake_length
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_length, 600);
        assert_eq!(config.cell, 40);
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.min_snake_length, 3);
        assert_eq!(config.step_frames, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 20);
        assert_eq!(config.grid_length, 400);
        assert_eq!(config.cell, 20);
        assert_eq!(config.spawn_margin, 60);
    }

    #[test]
    fn test_spawn_extent_snaps_to_grid() {
        let config = GameConfig::default();
        // (600 - 60) / 40 = 13 whole cells
        assert_eq!(config.spawn_extent(), 520);
        assert_eq!(config.spawn_cells_per_axis(), 27);
        assert_eq!(config.cells_per_axis(), 30);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert!(GameConfig::new(610, 40).validate().is_err());
        assert!(GameConfig::new(600, 0).validate().is_err());

        let config = GameConfig {
            spawn_margin: 600,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_snake_length: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_lengths_and_speed() {
        let config = GameConfig {
            min_snake_length: 6,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            speed_factor: 25.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_cramped_spawn_area() {
        let config = GameConfig {
            grid_length: 200,
            spawn_margin: 120,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_length": 800, "speed_factor": 2.5 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.grid_length, 800);
        assert_eq!(config.speed_factor, 2.5);
        assert_eq!(config.cell, 40);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
