use crate::placement::{compute_dynamic_size, parse_placements, PlacementError};
use crate::view::{MAX_CELL_SIZE, MIN_CELL_SIZE};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "game_of_life_config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("center_size {center_size} is larger than grid_size {grid_size}")]
    CenterTooLarge { center_size: usize, grid_size: usize },
    #[error("Invalid placements: {0}")]
    Placement(#[from] PlacementError),
    #[error("Window dimensions must be non-zero")]
    ZeroWindow,
}

/// Startup parameters. Read once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Random center seeding instead of explicit placements
    pub random: bool,
    pub center_size: usize,
    /// Only used in random mode
    pub grid_size: usize,
    pub max_size: usize,
    pub initial_cell_size: u32,
    pub placements: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Fixed RNG seed for reproducible random runs
    pub seed: Option<u64>,
    /// Minimum time between generations; 0 steps every frame
    pub step_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            random: true,
            center_size: 50,
            grid_size: 200,
            max_size: 1000,
            initial_cell_size: 4,
            placements: String::new(),
            window_width: 800,
            window_height: 600,
            seed: None,
            step_interval_ms: 0,
        }
    }
}

impl Config {
    /// Loads and validates the config at `path`. A missing file falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();

        if !path.exists() {
            log::warn!("Config file {} not found, using defaults", path_str);
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path_str.clone(), source })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path_str);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(text)?;
        config.clamp_cell_size();
        config.validate()?;
        Ok(config)
    }

    /// Rejects parameter sets that cannot produce an initial grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        if self.random {
            if self.center_size > self.grid_size {
                return Err(ConfigError::CenterTooLarge {
                    center_size: self.center_size,
                    grid_size: self.grid_size,
                });
            }
        } else {
            compute_dynamic_size(&parse_placements(&self.placements)?)?;
        }
        Ok(())
    }

    fn clamp_cell_size(&mut self) {
        let clamped = self.initial_cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        if clamped != self.initial_cell_size {
            log::warn!(
                "initial_cell_size {} out of range, using {}",
                self.initial_cell_size,
                clamped
            );
            self.initial_cell_size = clamped;
        }
    }
}
