use crate::config::{Config, ConfigError};
use crate::grid::Grid;
use crate::placement::{apply_placements, compute_dynamic_size, parse_placements};
use rand::Rng;

/// Cells added to the grid side on each expansion.
pub const EXPANSION_STEP: usize = 100;

/// Owns the grid and advances it one generation per tick, growing it when
/// live cells reach the border.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    max_size: usize,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, max_size: usize) -> Self {
        Self {
            grid,
            max_size,
            generation: 0,
        }
    }

    /// Builds the initial grid from the configuration: a random center in
    /// random mode, otherwise the parsed placements on a dynamically sized grid.
    pub fn from_config<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self, ConfigError> {
        let grid = if config.random {
            if config.center_size > config.grid_size {
                return Err(ConfigError::CenterTooLarge {
                    center_size: config.center_size,
                    grid_size: config.grid_size,
                });
            }
            Grid::random(config.grid_size, config.center_size, rng)
        } else {
            let placements = parse_placements(&config.placements)?;
            let mut grid = Grid::new(compute_dynamic_size(&placements)?);
            apply_placements(&placements, &mut grid);
            grid
        };

        log::info!(
            "Initial grid {}x{} with {} live cells (max size {})",
            grid.size(),
            grid.size(),
            grid.population(),
            config.max_size
        );
        Ok(Self::new(grid, config.max_size))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the grid with a larger centered copy if a live cell touches
    /// the border and there is room to grow. Returns whether it grew.
    pub fn expand_if_needed(&mut self) -> bool {
        let size = self.grid.size();
        if size >= self.max_size || !self.grid.touches_border() {
            return false;
        }

        let new_size = (size + EXPANSION_STEP).min(self.max_size);
        self.grid = self.grid.expanded(new_size);
        log::info!(
            "Expanded grid from {} to {} at generation {}",
            size,
            new_size,
            self.generation
        );
        true
    }

    /// One frame of simulation: border check and expansion, then a generation.
    pub fn tick(&mut self) {
        self.expand_if_needed();
        self.grid.step();
        self.generation += 1;
    }
}
