use rand::Rng;

/// Probability that a cell in the random seed region starts alive.
pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.2;

/// Square toroidal grid of cells, indexed `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![false; size]; size],
        }
    }

    /// Builds a grid whose centered `center_size` square is seeded at random.
    /// Callers guarantee `center_size <= size`.
    pub fn random<R: Rng + ?Sized>(size: usize, center_size: usize, rng: &mut R) -> Self {
        debug_assert!(center_size <= size);
        let mut grid = Self::new(size);
        let start = (size - center_size) / 2;

        for row in start..start + center_size {
            for col in start..start + center_size {
                grid.cells[row][col] = rng.random_bool(RANDOM_ALIVE_PROBABILITY);
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.size && col < self.size {
            self.cells[row][col] = alive;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Whether any live cell sits in the first/last row or first/last column.
    pub fn touches_border(&self) -> bool {
        if self.size == 0 {
            return false;
        }
        let last = self.size - 1;
        self.cells[0].iter().any(|&alive| alive)
            || self.cells[last].iter().any(|&alive| alive)
            || self.cells.iter().any(|row| row[0] || row[last])
    }

    /// Live neighbours of `(row, col)` in the Moore neighbourhood, wrapping at the edges.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size;
        let rows = [(row + n - 1) % n, row, (row + 1) % n];
        let cols = [(col + n - 1) % n, col, (col + 1) % n];

        let mut count = 0;
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                if (i, j) != (1, 1) && self.cells[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation. Every cell is computed from the previous generation.
    pub fn step(&mut self) {
        if self.size == 0 {
            return;
        }

        let next: Vec<Vec<bool>> = (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| {
                        match (self.cells[row][col], self.live_neighbors(row, col)) {
                            (true, 2) | (true, 3) => true, // Survival
                            (false, 3) => true,            // Birth
                            _ => false,
                        }
                    })
                    .collect()
            })
            .collect();

        self.cells = next;
    }

    /// Returns a `new_size` grid holding this one's cells centered at
    /// offset `(new_size - size) / 2`. Callers guarantee `new_size >= size`.
    pub fn expanded(&self, new_size: usize) -> Grid {
        debug_assert!(new_size >= self.size);
        let mut grid = Grid::new(new_size);
        let offset = (new_size - self.size) / 2;

        for (row, cells) in self.cells.iter().enumerate() {
            grid.cells[offset + row][offset..offset + self.size].copy_from_slice(cells);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_with(size: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in cells {
            grid.set(row, col, true);
        }
        grid
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = grid_with(10, &[(5, 5)]);
        grid.step();
        assert_eq!(grid, Grid::new(10));
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = grid_with(8, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid_with(10, &[(5, 4), (5, 5), (5, 6)]);
        let vertical = grid_with(10, &[(4, 5), (5, 5), (6, 5)]);

        let mut grid = horizontal.clone();
        grid.step();
        assert_eq!(grid, vertical);
        grid.step();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn neighbors_wrap_around_edges() {
        let grid = grid_with(5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(2, 2), 0);
    }

    #[test]
    fn block_across_corner_is_still_life() {
        let mut grid = grid_with(6, &[(0, 0), (0, 5), (5, 0), (5, 5)]);
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn step_on_empty_grid_is_noop() {
        let mut grid = Grid::new(0);
        grid.step();
        assert_eq!(grid.size(), 0);
        assert!(!grid.touches_border());
    }

    #[test]
    fn border_detection() {
        assert!(!grid_with(10, &[(5, 5)]).touches_border());
        assert!(grid_with(10, &[(0, 5)]).touches_border());
        assert!(grid_with(10, &[(9, 5)]).touches_border());
        assert!(grid_with(10, &[(5, 0)]).touches_border());
        assert!(grid_with(10, &[(5, 9)]).touches_border());
    }

    #[test]
    fn expansion_centers_old_cells() {
        let grid = grid_with(50, &[(0, 7), (49, 49), (20, 30)]);
        let bigger = grid.expanded(150);
        let offset = 50;

        assert_eq!(bigger.size(), 150);
        assert_eq!(bigger.population(), 3);
        for row in 0..50 {
            for col in 0..50 {
                assert_eq!(bigger.get(row + offset, col + offset), grid.get(row, col));
            }
        }
    }

    #[test]
    fn expansion_floors_odd_offset() {
        let grid = grid_with(3, &[(0, 0)]);
        let bigger = grid.expanded(6);
        assert!(bigger.get(1, 1));
        assert_eq!(bigger.population(), 1);
    }

    #[test]
    fn random_seed_stays_in_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(100, 20, &mut rng);
        let center = 40..60;

        assert!(grid.population() > 0);
        for row in 0..100 {
            for col in 0..100 {
                if grid.get(row, col) {
                    assert!(center.contains(&row) && center.contains(&col));
                }
            }
        }
    }

    #[test]
    fn random_density_is_near_one_fifth() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::random(100, 100, &mut rng);
        let density = grid.population() as f64 / 10_000.0;
        assert!((0.15..0.25).contains(&density), "density {}", density);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Grid::random(64, 32, &mut StdRng::seed_from_u64(3));
        let b = Grid::random(64, 32, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
