pub mod pattern;

use thiserror::Error;

/// Neighbor offsets, scanned row by row starting at the top left.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// PCG stream selector for [`LifeGrid::randomize`]. Must stay fixed so that a
/// given seed always produces the same fill.
const RANDOM_STREAM: u64 = 0x5851_f42d_4c95_7f2d;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
}

/// Live and dead neighbors of a single cell. Always sums to eight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub alive: u8,
    pub dead: u8,
}

/// A fixed-size Game of Life board with a clamped edge.
///
/// Cells past the left or top edge count as dead. So does anything in the last
/// column or the last row: those cells are still stepped, but never contribute
/// a live neighbor to anyone.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch_cells: Vec<bool>,
}

impl LifeGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        let size = width * height;
        Ok(Self {
            width,
            height,
            cells: vec![false; size],
            scratch_cells: vec![false; size],
        })
    }

    pub fn new_random(width: usize, height: usize, seed: u64, density: f32) -> Result<Self, GridError> {
        let mut result = Self::new(width, height)?;
        result.randomize(seed, density);
        Ok(result)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Current generation, one slice per row from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }

    /// Mark cells alive from a seeded PCG32 stream. Columns are filled left to
    /// right, each one top to bottom, and a cell lives when its sample in
    /// `[0, 1)` falls below `density`.
    pub fn randomize(&mut self, seed: u64, density: f32) {
        let mut rng: randomize::PCG32 = (seed, RANDOM_STREAM).into();
        for x in 0..self.width {
            for y in 0..self.height {
                if randomize::f32_half_open_right(rng.next_u32()) < density {
                    self.set_alive(x, y);
                }
            }
        }
    }

    pub fn neighbors(&self, x: usize, y: usize) -> Neighbors {
        let mut count = Neighbors::default();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if self.neighbor_alive(x as isize + dx, y as isize + dy) {
                count.alive += 1;
            } else {
                count.dead += 1;
            }
        }
        count
    }

    fn neighbor_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width - 1 || y >= self.height - 1 {
            return false;
        }
        self.cells[y * self.width + x]
    }

    fn next_state(&self, x: usize, y: usize) -> bool {
        match (self.is_alive(x, y), self.neighbors(x, y).alive) {
            (_, 3) => true,
            (true, 2) => true,
            _ => false,
        }
    }

    /// Advance one generation.
    pub fn update(&mut self) {
        self.scratch_cells.fill(false);
        for y in 0..self.height {
            for x in 0..self.width {
                // Write into scratch_cells, since we're still reading from `self.cells`
                self.scratch_cells[y * self.width + x] = self.next_state(x, y);
            }
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height,
        );
        y * self.width + x
    }
}

// Equality looks at the current generation only; scratch_cells holds stale state between steps.
impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for LifeGrid {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> LifeGrid {
        let mut grid = LifeGrid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_alive(x, y);
        }
        grid
    }

    fn live_cells(grid: &LifeGrid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    fn arb_grid() -> impl Strategy<Value = LifeGrid> {
        (1usize..12, 1usize..12).prop_flat_map(|(width, height)| {
            proptest::collection::vec(any::<bool>(), width * height).prop_map(move |cells| {
                let mut grid = LifeGrid::new(width, height).unwrap();
                for (idx, alive) in cells.into_iter().enumerate() {
                    if alive {
                        grid.set_alive(idx % width, idx / width);
                    }
                }
                grid
            })
        })
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            LifeGrid::new(0, 4),
            Err(GridError::EmptyDimensions { width: 0, height: 4 })
        );
        assert!(LifeGrid::new(3, 0).is_err());
        assert!(LifeGrid::new(1, 1).is_ok());
    }

    #[test]
    fn starts_dead() {
        let grid = LifeGrid::new(7, 5).unwrap();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn set_alive_out_of_range_panics() {
        let mut grid = LifeGrid::new(4, 3).unwrap();
        grid.set_alive(4, 0);
    }

    #[test]
    #[should_panic(expected = "cell (0, 3)")]
    fn is_alive_out_of_range_panics() {
        let grid = LifeGrid::new(4, 3).unwrap();
        grid.is_alive(0, 3);
    }

    #[test]
    fn last_row_never_counts_as_neighbor() {
        // A horizontal triple in the bottom row would birth (2, 4) on an
        // unbounded board.
        let mut grid = grid_with(6, 6, &[(1, 5), (2, 5), (3, 5)]);
        assert_eq!(grid.neighbors(2, 4), Neighbors { alive: 0, dead: 8 });

        grid.update();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn last_column_never_counts_as_neighbor() {
        let mut grid = grid_with(6, 6, &[(5, 1), (5, 2), (5, 3)]);
        assert_eq!(grid.neighbors(4, 2).alive, 0);

        grid.update();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn corner_cell_sees_interior_neighbors() {
        let mut grid = grid_with(5, 5, &[(3, 3), (2, 3), (3, 2)]);
        assert_eq!(grid.neighbors(4, 4), Neighbors { alive: 1, dead: 7 });
        assert_eq!(grid.neighbors(4, 3), Neighbors { alive: 2, dead: 6 });

        grid.update();
        // (2, 2) is born from the three interior cells; the corner stays dead.
        assert!(grid.is_alive(2, 2));
        assert!(!grid.is_alive(4, 4));
    }

    #[test]
    fn single_cell_grid_dies() {
        let mut grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.neighbors(0, 0).alive, 0);
        grid.update();
        assert!(!grid.is_alive(0, 0));
    }

    #[test]
    fn block_is_still_life() {
        let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
        let mut grid = grid_with(10, 10, &block);
        for _ in 0..16 {
            grid.update();
            assert_eq!(live_cells(&grid), block);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let vertical = vec![(2, 10), (2, 11), (2, 12)];
        let horizontal = vec![(1, 11), (2, 11), (3, 11)];
        let mut grid = grid_with(20, 20, &vertical);

        grid.update();
        assert_eq!(live_cells(&grid), horizontal);
        grid.update();
        assert_eq!(live_cells(&grid), vertical);
    }

    #[test]
    fn randomize_is_reproducible() {
        let a = LifeGrid::new_random(30, 20, 7, 0.2).unwrap();
        let b = LifeGrid::new_random(30, 20, 7, 0.2).unwrap();
        let c = LifeGrid::new_random(30, 20, 8, 0.2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn randomize_respects_density() {
        let grid = LifeGrid::new_random(100, 100, 20171114, 0.2).unwrap();
        let population = grid.population();
        assert!((1500..2500).contains(&population), "population {population}");

        assert_eq!(LifeGrid::new_random(10, 10, 1, 0.0).unwrap().population(), 0);
        assert_eq!(LifeGrid::new_random(10, 10, 1, 1.0).unwrap().population(), 100);
    }

    proptest! {
        #[test]
        fn neighbor_counts_sum_to_eight(grid in arb_grid()) {
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    let n = grid.neighbors(x, y);
                    prop_assert_eq!(n.alive + n.dead, 8);
                }
            }
        }

        #[test]
        fn step_follows_counts(grid in arb_grid()) {
            let mut next = grid.clone();
            next.update();
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    let alive = grid.neighbors(x, y).alive;
                    let was_alive = grid.is_alive(x, y);
                    let is_alive = next.is_alive(x, y);
                    match alive {
                        3 => prop_assert!(is_alive, "({}, {}) should be alive", x, y),
                        2 => prop_assert_eq!(is_alive, was_alive),
                        _ => prop_assert!(!is_alive, "({}, {}) should be dead", x, y),
                    }
                }
            }
        }

        #[test]
        fn edge_cells_do_not_contribute(grid in arb_grid()) {
            let (width, height) = (grid.width(), grid.height());
            let mut interior = LifeGrid::new(width, height).unwrap();
            for y in 0..height - 1 {
                for x in 0..width - 1 {
                    if grid.is_alive(x, y) {
                        interior.set_alive(x, y);
                    }
                }
            }
            for y in 0..height {
                for x in 0..width {
                    prop_assert_eq!(grid.neighbors(x, y), interior.neighbors(x, y));
                }
            }
        }
    }
}
