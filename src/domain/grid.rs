use super::{Algorithm, Cell, LifeError};
use rand::Rng;
use rayon::prelude::*;

/// Cells whose state changed in one generation, as `(row, col, new_state)`
pub type GenerationDiff = Vec<(usize, usize, Cell)>;

/// Moore neighborhood: upper row, same row, lower row
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
/// Cells are stored row-major and indexed `[row][col]`; edges are hard boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        // A Vec cannot hold more than isize::MAX bytes
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions as `(height, width)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.height && col < self.width {
            Ok(self.get_index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<(), LifeError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`.
    /// Positions beyond the edges count as dead.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> Result<u8, LifeError> {
        self.checked_index(row, col)?;
        Ok(self.live_neighbors(row, col))
    }

    /// Neighbor count for a position already known to be inside the grid
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
            })
            .filter(|&(r, c)| r < self.height && c < self.width)
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    /// Compute the next state of one row into `out`, reading only from `self`
    fn evolve_row(&self, row: usize, out: &mut [Cell]) {
        let start = self.get_index(row, 0);
        for (col, next) in out.iter_mut().enumerate() {
            *next = self.cells[start + col].evolve(self.live_neighbors(row, col));
        }
    }

    /// Write the next generation of `self` into `next`.
    /// `next` is reshaped to match if its dimensions differ.
    pub fn step_into(&self, next: &mut Grid, algorithm: Algorithm) {
        if next.dimensions() != self.dimensions() {
            next.width = self.width;
            next.height = self.height;
            next.cells.resize(self.cells.len(), Cell::Dead);
        }

        match algorithm {
            Algorithm::Serial => next
                .cells
                .chunks_mut(self.width)
                .enumerate()
                .for_each(|(row, out)| self.evolve_row(row, out)),
            Algorithm::Parallel => next
                .cells
                .par_chunks_mut(self.width)
                .enumerate()
                .for_each(|(row, out)| self.evolve_row(row, out)),
        }
    }

    /// Pure evolution - returns a freshly allocated next generation
    pub fn next_generation(&self, algorithm: Algorithm) -> Self {
        let mut next = self.clone();
        self.step_into(&mut next, algorithm);
        next
    }

    /// List every cell whose state differs between `self` and `next`, row-major
    pub fn diff(&self, next: &Grid) -> GenerationDiff {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        let width = self.width;
        self.cells
            .iter()
            .zip(&next.cells)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(idx, (_, &after))| (idx / width, idx % width, after))
            .collect()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid with a random soup where each cell is alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Positions of all live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / width, idx % width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        grid
    }

    fn full_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for row in 0..height {
            for col in 0..width {
                grid.set(row, col, Cell::Alive).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.count_alive(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimension { width: 5, height: 0 })
        );
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { width: usize::MAX, height: 2 })
        );
        assert!(Grid::new(1 << (usize::BITS - 1), 2).is_err());
        assert!(Grid::new(2, usize::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut grid = Grid::new(4, 3).unwrap();

        assert!(grid.set(2, 3, Cell::Alive).is_ok());
        assert_eq!(grid.get(2, 3), Ok(Cell::Alive));

        // row bound is height (3), column bound is width (4)
        let err = LifeError::OutOfBounds { row: 3, col: 0, height: 3, width: 4 };
        assert_eq!(grid.get(3, 0), Err(err));
        assert_eq!(grid.set(3, 0, Cell::Alive), Err(err));
        assert!(grid.get(0, 4).is_err());
        assert!(grid.set(usize::MAX, usize::MAX, Cell::Alive).is_err());
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_neighbor_count_interior() {
        let grid = full_grid(5, 5);
        assert_eq!(grid.count_alive_neighbors(2, 2), Ok(8));
    }

    #[test]
    fn test_neighbor_count_never_looks_past_edges() {
        let grid = full_grid(5, 4);
        let (height, width) = grid.dimensions();

        for row in 0..height {
            for col in 0..width {
                let on_row_edge = row == 0 || row == height - 1;
                let on_col_edge = col == 0 || col == width - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                assert_eq!(
                    grid.count_alive_neighbors(row, col),
                    Ok(expected),
                    "at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_neighbor_count_does_not_wrap() {
        // A live cell on the far edge must not be seen from the opposite edge
        let grid = grid_with(5, 5, &[(0, 4), (4, 0)]);
        assert_eq!(grid.count_alive_neighbors(0, 0), Ok(0));
        assert_eq!(grid.count_alive_neighbors(4, 4), Ok(0));
    }

    #[test]
    fn test_upper_row_uses_width_bound() {
        // Wide, short grid: upper-right neighbor must be checked against the width
        let grid = grid_with(10, 2, &[(0, 5)]);
        assert_eq!(grid.count_alive_neighbors(1, 4), Ok(1));
        assert_eq!(grid.count_alive_neighbors(1, 9), Ok(0));
    }

    #[test]
    fn test_neighbor_count_out_of_bounds_centre() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.count_alive_neighbors(3, 1).is_err());
    }

    #[test]
    fn test_block_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let next = grid.next_generation(Algorithm::Serial);
        assert_eq!(next, grid);
        assert!(grid.diff(&next).is_empty());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        let next = grid.next_generation(Algorithm::Serial);
        assert_eq!(next.count_alive(), 0);
    }

    #[test]
    fn test_corner_cell_dies() {
        let grid = grid_with(3, 3, &[(0, 0)]);
        let next = grid.next_generation(Algorithm::Serial);
        assert_eq!(next.get(0, 0), Ok(Cell::Dead));
    }

    #[test]
    fn test_blinker_evolution_and_diff() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let next = grid.next_generation(Algorithm::Serial);
        let vertical: Vec<_> = next.live_cells().collect();
        assert_eq!(vertical, vec![(1, 2), (2, 2), (3, 2)]);

        let diff = grid.diff(&next);
        assert_eq!(
            diff,
            vec![
                (1, 2, Cell::Alive),
                (2, 1, Cell::Dead),
                (2, 3, Cell::Dead),
                (3, 2, Cell::Alive),
            ]
        );

        let back = next.next_generation(Algorithm::Serial);
        assert_eq!(back, grid);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut grid = Grid::new(40, 30).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.35);

        let first = grid.next_generation(Algorithm::Serial);
        let second = grid.next_generation(Algorithm::Serial);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(64, 50).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(42), 0.3);

        let serial = grid.next_generation(Algorithm::Serial);
        let parallel = grid.next_generation(Algorithm::Parallel);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_step_into_reshapes_mismatched_buffer() {
        let grid = grid_with(6, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut next = Grid::new(1, 1).unwrap();
        grid.step_into(&mut next, Algorithm::Serial);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10, 10).unwrap();

        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.count_alive(), 100);

        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.count_alive(), 0);

        // Out-of-range densities are clamped rather than panicking
        grid.randomize(&mut rng, 3.0);
        assert_eq!(grid.count_alive(), 100);
        grid.randomize(&mut rng, f64::NAN);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(10, 10, &[(5, 5), (0, 0)]);
        assert_eq!(grid.count_alive(), 2);

        grid.clear();
        assert_eq!(grid.count_alive(), 0);
    }
}
