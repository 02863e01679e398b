//! Game of Life rules and generation advance

use super::Grid;
use crate::error::GridError;

/// Advances grids by the standard birth/survival rule.
pub struct Simulator;

impl Simulator {
    /// Next state of a cell given its current state and live-neighbor count.
    pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Advance `grid` one generation in place.
    ///
    /// Neighbor counts are read from a snapshot taken before any cell is
    /// written, so the scan order has no effect on the result. If the
    /// snapshot cannot be allocated the grid is left untouched.
    pub fn advance(grid: &mut Grid) -> Result<(), GridError> {
        let snapshot = grid.duplicate()?;
        let cols = usize::from(grid.cols());

        for (idx, cell) in grid.cells_mut()?.iter_mut().enumerate() {
            let live_neighbors = snapshot.count_live_neighbors(idx % cols, idx / cols)?;
            *cell = Self::next_state(*cell, live_neighbors);
        }

        drop(snapshot);
        Ok(())
    }

    /// Advance `grid` by `generations` steps, stopping at the first error
    pub fn advance_generations(grid: &mut Grid, generations: u64) -> Result<(), GridError> {
        for _ in 0..generations {
            Self::advance(grid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid_with(rows: u16, cols: u16, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(x, y) in live {
            *grid.cell_mut(x, y).unwrap() = true;
        }
        grid
    }

    #[test]
    fn test_rule_logic() {
        assert!(Simulator::next_state(true, 2));
        assert!(Simulator::next_state(true, 3));
        assert!(Simulator::next_state(false, 3));
        assert!(!Simulator::next_state(true, 1));
        assert!(!Simulator::next_state(true, 4));
        assert!(!Simulator::next_state(false, 2));
        assert!(!Simulator::next_state(false, 4));
        for n in 0..=8 {
            assert_eq!(Simulator::next_state(false, n), n == 3);
        }
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let vertical = [(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(5, 5, &horizontal);

        Simulator::advance(&mut grid).unwrap();
        assert_eq!(grid, grid_with(5, 5, &vertical));

        Simulator::advance(&mut grid).unwrap();
        assert_eq!(grid, grid_with(5, 5, &horizontal));
    }

    #[test]
    fn test_still_life_block() {
        let block = [(2, 1), (3, 1), (2, 2), (3, 2)];
        let mut grid = grid_with(5, 6, &block);
        Simulator::advance_generations(&mut grid, 4).unwrap();
        assert_eq!(grid, grid_with(5, 6, &block));
    }

    #[test]
    fn test_dead_board_stays_dead() {
        for (rows, cols) in [(0, 0), (1, 1), (3, 7), (10, 4)] {
            let mut grid = Grid::new(rows, cols).unwrap();
            Simulator::advance(&mut grid).unwrap();
            assert_eq!(grid.living_count(), 0);
        }
    }

    #[test]
    fn test_corner_cells_without_wrap() {
        // Three corners of a 3x3 board: the center is born and the corners,
        // which see no live neighbor, die. Wrapping would make them adjacent.
        let mut grid = grid_with(3, 3, &[(0, 0), (2, 0), (0, 2)]);
        Simulator::advance(&mut grid).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_advance_uses_snapshot() {
        // An L-tromino becomes a block; updating in place would let the
        // freshly written cells feed later neighbor counts.
        let mut grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2)]);
        Simulator::advance(&mut grid).unwrap();
        assert_eq!(grid, grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn test_advance_does_not_touch_duplicate() {
        let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let copy = grid.duplicate().unwrap();
        Simulator::advance(&mut grid).unwrap();
        assert_ne!(grid, copy);
        assert_eq!(copy, grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_degenerate_shapes() {
        let mut empty_cols = Grid::new(3, 0).unwrap();
        Simulator::advance(&mut empty_cols).unwrap();
        assert_eq!(empty_cols.render_default().unwrap(), "\n\n");

        // a one-row blinker has no room to turn vertical and shrinks to its center
        let mut row = grid_with(1, 5, &[(1, 0), (2, 0), (3, 0)]);
        Simulator::advance(&mut row).unwrap();
        assert_eq!(row.render_default().unwrap(), "OOXOO");

        let mut column = Grid::new(u16::MAX, 1).unwrap();
        column.randomize(&mut rand::rngs::StdRng::seed_from_u64(3)).unwrap();
        Simulator::advance(&mut column).unwrap();
        let text = column.render_default().unwrap();
        assert_eq!(text.split('\n').count(), usize::from(u16::MAX));
        assert!(text.split('\n').all(|line| line == "X" || line == "O"));
    }

    #[test]
    fn test_advance_uninitialized() {
        let mut grid = Grid::default();
        assert_eq!(Simulator::advance(&mut grid), Err(GridError::NotInitialized));
        assert_eq!(grid, Grid::default());
    }
}
