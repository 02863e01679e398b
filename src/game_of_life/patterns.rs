//! Built-in seed patterns

use super::Grid;
use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a fresh board is populated before the first generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Every cell alive or dead with equal probability
    Random,
    Empty,
    /// Period-2 oscillator, horizontal phase
    Blinker,
    /// 2x2 still life
    Block,
    Beacon,
    Glider,
    Toad,
}

impl Pattern {
    /// Live cells as `(x, y)` offsets from the pattern's top-left corner.
    ///
    /// `Random` and `Empty` have no fixed cells.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Random | Pattern::Empty => &[],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Beacon => &[
                (0, 0), (1, 0), (0, 1), (1, 1),
                (2, 2), (3, 2), (2, 3), (3, 3),
            ],
            Pattern::Glider => &[(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as `(width, height)`
    pub fn extent(self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Whether the pattern fits on a `rows` x `cols` board
    pub fn fits(self, rows: u16, cols: u16) -> bool {
        let (width, height) = self.extent();
        width <= usize::from(cols) && height <= usize::from(rows)
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Empty => "empty",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
            Pattern::Toad => "toad",
        }
    }
}

/// Populate `grid` with `pattern`.
///
/// `Random` draws every cell from `rng`; the other patterns clear the board
/// and place their cells centered on it.
pub fn populate<R: Rng + ?Sized>(grid: &mut Grid, pattern: Pattern, rng: &mut R) -> Result<()> {
    if pattern == Pattern::Random {
        return grid.randomize(rng).context("Failed to randomize grid");
    }

    if !pattern.fits(grid.rows(), grid.cols()) {
        let (width, height) = pattern.extent();
        anyhow::bail!(
            "Pattern '{}' ({}x{}) does not fit on a {}x{} grid",
            pattern.name(), width, height, grid.cols(), grid.rows()
        );
    }

    let cells = grid.cells_mut().context("Cannot place pattern")?;
    cells.fill(false);

    let (width, height) = pattern.extent();
    let x0 = (usize::from(grid.cols()) - width) / 2;
    let y0 = (usize::from(grid.rows()) - height) / 2;

    for &(dx, dy) in pattern.cells() {
        let cell = grid
            .cell_mut(x0 + dx, y0 + dy)
            .with_context(|| format!("Pattern cell ({}, {}) outside grid", x0 + dx, y0 + dy))?;
        *cell = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Simulator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_extents() {
        assert_eq!(Pattern::Blinker.extent(), (3, 1));
        assert_eq!(Pattern::Beacon.extent(), (4, 4));
        assert_eq!(Pattern::Glider.extent(), (3, 3));
        assert_eq!(Pattern::Empty.extent(), (0, 0));
        assert!(Pattern::Toad.fits(2, 4));
        assert!(!Pattern::Toad.fits(2, 3));
    }

    #[test]
    fn test_blinker_is_centered() {
        let mut grid = Grid::new(5, 5).unwrap();
        populate(&mut grid, Pattern::Blinker, &mut rng()).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_populate_clears_board() {
        let mut grid = Grid::new(6, 6).unwrap();
        populate(&mut grid, Pattern::Random, &mut rng()).unwrap();
        populate(&mut grid, Pattern::Block, &mut rng()).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);

        populate(&mut grid, Pattern::Empty, &mut rng()).unwrap();
        assert_eq!(grid.living_count(), 0);
    }

    #[test]
    fn test_pattern_too_large() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(populate(&mut grid, Pattern::Glider, &mut rng()).is_err());
        assert_eq!(grid.living_count(), 0);
    }

    #[test]
    fn test_populate_uninitialized() {
        let mut grid = Grid::default();
        assert!(populate(&mut grid, Pattern::Random, &mut rng()).is_err());
        assert!(populate(&mut grid, Pattern::Empty, &mut rng()).is_err());
    }

    #[test]
    fn test_beacon_and_toad_oscillate() {
        for pattern in [Pattern::Beacon, Pattern::Toad] {
            let mut grid = Grid::new(8, 8).unwrap();
            populate(&mut grid, pattern, &mut rng()).unwrap();
            let start = grid.duplicate().unwrap();

            Simulator::advance(&mut grid).unwrap();
            assert_ne!(grid, start, "{} should change", pattern.name());
            Simulator::advance(&mut grid).unwrap();
            assert_eq!(grid, start, "{} should have period 2", pattern.name());
        }
    }

    #[test]
    fn test_glider_keeps_five_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        populate(&mut grid, Pattern::Glider, &mut rng()).unwrap();
        for _ in 0..4 {
            Simulator::advance(&mut grid).unwrap();
            assert_eq!(grid.living_count(), 5);
        }
    }
}
