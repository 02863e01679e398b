//! Grid representation and utilities for Game of Life

use crate::error::GridError;
use itertools::iproduct;
use rand::Rng;

/// Relative `(dx, dy)` offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size rectangular board of boolean cells, stored row-major.
///
/// A default-constructed grid is *uninitialized*: it has no cell buffer and
/// every operation other than [`Grid::new`] and [`Grid::destroy`] fails with
/// [`GridError::NotInitialized`]. A grid with zero rows or columns is still
/// initialized and simply has no cells.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Option<Vec<bool>>,
}

impl Grid {
    /// Create a grid of `rows * cols` dead cells.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        let len = usize::from(rows) * usize::from(cols);
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, false);

        Ok(Self {
            rows,
            cols,
            cells: Some(cells),
        })
    }

    /// Create a grid from a 2D boolean array, one inner vector per row
    pub fn from_cells(cells: Vec<Vec<bool>>) -> anyhow::Result<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let rows = u16::try_from(height)
            .map_err(|_| anyhow::anyhow!("Grid height {} exceeds {}", height, u16::MAX))?;
        let cols = u16::try_from(width)
            .map_err(|_| anyhow::anyhow!("Grid width {} exceeds {}", width, u16::MAX))?;

        let mut grid = Self::new(rows, cols)?;
        if let Some(buffer) = grid.cells.as_mut() {
            for (dst, src) in buffer.iter_mut().zip(cells.into_iter().flatten()) {
                *dst = src;
            }
        }
        Ok(grid)
    }

    /// Release the cell buffer, returning the grid to the uninitialized state.
    ///
    /// Calling this more than once is harmless.
    pub fn destroy(&mut self) {
        *self = Self::default();
    }

    /// Produce an independent copy with its own cell buffer.
    pub fn duplicate(&self) -> Result<Self, GridError> {
        let cells = self.cells()?;
        let mut copy = Vec::new();
        copy.try_reserve_exact(cells.len())?;
        copy.extend_from_slice(cells);

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells: Some(copy),
        })
    }

    /// Set every cell independently alive or dead using `rng`.
    ///
    /// The caller owns seeding; this never reseeds the source.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        for cell in self.cells_mut()? {
            *cell = rng.gen_bool(0.5);
        }
        Ok(())
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Whether the grid currently owns a cell buffer
    pub fn is_initialized(&self) -> bool {
        self.cells.is_some()
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> Result<&[bool], GridError> {
        self.cells.as_deref().ok_or(GridError::NotInitialized)
    }

    pub(crate) fn cells_mut(&mut self) -> Result<&mut [bool], GridError> {
        self.cells.as_deref_mut().ok_or(GridError::NotInitialized)
    }

    /// Convert 2D coordinates to a 1D index, or `None` when out of range
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        let cols = usize::from(self.cols);
        (x < cols && y < usize::from(self.rows)).then(|| y * cols + x)
    }

    /// Cell value at `(x, y)`; `None` if uninitialized or out of range.
    pub fn cell(&self, x: usize, y: usize) -> Option<bool> {
        let idx = self.index(x, y)?;
        self.cells.as_ref()?.get(idx).copied()
    }

    /// Mutable access to the cell at `(x, y)`; `None` if uninitialized or out of range.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut bool> {
        let idx = self.index(x, y)?;
        self.cells.as_mut()?.get_mut(idx)
    }

    /// Count live cells among the up to 8 neighbors of `(x, y)`.
    ///
    /// Neighbors outside the board are skipped; there is no wrap-around, so
    /// edge and corner cells have fewer candidates. Any `(x, y)` is accepted.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        let cells = self.cells()?;
        Ok(self.live_neighbors_in(cells, x, y))
    }

    /// Live-neighbor count for every cell, in row-major order.
    pub fn neighbor_counts(&self) -> Result<Vec<u8>, GridError> {
        let cells = self.cells()?;
        let mut counts = Vec::new();
        counts.try_reserve_exact(cells.len())?;
        counts.extend(
            iproduct!(0..usize::from(self.rows), 0..usize::from(self.cols))
                .map(|(y, x)| self.live_neighbors_in(cells, x, y)),
        );
        Ok(counts)
    }

    fn live_neighbors_in(&self, cells: &[bool], x: usize, y: usize) -> u8 {
        let mut count = 0;
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if let Some(idx) = self.index(nx, ny) {
                if cells[idx] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Get all living cell coordinates as `(x, y)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..usize::from(self.rows), 0..usize::from(self.cols))
            .filter(|&(y, x)| self.cell(x, y).unwrap_or(false))
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells (zero for an uninitialized grid)
    pub fn living_count(&self) -> usize {
        self.cells
            .as_deref()
            .map_or(0, |cells| cells.iter().filter(|&&cell| cell).count())
    }
}
