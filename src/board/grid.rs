//! Rectangular cell storage.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid (and the
//! board that owns it) is O(1) with structural sharing.
//!
//! Outside the crate a grid is read-only, so a board's cells only change
//! through placement and influence:
//!
//! ```compile_fail
//! use queens_board::board::{Cell, Grid};
//! use queens_board::core::Side;
//!
//! let mut grid = Grid::new(1, 3);
//! grid.set(0, 1, Cell::Pawns { count: 9, owner: Side::None });
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::Side;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: std::iter::repeat(Cell::Empty).take(rows * columns).collect(),
        }
    }

    /// A grid with one pawn per row in the border columns: `Red` on the
    /// left, `Blue` on the right.
    #[must_use]
    pub fn seeded(rows: usize, columns: usize) -> Self {
        let mut grid = Self::new(rows, columns);
        for row in 0..rows {
            grid.set(row, 0, Cell::Pawns { count: 1, owner: Side::Red });
            grid.set(row, columns - 1, Cell::Pawns { count: 1, owner: Side::Blue });
        }
        grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Apply a signed offset to `(row, col)`, returning `None` off the board.
    #[must_use]
    pub fn offset(&self, row: usize, col: usize, dr: i32, dc: i32) -> Option<(usize, usize)> {
        let r = usize::try_from(row as i64 + i64::from(dr)).ok()?;
        let c = usize::try_from(col as i64 + i64::from(dc)).ok()?;
        self.in_bounds(r, c).then_some((r, c))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells.get(self.index(row, col))
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells.get_mut(idx)
    }

    /// Overwrite a cell. Panics out of bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) is off the grid");
        let idx = self.index(row, col);
        self.cells.set(idx, cell);
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        let start = row.min(self.rows) * self.columns;
        let end = if row < self.rows { start + self.columns } else { start };
        self.cells.iter().skip(start).take(end - start)
    }

    /// Every cell with its coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / columns, i % columns), cell))
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Cells (pawns or cards) owned by `side`.
    #[must_use]
    pub fn owned_count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.owner() == side).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in self.row(row) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
