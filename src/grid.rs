//! Square cell grid shared by placement and overlay.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::geometry;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Covered by a ship segment.
    Occupied,
    /// Marked by a stamped effect mask.
    Effect,
}

impl Cell {
    /// Numeric code: `0` empty, `3` ship, `5` effect.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied => 3,
            Cell::Effect => 5,
        }
    }

    /// Printable token, the single digit of [`Cell::code`].
    pub const fn token(self) -> char {
        (b'0' + self.code()) as char
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// An `N×N` grid stored row-major in a flat buffer.
///
/// The dimension is fixed at construction; all access goes through
/// bounds-checked accessors.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. [`GridConfig::new`]
    /// rejects such sizes up front.
    ///
    /// [`GridConfig::new`]: crate::GridConfig::new
    pub fn new(size: usize) -> Self {
        let Some(len) = size.checked_mul(size) else {
            panic!("grid of {}x{} cells overflows usize", size, size);
        };
        Grid {
            size,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff (row, col) addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        geometry::in_bounds(self.size, row, col)
    }

    /// Cell state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Cell state at signed coordinates, `None` outside the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        geometry::to_index(self.size, row, col).map(|(r, c)| self.cells[r * self.size + c])
    }

    /// Mutable cell at signed coordinates, `None` outside the grid.
    pub(crate) fn cell_mut_at(&mut self, row: isize, col: isize) -> Option<&mut Cell> {
        let (r, c) = geometry::to_index(self.size, row, col)?;
        self.cells.get_mut(r * self.size + c)
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Coordinates of every cell in the given state, row-major.
    pub fn cells_with(&self, state: Cell) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == state)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks panics on 0; an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size, self.size)?;
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
