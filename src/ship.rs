//! Ship descriptors: origin, orientation and length of a linear run.

use core::fmt;

use crate::geometry::{self, Orientation};

/// Input to placement. Only the resulting `Occupied` cells persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDescriptor {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl ShipDescriptor {
    /// Create a new descriptor.
    pub const fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Signed coordinates of every segment, origin first.
    ///
    /// Segments may lie outside any grid; callers decide what that means.
    /// A segment whose coordinates overflow `isize` is yielded as `None`.
    pub fn segments(&self) -> Segments {
        Segments {
            origin: self.origin(),
            step: self.orientation.step(),
            k: 0,
            length: self.length,
        }
    }
}

impl fmt::Display for ShipDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} x{} at ({}, {})",
            self.orientation, self.length, self.row, self.col
        )
    }
}

/// Iterator over the segment coordinates of a [`ShipDescriptor`].
#[derive(Debug, Clone)]
pub struct Segments {
    origin: (usize, usize),
    step: (isize, isize),
    k: usize,
    length: usize,
}

impl Iterator for Segments {
    type Item = Option<(isize, isize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.length {
            return None;
        }
        let cell = geometry::segment_cell(self.origin, self.step, self.k);
        self.k += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.length - self.k;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Segments {}
