//! Orientation step vectors, bounds tests and anchor-relative mapping.
//!
//! Everything here is a pure function. Placement and overlay both derive
//! their cells through these helpers so validation and commit always agree.

/// Direction in which a ship's segments run from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Rightwards along a row.
    Horizontal,
    /// Downwards along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Orientation {
    /// All orientations, in declaration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];

    /// Unit step `(d_row, d_col)` between consecutive segments.
    #[inline]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Free-function form of [`Orientation::step`].
#[inline]
pub const fn step_vector(orientation: Orientation) -> (isize, isize) {
    orientation.step()
}

/// True iff `0 <= row < size` and `0 <= col < size`.
#[inline]
pub fn in_bounds(size: usize, row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size
}

/// Converts signed coordinates to grid indices if they lie inside a
/// `size×size` grid.
#[inline]
pub fn to_index(size: usize, row: isize, col: isize) -> Option<(usize, usize)> {
    if in_bounds(size, row, col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

/// `base + delta` as a signed coordinate, `None` if it does not fit in `isize`.
#[inline]
fn offset(base: usize, delta: isize) -> Option<isize> {
    isize::try_from(base).ok()?.checked_add(delta)
}

/// The `k`-th cell of a run starting at `origin` with step `step`, or `None`
/// if the coordinate overflows `isize`. Such a cell lies outside every grid.
#[inline]
pub fn segment_cell(
    origin: (usize, usize),
    step: (isize, isize),
    k: usize,
) -> Option<(isize, isize)> {
    let k = isize::try_from(k).ok()?;
    Some((
        offset(origin.0, k.checked_mul(step.0)?)?,
        offset(origin.1, k.checked_mul(step.1)?)?,
    ))
}

/// Maps a local mask cell onto the board so that `anchor` lands on `target`.
/// `None` means the cell overflows `isize` and is off the board.
#[inline]
pub fn anchor_offset(
    target: (usize, usize),
    anchor: (usize, usize),
    cell: (usize, usize),
) -> Option<(isize, isize)> {
    let d_row = isize::try_from(cell.0).ok()? - isize::try_from(anchor.0).ok()?;
    let d_col = isize::try_from(cell.1).ok()? - isize::try_from(anchor.1).ok()?;
    Some((offset(target.0, d_row)?, offset(target.1, d_col)?))
}
