//! Fixed-size shape masks with an anchor cell.
//!
//! A mask is an odd-sized `M×M` boolean matrix plus the local coordinate that
//! lines up with the target cell when stamped. The anchor is defined by the
//! shape and need not be a filled cell.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::MaskError;

/// Packed storage for masks; limits the size to [`MAX_MASK_SIZE`].
pub type MaskBits = BitBoard<u128>;

/// Largest odd mask size that fits in [`MaskBits`].
pub const MAX_MASK_SIZE: usize = 11;

/// Built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Apex at the top, widening downward. Anchored at the apex.
    Cone,
    /// Full middle row and middle column. Anchored at the center.
    Cross,
    /// Manhattan ball of radius `size / 2`. Anchored at the center.
    Diamond,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Cone, Shape::Cross, Shape::Diamond];

    /// Generate this shape at the given mask size.
    pub fn build(self, size: usize) -> Result<Mask, MaskError> {
        match self {
            Shape::Cone => Mask::cone(size),
            Shape::Cross => Mask::cross(size),
            Shape::Diamond => Mask::diamond(size),
        }
    }
}

/// A generated shape template and its anchor.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    bits: MaskBits,
    anchor: (usize, usize),
}

impl Mask {
    /// Build a mask of `size` by evaluating `filled(row, col)` for every cell.
    ///
    /// `size` must be odd and at most [`MAX_MASK_SIZE`]; `anchor` must lie
    /// inside the mask.
    pub fn from_fn<F>(size: usize, anchor: (usize, usize), mut filled: F) -> Result<Self, MaskError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if size % 2 == 0 {
            return Err(MaskError::EvenSize(size));
        }
        let mut bits = MaskBits::try_new(size)?;
        if anchor.0 >= size || anchor.1 >= size {
            return Err(MaskError::AnchorOutOfBounds {
                row: anchor.0,
                col: anchor.1,
            });
        }
        bits.clear_all();
        for r in 0..size {
            for c in 0..size {
                if filled(r, c) {
                    bits.set(r, c)?;
                }
            }
        }
        Ok(Mask { bits, anchor })
    }

    /// Row `r` spans `center ± min(r, center)`.
    pub fn cone(size: usize) -> Result<Self, MaskError> {
        let center = size / 2;
        Self::from_fn(size, (0, center), |r, c| {
            let half = r.min(center);
            c + half >= center && c <= center + half
        })
    }

    pub fn cross(size: usize) -> Result<Self, MaskError> {
        let center = size / 2;
        Self::from_fn(size, (center, center), |r, c| r == center || c == center)
    }

    /// Filled iff `|r - center| + |c - center| <= center`.
    pub fn diamond(size: usize) -> Result<Self, MaskError> {
        let center = size / 2;
        Self::from_fn(size, (center, center), |r, c| {
            r.abs_diff(center) + c.abs_diff(center) <= center
        })
    }

    /// Side length of the mask.
    pub fn size(&self) -> usize {
        self.bits.dim()
    }

    /// Local coordinate aligned to the stamp target.
    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    /// Whether the local cell (row, col) is part of the shape. Out-of-range
    /// cells are reported as not filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.bits.get(row, col).unwrap_or(false)
    }

    /// Number of filled cells.
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Filled local cells, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits.iter_set_bits()
    }

    /// Packed bit matrix.
    pub fn bits(&self) -> MaskBits {
        self.bits
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask {{ anchor: {:?}, bits: {:?} }}", self.anchor, self.bits)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for r in 0..size {
            for c in 0..size {
                let ch = if (r, c) == self.anchor {
                    if self.is_filled(r, c) {
                        '◆'
                    } else {
                        '◇'
                    }
                } else if self.is_filled(r, c) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
