//! A square bit matrix packed into a single unsigned integer.
//!
//! The dimension is chosen at runtime, but `dim * dim` must fit in the bit
//! width of `T`. Shape masks use this to stay `Copy` and allocation free.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested dimension `dim*dim` exceeds the bit capacity of `T`.
    SizeTooLarge { dim: usize, capacity: usize },
    /// Row or column index is outside [0..dim).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { dim, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: {}x{} exceeds capacity={}",
                    dim,
                    dim,
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `dim×dim` bit matrix stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    dim: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Largest dimension whose square still fits in `T`.
    pub fn max_dim() -> usize {
        let mut dim = 0;
        while (dim + 1) * (dim + 1) <= Self::CAPACITY {
            dim += 1;
        }
        dim
    }

    /// Empty board of the given dimension, or `SizeTooLarge` if it cannot be
    /// packed into `T`.
    pub fn try_new(dim: usize) -> Result<Self, BitBoardError> {
        if dim.checked_mul(dim).map_or(true, |bits| bits > Self::CAPACITY) {
            Err(BitBoardError::SizeTooLarge {
                dim,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                dim,
            })
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.dim || col >= self.dim {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.dim + col)
        }
    }

    /// Iterator over the set bits as `(row, col)`, row-major.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.dim, self.dim)?;
        for r in 0..self.dim {
            for c in 0..self.dim {
                let bit = if ((self.bits >> (r * self.dim + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let dim = self.board.dim;
        while self.idx < dim * dim {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / dim, idx % dim));
            }
        }
        None
    }
}
