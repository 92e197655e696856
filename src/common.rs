//! Error types shared by the grid, placement, and mask modules.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Reasons a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship must cover at least one cell.
    ZeroLength,
    /// A segment would fall outside the grid. Coordinates are signed because
    /// diagonal runs can step past column 0; a segment beyond `isize::MAX`
    /// is reported as `(isize::MAX, isize::MAX)`.
    OutOfBounds { row: isize, col: isize },
    /// A segment would land on a cell that is not empty.
    Overlap { row: usize, col: usize },
    /// Random placement gave up without finding a free run.
    UnableToPlaceShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ZeroLength => write!(f, "Ship length must be at least 1"),
            PlacementError::OutOfBounds { row, col } => {
                write!(f, "Ship segment ({}, {}) is out of bounds", row, col)
            }
            PlacementError::Overlap { row, col } => {
                write!(f, "Ship segment ({}, {}) overlaps a non-empty cell", row, col)
            }
            PlacementError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Error from placing an ordered list of ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetError {
    /// Position of the rejected ship in the input list.
    pub index: usize,
    pub reason: PlacementError,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship #{} rejected: {}", self.index, self.reason)
    }
}

/// Errors building a shape mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Masks need a center cell, so the size must be odd.
    EvenSize(usize),
    /// The anchor lies outside the mask.
    AnchorOutOfBounds { row: usize, col: usize },
    /// Underlying bitboard error (size too large for the packed store).
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for MaskError {
    fn from(err: BitBoardError) -> Self {
        MaskError::BitBoardError(err)
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::EvenSize(size) => write!(f, "Mask size {} is not odd", size),
            MaskError::AnchorOutOfBounds { row, col } => {
                write!(f, "Mask anchor ({}, {}) lies outside the mask", row, col)
            }
            MaskError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Grid access outside its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "Grid index out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Invalid engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The board must have at least one cell.
    EmptyBoard,
    /// The board side exceeds [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    BoardTooLarge(usize),
    /// The default ship length must be at least 1.
    ZeroShipLength,
    /// The mask size cannot produce a valid mask.
    Mask(MaskError),
}

impl From<MaskError> for ConfigError {
    fn from(err: MaskError) -> Self {
        ConfigError::Mask(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge(size) => write!(
                f,
                "Board size {} exceeds the maximum of {}",
                size,
                crate::config::MAX_BOARD_SIZE
            ),
            ConfigError::ZeroShipLength => write!(f, "Ship length must be at least 1"),
            ConfigError::Mask(e) => write!(f, "Invalid mask size: {}", e),
        }
    }
}
