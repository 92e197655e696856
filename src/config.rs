use crate::common::ConfigError;
use crate::geometry::Orientation;
use crate::mask::{Mask, Shape};
use crate::ship::ShipDescriptor;

pub const BOARD_SIZE: usize = 10;
pub const SHIP_LENGTH: usize = 3;
pub const MASK_SIZE: usize = 5;
/// Largest accepted board side; the grid allocates `size * size` cells.
pub const MAX_BOARD_SIZE: usize = 4096;

/// The demo fleet: pairwise disjoint on a 10×10 grid, 12 cells in total.
pub const REFERENCE_FLEET: [ShipDescriptor; 4] = [
    ShipDescriptor::new(1, 2, Orientation::Horizontal, SHIP_LENGTH),
    ShipDescriptor::new(4, 6, Orientation::Vertical, SHIP_LENGTH),
    ShipDescriptor::new(0, 0, Orientation::DiagonalDownRight, SHIP_LENGTH),
    ShipDescriptor::new(0, 9, Orientation::DiagonalDownLeft, SHIP_LENGTH),
];

/// The demo stamps as (shape, target row, target col).
pub const REFERENCE_STAMPS: [(Shape, usize, usize); 3] = [
    (Shape::Cone, 2, 4),
    (Shape::Cross, 6, 2),
    (Shape::Diamond, 7, 7),
];

/// Dimensions the engine works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GridConfig {
    board_size: usize,
    ship_length: usize,
    mask_size: usize,
}

impl GridConfig {
    /// Validated configuration.
    pub fn new(board_size: usize, ship_length: usize, mask_size: usize) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(board_size));
        }
        if ship_length == 0 {
            return Err(ConfigError::ZeroShipLength);
        }
        // any shape will do; this only checks the size
        Mask::from_fn(mask_size, (0, 0), |_, _| false)?;
        Ok(Self {
            board_size,
            ship_length,
            mask_size,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ship_length(&self) -> usize {
        self.ship_length
    }

    pub fn mask_size(&self) -> usize {
        self.mask_size
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ship_length: SHIP_LENGTH,
            mask_size: MASK_SIZE,
        }
    }
}
