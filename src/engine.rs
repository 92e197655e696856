use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::{
    common::{FleetError, MaskError},
    config::GridConfig,
    geometry::Orientation,
    grid::Grid,
    mask::{Mask, Shape},
    ship::ShipDescriptor,
};

/// Holds the configured dimensions and hands out grids, ships and masks
/// that agree with them. Grids stay owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: GridConfig,
}

impl Engine {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Fresh grid of the configured size, every cell `Empty`.
    pub fn grid(&self) -> Grid {
        Grid::new(self.config.board_size())
    }

    /// Descriptor with the configured default ship length.
    pub fn ship(&self, row: usize, col: usize, orientation: Orientation) -> ShipDescriptor {
        ShipDescriptor::new(row, col, orientation, self.config.ship_length())
    }

    /// Generate `shape` at the configured mask size.
    pub fn mask(&self, shape: Shape) -> Result<Mask, MaskError> {
        shape.build(self.config.mask_size())
    }

    /// Place `ships` in order, stopping at the first rejection.
    ///
    /// Ships placed before the failure stay on the grid.
    pub fn place_fleet(&self, grid: &mut Grid, ships: &[ShipDescriptor]) -> Result<usize, FleetError> {
        for (index, ship) in ships.iter().enumerate() {
            grid.try_place_checked(ship)
                .map_err(|reason| FleetError { index, reason })?;
            debug!("placed ship #{}: {}", index, ship);
        }
        Ok(ships.len())
    }

    /// Place `count` ships of the configured length at random free positions.
    pub fn place_random_fleet<R: Rng>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<ShipDescriptor>, FleetError> {
        let mut placed = Vec::with_capacity(count);
        for index in 0..count {
            let ship = grid
                .random_placement(rng, self.config.ship_length())
                .map_err(|reason| FleetError { index, reason })?;
            grid.place(&ship);
            debug!("placed random ship #{}: {}", index, ship);
            placed.push(ship);
        }
        Ok(placed)
    }
}
