//! Ship placement: validate a run of cells, then commit it as `Occupied`.
//!
//! Only literal cell collisions block a ship. Ships may touch at corners or
//! edges as long as no coordinate is shared.

use log::{debug, trace};
use rand::Rng;

use crate::common::PlacementError;
use crate::geometry::Orientation;
use crate::grid::{Cell, Grid};
use crate::ship::ShipDescriptor;

/// Attempts made by [`Grid::random_placement`] before giving up.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

impl Grid {
    /// Check every segment of `ship` in one pass, reporting the first
    /// out-of-bounds or non-empty cell.
    pub fn check_placement(&self, ship: &ShipDescriptor) -> Result<(), PlacementError> {
        if ship.length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        for segment in ship.segments() {
            // past isize::MAX is off every grid
            let Some((row, col)) = segment else {
                return Err(PlacementError::OutOfBounds {
                    row: isize::MAX,
                    col: isize::MAX,
                });
            };
            match self.cell_at(row, col) {
                None => return Err(PlacementError::OutOfBounds { row, col }),
                Some(Cell::Empty) => {}
                Some(_) => {
                    return Err(PlacementError::Overlap {
                        row: row as usize,
                        col: col as usize,
                    })
                }
            }
        }
        Ok(())
    }

    /// `true` iff all `length` cells of `ship` are in bounds and empty.
    pub fn can_place(&self, ship: &ShipDescriptor) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Mark every segment of `ship` as `Occupied`.
    ///
    /// Does not re-validate: call only after [`Grid::can_place`] succeeded,
    /// or use [`Grid::try_place`]. Segments outside the grid are skipped.
    pub fn place(&mut self, ship: &ShipDescriptor) {
        debug_assert!(self.can_place(ship), "place called on invalid {}", ship);
        for (row, col) in ship.segments().flatten() {
            if let Some(cell) = self.cell_mut_at(row, col) {
                trace!("segment ({}, {}) occupied", row, col);
                *cell = Cell::Occupied;
            }
        }
    }

    /// Validate then commit `ship`. On error the grid is left untouched.
    pub fn try_place_checked(&mut self, ship: &ShipDescriptor) -> Result<(), PlacementError> {
        if let Err(e) = self.check_placement(ship) {
            debug!("rejected {}: {}", ship, e);
            return Err(e);
        }
        self.place(ship);
        Ok(())
    }

    /// Boolean form of [`Grid::try_place_checked`].
    pub fn try_place(&mut self, ship: &ShipDescriptor) -> bool {
        self.try_place_checked(ship).is_ok()
    }

    /// Returns a random descriptor of `length` that [`Grid::can_place`]
    /// accepts, drawing orientation and origin uniformly.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<ShipDescriptor, PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if self.size() == 0 {
            return Err(PlacementError::UnableToPlaceShip);
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
            let row = rng.random_range(0..self.size());
            let col = rng.random_range(0..self.size());
            let ship = ShipDescriptor::new(row, col, orientation, length);
            if self.can_place(&ship) {
                return Ok(ship);
            }
        }
        Err(PlacementError::UnableToPlaceShip)
    }
}
