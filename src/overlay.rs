//! Stamping masks onto the grid.

use log::debug;

use crate::geometry;
use crate::grid::{Cell, Grid};
use crate::mask::Mask;

/// What a stamp does to cells that already hold a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum OverlayPolicy {
    /// Every in-bounds filled mask cell becomes `Effect`.
    #[default]
    Overwrite,
    /// `Occupied` cells keep their state.
    PreserveOccupied,
}

/// Outcome of one stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct StampSummary {
    /// Grid cells set to `Effect`.
    pub marked: usize,
    /// Filled mask cells that fell outside the grid.
    pub clipped: usize,
    /// Ship cells left alone under [`OverlayPolicy::PreserveOccupied`].
    pub preserved: usize,
}

impl Grid {
    /// Stamp `mask` so its anchor lands on (target_row, target_col),
    /// overwriting whatever the covered cells held.
    pub fn stamp(&mut self, mask: &Mask, target_row: usize, target_col: usize) -> StampSummary {
        self.stamp_with_policy(mask, target_row, target_col, OverlayPolicy::Overwrite)
    }

    /// [`Grid::stamp`] with an explicit overlay policy.
    pub fn stamp_with_policy(
        &mut self,
        mask: &Mask,
        target_row: usize,
        target_col: usize,
        policy: OverlayPolicy,
    ) -> StampSummary {
        self.stamp_with_anchor(mask, (target_row, target_col), mask.anchor(), policy)
    }

    /// Stamp `mask` aligning the local cell `anchor` with `target`.
    ///
    /// Mask cells that map outside the grid are clipped silently.
    pub fn stamp_with_anchor(
        &mut self,
        mask: &Mask,
        target: (usize, usize),
        anchor: (usize, usize),
        policy: OverlayPolicy,
    ) -> StampSummary {
        let mut summary = StampSummary::default();
        for cell in mask.filled_cells() {
            let Some(slot) = geometry::anchor_offset(target, anchor, cell)
                .and_then(|(row, col)| self.cell_mut_at(row, col))
            else {
                summary.clipped += 1;
                continue;
            };
            if policy == OverlayPolicy::PreserveOccupied && *slot == Cell::Occupied {
                summary.preserved += 1;
                continue;
            }
            *slot = Cell::Effect;
            summary.marked += 1;
        }
        if summary.clipped > 0 {
            debug!(
                "stamp at {:?} clipped {} of {} cells",
                target,
                summary.clipped,
                mask.count()
            );
        }
        summary
    }
}
