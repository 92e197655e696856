//! Commonly used types and utilities for ease of import.

pub use crate::{
    render_text, Cell, Engine, Grid, GridConfig, Mask, Orientation, OverlayPolicy,
    PlacementError, Shape, ShipDescriptor,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_grid, render_json};
