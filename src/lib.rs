#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod engine;
pub mod geometry;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod overlay;
mod placement;
pub mod prelude;
mod render;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use engine::Engine;
pub use geometry::{in_bounds, step_vector, Orientation};
pub use grid::{Cell, Grid};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{Mask, MaskBits, Shape, MAX_MASK_SIZE};
pub use overlay::{OverlayPolicy, StampSummary};
pub use placement::RANDOM_PLACEMENT_ATTEMPTS;
pub use render::render_text;
#[cfg(feature = "std")]
pub use render::{print_grid, render_json};
pub use ship::{Segments, ShipDescriptor};
