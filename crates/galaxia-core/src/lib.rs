//! Core types shared by the galaxia crates.
//!
//! Geometry for the drawing surface, the tunable constants of the animated
//! background, and the page sections of the portfolio.

mod geometry;
mod section;
mod tuning;

pub use geometry::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Point, SurfaceSize};
pub use section::{ProjectKind, Section};
pub use tuning::GalaxyTuning;
