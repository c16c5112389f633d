//! Animated galaxy background for the galaxia portfolio.
//!
//! A drifting starfield with optional constellation lines, periodic shooting
//! stars, a glow around the pointer and a fade-in after every
//! (re)initialization. Each [`GalaxyState`] is an independent instance; the
//! simulation paints through the [`Surface`] trait, and [`CellRaster`]
//! implements it on terminal cells.

mod chars;
mod color;
pub mod fade;
pub mod glow;
mod raster;
pub mod shooting;
pub mod star;
mod state;
mod surface;

pub use color::{halo_color, starlight_color};
pub use fade::{FadePhase, fade_factor};
pub use glow::{glow_contribution, lit_opacity};
pub use raster::CellRaster;
pub use shooting::ShootingStar;
pub use star::Star;
pub use state::GalaxyState;
pub use surface::Surface;
