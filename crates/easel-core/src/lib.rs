//! Core geometry for darkroom enlarger easels.
//!
//! - Slots: pick the smallest standard easel slot that holds a sheet
//! - Fitting: largest image of a named film format inside the paper minus a border
//! - Blades: offsets from the easel center to each image edge, doubled
//! - Tables are process-wide constants; `Easel::from_config` layers user additions on top
//!
//! Quick example:
//! ```
//! use easel_core::prelude::*;
//! # fn main() -> easel_core::Result<()> {
//! let plan = Easel::standard().plan(10.0, 8.0, "4x5", 0.5)?;
//! assert_eq!(plan.slot, Size::new(8.0, 10.0));
//! println!("left {:.2} right {:.2}", plan.blades.left, plan.blades.right);
//! # Ok(()) }
//! ```

pub mod blades;
pub mod config;
pub mod easel;
pub mod error;
pub mod export;
pub mod fit;
pub mod model;
pub mod ratios;
pub mod slots;

pub use config::*;
pub use easel::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use ratios::{AspectRatios, BASE_ASPECT_RATIOS, FLIPPED_PREFIX};
pub use slots::{EaselSlots, STANDARD_EASEL_SLOTS};

/// Convenience prelude for common types and functions.
/// Importing `easel_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{EaselConfig, EaselConfigBuilder};
    pub use crate::easel::Easel;
    pub use crate::model::{EaselBlades, EaselPlan, Point, Size};
    pub use crate::ratios::AspectRatios;
    pub use crate::slots::EaselSlots;
    pub use crate::{blades_for, fit_and_calculate, fit_image, slot_for, EaselError};
}
