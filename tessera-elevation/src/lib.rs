//! Material elevation shadows for the Tessera UI framework.
//!
//! The standard Material shadows are only defined for a handful of
//! elevations (0, 1, 2, 3, 4, 6, 8, 9, 12, 16 and 24). [`ElevationTable`]
//! resolves shadows for any elevation in between by blending the two nearest
//! entries, and blends towards a synthetic elevation-100 shadow above the
//! last entry.
//!
//! # Example
//!
//! ```
//! use tessera_elevation::{ElevationPresets, ElevationTable};
//! use tessera_shadow::Color;
//!
//! let table = ElevationTable::material_shared();
//!
//! // Exact keys come straight from the table.
//! let card = table.as_shadows(1.0, None::<Color>, true)?;
//! assert_eq!(card[0].opacity(), 0.2);
//!
//! // Anything else is interpolated, here tinted with a brand color.
//! let tint = Color::from_rgb(0.4039, 0.3137, 0.6431);
//! let fab = table.as_decoration(7.0, tint, true)?;
//! assert_eq!(fab.shadows().len(), 3);
//!
//! // Re-apply the standard opacity profile to arbitrary layers.
//! let ramped = ElevationPresets::materialize(fab.shadows(), None);
//! assert_eq!(ramped[2].opacity(), 0.12);
//! # Ok::<(), tessera_elevation::ElevationError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod baseline;
pub mod config;
pub mod decoration;
mod error;
pub mod presets;
pub mod table;

pub use tessera_shadow;

pub use crate::{
    baseline::ANCHOR_ELEVATION,
    config::{ElevationEntry, ElevationTableConfig},
    decoration::ShadowDecoration,
    error::ElevationError,
    presets::ElevationPresets,
    table::ElevationTable,
};
