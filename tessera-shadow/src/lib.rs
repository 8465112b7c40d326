//! Shadow primitives for tessera-ui elevation effects.
//!
//! This crate provides the value types used to describe layered drop shadows
//! and the pure transforms that act on them:
//!
//! - [`Color`]: linear RGBA color whose alpha is the shadow opacity.
//! - [`Shadow`]: one shadow layer (offset, blur, spread, color) with
//!   per-layer transforms such as [`Shadow::scale_blur`] and
//!   [`Shadow::copy_with`].
//! - [`ShadowList`]: an ordered stack of layers, recolored with [`colorize`],
//!   re-ramped with [`ramp_opacity`] and blended with [`lerp_shadow_lists`].
//!
//! Everything here is allocation-light and side-effect free; every transform
//! returns a new value.
//!
//! # Example
//!
//! ```
//! use tessera_shadow::{Color, Shadow, ShadowList, Vec2, colorize, ramp_opacity};
//!
//! let shadows: ShadowList = [
//!     Shadow::new(Vec2::new(0.0, 2.0), 4.0, -1.0, Color::BLACK),
//!     Shadow::new(Vec2::new(0.0, 4.0), 5.0, 0.0, Color::BLACK),
//!     Shadow::new(Vec2::new(0.0, 1.0), 10.0, 0.0, Color::BLACK),
//! ]
//! .into_iter()
//! .collect();
//!
//! let ramped = ramp_opacity(&shadows, [0.2_f32, 0.14, 0.12], None);
//! let tinted = colorize(&ramped, Color::from_rgb(0.2, 0.0, 0.4), true);
//! assert_eq!(tinted[1].opacity(), 0.14);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod shadow;
pub mod shadow_list;

pub use glam::{self, Vec2};
pub use smallvec;

pub use crate::{
    color::Color,
    shadow::{Shadow, ShadowPatch},
    shadow_list::{
        OpacityStops, ShadowColors, ShadowList, colorize, lerp_shadow_lists, ramp_opacity,
    },
};
