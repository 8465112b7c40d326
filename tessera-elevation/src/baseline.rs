//! Canonical Material elevation shadows.
//!
//! Each elevation is drawn with three black layers: a sharp key shadow
//! (umbra), a softer penumbra and a wide ambient shadow, at opacities
//! `0.2`, `0.14` and `0.12` respectively.

use tessera_shadow::{Color, Shadow, Vec2};

use crate::presets::ElevationPresets;

/// Color of the key (umbra) layer.
pub const UMBRA: Color = Color::BLACK.with_alpha(ElevationPresets::OPACITY_RAMP[0]);
/// Color of the penumbra layer.
pub const PENUMBRA: Color = Color::BLACK.with_alpha(ElevationPresets::OPACITY_RAMP[1]);
/// Color of the ambient layer.
pub const AMBIENT: Color = Color::BLACK.with_alpha(ElevationPresets::OPACITY_RAMP[2]);

/// Elevation of the synthetic anchor used past the last table key.
pub const ANCHOR_ELEVATION: f32 = 100.0;

const fn layer(y: f32, blur_radius: f32, spread_radius: f32, color: Color) -> Shadow {
    Shadow::new(Vec2::new(0.0, y), blur_radius, spread_radius, color)
}

const fn elevation(umbra: Shadow, penumbra: Shadow, ambient: Shadow) -> [Shadow; 3] {
    [umbra, penumbra, ambient]
}

/// Shadow layers for the standard Material elevations, sorted by elevation.
///
/// Elevation 0 uses three empty transparent layers so that every entry can
/// be blended with its neighbours layer by layer.
pub const MATERIAL_ELEVATIONS: [(f32, [Shadow; 3]); 11] = [
    (
        0.0,
        elevation(
            layer(0.0, 0.0, 0.0, Color::TRANSPARENT),
            layer(0.0, 0.0, 0.0, Color::TRANSPARENT),
            layer(0.0, 0.0, 0.0, Color::TRANSPARENT),
        ),
    ),
    (
        1.0,
        elevation(
            layer(2.0, 1.0, -1.0, UMBRA),
            layer(1.0, 1.0, 0.0, PENUMBRA),
            layer(1.0, 3.0, 0.0, AMBIENT),
        ),
    ),
    (
        2.0,
        elevation(
            layer(3.0, 1.0, -2.0, UMBRA),
            layer(2.0, 2.0, 0.0, PENUMBRA),
            layer(1.0, 5.0, 0.0, AMBIENT),
        ),
    ),
    (
        3.0,
        elevation(
            layer(3.0, 3.0, -2.0, UMBRA),
            layer(3.0, 4.0, 0.0, PENUMBRA),
            layer(1.0, 8.0, 0.0, AMBIENT),
        ),
    ),
    (
        4.0,
        elevation(
            layer(2.0, 4.0, -1.0, UMBRA),
            layer(4.0, 5.0, 0.0, PENUMBRA),
            layer(1.0, 10.0, 0.0, AMBIENT),
        ),
    ),
    (
        6.0,
        elevation(
            layer(3.0, 5.0, -1.0, UMBRA),
            layer(6.0, 10.0, 0.0, PENUMBRA),
            layer(1.0, 18.0, 0.0, AMBIENT),
        ),
    ),
    (
        8.0,
        elevation(
            layer(5.0, 5.0, -3.0, UMBRA),
            layer(8.0, 10.0, 1.0, PENUMBRA),
            layer(3.0, 14.0, 2.0, AMBIENT),
        ),
    ),
    (
        9.0,
        elevation(
            layer(5.0, 6.0, -3.0, UMBRA),
            layer(9.0, 12.0, 1.0, PENUMBRA),
            layer(3.0, 16.0, 2.0, AMBIENT),
        ),
    ),
    (
        12.0,
        elevation(
            layer(7.0, 8.0, -4.0, UMBRA),
            layer(12.0, 17.0, 2.0, PENUMBRA),
            layer(5.0, 22.0, 4.0, AMBIENT),
        ),
    ),
    (
        16.0,
        elevation(
            layer(8.0, 10.0, -5.0, UMBRA),
            layer(16.0, 24.0, 2.0, PENUMBRA),
            layer(6.0, 30.0, 5.0, AMBIENT),
        ),
    ),
    (
        24.0,
        elevation(
            layer(11.0, 15.0, -7.0, UMBRA),
            layer(24.0, 38.0, 3.0, PENUMBRA),
            layer(9.0, 46.0, 8.0, AMBIENT),
        ),
    ),
];

/// Hand-tuned layers for elevation 100.
///
/// Only used as the upper end of the blend for elevations above the last
/// table key; it is not a table entry itself.
pub const ELEVATION_100: [Shadow; 3] = elevation(
    layer(38.0, 48.0, -24.0, UMBRA),
    layer(100.0, 144.0, 12.0, PENUMBRA),
    layer(36.0, 180.0, 32.0, AMBIENT),
);
