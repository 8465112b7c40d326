//! Linear RGBA color for shadow layers.
//!
//! ## Usage
//!
//! Build colors with [`Color::new`] or the named constants, and use
//! [`Color::with_alpha`] to change the opacity of a shadow layer without
//! touching its RGB channels.

use bytemuck::{Pod, Zeroable};

/// A shadow color in linear RGB with straight (non-premultiplied) alpha.
///
/// Channels are stored as `f32`s, typically in the range `[0.0, 1.0]`. The
/// alpha channel is what the rest of this crate calls the *opacity* of a
/// shadow layer.
///
/// The layout is `#[repr(C)]` and [`Pod`], so renderers can upload shadow
/// colors straight into GPU buffers with `bytemuck::cast_slice`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (opacity).
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black, the base of every Material key and ambient shadow.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Returns the opacity of this color.
    #[inline]
    pub const fn alpha(self) -> f32 {
        self.a
    }

    /// Returns a copy of this color with its opacity replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Returns `true` if this color has the same RGB channels as `other`,
    /// ignoring opacity.
    #[inline]
    pub fn same_rgb(self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Linearly interpolates every channel, alpha included.
    ///
    /// `t` is not clamped; `0.0` yields `self` and `1.0` yields `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: lerp_f32(self.r, other.r, t),
            g: lerp_f32(self.g, other.g, t),
            b: lerp_f32(self.b, other.b, t),
            a: lerp_f32(self.a, other.a, t),
        }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

#[inline]
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_channels() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4).with_alpha(0.9);
        assert_eq!(color, Color::new(0.1, 0.2, 0.3, 0.9));
        assert_eq!(color.alpha(), 0.9);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let from = Color::new(0.0, 0.0, 0.0, 0.0);
        let to = Color::new(1.0, 0.5, 0.25, 1.0);

        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.5), Color::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn test_same_rgb_ignores_alpha() {
        assert!(Color::BLACK.same_rgb(Color::TRANSPARENT));
        assert!(!Color::BLACK.same_rgb(Color::WHITE));
    }

    #[test]
    fn test_gpu_layout() {
        let colors = [Color::new(0.1, 0.2, 0.3, 0.4), Color::WHITE];
        let floats: &[f32] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, [0.1_f32, 0.2, 0.3, 0.4, 1.0, 1.0, 1.0, 1.0].as_slice());
        assert_eq!(std::mem::size_of::<Color>(), 16);
    }

    #[test]
    fn test_from_u8() {
        let color = Color::from([255, 0, 255, 51]);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 0.2);
    }
}
