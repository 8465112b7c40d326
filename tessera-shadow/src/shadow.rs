//! A single drop-shadow layer and its value transforms.
//!
//! ## Usage
//!
//! Build a [`Shadow`] once, then derive variants from it. Every method takes
//! `self` by value and returns a fresh shadow, so a shadow can be shared
//! freely and transformed without affecting other holders.
//!
//! ```
//! use glam::Vec2;
//! use tessera_shadow::{Color, Shadow};
//!
//! let key = Shadow::new(Vec2::new(0.0, 2.0), 4.0, -1.0, Color::BLACK.with_alpha(0.2));
//! let softer = key.scale_blur(2.0).grow_spread(1.0);
//! assert_eq!(softer.blur_radius, 8.0);
//! assert_eq!(softer.spread_radius, 0.0);
//! ```

use derive_setters::Setters;
use glam::Vec2;

use crate::color::{Color, lerp_f32};

/// A single drop-shadow descriptor.
///
/// `blur_radius` is expected to stay non-negative. None of the transforms
/// clamp it; keeping it in range is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Displacement of the shadow from the casting shape, in logical pixels.
    pub offset: Vec2,
    /// Blur radius in logical pixels.
    pub blur_radius: f32,
    /// Amount the shadow grows (positive) or shrinks (negative) before blurring.
    pub spread_radius: f32,
    /// Shadow color including opacity.
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            blur_radius: 0.0,
            spread_radius: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

/// Field replacements for [`Shadow::copy_with`].
///
/// Unset fields leave the original value in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Setters)]
pub struct ShadowPatch {
    /// Replacement offset.
    #[setters(strip_option)]
    pub offset: Option<Vec2>,
    /// Replacement blur radius.
    #[setters(strip_option)]
    pub blur_radius: Option<f32>,
    /// Replacement spread radius.
    #[setters(strip_option)]
    pub spread_radius: Option<f32>,
    /// Replacement color.
    #[setters(strip_option)]
    pub color: Option<Color>,
}

impl Shadow {
    /// Creates a shadow from its four components.
    pub const fn new(offset: Vec2, blur_radius: f32, spread_radius: f32, color: Color) -> Self {
        Self {
            offset,
            blur_radius,
            spread_radius,
            color,
        }
    }

    /// Returns the opacity of the shadow color.
    #[inline]
    pub const fn opacity(self) -> f32 {
        self.color.a
    }

    /// Returns a copy with only the fields set in `patch` replaced.
    pub fn copy_with(self, patch: ShadowPatch) -> Self {
        Self {
            offset: patch.offset.unwrap_or(self.offset),
            blur_radius: patch.blur_radius.unwrap_or(self.blur_radius),
            spread_radius: patch.spread_radius.unwrap_or(self.spread_radius),
            color: patch.color.unwrap_or(self.color),
        }
    }

    /// Returns a copy whose color is replaced by `color`, opacity included.
    pub fn overlay_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns a copy with the blur radius multiplied by `factor`.
    pub fn scale_blur(self, factor: f32) -> Self {
        Self {
            blur_radius: self.blur_radius * factor,
            ..self
        }
    }

    /// Returns a copy with `delta` added to the spread radius.
    pub fn grow_spread(self, delta: f32) -> Self {
        Self {
            spread_radius: self.spread_radius + delta,
            ..self
        }
    }

    /// Returns a copy with `delta` subtracted from the spread radius.
    pub fn shrink_spread(self, delta: f32) -> Self {
        Self {
            spread_radius: self.spread_radius - delta,
            ..self
        }
    }

    /// Returns a copy with each offset axis multiplied by its own factor.
    pub fn scale_offset(self, scale_x: f32, scale_y: f32) -> Self {
        Self {
            offset: self.offset * Vec2::new(scale_x, scale_y),
            ..self
        }
    }

    /// Returns a copy with offset, blur and spread all multiplied by `factor`.
    ///
    /// The color is left alone.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            offset: self.offset * factor,
            blur_radius: self.blur_radius * factor,
            spread_radius: self.spread_radius * factor,
            color: self.color,
        }
    }

    /// Standard deviation of the Gaussian that approximates this blur radius.
    ///
    /// Renderers that blur with a Gaussian kernel use this instead of the raw
    /// radius. A zero or negative radius maps to `0.0` (no blur).
    pub fn blur_sigma(self) -> f32 {
        if self.blur_radius > 0.0 {
            self.blur_radius * 0.57735 + 0.5
        } else {
            0.0
        }
    }

    /// Linearly interpolates offset, blur, spread and every color channel.
    ///
    /// `t` is not clamped.
    pub fn lerp(self, other: Shadow, t: f32) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            blur_radius: lerp_f32(self.blur_radius, other.blur_radius, t),
            spread_radius: lerp_f32(self.spread_radius, other.spread_radius, t),
            color: self.color.lerp(other.color, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Shadow {
        Shadow::new(
            Vec2::new(1.0, 2.0),
            4.0,
            -1.0,
            Color::new(0.0, 0.0, 0.0, 0.2),
        )
    }

    #[test]
    fn test_copy_with_empty_patch_is_identity() {
        let shadow = sample();
        assert_eq!(shadow.copy_with(ShadowPatch::default()), shadow);
    }

    #[test]
    fn test_copy_with_replaces_only_given_fields() {
        let shadow = sample();
        let patched = shadow.copy_with(ShadowPatch::default().blur_radius(9.0).color(Color::WHITE));

        assert_eq!(patched.offset, shadow.offset);
        assert_eq!(patched.spread_radius, shadow.spread_radius);
        assert_eq!(patched.blur_radius, 9.0);
        assert_eq!(patched.color, Color::WHITE);
    }

    #[test]
    fn test_overlay_color_replaces_opacity_too() {
        let tint = Color::new(1.0, 0.0, 0.0, 0.5);
        let shadow = sample().overlay_color(tint);
        assert_eq!(shadow.color, tint);
        assert_eq!(shadow.opacity(), 0.5);
    }

    #[test]
    fn test_blur_and_spread_arithmetic() {
        let shadow = sample();
        assert_eq!(shadow.scale_blur(0.5).blur_radius, 2.0);
        assert_eq!(shadow.grow_spread(3.0).spread_radius, 2.0);
        assert_eq!(shadow.shrink_spread(3.0).spread_radius, -4.0);
    }

    #[test]
    fn test_transforms_do_not_clamp() {
        let shadow = sample().scale_blur(-1.0);
        assert_eq!(shadow.blur_radius, -4.0);
    }

    #[test]
    fn test_scale_offset_per_axis() {
        let shadow = sample().scale_offset(3.0, -1.0);
        assert_eq!(shadow.offset, Vec2::new(3.0, -2.0));
        assert_eq!(shadow.blur_radius, 4.0);
    }

    #[test]
    fn test_uniform_scale_leaves_color() {
        let shadow = sample().scale(2.0);
        assert_eq!(
            shadow,
            Shadow::new(
                Vec2::new(2.0, 4.0),
                8.0,
                -2.0,
                Color::new(0.0, 0.0, 0.0, 0.2)
            )
        );
    }

    #[test]
    fn test_default_paints_nothing() {
        let shadow = Shadow::default();
        assert_eq!(shadow.color, Color::default());
        assert_eq!(shadow.opacity(), 0.0);
        assert_eq!(shadow.offset, Vec2::ZERO);
    }

    #[test]
    fn test_blur_sigma() {
        assert_eq!(Shadow::default().blur_sigma(), 0.0);
        let sigma = sample().blur_sigma();
        assert!((sigma - (4.0 * 0.57735 + 0.5)).abs() < f32::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_shape() {
        let json = serde_json::to_value(sample()).expect("serializable");
        assert_eq!(json["offset"], serde_json::json!([1.0, 2.0]));
        assert_eq!(json["blur_radius"], serde_json::json!(4.0));

        let back: Shadow = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, sample());
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Shadow::new(Vec2::ZERO, 0.0, 0.0, Color::TRANSPARENT);
        let to = Shadow::new(Vec2::new(2.0, 4.0), 8.0, -2.0, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(
            from.lerp(to, 0.5),
            Shadow::new(
                Vec2::new(1.0, 2.0),
                4.0,
                -1.0,
                Color::new(0.5, 0.5, 0.5, 0.5)
            )
        );
    }
}
