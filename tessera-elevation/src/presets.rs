//! Opacity profile applied when materializing elevation shadows.

use tessera_shadow::{Color, Shadow, ShadowList, ramp_opacity};

/// Standard opacity profile for elevation shadows.
pub struct ElevationPresets;

impl ElevationPresets {
    /// Per-layer opacities for the umbra, penumbra and ambient layers.
    pub const OPACITY_RAMP: [f32; 3] = [0.2, 0.14, 0.12];

    /// Applies [`Self::OPACITY_RAMP`] to `shadows`, optionally recoloring
    /// every layer with `color` first.
    ///
    /// Layers past the third reuse the ambient opacity (`0.12`). An empty
    /// list is returned unchanged.
    pub fn materialize(shadows: &[Shadow], color: Option<Color>) -> ShadowList {
        if shadows.is_empty() {
            return ShadowList::new();
        }
        ramp_opacity(shadows, Self::OPACITY_RAMP, color)
    }
}

#[cfg(test)]
mod tests {
    use tessera_shadow::Vec2;

    use super::*;

    fn layers(count: usize) -> ShadowList {
        (0..count)
            .map(|index| Shadow::new(Vec2::new(0.0, index as f32), 2.0, 0.0, Color::BLACK))
            .collect()
    }

    #[test]
    fn test_materialize_empty_is_identity() {
        assert!(ElevationPresets::materialize(&[], None).is_empty());
        assert!(ElevationPresets::materialize(&[], Some(Color::WHITE)).is_empty());
    }

    #[test]
    fn test_materialize_three_layers() {
        let shadows = ElevationPresets::materialize(&layers(3), None);
        let opacities: Vec<f32> = shadows.iter().map(|shadow| shadow.opacity()).collect();
        assert_eq!(opacities, vec![0.2, 0.14, 0.12]);
    }

    #[test]
    fn test_materialize_extra_layers_reuse_ambient_opacity() {
        let shadows = ElevationPresets::materialize(&layers(5), None);
        assert_eq!(shadows.len(), 5);
        assert_eq!(shadows[3].opacity(), 0.12);
        assert_eq!(shadows[4].opacity(), 0.12);
    }

    #[test]
    fn test_materialize_with_color() {
        let tint = Color::new(0.2, 0.0, 0.4, 1.0);
        let shadows = ElevationPresets::materialize(&layers(3), Some(tint));
        assert_eq!(shadows[0].color, tint.with_alpha(0.2));
        assert_eq!(shadows[2].color, tint.with_alpha(0.12));
        assert_eq!(shadows[1].offset, Vec2::new(0.0, 1.0));
    }
}
