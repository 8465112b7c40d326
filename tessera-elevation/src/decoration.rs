//! Paint-ready shadow decoration.
//!
//! ## Usage
//!
//! Hand a [`ShadowDecoration`] to the surface or shadow pipeline that draws
//! it. Layers are painted in order, key shadow first.

use tessera_shadow::{Shadow, ShadowList};

/// The shadow part of a surface decoration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowDecoration {
    shadows: ShadowList,
}

impl ShadowDecoration {
    /// Creates a decoration from the given layers.
    pub fn new(shadows: ShadowList) -> Self {
        Self { shadows }
    }

    /// Returns the shadow layers in paint order.
    pub fn shadows(&self) -> &[Shadow] {
        &self.shadows
    }

    /// Returns `true` if no layer would be visible when painted.
    ///
    /// Layers with zero opacity are skipped by renderers, so a decoration
    /// holding only such layers paints nothing even though it has layers.
    pub fn paints_nothing(&self) -> bool {
        self.shadows.iter().all(|shadow| shadow.opacity() <= 0.0)
    }

    /// Consumes the decoration, returning its layers.
    pub fn into_shadows(self) -> ShadowList {
        self.shadows
    }
}

impl From<ShadowList> for ShadowDecoration {
    fn from(shadows: ShadowList) -> Self {
        Self::new(shadows)
    }
}

impl IntoIterator for ShadowDecoration {
    type Item = Shadow;
    type IntoIter = smallvec::IntoIter<[Shadow; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.shadows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShadowDecoration {
    type Item = &'a Shadow;
    type IntoIter = std::slice::Iter<'a, Shadow>;

    fn into_iter(self) -> Self::IntoIter {
        self.shadows.iter()
    }
}

#[cfg(test)]
mod tests {
    use tessera_shadow::{Color, Vec2};

    use super::*;

    #[test]
    fn test_transparent_layers_paint_nothing() {
        let decoration: ShadowDecoration = [Shadow::new(Vec2::ZERO, 0.0, 0.0, Color::TRANSPARENT)]
            .into_iter()
            .collect::<ShadowList>()
            .into();
        assert!(decoration.paints_nothing());
        assert_eq!(decoration.shadows().len(), 1);
        assert!(ShadowDecoration::default().paints_nothing());
    }

    #[test]
    fn test_iterates_in_paint_order() {
        let layers: ShadowList = (1..=3)
            .map(|y| Shadow::new(Vec2::new(0.0, y as f32), 1.0, 0.0, Color::BLACK))
            .collect();
        let decoration = ShadowDecoration::new(layers.clone());

        assert!(!decoration.paints_nothing());
        let offsets: Vec<f32> = (&decoration).into_iter().map(|shadow| shadow.offset.y).collect();
        assert_eq!(offsets, vec![1.0, 2.0, 3.0]);
        assert_eq!(decoration.into_shadows(), layers);
    }
}
