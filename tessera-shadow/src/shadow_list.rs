//! Ordered shadow stacks and the transforms that act on them.
//!
//! ## Usage
//!
//! A [`ShadowList`] is painted back to front: index 0 is the key (umbra)
//! layer, followed by the penumbra and ambient layers. Positional arguments
//! such as per-layer colors and opacity stops line up with that order.
//!
//! [`colorize`] and [`ramp_opacity`] treat a short per-layer argument
//! differently. `colorize` leaves layers past the end of the color list
//! untouched, while `ramp_opacity` keeps applying the last stop to every
//! remaining layer so the falloff continues.

use smallvec::SmallVec;

use crate::{color::Color, shadow::Shadow};

/// An ordered stack of shadow layers.
///
/// Three layers is the common case (umbra, penumbra, ambient), so they are
/// stored inline.
pub type ShadowList = SmallVec<[Shadow; 3]>;

/// Color argument for [`colorize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ShadowColors {
    /// Keep the existing colors.
    #[default]
    None,
    /// Apply one color to every layer.
    Uniform(Color),
    /// Apply colors positionally; layers past the end keep their color.
    PerLayer(Vec<Color>),
}

impl ShadowColors {
    /// Returns the replacement color for the layer at `index`, if any.
    fn at(&self, index: usize) -> Option<Color> {
        match self {
            ShadowColors::None => None,
            ShadowColors::Uniform(color) => Some(*color),
            ShadowColors::PerLayer(colors) => colors.get(index).copied(),
        }
    }

    /// Returns `true` if this argument replaces no colors at all.
    pub fn is_none(&self) -> bool {
        match self {
            ShadowColors::None => true,
            ShadowColors::Uniform(_) => false,
            ShadowColors::PerLayer(colors) => colors.is_empty(),
        }
    }
}

impl From<Color> for ShadowColors {
    fn from(color: Color) -> Self {
        ShadowColors::Uniform(color)
    }
}

impl From<Option<Color>> for ShadowColors {
    fn from(color: Option<Color>) -> Self {
        color.map_or(ShadowColors::None, ShadowColors::Uniform)
    }
}

impl From<Vec<Color>> for ShadowColors {
    fn from(colors: Vec<Color>) -> Self {
        ShadowColors::PerLayer(colors)
    }
}

impl From<&[Color]> for ShadowColors {
    fn from(colors: &[Color]) -> Self {
        ShadowColors::PerLayer(colors.to_vec())
    }
}

impl<const N: usize> From<[Color; N]> for ShadowColors {
    fn from(colors: [Color; N]) -> Self {
        ShadowColors::PerLayer(colors.to_vec())
    }
}

/// Opacity argument for [`ramp_opacity`].
#[derive(Debug, Clone, PartialEq)]
pub enum OpacityStops {
    /// Set every layer to the same opacity.
    Uniform(f32),
    /// Set opacities positionally; layers past the end reuse the last stop.
    PerLayer(Vec<f32>),
}

impl OpacityStops {
    /// Returns the opacity for the layer at `index`.
    ///
    /// `None` only for an empty per-layer list.
    fn at(&self, index: usize) -> Option<f32> {
        match self {
            OpacityStops::Uniform(stop) => Some(*stop),
            OpacityStops::PerLayer(stops) => stops.get(index).or(stops.last()).copied(),
        }
    }
}

impl From<f32> for OpacityStops {
    fn from(stop: f32) -> Self {
        OpacityStops::Uniform(stop)
    }
}

impl From<Vec<f32>> for OpacityStops {
    fn from(stops: Vec<f32>) -> Self {
        OpacityStops::PerLayer(stops)
    }
}

impl From<&[f32]> for OpacityStops {
    fn from(stops: &[f32]) -> Self {
        OpacityStops::PerLayer(stops.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for OpacityStops {
    fn from(stops: [f32; N]) -> Self {
        OpacityStops::PerLayer(stops.to_vec())
    }
}

/// Recolors a shadow stack.
///
/// With `preserve_opacity` set, each replaced layer keeps its own opacity and
/// only takes the RGB channels of the new color. Otherwise the new color is
/// applied as-is, opacity included.
///
/// The result always has the same length as `shadows`.
pub fn colorize(
    shadows: &[Shadow],
    colors: impl Into<ShadowColors>,
    preserve_opacity: bool,
) -> ShadowList {
    let colors = colors.into();
    if colors.is_none() {
        return ShadowList::from_slice(shadows);
    }

    shadows
        .iter()
        .enumerate()
        .map(|(index, shadow)| match colors.at(index) {
            Some(color) if preserve_opacity => {
                shadow.overlay_color(color.with_alpha(shadow.opacity()))
            }
            Some(color) => shadow.overlay_color(color),
            None => *shadow,
        })
        .collect()
}

/// Sets the opacity of every layer from `stops`.
///
/// The stop replaces the layer's opacity rather than scaling it. When `color`
/// is given it replaces each layer's color first, and the stop then sets the
/// final opacity. An empty per-layer stop list leaves opacities untouched.
///
/// The result always has the same length as `shadows`.
pub fn ramp_opacity(
    shadows: &[Shadow],
    stops: impl Into<OpacityStops>,
    color: Option<Color>,
) -> ShadowList {
    let stops = stops.into();

    shadows
        .iter()
        .enumerate()
        .map(|(index, shadow)| {
            let base = color.unwrap_or(shadow.color);
            let color = match stops.at(index) {
                Some(stop) => base.with_alpha(stop),
                None => base,
            };
            shadow.overlay_color(color)
        })
        .collect()
}

/// Blends two shadow stacks layer by layer at fraction `t`.
///
/// Returns `None` when the stacks differ in length; callers decide how to
/// report the mismatch.
pub fn lerp_shadow_lists(from: &[Shadow], to: &[Shadow], t: f32) -> Option<ShadowList> {
    if from.len() != to.len() {
        tracing::trace!(
            from_len = from.len(),
            to_len = to.len(),
            "Refusing to blend shadow lists of different lengths"
        );
        return None;
    }

    Some(
        from.iter()
            .zip(to)
            .map(|(from, to)| from.lerp(*to, t))
            .collect(),
    )
}
