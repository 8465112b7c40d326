//! Elevation lookup and interpolation.
//!
//! ## Usage
//!
//! Resolve the shadow layers for any non-negative elevation, blending between
//! the nearest table entries when the elevation is not itself a key.
//!
//! ```
//! use tessera_elevation::ElevationTable;
//! use tessera_shadow::Color;
//!
//! let table = ElevationTable::material();
//! let shadows = table.as_shadows(5.0, None::<Color>, true)?;
//! assert_eq!(shadows.len(), 3);
//! # Ok::<(), tessera_elevation::ElevationError>(())
//! ```

use std::sync::OnceLock;

use tessera_shadow::{Color, Shadow, ShadowColors, ShadowList, colorize, lerp_shadow_lists};
use tracing::{debug, trace, warn};

use crate::{
    ElevationError,
    baseline::{ANCHOR_ELEVATION, ELEVATION_100, MATERIAL_ELEVATIONS},
    decoration::ShadowDecoration,
    presets::ElevationPresets,
};

static MATERIAL: OnceLock<ElevationTable> = OnceLock::new();

/// Sorted mapping from elevation keys to shadow layers, plus the synthetic
/// anchor used above the last key.
///
/// Keys are sparse, so elevations between two keys are blended from those two
/// entries only. Elevations between the last key and [`ANCHOR_ELEVATION`] are
/// blended towards the anchor, and anything at or above it resolves to the
/// anchor itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationTable {
    entries: Vec<(f32, ShadowList)>,
    anchor: ShadowList,
}

impl ElevationTable {
    /// Builds a table from `(elevation, layers)` entries and the layers used at
    /// [`ANCHOR_ELEVATION`].
    ///
    /// Entries may be given in any order. Fails if there are no entries or if
    /// a key is negative, non-finite or repeated.
    pub fn new(
        entries: impl IntoIterator<Item = (f32, ShadowList)>,
        anchor: ShadowList,
    ) -> Result<Self, ElevationError> {
        let mut entries: Vec<(f32, ShadowList)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(ElevationError::EmptyTable);
        }
        if let Some((key, _)) = entries
            .iter()
            .find(|(key, _)| !key.is_finite() || *key < 0.0)
        {
            return Err(ElevationError::InvalidKey { key: *key });
        }

        entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(ElevationError::DuplicateKey { key: pair[0].0 });
        }

        debug!(
            keys = entries.len(),
            max_key = entries[entries.len() - 1].0,
            "Elevation table configured"
        );
        Ok(Self { entries, anchor })
    }

    /// The standard Material elevation table.
    pub fn material() -> Self {
        Self {
            entries: MATERIAL_ELEVATIONS
                .iter()
                .map(|(key, layers)| (*key, ShadowList::from_slice(layers)))
                .collect(),
            anchor: ShadowList::from_slice(&ELEVATION_100),
        }
    }

    /// A process-wide instance of [`Self::material`], built on first use.
    pub fn material_shared() -> &'static Self {
        MATERIAL.get_or_init(Self::material)
    }

    /// Iterates over the table keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = f32> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Returns the layers stored for exactly `elevation`.
    pub fn get(&self, elevation: f32) -> Option<&[Shadow]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == elevation)
            .map(|(_, layers)| layers.as_slice())
    }

    /// Returns the layers used at [`ANCHOR_ELEVATION`].
    pub fn anchor(&self) -> &[Shadow] {
        &self.anchor
    }

    /// Resolves the shadow layers for `elevation`, recolored with `colors`.
    ///
    /// `elevation` must be a non-negative number no smaller than the smallest
    /// key; anything else is reported as [`ElevationError::OutOfRange`]. When
    /// `preserve_opacity` is set, recolored layers keep the opacity defined by
    /// the table. See [`colorize`] for how `colors` is applied.
    #[tracing::instrument(level = "trace", skip(self, colors))]
    pub fn as_shadows(
        &self,
        elevation: f32,
        colors: impl Into<ShadowColors>,
        preserve_opacity: bool,
    ) -> Result<ShadowList, ElevationError> {
        let colors = colors.into();
        let min = self.entries[0].0;
        if elevation.is_nan() || elevation < min {
            return Err(ElevationError::OutOfRange { elevation, min });
        }

        // Index of the first key above the elevation; never 0 after the range check.
        let above = self.entries.partition_point(|(key, _)| *key <= elevation);
        let (low, low_layers) = &self.entries[above - 1];
        if *low == elevation {
            return Ok(colorize(low_layers, colors, preserve_opacity));
        }

        if elevation >= ANCHOR_ELEVATION {
            trace!("Elevation at or above the anchor, using anchor layers");
            return Ok(colorize(&self.anchor, colors, preserve_opacity));
        }

        let (high, high_layers) = match self.entries.get(above) {
            Some((key, layers)) => (*key, layers),
            None => {
                debug!(
                    elevation,
                    last_key = *low,
                    "Elevation beyond the last key, blending towards the anchor"
                );
                (ANCHOR_ELEVATION, &self.anchor)
            }
        };

        let fraction = (elevation - low) / (high - low);
        trace!(low = *low, high, fraction, "Blending bracketing elevations");

        let from = colorize(low_layers, colors.clone(), preserve_opacity);
        let to = colorize(high_layers, colors, preserve_opacity);
        lerp_shadow_lists(&from, &to, fraction).ok_or_else(|| {
            warn!(
                low = *low,
                high,
                low_len = from.len(),
                high_len = to.len(),
                "Bracketing elevations have different layer counts"
            );
            ElevationError::Interpolation {
                low: *low,
                high,
                low_len: from.len(),
                high_len: to.len(),
            }
        })
    }

    /// Resolves `elevation` like [`Self::as_shadows`] and wraps the layers in
    /// a [`ShadowDecoration`].
    pub fn as_decoration(
        &self,
        elevation: f32,
        colors: impl Into<ShadowColors>,
        preserve_opacity: bool,
    ) -> Result<ShadowDecoration, ElevationError> {
        self.as_shadows(elevation, colors, preserve_opacity)
            .map(ShadowDecoration::new)
    }

    /// Resolves `elevation` and applies the standard opacity profile from
    /// [`ElevationPresets::materialize`], optionally tinting every layer.
    pub fn as_materialized_shadows(
        &self,
        elevation: f32,
        color: Option<Color>,
    ) -> Result<ShadowList, ElevationError> {
        let shadows = self.as_shadows(elevation, ShadowColors::None, true)?;
        Ok(ElevationPresets::materialize(&shadows, color))
    }
}

impl Default for ElevationTable {
    fn default() -> Self {
        Self::material()
    }
}
