//! Plain-data form of an [`ElevationTable`], for loading custom tables.
//!
//! With the `serde` feature enabled the config can be read from any serde
//! format and turned into a validated table with `TryFrom`.

use tessera_shadow::{Shadow, ShadowList};

use crate::{ElevationError, ElevationTable};

/// Layers for a single table key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationEntry {
    /// Elevation key.
    pub elevation: f32,
    /// Shadow layers in paint order.
    pub shadows: Vec<Shadow>,
}

/// Unvalidated description of an elevation table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationTableConfig {
    /// Table entries, in any order.
    pub entries: Vec<ElevationEntry>,
    /// Layers for the synthetic elevation-100 anchor.
    pub anchor: Vec<Shadow>,
}

impl TryFrom<ElevationTableConfig> for ElevationTable {
    type Error = ElevationError;

    fn try_from(config: ElevationTableConfig) -> Result<Self, Self::Error> {
        ElevationTable::new(
            config
                .entries
                .into_iter()
                .map(|entry| (entry.elevation, ShadowList::from_vec(entry.shadows))),
            ShadowList::from_vec(config.anchor),
        )
    }
}

impl From<&ElevationTable> for ElevationTableConfig {
    fn from(table: &ElevationTable) -> Self {
        Self {
            entries: table
                .keys()
                .filter_map(|elevation| {
                    table.get(elevation).map(|shadows| ElevationEntry {
                        elevation,
                        shadows: shadows.to_vec(),
                    })
                })
                .collect(),
            anchor: table.anchor().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_rejected() {
        let config = ElevationTableConfig {
            entries: Vec::new(),
            anchor: Vec::new(),
        };
        assert_eq!(
            ElevationTable::try_from(config),
            Err(ElevationError::EmptyTable)
        );
    }

    #[test]
    fn test_material_table_survives_config() {
        let table = ElevationTable::material();
        let config = ElevationTableConfig::from(&table);
        assert_eq!(config.entries.len(), 11);
        assert_eq!(ElevationTable::try_from(config), Ok(table));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "entries": [
                {
                    "elevation": 0.0,
                    "shadows": [
                        { "offset": [0.0, 0.0], "blur_radius": 0.0, "spread_radius": 0.0,
                          "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.0 } }
                    ]
                },
                {
                    "elevation": 4.0,
                    "shadows": [
                        { "offset": [0.0, 4.0], "blur_radius": 8.0, "spread_radius": -2.0,
                          "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.5 } }
                    ]
                }
            ],
            "anchor": [
                { "offset": [0.0, 40.0], "blur_radius": 80.0, "spread_radius": 0.0,
                  "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.5 } }
            ]
        }"#;

        let config: ElevationTableConfig = serde_json::from_str(json).expect("valid json");
        let table = ElevationTable::try_from(config).expect("valid table");
        let shadows = table
            .as_shadows(2.0, tessera_shadow::ShadowColors::None, true)
            .expect("in range");

        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].offset.y, 2.0);
        assert_eq!(shadows[0].blur_radius, 4.0);
        assert_eq!(shadows[0].spread_radius, -1.0);
        assert_eq!(shadows[0].opacity(), 0.25);
    }
}
