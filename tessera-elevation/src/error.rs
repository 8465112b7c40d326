use thiserror::Error;

/// Errors produced while building an [`ElevationTable`](crate::ElevationTable)
/// or resolving shadows from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElevationError {
    /// The table was configured without any elevation entries.
    #[error("Elevation table has no entries")]
    EmptyTable,
    /// A table key is negative, infinite or NaN.
    #[error("Invalid elevation key {key}: keys must be finite and non-negative")]
    InvalidKey {
        /// The rejected key.
        key: f32,
    },
    /// The same key appears more than once in the table.
    #[error("Duplicate elevation key {key}")]
    DuplicateKey {
        /// The repeated key.
        key: f32,
    },
    /// The requested elevation lies below the smallest table key or is NaN.
    #[error("Elevation {elevation} is outside the table (smallest key is {min})")]
    OutOfRange {
        /// The requested elevation.
        elevation: f32,
        /// The smallest key in the table.
        min: f32,
    },
    /// The two bracketing shadow lists have different layer counts.
    #[error(
        "Cannot blend elevation {low} ({low_len} layers) with elevation {high} ({high_len} layers)"
    )]
    Interpolation {
        /// Lower bracketing elevation.
        low: f32,
        /// Upper bracketing elevation.
        high: f32,
        /// Layer count at the lower elevation.
        low_len: usize,
        /// Layer count at the upper elevation.
        high_len: usize,
    },
}
