//! Error types for window resolution and moving-average computation.

/// Errors from window construction and moving-average computation.
///
/// Every variant is an invalid-argument condition: it is detected before any
/// output is produced, so a failed call never returns a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when a signed window request has a negative `before`, or an
    /// `after` that is neither the `-1` "same as before" marker nor `>= 0`.
    #[error("invalid window: before = {before}, after = {after}")]
    InvalidWindow {
        /// Requested samples before the current one.
        before: i64,
        /// Requested samples after the current one.
        after: i64,
    },

    /// Returned when a constant sampling frequency is zero, negative or not finite.
    #[error("sampling frequency must be positive and finite, got {freq}")]
    NonPositiveFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// Returned when a time window duration is negative or not finite.
    #[error("{side} duration must be non-negative and finite, got {value}")]
    InvalidDuration {
        /// Which side of the window was rejected (`"before"` or `"after"`).
        side: &'static str,
        /// The rejected duration.
        value: f64,
    },

    /// Returned when a series does not have one sample per timestamp.
    #[error("series {series} has {got} samples, expected {expected} (one per timestamp)")]
    LengthMismatch {
        /// Position of the offending series in its batch (0 for a single series).
        series: usize,
        /// Number of timestamps.
        expected: usize,
        /// Number of samples in the series.
        got: usize,
    },

    /// Returned when the rows of a batch do not all have the same length.
    #[error("ragged batch: row {row} has {got} samples, expected {expected}")]
    RaggedBatch {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Returned when the fast path is asked to average a series containing NaN.
    #[error("fast moving average requires a series without missing values, found NaN at index {index}")]
    MissingValue {
        /// Position of the first NaN found.
        index: usize,
    },
}
