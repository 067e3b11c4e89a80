//! Rectangular batches of series sharing one sample axis.

use crate::error::WindowError;

/// Owned batch of equally long series. Row `k` is the `k`-th series.
///
/// NaN is allowed and marks a missing sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeries(Vec<Vec<f64>>);

impl MultiSeries {
    /// Create a batch, validating that every row has the length of row 0.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::RaggedBatch`] | Some row length differs from row 0 |
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, WindowError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, got)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(WindowError::RaggedBatch { row, expected, got });
            }
        }
        Ok(Self(rows))
    }

    /// Build a batch from rows already known to be rectangular.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }

    pub(crate) fn as_rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// Return the number of series in the batch.
    #[must_use]
    pub fn n_series(&self) -> usize {
        self.0.len()
    }

    /// Return the number of samples per series (0 for an empty batch).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Return true if the batch has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow series `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n_series()`.
    #[must_use]
    pub fn row(&self, k: usize) -> &[f64] {
        &self.0[k]
    }

    /// Iterate over the series in batch order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.0.iter().map(Vec::as_slice)
    }

    /// Consume and return the rows.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.0
    }
}

impl From<Vec<f64>> for MultiSeries {
    /// Wrap one series as a batch of one.
    fn from(series: Vec<f64>) -> Self {
        Self(vec![series])
    }
}

impl TryFrom<Vec<Vec<f64>>> for MultiSeries {
    type Error = WindowError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
