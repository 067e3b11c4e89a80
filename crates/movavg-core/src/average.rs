//! Path dispatch between the exact and fast moving averages.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::WindowError;
use crate::exact::exact_mean;
use crate::fast::{fast_mean, fast_mean_unchecked, first_missing};
use crate::series::MultiSeries;
use crate::window::{WindowSpec, resolve_window};

/// Which computation path a [`MovingAverage`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Fast path when the series has no missing values, exact path otherwise.
    #[default]
    Auto,
    /// Always use the exact path, whatever the input.
    Exact,
    /// Always use the fast path. Fails on series containing NaN.
    Fast,
}

/// Compute the moving average of `y`, choosing the path from its content.
///
/// A series with any NaN goes through [`exact_mean`], which skips missing
/// samples. A series without NaN goes through [`fast_mean`]. Both paths
/// agree up to floating-point rounding on NaN-free input.
#[must_use]
#[instrument(skip(y), fields(n = y.len()))]
pub fn moving_average(y: &[f64], window: WindowSpec) -> Vec<f64> {
    match first_missing(y) {
        Some(index) => {
            debug!(first_missing = index, "missing values present, using exact path");
            exact_mean(y, window)
        }
        None => fast_mean_unchecked(y, window),
    }
}

/// Smooth every series of a batch with [`moving_average`], in parallel.
#[must_use]
#[instrument(skip(batch), fields(n_series = batch.n_series(), n = batch.len()))]
pub fn moving_average_batch(batch: &MultiSeries, window: WindowSpec) -> MultiSeries {
    let rows: Vec<Vec<f64>> = batch
        .as_rows()
        .par_iter()
        .map(|row| moving_average(row, window))
        .collect();
    MultiSeries::from_rows_unchecked(rows)
}

/// Moving-average configuration.
///
/// Construct via [`MovingAverage::new`], then chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter  | Default                       |
/// |------------|-------------------------------|
/// | `after`    | same as `before` (symmetric)  |
/// | `strategy` | [`Strategy::Auto`]            |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    before: usize,
    after: Option<usize>,
    strategy: Strategy,
}

impl MovingAverage {
    /// Create a configuration averaging `before` samples before each index.
    #[must_use]
    pub fn new(before: usize) -> Self {
        Self {
            before,
            after: None,
            strategy: Strategy::Auto,
        }
    }

    /// Set the number of samples after each index.
    #[must_use]
    pub fn with_after(mut self, after: usize) -> Self {
        self.after = Some(after);
        self
    }

    /// Set the computation path.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Return the resolved window.
    #[must_use]
    pub fn window(&self) -> WindowSpec {
        resolve_window(self.before, self.after)
    }

    /// Return the configured computation path.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Smooth `y` with this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::MissingValue`] | Strategy is [`Strategy::Fast`] and `y` contains a NaN |
    pub fn apply(&self, y: &[f64]) -> Result<Vec<f64>, WindowError> {
        let window = self.window();
        match self.strategy {
            Strategy::Auto => Ok(moving_average(y, window)),
            Strategy::Exact => Ok(exact_mean(y, window)),
            Strategy::Fast => fast_mean(y, window),
        }
    }
}
