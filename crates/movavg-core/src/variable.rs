//! Time-domain windows over irregularly sampled series.
//!
//! The window of timestamp `t = x[i]` is every index `j` with
//! `t - before <= x[j] <= t + after`, whatever the position of `j` relative
//! to `i`. Windows are computed once per timestamp and shared by every series
//! of a batch.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::WindowError;
use crate::exact::nan_mean;
use crate::series::MultiSeries;
use crate::window::TimeWindowSpec;

/// Indices whose timestamps fall inside one window.
enum Members {
    /// Sorted axis: the members form a contiguous run.
    Run(Range<usize>),
    /// Unsorted axis: the members in index order.
    Scattered(Vec<usize>),
}

fn window_members(x: &[f64], sorted: bool, lo: f64, hi: f64) -> Members {
    if sorted {
        let start = x.partition_point(|&v| v < lo);
        let end = x.partition_point(|&v| v <= hi);
        Members::Run(start..end.max(start))
    } else {
        Members::Scattered(
            x.iter()
                .enumerate()
                .filter(|&(_, &v)| lo <= v && v <= hi)
                .map(|(j, _)| j)
                .collect(),
        )
    }
}

fn check_length(x: &[f64], series: usize, got: usize) -> Result<(), WindowError> {
    if got == x.len() {
        Ok(())
    } else {
        Err(WindowError::LengthMismatch {
            series,
            expected: x.len(),
            got,
        })
    }
}

/// Windowed means of every row at every timestamp, returned row-major.
fn windowed_means(x: &[f64], rows: &[&[f64]], window: TimeWindowSpec) -> Vec<Vec<f64>> {
    let sorted = x.windows(2).all(|w| w[0] <= w[1]);
    debug!(sorted, "timestamp axis scanned");

    let before = window.before();
    let after = window.resolved_after();

    // column-major: one entry per timestamp, holding one mean per row
    let columns: Vec<Vec<f64>> = x
        .par_iter()
        .map(|&t| -> Vec<f64> {
            match window_members(x, sorted, t - before, t + after) {
                Members::Run(range) => rows
                    .iter()
                    .map(|row| nan_mean(row[range.clone()].iter().copied()))
                    .collect(),
                Members::Scattered(indices) => rows
                    .iter()
                    .map(|row| nan_mean(indices.iter().map(|&j| row[j])))
                    .collect(),
            }
        })
        .collect();

    (0..rows.len())
        .map(|k| columns.iter().map(|col| col[k]).collect::<Vec<f64>>())
        .collect()
}

/// Compute the time-windowed moving average of one series sampled at the
/// timestamps `x`.
///
/// The axis does not need to be uniform nor sorted. NaN samples are skipped
/// and a window with no valid sample yields NaN. Runs in O(n²) in the worst
/// case; a non-decreasing axis is detected and its windows located by binary
/// search. For constant-rate sampling prefer
/// [`moving_average_by_time`](crate::moving_average_by_time).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`WindowError::LengthMismatch`] | `y.len() != x.len()` |
#[instrument(skip(x, y), fields(n = x.len()))]
pub fn moving_average_variable_rate(
    x: &[f64],
    y: &[f64],
    window: TimeWindowSpec,
) -> Result<Vec<f64>, WindowError> {
    check_length(x, 0, y.len())?;
    let mut rows = windowed_means(x, &[y], window);
    Ok(rows.pop().unwrap_or_default())
}

/// Compute the time-windowed moving average of every series in `batch`,
/// all sampled at the timestamps `x`.
///
/// Same semantics as [`moving_average_variable_rate`]; each window is located
/// once and reused for all series.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`WindowError::LengthMismatch`] | The series length differs from `x.len()` |
#[instrument(skip(x, batch), fields(n = x.len(), n_series = batch.n_series()))]
pub fn moving_average_variable_rate_batch(
    x: &[f64],
    batch: &MultiSeries,
    window: TimeWindowSpec,
) -> Result<MultiSeries, WindowError> {
    for (k, row) in batch.rows().enumerate() {
        check_length(x, k, row.len())?;
    }
    let rows: Vec<&[f64]> = batch.rows().collect();
    Ok(MultiSeries::from_rows_unchecked(windowed_means(x, &rows, window)))
}
