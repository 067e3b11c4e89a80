//! Fast windowed mean: running-sum box filter with edge refix.
//!
//! The box filter produces a centered window of width `before + after + 1`
//! at every index in O(n), independent of the window width. Two corrections
//! turn it into the requested window:
//!
//! 1. Realignment. A centered window of width `size` spans
//!    `[i - size/2, i + size - 1 - size/2]`. Reading the filter output at
//!    `i + shift`, with `shift = ceil((after - before) / 2)`, spans exactly
//!    `[i - before, i + after]`.
//! 2. Edge refix. Near the edges the filter reads reflected samples, and the
//!    realignment leaves `|shift|` positions without a source. Every index
//!    `i < before + |shift|` or `i >= n - after - |shift|` is recomputed with
//!    the exact clipped mean; all other indices have a window lying fully
//!    inside the series and a valid source.

use tracing::{debug, instrument};

use crate::error::WindowError;
use crate::exact::clipped_mean;
use crate::window::WindowSpec;

/// Map a possibly out-of-range index onto the series by mirroring about its
/// edges (`d c b a | a b c d | d c b a`), repeating for any distance.
fn reflect_index(k: isize, n: usize) -> usize {
    let n = n as isize;
    let m = k.rem_euclid(2 * n);
    (if m < n { m } else { 2 * n - 1 - m }) as usize
}

/// Neumaier-compensated running sum.
///
/// Keeps the low-order bits lost by each addition in `compensation`, so a
/// large sample entering and later leaving the window does not wipe out the
/// small ones around it.
#[derive(Debug, Clone, Copy, Default)]
struct RunningSum {
    sum: f64,
    compensation: f64,
}

impl RunningSum {
    fn add(&mut self, v: f64) {
        let t = self.sum + v;
        if self.sum.abs() >= v.abs() {
            self.compensation += (self.sum - t) + v;
        } else {
            self.compensation += (v - t) + self.sum;
        }
        self.sum = t;
    }

    fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

/// Centered moving average of width `size` with reflected edges.
///
/// Maintains a running sum: each step adds the sample entering the window
/// and subtracts the one leaving it. `size` must be below `2 * y.len()`.
fn box_filter(y: &[f64], size: usize) -> Vec<f64> {
    let n = y.len();
    let left = (size / 2) as isize;
    let right = (size - 1) as isize - left;
    let at = |k: isize| y[reflect_index(k, n)];

    let mut sum = RunningSum::default();
    for k in -left..=right {
        sum.add(at(k));
    }
    let mut out = Vec::with_capacity(n);
    out.push(sum.value() / size as f64);
    for i in 1..n as isize {
        sum.add(at(i + right));
        sum.add(-at(i - 1 - left));
        out.push(sum.value() / size as f64);
    }
    out
}

/// Move `u` by `shift` positions into a new buffer: `out[i] = u[i + shift]`.
/// Positions with no source are NaN.
fn realign(u: &[f64], shift: isize) -> Vec<f64> {
    let n = u.len();
    let mut out = vec![f64::NAN; n];
    let s = shift.unsigned_abs().min(n);
    if shift >= 0 {
        out[..n - s].copy_from_slice(&u[s..]);
    } else {
        out[s..].copy_from_slice(&u[..n - s]);
    }
    out
}

/// Compute the moving average of a series without missing values in O(n).
///
/// Produces the same values as [`exact_mean`](crate::exact_mean), up to
/// floating-point rounding: interior positions come from a running-sum box
/// filter, edge positions are recomputed exactly.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`WindowError::MissingValue`] | `y` contains a NaN |
#[instrument(skip(y), fields(n = y.len()))]
pub fn fast_mean(y: &[f64], window: WindowSpec) -> Result<Vec<f64>, WindowError> {
    if let Some(index) = first_missing(y) {
        return Err(WindowError::MissingValue { index });
    }
    Ok(fast_mean_unchecked(y, window))
}

/// Position of the first NaN in `y`, if any.
pub(crate) fn first_missing(y: &[f64]) -> Option<usize> {
    y.iter().position(|v| v.is_nan())
}

/// [`fast_mean`] for a series already known to be free of NaN.
pub(crate) fn fast_mean_unchecked(y: &[f64], window: WindowSpec) -> Vec<f64> {
    let n = y.len();
    if n == 0 {
        return Vec::new();
    }
    // samples beyond the series never count, so clipping leaves every mean unchanged
    let window = WindowSpec::new(window.before().min(n - 1), window.after().min(n - 1));
    if window.size() == 1 {
        return y.to_vec();
    }

    let shift = window.shift();
    let mut out = realign(&box_filter(y, window.size()), shift);

    let reach = shift.unsigned_abs();
    let head_end = (window.before() + reach).min(n);
    let tail_start = n.saturating_sub(window.after() + reach).max(head_end);
    for i in (0..head_end).chain(tail_start..n) {
        out[i] = clipped_mean(y, window, i);
    }
    debug!(shift, head = head_end, tail = n - tail_start, "edges refixed");

    out
}
