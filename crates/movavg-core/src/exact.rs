//! Exact windowed mean: clipped windows, missing samples excluded.

use tracing::instrument;

use crate::window::WindowSpec;

/// Mean of the non-NaN values, or NaN when there are none.
pub(crate) fn nan_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Exact mean of the window of index `i`, clipped to the series bounds.
pub(crate) fn clipped_mean(y: &[f64], window: WindowSpec, i: usize) -> f64 {
    nan_mean(y[window.clipped_range(i, y.len())].iter().copied())
}

/// Compute the moving average of `y` by direct summation at every index.
///
/// The window of index `i` is `y[max(i - before, 0) ..= min(i + after, n - 1)]`;
/// NaN samples inside it are skipped and an all-NaN window yields NaN.
/// Runs in O(n * size) time. Correct for any input, including series with
/// missing values.
#[must_use]
#[instrument(skip(y), fields(n = y.len()))]
pub fn exact_mean(y: &[f64], window: WindowSpec) -> Vec<f64> {
    (0..y.len()).map(|i| clipped_mean(y, window, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_scenario() {
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = exact_mean(&y, WindowSpec::new(1, 0));
        assert_eq!(out, vec![1.0, 1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn missing_values_are_excluded() {
        let y = [1.0, f64::NAN, 3.0];
        let out = exact_mean(&y, WindowSpec::symmetric(1));
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn all_missing_window_is_missing() {
        let y = [f64::NAN, f64::NAN, 4.0];
        let out = exact_mean(&y, WindowSpec::new(1, 0));
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 4.0);
    }

    #[test]
    fn zero_window_is_identity() {
        let y = [3.0, f64::NAN, -1.5, 8.0];
        let out = exact_mean(&y, WindowSpec::new(0, 0));
        assert_eq!(out[0], 3.0);
        assert!(out[1].is_nan());
        assert_eq!(out[2], -1.5);
        assert_eq!(out[3], 8.0);
    }

    #[test]
    fn window_wider_than_series_is_global_mean() {
        let y = [1.0, 2.0, 3.0, 6.0];
        let out = exact_mean(&y, WindowSpec::symmetric(10));
        assert!(out.iter().all(|&v| (v - 3.0).abs() < 1e-12), "got {out:?}");
    }

    #[test]
    fn empty_series() {
        assert!(exact_mean(&[], WindowSpec::symmetric(2)).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let y = vec![1.0, 5.0, 9.0];
        let before = y.clone();
        let _ = exact_mean(&y, WindowSpec::symmetric(1));
        assert_eq!(y, before);
    }
}
