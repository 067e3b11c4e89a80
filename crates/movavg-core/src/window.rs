//! Window types: sample-count windows and time-duration windows.

use std::ops::RangeInclusive;

use crate::error::WindowError;

/// Resolved sample-domain window: how many samples before and after the
/// current index take part in its average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowSpec {
    before: usize,
    after: usize,
}

/// Resolve a window request. An absent `after` yields a symmetric window.
#[must_use]
pub fn resolve_window(before: usize, after: Option<usize>) -> WindowSpec {
    WindowSpec {
        before,
        after: after.unwrap_or(before),
    }
}

impl WindowSpec {
    /// Create a window with explicit `before` and `after` sample counts.
    #[must_use]
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Create a window spanning `half_width` samples on each side.
    #[must_use]
    pub fn symmetric(half_width: usize) -> Self {
        Self::new(half_width, half_width)
    }

    /// Resolve a window from signed counts, where `after == -1` means
    /// "same as `before`".
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::InvalidWindow`] | `before < 0`, or `after` is neither `-1` nor `>= 0` |
    pub fn from_signed(before: i64, after: i64) -> Result<Self, WindowError> {
        let invalid = WindowError::InvalidWindow { before, after };
        let before_count = usize::try_from(before).map_err(|_| invalid.clone())?;
        let after_count = match after {
            -1 => None,
            a => Some(usize::try_from(a).map_err(|_| invalid)?),
        };
        Ok(resolve_window(before_count, after_count))
    }

    /// Samples before the current index.
    #[must_use]
    pub fn before(&self) -> usize {
        self.before
    }

    /// Samples after the current index.
    #[must_use]
    pub fn after(&self) -> usize {
        self.after
    }

    /// Total window width, `before + after + 1`, saturating at `usize::MAX`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.before.saturating_add(self.after).saturating_add(1)
    }

    /// Return true if the window has as many samples after as before.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.before == self.after
    }

    /// Realignment that turns a centered window of width [`size`][Self::size]
    /// into this window: `ceil((after - before) / 2)`.
    ///
    /// Positive values move the centered result left, negative values right.
    #[must_use]
    pub fn shift(&self) -> isize {
        let d = self.after as i128 - self.before as i128;
        // only d = usize::MAX exceeds isize::MAX after halving
        (d + 1).div_euclid(2).clamp(isize::MIN as i128, isize::MAX as i128) as isize
    }

    /// Return the window of index `i` clipped to a series of length `n`.
    ///
    /// `n` must be non-zero and `i < n`.
    #[must_use]
    pub fn clipped_range(&self, i: usize, n: usize) -> RangeInclusive<usize> {
        let lo = i.saturating_sub(self.before);
        let hi = i.saturating_add(self.after).min(n - 1);
        lo..=hi
    }
}

/// Time-domain window: durations before and after the current timestamp,
/// in timestamp units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindowSpec {
    before: f64,
    after: Option<f64>,
}

impl TimeWindowSpec {
    /// Create a time window. An absent `after` makes the window symmetric.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::InvalidDuration`] | A duration is negative, NaN or infinite |
    pub fn new(before: f64, after: Option<f64>) -> Result<Self, WindowError> {
        check_duration("before", before)?;
        if let Some(a) = after {
            check_duration("after", a)?;
        }
        Ok(Self { before, after })
    }

    /// Create a window spanning `duration` on each side of the current timestamp.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::InvalidDuration`] | `duration` is negative, NaN or infinite |
    pub fn symmetric(duration: f64) -> Result<Self, WindowError> {
        Self::new(duration, None)
    }

    /// Duration before the current timestamp.
    #[must_use]
    pub fn before(&self) -> f64 {
        self.before
    }

    /// Duration after the current timestamp, as requested.
    #[must_use]
    pub fn after(&self) -> Option<f64> {
        self.after
    }

    /// Duration after the current timestamp, falling back to `before`.
    #[must_use]
    pub fn resolved_after(&self) -> f64 {
        self.after.unwrap_or(self.before)
    }

    /// Translate to a sample-count window for a constant sampling frequency.
    ///
    /// Each side becomes `floor(duration * freq)` samples. An absent `after`
    /// stays absent until resolution, so the result is symmetric. A count too
    /// large for `usize` saturates to `usize::MAX`, which averages over the
    /// whole series on that side.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WindowError::NonPositiveFrequency`] | `freq <= 0`, NaN or infinite |
    pub fn to_samples(&self, freq: f64) -> Result<WindowSpec, WindowError> {
        if !(freq.is_finite() && freq > 0.0) {
            return Err(WindowError::NonPositiveFrequency { freq });
        }
        let to_count = |duration: f64| (duration * freq).floor() as usize;
        Ok(resolve_window(to_count(self.before), self.after.map(to_count)))
    }
}

fn check_duration(side: &'static str, value: f64) -> Result<(), WindowError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidDuration { side, value })
    }
}
