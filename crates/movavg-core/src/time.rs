//! Time-domain windows over series sampled at a constant rate.

use tracing::{debug, instrument};

use crate::average::moving_average;
use crate::error::WindowError;
use crate::window::TimeWindowSpec;

/// Compute the moving average of `y`, sampled at constant frequency `freq`,
/// over a window given in time units.
///
/// Each side of the window becomes `floor(duration * freq)` samples; the
/// result is then computed by [`moving_average`]. For irregular sampling use
/// [`moving_average_variable_rate`](crate::moving_average_variable_rate).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`WindowError::NonPositiveFrequency`] | `freq <= 0`, NaN or infinite |
#[instrument(skip(y), fields(n = y.len()))]
pub fn moving_average_by_time(
    y: &[f64],
    freq: f64,
    window: TimeWindowSpec,
) -> Result<Vec<f64>, WindowError> {
    let samples = window.to_samples(freq)?;
    debug!(
        before = samples.before(),
        after = samples.after(),
        "time window translated to samples"
    );
    Ok(moving_average(y, samples))
}
