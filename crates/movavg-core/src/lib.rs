//! Sliding-window moving averages over sampled signals.
//!
//! Pure math library, zero I/O. Provides asymmetric sample-count windows with
//! an exact, missing-value-aware path and an O(n) running-sum path, time
//! windows over constant-rate series, and time windows over irregularly
//! sampled series sharing one timestamp axis.
//!
//! Missing samples are NaN. Inputs are borrowed and never modified; every
//! operation returns a freshly allocated result of the input's length.

mod average;
mod error;
mod exact;
mod fast;
mod series;
mod time;
mod variable;
mod window;

pub use average::{MovingAverage, Strategy, moving_average, moving_average_batch};
pub use error::WindowError;
pub use exact::exact_mean;
pub use fast::fast_mean;
pub use series::MultiSeries;
pub use time::moving_average_by_time;
pub use variable::{moving_average_variable_rate, moving_average_variable_rate_batch};
pub use window::{TimeWindowSpec, WindowSpec, resolve_window};
