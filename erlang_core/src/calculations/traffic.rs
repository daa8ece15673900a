//! # Traffic Capacity Solver
//!
//! Finds the offered traffic a fixed trunk group can carry at a target
//! grade of service, by bisection on `A`.
//!
//! Blocking is non-decreasing in `A`, so the bracket `[0, N·k]` (with `k`
//! the configured bracket multiplier) always keeps the root on the side
//! the midpoint test selects. Bisection stops when the blocking percentage
//! is within `traffic_precision_percent` of the target, or at the iteration
//! cap, in which case the last midpoint is returned as an approximate
//! answer.
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::calculations::traffic::max_traffic;
//! use erlang_core::calculations::blocking::blocking;
//!
//! let solution = max_traffic(20, 1.0).unwrap();
//! assert!((solution.value - 12.03).abs() < 0.01);
//! assert!((blocking(solution.value, 20) * 100.0 - 1.0).abs() < 0.01);
//! ```

use crate::calculations::blocking::blocking;
use crate::calculations::Solution;
use crate::errors::{require_target_percent, CalcError, CalcResult};
use crate::settings::SolverSettings;

/// Maximum offered traffic with default settings.
pub fn max_traffic(channels: u32, target_blocking_percent: f64) -> CalcResult<Solution<f64>> {
    max_traffic_with(channels, target_blocking_percent, &SolverSettings::default())
}

/// Maximum offered traffic for `channels` trunks at `target_blocking_percent`.
///
/// # Errors
///
/// `CalcError::InvalidInput` when `channels` is zero or the target is
/// outside (0, 100]. Nothing is computed in that case.
pub fn max_traffic_with(
    channels: u32,
    target_blocking_percent: f64,
    settings: &SolverSettings,
) -> CalcResult<Solution<f64>> {
    if channels == 0 {
        return Err(CalcError::invalid_input("channels", "0", "At least one channel is required"));
    }
    require_target_percent("target_blocking_percent", target_blocking_percent)?;

    let precision = settings.traffic_precision_percent;
    let mut low = 0.0_f64;
    let mut high = channels as f64 * settings.traffic_bracket_multiplier;
    let mut mid = (low + high) / 2.0;

    for iteration in 1..=settings.traffic_max_iterations {
        mid = (low + high) / 2.0;
        let error = blocking(mid, channels) * 100.0 - target_blocking_percent;

        if error.abs() < precision {
            tracing::debug!(
                channels,
                target_blocking_percent,
                traffic = mid,
                iterations = iteration,
                "solved traffic capacity"
            );
            return Ok(Solution::exact(mid, iteration));
        }

        if error < 0.0 {
            low = mid;
        } else {
            high = mid;
        }

        // The interval can no longer shrink in f64
        if high - low <= f64::EPSILON * high.max(1.0) {
            tracing::warn!(
                channels,
                target_blocking_percent,
                traffic = mid,
                iterations = iteration,
                "bisection bracket collapsed before reaching precision"
            );
            return Ok(Solution::approximate(mid, iteration));
        }
    }

    tracing::warn!(
        channels,
        target_blocking_percent,
        traffic = mid,
        max_iterations = settings.traffic_max_iterations,
        "bisection hit its iteration cap; returning last midpoint"
    );
    Ok(Solution::approximate(mid, settings.traffic_max_iterations))
}
