//! # Channel Count Solver
//!
//! Finds the smallest number of channels whose Erlang-B blocking does not
//! exceed a target grade of service.
//!
//! Blocking is non-increasing in `N`, so a forward search from `N = 1`
//! stops at the minimum. The search walks a [`ChannelSweep`], which keeps
//! the log-domain sum incrementally instead of re-evaluating every term.
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::calculations::channels::min_channels;
//!
//! // 10 Erlangs at a 2% grade of service
//! let solution = min_channels(10.0, 2.0).unwrap();
//! assert_eq!(solution.value, 17);
//! assert!(!solution.approximate);
//! ```

use crate::calculations::blocking::ChannelSweep;
use crate::calculations::Solution;
use crate::errors::{require_finite, require_target_percent, CalcError, CalcResult};
use crate::settings::SolverSettings;

/// Minimum channel count with default settings.
///
/// # Arguments
///
/// * `traffic` - Offered traffic in Erlangs (must be positive)
/// * `target_blocking_percent` - Grade of service in (0, 100]
pub fn min_channels(traffic: f64, target_blocking_percent: f64) -> CalcResult<Solution<u32>> {
    min_channels_with(traffic, target_blocking_percent, &SolverSettings::default())
}

/// Minimum channel count, bounded by `settings.max_channels`.
///
/// Reaching the cap without meeting the target returns the cap itself,
/// flagged `approximate`.
pub fn min_channels_with(
    traffic: f64,
    target_blocking_percent: f64,
    settings: &SolverSettings,
) -> CalcResult<Solution<u32>> {
    require_finite("traffic", traffic)?;
    if traffic <= 0.0 {
        return Err(CalcError::invalid_input(
            "traffic",
            traffic.to_string(),
            "Offered traffic must be positive to size a trunk group",
        ));
    }
    require_target_percent("target_blocking_percent", target_blocking_percent)?;

    let target = target_blocking_percent / 100.0;
    let cap = settings.max_channels;

    let found = ChannelSweep::new(traffic)
        .skip(1)
        .take_while(|&(n, _)| n <= cap)
        .find(|&(_, b)| b <= target);

    match found {
        Some((channels, b)) => {
            tracing::debug!(
                traffic,
                target_blocking_percent,
                channels,
                blocking_percent = b * 100.0,
                "solved minimum channel count"
            );
            Ok(Solution::exact(channels, channels))
        }
        None => {
            tracing::warn!(
                traffic,
                target_blocking_percent,
                max_channels = cap,
                "channel search hit its cap; returning the cap as an estimate"
            );
            Ok(Solution::approximate(cap, cap))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::blocking::blocking;

    #[test]
    fn test_textbook_values() {
        assert_eq!(min_channels(10.0, 2.0).unwrap().value, 17);
        assert_eq!(min_channels(100.0, 1.0).unwrap().value, 117);
        assert_eq!(min_channels(1000.0, 1.0).unwrap().value, 1029);
    }

    #[test]
    fn test_minimality() {
        for &(a, p) in &[(2.5, 5.0), (10.0, 2.0), (42.0, 0.5), (300.0, 10.0)] {
            let n = min_channels(a, p).unwrap().value;
            assert!(blocking(a, n) * 100.0 <= p, "A={} p={} N={}", a, p, n);
            assert!(blocking(a, n - 1) * 100.0 > p, "A={} p={} N-1={}", a, p, n - 1);
        }
    }

    #[test]
    fn test_full_blocking_target_needs_one_channel() {
        let solution = min_channels(50.0, 100.0).unwrap();
        assert_eq!(solution.value, 1);
    }

    #[test]
    fn test_cap_yields_approximate() {
        let settings = SolverSettings {
            max_channels: 20,
            ..SolverSettings::default()
        };
        let solution = min_channels_with(100.0, 1.0, &settings).unwrap();
        assert!(solution.approximate);
        assert_eq!(solution.value, 20);
    }

    #[test]
    fn test_domain_errors() {
        assert!(min_channels(0.0, 2.0).is_err());
        assert!(min_channels(-1.0, 2.0).is_err());
        assert!(min_channels(10.0, 0.0).is_err());
        assert!(min_channels(10.0, 101.0).is_err());
        assert!(min_channels(f64::NAN, 2.0).is_err());
    }
}
