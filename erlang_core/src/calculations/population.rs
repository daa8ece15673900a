//! # Population Traffic Estimate
//!
//! Converts a subscriber population into offered traffic:
//!
//! ```text
//! A = population × calls per hour × minutes per call / 60
//! ```
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::calculations::population::traffic_from_population;
//!
//! let traffic = traffic_from_population(10_000, 2.0, 3.0).unwrap();
//! assert_eq!(traffic.0, 1000.0);
//! ```

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::Erlangs;

/// Offered traffic generated by `population` subscribers.
///
/// # Arguments
///
/// * `population` - Number of subscribers
/// * `call_rate_per_hour` - Calls per subscriber per hour
/// * `avg_duration_minutes` - Mean call holding time in minutes
pub fn traffic_from_population(
    population: u64,
    call_rate_per_hour: f64,
    avg_duration_minutes: f64,
) -> CalcResult<Erlangs> {
    require_non_negative("call_rate_per_hour", call_rate_per_hour)?;
    require_non_negative("avg_duration_minutes", avg_duration_minutes)?;
    Ok(Erlangs(offered_traffic(population, call_rate_per_hour, avg_duration_minutes)))
}

/// Unchecked form used by the population sweep once inputs are validated.
pub(crate) fn offered_traffic(population: u64, call_rate_per_hour: f64, avg_duration_minutes: f64) -> f64 {
    population as f64 * call_rate_per_hour * avg_duration_minutes / 60.0
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_conversion() {
        assert_eq!(traffic_from_population(10_000, 2.0, 3.0).unwrap(), Erlangs(1000.0));
    }

    #[test]
    fn test_one_busy_hour_call() {
        // A single 60-minute call per hour is one Erlang
        assert_eq!(traffic_from_population(1, 1.0, 60.0).unwrap(), Erlangs(1.0));
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(traffic_from_population(0, 2.0, 3.0).unwrap(), Erlangs(0.0));
        assert_eq!(traffic_from_population(500, 0.0, 3.0).unwrap(), Erlangs(0.0));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = traffic_from_population(100, -1.0, 3.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(traffic_from_population(100, 1.0, f64::INFINITY).is_err());
    }
}
