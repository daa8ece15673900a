//! # Solver Settings
//!
//! Numeric tuning knobs for the solvers and curve sampler. Every field has
//! a default, so a partial settings file (or none at all) is valid.
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::settings::SolverSettings;
//!
//! let settings: SolverSettings = serde_json::from_str(r#"{ "max_channels": 5000 }"#).unwrap();
//! assert_eq!(settings.max_channels, 5000);
//! assert_eq!(settings.traffic_max_iterations, 1000);
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tolerance and iteration bounds for the inverse solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Bisection stops once |B(A, N)·100 − target| falls below this (percentage points)
    pub traffic_precision_percent: f64,

    /// Hard cap on bisection steps; the last midpoint is returned when reached
    pub traffic_max_iterations: u32,

    /// Upper bisection bound is `channels × traffic_bracket_multiplier`
    pub traffic_bracket_multiplier: f64,

    /// Forward channel search gives up (approximate result) at this count
    pub max_channels: u32,

    /// Curve sampling parameters
    pub sampling: SamplingSettings,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            traffic_precision_percent: 1e-4,
            traffic_max_iterations: 1000,
            traffic_bracket_multiplier: 10.0,
            max_channels: 100_000,
            sampling: SamplingSettings::default(),
        }
    }
}

impl SolverSettings {
    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.traffic_precision_percent > 0.0) {
            return Err(CalcError::invalid_input(
                "traffic_precision_percent",
                self.traffic_precision_percent.to_string(),
                "Precision must be positive",
            ));
        }
        if self.traffic_max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "traffic_max_iterations",
                "0",
                "At least one bisection step is required",
            ));
        }
        if !(self.traffic_bracket_multiplier >= 1.0) || !self.traffic_bracket_multiplier.is_finite() {
            return Err(CalcError::invalid_input(
                "traffic_bracket_multiplier",
                self.traffic_bracket_multiplier.to_string(),
                "Multiplier must be a finite value of at least 1",
            ));
        }
        if self.max_channels == 0 {
            return Err(CalcError::invalid_input("max_channels", "0", "Channel cap must be at least 1"));
        }
        self.sampling.validate()
    }
}

/// Curve sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Approximate number of points on a channel sweep
    pub target_points: u32,

    /// Channel sweeps never extend past this channel count
    pub channel_curve_cap: u32,

    /// Traffic sweeps cover `[0, traffic_range_factor × N]`
    pub traffic_range_factor: f64,

    /// Zone boundaries as fractions of the solved traffic (four breaks, five zones)
    pub traffic_zone_breaks: [f64; 4],

    /// Points generated in each of the five traffic zones
    pub traffic_zone_points: [u32; 5],

    /// Population sweep increment
    pub population_step: u64,

    /// Population sweep ends at `population_span_factor × population`
    pub population_span_factor: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings {
            target_points: 50,
            channel_curve_cap: 5000,
            traffic_range_factor: 3.0,
            traffic_zone_breaks: [0.5, 0.8, 1.2, 1.5],
            traffic_zone_points: [10, 12, 24, 12, 10],
            population_step: 1000,
            population_span_factor: 1.5,
        }
    }
}

impl SamplingSettings {
    /// Validate sampling parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.target_points < 2 {
            return Err(CalcError::invalid_input(
                "sampling.target_points",
                self.target_points.to_string(),
                "A curve needs at least two points",
            ));
        }
        if self.channel_curve_cap == 0 {
            return Err(CalcError::invalid_input("sampling.channel_curve_cap", "0", "Cap must be at least 1"));
        }
        if !(self.traffic_range_factor > 0.0) || !self.traffic_range_factor.is_finite() {
            return Err(CalcError::invalid_input(
                "sampling.traffic_range_factor",
                self.traffic_range_factor.to_string(),
                "Range factor must be a positive finite value",
            ));
        }
        let breaks = &self.traffic_zone_breaks;
        if breaks[0] <= 0.0 || breaks.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(CalcError::invalid_input(
                "sampling.traffic_zone_breaks",
                format!("{:?}", breaks),
                "Zone breaks must be positive and strictly increasing",
            ));
        }
        if self.traffic_zone_points.iter().any(|&n| n < 2) {
            return Err(CalcError::invalid_input(
                "sampling.traffic_zone_points",
                format!("{:?}", self.traffic_zone_points),
                "Each zone needs at least two points",
            ));
        }
        if self.population_step == 0 {
            return Err(CalcError::invalid_input("sampling.population_step", "0", "Step must be positive"));
        }
        if !(self.population_span_factor >= 1.0) || !self.population_span_factor.is_finite() {
            return Err(CalcError::invalid_input(
                "sampling.population_span_factor",
                self.population_span_factor.to_string(),
                "Span factor must be a finite value of at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SolverSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SolverSettings =
            serde_json::from_str(r#"{ "sampling": { "target_points": 80 } }"#).unwrap();
        assert_eq!(settings.sampling.target_points, 80);
        assert_eq!(settings.sampling.channel_curve_cap, 5000);
        assert_eq!(settings.max_channels, 100_000);
    }

    #[test]
    fn test_rejects_unordered_breaks() {
        let mut settings = SolverSettings::default();
        settings.sampling.traffic_zone_breaks = [0.5, 1.2, 0.8, 1.5];
        let err = settings.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_zero_precision() {
        let settings = SolverSettings {
            traffic_precision_percent: 0.0,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
