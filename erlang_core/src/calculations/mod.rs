//! # Teletraffic Calculations
//!
//! The Erlang-B engine and the solvers built on it:
//!
//! - [`blocking`] - Blocking probability B(A, N)
//! - [`channels`] - Minimum channel count for a target blocking
//! - [`traffic`] - Maximum offered traffic for a target blocking
//! - [`population`] - Offered traffic from subscriber population
//!
//! A [`Scenario`] names the unknown quantity and carries the known inputs.
//! [`solve`] dispatches it to the matching solver and samples a curve
//! around the answer:
//!
//! ```rust
//! use erlang_core::calculations::{solve, Outcome, Scenario};
//!
//! let scenario = Scenario::ChannelsUnknown { traffic: 10.0, target_blocking_percent: 2.0 };
//! let result = solve(&scenario).unwrap();
//! assert_eq!(result.outcome, Outcome::Channels(17));
//! assert!(result.curve.target_point().is_some());
//! ```
//!
//! Scenarios are JSON-friendly and accept the legacy form field names:
//!
//! ```rust
//! use erlang_core::calculations::Scenario;
//!
//! let json = r#"{ "calculation_type": "traffic", "available_channels": 20, "target_blocking": 1.0 }"#;
//! let scenario = Scenario::from_json(json).unwrap();
//! assert_eq!(scenario, Scenario::TrafficUnknown { channels: 20, target_blocking_percent: 1.0 });
//! ```

pub mod blocking;
pub mod channels;
pub mod population;
pub mod traffic;

use serde::{Deserialize, Serialize};

use crate::curves::{self, Curve};
use crate::errors::{require_finite, require_target_percent, CalcError, CalcResult};
use crate::settings::SolverSettings;
use crate::units::{Erlangs, Percent, Probability};

/// A solver answer together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution<T> {
    /// The solved quantity
    pub value: T,
    /// True when an iteration or channel cap stopped the search early
    pub approximate: bool,
    /// Blocking evaluations (forward search) or bisection steps performed
    pub iterations: u32,
}

impl<T> Solution<T> {
    pub(crate) fn exact(value: T, iterations: u32) -> Self {
        Solution {
            value,
            approximate: false,
            iterations,
        }
    }

    pub(crate) fn approximate(value: T, iterations: u32) -> Self {
        Solution {
            value,
            approximate: true,
            iterations,
        }
    }
}

/// A teletraffic question, tagged by the unknown quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation_type")]
pub enum Scenario {
    /// Size a trunk group: how many channels for this load and grade of service?
    #[serde(rename = "channels")]
    ChannelsUnknown {
        #[serde(alias = "traffic_intensity")]
        traffic: f64,
        #[serde(alias = "blocking_prob")]
        target_blocking_percent: f64,
    },

    /// Grade of service of an existing trunk group
    #[serde(rename = "blocking")]
    BlockingUnknown {
        #[serde(alias = "num_channels")]
        channels: u32,
        #[serde(alias = "traffic_load")]
        traffic: f64,
    },

    /// Capacity of an existing trunk group at a target grade of service
    #[serde(rename = "traffic")]
    TrafficUnknown {
        #[serde(alias = "available_channels")]
        channels: u32,
        #[serde(alias = "target_blocking")]
        target_blocking_percent: f64,
    },

    /// Offered traffic generated by a subscriber population
    #[serde(rename = "population")]
    PopulationDerived {
        population: u64,
        #[serde(alias = "call_rate")]
        call_rate_per_hour: f64,
        #[serde(alias = "avg_duration")]
        avg_duration_minutes: f64,
    },
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short name of the unknown quantity.
    pub fn kind(&self) -> &'static str {
        match self {
            Scenario::ChannelsUnknown { .. } => "channels",
            Scenario::BlockingUnknown { .. } => "blocking",
            Scenario::TrafficUnknown { .. } => "traffic",
            Scenario::PopulationDerived { .. } => "population",
        }
    }

    /// Check domain constraints on the known inputs.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            Scenario::ChannelsUnknown {
                traffic,
                target_blocking_percent,
            } => {
                require_finite("traffic", traffic)?;
                if traffic <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "traffic",
                        traffic.to_string(),
                        "Offered traffic must be positive",
                    ));
                }
                require_target_percent("target_blocking_percent", target_blocking_percent)
            }
            Scenario::BlockingUnknown { channels, traffic } => {
                require_channels(channels)?;
                require_finite("traffic", traffic)?;
                if traffic < 0.0 {
                    return Err(CalcError::invalid_input(
                        "traffic",
                        traffic.to_string(),
                        "Offered traffic cannot be negative",
                    ));
                }
                Ok(())
            }
            Scenario::TrafficUnknown {
                channels,
                target_blocking_percent,
            } => {
                require_channels(channels)?;
                require_target_percent("target_blocking_percent", target_blocking_percent)
            }
            Scenario::PopulationDerived {
                call_rate_per_hour,
                avg_duration_minutes,
                ..
            } => {
                for (field, value) in [
                    ("call_rate_per_hour", call_rate_per_hour),
                    ("avg_duration_minutes", avg_duration_minutes),
                ] {
                    require_finite(field, value)?;
                    if value < 0.0 {
                        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
                    }
                }
                Ok(())
            }
        }
    }
}

fn require_channels(channels: u32) -> CalcResult<()> {
    if channels == 0 {
        return Err(CalcError::invalid_input("channels", "0", "At least one channel is required"));
    }
    Ok(())
}

/// The solved quantity of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Channel count
    Channels(u32),
    /// Blocking probability as a percentage
    Blocking(Percent),
    /// Offered traffic
    Traffic(Erlangs),
}

impl Outcome {
    /// The outcome as a plain number.
    pub fn value(&self) -> f64 {
        match *self {
            Outcome::Channels(n) => n as f64,
            Outcome::Blocking(p) => p.0,
            Outcome::Traffic(a) => a.0,
        }
    }
}

/// Everything produced for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The scenario as solved
    pub scenario: Scenario,
    /// Solved quantity
    pub outcome: Outcome,
    /// True when a solver cap stopped the search early
    pub approximate: bool,
    /// Chart-ready samples around the answer
    pub curve: Curve,
}

/// Solve a scenario with default settings.
pub fn solve(scenario: &Scenario) -> CalcResult<SolverResult> {
    solve_with(scenario, &SolverSettings::default())
}

/// Solve a scenario and sample its curve.
///
/// # Errors
///
/// `CalcError::InvalidInput` for invalid settings or scenario inputs.
/// Non-convergence is reported through `approximate`, never as an error.
pub fn solve_with(scenario: &Scenario, settings: &SolverSettings) -> CalcResult<SolverResult> {
    settings.validate()?;
    scenario.validate()?;

    let (outcome, approximate) = match *scenario {
        Scenario::ChannelsUnknown {
            traffic,
            target_blocking_percent,
        } => {
            let solution = channels::min_channels_with(traffic, target_blocking_percent, settings)?;
            (Outcome::Channels(solution.value), solution.approximate)
        }
        Scenario::BlockingUnknown { channels, traffic } => {
            let p = Probability(blocking::blocking(traffic, channels));
            (Outcome::Blocking(p.into()), false)
        }
        Scenario::TrafficUnknown {
            channels,
            target_blocking_percent,
        } => {
            let solution = traffic::max_traffic_with(channels, target_blocking_percent, settings)?;
            (Outcome::Traffic(Erlangs(solution.value)), solution.approximate)
        }
        Scenario::PopulationDerived {
            population,
            call_rate_per_hour,
            avg_duration_minutes,
        } => {
            let traffic = population::traffic_from_population(population, call_rate_per_hour, avg_duration_minutes)?;
            (Outcome::Traffic(traffic), false)
        }
    };

    if approximate {
        tracing::warn!(kind = scenario.kind(), value = outcome.value(), "returning approximate result");
    }

    let curve = curves::sample(scenario, &outcome, &settings.sampling);
    tracing::debug!(kind = scenario.kind(), points = curve.len(), "sampled curve");

    Ok(SolverResult {
        scenario: *scenario,
        outcome,
        approximate,
        curve,
    })
}

/// Chart data for a scenario with default settings.
pub fn sample_curve(scenario: &Scenario) -> CalcResult<Curve> {
    solve(scenario).map(|result| result.curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_each_kind() {
        let result = solve(&Scenario::ChannelsUnknown {
            traffic: 10.0,
            target_blocking_percent: 2.0,
        })
        .unwrap();
        assert_eq!(result.outcome, Outcome::Channels(17));
        assert!(!result.approximate);

        let result = solve(&Scenario::BlockingUnknown {
            channels: 17,
            traffic: 10.0,
        })
        .unwrap();
        assert!((result.outcome.value() - 1.2949).abs() < 1e-3);

        let result = solve(&Scenario::TrafficUnknown {
            channels: 20,
            target_blocking_percent: 1.0,
        })
        .unwrap();
        assert!((result.outcome.value() - 12.03).abs() < 0.01);

        let result = solve(&Scenario::PopulationDerived {
            population: 10_000,
            call_rate_per_hour: 2.0,
            avg_duration_minutes: 3.0,
        })
        .unwrap();
        assert_eq!(result.outcome, Outcome::Traffic(Erlangs(1000.0)));
    }

    #[test]
    fn test_legacy_field_names() {
        let scenario = Scenario::from_json(
            r#"{ "calculation_type": "channels", "traffic_intensity": 10, "blocking_prob": 2 }"#,
        )
        .unwrap();
        assert_eq!(
            scenario,
            Scenario::ChannelsUnknown {
                traffic: 10.0,
                target_blocking_percent: 2.0
            }
        );

        let scenario =
            Scenario::from_json(r#"{ "calculation_type": "blocking", "num_channels": 5, "traffic_load": 2.5 }"#)
                .unwrap();
        assert_eq!(scenario.kind(), "blocking");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let err = Scenario::from_json(r#"{ "calculation_type": "traffic", "channels": 20 }"#).unwrap_err();
        assert_eq!(err, CalcError::missing_field("target_blocking_percent"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Scenario::from_json(r#"{ "calculation_type": "queueing" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_domain_error_before_solving() {
        let err = solve(&Scenario::TrafficUnknown {
            channels: 0,
            target_blocking_percent: 1.0,
        })
        .unwrap_err();
        assert!(err.is_domain_error());

        let err = solve(&Scenario::ChannelsUnknown {
            traffic: 10.0,
            target_blocking_percent: 0.0,
        })
        .unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_approximate_flag_propagates() {
        let settings = SolverSettings {
            max_channels: 5,
            ..SolverSettings::default()
        };
        let scenario = Scenario::ChannelsUnknown {
            traffic: 50.0,
            target_blocking_percent: 1.0,
        };
        let result = solve_with(&scenario, &settings).unwrap();
        assert!(result.approximate);
        assert_eq!(result.outcome, Outcome::Channels(5));
        assert!(!result.curve.is_empty());
    }

    #[test]
    fn test_result_serialization() {
        let result = solve(&Scenario::BlockingUnknown {
            channels: 10,
            traffic: 5.0,
        })
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_type\":\"blocking\""));
        assert!(json.contains("\"kind\":\"blocking\""));
        let roundtrip: SolverResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.outcome, result.outcome);
    }
}
