//! # Curve Sampling
//!
//! Turns a solved scenario into chart-ready point sequences.
//!
//! - [`channel_sweep`] - blocking vs. channel count, uniform dynamic step
//! - [`traffic_sweep`] - blocking vs. offered traffic, dense near the answer
//! - [`population_sweep`] - offered traffic vs. population
//!
//! Every blocking curve is strictly ascending in its swept variable, free of
//! duplicates at two decimals, and holds at most one point flagged
//! `is_target`. Sampling consumes the solver's answer as given (including
//! approximate answers) and never calls back into a solver.

pub mod channel_sweep;
pub mod population_sweep;
pub mod traffic_sweep;

use serde::{Deserialize, Serialize};

use crate::calculations::{Outcome, Scenario};
use crate::settings::SamplingSettings;
use crate::units::round_to;

/// Decimals kept on swept traffic values
pub const SWEPT_DECIMALS: i32 = 2;

/// Decimals kept on blocking percentages
pub const BLOCKING_DECIMALS: i32 = 4;

/// One sample of a blocking curve.
///
/// ## JSON Example
///
/// ```json
/// { "x": 12.03, "blocking_rate": 1.0, "is_target": true, "target_blocking": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Swept variable: channel count or offered traffic (Erlangs)
    pub x: f64,

    /// Blocking probability in percent
    pub blocking_rate: f64,

    /// Marks the operating point of the scenario
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_target: bool,

    /// Blocking value attached to the operating point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_blocking: Option<f64>,
}

impl CurvePoint {
    /// Plain sample, rounded for presentation.
    pub fn new(x: f64, blocking_probability: f64) -> Self {
        CurvePoint {
            x,
            blocking_rate: round_to(blocking_probability * 100.0, BLOCKING_DECIMALS),
            is_target: false,
            target_blocking: None,
        }
    }
}

/// One sample of the population curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationPoint {
    /// Number of subscribers
    pub population: u64,
    /// Offered traffic in Erlangs
    pub traffic: f64,
}

/// Sampled curve, tagged by its swept variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "axis", content = "points", rename_all = "snake_case")]
pub enum Curve {
    /// Blocking vs. channel count
    Channels(Vec<CurvePoint>),
    /// Blocking vs. offered traffic
    Traffic(Vec<CurvePoint>),
    /// Offered traffic vs. population
    Population(Vec<PopulationPoint>),
}

impl Curve {
    /// Number of points.
    pub fn len(&self) -> usize {
        match self {
            Curve::Channels(points) | Curve::Traffic(points) => points.len(),
            Curve::Population(points) => points.len(),
        }
    }

    /// True if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Blocking samples, if this is a blocking curve.
    pub fn blocking_points(&self) -> Option<&[CurvePoint]> {
        match self {
            Curve::Channels(points) | Curve::Traffic(points) => Some(points),
            Curve::Population(_) => None,
        }
    }

    /// The flagged operating point, if any.
    pub fn target_point(&self) -> Option<&CurvePoint> {
        self.blocking_points()?.iter().find(|p| p.is_target)
    }
}

/// Sample the curve for a solved scenario.
///
/// `outcome` is the answer [`crate::calculations::solve`] produced for
/// `scenario`; it is used as given, approximate or not.
pub fn sample(scenario: &Scenario, outcome: &Outcome, settings: &SamplingSettings) -> Curve {
    match *scenario {
        Scenario::ChannelsUnknown {
            traffic,
            target_blocking_percent,
        } => {
            let solved = outcome.value().round().max(1.0) as u32;
            Curve::Channels(channel_sweep::sample(traffic, solved, target_blocking_percent, settings))
        }
        Scenario::BlockingUnknown { channels, traffic } => {
            Curve::Channels(channel_sweep::sample(traffic, channels, outcome.value(), settings))
        }
        Scenario::TrafficUnknown {
            channels,
            target_blocking_percent,
        } => Curve::Traffic(traffic_sweep::sample(
            channels,
            outcome.value(),
            target_blocking_percent,
            settings,
        )),
        Scenario::PopulationDerived {
            population,
            call_rate_per_hour,
            avg_duration_minutes,
        } => Curve::Population(population_sweep::sample(
            population,
            call_rate_per_hour,
            avg_duration_minutes,
            settings,
        )),
    }
}

/// Sort ascending, keep the first point per rounded `x`, drop blocking above 100%.
pub(crate) fn normalize(mut points: Vec<CurvePoint>) -> Vec<CurvePoint> {
    for point in &mut points {
        point.x = round_to(point.x, SWEPT_DECIMALS);
    }
    points.retain(|p| p.x.is_finite() && p.blocking_rate <= 100.0);
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points.dedup_by(|later, earlier| later.x == earlier.x);
    points
}

/// Flag the point at `x` as the operating point, inserting it if missing.
///
/// Any previous flag is cleared so at most one point carries it.
pub(crate) fn mark_target(points: &mut Vec<CurvePoint>, x: f64, blocking_probability: f64, target_blocking: f64) {
    let x = round_to(x, SWEPT_DECIMALS);
    for point in points.iter_mut() {
        point.is_target = false;
        point.target_blocking = None;
    }

    match points.binary_search_by(|p| p.x.total_cmp(&x)) {
        Ok(index) => {
            points[index].is_target = true;
            points[index].target_blocking = Some(target_blocking);
        }
        Err(index) => {
            let mut point = CurvePoint::new(x, blocking_probability);
            point.is_target = true;
            point.target_blocking = Some(target_blocking);
            points.insert(index, point);
        }
    }
}

/// Evaluate `f` at every `x`, in order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate<F>(xs: &[f64], f: F) -> Vec<CurvePoint>
where
    F: Fn(f64) -> CurvePoint + Send + Sync,
{
    xs.iter().map(|&x| f(x)).collect()
}

/// Evaluate `f` at every `x` on the rayon pool, preserving order.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate<F>(xs: &[f64], f: F) -> Vec<CurvePoint>
where
    F: Fn(f64) -> CurvePoint + Send + Sync,
{
    use rayon::prelude::*;
    xs.par_iter().map(|&x| f(x)).collect()
}
