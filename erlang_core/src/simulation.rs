//! # Sensitivity Simulation
//!
//! Re-solves a scenario at five scaled versions of its main input to show
//! how the answer moves around the operating point.
//!
//! | Scenario   | Scaled input                                     |
//! |------------|--------------------------------------------------|
//! | channels   | offered traffic                                  |
//! | blocking   | channel count                                    |
//! | traffic    | channel count                                    |
//! | population | population, call rate and call duration together |
//!
//! Channel counts and populations are floored (at least 1) below the base
//! and ceiled above it. Variants are independent; with the `parallel`
//! feature they are solved on the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::calculations::Scenario;
//! use erlang_core::simulation::simulate;
//!
//! let report = simulate(&Scenario::ChannelsUnknown { traffic: 10.0, target_blocking_percent: 2.0 }).unwrap();
//! assert_eq!(report.variants.len(), 5);
//! assert_eq!(report.variants[2].result.outcome, report.base.outcome);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{solve_with, Scenario, SolverResult};
use crate::errors::CalcResult;
use crate::settings::SolverSettings;

/// Scale factors applied to the primary input
pub const SCALE_FACTORS: [f64; 5] = [0.5, 0.75, 1.0, 1.25, 1.5];

/// Call-rate factors paired with [`SCALE_FACTORS`] for population studies
pub const CALL_RATE_FACTORS: [f64; 5] = [0.75, 0.9, 1.0, 1.1, 1.25];

/// Call-duration factors paired with [`SCALE_FACTORS`] for population studies
pub const DURATION_FACTORS: [f64; 5] = [0.8, 0.9, 1.0, 1.1, 1.2];

/// One re-solved variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationVariant {
    /// Scale factor applied to the primary input
    pub factor: f64,
    /// Result for the scaled scenario (which it embeds)
    pub result: SolverResult,
}

/// Base result plus its scaled variants, in ascending factor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub base: SolverResult,
    pub variants: Vec<SimulationVariant>,
}

/// Run a sensitivity study with default settings.
pub fn simulate(scenario: &Scenario) -> CalcResult<SimulationReport> {
    simulate_with(scenario, &SolverSettings::default())
}

/// Run a sensitivity study.
///
/// # Errors
///
/// Fails if the base scenario (or any variant) is invalid.
pub fn simulate_with(scenario: &Scenario, settings: &SolverSettings) -> CalcResult<SimulationReport> {
    let base = solve_with(scenario, settings)?;

    let scaled: Vec<(f64, Scenario)> = (0..SCALE_FACTORS.len())
        .map(|i| (SCALE_FACTORS[i], scale(scenario, i)))
        .collect();

    let variants = solve_variants(&scaled, settings)?;
    tracing::debug!(kind = scenario.kind(), variants = variants.len(), "simulation complete");

    Ok(SimulationReport { base, variants })
}

#[cfg(not(feature = "parallel"))]
fn solve_variants(scaled: &[(f64, Scenario)], settings: &SolverSettings) -> CalcResult<Vec<SimulationVariant>> {
    scaled
        .iter()
        .map(|&(factor, scenario)| {
            solve_with(&scenario, settings).map(|result| SimulationVariant { factor, result })
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn solve_variants(scaled: &[(f64, Scenario)], settings: &SolverSettings) -> CalcResult<Vec<SimulationVariant>> {
    use rayon::prelude::*;
    scaled
        .par_iter()
        .map(|&(factor, scenario)| {
            solve_with(&scenario, settings).map(|result| SimulationVariant { factor, result })
        })
        .collect()
}

/// Scenario for the `index`-th scale factor.
fn scale(scenario: &Scenario, index: usize) -> Scenario {
    let factor = SCALE_FACTORS[index];
    match *scenario {
        Scenario::ChannelsUnknown {
            traffic,
            target_blocking_percent,
        } => Scenario::ChannelsUnknown {
            traffic: traffic * factor,
            target_blocking_percent,
        },
        Scenario::BlockingUnknown { channels, traffic } => Scenario::BlockingUnknown {
            channels: scale_count(u64::from(channels), factor).min(u64::from(u32::MAX)) as u32,
            traffic,
        },
        Scenario::TrafficUnknown {
            channels,
            target_blocking_percent,
        } => Scenario::TrafficUnknown {
            channels: scale_count(u64::from(channels), factor).min(u64::from(u32::MAX)) as u32,
            target_blocking_percent,
        },
        Scenario::PopulationDerived {
            population,
            call_rate_per_hour,
            avg_duration_minutes,
        } => Scenario::PopulationDerived {
            population: scale_count(population, factor),
            call_rate_per_hour: call_rate_per_hour * CALL_RATE_FACTORS[index],
            avg_duration_minutes: avg_duration_minutes * DURATION_FACTORS[index],
        },
    }
}

/// Floor (minimum 1) when shrinking, ceil when growing.
fn scale_count(count: u64, factor: f64) -> u64 {
    let scaled = count as f64 * factor;
    if factor < 1.0 {
        (scaled.floor() as u64).max(1)
    } else if factor > 1.0 {
        scaled.ceil() as u64
    } else {
        count
    }
}
