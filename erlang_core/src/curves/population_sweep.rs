//! # Population Sweep
//!
//! Offered traffic against subscriber population, in whole multiples of
//! `population_step` up to `population_span_factor × population`. For very
//! large populations the step is widened (still a multiple of the base
//! step) to keep about `target_points` samples. The requested population is
//! always present.

use crate::calculations::population::offered_traffic;
use crate::curves::{PopulationPoint, SWEPT_DECIMALS};
use crate::settings::SamplingSettings;
use crate::units::round_to;

/// Sample traffic vs. population.
pub fn sample(
    population: u64,
    call_rate_per_hour: f64,
    avg_duration_minutes: f64,
    settings: &SamplingSettings,
) -> Vec<PopulationPoint> {
    let end = (population as f64 * settings.population_span_factor).floor() as u64;
    let base = settings.population_step;
    let multiples = end.div_ceil(base.saturating_mul(u64::from(settings.target_points))).max(1);
    let step = base.saturating_mul(multiples);

    let mut populations: Vec<u64> = (1..)
        .map_while(|i: u64| i.checked_mul(step))
        .take_while(|&p| p <= end)
        .collect();
    if let Err(index) = populations.binary_search(&population) {
        populations.insert(index, population);
    }

    populations
        .into_iter()
        .map(|p| PopulationPoint {
            population: p,
            traffic: round_to(offered_traffic(p, call_rate_per_hour, avg_duration_minutes), SWEPT_DECIMALS),
        })
        .collect()
}
