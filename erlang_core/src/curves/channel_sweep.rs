//! # Channel Sweep
//!
//! Blocking percentage against channel count, from one channel up to twice
//! the operating point (bounded by `channel_curve_cap`). The step grows with
//! the range so the curve keeps roughly `target_points` samples; the last
//! channel count is always included.

use crate::calculations::blocking::blocking;
use crate::curves::{evaluate, mark_target, normalize, CurvePoint};
use crate::settings::SamplingSettings;

/// Sample blocking vs. channel count around `operating` channels.
///
/// The operating point is flagged with `target_blocking` (a percentage)
/// when it lies inside the sweep.
pub fn sample(traffic: f64, operating: u32, target_blocking: f64, settings: &SamplingSettings) -> Vec<CurvePoint> {
    let upper = operating.saturating_mul(2).min(settings.channel_curve_cap).max(1);
    let step = upper.div_ceil(settings.target_points).max(1);

    let mut xs: Vec<f64> = (1..=upper).step_by(step as usize).map(f64::from).collect();
    if xs.last() != Some(&f64::from(upper)) {
        xs.push(f64::from(upper));
    }

    let mut points = normalize(evaluate(&xs, |x| CurvePoint::new(x, blocking(traffic, x as u32))));

    if operating >= 1 && operating <= upper {
        mark_target(&mut points, f64::from(operating), blocking(traffic, operating), target_blocking);
    }
    points
}
