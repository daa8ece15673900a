//! # Traffic Sweep
//!
//! Blocking percentage against offered traffic over `[0, factor × N]`.
//!
//! The range is split into five zones around the solved traffic `T`
//! (by default at 0.5T, 0.8T, 1.2T and 1.5T), each with its own point
//! budget. The zone containing `T` gets the most points, which resolves the
//! steep part of the curve without over-sampling the flat tails.
//!
//! ```text
//! 0 ──── 0.5T ── 0.8T ─ T ─ 1.2T ── 1.5T ──────── 3N
//!   10pt   12pt    24pt      12pt      10pt
//! ```
//!
//! Zones falling outside the range collapse and contribute nothing.

use crate::calculations::blocking::blocking;
use crate::curves::{evaluate, mark_target, normalize, CurvePoint, SWEPT_DECIMALS};
use crate::settings::SamplingSettings;
use crate::units::round_to;

/// Sample blocking vs. traffic for `channels` trunks around `solved` Erlangs.
///
/// The point at `solved` is flagged with `target_blocking` (the requested
/// percentage), inserted if the zones did not land on it.
pub fn sample(channels: u32, solved: f64, target_blocking: f64, settings: &SamplingSettings) -> Vec<CurvePoint> {
    let upper = settings.traffic_range_factor * f64::from(channels);
    let anchor = if solved.is_finite() && solved > 0.0 { solved } else { 0.0 };

    let mut bounds = Vec::with_capacity(6);
    bounds.push(0.0);
    bounds.extend(settings.traffic_zone_breaks.iter().map(|b| (b * anchor).clamp(0.0, upper)));
    bounds.push(upper);

    let mut xs = Vec::new();
    for (zone, &count) in settings.traffic_zone_points.iter().enumerate() {
        let (low, high) = (bounds[zone], bounds[zone + 1]);
        if high > low {
            xs.extend(linspace(low, high, count).map(|x| round_to(x, SWEPT_DECIMALS)));
        }
    }

    let mut points = normalize(evaluate(&xs, |x| CurvePoint::new(x, blocking(x, channels))));

    if anchor > 0.0 {
        mark_target(&mut points, anchor, blocking(anchor, channels), target_blocking);
    }
    points
}

/// `count` evenly spaced values from `low` to `high`, both ends included.
fn linspace(low: f64, high: f64, count: u32) -> impl Iterator<Item = f64> {
    let span = high - low;
    let intervals = f64::from(count.max(2) - 1);
    (0..count.max(2)).map(move |i| low + span * f64::from(i) / intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<CurvePoint> {
        // 20 trunks at 1% carry about 12.03 E
        sample(20, 12.0306, 1.0, &SamplingSettings::default())
    }

    #[test]
    fn test_covers_range_in_order() {
        let points = reference();
        assert_eq!(points.first().unwrap().x, 0.0);
        assert_eq!(points.last().unwrap().x, 60.0);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        assert!(points.iter().all(|p| (0.0..=100.0).contains(&p.blocking_rate)));
    }

    #[test]
    fn test_single_target_point() {
        let points = reference();
        let targets: Vec<_> = points.iter().filter(|p| p.is_target).collect();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].x, 12.03);
        assert_eq!(targets[0].target_blocking, Some(1.0));
        assert!((targets[0].blocking_rate - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_denser_near_operating_point() {
        let points = reference();
        let count_in = |lo: f64, hi: f64| points.iter().filter(|p| p.x >= lo && p.x <= hi).count() as f64;
        let near = count_in(0.8 * 12.03, 1.2 * 12.03) / (0.4 * 12.03);
        let tail = count_in(1.5 * 12.03, 60.0) / (60.0 - 1.5 * 12.03);
        assert!(near > 5.0 * tail, "near {} vs tail {}", near, tail);
    }

    #[test]
    fn test_operating_point_beyond_range() {
        let points = sample(4, 40.0, 100.0, &SamplingSettings::default());
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        let last = points.last().unwrap();
        assert!(last.is_target);
        assert_eq!(last.x, 40.0);
    }

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = linspace(1.0, 2.0, 5).collect();
        assert_eq!(values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }
}
