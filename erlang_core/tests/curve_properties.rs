use erlang_core::{solve, Curve, CurvePoint, Scenario};
use proptest::prelude::*;

fn assert_well_formed(points: &[CurvePoint]) -> Result<(), TestCaseError> {
    prop_assert!(!points.is_empty());
    for pair in points.windows(2) {
        prop_assert!(pair[0].x < pair[1].x, "not ascending: {} then {}", pair[0].x, pair[1].x);
        let (a, b) = ((pair[0].x * 100.0).round(), (pair[1].x * 100.0).round());
        prop_assert!(a != b, "duplicate at two decimals: {}", pair[0].x);
    }
    prop_assert!(points.iter().all(|p| (0.0..=100.0).contains(&p.blocking_rate)));
    prop_assert!(points.iter().filter(|p| p.is_target).count() <= 1);
    Ok(())
}

proptest! {
    #[test]
    fn channel_curves_are_well_formed(a in 0.5f64..800.0, p in 0.1f64..30.0) {
        let result = solve(&Scenario::ChannelsUnknown { traffic: a, target_blocking_percent: p }).unwrap();
        match &result.curve {
            Curve::Channels(points) => {
                assert_well_formed(points)?;
                let target = points.iter().find(|pt| pt.is_target).unwrap();
                prop_assert_eq!(target.x, result.outcome.value());
                prop_assert_eq!(target.target_blocking, Some(p));
            }
            other => prop_assert!(false, "unexpected curve {:?}", other),
        }
    }

    #[test]
    fn traffic_curves_are_well_formed(n in 1u32..300, p in 0.1f64..40.0) {
        let result = solve(&Scenario::TrafficUnknown { channels: n, target_blocking_percent: p }).unwrap();
        match &result.curve {
            Curve::Traffic(points) => {
                assert_well_formed(points)?;
                prop_assert_eq!(points.iter().filter(|pt| pt.is_target).count(), 1);
                let target = points.iter().find(|pt| pt.is_target).unwrap();
                prop_assert_eq!(target.target_blocking, Some(p));
            }
            other => prop_assert!(false, "unexpected curve {:?}", other),
        }
    }

    #[test]
    fn blocking_curves_flag_given_channels(n in 1u32..500, a in 0.0f64..600.0) {
        let result = solve(&Scenario::BlockingUnknown { channels: n, traffic: a }).unwrap();
        let points = result.curve.blocking_points().unwrap();
        assert_well_formed(points)?;
        let target = result.curve.target_point().unwrap();
        prop_assert_eq!(target.x, n as f64);
        prop_assert_eq!(target.target_blocking, Some(result.outcome.value()));
    }

    #[test]
    fn population_curves_ascend(pop in 1u64..5_000_000, rate in 0.1f64..5.0, minutes in 0.5f64..10.0) {
        let result = solve(&Scenario::PopulationDerived {
            population: pop,
            call_rate_per_hour: rate,
            avg_duration_minutes: minutes,
        })
        .unwrap();
        match &result.curve {
            Curve::Population(points) => {
                prop_assert!(points.windows(2).all(|w| w[0].population < w[1].population));
                prop_assert!(points.iter().any(|pt| pt.population == pop));
            }
            other => prop_assert!(false, "unexpected curve {:?}", other),
        }
    }
}
