use erlang_core::{blocking, max_traffic, min_channels, traffic_from_population};
use proptest::prelude::*;

proptest! {
    #[test]
    fn blocking_is_a_probability(a in 0.0f64..5000.0, n in 0u32..3000) {
        let b = blocking(a, n);
        prop_assert!(b.is_finite());
        prop_assert!((0.0..=1.0).contains(&b), "B({}, {}) = {}", a, n, b);
    }

    #[test]
    fn blocking_non_increasing_in_channels(a in 0.01f64..800.0, n in 0u32..1000) {
        let fewer = blocking(a, n);
        let more = blocking(a, n + 1);
        prop_assert!(more <= fewer + 1e-12, "B({}, {}) = {} > B({}, {}) = {}", a, n + 1, more, a, n, fewer);
    }

    #[test]
    fn blocking_non_decreasing_in_traffic(a1 in 0.0f64..500.0, delta in 0.0f64..100.0, n in 1u32..600) {
        let a2 = a1 + delta;
        prop_assert!(blocking(a2, n) + 1e-12 >= blocking(a1, n));
    }

    #[test]
    fn zero_load_and_zero_capacity(a in 0.001f64..1e6, n in 1u32..5000) {
        prop_assert_eq!(blocking(0.0, n), 0.0);
        prop_assert_eq!(blocking(a, 0), 1.0);
    }

    #[test]
    fn min_channels_is_minimal(a in 0.1f64..300.0, p in 0.1f64..50.0) {
        let solution = min_channels(a, p).unwrap();
        let n = solution.value;
        prop_assert!(!solution.approximate);
        prop_assert!(n >= 1);
        prop_assert!(blocking(a, n) * 100.0 <= p);
        prop_assert!(blocking(a, n - 1) * 100.0 > p);
    }

    #[test]
    fn max_traffic_round_trips(n in 1u32..200, p in 0.1f64..50.0) {
        let a = max_traffic(n, p).unwrap().value;
        let back = blocking(a, n) * 100.0;
        prop_assert!((back - p).abs() < 0.01, "N={} p={} A={} B={}", n, p, a, back);
    }

    #[test]
    fn population_traffic_is_linear(pop in 0u64..1_000_000, rate in 0u32..20, minutes in 0u32..30) {
        let single = traffic_from_population(pop, rate as f64, minutes as f64).unwrap().0;
        let double = traffic_from_population(pop * 2, rate as f64, minutes as f64).unwrap().0;
        prop_assert_eq!(double, single * 2.0);
    }
}

#[test]
fn large_system_does_not_overflow() {
    let b = blocking(1000.0, 2000);
    assert!(b.is_finite());
    assert!((0.0..=1.0).contains(&b));
}

#[test]
fn population_reference_value() {
    assert_eq!(traffic_from_population(10_000, 2.0, 3.0).unwrap().0, 1000.0);
}
