use chart_shapes::animation::{compute_dash_array, solid_grow_dash_array};
use proptest::prelude::*;

fn pattern_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..20.0, 1..6)
}

proptest! {
    #[test]
    fn dash_array_always_sums_to_total(
        pattern in pattern_strategy(),
        total in 0.0f64..500.0,
        fraction in 0.0f64..=1.0
    ) {
        let revealed = total * fraction;
        let dash = compute_dash_array(revealed, total, &pattern);

        prop_assert!(dash.segments().iter().all(|s| *s >= 0.0));
        prop_assert!((dash.total() - total).abs() <= 1e-6 * (1.0 + total));
        prop_assert!((dash.trailing() - (total - revealed)).abs() <= 1e-9 * (1.0 + total));
        // The trailing gap always lands on an "off" slot.
        prop_assert_eq!(dash.segments().len() % 2, 0);
    }

    #[test]
    fn full_reveal_leaves_nothing_hidden(
        pattern in pattern_strategy(),
        total in 0.0f64..500.0
    ) {
        let dash = compute_dash_array(total, total, &pattern);
        prop_assert_eq!(dash.trailing(), 0.0);
        prop_assert!((dash.total() - total).abs() <= 1e-6 * (1.0 + total));
    }

    #[test]
    fn zero_reveal_is_all_off(
        pattern in pattern_strategy(),
        total in 0.0f64..500.0
    ) {
        let dash = compute_dash_array(0.0, total, &pattern);
        prop_assert_eq!(dash.segments(), &[0.0, total][..]);
    }

    #[test]
    fn solid_grow_is_well_formed(total in 0.0f64..10_000.0, revealed in -100.0f64..20_000.0) {
        let dash = solid_grow_dash_array(revealed, total);
        prop_assert!(dash.ends_with("px"));
        prop_assert!(!dash.contains("NaN"));
        prop_assert_eq!(dash.split(' ').count(), 2);
    }
}
