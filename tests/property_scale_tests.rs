use chart_shapes::core::{BandScale, LinearScale, Scale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_end in 1.0f64..4_096.0,
        inverted in any::<bool>(),
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let range = if inverted { (range_end, 0.0) } else { (0.0, range_end) };

        let scale = LinearScale::new((domain_start, domain_end), range).expect("valid scale");
        let px = scale.domain_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_domain(px).expect("from pixel");

        prop_assert!(px >= -1e-6 && px <= range_end + 1e-6);
        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn band_starts_are_ordered_and_inside_range(
        count in 1usize..50,
        width in 1.0f64..2_000.0,
        padding_inner in 0.0f64..1.0,
        padding_outer in 0.0f64..2.0
    ) {
        let scale = BandScale::new(count, (0.0, width))
            .expect("band")
            .with_padding(padding_inner, padding_outer)
            .expect("padding");

        let mut previous = f64::NEG_INFINITY;
        for index in 0..count {
            let start = scale.scale(index as f64).expect("band start");
            prop_assert!(start > previous);
            prop_assert!(start >= -1e-9);
            prop_assert!(start + scale.bandwidth() <= width + 1e-6);
            previous = start;
        }
        prop_assert_eq!(scale.scale(count as f64), None);
    }
}
