use chart_shapes::ChartError;
use chart_shapes::core::{BandScale, LinearScale, Scale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert!((px - 325.0).abs() <= 1e-9);
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    let result = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert!(matches!(
        result,
        Err(ChartError::InvalidScaleDomain { start, end }) if start == 5.0 && end == 5.0
    ));
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::NAN, 1.0)).is_err());
}

#[test]
fn non_finite_values_do_not_map() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::NAN).is_err());
    assert_eq!(scale.scale(f64::INFINITY), None);
    assert_eq!(scale.bandwidth(), 0.0);
}

#[test]
fn collapsed_range_inverts_to_domain_start() {
    let scale = LinearScale::new((3.0, 9.0), (50.0, 50.0)).expect("valid scale");
    assert_eq!(scale.domain_to_pixel(6.0).expect("to pixel"), 50.0);
    assert_eq!(scale.pixel_to_domain(50.0).expect("from pixel"), 3.0);
}

#[test]
fn band_scale_with_padding() {
    let scale = BandScale::new(3, (0.0, 300.0))
        .expect("band")
        .with_padding(0.0, 0.5)
        .expect("padding");

    assert!((scale.step() - 75.0).abs() <= 1e-9);
    assert!((scale.bandwidth() - 75.0).abs() <= 1e-9);
    assert_eq!(scale.scale(0.0), Some(37.5));
    assert_eq!(scale.scale(2.0), Some(187.5));
    assert_eq!(scale.scale(3.0), None);
    assert_eq!(scale.count(), 3);
}

#[test]
fn band_scale_rejects_bad_padding() {
    let scale = BandScale::new(2, (0.0, 100.0)).expect("band");
    assert!(scale.with_padding(1.5, 0.0).is_err());
    assert!(scale.with_padding(0.1, -1.0).is_err());
    assert!(BandScale::new(2, (0.0, f64::NAN)).is_err());
}
