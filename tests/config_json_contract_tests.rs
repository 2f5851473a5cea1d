use chart_shapes::animation::Easing;
use chart_shapes::api::{LineSeriesConfig, RadialBarConfig};
use chart_shapes::core::{CurveType, Layout};

#[test]
fn bare_line_config_overrides_selected_fields() {
    let config = LineSeriesConfig::from_json_str(
        r##"{
            "curve": "stepAfter",
            "connect_nulls": true,
            "layout": "vertical",
            "stroke": "#ff7300",
            "dot": null,
            "animation": {"active": true, "timeline": {"begin_ms": 200, "easing": "ease-in-out"}}
        }"##,
    )
    .expect("parse");

    assert_eq!(config.curve, CurveType::StepAfter);
    assert!(config.connect_nulls);
    assert_eq!(config.layout, Layout::Vertical);
    assert_eq!(config.stroke.to_hex(), "#ff7300");
    assert_eq!(config.dot, None);
    assert_eq!(config.stroke_width, 1.0);
    assert_eq!(config.animation.timeline.begin_ms, 200.0);
    assert_eq!(config.animation.timeline.duration_ms, 1500.0);
    assert_eq!(config.animation.timeline.easing, Easing::EaseInOut);
}

#[test]
fn invalid_line_configs_are_rejected() {
    assert!(LineSeriesConfig::from_json_str(r#"{"stroke_dasharray": "4 x"}"#).is_err());
    assert!(LineSeriesConfig::from_json_str(r#"{"stroke_width": -1}"#).is_err());
    assert!(LineSeriesConfig::from_json_str(r#"{"stroke": "blue"}"#).is_err());
    assert!(
        LineSeriesConfig::from_json_str(r#"{"animation": {"timeline": {"duration_ms": -5}}}"#)
            .is_err()
    );
    assert!(LineSeriesConfig::from_json_str("not json").is_err());
}

#[test]
fn line_label_style_fills_in_defaults() {
    let config = LineSeriesConfig::from_json_str(r#"{"label": {"offset": 8}}"#).expect("parse");
    let label = config.label.expect("label");
    assert_eq!(label.offset, 8.0);
    assert_eq!(label.font_size_px, 12.0);
    assert_eq!(label.fill, None);
    assert_eq!(LineSeriesConfig::default().label, None);

    assert!(LineSeriesConfig::from_json_str(r#"{"label": {"font_size_px": 0}}"#).is_err());
}

#[test]
fn radial_bar_config_round_trips_through_envelope() {
    let config = RadialBarConfig::from_json_str(
        r#"{"layout": {"cx": 150, "cy": 150, "inner_radius": 20, "outer_radius": 140}, "has_label": true}"#,
    )
    .expect("parse");
    assert!(config.has_label);
    assert!(!config.has_background);
    assert_eq!(config.label_offset_radius, 2.0);
    assert_eq!(config.background_fill.to_hex(), "#f1f1f1");
    assert_eq!(config.label_style.font_size_px, 10.0);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let parsed = RadialBarConfig::from_json_str(&json).expect("parse envelope");
    assert_eq!(parsed, config);
}

#[test]
fn radial_bar_config_rejects_bad_layout() {
    let result = RadialBarConfig::from_json_str(
        r#"{"layout": {"cx": 0, "cy": 0, "inner_radius": 50, "outer_radius": 10}}"#,
    );
    assert!(result.is_err());
}
