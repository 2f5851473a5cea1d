use chart_shapes::api::{record_value, records_from_json};
use chart_shapes::core::{
    BandScale, CategoryAxis, CurveType, Layout, LinearScale, Scale, build_path, compose_points,
};

fn sample_rows() -> Vec<chart_shapes::api::DataRecord> {
    records_from_json(
        r#"[
            {"name": "a", "uv": 25},
            {"name": "b", "uv": null},
            {"name": "c", "uv": 50},
            {"name": "d", "uv": 100}
        ]"#,
    )
    .expect("rows")
}

#[test]
fn horizontal_layout_maps_category_to_x() {
    let rows = sample_rows();
    let band = BandScale::new(rows.len(), (0.0, 400.0)).expect("band");
    let value_scale = LinearScale::new((0.0, 100.0), (400.0, 0.0)).expect("linear");

    let points = compose_points(
        &rows,
        |row| record_value(row, "uv"),
        CategoryAxis::Band(&band),
        &value_scale,
        Layout::Horizontal,
        band.bandwidth(),
    );

    assert_eq!(points.len(), 4);
    assert_eq!(points[0].x, Some(50.0));
    assert_eq!(points[0].y, Some(300.0));
    assert_eq!(points[0].value, Some(25.0));

    assert_eq!(points[1].x, Some(150.0));
    assert_eq!(points[1].y, None);
    assert_eq!(points[1].value, None);
    assert_eq!(points[1].payload["name"], "b");

    assert_eq!(points[3].y, Some(0.0));
}

#[test]
fn vertical_layout_swaps_axes() {
    let rows = sample_rows();
    let ticks = [10.0, 20.0, 30.0, 40.0];
    let value_scale = LinearScale::new((0.0, 100.0), (0.0, 200.0)).expect("linear");

    let points = compose_points(
        &rows,
        |row| record_value(row, "uv"),
        CategoryAxis::Ticks(&ticks),
        &value_scale,
        Layout::Vertical,
        0.0,
    );

    assert_eq!(points[0].x, Some(50.0));
    assert_eq!(points[0].y, Some(10.0));
    assert_eq!(points[1].x, None);
    assert_eq!(points[1].y, Some(20.0));
}

#[test]
fn composed_points_feed_the_path_builder() {
    let rows = sample_rows();
    let band = BandScale::new(rows.len(), (0.0, 400.0)).expect("band");
    let value_scale = LinearScale::new((0.0, 100.0), (400.0, 0.0)).expect("linear");
    let points = compose_points(
        &rows,
        |row| record_value(row, "uv"),
        CategoryAxis::Band(&band),
        &value_scale,
        Layout::Horizontal,
        band.bandwidth(),
    );

    assert_eq!(
        build_path(&points, CurveType::Linear, false, None),
        "M50,300ZM250,200L350,0"
    );
    assert_eq!(
        build_path(&points, CurveType::Linear, true, None),
        "M50,300L250,200L350,0"
    );
}

#[test]
fn unknown_category_leaves_point_undefined() {
    let rows = vec![1.0, 2.0, 3.0];
    let ticks = [0.0, 10.0];
    let value_scale = LinearScale::new((0.0, 10.0), (0.0, 10.0)).expect("linear");
    let points = compose_points(
        &rows,
        |v| Some(*v),
        CategoryAxis::Ticks(&ticks),
        &value_scale,
        Layout::Horizontal,
        0.0,
    );
    assert_eq!(points[2].x, None);
    assert_eq!(points[2].y, Some(3.0));
    assert!(!points[2].is_defined());
}
