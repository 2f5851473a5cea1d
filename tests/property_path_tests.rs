use chart_shapes::core::{
    CurveType, Point, SectorEntry, SectorLayout, build_path, compute_label_arc, compute_sectors,
};
use proptest::prelude::*;

fn maybe_points() -> impl Strategy<Value = Vec<Option<(f64, f64)>>> {
    prop::collection::vec(
        prop::option::weighted(0.8, (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0)),
        0..40,
    )
}

fn to_points(raw: &[Option<(f64, f64)>]) -> Vec<Point> {
    raw.iter()
        .map(|p| match p {
            Some((x, y)) => Point::new(*x, *y),
            None => Point::missing(),
        })
        .collect()
}

fn count_runs(raw: &[Option<(f64, f64)>]) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for p in raw {
        match (p.is_some(), in_run) {
            (true, false) => {
                runs += 1;
                in_run = true;
            }
            (false, true) => in_run = false,
            _ => {}
        }
    }
    runs
}

proptest! {
    #[test]
    fn path_is_empty_exactly_when_nothing_is_defined(
        raw in maybe_points(),
        curve in prop::sample::select(CurveType::ALL.to_vec()),
        connect_nulls in any::<bool>()
    ) {
        let points = to_points(&raw);
        let path = build_path(&points, curve, connect_nulls, None);
        let defined = raw.iter().filter(|p| p.is_some()).count();

        if defined == 0 {
            prop_assert_eq!(path.as_str(), "");
        } else if curve != CurveType::BasisOpen {
            prop_assert!(path.starts_with('M'), "{}", path);
        }
        prop_assert!(!path.contains("NaN"));
        prop_assert!(!path.contains("inf"));
    }

    #[test]
    fn linear_path_has_one_subpath_per_run(raw in maybe_points()) {
        let points = to_points(&raw);
        let split = build_path(&points, CurveType::Linear, false, None);
        prop_assert_eq!(split.matches('M').count(), count_runs(&raw));

        let joined = build_path(&points, CurveType::Linear, true, None);
        let expected = usize::from(raw.iter().any(Option::is_some));
        prop_assert_eq!(joined.matches('M').count(), expected);
    }

    #[test]
    fn non_positive_values_collapse_sectors(
        values in prop::collection::vec(-1_000.0f64..=0.0, 1..12),
        start_angle in -360.0f64..360.0,
        clock_wise in any::<bool>()
    ) {
        let entries: Vec<SectorEntry> = values.into_iter().map(SectorEntry::new).collect();
        let layout = SectorLayout::new(0.0, 0.0, 10.0, 50.0)
            .with_angles(start_angle, start_angle + 360.0)
            .with_clock_wise(clock_wise);
        for sector in compute_sectors(&entries, &layout) {
            prop_assert_eq!(sector.end_angle, sector.start_angle);
        }
    }

    #[test]
    fn sector_end_stays_within_max_angle(
        values in prop::collection::vec(0.001f64..1_000.0, 1..12),
        max_angle in 1.0f64..360.0
    ) {
        let entries: Vec<SectorEntry> = values.into_iter().map(SectorEntry::new).collect();
        let layout = SectorLayout::new(0.0, 0.0, 10.0, 50.0)
            .with_span(0.0, max_angle)
            .with_clock_wise(false);
        for sector in compute_sectors(&entries, &layout) {
            prop_assert!(sector.end_angle > 0.0);
            prop_assert!(sector.end_angle <= max_angle + 1e-9);
        }
    }

    #[test]
    fn counter_clockwise_label_arc_vanishes_only_inside_offset(
        outer_radius in 0.0f64..100.0,
        offset in 0.0f64..20.0,
        value in 0.1f64..100.0,
        width in 0.0f64..200.0
    ) {
        let layout = SectorLayout::new(50.0, 50.0, 0.0, outer_radius)
            .with_span(0.0, 180.0)
            .with_clock_wise(false);
        let sector = compute_sectors(&[SectorEntry::new(value)], &layout)[0];
        let arc = compute_label_arc(&sector, width, offset);
        prop_assert_eq!(arc.is_empty(), outer_radius <= offset);
    }
}
