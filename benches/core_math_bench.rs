use chart_shapes::animation::compute_dash_array;
use chart_shapes::core::{
    CurveType, LinearScale, Point, SectorEntry, SectorLayout, build_path, compute_sectors,
    sector_path,
};
use chart_shapes::render::{KurboPathMeasurer, PathLengthMeasurer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave_points(count: usize) -> Vec<Point> {
    let scale = LinearScale::new((0.0, count as f64), (0.0, 1920.0)).expect("valid scale");
    (0..count)
        .map(|i| {
            let x = scale.domain_to_pixel(i as f64).expect("to pixel");
            let y = 540.0 + (i as f64 * 0.05).sin() * 400.0;
            Point::new(x, y)
        })
        .collect()
}

fn bench_monotone_path_10k(c: &mut Criterion) {
    let points = wave_points(10_000);

    c.bench_function("monotone_path_10k", |b| {
        b.iter(|| {
            let _ = build_path(black_box(&points), CurveType::MonotoneX, false, None);
        })
    });
}

fn bench_path_length_10k(c: &mut Criterion) {
    let path = build_path(&wave_points(10_000), CurveType::Linear, false, None);

    c.bench_function("path_length_10k", |b| {
        b.iter(|| {
            let _ = KurboPathMeasurer
                .total_length(black_box(&path))
                .expect("measurable path");
        })
    });
}

fn bench_patterned_dash_array(c: &mut Criterion) {
    let pattern = [5.0, 3.0, 1.0, 3.0];

    c.bench_function("patterned_dash_array", |b| {
        b.iter(|| {
            let _ = compute_dash_array(black_box(2_345.6), black_box(4_000.0), &pattern);
        })
    });
}

fn bench_radial_sectors_1k(c: &mut Criterion) {
    let entries: Vec<SectorEntry> = (0..1_000)
        .map(|i| SectorEntry::new(1.0 + (i % 97) as f64))
        .collect();
    let layout = SectorLayout::new(500.0, 500.0, 20.0, 480.0);

    c.bench_function("radial_sectors_1k", |b| {
        b.iter(|| {
            for sector in compute_sectors(black_box(&entries), &layout) {
                let _ = sector_path(&sector);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_monotone_path_10k,
    bench_path_length_10k,
    bench_patterned_dash_array,
    bench_radial_sectors_1k
);
criterion_main!(benches);
