use crate::core::curve::CurveType;
use crate::core::path::{PathWriter, write_number};
use crate::core::types::{Baseline, BaselineKind, Point};

/// Builds SVG path data for a point sequence.
///
/// Undefined points split the sequence into separate sub-paths unless
/// `connect_nulls` is set, in which case they are skipped and the remaining
/// points form one continuous run. Returns an empty string when no point is
/// defined.
///
/// With a `baseline`, the curve is closed into a fillable area: straight
/// segments run from the last defined point onto the baseline, back along it
/// to the first defined point, and the path is closed.
#[must_use]
pub fn build_path<P>(
    points: &[Point<P>],
    curve: CurveType,
    connect_nulls: bool,
    baseline: Option<Baseline>,
) -> String {
    let mut out = PathWriter::with_capacity(points.len().saturating_mul(24));
    let mut generator = curve.generator();
    let mut in_run = false;

    for point in points {
        match point.coords() {
            Some((x, y)) => {
                if !in_run {
                    generator.line_start();
                    in_run = true;
                }
                generator.point(&mut out, x, y);
            }
            None if connect_nulls => {}
            None => {
                if in_run {
                    generator.line_end(&mut out);
                    in_run = false;
                }
            }
        }
    }
    if in_run {
        generator.line_end(&mut out);
    }

    if out.is_empty() {
        return String::new();
    }

    if let Some(baseline) = baseline.filter(|b| b.value.is_finite()) {
        let mut defined = points.iter().filter_map(|p| p.coords());
        if let Some(first) = defined.next() {
            let last = defined.last().unwrap_or(first);
            close_against_baseline(&mut out, first, last, baseline);
        }
    }

    out.finish()
}

fn close_against_baseline(
    out: &mut PathWriter,
    first: (f64, f64),
    last: (f64, f64),
    baseline: Baseline,
) {
    let (a, b) = match baseline.kind {
        BaselineKind::Horizontal => ((last.0, baseline.value), (first.0, baseline.value)),
        BaselineKind::Vertical => ((baseline.value, last.1), (baseline.value, first.1)),
    };
    let mut segment = String::with_capacity(48);
    for (x, y) in [a, b] {
        segment.push('L');
        write_number(&mut segment, x);
        segment.push(' ');
        write_number(&mut segment, y);
    }
    segment.push('Z');
    out.push_raw(&segment);
}
