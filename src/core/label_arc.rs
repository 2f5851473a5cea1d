use crate::core::path::write_number;
use crate::core::polar::{RADIAN, polar_to_cartesian};
use crate::core::sector::SectorDescriptor;
use crate::render::{TextMeasurer, TextStyle};

/// Default gap between a sector edge and its label baseline, in pixels.
pub const DEFAULT_LABEL_OFFSET_RADIUS: f64 = 2.0;

/// Radius of the circle a sector label is written along.
///
/// Clockwise sectors put the label just outside the inner edge, the others
/// just inside the outer edge (never below zero).
#[must_use]
pub fn label_radius(sector: &SectorDescriptor, offset: f64) -> f64 {
    if sector.clock_wise {
        sector.inner_radius + offset
    } else {
        (sector.outer_radius - offset).max(0.0)
    }
}

/// Arc path a label of `label_width_px` is drawn along (text-on-path).
///
/// The label is anchored at the sweeping end of the sector and pulled back
/// inside it by the label's angular width when the sector is long enough.
/// Returns an empty string when the label radius is not positive or any
/// input is non-finite.
#[must_use]
pub fn compute_label_arc(sector: &SectorDescriptor, label_width_px: f64, offset: f64) -> String {
    let radius = label_radius(sector, offset);
    let finite = [
        sector.cx,
        sector.cy,
        sector.start_angle,
        sector.end_angle,
        label_width_px,
        radius,
    ]
    .iter()
    .all(|v| v.is_finite());
    if !finite || radius <= 0.0 {
        return String::new();
    }

    let delta_angle = label_width_px.max(0.0) / (radius * RADIAN);
    let (arc_start, arc_end) = if sector.clock_wise {
        let start = (sector.end_angle + delta_angle).min(sector.start_angle);
        (start, start - delta_angle)
    } else {
        let start = (sector.end_angle - delta_angle).max(sector.start_angle);
        (start, start + delta_angle)
    };

    let (x0, y0) = polar_to_cartesian(sector.cx, sector.cy, radius, arc_start);
    let (x1, y1) = polar_to_cartesian(sector.cx, sector.cy, radius, arc_end);

    let mut out = String::with_capacity(96);
    out.push('M');
    write_number(&mut out, x0);
    out.push(' ');
    write_number(&mut out, y0);
    out.push_str(" A");
    write_number(&mut out, radius);
    out.push(',');
    write_number(&mut out, radius);
    out.push_str(",0,");
    out.push(if delta_angle >= 180.0 { '1' } else { '0' });
    out.push(',');
    out.push(if sector.clock_wise { '1' } else { '0' });
    out.push(',');
    write_number(&mut out, x1);
    out.push(',');
    write_number(&mut out, y1);
    out
}

/// Measures `text` and computes its label arc.
///
/// A failing measurement is treated as a zero-width label.
pub fn label_arc_for_text(
    sector: &SectorDescriptor,
    text: &str,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
    offset: f64,
) -> String {
    let width = match measurer.text_width(text, style) {
        Ok(width) => width,
        Err(err) => {
            tracing::warn!(error = %err, "label width measurement failed, using 0");
            0.0
        }
    };
    compute_label_arc(sector, width, offset)
}
