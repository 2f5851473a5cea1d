use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::path::write_number;
use crate::core::polar::{delta_angle, polar_to_cartesian};
use crate::error::{ChartError, ChartResult};

/// One radial bar input.
///
/// Entries may carry their own radii (one ring per entry); otherwise the
/// layout radii apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorEntry {
    pub value: f64,
    #[serde(default)]
    pub inner_radius: Option<f64>,
    #[serde(default)]
    pub outer_radius: Option<f64>,
}

impl SectorEntry {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            inner_radius: None,
            outer_radius: None,
        }
    }

    #[must_use]
    pub const fn with_radii(mut self, inner_radius: f64, outer_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self.outer_radius = Some(outer_radius);
        self
    }
}

/// Shared geometry for a radial bar series. Angles are in degrees.
///
/// `start_angle`/`end_angle` bound the background track; value sectors start
/// at `start_angle` and sweep between `min_angle` and `max_angle` degrees
/// depending on their share of the largest value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorLayout {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
    #[serde(default)]
    pub min_angle: f64,
    #[serde(default = "default_max_angle")]
    pub max_angle: f64,
    #[serde(default = "default_clock_wise")]
    pub clock_wise: bool,
}

fn default_end_angle() -> f64 {
    360.0
}

fn default_max_angle() -> f64 {
    135.0
}

fn default_clock_wise() -> bool {
    true
}

impl SectorLayout {
    #[must_use]
    pub fn new(cx: f64, cy: f64, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            cx,
            cy,
            inner_radius,
            outer_radius,
            start_angle: 0.0,
            end_angle: default_end_angle(),
            min_angle: 0.0,
            max_angle: default_max_angle(),
            clock_wise: default_clock_wise(),
        }
    }

    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn with_span(mut self, min_angle: f64, max_angle: f64) -> Self {
        self.min_angle = min_angle;
        self.max_angle = max_angle;
        self
    }

    #[must_use]
    pub fn with_clock_wise(mut self, clock_wise: bool) -> Self {
        self.clock_wise = clock_wise;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("cx", self.cx),
            ("cy", self.cy),
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("start_angle", self.start_angle),
            ("end_angle", self.end_angle),
            ("min_angle", self.min_angle),
            ("max_angle", self.max_angle),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "sector layout `{name}` must be finite"
                )));
            }
        }
        if self.inner_radius < 0.0 || self.outer_radius < self.inner_radius {
            return Err(ChartError::InvalidConfig(
                "sector radii must satisfy 0 <= inner <= outer".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Resolved geometry of one annular wedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorDescriptor {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clock_wise: bool,
    pub value: f64,
}

impl SectorDescriptor {
    /// Signed angular span in degrees.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_angle == self.end_angle
    }
}

/// Computes one proportional sector per entry.
///
/// The largest value sweeps `|max_angle|` degrees, smaller values sweep
/// proportionally with a floor of `|min_angle|`. Entries with a value
/// `<= 0` (or when the largest value is `<= 0`) collapse to a zero-length
/// sector at `start_angle`. Clockwise sectors sweep towards negative angles.
#[must_use]
pub fn compute_sectors(entries: &[SectorEntry], layout: &SectorLayout) -> Vec<SectorDescriptor> {
    let Some(max_value) = entries
        .iter()
        .map(|entry| entry.value)
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(|value| value.0)
    else {
        return entries
            .iter()
            .map(|entry| descriptor(entry, layout, layout.start_angle))
            .collect();
    };

    let abs_min_angle = layout.min_angle.abs();
    let gap_angle = layout.max_angle.abs() - abs_min_angle;
    let direction = if layout.clock_wise { -1.0 } else { 1.0 };

    entries
        .iter()
        .map(|entry| {
            let end_angle = if max_value <= 0.0 || !entry.value.is_finite() || entry.value <= 0.0
            {
                layout.start_angle
            } else {
                layout.start_angle
                    + direction * (abs_min_angle + gap_angle * entry.value / max_value)
            };
            descriptor(entry, layout, end_angle)
        })
        .collect()
}

fn descriptor(entry: &SectorEntry, layout: &SectorLayout, end_angle: f64) -> SectorDescriptor {
    SectorDescriptor {
        cx: layout.cx,
        cy: layout.cy,
        inner_radius: entry.inner_radius.unwrap_or(layout.inner_radius),
        outer_radius: entry.outer_radius.unwrap_or(layout.outer_radius),
        start_angle: layout.start_angle,
        end_angle,
        clock_wise: layout.clock_wise,
        value: entry.value,
    }
}

/// Full-track backdrops behind each sector, spanning the layout's
/// `[start_angle, end_angle]` regardless of the sector's value.
#[must_use]
pub fn background_sectors(
    sectors: &[SectorDescriptor],
    layout: &SectorLayout,
) -> Vec<SectorDescriptor> {
    sectors
        .iter()
        .map(|sector| SectorDescriptor {
            start_angle: layout.start_angle,
            end_angle: layout.end_angle,
            clock_wise: layout.clock_wise,
            ..*sector
        })
        .collect()
}

fn push_pair(out: &mut String, cmd: char, x: f64, y: f64) {
    out.push(cmd);
    write_number(out, x);
    out.push(',');
    write_number(out, y);
}

fn push_arc(out: &mut String, radius: f64, large_arc: bool, sweep: bool, x: f64, y: f64) {
    out.push('A');
    write_number(out, radius);
    out.push(',');
    write_number(out, radius);
    out.push_str(",0,");
    out.push(if large_arc { '1' } else { '0' });
    out.push(',');
    out.push(if sweep { '1' } else { '0' });
    out.push(',');
    write_number(out, x);
    out.push(',');
    write_number(out, y);
}

/// SVG path data for an annular wedge (or a pie slice when the inner radius
/// is zero).
///
/// Returns an empty string for degenerate input: non-finite values,
/// `outer_radius < inner_radius`, or a zero-length span.
#[must_use]
pub fn sector_path(sector: &SectorDescriptor) -> String {
    let SectorDescriptor {
        cx,
        cy,
        inner_radius,
        outer_radius,
        start_angle,
        end_angle,
        ..
    } = *sector;

    let finite = [cx, cy, inner_radius, outer_radius, start_angle, end_angle]
        .iter()
        .all(|v| v.is_finite());
    if !finite || outer_radius < inner_radius || start_angle == end_angle {
        return String::new();
    }

    let angle = delta_angle(start_angle, end_angle);
    let temp_end_angle = start_angle + angle;
    let large_arc = angle.abs() > 180.0;

    let (osx, osy) = polar_to_cartesian(cx, cy, outer_radius, start_angle);
    let (oex, oey) = polar_to_cartesian(cx, cy, outer_radius, temp_end_angle);

    let mut out = String::with_capacity(128);
    push_pair(&mut out, 'M', osx, osy);
    push_arc(
        &mut out,
        outer_radius,
        large_arc,
        start_angle > temp_end_angle,
        oex,
        oey,
    );

    if inner_radius > 0.0 {
        let (isx, isy) = polar_to_cartesian(cx, cy, inner_radius, start_angle);
        let (iex, iey) = polar_to_cartesian(cx, cy, inner_radius, temp_end_angle);
        push_pair(&mut out, 'L', iex, iey);
        push_arc(
            &mut out,
            inner_radius,
            large_arc,
            start_angle <= temp_end_angle,
            isx,
            isy,
        );
    } else {
        push_pair(&mut out, 'L', cx, cy);
    }
    out.push('Z');
    out
}

#[cfg(test)]
mod tests {
    use super::{SectorEntry, SectorLayout, compute_sectors, sector_path};

    #[test]
    fn entry_radii_override_layout_radii() {
        let layout = SectorLayout::new(0.0, 0.0, 10.0, 20.0);
        let sectors = compute_sectors(
            &[SectorEntry::new(1.0).with_radii(30.0, 40.0), SectorEntry::new(1.0)],
            &layout,
        );
        assert_eq!(sectors[0].inner_radius, 30.0);
        assert_eq!(sectors[0].outer_radius, 40.0);
        assert_eq!(sectors[1].inner_radius, 10.0);
    }

    #[test]
    fn non_finite_value_collapses_without_poisoning_max() {
        let layout = SectorLayout::new(0.0, 0.0, 10.0, 20.0)
            .with_span(0.0, 90.0)
            .with_clock_wise(false);
        let sectors = compute_sectors(
            &[SectorEntry::new(f64::NAN), SectorEntry::new(2.0), SectorEntry::new(1.0)],
            &layout,
        );
        assert_eq!(sectors[0].end_angle, 0.0);
        assert_eq!(sectors[1].end_angle, 90.0);
        assert_eq!(sectors[2].end_angle, 45.0);
    }

    #[test]
    fn pie_slice_closes_through_center() {
        let layout = SectorLayout::new(0.0, 0.0, 0.0, 10.0).with_clock_wise(false);
        let sector = compute_sectors(&[SectorEntry::new(1.0)], &layout.with_span(0.0, 90.0))[0];
        assert_eq!(sector_path(&sector), "M10,0A10,10,0,0,0,0,-10L0,0Z");
    }

    #[test]
    fn inverted_radii_render_nothing() {
        let layout = SectorLayout::new(0.0, 0.0, 0.0, 10.0);
        let mut sector = compute_sectors(&[SectorEntry::new(1.0)], &layout)[0];
        sector.inner_radius = 20.0;
        assert!(sector_path(&sector).is_empty());
    }
}
