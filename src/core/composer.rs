use crate::core::scale::{BandScale, Scale};
use crate::core::types::{Layout, Point};

/// How the categorical axis resolves a row into a coordinate.
#[derive(Clone, Copy)]
pub enum CategoryAxis<'a> {
    /// Band scale addressed by row index.
    Band(&'a BandScale),
    /// Precomputed tick coordinates addressed by row index.
    Ticks(&'a [f64]),
    /// Any scale fed with the row index as domain value.
    Indexed(&'a dyn Scale),
}

impl std::fmt::Debug for CategoryAxis<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Band(scale) => f.debug_tuple("Band").field(scale).finish(),
            Self::Ticks(ticks) => f.debug_tuple("Ticks").field(ticks).finish(),
            Self::Indexed(_) => f.write_str("Indexed(..)"),
        }
    }
}

/// Coordinate of the row at `index` on the categorical axis.
///
/// Band and tick axes place the point at the middle of the slot.
#[must_use]
pub fn category_coordinate(axis: CategoryAxis<'_>, index: usize, band_size: f64) -> Option<f64> {
    let half_band = if band_size.is_finite() {
        band_size / 2.0
    } else {
        0.0
    };
    match axis {
        CategoryAxis::Band(scale) => scale.band_start(index).map(|start| start + half_band),
        CategoryAxis::Ticks(ticks) => ticks
            .get(index)
            .copied()
            .filter(|tick| tick.is_finite())
            .map(|tick| tick + half_band),
        CategoryAxis::Indexed(scale) => scale.scale(index as f64),
    }
}

/// Maps rows into pixel-space points, one point per row in input order.
///
/// `value_of` extracts the numeric value of a row; `None` marks a missing
/// value and yields a point with an undefined value coordinate. The category
/// coordinate is still resolved so gaps stay positioned on their slot.
pub fn compose_points<'r, R>(
    rows: &'r [R],
    value_of: impl Fn(&R) -> Option<f64>,
    category_axis: CategoryAxis<'_>,
    value_scale: &dyn Scale,
    layout: Layout,
    band_size: f64,
) -> Vec<Point<&'r R>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let value = value_of(row).filter(|v| !v.is_nan());
            let category = category_coordinate(category_axis, index, band_size);
            let scaled = value.and_then(|v| value_scale.scale(v));

            let (x, y) = match layout {
                Layout::Horizontal => (category, scaled),
                Layout::Vertical => (scaled, category),
            };
            Point {
                x,
                y,
                value,
                payload: row,
            }
        })
        .collect()
}
