use serde::{Deserialize, Serialize};

/// Returns `true` when a coordinate can take part in a path.
#[must_use]
pub fn is_defined(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite())
}

/// Orientation of a cartesian series.
///
/// `Horizontal` puts categories on the x axis and values on y; `Vertical`
/// swaps the two roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

/// One composed data point in pixel space.
///
/// `x`/`y` are `None` when the source value is missing, which renders as a
/// gap unless nulls are connected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<P = ()> {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub value: Option<f64>,
    pub payload: P,
}

impl Point<()> {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            value: None,
            payload: (),
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self {
            x: None,
            y: None,
            value: None,
            payload: (),
        }
    }
}

impl<P> Point<P> {
    #[must_use]
    pub fn is_defined(&self) -> bool {
        is_defined(self.x) && is_defined(self.y)
    }

    /// Returns the coordinates when both are defined.
    #[must_use]
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}

/// Which axis a baseline runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaselineKind {
    Horizontal,
    Vertical,
}

/// Reference line used to close an open curve into a fillable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub kind: BaselineKind,
    pub value: f64,
}

impl Baseline {
    #[must_use]
    pub const fn horizontal(value: f64) -> Self {
        Self {
            kind: BaselineKind::Horizontal,
            value,
        }
    }

    #[must_use]
    pub const fn vertical(value: f64) -> Self {
        Self {
            kind: BaselineKind::Vertical,
            value,
        }
    }
}

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
