use serde::{Deserialize, Serialize};

use crate::core::path::write_number;

/// Funnel-style trapezoid: a top edge of `upper_width` starting at `(x, y)`
/// and a bottom edge of `lower_width` centered under it, `height` below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub x: f64,
    pub y: f64,
    pub upper_width: f64,
    pub lower_width: f64,
    pub height: f64,
}

impl Trapezoid {
    #[must_use]
    pub const fn new(x: f64, y: f64, upper_width: f64, lower_width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            upper_width,
            lower_width,
            height,
        }
    }

    /// `false` for non-finite input or shapes with no area to draw.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        let finite = [self.x, self.y, self.upper_width, self.lower_width, self.height]
            .iter()
            .all(|v| v.is_finite());
        finite && !(self.upper_width == 0.0 && self.lower_width == 0.0) && self.height != 0.0
    }

    #[must_use]
    pub fn path(&self) -> String {
        trapezoid_path(self.x, self.y, self.upper_width, self.lower_width, self.height)
    }
}

/// SVG path data of a trapezoid, or an empty string when it is not drawable.
#[must_use]
pub fn trapezoid_path(x: f64, y: f64, upper_width: f64, lower_width: f64, height: f64) -> String {
    if !Trapezoid::new(x, y, upper_width, lower_width, height).is_drawable() {
        return String::new();
    }

    let width_gap = upper_width - lower_width;
    let lower_right = x + upper_width - width_gap / 2.0;
    let corners = [
        ('M', x, y),
        ('L', x + upper_width, y),
        ('L', lower_right, y + height),
        ('L', lower_right - lower_width, y + height),
        ('L', x, y),
    ];

    let mut out = String::with_capacity(96);
    for (cmd, px, py) in corners {
        out.push(cmd);
        out.push(' ');
        write_number(&mut out, px);
        out.push(',');
        write_number(&mut out, py);
    }
    out.push_str(" Z");
    out
}

#[cfg(test)]
mod tests {
    use super::trapezoid_path;

    #[test]
    fn centered_lower_edge() {
        assert_eq!(
            trapezoid_path(0.0, 0.0, 100.0, 60.0, 50.0),
            "M 0,0L 100,0L 80,50L 20,50L 0,0 Z"
        );
    }

    #[test]
    fn degenerate_shapes_render_nothing() {
        assert!(trapezoid_path(0.0, 0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(trapezoid_path(0.0, 0.0, 10.0, 5.0, 0.0).is_empty());
        assert!(trapezoid_path(f64::NAN, 0.0, 10.0, 5.0, 3.0).is_empty());
    }
}
