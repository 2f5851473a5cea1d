//! Curve interpolators.
//!
//! Every interpolator is a small state machine fed one sub-path at a time:
//! `line_start`, then `point` for each defined point, then `line_end`.
//! The emitted path data follows the classic d3-shape curve family so paths
//! line up with charts produced by other SVG tooling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::path::PathWriter;
use crate::error::ChartError;

/// Interpolation used to connect consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CurveType {
    #[default]
    Linear,
    LinearClosed,
    Basis,
    BasisClosed,
    BasisOpen,
    Natural,
    #[serde(alias = "monotone")]
    MonotoneX,
    MonotoneY,
    Step,
    StepBefore,
    StepAfter,
}

impl CurveType {
    pub const ALL: [CurveType; 11] = [
        CurveType::Linear,
        CurveType::LinearClosed,
        CurveType::Basis,
        CurveType::BasisClosed,
        CurveType::BasisOpen,
        CurveType::Natural,
        CurveType::MonotoneX,
        CurveType::MonotoneY,
        CurveType::Step,
        CurveType::StepBefore,
        CurveType::StepAfter,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linearClosed",
            Self::Basis => "basis",
            Self::BasisClosed => "basisClosed",
            Self::BasisOpen => "basisOpen",
            Self::Natural => "natural",
            Self::MonotoneX => "monotoneX",
            Self::MonotoneY => "monotoneY",
            Self::Step => "step",
            Self::StepBefore => "stepBefore",
            Self::StepAfter => "stepAfter",
        }
    }

    /// Whether the interpolator closes the sub-path on its own.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::LinearClosed | Self::BasisClosed)
    }

    #[must_use]
    pub fn generator(self) -> Box<dyn CurveGenerator> {
        match self {
            Self::Linear => Box::new(LinearCurve::default()),
            Self::LinearClosed => Box::new(LinearClosedCurve::default()),
            Self::Basis => Box::new(BasisCurve::new()),
            Self::BasisClosed => Box::new(BasisClosedCurve::new()),
            Self::BasisOpen => Box::new(BasisOpenCurve::new()),
            Self::Natural => Box::new(NaturalCurve::default()),
            Self::MonotoneX => Box::new(MonotoneCurve::new(false)),
            Self::MonotoneY => Box::new(MonotoneCurve::new(true)),
            Self::Step => Box::new(StepCurve::new(0.5)),
            Self::StepBefore => Box::new(StepCurve::new(0.0)),
            Self::StepAfter => Box::new(StepCurve::new(1.0)),
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "monotone" {
            return Ok(Self::MonotoneX);
        }
        Self::ALL
            .into_iter()
            .find(|curve| curve.as_str() == s)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown curve type `{s}`")))
    }
}

/// Streaming interpolator for one sub-path at a time.
pub trait CurveGenerator {
    fn line_start(&mut self);
    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64);
    fn line_end(&mut self, out: &mut PathWriter);
}

#[derive(Debug, Default)]
struct LinearCurve {
    state: u8,
}

impl CurveGenerator for LinearCurve {
    fn line_start(&mut self) {
        self.state = 0;
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        if self.state == 0 {
            self.state = 1;
            out.move_to(x, y);
        } else {
            self.state = 2;
            out.line_to(x, y);
        }
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        // A lone point still gets a zero-length closed sub-path.
        if self.state == 1 {
            out.close();
        }
    }
}

#[derive(Debug, Default)]
struct LinearClosedCurve {
    started: bool,
}

impl CurveGenerator for LinearClosedCurve {
    fn line_start(&mut self) {
        self.started = false;
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        if self.started {
            out.line_to(x, y);
        } else {
            self.started = true;
            out.move_to(x, y);
        }
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        if self.started {
            out.close();
        }
    }
}

fn basis_point(out: &mut PathWriter, x0: f64, y0: f64, x1: f64, y1: f64, x: f64, y: f64) {
    out.cubic_to(
        (2.0 * x0 + x1) / 3.0,
        (2.0 * y0 + y1) / 3.0,
        (x0 + 2.0 * x1) / 3.0,
        (y0 + 2.0 * y1) / 3.0,
        (x0 + 4.0 * x1 + x) / 6.0,
        (y0 + 4.0 * y1 + y) / 6.0,
    );
}

#[derive(Debug)]
struct BasisCurve {
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BasisCurve {
    fn new() -> Self {
        Self {
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
        }
    }

    fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }
}

impl CurveGenerator for BasisCurve {
    fn line_start(&mut self) {
        *self = Self::new();
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                out.move_to(x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                out.line_to(
                    (5.0 * self.x0 + self.x1) / 6.0,
                    (5.0 * self.y0 + self.y1) / 6.0,
                );
                basis_point(out, self.x0, self.y0, self.x1, self.y1, x, y);
            }
            _ => basis_point(out, self.x0, self.y0, self.x1, self.y1, x, y),
        }
        self.shift(x, y);
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        match self.state {
            3 => {
                basis_point(out, self.x0, self.y0, self.x1, self.y1, self.x1, self.y1);
                out.line_to(self.x1, self.y1);
            }
            2 => out.line_to(self.x1, self.y1),
            1 => out.close(),
            _ => {}
        }
    }
}

#[derive(Debug)]
struct BasisClosedCurve {
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    // First three points, replayed at the end to wrap the spline around.
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
}

impl BasisClosedCurve {
    fn new() -> Self {
        Self {
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
            x3: f64::NAN,
            y3: f64::NAN,
            x4: f64::NAN,
            y4: f64::NAN,
        }
    }
}

impl CurveGenerator for BasisClosedCurve {
    fn line_start(&mut self) {
        *self = Self::new();
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                self.x2 = x;
                self.y2 = y;
            }
            1 => {
                self.state = 2;
                self.x3 = x;
                self.y3 = y;
            }
            2 => {
                self.state = 3;
                self.x4 = x;
                self.y4 = y;
                out.move_to(
                    (self.x0 + 4.0 * self.x1 + x) / 6.0,
                    (self.y0 + 4.0 * self.y1 + y) / 6.0,
                );
            }
            _ => basis_point(out, self.x0, self.y0, self.x1, self.y1, x, y),
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        match self.state {
            1 => {
                out.move_to(self.x2, self.y2);
                out.close();
            }
            2 => {
                out.move_to(
                    (self.x2 + 2.0 * self.x3) / 3.0,
                    (self.y2 + 2.0 * self.y3) / 3.0,
                );
                out.line_to(
                    (self.x3 + 2.0 * self.x2) / 3.0,
                    (self.y3 + 2.0 * self.y2) / 3.0,
                );
                out.close();
            }
            3 => {
                let wrap = [
                    (self.x2, self.y2),
                    (self.x3, self.y3),
                    (self.x4, self.y4),
                ];
                for (x, y) in wrap {
                    self.point(out, x, y);
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug)]
struct BasisOpenCurve {
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BasisOpenCurve {
    fn new() -> Self {
        Self {
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
        }
    }
}

impl CurveGenerator for BasisOpenCurve {
    fn line_start(&mut self) {
        *self = Self::new();
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        match self.state {
            0 => self.state = 1,
            1 => self.state = 2,
            2 => {
                self.state = 3;
                out.move_to(
                    (self.x0 + 4.0 * self.x1 + x) / 6.0,
                    (self.y0 + 4.0 * self.y1 + y) / 6.0,
                );
            }
            _ => {
                self.state = 4;
                basis_point(out, self.x0, self.y0, self.x1, self.y1, x, y);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        if self.state == 3 {
            out.close();
        }
    }
}

#[derive(Debug, Default)]
struct NaturalCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// Control points of a natural cubic spline through `knots` (one axis).
///
/// Solves the tridiagonal system with the Thomas algorithm. Returns the first
/// and second control coordinate of every segment.
fn natural_control_points(knots: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = knots.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = knots[0] + 2.0 * knots[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * knots[i] + 2.0 * knots[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * knots[n - 1] + knots[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (knots[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * knots[i + 1] - a[i + 1];
    }

    (a, b)
}

impl CurveGenerator for NaturalCurve {
    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    fn point(&mut self, _out: &mut PathWriter, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        let n = self.xs.len();
        match n {
            0 => {}
            1 => {
                out.move_to(self.xs[0], self.ys[0]);
                out.close();
            }
            2 => {
                out.move_to(self.xs[0], self.ys[0]);
                out.line_to(self.xs[1], self.ys[1]);
            }
            _ => {
                out.move_to(self.xs[0], self.ys[0]);
                let (px0, px1) = natural_control_points(&self.xs);
                let (py0, py1) = natural_control_points(&self.ys);
                for i in 0..n - 1 {
                    out.cubic_to(
                        px0[i],
                        py0[i],
                        px1[i],
                        py1[i],
                        self.xs[i + 1],
                        self.ys[i + 1],
                    );
                }
            }
        }
        self.xs.clear();
        self.ys.clear();
    }
}

/// Monotone cubic Hermite interpolation (Steffen's method).
///
/// `swap` runs the interpolation along y instead of x: inputs and outputs are
/// reflected through the diagonal.
#[derive(Debug)]
struct MonotoneCurve {
    swap: bool,
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

impl MonotoneCurve {
    fn new(swap: bool) -> Self {
        Self {
            swap,
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            t0: f64::NAN,
        }
    }

    fn emit_move(&self, out: &mut PathWriter, x: f64, y: f64) {
        if self.swap {
            out.move_to(y, x);
        } else {
            out.move_to(x, y);
        }
    }

    fn emit_line(&self, out: &mut PathWriter, x: f64, y: f64) {
        if self.swap {
            out.line_to(y, x);
        } else {
            out.line_to(x, y);
        }
    }

    /// Tangent at the middle point of three consecutive points.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let denom0 = if h0 != 0.0 {
            h0
        } else if h1 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let denom1 = if h1 != 0.0 {
            h1
        } else if h0 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let s0 = (self.y1 - self.y0) / denom0;
        let s1 = (y2 - self.y1) / denom1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        // `f64::min` drops NaN operands; an undefined slope flattens the tangent.
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let v =(sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if v.is_finite() { v } else { 0.0 }
    }

    /// One-sided tangent at an end point, given the tangent at the other end.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }

    fn hermite(&self, out: &mut PathWriter, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        let (c1x, c1y) = (self.x0 + dx, self.y0 + dx * t0);
        let (c2x, c2y) = (self.x1 - dx, self.y1 - dx * t1);
        if self.swap {
            out.cubic_to(c1y, c1x, c2y, c2x, self.y1, self.x1);
        } else {
            out.cubic_to(c1x, c1y, c2x, c2y, self.x1, self.y1);
        }
    }
}

impl CurveGenerator for MonotoneCurve {
    fn line_start(&mut self) {
        *self = Self::new(self.swap);
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        let (x, y) = if self.swap { (y, x) } else { (x, y) };
        if x == self.x1 && y == self.y1 {
            return;
        }

        let mut t1 = f64::NAN;
        match self.state {
            0 => {
                self.state = 1;
                self.emit_move(out, x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.hermite(out, t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.hermite(out, self.t0, t1);
            }
        }

        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        match self.state {
            1 => out.close(),
            2 => self.emit_line(out, self.x1, self.y1),
            3 => {
                let t1 = self.slope2(self.t0);
                self.hermite(out, self.t0, t1);
            }
            _ => {}
        }
    }
}

/// Step interpolation; `t` is where the vertical riser sits between two
/// points (0 = before, 0.5 = midpoint, 1 = after).
#[derive(Debug)]
struct StepCurve {
    t: f64,
    state: u8,
    x: f64,
    y: f64,
}

impl StepCurve {
    fn new(t: f64) -> Self {
        Self {
            t,
            state: 0,
            x: f64::NAN,
            y: f64::NAN,
        }
    }
}

impl CurveGenerator for StepCurve {
    fn line_start(&mut self) {
        *self = Self::new(self.t);
    }

    fn point(&mut self, out: &mut PathWriter, x: f64, y: f64) {
        if self.state == 0 {
            self.state = 1;
            out.move_to(x, y);
        } else {
            self.state = 2;
            if self.t <= 0.0 {
                out.line_to(self.x, y);
                out.line_to(x, y);
            } else {
                let riser = self.x * (1.0 - self.t) + x * self.t;
                out.line_to(riser, self.y);
                out.line_to(riser, y);
            }
        }
        self.x = x;
        self.y = y;
    }

    fn line_end(&mut self, out: &mut PathWriter) {
        if 0.0 < self.t && self.t < 1.0 && self.state == 2 {
            out.line_to(self.x, self.y);
        }
        if self.state == 1 {
            out.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveType, natural_control_points};

    #[test]
    fn curve_type_parses_names_and_monotone_alias() {
        for curve in CurveType::ALL {
            assert_eq!(curve.as_str().parse::<CurveType>().expect("parse"), curve);
        }
        assert_eq!(
            "monotone".parse::<CurveType>().expect("alias"),
            CurveType::MonotoneX
        );
        assert!("spline".parse::<CurveType>().is_err());
    }

    #[test]
    fn curve_type_serde_uses_camel_case() {
        let json = serde_json::to_string(&CurveType::StepBefore).expect("serialize");
        assert_eq!(json, "\"stepBefore\"");
        let parsed: CurveType = serde_json::from_str("\"monotone\"").expect("deserialize");
        assert_eq!(parsed, CurveType::MonotoneX);
    }

    #[test]
    fn natural_control_points_of_collinear_knots_stay_on_line() {
        let (first, second) = natural_control_points(&[0.0, 3.0, 6.0]);
        assert_eq!(first, vec![1.0, 4.0]);
        assert_eq!(second, vec![2.0, 5.0]);
    }
}
