use serde::{Deserialize, Serialize};

/// CSS-style timing function mapping linear time to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; x control values are clamped to [0, 1].
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    #[must_use]
    pub fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Linear => None,
            Self::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Eased progress for linear time `t` in [0, 1]. Endpoints are exact.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if !t.is_finite() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                CubicBezier::new(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2).solve(t)
            }
        }
    }
}

/// Unit cubic bezier from (0,0) to (1,1) in polynomial form.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Curve parameter whose x equals `x`.
    fn param_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let slope = self.sample_dx(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled on a flat section; bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while hi - lo > Self::EPSILON {
            let value = self.sample_x(t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn solve(&self, x: f64) -> f64 {
        self.sample_y(self.param_for_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.1, 0.7, 1.0, 0.1),
    ];

    #[test]
    fn endpoints_are_stable() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(4.0), 1.0);
        }
    }

    #[test]
    fn standard_curves_are_monotonic() {
        for easing in &ALL[..5] {
            let a = easing.apply(0.25);
            let b = easing.apply(0.5);
            let c = easing.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.3);
        let b = Easing::EaseInOut.apply(0.7);
        assert_abs_diff_eq!(a + b, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn serde_uses_css_names() {
        let json = serde_json::to_string(&Easing::EaseInOut).expect("serialize");
        assert_eq!(json, "\"ease-in-out\"");
        let parsed: Easing = serde_json::from_str("\"ease-out\"").expect("deserialize");
        assert_eq!(parsed, Easing::EaseOut);
    }
}
