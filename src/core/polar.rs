/// Degrees-to-radians factor.
pub const RADIAN: f64 = std::f64::consts::PI / 180.0;

/// Largest angular span a single arc command can express without collapsing
/// into a zero-length arc.
pub const MAX_ARC_SPAN: f64 = 359.999;

/// Point on a circle for an angle in degrees.
///
/// Angles grow counter-clockwise on screen (SVG y points down, hence the
/// negated angle).
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (
        cx + radius * (-RADIAN * angle).cos(),
        cy + radius * (-RADIAN * angle).sin(),
    )
}

/// Signed span from `start` to `end`, clamped to [`MAX_ARC_SPAN`].
#[must_use]
pub fn delta_angle(start: f64, end: f64) -> f64 {
    let delta = end - start;
    delta.signum() * delta.abs().min(MAX_ARC_SPAN)
}
