pub mod curve_animation;
pub mod dash;
pub mod ease;
pub mod timeline;

pub use curve_animation::{AnimationPhase, CurveAnimation, RETRIGGER_LENGTH_FACTOR, StrokeFrame};
pub use dash::{
    DashArray, DashPattern, compute_dash_array, parse_dash_pattern, solid_grow_dash_array,
};
pub use ease::Easing;
pub use timeline::{DEFAULT_ANIMATION_DURATION_MS, Timeline};
