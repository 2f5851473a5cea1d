use std::cell::Cell;

use chart_shapes::animation::{
    AnimationPhase, CurveAnimation, Easing, RETRIGGER_LENGTH_FACTOR, Timeline,
};
use chart_shapes::render::{KurboPathMeasurer, PathLengthMeasurer};
use chart_shapes::{ChartError, ChartResult};

struct FixedLength(f64);

impl PathLengthMeasurer for FixedLength {
    fn total_length(&self, _path: &str) -> ChartResult<f64> {
        Ok(self.0)
    }
}

struct Unmeasurable;

impl PathLengthMeasurer for Unmeasurable {
    fn total_length(&self, _path: &str) -> ChartResult<f64> {
        Err(ChartError::Measurement("detached".to_owned()))
    }
}

struct CountingMeasurer {
    calls: Cell<usize>,
}

impl PathLengthMeasurer for CountingMeasurer {
    fn total_length(&self, _path: &str) -> ChartResult<f64> {
        self.calls.set(self.calls.get() + 1);
        Ok(10.0)
    }
}

#[test]
fn mount_measures_and_starts_animating() {
    let mut animation = CurveAnimation::new(true, None);
    assert_eq!(animation.phase(), AnimationPhase::Idle);

    animation.mount(1, &KurboPathMeasurer, "M0,0L30,40");
    assert_eq!(animation.phase(), AnimationPhase::Animating);
    assert!((animation.total_length() - 50.0).abs() <= 1e-9);
    assert!(animation.can_begin());
    assert!(!animation.is_finished());

    let frame = animation.frame(20.0);
    assert_eq!(frame.dash_array.as_deref(), Some("20px 30px"));
    assert!(!frame.is_finished);

    let frame = animation.frame(50.0);
    assert_eq!(frame.dash_array.as_deref(), Some("50px 0px"));
    assert!(frame.is_finished);
    assert_eq!(animation.phase(), AnimationPhase::Settled);
}

#[test]
fn progress_never_moves_backwards_within_a_run() {
    let mut animation = CurveAnimation::new(true, None);
    animation.mount(1, &FixedLength(100.0), "M0,0L100,0");

    animation.frame(60.0);
    let frame = animation.frame(10.0);
    assert_eq!(frame.progress, 60.0);
    assert_eq!(frame.dash_array.as_deref(), Some("60px 40px"));
}

#[test]
fn custom_dash_pattern_is_preserved_while_drawing() {
    let mut animation = CurveAnimation::new(true, Some("3 2"));
    animation.mount(1, &FixedLength(10.0), "M0,0L10,0");

    let frame = animation.frame(5.0);
    assert_eq!(frame.dash_array.as_deref(), Some("3px, 2px, 0px, 5px"));
}

#[test]
fn custom_pattern_passes_through_without_length() {
    let mut animation = CurveAnimation::new(true, Some("3 2"));
    animation.mount(1, &FixedLength(0.0), "M0,0");

    assert_eq!(animation.phase(), AnimationPhase::Idle);
    assert!(!animation.can_begin());
    let frame = animation.frame(5.0);
    assert_eq!(frame.dash_array.as_deref(), Some("3 2"));
}

#[test]
fn measurement_failure_is_treated_as_zero_length() {
    let mut animation = CurveAnimation::new(true, None);
    animation.mount(1, &Unmeasurable, "M0,0L10,0");

    assert_eq!(animation.total_length(), 0.0);
    assert_eq!(animation.phase(), AnimationPhase::Idle);
    let frame = animation.frame(3.0);
    assert_eq!(frame.dash_array.as_deref(), Some("0px 1px"));
}

#[test]
fn inactive_animation_returns_configured_pattern() {
    let mut animation = CurveAnimation::new(false, Some("4 4"));
    animation.mount(1, &FixedLength(80.0), "M0,0L80,0");

    assert_eq!(animation.phase(), AnimationPhase::Settled);
    let frame = animation.frame(0.0);
    assert_eq!(frame.dash_array.as_deref(), Some("4 4"));
    assert!(frame.is_finished);

    let mut solid = CurveAnimation::new(false, None);
    solid.mount(1, &FixedLength(80.0), "M0,0L80,0");
    assert_eq!(solid.frame(0.0).dash_array, None);
}

#[test]
fn retrigger_with_same_length_still_changes_tracked_length() {
    let mut animation = CurveAnimation::new(true, None);
    animation.mount(1, &FixedLength(100.0), "M0,0L100,0");
    animation.frame(100.0);
    assert_eq!(animation.phase(), AnimationPhase::Settled);

    assert!(animation.retrigger(2, &FixedLength(100.0), "M0,0L100,0"));
    assert_ne!(animation.total_length(), 100.0);
    assert_eq!(animation.total_length(), 100.0 * RETRIGGER_LENGTH_FACTOR);
    assert_eq!(animation.generation(), 1);
    assert_eq!(animation.phase(), AnimationPhase::Animating);
    assert_eq!(animation.progress(), 0.0);

    assert!(animation.retrigger(3, &FixedLength(40.0), "M0,0L40,0"));
    assert_eq!(animation.total_length(), 40.0);
    assert_eq!(animation.generation(), 2);
}

#[test]
fn retrigger_with_same_token_is_a_no_op() {
    let measurer = CountingMeasurer {
        calls: Cell::new(0),
    };
    let mut animation = CurveAnimation::new(true, None);
    animation.mount(7, &measurer, "M0,0L10,0");
    animation.frame(4.0);

    assert!(!animation.retrigger(7, &measurer, "M0,0L10,0"));
    assert_eq!(measurer.calls.get(), 1);
    assert_eq!(animation.generation(), 0);
    assert_eq!(animation.progress(), 4.0);
}

#[test]
fn timeline_drives_frames_through_easing() {
    let timeline = Timeline::new(100.0, 1000.0, Easing::Linear).expect("timeline");
    let mut animation = CurveAnimation::new(true, None);
    animation.mount(1, &FixedLength(200.0), "M0,0L200,0");

    assert_eq!(animation.frame_at(&timeline, 0.0).progress, 0.0);
    assert_eq!(animation.frame_at(&timeline, 600.0).progress, 100.0);
    let last = animation.frame_at(&timeline, 1_100.0);
    assert_eq!(last.progress, 200.0);
    assert!(last.is_finished);
}
