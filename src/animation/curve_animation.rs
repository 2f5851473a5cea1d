use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::animation::dash::{
    DashPattern, compute_dash_array, parse_dash_pattern, solid_grow_dash_array,
};
use crate::animation::timeline::Timeline;
use crate::render::PathLengthMeasurer;

/// Multiplier applied when a retrigger measures the same length as before,
/// so hosts that diff on the length value still observe a change.
pub const RETRIGGER_LENGTH_FACTOR: f64 = 1.000_000_1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// No usable length yet; nothing can animate.
    Idle,
    /// Waiting on the path length measurement.
    Measuring,
    Animating,
    Settled,
}

/// Stroke attributes for one rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeFrame {
    /// Value for the `stroke-dasharray` attribute, `None` for a plain stroke.
    pub dash_array: Option<String>,
    /// Revealed length in pixels.
    pub progress: f64,
    pub is_finished: bool,
}

/// Draw-in animation state of one mounted curve.
///
/// The host owns this value and drives it explicitly: [`mount`] once the path
/// exists, [`retrigger`] when the animation identity changes, and
/// [`frame`]/[`frame_at`] for every tick. Besides the cached length and the
/// finished flag every frame is a pure function of its progress.
///
/// [`mount`]: CurveAnimation::mount
/// [`retrigger`]: CurveAnimation::retrigger
/// [`frame`]: CurveAnimation::frame
/// [`frame_at`]: CurveAnimation::frame_at
#[derive(Debug, Clone, PartialEq)]
pub struct CurveAnimation {
    active: bool,
    stroke_dasharray: Option<String>,
    base_pattern: Option<DashPattern>,
    phase: AnimationPhase,
    total_length: f64,
    progress: f64,
    generation: u64,
    token: Option<u64>,
    is_finished: bool,
}

impl CurveAnimation {
    /// Creates the state for a curve.
    ///
    /// `stroke_dasharray` is the stroke's configured dash attribute, if any.
    /// When it parses into a usable pattern the draw-in preserves it.
    #[must_use]
    pub fn new(active: bool, stroke_dasharray: Option<&str>) -> Self {
        let base_pattern = stroke_dasharray.and_then(|raw| match parse_dash_pattern(raw) {
            Ok(pattern) if !pattern.is_empty() => Some(pattern),
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "ignoring unparsable stroke dash pattern for animation");
                None
            }
        });

        Self {
            active,
            stroke_dasharray: stroke_dasharray.map(str::to_owned),
            base_pattern,
            phase: AnimationPhase::Idle,
            total_length: 0.0,
            progress: 0.0,
            generation: 0,
            token: None,
            is_finished: true,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Incremented on every accepted retrigger.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Whether a draw-in can run, i.e. a positive length is known.
    #[must_use]
    pub fn can_begin(&self) -> bool {
        self.total_length > 0.0
    }

    /// Measures the freshly mounted path and arms the animation.
    pub fn mount(&mut self, token: u64, measurer: &dyn PathLengthMeasurer, path: &str) {
        self.token = Some(token);
        if !self.active {
            self.phase = AnimationPhase::Settled;
            self.is_finished = true;
            return;
        }

        self.phase = AnimationPhase::Measuring;
        self.total_length = measure_length(measurer, path);
        self.arm();
        debug!(
            token,
            total_length = self.total_length,
            phase = ?self.phase,
            "curve animation mounted"
        );
    }

    /// Restarts the draw-in when `token` differs from the current one.
    ///
    /// Returns `true` when the animation was restarted.
    pub fn retrigger(
        &mut self,
        token: u64,
        measurer: &dyn PathLengthMeasurer,
        path: &str,
    ) -> bool {
        if self.token == Some(token) {
            return false;
        }
        self.token = Some(token);

        self.phase = AnimationPhase::Measuring;
        let measured = measure_length(measurer, path);
        self.total_length = if measured == self.total_length {
            measured * RETRIGGER_LENGTH_FACTOR
        } else {
            measured
        };
        self.generation += 1;

        if self.active {
            self.arm();
        } else {
            self.phase = AnimationPhase::Settled;
            self.is_finished = true;
        }
        debug!(
            token,
            generation = self.generation,
            total_length = self.total_length,
            "curve animation retriggered"
        );
        true
    }

    fn arm(&mut self) {
        self.progress = 0.0;
        if self.can_begin() {
            self.phase = AnimationPhase::Animating;
            self.is_finished = false;
        } else {
            self.phase = AnimationPhase::Idle;
            self.is_finished = true;
        }
    }

    /// Stroke attributes with `progress` pixels revealed.
    ///
    /// Progress is clamped to `[0, total_length]` and never moves backwards
    /// within one run.
    pub fn frame(&mut self, progress: f64) -> StrokeFrame {
        if !self.active {
            return StrokeFrame {
                dash_array: self.stroke_dasharray.clone(),
                progress: self.total_length,
                is_finished: true,
            };
        }

        let requested = if progress.is_finite() { progress } else { 0.0 };
        if self.phase == AnimationPhase::Animating {
            self.progress = requested.clamp(0.0, self.total_length).max(self.progress);
            if self.progress >= self.total_length {
                self.phase = AnimationPhase::Settled;
                self.is_finished = true;
                trace!(generation = self.generation, "curve animation settled");
            }
        }

        let dash_array = match (&self.base_pattern, self.can_begin()) {
            (Some(pattern), true) => {
                Some(compute_dash_array(self.progress, self.total_length, pattern).to_string())
            }
            (Some(_), false) => self.stroke_dasharray.clone(),
            (None, _) => Some(solid_grow_dash_array(self.progress, self.total_length)),
        };

        StrokeFrame {
            dash_array,
            progress: self.progress,
            is_finished: self.is_finished,
        }
    }

    /// Frame for a clock reading, `elapsed_ms` since the run was scheduled.
    pub fn frame_at(&mut self, timeline: &Timeline, elapsed_ms: f64) -> StrokeFrame {
        let progress = timeline.progress_at(elapsed_ms) * self.total_length;
        self.frame(progress)
    }
}

fn measure_length(measurer: &dyn PathLengthMeasurer, path: &str) -> f64 {
    match measurer.total_length(path) {
        Ok(length) if length.is_finite() && length > 0.0 => length,
        Ok(_) => 0.0,
        Err(err) => {
            warn!(error = %err, "path length measurement failed, treating as 0");
            0.0
        }
    }
}
