use serde::{Deserialize, Serialize};

use crate::animation::ease::Easing;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 1500.0;

/// Maps an external clock (milliseconds since the animation was scheduled)
/// into eased progress in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub begin_ms: f64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration_ms() -> f64 {
    DEFAULT_ANIMATION_DURATION_MS
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            begin_ms: 0.0,
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl Timeline {
    pub fn new(begin_ms: f64, duration_ms: f64, easing: Easing) -> ChartResult<Self> {
        Self {
            begin_ms,
            duration_ms,
            easing,
        }
        .validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.begin_ms.is_finite() || self.begin_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "animation begin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Eased progress at `elapsed_ms`: 0 before `begin_ms`, 1 once the
    /// duration has passed. A zero duration jumps straight to 1.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() {
            return if elapsed_ms > 0.0 { 1.0 } else { 0.0 };
        }
        let local = elapsed_ms - self.begin_ms;
        if local < 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return 1.0;
        }
        self.easing.apply(local / self.duration_ms)
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.begin_ms + self.duration_ms
    }
}
