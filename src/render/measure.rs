use kurbo::{BezPath, ParamCurveArclen};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Arc length accuracy in pixels used when measuring curve segments.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Font settings relevant to width measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

fn default_font_size_px() -> f64 {
    12.0
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size_px: default_font_size_px(),
        }
    }
}

impl TextStyle {
    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }
}

/// Rendered width of a text string.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, style: &TextStyle) -> ChartResult<f64>;
}

/// Total length of an SVG path string.
pub trait PathLengthMeasurer {
    fn total_length(&self, path: &str) -> ChartResult<f64>;
}

/// Measures path data geometrically by parsing it with `kurbo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KurboPathMeasurer;

impl PathLengthMeasurer for KurboPathMeasurer {
    fn total_length(&self, path: &str) -> ChartResult<f64> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        let bez = BezPath::from_svg(trimmed)
            .map_err(|err| ChartError::Measurement(format!("invalid svg path data: {err}")))?;
        Ok(bez
            .segments()
            .map(|segment| segment.arclen(ARCLEN_ACCURACY))
            .sum())
    }
}

/// Deterministic, backend-independent width estimate.
///
/// Widths are per-glyph multiples of the font size; the result is never
/// narrower than one em.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn text_width(&self, text: &str, style: &TextStyle) -> ChartResult<f64> {
        if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
            return Err(ChartError::Measurement(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(estimate_text_width_px(text, style.font_size_px))
    }
}

fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
