//! Dash-array arithmetic for "draw-in" stroke animation.
//!
//! A stroke is revealed by giving it a dash array whose visible prefix has
//! the revealed length and whose final gap covers the rest of the path. When
//! the stroke already uses a custom dash pattern, the pattern is repeated over
//! the revealed prefix so the dashes do not shift while the line grows.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::path::write_number;
use crate::error::{ChartError, ChartResult};

/// Segment lengths of a base dash pattern, alternating on/off.
pub type DashPattern = SmallVec<[f64; 8]>;

/// Concrete dash array for one animation frame.
///
/// Displays in the CSS/SVG form `"3px, 2px, 0px, 5px"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashArray {
    segments: SmallVec<[f64; 16]>,
}

impl DashArray {
    #[must_use]
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    /// Sum of all segments; equals the path's total length.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.segments.iter().sum()
    }

    /// Length of the trailing segment, i.e. the part still hidden.
    #[must_use]
    pub fn trailing(&self) -> f64 {
        self.segments.last().copied().unwrap_or(0.0)
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.segments.len() * 8);
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_number(&mut out, *segment);
            out.push_str("px");
        }
        f.write_str(&out)
    }
}

fn is_usable_pattern(pattern: &[f64]) -> bool {
    !pattern.is_empty()
        && pattern.iter().all(|v| v.is_finite() && *v >= 0.0)
        && pattern.iter().sum::<f64>() > 0.0
}

/// Dash array revealing the first `revealed` pixels of a `total` long path
/// while keeping `base` as the visible dash pattern.
///
/// The result repeats `base` as many whole times as fits, then the prefix of
/// `base` that fits in the remainder (with a final partial segment), then a
/// trailing gap. The trailing gap is `[0, rest]` when the emitted remainder
/// has an even number of segments so that `rest` always lands on an "off"
/// slot. Odd-length patterns get a zero-length gap per repetition to keep
/// on/off phase stable.
///
/// `revealed` is clamped to `[0, total]`. An unusable `base` (empty,
/// negative, non-finite or summing to zero) falls back to a solid reveal.
#[must_use]
pub fn compute_dash_array(revealed: f64, total: f64, base: &[f64]) -> DashArray {
    let total = if total.is_finite() { total.max(0.0) } else { 0.0 };
    let revealed = if revealed.is_finite() {
        revealed.clamp(0.0, total)
    } else {
        0.0
    };
    let rest = total - revealed;

    let mut segments = SmallVec::new();
    if !is_usable_pattern(base) {
        segments.push(revealed);
        segments.push(rest);
        return DashArray { segments };
    }

    let unit: f64 = base.iter().sum();
    let repeat_count = (revealed / unit).floor() as usize;
    let remainder = (revealed - repeat_count as f64 * unit).max(0.0);
    let pad_odd = base.len() % 2 != 0;

    for _ in 0..repeat_count {
        segments.extend_from_slice(base);
        if pad_odd {
            segments.push(0.0);
        }
    }

    let mut sum = 0.0;
    let mut emitted = None;
    for (i, segment) in base.iter().enumerate() {
        if sum + segment > remainder {
            segments.extend_from_slice(&base[..i]);
            segments.push(remainder - sum);
            emitted = Some(i + 1);
            break;
        }
        sum += segment;
    }
    let emitted = match emitted {
        Some(count) => count,
        None => {
            // Rounding left the remainder at a full unit.
            segments.extend_from_slice(base);
            base.len()
        }
    };

    if emitted % 2 == 0 {
        segments.push(0.0);
    }
    segments.push(rest);

    DashArray { segments }
}

/// Two-segment dash array for a solid stroke growing to `total`.
///
/// A zero `total` yields `0px 1px` so the stroke starts fully hidden even
/// before the path length is known.
#[must_use]
pub fn solid_grow_dash_array(revealed: f64, total: f64) -> String {
    let total = if total.is_finite() { total.max(0.0) } else { 0.0 };
    let revealed = if revealed.is_finite() {
        revealed.clamp(0.0, total)
    } else {
        0.0
    };
    let hidden = if total == 0.0 { 1.0 } else { total - revealed };

    let mut out = String::with_capacity(24);
    write_number(&mut out, revealed);
    out.push_str("px ");
    write_number(&mut out, hidden);
    out.push_str("px");
    out
}

/// Parses a stroke dash attribute such as `"5 3"`, `"5, 3"` or `"5px,3px"`.
pub fn parse_dash_pattern(input: &str) -> ChartResult<DashPattern> {
    let mut pattern = DashPattern::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let number = token.strip_suffix("px").unwrap_or(token);
        let value: f64 = number.parse().map_err(|_| {
            ChartError::InvalidData(format!("invalid dash segment `{token}`"))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "dash segment `{token}` must be finite and >= 0"
            )));
        }
        pattern.push(value);
    }
    Ok(pattern)
}
