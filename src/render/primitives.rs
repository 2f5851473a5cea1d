use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color `{input}` must start with `#`"))
        })?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be ascii hex"
            )));
        }

        let channel = |hex: &str| -> ChartResult<f64> {
            u8::from_str_radix(hex, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{input}`")))
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| {
                    let c = &digits[i..=i];
                    channel(&format!("{c}{c}"))
                };
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "color `{input}` must have 3, 6 or 8 hex digits"
            ))),
        }
    }

    /// CSS hex form; the alpha byte is only written when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        );
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

fn validate_optional_color(color: Option<Color>) -> ChartResult<()> {
    color.map_or(Ok(()), Color::validate)
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width < 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

/// Draw command for one SVG path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub d: String,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub clip_path_id: Option<String>,
    pub class_name: Option<String>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            stroke: None,
            fill: None,
            stroke_width: 1.0,
            stroke_dasharray: None,
            clip_path_id: None,
            class_name: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_dasharray(mut self, dasharray: Option<String>) -> Self {
        self.stroke_dasharray = dasharray;
        self
    }

    #[must_use]
    pub fn with_clip_path(mut self, clip_path_id: Option<String>) -> Self {
        self.clip_path_id = clip_path_id;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.d.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "path data must not be empty".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_optional_color(self.stroke)?;
        validate_optional_color(self.fill)
    }
}

/// Draw command for one dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub clip_path_id: Option<String>,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            clip_path_id: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_clip_path(mut self, clip_path_id: Option<String>) -> Self {
        self.clip_path_id = clip_path_id;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_optional_color(self.stroke)?;
        validate_optional_color(self.fill)
    }
}

/// Label drawn along a path, rendered as `<textPath>`.
///
/// `d` is emitted once under `path_id` and referenced by the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPathPrimitive {
    pub path_id: String,
    pub d: String,
    pub text: String,
    pub font_size_px: f64,
    pub fill: Color,
}

impl TextPathPrimitive {
    #[must_use]
    pub fn new(
        path_id: impl Into<String>,
        d: impl Into<String>,
        text: impl Into<String>,
        font_size_px: f64,
        fill: Color,
    ) -> Self {
        Self {
            path_id: path_id.into(),
            d: d.into(),
            text: text.into(),
            font_size_px,
            fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.path_id.is_empty() {
            return Err(ChartError::InvalidData(
                "text path id must not be empty".to_owned(),
            ));
        }
        if self.d.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "text path data must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal anchor of a text label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextHAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextHAlign {
    /// SVG `text-anchor` keyword.
    #[must_use]
    pub const fn as_svg_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Free-standing label at a pixel position, rendered as `<text>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub fill: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        fill: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            fill,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Rectangular clip region referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipRect {
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "clip rect id must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "clip rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "clip rect size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Any drawable primitive, used where callers produce mixed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    Path(PathPrimitive),
    Circle(CirclePrimitive),
    TextPath(TextPathPrimitive),
    Text(TextPrimitive),
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

impl From<CirclePrimitive> for Primitive {
    fn from(value: CirclePrimitive) -> Self {
        Self::Circle(value)
    }
}

impl From<TextPathPrimitive> for Primitive {
    fn from(value: TextPathPrimitive) -> Self {
        Self::TextPath(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}
