use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::animation::{Timeline, parse_dash_pattern};
use crate::core::{CurveType, DEFAULT_LABEL_OFFSET_RADIUS, Layout, SectorLayout};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const LINE_SERIES_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const RADIAL_BAR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Draw-in animation settings of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub timeline: Timeline,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            active: true,
            timeline: Timeline::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            active: false,
            ..Self::default()
        }
    }
}

/// Style of the built-in line dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotStyle {
    #[serde(default = "default_dot_radius")]
    pub r: f64,
    /// Falls back to the series fill when unset.
    #[serde(default)]
    pub fill: Option<Color>,
    /// Falls back to the series stroke when unset.
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            r: default_dot_radius(),
            fill: None,
            stroke: None,
            stroke_width: None,
        }
    }
}

/// Value label drawn above each line point once the draw-in is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLabelStyle {
    #[serde(default = "default_point_label_font_size")]
    pub font_size_px: f64,
    /// Falls back to the series stroke when unset.
    #[serde(default)]
    pub fill: Option<Color>,
    /// Gap between the point and the label baseline, in pixels.
    #[serde(default = "default_point_label_offset")]
    pub offset: f64,
}

impl Default for PointLabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: default_point_label_font_size(),
            fill: None,
            offset: default_point_label_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesConfig {
    #[serde(default)]
    pub curve: CurveType,
    #[serde(default)]
    pub connect_nulls: bool,
    /// Which axis carries the categories when rows are composed.
    #[serde(default)]
    pub layout: Layout,
    #[serde(default = "default_line_stroke")]
    pub stroke: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_line_fill")]
    pub fill: Color,
    #[serde(default)]
    pub stroke_dasharray: Option<String>,
    /// `None` hides the dots.
    #[serde(default = "default_dot")]
    pub dot: Option<DotStyle>,
    /// `None` hides the value labels.
    #[serde(default)]
    pub label: Option<PointLabelStyle>,
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Clip the series to its plot area.
    #[serde(default)]
    pub clip: bool,
    #[serde(default)]
    pub hide: bool,
}

impl Default for LineSeriesConfig {
    fn default() -> Self {
        Self {
            curve: CurveType::default(),
            connect_nulls: false,
            layout: Layout::default(),
            stroke: default_line_stroke(),
            stroke_width: default_stroke_width(),
            fill: default_line_fill(),
            stroke_dasharray: None,
            dot: default_dot(),
            label: None,
            animation: AnimationConfig::default(),
            clip: false,
            hide: false,
        }
    }
}

impl LineSeriesConfig {
    #[must_use]
    pub fn with_curve(mut self, curve: CurveType) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_connect_nulls(mut self, connect_nulls: bool) -> Self {
        self.connect_nulls = connect_nulls;
        self
    }

    #[must_use]
    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_dot(mut self, dot: Option<DotStyle>) -> Self {
        self.dot = dot;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Option<PointLabelStyle>) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(dasharray) = &self.stroke_dasharray {
            parse_dash_pattern(dasharray)
                .map_err(|e| ChartError::InvalidConfig(format!("stroke dasharray: {e}")))?;
        }
        if let Some(label) = self.label {
            if !label.font_size_px.is_finite() || label.font_size_px <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "point label font size must be finite and > 0".to_owned(),
                ));
            }
            if !label.offset.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "point label offset must be finite".to_owned(),
                ));
            }
        }
        if let Some(dot) = self.dot {
            if !dot.r.is_finite() || dot.r <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "dot radius must be finite and > 0".to_owned(),
                ));
            }
        }
        self.animation.timeline.validate()?;
        self.stroke.validate()?;
        self.fill.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        to_json_contract_pretty(LINE_SERIES_CONFIG_JSON_SCHEMA_V1, "line series config", self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        from_json_compat_str::<Self>(
            LINE_SERIES_CONFIG_JSON_SCHEMA_V1,
            "line series config",
            input,
        )?
        .validate()
    }
}

/// Font size and color of radial labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    #[serde(default = "default_label_font_size")]
    pub font_size_px: f64,
    #[serde(default = "default_label_fill")]
    pub fill: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: default_label_font_size(),
            fill: default_label_fill(),
        }
    }
}

/// Paint of one value sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SectorStyle {
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialBarConfig {
    pub layout: SectorLayout,
    #[serde(default = "default_label_offset_radius")]
    pub label_offset_radius: f64,
    #[serde(default)]
    pub has_label: bool,
    #[serde(default)]
    pub has_background: bool,
    #[serde(default)]
    pub label_style: LabelStyle,
    #[serde(default = "default_background_fill")]
    pub background_fill: Color,
    #[serde(default)]
    pub sector: SectorStyle,
}

impl RadialBarConfig {
    #[must_use]
    pub fn new(layout: SectorLayout) -> Self {
        Self {
            layout,
            label_offset_radius: default_label_offset_radius(),
            has_label: false,
            has_background: false,
            label_style: LabelStyle::default(),
            background_fill: default_background_fill(),
            sector: SectorStyle::default(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, has_label: bool) -> Self {
        self.has_label = has_label;
        self
    }

    #[must_use]
    pub fn with_background(mut self, has_background: bool) -> Self {
        self.has_background = has_background;
        self
    }

    #[must_use]
    pub fn with_label_offset_radius(mut self, offset: f64) -> Self {
        self.label_offset_radius = offset;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.layout.validate()?;
        if !self.label_offset_radius.is_finite() {
            return Err(ChartError::InvalidConfig(
                "label offset radius must be finite".to_owned(),
            ));
        }
        if !self.label_style.font_size_px.is_finite() || self.label_style.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        to_json_contract_pretty(RADIAL_BAR_CONFIG_JSON_SCHEMA_V1, "radial bar config", self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        from_json_compat_str::<Self>(RADIAL_BAR_CONFIG_JSON_SCHEMA_V1, "radial bar config", input)?
            .validate()
    }
}

#[derive(Serialize)]
struct JsonContractRef<'a, T> {
    schema_version: u32,
    config: &'a T,
}

#[derive(Deserialize)]
struct JsonContract<T> {
    schema_version: u32,
    config: T,
}

fn to_json_contract_pretty<T: Serialize>(
    schema_version: u32,
    what: &str,
    config: &T,
) -> ChartResult<String> {
    let payload = JsonContractRef {
        schema_version,
        config,
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        ChartError::InvalidData(format!("failed to serialize {what} contract v1: {e}"))
    })
}

/// Accepts either a bare config or the versioned envelope.
fn from_json_compat_str<T: DeserializeOwned>(
    schema_version: u32,
    what: &str,
    input: &str,
) -> ChartResult<T> {
    if let Ok(payload) = serde_json::from_str::<JsonContract<T>>(input) {
        if payload.schema_version != schema_version {
            return Err(ChartError::InvalidData(format!(
                "unsupported {what} schema version: {}",
                payload.schema_version
            )));
        }
        return Ok(payload.config);
    }
    serde_json::from_str::<T>(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse {what} json payload: {e}")))
}

fn default_true() -> bool {
    true
}

fn default_dot_radius() -> f64 {
    3.0
}

fn default_dot() -> Option<DotStyle> {
    Some(DotStyle::default())
}

fn default_line_stroke() -> Color {
    Color::rgb(49.0 / 255.0, 130.0 / 255.0, 189.0 / 255.0)
}

fn default_line_fill() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_point_label_font_size() -> f64 {
    12.0
}

fn default_point_label_offset() -> f64 {
    5.0
}

fn default_label_offset_radius() -> f64 {
    DEFAULT_LABEL_OFFSET_RADIUS
}

fn default_label_font_size() -> f64 {
    10.0
}

fn default_label_fill() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_background_fill() -> Color {
    Color::rgb(241.0 / 255.0, 241.0 / 255.0, 241.0 / 255.0)
}
