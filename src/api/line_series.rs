use tracing::{debug, trace};

use crate::animation::{CurveAnimation, StrokeFrame, Timeline};
use crate::api::config::{DotStyle, LineSeriesConfig, PointLabelStyle};
use crate::api::instance_id::InstanceIds;
use crate::core::{CategoryAxis, Point, Scale, Viewport, build_path, compose_points, fmt_number};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, ClipRect, Color, ElementOption, PathPrimitive, PathLengthMeasurer, Primitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

/// Props of one resolved line dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotProps {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub index: usize,
    pub value: Option<f64>,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Props of one resolved value label.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabelProps {
    /// Anchor point of the label, already lifted above the data point.
    pub x: f64,
    pub y: f64,
    pub index: usize,
    pub value: f64,
    pub text: String,
    pub font_size_px: f64,
    pub fill: Color,
}

/// Pixel rectangle a series is clipped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A line series: a curve through composed points, optional dots and a
/// draw-in animation.
///
/// The host owns the series and drives it with [`LineSeries::mount`],
/// [`LineSeries::retrigger`] and [`LineSeries::render`].
#[derive(Debug, Clone)]
pub struct LineSeries {
    id: String,
    config: LineSeriesConfig,
    viewport: Viewport,
    plot_area: Option<PlotArea>,
    dot: ElementOption<DotStyle, DotProps>,
    label: ElementOption<PointLabelStyle, PointLabelProps>,
    animation: CurveAnimation,
}

impl LineSeries {
    pub fn new(
        config: LineSeriesConfig,
        viewport: Viewport,
        ids: &mut InstanceIds,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        let animation = CurveAnimation::new(
            config.animation.active,
            config.stroke_dasharray.as_deref(),
        );
        let dot = ElementOption::from(config.dot);
        let label = ElementOption::from(config.label);
        Ok(Self {
            id: ids.next_id(),
            config,
            viewport,
            plot_area: None,
            dot,
            label,
            animation,
        })
    }

    #[must_use]
    pub fn with_plot_area(mut self, plot_area: PlotArea) -> Self {
        self.plot_area = Some(plot_area);
        self
    }

    /// Replaces how dots are drawn.
    #[must_use]
    pub fn with_dot(mut self, dot: ElementOption<DotStyle, DotProps>) -> Self {
        self.dot = dot;
        self
    }

    /// Replaces how value labels are drawn.
    #[must_use]
    pub fn with_label(mut self, label: ElementOption<PointLabelStyle, PointLabelProps>) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &LineSeriesConfig {
        &self.config
    }

    #[must_use]
    pub fn animation(&self) -> &CurveAnimation {
        &self.animation
    }

    #[must_use]
    pub fn timeline(&self) -> Timeline {
        self.config.animation.timeline
    }

    /// Id of the clip path referenced by the series' primitives.
    #[must_use]
    pub fn clip_path_id(&self) -> String {
        format!("clipPath-{}", self.id)
    }

    /// Composes `rows` into points using the configured layout: horizontal
    /// series put categories on x, vertical series on y.
    pub fn compose<'r, R>(
        &self,
        rows: &'r [R],
        value_of: impl Fn(&R) -> Option<f64>,
        category_axis: CategoryAxis<'_>,
        value_scale: &dyn Scale,
        band_size: f64,
    ) -> Vec<Point<&'r R>> {
        compose_points(
            rows,
            value_of,
            category_axis,
            value_scale,
            self.config.layout,
            band_size,
        )
    }

    /// Curve path for `points` with the configured interpolation.
    #[must_use]
    pub fn curve_path<P>(&self, points: &[Point<P>]) -> String {
        build_path(points, self.config.curve, self.config.connect_nulls, None)
    }

    /// First render with `points`: measures the curve and arms the
    /// animation.
    pub fn mount<P>(&mut self, points: &[Point<P>], token: u64, measurer: &dyn PathLengthMeasurer) {
        let path = self.curve_path(points);
        self.animation.mount(token, measurer, &path);
    }

    /// Restarts the animation when `token` changed. Returns `true` on
    /// restart.
    pub fn retrigger<P>(
        &mut self,
        points: &[Point<P>],
        token: u64,
        measurer: &dyn PathLengthMeasurer,
    ) -> bool {
        let path = self.curve_path(points);
        self.animation.retrigger(token, measurer, &path)
    }

    /// Builds the frame for `points` at `clock_ms` on the animation clock.
    ///
    /// A single point renders as a dot only. Dots and value labels are held
    /// back while the draw-in is still running.
    pub fn render<P>(&mut self, points: &[Point<P>], clock_ms: f64) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        if self.config.hide || points.is_empty() {
            return Ok(frame);
        }

        let clip_path_id = self.config.clip.then(|| self.clip_path_id());
        if let Some(id) = &clip_path_id {
            let area = self.plot_area.unwrap_or(PlotArea {
                x: 0.0,
                y: 0.0,
                width: f64::from(self.viewport.width),
                height: f64::from(self.viewport.height),
            });
            frame.clip_rects.push(ClipRect::new(
                id.clone(),
                area.x,
                area.y,
                area.width,
                area.height,
            ));
        }

        let has_single_point = points.len() == 1;
        if !has_single_point {
            let path = self.curve_path(points);
            let stroke = self
                .animation
                .frame_at(&self.config.animation.timeline, clock_ms);
            trace!(
                series = %self.id,
                progress = stroke.progress,
                finished = stroke.is_finished,
                "line curve frame"
            );
            if !path.is_empty() {
                frame.paths.push(self.curve_primitive(path, stroke, clip_path_id.clone()));
            }
        }

        let animating = self.animation.is_active() && !self.animation.is_finished();
        if !animating || has_single_point {
            let dot = if has_single_point && self.dot.is_hidden() {
                ElementOption::Config(DotStyle::default())
            } else {
                self.dot.clone()
            };
            for primitive in self.dots(points, &dot, clip_path_id.as_deref()) {
                frame.push(primitive);
            }
        }

        if !animating {
            for primitive in self.labels(points) {
                frame.push(primitive);
            }
        }

        debug!(
            series = %self.id,
            paths = frame.paths.len(),
            dots = frame.circles.len(),
            labels = frame.texts.len(),
            "line series rendered"
        );
        Ok(frame)
    }

    fn curve_primitive(
        &self,
        path: String,
        stroke: StrokeFrame,
        clip_path_id: Option<String>,
    ) -> PathPrimitive {
        PathPrimitive::new(path)
            .with_stroke(self.config.stroke, self.config.stroke_width)
            .with_dasharray(stroke.dash_array)
            .with_clip_path(clip_path_id)
            .with_class("chart-line-curve")
    }

    fn dots<P>(
        &self,
        points: &[Point<P>],
        option: &ElementOption<DotStyle, DotProps>,
        clip_path_id: Option<&str>,
    ) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let Some((cx, cy)) = point.coords() else {
                continue;
            };
            let style = match option {
                ElementOption::Config(style) => *style,
                _ => DotStyle::default(),
            };
            let props = DotProps {
                cx,
                cy,
                r: style.r,
                index,
                value: point.value,
                fill: style.fill.unwrap_or(self.config.fill),
                stroke: style.stroke.unwrap_or(self.config.stroke),
                stroke_width: style.stroke_width.unwrap_or(self.config.stroke_width),
            };
            out.extend(option.resolve(&props, |_, props| {
                vec![
                    CirclePrimitive::new(props.cx, props.cy, props.r)
                        .with_fill(props.fill)
                        .with_stroke(props.stroke, props.stroke_width)
                        .with_clip_path(clip_path_id.map(str::to_owned))
                        .into(),
                ]
            }));
        }
        out
    }

    fn labels<P>(&self, points: &[Point<P>]) -> Vec<Primitive> {
        if self.label.is_hidden() {
            return Vec::new();
        }
        let style = match &self.label {
            ElementOption::Config(style) => *style,
            _ => PointLabelStyle::default(),
        };

        let mut out = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let (Some((x, y)), Some(value)) = (point.coords(), point.value) else {
                continue;
            };
            let props = PointLabelProps {
                x,
                y: y - style.offset,
                index,
                value,
                text: fmt_number(value),
                font_size_px: style.font_size_px,
                fill: style.fill.unwrap_or(self.config.stroke),
            };
            out.extend(self.label.resolve(&props, |_, props| {
                vec![
                    TextPrimitive::new(
                        props.text.clone(),
                        props.x,
                        props.y,
                        props.font_size_px,
                        props.fill,
                        TextHAlign::Center,
                    )
                    .into(),
                ]
            }));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::LineSeries;
    use crate::api::{AnimationConfig, InstanceIds, LineSeriesConfig};
    use crate::core::{Point, Viewport};
    use crate::render::KurboPathMeasurer;

    #[test]
    fn single_point_renders_dot_only() {
        let mut ids = InstanceIds::new("line");
        let config = LineSeriesConfig::default().with_dot(None);
        let mut series =
            LineSeries::new(config, Viewport::new(100, 100), &mut ids).expect("series");
        let points = [Point::new(10.0, 20.0)];
        series.mount(&points, 1, &KurboPathMeasurer);

        let frame = series.render(&points, 0.0).expect("render");
        assert!(frame.paths.is_empty());
        assert_eq!(frame.circles.len(), 1);
        assert_eq!(frame.circles[0].r, 3.0);
    }

    #[test]
    fn hidden_series_renders_nothing() {
        let mut ids = InstanceIds::default();
        let mut config = LineSeriesConfig::default().with_animation(AnimationConfig::disabled());
        config.hide = true;
        let mut series = LineSeries::new(config, Viewport::new(10, 10), &mut ids).expect("series");
        let frame = series
            .render(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], 0.0)
            .expect("render");
        assert!(frame.is_empty());
    }
}
