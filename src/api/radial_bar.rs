use tracing::{debug, warn};

use crate::api::config::{RadialBarConfig, SectorStyle};
use crate::api::instance_id::InstanceIds;
use crate::core::{
    SectorDescriptor, SectorEntry, Viewport, background_sectors, compute_sectors, fmt_number,
    label_arc_for_text, sector_path,
};
use crate::error::ChartResult;
use crate::render::{
    ElementOption, PathPrimitive, Primitive, RenderFrame, TextMeasurer, TextPathPrimitive,
    TextStyle,
};

/// Radial bar chart: one proportional sector per entry with optional
/// full-track backgrounds and value labels written along arcs.
#[derive(Debug, Clone)]
pub struct RadialBarSeries {
    id: String,
    config: RadialBarConfig,
    viewport: Viewport,
    sector: ElementOption<SectorStyle, SectorDescriptor>,
}

impl RadialBarSeries {
    pub fn new(
        config: RadialBarConfig,
        viewport: Viewport,
        ids: &mut InstanceIds,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        let sector = ElementOption::Config(config.sector);
        Ok(Self {
            id: ids.next_id(),
            config,
            viewport,
            sector,
        })
    }

    /// Replaces how value sectors are drawn.
    #[must_use]
    pub fn with_sector(mut self, sector: ElementOption<SectorStyle, SectorDescriptor>) -> Self {
        self.sector = sector;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &RadialBarConfig {
        &self.config
    }

    /// Id of the arc path the label of entry `index` is written along.
    #[must_use]
    pub fn label_path_id(&self, index: usize) -> String {
        format!("{}-label-{index}", self.id)
    }

    #[must_use]
    pub fn sectors(&self, entries: &[SectorEntry]) -> Vec<SectorDescriptor> {
        compute_sectors(entries, &self.config.layout)
    }

    /// Builds backgrounds, value sectors and labels for `entries`.
    ///
    /// Zero-length sectors and labels without a usable arc are skipped.
    pub fn render(
        &self,
        entries: &[SectorEntry],
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        if entries.is_empty() {
            return Ok(frame);
        }
        let sectors = self.sectors(entries);

        if self.config.has_background {
            for background in background_sectors(&sectors, &self.config.layout) {
                let d = sector_path(&background);
                if d.is_empty() {
                    continue;
                }
                frame.paths.push(
                    PathPrimitive::new(d)
                        .with_fill(self.config.background_fill)
                        .with_class("chart-radial-bar-background"),
                );
            }
        }

        for sector in &sectors {
            for primitive in self.sector.resolve(sector, draw_sector) {
                frame.push(primitive);
            }
        }

        if self.config.has_label {
            let style = TextStyle::default().with_font_size(self.config.label_style.font_size_px);
            for (index, sector) in sectors.iter().enumerate() {
                let text = fmt_number(sector.value);
                let d = label_arc_for_text(
                    sector,
                    &text,
                    &style,
                    measurer,
                    self.config.label_offset_radius,
                );
                if d.is_empty() {
                    warn!(
                        series = %self.id,
                        index,
                        "label arc radius is not positive, skipping label"
                    );
                    continue;
                }
                frame.text_paths.push(TextPathPrimitive::new(
                    self.label_path_id(index),
                    d,
                    text,
                    self.config.label_style.font_size_px,
                    self.config.label_style.fill,
                ));
            }
        }

        debug!(
            series = %self.id,
            sectors = sectors.len(),
            paths = frame.paths.len(),
            labels = frame.text_paths.len(),
            "radial bar rendered"
        );
        Ok(frame)
    }
}

fn draw_sector(style: &SectorStyle, sector: &SectorDescriptor) -> Vec<Primitive> {
    let d = sector_path(sector);
    if d.is_empty() {
        return Vec::new();
    }
    let mut path = PathPrimitive::new(d).with_class("chart-radial-bar-sector");
    path.fill = style.fill;
    if let Some(stroke) = style.stroke {
        path = path.with_stroke(stroke, style.stroke_width.unwrap_or(1.0));
    }
    vec![path.into()]
}
