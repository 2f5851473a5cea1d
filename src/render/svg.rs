use std::fmt::Write;

use tracing::trace;

use crate::core::path::write_number;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

/// Serializes frames into standalone SVG documents.
///
/// The last rendered document is kept in [`SvgRenderer::document`].
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = render_svg_document(frame);
        trace!(
            paths = frame.paths.len(),
            circles = frame.circles.len(),
            text_paths = frame.text_paths.len(),
            texts = frame.texts.len(),
            bytes = self.document.len(),
            "svg frame rendered"
        );
        Ok(())
    }
}

/// SVG markup for `frame`. The frame is assumed to be valid.
#[must_use]
pub fn render_svg_document(frame: &RenderFrame) -> String {
    let mut out = String::with_capacity(256 + frame.paths.len() * 96);
    let (width, height) = (frame.viewport.width, frame.viewport.height);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    if !frame.clip_rects.is_empty() || !frame.text_paths.is_empty() {
        out.push_str("<defs>");
        for clip in &frame.clip_rects {
            out.push_str("<clipPath id=\"");
            escape_xml_into(&mut out, &clip.id);
            out.push_str("\"><rect");
            write_attr_number(&mut out, "x", clip.x);
            write_attr_number(&mut out, "y", clip.y);
            write_attr_number(&mut out, "width", clip.width);
            write_attr_number(&mut out, "height", clip.height);
            out.push_str("/></clipPath>");
        }
        for text_path in &frame.text_paths {
            out.push_str("<path id=\"");
            escape_xml_into(&mut out, &text_path.path_id);
            out.push_str("\" d=\"");
            escape_xml_into(&mut out, &text_path.d);
            out.push_str("\"/>");
        }
        out.push_str("</defs>");
    }

    for path in &frame.paths {
        out.push_str("<path");
        if let Some(class_name) = &path.class_name {
            write_attr(&mut out, "class", class_name);
        }
        write_attr(&mut out, "d", &path.d);
        write_paint(&mut out, "fill", path.fill);
        if let Some(stroke) = path.stroke {
            write_attr(&mut out, "stroke", &stroke.to_hex());
            write_attr_number(&mut out, "stroke-width", path.stroke_width);
        }
        if let Some(dasharray) = &path.stroke_dasharray {
            write_attr(&mut out, "stroke-dasharray", dasharray);
        }
        write_clip_path(&mut out, path.clip_path_id.as_deref());
        out.push_str("/>");
    }

    for circle in &frame.circles {
        out.push_str("<circle");
        write_attr_number(&mut out, "cx", circle.cx);
        write_attr_number(&mut out, "cy", circle.cy);
        write_attr_number(&mut out, "r", circle.r);
        write_paint(&mut out, "fill", circle.fill);
        if let Some(stroke) = circle.stroke {
            write_attr(&mut out, "stroke", &stroke.to_hex());
            write_attr_number(&mut out, "stroke-width", circle.stroke_width);
        }
        write_clip_path(&mut out, circle.clip_path_id.as_deref());
        out.push_str("/>");
    }

    for text_path in &frame.text_paths {
        out.push_str("<text");
        write_attr_number(&mut out, "font-size", text_path.font_size_px);
        write_attr(&mut out, "fill", &text_path.fill.to_hex());
        out.push_str("><textPath href=\"#");
        escape_xml_into(&mut out, &text_path.path_id);
        out.push_str("\">");
        escape_xml_into(&mut out, &text_path.text);
        out.push_str("</textPath></text>");
    }

    for text in &frame.texts {
        out.push_str("<text");
        write_attr_number(&mut out, "x", text.x);
        write_attr_number(&mut out, "y", text.y);
        write_attr_number(&mut out, "font-size", text.font_size_px);
        write_attr(&mut out, "fill", &text.fill.to_hex());
        write_attr(&mut out, "text-anchor", text.h_align.as_svg_anchor());
        out.push('>');
        escape_xml_into(&mut out, &text.text);
        out.push_str("</text>");
    }

    out.push_str("</svg>");
    out
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_xml_into(out, value);
    out.push('"');
}

fn write_attr_number(out: &mut String, name: &str, value: f64) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    write_number(out, value);
    out.push('"');
}

fn write_paint(out: &mut String, name: &str, color: Option<Color>) {
    match color {
        Some(color) => write_attr(out, name, &color.to_hex()),
        None => write_attr(out, name, "none"),
    }
}

fn write_clip_path(out: &mut String, clip_path_id: Option<&str>) {
    if let Some(id) = clip_path_id {
        out.push_str(" clip-path=\"url(#");
        escape_xml_into(out, id);
        out.push_str(")\"");
    }
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}
