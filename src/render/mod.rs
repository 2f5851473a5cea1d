mod element;
mod frame;
mod measure;
mod null_renderer;
mod primitives;
mod svg;

pub use element::{ElementOption, ElementRenderFn};
pub use frame::RenderFrame;
pub use measure::{
    EstimatedTextMeasurer, KurboPathMeasurer, PathLengthMeasurer, TextMeasurer, TextStyle,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, ClipRect, Color, PathPrimitive, Primitive, TextHAlign, TextPathPrimitive,
    TextPrimitive,
};
pub use svg::{SvgRenderer, render_svg_document};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from geometry and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
