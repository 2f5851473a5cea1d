use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, ClipRect, PathPrimitive, Primitive, TextPathPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one render pass.
///
/// Backends draw paths first, then circles, then text paths, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub clip_rects: Vec<ClipRect>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub text_paths: Vec<TextPathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            clip_rects: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            text_paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clip_rect(mut self, clip: ClipRect) -> Self {
        self.clip_rects.push(clip);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text_path(mut self, text_path: TextPathPrimitive) -> Self {
        self.text_paths.push(text_path);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Path(path) => self.paths.push(path),
            Primitive::Circle(circle) => self.circles.push(circle),
            Primitive::TextPath(text_path) => self.text_paths.push(text_path),
            Primitive::Text(text) => self.texts.push(text),
        }
    }

    /// Appends every primitive of `other`, keeping this frame's viewport.
    pub fn extend(&mut self, other: RenderFrame) {
        self.clip_rects.extend(other.clip_rects);
        self.paths.extend(other.paths);
        self.circles.extend(other.circles);
        self.text_paths.extend(other.text_paths);
        self.texts.extend(other.texts);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for clip in &self.clip_rects {
            clip.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text_path in &self.text_paths {
            text_path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.circles.is_empty()
            && self.text_paths.is_empty()
            && self.texts.is_empty()
    }
}
