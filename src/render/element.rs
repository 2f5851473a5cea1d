use std::fmt;
use std::sync::Arc;

use crate::render::Primitive;

/// Custom drawing callback receiving the resolved element props.
pub type ElementRenderFn<P> = Arc<dyn Fn(&P) -> Vec<Primitive> + Send + Sync>;

/// How a sub-element (dot, label, background) is drawn.
///
/// `C` is the style configuration of the built-in element, `P` the props
/// resolved for one concrete element instance.
pub enum ElementOption<C, P> {
    /// Nothing is drawn.
    Hidden,
    /// The built-in element with this style.
    Config(C),
    /// Caller-supplied drawing.
    RenderFn(ElementRenderFn<P>),
    /// Fixed primitives emitted as-is, independent of the props.
    Prebuilt(Vec<Primitive>),
}

impl<C, P> ElementOption<C, P> {
    #[must_use]
    pub fn render_fn(render: impl Fn(&P) -> Vec<Primitive> + Send + Sync + 'static) -> Self {
        Self::RenderFn(Arc::new(render))
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Primitives for one element instance; `draw` renders the built-in
    /// element from its style.
    pub fn resolve(
        &self,
        props: &P,
        draw: impl FnOnce(&C, &P) -> Vec<Primitive>,
    ) -> Vec<Primitive> {
        match self {
            Self::Hidden => Vec::new(),
            Self::Config(config) => draw(config, props),
            Self::RenderFn(render) => render(props),
            Self::Prebuilt(primitives) => primitives.clone(),
        }
    }
}

impl<C: Default, P> Default for ElementOption<C, P> {
    fn default() -> Self {
        Self::Config(C::default())
    }
}

impl<C: Clone, P> Clone for ElementOption<C, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Hidden => Self::Hidden,
            Self::Config(config) => Self::Config(config.clone()),
            Self::RenderFn(render) => Self::RenderFn(Arc::clone(render)),
            Self::Prebuilt(primitives) => Self::Prebuilt(primitives.clone()),
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for ElementOption<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("Hidden"),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
            Self::RenderFn(_) => f.write_str("RenderFn(..)"),
            Self::Prebuilt(primitives) => f.debug_tuple("Prebuilt").field(primitives).finish(),
        }
    }
}

impl<C, P> From<Option<C>> for ElementOption<C, P> {
    fn from(value: Option<C>) -> Self {
        value.map_or(Self::Hidden, Self::Config)
    }
}
