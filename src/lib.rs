//! chart-shapes: geometry and path generation for declarative charts.
//!
//! The crate turns data rows into screen-space points, interpolated SVG
//! curve paths, radial sectors with arc-aligned labels and funnel
//! trapezoids, and drives "draw-in" stroke animation through dash arrays.
//! Rendering goes through a backend-agnostic `RenderFrame`; hosts own all
//! retained state (animation, instance ids) explicitly.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineSeries, LineSeriesConfig, RadialBarConfig, RadialBarSeries};
pub use error::{ChartError, ChartResult};
