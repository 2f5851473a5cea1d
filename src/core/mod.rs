pub mod composer;
pub mod curve;
pub mod label_arc;
pub mod line_path;
pub mod path;
pub mod polar;
pub mod scale;
pub mod sector;
pub mod trapezoid;
pub mod types;

pub use composer::{CategoryAxis, category_coordinate, compose_points};
pub use curve::{CurveGenerator, CurveType};
pub use label_arc::{
    DEFAULT_LABEL_OFFSET_RADIUS, compute_label_arc, label_arc_for_text, label_radius,
};
pub use line_path::build_path;
pub use path::{PathWriter, fmt_number};
pub use polar::{RADIAN, polar_to_cartesian};
pub use scale::{BandScale, LinearScale, Scale};
pub use sector::{
    SectorDescriptor, SectorEntry, SectorLayout, background_sectors, compute_sectors, sector_path,
};
pub use trapezoid::{Trapezoid, trapezoid_path};
pub use types::{Baseline, BaselineKind, Layout, Point, Viewport, is_defined};
