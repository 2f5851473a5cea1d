mod config;
mod instance_id;
mod line_series;
mod radial_bar;
mod record;

pub use config::{
    AnimationConfig, DotStyle, LINE_SERIES_CONFIG_JSON_SCHEMA_V1, LabelStyle, LineSeriesConfig,
    PointLabelStyle, RADIAL_BAR_CONFIG_JSON_SCHEMA_V1, RadialBarConfig, SectorStyle,
};
pub use instance_id::InstanceIds;
pub use line_series::{DotProps, LineSeries, PlotArea, PointLabelProps};
pub use radial_bar::RadialBarSeries;
pub use record::{DataRecord, record_value, records_from_json};
