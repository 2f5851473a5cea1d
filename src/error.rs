use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid scale domain: start={start}, end={end}")]
    InvalidScaleDomain { start: f64, end: f64 },

    #[error("measurement failed: {0}")]
    Measurement(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
