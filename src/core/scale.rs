use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Domain-to-pixel mapping used by the data composer.
pub trait Scale {
    /// Maps a domain value into pixel space. `None` when the value cannot be
    /// placed (non-finite input, unknown category).
    fn scale(&self, value: f64) -> Option<f64>;

    /// Pixel width of one category slot. Continuous scales report `0`.
    fn bandwidth(&self) -> f64 {
        0.0
    }
}

/// Continuous linear scale between a domain and a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidScaleDomain {
                start: domain_start,
                end: domain_end,
            });
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> Option<f64> {
        self.domain_to_pixel(value).ok()
    }
}

/// Categorical scale splitting a pixel range into equal bands.
///
/// Categories are addressed by index. Padding ratios follow the usual band
/// scale conventions: `padding_inner` shrinks each band relative to its step,
/// `padding_outer` reserves space (in steps) before the first and after the
/// last band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> ChartResult<Self> {
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            count,
            range_start,
            range_end,
            padding_inner: 0.0,
            padding_outer: 0.0,
        })
    }

    pub fn with_padding(mut self, padding_inner: f64, padding_outer: f64) -> ChartResult<Self> {
        if !(0.0..=1.0).contains(&padding_inner)
            || !padding_outer.is_finite()
            || padding_outer < 0.0
        {
            return Err(ChartError::InvalidData(
                "band padding must satisfy inner in [0, 1] and outer >= 0".to_owned(),
            ));
        }
        self.padding_inner = padding_inner;
        self.padding_outer = padding_outer;
        Ok(self)
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(self) -> f64 {
        let slots = (self.count as f64 - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        (self.range_end - self.range_start) / slots
    }

    /// Pixel start of the band at `index`.
    #[must_use]
    pub fn band_start(self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let step = self.step();
        let used = step * (self.count as f64 - self.padding_inner);
        let offset = (self.range_end - self.range_start - used) * 0.5;
        Some(self.range_start + offset + step * index as f64)
    }
}

impl Scale for BandScale {
    fn scale(&self, value: f64) -> Option<f64> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return None;
        }
        self.band_start(value as usize)
    }

    fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }
}
