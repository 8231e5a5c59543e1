use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear value domain mapped onto a pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale from observed min/max values.
    ///
    /// A flat range (`min == max`) widens to `[min, min + 1]` so a series of
    /// identical values still maps to a usable domain.
    pub fn from_min_max(min: f64, max: f64) -> ChartResult<Self> {
        if min == max {
            return Self::new(min, min + 1.0);
        }
        Self::new(min.min(max), min.max(max))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Position of `value` inside the domain, `0.0` at start and `1.0` at end.
    pub fn normalize(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        if !extent_px.is_finite() || extent_px < 0.0 {
            return Err(ChartError::InvalidData(
                "pixel extent must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self.normalize(value)? * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel extent must be finite and > 0".to_owned(),
            ));
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent_px;
        Ok(self.domain_start + normalized * span)
    }
}
