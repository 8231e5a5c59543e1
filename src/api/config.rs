use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{FontDefaults, PlotMargins, Viewport};
use crate::error::ChartResult;
use crate::render::Color;

use super::validation::validate_config;

/// Caller-supplied chart configuration.
///
/// Axes listed in `axis_domains` use that fixed domain; every other axis is
/// autoscaled from the series bound to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub font: FontDefaults,
    #[serde(default)]
    pub axis_domains: IndexMap<String, (f64, f64)>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            font: FontDefaults::default(),
            axis_domains: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_px: f64, color: Color) -> Self {
        self.font = FontDefaults {
            family: family.into(),
            size_px,
            color,
        };
        self
    }

    #[must_use]
    pub fn with_axis_domain(mut self, axis: impl Into<String>, min: f64, max: f64) -> Self {
        self.axis_domains.insert(axis.into(), (min, max));
        self
    }

    /// Checks the viewport, margins, default font and explicit axis domains.
    pub fn validate(&self) -> ChartResult<()> {
        validate_config(self)
    }
}
