use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BarPlacement, ChartFrame, GridLine, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::BarChart;

/// Serializable deterministic layout snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSnapshot {
    pub viewport: Viewport,
    pub plot_bounds: (f64, f64, f64, f64),
    pub axis_domains: IndexMap<String, (f64, f64)>,
    pub series: Vec<SeriesSnapshot>,
    pub grid_lines: Vec<GridLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub y_axis: Option<String>,
    pub slot_width: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub placements: Vec<BarPlacement>,
}

impl<R: Renderer> BarChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<BarChartSnapshot> {
        let context = self.chart_context()?;
        let axis_domains = context
            .axis_names()
            .filter_map(|name| {
                context
                    .axis(Some(name))
                    .map(|scale| (name.to_owned(), scale.domain()))
            })
            .collect();

        let series = self
            .series
            .iter()
            .zip(self.layout_series(&context)?)
            .map(|(series, placements)| SeriesSnapshot {
                y_axis: series.y_axis.clone(),
                slot_width: series.slot_width(context.available_width()),
                min_value: series.min_value(),
                max_value: series.max_value(),
                placements,
            })
            .collect();

        Ok(BarChartSnapshot {
            viewport: self.config.viewport,
            plot_bounds: (context.left(), context.top(), context.right(), context.bottom()),
            axis_domains,
            series,
            grid_lines: self.grid_lines(&context)?,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
