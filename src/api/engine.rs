use tracing::debug;

use crate::core::{BarSeries, GridSpec};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChartConfig;
use super::validation::validate_config;

/// Main orchestration facade consumed by host applications.
///
/// `BarChart` owns the configuration, the bar series and the optional grid,
/// and hands each assembled frame to its renderer backend.
pub struct BarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) series: Vec<BarSeries>,
    pub(super) grid: Option<GridSpec>,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;

        Ok(Self {
            renderer,
            config,
            series: Vec::new(),
            grid: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        validate_config(&config)?;
        self.config = config;
        Ok(())
    }

    pub fn add_series(&mut self, series: BarSeries) {
        debug!(bars = series.len(), y_axis = ?series.y_axis, "add bar series");
        self.series.push(series);
    }

    pub fn set_series(&mut self, series: Vec<BarSeries>) {
        self.series = series;
    }

    #[must_use]
    pub fn series(&self) -> &[BarSeries] {
        &self.series
    }

    pub fn set_grid(&mut self, grid: Option<GridSpec>) {
        self.grid = grid;
    }

    #[must_use]
    pub fn grid(&self) -> Option<&GridSpec> {
        self.grid.as_ref()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        frame.validate()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
