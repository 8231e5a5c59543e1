use indexmap::IndexMap;
use tracing::trace;

use crate::core::{BarPlacement, BarSeries, ChartContext, DEFAULT_AXIS, LinearScale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChart;

impl<R: Renderer> BarChart<R> {
    /// Resolves one scale per axis.
    ///
    /// Autoscaled axes always include zero so bars grow from a visible
    /// baseline; the default axis is always present.
    pub fn axis_scales(&self) -> ChartResult<IndexMap<String, LinearScale>> {
        let mut observed: IndexMap<String, (f64, f64)> = IndexMap::new();
        observed.insert(DEFAULT_AXIS.to_owned(), (0.0, 0.0));
        for series in &self.series {
            let axis = series.y_axis.as_deref().unwrap_or(DEFAULT_AXIS);
            let range = observed.entry(axis.to_owned()).or_insert((0.0, 0.0));
            range.0 = range.0.min(series.min_value());
            range.1 = range.1.max(series.max_value());
        }
        for name in self.config.axis_domains.keys() {
            observed.entry(name.clone()).or_insert((0.0, 0.0));
        }

        let mut scales = IndexMap::with_capacity(observed.len());
        for (name, (min, max)) in observed {
            let scale = match self.config.axis_domains.get(&name) {
                Some(&(start, end)) => LinearScale::new(start, end)?,
                None => LinearScale::from_min_max(min, max)?,
            };
            trace!(axis = %name, domain = ?scale.domain(), "resolved axis scale");
            scales.insert(name, scale);
        }

        Ok(scales)
    }

    /// Chart frame for the current configuration and series data.
    pub fn chart_context(&self) -> ChartResult<ChartContext> {
        let mut context = ChartContext::new(
            self.config.viewport,
            self.config.margins,
            self.config.font.clone(),
        )?;
        for (name, scale) in self.axis_scales()? {
            context.set_axis(name, scale);
        }
        Ok(context)
    }

    /// Lays out every series against `context`, series in insertion order.
    pub fn layout_series(&self, context: &ChartContext) -> ChartResult<Vec<Vec<BarPlacement>>> {
        self.series
            .iter()
            .map(|series| layout_one(series, context))
            .collect()
    }
}

#[cfg(feature = "parallel-layout")]
fn layout_one(series: &BarSeries, context: &ChartContext) -> ChartResult<Vec<BarPlacement>> {
    series.par_layout(context)
}

#[cfg(not(feature = "parallel-layout"))]
fn layout_one(series: &BarSeries, context: &ChartContext) -> ChartResult<Vec<BarPlacement>> {
    series.layout(context)
}
