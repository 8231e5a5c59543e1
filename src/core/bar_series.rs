use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Bar, BarContract, BarPlacement, ChartFrame};
use crate::error::ChartResult;
use crate::render::Color;

/// Ordered bars sharing one y-axis and a uniform slot width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries<B = Bar> {
    bars: Vec<B>,
    pub y_axis: Option<String>,
    /// Pixel gap between neighbouring slots.
    pub spacing: Option<f64>,
    pub max_value_override: Option<f64>,
}

impl<B> Default for BarSeries<B> {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            y_axis: None,
            spacing: None,
            max_value_override: None,
        }
    }
}

impl<B: BarContract> BarSeries<B> {
    #[must_use]
    pub fn new(bars: Vec<B>) -> Self {
        Self {
            bars,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: impl Into<String>) -> Self {
        self.y_axis = Some(axis.into());
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value_override = Some(max_value);
        self
    }

    pub fn push(&mut self, bar: B) {
        self.bars.push(bar);
    }

    #[must_use]
    pub fn bars(&self) -> &[B] {
        &self.bars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest bar value, unless an override is configured. Empty series yield `0`.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        if let Some(max_value) = self.max_value_override {
            return max_value;
        }

        self.bars
            .iter()
            .map(|bar| OrderedFloat(bar.value()))
            .max()
            .map_or(0.0, |max| max.0)
    }

    /// Smallest bar value. Empty series yield `0`; there is no override.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| OrderedFloat(bar.value()))
            .min()
            .map_or(0.0, |min| min.0)
    }

    /// Width of each slot once spacing is taken out of `available_width`.
    ///
    /// Spacing that consumes the whole width leaves zero-width slots rather
    /// than negative ones.
    #[must_use]
    pub fn slot_width(&self, available_width: f64) -> f64 {
        let count = self.bars.len();
        if count == 0 {
            return 0.0;
        }

        let count_f = count as f64;
        let width = match self.spacing {
            Some(spacing) => (available_width - spacing * (count_f - 1.0)) / count_f,
            None => available_width / count_f,
        };
        width.max(0.0)
    }

    /// Slot start positions, left to right from the chart's left edge.
    #[must_use]
    pub fn slot_positions(&self, left: f64, slot_width: f64) -> Vec<f64> {
        let advance = slot_width + self.spacing.unwrap_or(0.0);
        let mut x = left;
        let mut positions = Vec::with_capacity(self.bars.len());
        for _ in &self.bars {
            positions.push(x);
            x += advance;
        }
        positions
    }

    /// Lays out every bar in input order.
    ///
    /// Bars that do not name an axis are mapped on the series' `y_axis`.
    pub fn layout(&self, chart: &dyn ChartFrame) -> ChartResult<Vec<BarPlacement>> {
        let frame = SeriesAxisFrame {
            inner: chart,
            axis: self.y_axis.as_deref(),
        };
        let slot_width = self.slot_width(chart.available_width());
        debug!(bars = self.bars.len(), slot_width, "laying out bar series");

        self.slot_positions(chart.left(), slot_width)
            .into_iter()
            .zip(&self.bars)
            .map(|(x, bar)| bar.layout(&frame, x, slot_width))
            .collect()
    }

    /// Parallel variant of [`BarSeries::layout`]; output order and geometry
    /// are identical.
    #[cfg(feature = "parallel-layout")]
    pub fn par_layout(&self, chart: &(dyn ChartFrame + Sync)) -> ChartResult<Vec<BarPlacement>>
    where
        B: Sync,
    {
        use rayon::prelude::*;

        let frame = SeriesAxisFrame {
            inner: chart,
            axis: self.y_axis.as_deref(),
        };
        let slot_width = self.slot_width(chart.available_width());
        debug!(bars = self.bars.len(), slot_width, "laying out bar series in parallel");

        self.slot_positions(chart.left(), slot_width)
            .into_par_iter()
            .zip(self.bars.par_iter())
            .map(|(x, bar)| bar.layout(&frame, x, slot_width))
            .collect()
    }
}

impl BarSeries<Bar> {
    /// Applies one fill color to every bar.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        for bar in &mut self.bars {
            bar.color = color;
        }
        self
    }
}

/// Chart frame view that resolves unnamed axes to the series axis.
struct SeriesAxisFrame<'a, F: ?Sized> {
    inner: &'a F,
    axis: Option<&'a str>,
}

impl<F: ChartFrame + ?Sized> ChartFrame for SeriesAxisFrame<'_, F> {
    fn value_to_pixel(&self, value: f64, axis: Option<&str>) -> ChartResult<f64> {
        self.inner.value_to_pixel(value, axis.or(self.axis))
    }

    fn left(&self) -> f64 {
        self.inner.left()
    }

    fn right(&self) -> f64 {
        self.inner.right()
    }

    fn top(&self) -> f64 {
        self.inner.top()
    }

    fn bottom(&self) -> f64 {
        self.inner.bottom()
    }

    fn available_width(&self) -> f64 {
        self.inner.available_width()
    }

    fn available_height(&self) -> f64 {
        self.inner.available_height()
    }

    fn bottom_space(&self) -> f64 {
        self.inner.bottom_space()
    }

    fn font_family(&self) -> &str {
        self.inner.font_family()
    }

    fn font_size(&self) -> f64 {
        self.inner.font_size()
    }

    fn color(&self) -> Color {
        self.inner.color()
    }
}
