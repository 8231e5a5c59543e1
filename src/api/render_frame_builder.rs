use tracing::debug;

use crate::core::{ChartContext, ChartFrame, GridLine};
use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, GroupPrimitive, RenderFrame, Renderer};

use super::BarChart;

/// Offset between the grid's bottom edge and its lowest line.
const GRID_BASELINE_OFFSET_PX: f64 = 20.0;
/// Gap between the grid's left margin and where its lines start.
const GRID_LINE_INSET_PX: f64 = 20.0;
/// Pixel row of the top grid line, independent of the plot's top margin.
const GRID_TOP_PX: f64 = 30.0;

impl<R: Renderer> BarChart<R> {
    /// Grid lines aligned with the plot area of `context`.
    ///
    /// The lowest line sits on the plot baseline and carries the default
    /// axis minimum. The top line always sits at `GRID_TOP_PX`, so it is
    /// labeled with the default axis value mapped to that row; every line
    /// then matches the height of a bar of the same value. Labels end just
    /// left of the plot.
    pub fn grid_lines(&self, context: &ChartContext) -> ChartResult<Vec<GridLine>> {
        let Some(grid) = &self.grid else {
            return Ok(Vec::new());
        };
        let (min, max) = match context.axis(None) {
            Some(scale) => (
                scale.domain().0,
                scale.pixel_to_domain(
                    context.bottom() - GRID_TOP_PX,
                    context.available_height(),
                )?,
            ),
            None => (0.0, 1.0),
        };

        Ok(grid.layout(
            context.bottom() + GRID_BASELINE_OFFSET_PX,
            context.right(),
            context.left() - GRID_LINE_INSET_PX,
            min,
            max,
        ))
    }

    /// Builds the full scene: grid first, then one group per series.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let context = self.chart_context()?;
        let mut frame = RenderFrame::new(self.config.viewport);

        if let Some(grid) = &self.grid {
            let lines = self.grid_lines(&context)?;
            frame = frame.with_group(GroupPrimitive::for_layer(
                CanvasLayerKind::Grid,
                grid.to_nodes(&lines),
            ));
        }

        for placements in self.layout_series(&context)? {
            let children = placements
                .into_iter()
                .map(|placement| placement.into_node())
                .collect();
            frame = frame.with_group(GroupPrimitive::for_layer(CanvasLayerKind::Series, children));
        }

        debug!(
            series = self.series.len(),
            rects = frame.rects().len(),
            texts = frame.texts().len(),
            lines = frame.lines().len(),
            "built render frame"
        );
        Ok(frame)
    }
}
