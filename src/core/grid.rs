use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::format_thousands;
use crate::render::{Color, LinePrimitive, RenderNode, TextAnchor, TextPrimitive};

/// Formats a grid line's value into its axis label.
pub type GridLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Vertical distance between the lowest line and the bottom of the grid area.
const BASELINE_OFFSET_PX: f64 = 20.0;
/// Total vertical space not covered by grid lines.
const VERTICAL_INSET_PX: f64 = 50.0;
const LABEL_PADDING_PX: f64 = 10.0;
const LABEL_BASELINE_SHIFT_PX: f64 = 5.0;

/// One horizontal reference line and its axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub x1: f64,
    pub x2: f64,
}

/// Background grid configuration.
#[derive(Clone)]
pub struct GridSpec {
    pub line_count: usize,
    pub line_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    label_formatter: GridLabelFormatterFn,
}

impl fmt::Debug for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSpec")
            .field("line_count", &self.line_count)
            .field("line_color", &self.line_color)
            .field("label_color", &self.label_color)
            .field("label_font_size_px", &self.label_font_size_px)
            .finish_non_exhaustive()
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            line_count: 5,
            line_color: Color::rgb8(0xcc, 0xcc, 0xcc),
            label_color: Color::rgb8(0x33, 0x33, 0x33),
            label_font_size_px: 12.0,
            label_formatter: Arc::new(format_thousands),
        }
    }
}

impl GridSpec {
    #[must_use]
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_colors(mut self, line_color: Color, label_color: Color) -> Self {
        self.line_color = line_color;
        self.label_color = label_color;
        self
    }

    #[must_use]
    pub fn with_label_formatter(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label_formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn format_label(&self, value: f64) -> String {
        (self.label_formatter)(value)
    }

    /// Computes `line_count + 1` evenly spaced lines, lowest first.
    ///
    /// Line `i` sits at `height - 20 - i * spacing` and carries the value
    /// `min + i / line_count * (max - min)`. A zero line count produces one
    /// baseline entry at `min_value`.
    #[must_use]
    pub fn layout(
        &self,
        height: f64,
        width: f64,
        left_margin: f64,
        min_value: f64,
        max_value: f64,
    ) -> Vec<GridLine> {
        let line_x = left_margin + 2.0 * LABEL_PADDING_PX;
        let label_x = line_x - LABEL_PADDING_PX;
        let baseline_y = height - BASELINE_OFFSET_PX;
        let line_at = |y: f64, value: f64| GridLine {
            y,
            value,
            label: self.format_label(value),
            label_x,
            label_y: y + LABEL_BASELINE_SHIFT_PX,
            x1: line_x,
            x2: width,
        };

        if self.line_count == 0 {
            debug!("grid has no line count; emitting baseline only");
            return vec![line_at(baseline_y, min_value)];
        }

        let count = self.line_count as f64;
        let spacing = (height - VERTICAL_INSET_PX) / count;
        (0..=self.line_count)
            .map(|index| {
                let step = index as f64;
                let value = min_value + (step / count) * (max_value - min_value);
                line_at(baseline_y - step * spacing, value)
            })
            .collect()
    }

    /// Converts laid-out lines into line and label primitives.
    #[must_use]
    pub fn to_nodes(&self, lines: &[GridLine]) -> Vec<RenderNode> {
        let mut nodes = Vec::with_capacity(lines.len() * 2);
        for line in lines {
            nodes.push(RenderNode::Line(LinePrimitive::new(
                line.x1,
                line.y,
                line.x2,
                line.y,
                1.0,
                self.line_color,
            )));
            if !line.label.is_empty() {
                nodes.push(RenderNode::Text(TextPrimitive::new(
                    line.label.clone(),
                    line.label_x,
                    line.label_y,
                    self.label_font_size_px,
                    self.label_color,
                    TextAnchor::End,
                )));
            }
        }
        nodes
    }
}
