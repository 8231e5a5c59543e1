use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::core::{ChartFrame, LabelBudget, LabelFit, LabelFitter, TextMeasurer};
use crate::error::ChartResult;
use crate::render::{
    Color, GroupPrimitive, RectPrimitive, RenderNode, TextAnchor, TextPrimitive, TextRotation,
};

/// Capability shared by everything a bar series can lay out.
///
/// Stacked or grouped bar kinds implement the same two operations.
pub trait BarContract {
    fn value(&self) -> f64;

    /// Resolves geometry for a bar placed in the slot starting at `slot_x`.
    fn layout(
        &self,
        chart: &dyn ChartFrame,
        slot_x: f64,
        slot_width: f64,
    ) -> ChartResult<BarPlacement>;
}

/// One categorical data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub name: Option<String>,
    pub value: f64,
    pub axis: Option<String>,
    /// Fixed bar width; `None` fills the whole slot.
    pub width: Option<f64>,
    pub color: Color,
    pub label_color: Option<Color>,
    pub font_size_px: Option<f64>,
    pub font_family: Option<String>,
    pub label_margin_y: f64,
    pub corner_radius: Option<f64>,
    pub label_rotation_degrees: Option<f64>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            name: None,
            value: 0.0,
            axis: None,
            width: Some(100.0),
            color: Color::rgb8(0x34, 0x98, 0xdb),
            label_color: None,
            font_size_px: None,
            font_family: None,
            label_margin_y: 30.0,
            corner_radius: None,
            label_rotation_degrees: None,
        }
    }
}

impl Bar {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unnamed(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn from_decimal(name: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(name, decimal_to_f64(value, "bar value")?))
    }

    #[must_use]
    pub fn with_axis(mut self, axis: impl Into<String>) -> Self {
        self.axis = Some(axis.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Lets the bar fill its whole slot.
    #[must_use]
    pub fn with_auto_width(mut self) -> Self {
        self.width = None;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_px: f64) -> Self {
        self.font_family = Some(family.into());
        self.font_size_px = Some(size_px);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size_px: f64) -> Self {
        self.font_size_px = Some(size_px);
        self
    }

    #[must_use]
    pub fn with_label_margin_y(mut self, margin: f64) -> Self {
        self.label_margin_y = margin;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation_degrees = Some(degrees);
        self
    }

    /// Rotation in effect for the label; zero counts as unrotated.
    #[must_use]
    pub fn effective_rotation(&self) -> Option<f64> {
        self.label_rotation_degrees.filter(|degrees| *degrees != 0.0)
    }

    /// Lays the bar out with an explicit label fitter.
    pub fn layout_with<M: TextMeasurer>(
        &self,
        chart: &dyn ChartFrame,
        slot_x: f64,
        slot_width: f64,
        fitter: &LabelFitter<M>,
    ) -> ChartResult<BarPlacement> {
        let width = self.width.unwrap_or(slot_width).min(slot_width);
        let x = if self.width.is_some() {
            slot_x + (slot_width - width) / 2.0
        } else {
            slot_x
        };

        let y = chart.value_to_pixel(self.value, self.axis.as_deref())?;
        let bottom = chart.bottom();
        let rect = RectPrimitive::new(x, y, width, bottom - y, self.color)
            .with_corner_radius(self.corner_radius.unwrap_or(0.0))
            .with_title(self.value.to_string());

        let Some(name) = self.name.as_deref().filter(|name| !name.trim().is_empty()) else {
            return Ok(BarPlacement::without_label(rect));
        };

        let rotation = self.effective_rotation();
        let (label_x, anchor, max_width) = match rotation {
            Some(_) => (x - width / 2.0, TextAnchor::End, chart.available_height()),
            None => (x + width / 2.0, TextAnchor::Middle, 1.5 * slot_width),
        };
        let label_y = bottom + self.label_margin_y;
        let font_size_px = self.font_size_px.unwrap_or_else(|| chart.font_size());

        let fit = fitter.fit(
            name,
            font_size_px,
            rotation,
            LabelBudget::new(max_width, chart.bottom_space(), label_x),
        );
        if fit.is_empty() {
            return Ok(BarPlacement::without_label(rect));
        }

        let mut label = TextPrimitive::new(
            fit.text.clone(),
            label_x,
            label_y,
            font_size_px,
            self.label_color.unwrap_or_else(|| chart.color()),
            anchor,
        )
        .with_font_family(
            self.font_family
                .as_deref()
                .unwrap_or_else(|| chart.font_family()),
        );
        if let Some(degrees) = rotation {
            label = label.with_rotation(TextRotation::new(degrees, label_x, bottom));
        }

        Ok(BarPlacement {
            rect,
            label: Some(label),
            label_fit: Some(fit),
        })
    }
}

impl BarContract for Bar {
    fn value(&self) -> f64 {
        self.value
    }

    fn layout(
        &self,
        chart: &dyn ChartFrame,
        slot_x: f64,
        slot_width: f64,
    ) -> ChartResult<BarPlacement> {
        self.layout_with(chart, slot_x, slot_width, &LabelFitter::new())
    }
}

/// Resolved geometry of one bar: its rectangle and optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPlacement {
    pub rect: RectPrimitive,
    pub label: Option<TextPrimitive>,
    pub label_fit: Option<LabelFit>,
}

impl BarPlacement {
    #[must_use]
    pub fn without_label(rect: RectPrimitive) -> Self {
        Self {
            rect,
            label: None,
            label_fit: None,
        }
    }

    #[must_use]
    pub fn into_node(self) -> RenderNode {
        let mut children = Vec::with_capacity(2);
        children.push(RenderNode::Rect(self.rect));
        if let Some(label) = self.label {
            children.push(RenderNode::Text(label));
        }
        RenderNode::Group(GroupPrimitive::new(children))
    }
}
