use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Axis used when a bar or series does not name one.
pub const DEFAULT_AXIS: &str = "default";

/// Read-only coordinate frame consumed by every layout call.
///
/// Layout code never owns the frame; it only asks for plot bounds, label
/// space, text defaults, and the value-to-pixel mapping of a named axis.
pub trait ChartFrame {
    /// Maps `value` to a vertical pixel coordinate on `axis` (default axis
    /// when `None`).
    fn value_to_pixel(&self, value: f64, axis: Option<&str>) -> ChartResult<f64>;

    fn left(&self) -> f64;
    fn right(&self) -> f64;
    fn top(&self) -> f64;
    fn bottom(&self) -> f64;

    fn available_width(&self) -> f64 {
        self.right() - self.left()
    }

    fn available_height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Space reserved below the plot area for bar labels.
    fn bottom_space(&self) -> f64;

    fn font_family(&self) -> &str;
    fn font_size(&self) -> f64;
    fn color(&self) -> Color;
}

/// Default text styling for labels that do not override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDefaults {
    pub family: String,
    pub size_px: f64,
    pub color: Color,
}

impl Default for FontDefaults {
    fn default() -> Self {
        Self {
            family: "arial".to_owned(),
            size_px: 14.0,
            color: Color::rgb8(0x33, 0x33, 0x33),
        }
    }
}

/// Concrete chart frame: a viewport, plot margins and named vertical axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContext {
    viewport: Viewport,
    margins: PlotMargins,
    font: FontDefaults,
    axes: IndexMap<String, LinearScale>,
}

impl ChartContext {
    pub fn new(viewport: Viewport, margins: PlotMargins, font: FontDefaults) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;
        if margins.left + margins.right >= f64::from(viewport.width)
            || margins.top + margins.bottom >= f64::from(viewport.height)
        {
            return Err(ChartError::InvalidData(
                "plot margins leave no drawable area".to_owned(),
            ));
        }
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "default font size must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            viewport,
            margins,
            font,
            axes: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn with_axis(mut self, name: impl Into<String>, scale: LinearScale) -> Self {
        self.set_axis(name, scale);
        self
    }

    pub fn set_axis(&mut self, name: impl Into<String>, scale: LinearScale) {
        self.axes.insert(name.into(), scale);
    }

    #[must_use]
    pub fn axis(&self, name: Option<&str>) -> Option<LinearScale> {
        self.axes.get(name.unwrap_or(DEFAULT_AXIS)).copied()
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(&self) -> PlotMargins {
        self.margins
    }
}

impl ChartFrame for ChartContext {
    fn value_to_pixel(&self, value: f64, axis: Option<&str>) -> ChartResult<f64> {
        let name = axis.unwrap_or(DEFAULT_AXIS);
        let scale = self.axes.get(name).ok_or_else(|| ChartError::UnknownAxis {
            name: name.to_owned(),
        })?;
        let offset = scale.domain_to_pixel(value, self.available_height())?;
        Ok(self.bottom() - offset)
    }

    fn left(&self) -> f64 {
        self.margins.left
    }

    fn right(&self) -> f64 {
        f64::from(self.viewport.width) - self.margins.right
    }

    fn top(&self) -> f64 {
        self.margins.top
    }

    fn bottom(&self) -> f64 {
        f64::from(self.viewport.height) - self.margins.bottom
    }

    fn bottom_space(&self) -> f64 {
        self.margins.bottom
    }

    fn font_family(&self) -> &str {
        &self.font.family
    }

    fn font_size(&self) -> f64 {
        self.font.size_px
    }

    fn color(&self) -> Color {
        self.font.color
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartContext, ChartFrame, FontDefaults};
    use crate::core::{LinearScale, PlotMargins, Viewport};
    use crate::error::ChartError;

    fn context() -> ChartContext {
        ChartContext::new(
            Viewport::new(500, 300),
            PlotMargins::new(40.0, 10.0, 20.0, 80.0),
            FontDefaults::default(),
        )
        .expect("context")
        .with_axis("default", LinearScale::new(0.0, 100.0).expect("scale"))
    }

    #[test]
    fn plot_bounds_follow_margins() {
        let ctx = context();
        assert_eq!(ctx.left(), 40.0);
        assert_eq!(ctx.right(), 490.0);
        assert_eq!(ctx.top(), 20.0);
        assert_eq!(ctx.bottom(), 220.0);
        assert_eq!(ctx.available_width(), 450.0);
        assert_eq!(ctx.available_height(), 200.0);
        assert_eq!(ctx.bottom_space(), 80.0);
    }

    #[test]
    fn default_axis_maps_domain_onto_plot_height() {
        let ctx = context();
        assert_eq!(ctx.value_to_pixel(0.0, None).expect("min"), 220.0);
        assert_eq!(ctx.value_to_pixel(100.0, None).expect("max"), 20.0);
        assert_eq!(ctx.value_to_pixel(50.0, Some("default")).expect("mid"), 120.0);
    }

    #[test]
    fn unknown_axis_is_reported() {
        let err = context()
            .value_to_pixel(1.0, Some("right"))
            .expect_err("missing axis");
        assert!(matches!(err, ChartError::UnknownAxis { ref name } if name == "right"));
    }

    #[test]
    fn margins_must_leave_drawable_area() {
        let err = ChartContext::new(
            Viewport::new(100, 100),
            PlotMargins::new(60.0, 40.0, 0.0, 0.0),
            FontDefaults::default(),
        )
        .expect_err("no plot width");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
