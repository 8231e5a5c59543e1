mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{GroupPrimitive, RenderFrame, RenderNode};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextAnchor, TextPrimitive, TextRotation,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// markup serialization stays isolated from layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
