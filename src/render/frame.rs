use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// One node of the backend-agnostic scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderNode {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Group(GroupPrimitive),
}

impl RenderNode {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Group(group) => group.children.iter().try_for_each(Self::validate),
        }
    }

    fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a RenderNode)) {
        visitor(self);
        if let Self::Group(group) = self {
            for child in &group.children {
                child.visit(&mut *visitor);
            }
        }
    }
}

/// Ordered container of child nodes, optionally tagged with the canvas layer
/// it belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupPrimitive {
    pub layer: Option<CanvasLayerKind>,
    pub children: Vec<RenderNode>,
}

impl GroupPrimitive {
    #[must_use]
    pub fn new(children: Vec<RenderNode>) -> Self {
        Self {
            layer: None,
            children,
        }
    }

    #[must_use]
    pub fn for_layer(layer: CanvasLayerKind, children: Vec<RenderNode>) -> Self {
        Self {
            layer: Some(layer),
            children,
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub nodes: Vec<RenderNode>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_node(mut self, node: RenderNode) -> Self {
        self.nodes.push(node);
        self
    }

    #[must_use]
    pub fn with_group(self, group: GroupPrimitive) -> Self {
        self.with_node(RenderNode::Group(group))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.nodes.iter().try_for_each(RenderNode::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level groups tagged with `layer`, in frame order.
    pub fn layer_groups(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &GroupPrimitive> {
        self.nodes.iter().filter_map(move |node| match node {
            RenderNode::Group(group) if group.layer == Some(layer) => Some(group),
            _ => None,
        })
    }

    #[must_use]
    pub fn lines(&self) -> Vec<&LinePrimitive> {
        self.collect(|node| match node {
            RenderNode::Line(line) => Some(line),
            _ => None,
        })
    }

    #[must_use]
    pub fn rects(&self) -> Vec<&RectPrimitive> {
        self.collect(|node| match node {
            RenderNode::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.collect(|node| match node {
            RenderNode::Text(text) => Some(text),
            _ => None,
        })
    }

    fn collect<'a, T: 'a>(
        &'a self,
        select: impl Fn(&'a RenderNode) -> Option<&'a T>,
    ) -> Vec<&'a T> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.visit(&mut |visited| {
                if let Some(item) = select(visited) {
                    out.push(item);
                }
            });
        }
        out
    }
}
