use serde::{Deserialize, Serialize};

/// Canvas layer a top-level frame group belongs to.
///
/// Groups are emitted back to front: the grid first, then one group per
/// bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
}
