pub mod bar;
pub mod bar_series;
pub mod chart_frame;
pub mod grid;
pub mod label_fit;
pub mod primitives;
pub mod scale;
pub mod types;

pub use bar::{Bar, BarContract, BarPlacement};
pub use bar_series::BarSeries;
pub use chart_frame::{ChartContext, ChartFrame, DEFAULT_AXIS, FontDefaults};
pub use grid::{GridLabelFormatterFn, GridLine, GridSpec};
pub use label_fit::{
    ELLIPSIS, HeuristicTextMeasurer, LabelBudget, LabelFit, LabelFitter, MIN_LABEL_CHARS,
    TextMeasurer, rotated_extent,
};
pub use primitives::format_thousands;
pub use scale::LinearScale;
pub use types::{PlotMargins, Viewport};
