mod axis_autoscale;
mod config;
mod engine;
mod render_frame_builder;
mod snapshot;
mod validation;

pub use config::BarChartConfig;
pub use engine::BarChart;
pub use snapshot::{BarChartSnapshot, SeriesSnapshot};
