//! barchart-rs: bar chart layout engine.
//!
//! Lays categorical data out as bars over a shared chart frame, with
//! background grid lines and per-bar labels that shrink to fit their slot.
//! The output is a backend-agnostic scene tree; turning it into markup is
//! left to a `Renderer` implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
