//! radar-rs: radar (spider) chart engine.
//!
//! Regular-polygon geometry lives in `core`, the layered draw pipeline and the
//! drawing-surface contract in `render`, and the chart-facing API (config,
//! style, render entry points and the live `RadarChart`) in `api`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, RadarChart, RadarStyle, render};
pub use error::{ChartError, ChartResult};
