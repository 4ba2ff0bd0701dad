mod chart_config;
mod engine;
mod frame_builder;
mod input;
mod layout;
mod radar_style;
mod render_pass;

pub use chart_config::{ChartConfig, MIN_AXIS_COUNT};
pub use engine::RadarChart;
pub use frame_builder::{build_frame, build_frame_with_layout};
pub use input::{
    DEFAULT_MAX_AXIS_COUNT, DEFAULT_MAX_VALUE_INPUT, clamp_axis_count, parse_leading_float,
    parse_value_input, sanitize_value,
};
pub use layout::{ChartLayout, label_alignment};
pub use radar_style::RadarStyle;
pub use render_pass::{render, render_with_layout};
