use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants for one radar chart.
///
/// Colors supplied by `ChartConfig` are combined with these settings: the line
/// color is forced to `line_alpha`, the data color to `fill_alpha`, and grid
/// rings use the line color lightened by `grid_lighten`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    /// Space kept between the boundary and the top/bottom surface edges.
    #[serde(default = "default_margin_px")]
    pub margin_px: f64,
    /// Distance of labels beyond the boundary vertices.
    #[serde(default = "default_label_offset_px")]
    pub label_offset_px: f64,
    /// Angle of axis 0 in radians. The default puts it at the top.
    #[serde(default = "default_rotation_rad")]
    pub rotation_rad: f64,
    #[serde(default = "default_boundary_stroke_width")]
    pub boundary_stroke_width: f64,
    #[serde(default = "default_grid_stroke_width")]
    pub grid_stroke_width: f64,
    #[serde(default = "default_data_stroke_width")]
    pub data_stroke_width: f64,
    #[serde(default = "default_background_fill")]
    pub background_fill: Color,
    /// HSL lightness shift in percentage points.
    #[serde(default = "default_grid_lighten")]
    pub grid_lighten: f64,
    #[serde(default = "default_line_alpha")]
    pub line_alpha: f64,
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            margin_px: default_margin_px(),
            label_offset_px: default_label_offset_px(),
            rotation_rad: default_rotation_rad(),
            boundary_stroke_width: default_boundary_stroke_width(),
            grid_stroke_width: default_grid_stroke_width(),
            data_stroke_width: default_data_stroke_width(),
            background_fill: default_background_fill(),
            grid_lighten: default_grid_lighten(),
            line_alpha: default_line_alpha(),
            fill_alpha: default_fill_alpha(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
        }
    }
}

impl RadarStyle {
    #[must_use]
    pub fn with_margin(mut self, margin_px: f64) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_rad: f64) -> Self {
        self.rotation_rad = rotation_rad;
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, label_offset_px: f64) -> Self {
        self.label_offset_px = label_offset_px;
        self
    }

    #[must_use]
    pub fn with_fill_alpha(mut self, fill_alpha: f64) -> Self {
        self.fill_alpha = fill_alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("margin", self.margin_px),
            ("label offset", self.label_offset_px),
            ("rotation", self.rotation_rad),
            ("grid lighten", self.grid_lighten),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "radar style {name} must be finite"
                )));
            }
        }
        for (name, value) in [
            ("boundary stroke width", self.boundary_stroke_width),
            ("grid stroke width", self.grid_stroke_width),
            ("data stroke width", self.data_stroke_width),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "radar style {name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [("line alpha", self.line_alpha), ("fill alpha", self.fill_alpha)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "radar style {name} must be finite and in [0, 1]"
                )));
            }
        }
        self.background_fill.validate()?;
        self.label_color.validate()
    }
}

fn default_margin_px() -> f64 {
    40.0
}

fn default_label_offset_px() -> f64 {
    16.0
}

fn default_rotation_rad() -> f64 {
    3.0 * FRAC_PI_2
}

fn default_boundary_stroke_width() -> f64 {
    4.0
}

fn default_grid_stroke_width() -> f64 {
    2.0
}

fn default_data_stroke_width() -> f64 {
    1.0
}

fn default_background_fill() -> Color {
    Color::rgb8(240, 240, 240)
}

fn default_grid_lighten() -> f64 {
    25.0
}

fn default_line_alpha() -> f64 {
    1.0
}

fn default_fill_alpha() -> f64 {
    0.5
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_label_font_size_px() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::RadarStyle;

    #[test]
    fn default_style_is_valid() {
        assert!(RadarStyle::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_widths_and_out_of_range_alpha() {
        let mut style = RadarStyle::default();
        style.grid_stroke_width = 0.0;
        assert!(style.validate().is_err());

        assert!(RadarStyle::default().with_fill_alpha(1.5).validate().is_err());
        assert!(RadarStyle::default().with_rotation(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let style: RadarStyle = serde_json::from_str("{}").expect("parse");
        assert_eq!(style, RadarStyle::default());
    }
}
