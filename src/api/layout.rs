use serde::{Deserialize, Serialize};

use crate::core::{Point, PolygonConfig, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::TextHAlign;

use super::RadarStyle;

/// Placement of the chart on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub center: Point,
    pub radius: f64,
    pub rotation: f64,
}

impl ChartLayout {
    #[must_use]
    pub const fn new(center: Point, radius: f64, rotation: f64) -> Self {
        Self {
            center,
            radius,
            rotation,
        }
    }

    /// Centers the chart on `viewport` with radius `height / 2 - margin`.
    ///
    /// Small viewports yield a negative radius, which mirrors the chart.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, style: &RadarStyle) -> Self {
        Self {
            center: viewport.center(),
            radius: f64::from(viewport.height) / 2.0 - style.margin_px,
            rotation: style.rotation_rad,
        }
    }

    /// Boundary polygon for `axis_count` axes.
    #[must_use]
    pub fn polygon(self, axis_count: usize) -> PolygonConfig {
        PolygonConfig::new(axis_count, self.radius, self.rotation, self.center)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || !self.rotation.is_finite() {
            return Err(ChartError::InvalidData(
                "chart layout center, radius and rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Picks label alignment so text extends away from the chart.
///
/// The horizontal offset is rounded half-up to whole pixels first, so a
/// vertex within half a pixel of the center line is centered.
#[must_use]
pub fn label_alignment(center_x: f64, vertex_x: f64) -> TextHAlign {
    let offset = (center_x - vertex_x + 0.5).floor();
    if offset < 0.0 {
        TextHAlign::Left
    } else if offset > 0.0 {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartLayout, label_alignment};
    use crate::api::RadarStyle;
    use crate::core::{Point, Viewport};
    use crate::render::TextHAlign;

    #[test]
    fn viewport_layout_uses_height_minus_margin() {
        let layout = ChartLayout::from_viewport(Viewport::new(400, 300), &RadarStyle::default());
        assert_eq!(layout.center, Point::new(200.0, 150.0));
        assert_eq!(layout.radius, 110.0);
    }

    #[test]
    fn alignment_points_text_away_from_center() {
        assert_eq!(label_alignment(150.0, 250.0), TextHAlign::Left);
        assert_eq!(label_alignment(150.0, 50.0), TextHAlign::Right);
        assert_eq!(label_alignment(150.0, 150.0), TextHAlign::Center);
    }

    #[test]
    fn alignment_absorbs_floating_point_noise() {
        assert_eq!(label_alignment(150.0, 150.0 - 1e-12), TextHAlign::Center);
        assert_eq!(label_alignment(150.0, 150.0 + 1e-12), TextHAlign::Center);
    }

    #[test]
    fn non_finite_layout_is_rejected() {
        let layout = ChartLayout::new(Point::new(f64::NAN, 0.0), 10.0, 0.0);
        assert!(layout.validate().is_err());
    }
}
