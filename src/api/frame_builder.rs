use tracing::{debug, trace};

use crate::core::{PolygonConfig, Viewport, point_at};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Color, LayerStack, LayeredRenderFrame, LinePrimitive, PolygonPrimitive,
    StrokeStyle, TextPrimitive,
};

use super::{ChartConfig, ChartLayout, RadarStyle, label_alignment};

/// Builds the frame for `config` centered on `viewport`.
pub fn build_frame(
    config: &ChartConfig,
    style: &RadarStyle,
    viewport: Viewport,
) -> ChartResult<LayeredRenderFrame> {
    let layout = ChartLayout::from_viewport(viewport, style);
    build_frame_with_layout(config, style, viewport, layout)
}

/// Builds the five chart layers with an explicit layout.
///
/// Configuration is validated before any geometry is computed.
pub fn build_frame_with_layout(
    config: &ChartConfig,
    style: &RadarStyle,
    viewport: Viewport,
    layout: ChartLayout,
) -> ChartResult<LayeredRenderFrame> {
    config.validate()?;
    style.validate()?;
    layout.validate()?;
    check_data_points(config, layout)?;

    debug!(
        axis_count = config.axis_count,
        step_count = config.step_count,
        radius = layout.radius,
        "build radar frame"
    );

    let line_color = config.line_color.with_alpha(style.line_alpha);
    let data_color = config.fill_color.with_alpha(style.fill_alpha);
    let boundary = layout.polygon(config.axis_count);

    let mut frame = LayeredRenderFrame::from_stack(viewport, LayerStack::canonical());
    push_boundary_layer(&mut frame, boundary, style, line_color);
    push_grid_layer(&mut frame, boundary, config.step_count, style, line_color);
    push_spoke_layer(&mut frame, boundary, style, line_color);
    push_label_layer(&mut frame, config, boundary, style, viewport.center().x);
    push_data_layer(&mut frame, config, boundary, style, data_color);

    trace!(
        layers = frame.layers.len(),
        empty = frame.is_empty(),
        "radar frame built"
    );
    Ok(frame)
}

/// Rejects values whose scaled radius leaves the finite range.
fn check_data_points(config: &ChartConfig, layout: ChartLayout) -> ChartResult<()> {
    let steps = f64::from(config.step_count);
    for (axis, value) in config.values.iter().enumerate() {
        let radius = layout.radius * value / steps;
        let point = point_at(
            axis as i64,
            config.axis_count,
            radius,
            layout.rotation,
            layout.center.x,
            layout.center.y,
        );
        if !radius.is_finite() || !point.is_finite() {
            return Err(ChartError::InvalidConfiguration(format!(
                "value at axis {axis} is too large to plot"
            )));
        }
    }
    Ok(())
}

fn push_boundary_layer(
    frame: &mut LayeredRenderFrame,
    boundary: PolygonConfig,
    style: &RadarStyle,
    line_color: Color,
) {
    frame.push_polygon(
        CanvasLayerKind::Boundary,
        PolygonPrimitive::new(boundary.vertices())
            .with_fill(style.background_fill)
            .with_stroke(StrokeStyle::new(style.boundary_stroke_width, line_color)),
    );
}

/// Rings for k = 1..step_count-1 at `R * (1 - k / step_count)`, outermost first.
fn push_grid_layer(
    frame: &mut LayeredRenderFrame,
    boundary: PolygonConfig,
    step_count: u32,
    style: &RadarStyle,
    line_color: Color,
) {
    let stroke = StrokeStyle::new(
        style.grid_stroke_width,
        line_color.lighten(style.grid_lighten),
    );
    let steps = f64::from(step_count);
    for step in 1..step_count {
        let radius = boundary.radius * (1.0 - f64::from(step) / steps);
        frame.push_polygon(
            CanvasLayerKind::Grid,
            PolygonPrimitive::new(boundary.with_radius(radius).vertices()).with_stroke(stroke),
        );
    }
}

fn push_spoke_layer(
    frame: &mut LayeredRenderFrame,
    boundary: PolygonConfig,
    style: &RadarStyle,
    line_color: Color,
) {
    let stroke = StrokeStyle::new(style.boundary_stroke_width, line_color);
    let center = boundary.center();
    for vertex in boundary.vertices() {
        frame.push_line(
            CanvasLayerKind::Spokes,
            LinePrimitive::new(center, vertex, stroke),
        );
    }
}

fn push_label_layer(
    frame: &mut LayeredRenderFrame,
    config: &ChartConfig,
    boundary: PolygonConfig,
    style: &RadarStyle,
    surface_center_x: f64,
) {
    let ring = boundary.with_radius(boundary.radius + style.label_offset_px);
    for axis in 0..config.axis_count {
        let text = config.label(axis);
        if text.is_empty() {
            continue;
        }
        let anchor = ring.point_at(axis as i64);
        frame.push_text(
            CanvasLayerKind::Labels,
            TextPrimitive::new(
                text,
                anchor.x,
                anchor.y,
                style.label_font_size_px,
                style.label_color,
                label_alignment(surface_center_x, anchor.x),
            ),
        );
    }
}

fn push_data_layer(
    frame: &mut LayeredRenderFrame,
    config: &ChartConfig,
    boundary: PolygonConfig,
    style: &RadarStyle,
    data_color: Color,
) {
    let steps = f64::from(config.step_count);
    let points = config.values.iter().enumerate().map(|(axis, value)| {
        point_at(
            axis as i64,
            config.axis_count,
            boundary.radius * value / steps,
            boundary.rotation,
            boundary.center_x,
            boundary.center_y,
        )
    });
    frame.push_polygon(
        CanvasLayerKind::Data,
        PolygonPrimitive::new(points)
            .with_fill(data_color)
            .with_stroke(StrokeStyle::new(style.data_stroke_width, data_color)),
    );
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::build_frame_with_layout;
    use crate::api::{ChartConfig, ChartLayout, RadarStyle};
    use crate::error::ChartError;
    use crate::core::{Point, Viewport};
    use crate::render::{CanvasLayerKind, Color, TextHAlign};

    fn layout() -> ChartLayout {
        ChartLayout::new(Point::new(150.0, 150.0), 100.0, 3.0 * FRAC_PI_2)
    }

    #[test]
    fn grid_rings_shrink_evenly_toward_center() {
        let config = ChartConfig::new(4, 4);
        let frame = build_frame_with_layout(
            &config,
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect("frame");

        let grid = frame.layer(CanvasLayerKind::Grid).expect("grid layer");
        assert_eq!(grid.polygons.len(), 3);
        for (ring, expected_radius) in grid.polygons.iter().zip([75.0, 50.0, 25.0]) {
            let top = ring.points[0];
            assert!((top.distance_to(Point::new(150.0, 150.0)) - expected_radius).abs() <= 1e-9);
            assert!(ring.fill.is_none());
        }
    }

    #[test]
    fn single_step_has_no_grid_rings() {
        let frame = build_frame_with_layout(
            &ChartConfig::new(3, 1),
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect("frame");
        assert!(
            frame
                .layer(CanvasLayerKind::Grid)
                .expect("grid layer")
                .polygons
                .is_empty()
        );
    }

    #[test]
    fn colors_follow_style_alpha_and_lighten() {
        let config = ChartConfig::new(3, 3)
            .with_line_color(Color::rgba(1.0, 0.0, 0.0, 0.2))
            .with_fill_color(Color::rgb(0.0, 0.0, 1.0));
        let frame = build_frame_with_layout(
            &config,
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect("frame");

        let boundary = &frame.layer(CanvasLayerKind::Boundary).expect("boundary").polygons[0];
        let boundary_stroke = boundary.stroke.expect("boundary stroke");
        assert_eq!(boundary_stroke.color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(boundary_stroke.width, 4.0);
        assert_eq!(boundary.fill, Some(Color::rgb8(240, 240, 240)));

        let ring = &frame.layer(CanvasLayerKind::Grid).expect("grid").polygons[0];
        let ring_stroke = ring.stroke.expect("ring stroke");
        assert_eq!(ring_stroke.width, 2.0);
        assert!((ring_stroke.color.green - 0.5).abs() <= 1e-9);

        let data = &frame.layer(CanvasLayerKind::Data).expect("data").polygons[0];
        assert_eq!(data.fill, Some(Color::rgba(0.0, 0.0, 1.0, 0.5)));
        assert_eq!(data.stroke.expect("data stroke").width, 1.0);
    }

    #[test]
    fn labels_skip_missing_text_and_align_outward() {
        let config = ChartConfig::new(4, 2).with_labels(["top", "right", ""]);
        let frame = build_frame_with_layout(
            &config,
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect("frame");

        let labels = &frame.layer(CanvasLayerKind::Labels).expect("labels").texts;
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "top");
        assert_eq!(labels[0].h_align, TextHAlign::Center);
        assert!((labels[0].y - 34.0).abs() <= 1e-9);
        assert_eq!(labels[1].text, "right");
        assert_eq!(labels[1].h_align, TextHAlign::Left);
        assert!((labels[1].x - 266.0).abs() <= 1e-9);
    }

    #[test]
    fn spokes_run_from_center_to_each_vertex() {
        let frame = build_frame_with_layout(
            &ChartConfig::new(5, 2),
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect("frame");

        let spokes = &frame.layer(CanvasLayerKind::Spokes).expect("spokes").lines;
        assert_eq!(spokes.len(), 5);
        for spoke in spokes {
            assert_eq!((spoke.x1, spoke.y1), (150.0, 150.0));
            let length = (spoke.x2 - spoke.x1).hypot(spoke.y2 - spoke.y1);
            assert!((length - 100.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn overflowing_value_is_rejected_as_configuration() {
        let config = ChartConfig::from_values(5, vec![1e307, 2.0, 3.0]);
        assert!(config.validate().is_ok());

        let err = build_frame_with_layout(
            &config,
            &RadarStyle::default(),
            Viewport::new(300, 300),
            layout(),
        )
        .expect_err("overflowing radius");
        assert!(matches!(err, ChartError::InvalidConfiguration(_)));
    }

    #[test]
    fn label_alignment_uses_surface_center_and_label_offset() {
        // Chart shifted right of the surface midline: the left vertex at x = 110
        // is still right of the surface center (100).
        let shifted = ChartLayout::new(Point::new(200.0, 150.0), 60.0, 3.0 * FRAC_PI_2);
        let config = ChartConfig::new(4, 2).with_labels(["n", "e", "s", "w"]);
        let frame = build_frame_with_layout(
            &config,
            &RadarStyle::default().with_label_offset(30.0),
            Viewport::new(200, 300),
            shifted,
        )
        .expect("frame");

        let labels = &frame.layer(CanvasLayerKind::Labels).expect("labels").texts;
        assert!((labels[3].x - 110.0).abs() <= 1e-9);
        assert_eq!(labels[3].h_align, TextHAlign::Left);
        assert!((labels[0].y - 60.0).abs() <= 1e-9);
        assert_eq!(labels[0].h_align, TextHAlign::Left);
    }
}
