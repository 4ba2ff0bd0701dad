use tracing::debug;

use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::{ChartConfig, ChartLayout, RadarStyle, build_frame_with_layout};

/// Draws `config` onto `surface`, centered with the default radius.
///
/// The caller is expected to have cleared the surface. Nothing is drawn when
/// the configuration is rejected.
pub fn render<S: DrawingSurface + ?Sized>(
    config: &ChartConfig,
    style: &RadarStyle,
    surface: &mut S,
) -> ChartResult<()> {
    let layout = ChartLayout::from_viewport(surface.viewport(), style);
    render_with_layout(config, style, layout, surface)
}

/// Draws `config` onto `surface` with an explicit center, radius and rotation.
pub fn render_with_layout<S: DrawingSurface + ?Sized>(
    config: &ChartConfig,
    style: &RadarStyle,
    layout: ChartLayout,
    surface: &mut S,
) -> ChartResult<()> {
    let frame = build_frame_with_layout(config, style, surface.viewport(), layout)?;
    frame.replay(surface)?;
    debug!(axis_count = config.axis_count, "radar render pass complete");
    Ok(())
}
