mod layer_stack;
mod layered_frame;
mod primitives;
mod recording_surface;

pub use layer_stack::{CanvasLayerKind, LayerStack};
pub use layered_frame::{FRAME_SNAPSHOT_JSON_SCHEMA_V1, LayerPrimitives, LayeredRenderFrame};
pub use primitives::{
    ClearRegion, Color, LinePrimitive, PolygonPrimitive, StrokeStyle, TextHAlign, TextPrimitive,
};
pub use recording_surface::{RecordingSurface, SurfaceCommand};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Capability set of a 2D drawing surface.
///
/// Path calls build up a current path; `stroke` and `fill` paint it without
/// consuming it, and `begin_path` discards it. Backends report failures only
/// from painting calls.
pub trait DrawingSurface {
    fn viewport(&self) -> Viewport;

    fn clear(&mut self, region: ClearRegion) -> ChartResult<()>;

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    fn stroke(&mut self, width: f64, color: Color) -> ChartResult<()>;

    fn fill(&mut self, color: Color) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    /// Clears the whole viewport.
    fn clear_all(&mut self) -> ChartResult<()> {
        let viewport = self.viewport();
        self.clear(ClearRegion::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        ))
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
