use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{
    CanvasLayerKind, DrawingSurface, LayerStack, LinePrimitive, PolygonPrimitive, TextPrimitive,
};

pub const FRAME_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Primitives belonging to one layer, replayed polygons, lines, then texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            polygons: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass, grouped by layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

#[derive(Serialize, Deserialize)]
struct FrameSnapshotJsonContractV1 {
    schema_version: u32,
    frame: LayeredRenderFrame,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: LayerStack) -> Self {
        let layers = stack.layers.into_iter().map(LayerPrimitives::new).collect();
        Self { viewport, layers }
    }

    pub fn push_polygon(&mut self, kind: CanvasLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for polygon in &layer.polygons {
                polygon.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    /// Issues every primitive onto `surface` in layer order.
    ///
    /// The frame is validated first so an invalid frame draws nothing.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        self.validate()?;

        for layer in &self.layers {
            trace!(
                layer = ?layer.kind,
                polygons = layer.polygons.len(),
                lines = layer.lines.len(),
                texts = layer.texts.len(),
                "replay layer"
            );
            for polygon in &layer.polygons {
                replay_polygon(surface, polygon)?;
            }
            for line in &layer.lines {
                surface.begin_path();
                surface.move_to(line.x1, line.y1);
                surface.line_to(line.x2, line.y2);
                surface.stroke(line.stroke.width, line.stroke.color)?;
            }
            for text in &layer.texts {
                surface.draw_text(text)?;
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = FrameSnapshotJsonContractV1 {
            schema_version: FRAME_SNAPSHOT_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize frame snapshot v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: FrameSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse frame snapshot json: {e}"))
        })?;
        if payload.schema_version != FRAME_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported frame snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

fn replay_polygon<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    polygon: &PolygonPrimitive,
) -> ChartResult<()> {
    let Some((first, rest)) = polygon.points.split_first() else {
        return Ok(());
    };

    surface.begin_path();
    surface.move_to(first.x, first.y);
    for point in rest {
        surface.line_to(point.x, point.y);
    }
    surface.close_path();

    if let Some(fill) = polygon.fill {
        surface.fill(fill)?;
    }
    if let Some(stroke) = polygon.stroke {
        surface.stroke(stroke.width, stroke.color)?;
    }
    Ok(())
}
