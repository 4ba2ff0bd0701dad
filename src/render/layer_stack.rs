use serde::{Deserialize, Serialize};

/// One visual layer of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Boundary,
    Grid,
    Spokes,
    Labels,
    Data,
}

/// Ordered list of layers; earlier layers are drawn first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Boundary,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Spokes,
                CanvasLayerKind::Labels,
                CanvasLayerKind::Data,
            ],
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}
