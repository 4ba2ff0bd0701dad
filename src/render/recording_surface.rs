use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{ClearRegion, Color, DrawingSurface, TextPrimitive};

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    Clear(ClearRegion),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke { width: f64, color: Color },
    Fill { color: Color },
    DrawText(TextPrimitive),
}

/// Headless surface that records every call it receives.
///
/// Clearing the full viewport drops previously recorded commands, so the
/// command list always describes what is currently visible.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Texts drawn since the last full clear.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            SurfaceCommand::DrawText(text) => Some(text),
            _ => None,
        })
    }

    fn covers_viewport(&self, region: ClearRegion) -> bool {
        region.x <= 0.0
            && region.y <= 0.0
            && region.x + region.width >= f64::from(self.viewport.width)
            && region.y + region.height >= f64::from(self.viewport.height)
    }
}

impl DrawingSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, region: ClearRegion) -> ChartResult<()> {
        if self.covers_viewport(region) {
            self.commands.clear();
        }
        self.commands.push(SurfaceCommand::Clear(region));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(SurfaceCommand::ClosePath);
    }

    fn stroke(&mut self, width: f64, color: Color) -> ChartResult<()> {
        self.commands.push(SurfaceCommand::Stroke { width, color });
        Ok(())
    }

    fn fill(&mut self, color: Color) -> ChartResult<()> {
        self.commands.push(SurfaceCommand::Fill { color });
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.commands.push(SurfaceCommand::DrawText(text.clone()));
        Ok(())
    }
}
