use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, LayeredRenderFrame};

use super::{ChartConfig, RadarStyle, build_frame, parse_value_input};

/// Live radar chart bound to one drawing surface.
///
/// The chart owns the current configuration and redraws the whole surface
/// after every accepted change. Rejected changes leave both the configuration
/// and the surface untouched.
pub struct RadarChart<S: DrawingSurface> {
    surface: S,
    config: ChartConfig,
    style: RadarStyle,
    render_count: u64,
}

impl<S: DrawingSurface> RadarChart<S> {
    /// Validates the initial configuration and draws it.
    pub fn new(surface: S, config: ChartConfig, style: RadarStyle) -> ChartResult<Self> {
        let viewport = surface.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        config.validate()?;
        style.validate()?;

        let mut chart = Self {
            surface,
            config,
            style,
            render_count: 0,
        };
        chart.render()?;
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> RadarStyle {
        self.style
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Builds the frame for the current state without drawing it.
    pub fn frame(&self) -> ChartResult<LayeredRenderFrame> {
        build_frame(&self.config, &self.style, self.surface.viewport())
    }

    /// Clears the surface and draws the current configuration.
    ///
    /// The frame is built and validated before the surface is cleared.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame()?;
        self.draw(&frame)
    }

    fn draw(&mut self, frame: &LayeredRenderFrame) -> ChartResult<()> {
        self.surface.clear_all()?;
        frame.replay(&mut self.surface)?;
        self.render_count += 1;
        debug!(render_count = self.render_count, "radar chart redrawn");
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.commit(config, self.style, "set_config")
    }

    pub fn set_style(&mut self, style: RadarStyle) -> ChartResult<()> {
        self.commit(self.config.clone(), style, "set_style")
    }

    /// Changes the number of axes; new axes start at zero without a label.
    pub fn set_axis_count(&mut self, axis_count: usize) -> ChartResult<()> {
        let mut config = self.config.clone();
        config.resize_axes(axis_count);
        self.commit(config, self.style, "set_axis_count")
    }

    /// Changes the step count. Values are kept as they are.
    pub fn set_step_count(&mut self, step_count: u32) -> ChartResult<()> {
        let mut config = self.config.clone();
        config.step_count = step_count;
        self.commit(config, self.style, "set_step_count")
    }

    pub fn set_value(&mut self, axis: usize, value: f64) -> ChartResult<()> {
        self.check_axis(axis)?;
        let mut config = self.config.clone();
        config.values[axis] = value;
        self.commit(config, self.style, "set_value")
    }

    /// Parses raw field text, clamps it into `[0, step_count]` and applies it.
    pub fn set_value_input(&mut self, axis: usize, input: &str) -> ChartResult<f64> {
        let value = parse_value_input(input, self.config.step_count);
        self.set_value(axis, value)?;
        Ok(value)
    }

    pub fn set_label(&mut self, axis: usize, label: impl Into<String>) -> ChartResult<()> {
        self.check_axis(axis)?;
        let mut config = self.config.clone();
        if config.labels.len() <= axis {
            config.labels.resize(axis + 1, String::new());
        }
        config.labels[axis] = label.into();
        self.commit(config, self.style, "set_label")
    }

    pub fn set_colors(&mut self, line_color: Color, fill_color: Color) -> ChartResult<()> {
        let config = self
            .config
            .clone()
            .with_line_color(line_color)
            .with_fill_color(fill_color);
        self.commit(config, self.style, "set_colors")
    }

    fn check_axis(&self, axis: usize) -> ChartResult<()> {
        if axis >= self.config.axis_count {
            warn!(axis, axis_count = self.config.axis_count, "axis index out of range");
            return Err(ChartError::InvalidData(format!(
                "axis index {axis} out of range for {} axes",
                self.config.axis_count
            )));
        }
        Ok(())
    }

    fn commit(
        &mut self,
        config: ChartConfig,
        style: RadarStyle,
        operation: &'static str,
    ) -> ChartResult<()> {
        let frame = build_frame(&config, &style, self.surface.viewport())
            .and_then(|frame| frame.validate().map(|()| frame));
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                warn!(operation, error = %err, "rejecting radar chart update");
                return Err(err);
            }
        };
        self.config = config;
        self.style = style;
        self.draw(&frame)
    }
}
