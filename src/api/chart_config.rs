use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Smallest axis count that forms a polygon.
pub const MIN_AXIS_COUNT: usize = 3;

/// Chart content supplied by the host application.
///
/// `values[i]` is plotted on axis `i` relative to `step_count`; values outside
/// `[0, step_count]` are accepted and plot inside the center or past the
/// boundary. `labels` may be shorter than `values`; missing labels draw
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub axis_count: usize,
    #[serde(default = "default_step_count")]
    pub step_count: u32,
    pub values: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
}

impl ChartConfig {
    /// Creates a config with `axis_count` zero values and no labels.
    #[must_use]
    pub fn new(axis_count: usize, step_count: u32) -> Self {
        Self {
            axis_count,
            step_count,
            values: vec![0.0; axis_count],
            labels: Vec::new(),
            line_color: default_line_color(),
            fill_color: default_fill_color(),
        }
    }

    /// Creates a config whose axis count follows `values`.
    #[must_use]
    pub fn from_values(step_count: u32, values: Vec<f64>) -> Self {
        Self {
            axis_count: values.len(),
            ..Self::new(0, step_count)
        }
        .with_values(values)
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn with_labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Label of axis `index`, empty when none was supplied.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    /// Resizes values and labels to `axis_count`; new axes start at zero.
    pub fn resize_axes(&mut self, axis_count: usize) {
        self.axis_count = axis_count;
        self.values.resize(axis_count, 0.0);
        self.labels.truncate(axis_count);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.axis_count < MIN_AXIS_COUNT {
            return Err(ChartError::InvalidConfiguration(format!(
                "axis count must be >= {MIN_AXIS_COUNT}, got {}",
                self.axis_count
            )));
        }
        if self.step_count < 1 {
            return Err(ChartError::InvalidConfiguration(
                "step count must be >= 1".to_owned(),
            ));
        }
        if self.values.len() != self.axis_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "expected {} values, got {}",
                self.axis_count,
                self.values.len()
            )));
        }
        if let Some(index) = self.values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidConfiguration(format!(
                "value at axis {index} must be finite"
            )));
        }
        if self.labels.len() > self.axis_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "expected at most {} labels, got {}",
                self.axis_count,
                self.labels.len()
            )));
        }
        for (name, color) in [("line", self.line_color), ("fill", self.fill_color)] {
            color.validate().map_err(|err| {
                ChartError::InvalidConfiguration(format!("{name} color: {err}"))
            })?;
        }
        Ok(())
    }
}

fn default_step_count() -> u32 {
    5
}

fn default_line_color() -> Color {
    Color::rgb8(51, 51, 51)
}

fn default_fill_color() -> Color {
    Color::rgb8(0, 136, 204)
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;
    use crate::error::ChartError;
    use crate::render::Color;

    #[test]
    fn from_values_derives_axis_count() {
        let config = ChartConfig::from_values(4, vec![1.0, 2.0, 3.0]);
        assert_eq!(config.axis_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_too_few_axes_and_zero_steps() {
        let two_axes = ChartConfig::from_values(2, vec![1.0, 1.0]);
        assert!(matches!(
            two_axes.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));

        let zero_steps = ChartConfig::new(3, 0);
        assert!(matches!(
            zero_steps.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_value_length_mismatch_and_non_finite_values() {
        let short = ChartConfig::new(4, 2).with_values(vec![1.0, 2.0, 0.0]);
        assert!(matches!(
            short.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));

        let nan = ChartConfig::new(3, 2).with_values(vec![1.0, f64::NAN, 0.0]);
        assert!(matches!(
            nan.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn out_of_band_values_are_valid() {
        let config = ChartConfig::from_values(2, vec![-1.0, 0.0, 7.5]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_invalid_colors() {
        let config = ChartConfig::new(3, 1).with_fill_color(Color::rgba(0.0, 0.0, 0.0, 1.5));
        assert!(matches!(
            config.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn resize_axes_keeps_existing_values() {
        let mut config = ChartConfig::from_values(3, vec![1.0, 2.0, 3.0]).with_labels(["a", "b", "c"]);
        config.resize_axes(5);
        assert_eq!(config.values, vec![1.0, 2.0, 3.0, 0.0, 0.0]);
        assert_eq!(config.label(4), "");

        config.resize_axes(3);
        assert_eq!(config.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(config.labels.len(), 3);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"axis_count":3,"values":[1.0,2.0,3.0]}"#).expect("parse");
        assert_eq!(config.step_count, 5);
        assert!(config.labels.is_empty());
        assert!(config.validate().is_ok());
    }
}
