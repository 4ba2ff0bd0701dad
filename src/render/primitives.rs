use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// `rgb`/`rgba` channels are 0..=255 and alpha is 0..=1.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let input = input.trim();
        let color = if let Some(hex) = input.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = strip_function(input, "rgba") {
            parse_channels(body, true)
        } else if let Some(body) = strip_function(input, "rgb") {
            parse_channels(body, false)
        } else {
            None
        };

        let color = color
            .ok_or_else(|| ChartError::InvalidData(format!("unsupported color `{input}`")))?;
        color.validate()?;
        Ok(color)
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Shifts HSL lightness by `amount` percentage points, clamped to [0, 100].
    ///
    /// Alpha is preserved.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let (hue, saturation, lightness) = rgb_to_hsl(self.red, self.green, self.blue);
        let lightness = (lightness + amount / 100.0).clamp(0.0, 1.0);
        let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
        Self::rgba(red, green, blue, self.alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |index: usize| -> Option<u8> {
        let value = hex.get(index..=index)?;
        u8::from_str_radix(value, 16).ok()
    };
    match hex.len() {
        3 => Some(Color::rgb8(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
        )),
        6 => {
            let byte = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
            Some(Color::rgb8(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn parse_channels(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: SmallVec<[&str; 4]> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |text: &str| -> Option<f64> {
        let value: f64 = text.parse().ok()?;
        (0.0..=255.0).contains(&value).then_some(value / 255.0)
    };
    let alpha = if with_alpha {
        parts[3].parse().ok()?
    } else {
        1.0
    };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    (hue / 6.0, saturation, lightness)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    (
        hue_to_channel(p, q, hue + 1.0 / 3.0),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Stroke width plus color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed path through `points`, optionally filled and/or stroked.
///
/// Points are connected in stored order. Fill is painted before the stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[Point; 8]>,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill: None,
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least 3 points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "polygon must be filled or stroked".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: StrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, stroke: StrokeStyle) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Axis-aligned region passed to `DrawingSurface::clear`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClearRegion {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
