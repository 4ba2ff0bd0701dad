use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ClearRegion, Color, DrawingSurface, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// The surface either owns an offscreen ARGB image or wraps an external Cairo
/// context (for example one handed out by a toolkit draw callback).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    viewport: Viewport,
    clear_color: Color,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let viewport = Viewport::new(width.unsigned_abs(), height.unsigned_abs());
        Ok(Self {
            context,
            image: Some(image),
            viewport,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoSurfaceStats::default(),
        })
    }

    pub fn from_context(context: Context, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            context,
            image: None,
            viewport,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Offscreen image, when the surface owns one.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }
}

impl DrawingSurface for CairoSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, region: ClearRegion) -> ChartResult<()> {
        self.context.new_path();
        apply_color(&self.context, self.clear_color);
        self.context
            .rectangle(region.x, region.y, region.width, region.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoSurfaceStats::default();
        Ok(())
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self, width: f64, color: Color) -> ChartResult<()> {
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill(&mut self, color: Color) -> ChartResult<()> {
        apply_color(&self.context, color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans Bold {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        // `text.y` is the alphabetic baseline; pango positions the layout top.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        self.context.new_path();
        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
