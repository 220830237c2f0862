// File: crates/linechart-core/src/render.rs
// Summary: Skia CPU raster backend: draws a Scene, measures the line, reports RenderEvents.

use log::trace;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::path::PathDescription;
use crate::scene::{Primitive, Scene};
use crate::text::TextShaper;

/// Feedback from the renderer to whoever owns the animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderEvent {
    /// Total length in scene pixels of the connecting line as drawn.
    PathMeasured(f32),
}

pub struct RenderOptions {
    /// Device pixels per scene pixel.
    pub dpr: f32,
    /// Labels depend on installed fonts; turn off for pixel-stable output.
    pub draw_labels: bool,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, anti_alias: true }
    }
}

/// A rasterized scene plus the events produced while drawing it.
pub struct Frame {
    pub image: skia::Image,
    pub events: Vec<RenderEvent>,
}

impl Frame {
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Measured line length reported for this frame, if any.
    pub fn path_length(&self) -> Option<f32> {
        self.events.iter().find_map(|e| match *e {
            RenderEvent::PathMeasured(len) => Some(len),
        })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        #[allow(deprecated)]
        let data = self
            .image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("PNG".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.image.read_pixels(&info, &mut px, stride, (0, 0), skia::image::CachingHint::Allow) {
            return Err(ChartError::Encode("RGBA readback".into()));
        }
        Ok((px, w as u32, h as u32, stride))
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Rasterize `scene` onto a fresh CPU surface, then measure its line.
    pub fn draw(&self, scene: &Scene, opts: &RenderOptions) -> Result<Frame> {
        let dpr = opts.dpr.max(0.1);
        let w = (scene.width * dpr).ceil().max(1.0) as i32;
        let h = (scene.height * dpr).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Surface(format!("{w}x{h}")))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::from(scene.background));
        canvas.save();
        canvas.scale((dpr, dpr));

        for (_, prim) in &scene.items {
            self.draw_primitive(canvas, prim, opts);
        }
        canvas.restore();

        let mut events = Vec::new();
        if let Some(len) = scene.line_path().and_then(measure) {
            events.push(RenderEvent::PathMeasured(len));
        }
        trace!("drew {w}x{h} frame with {} primitives", scene.items.len());
        Ok(Frame { image: surface.image_snapshot(), events })
    }

    fn draw_primitive(&self, canvas: &skia::Canvas, prim: &Primitive, opts: &RenderOptions) {
        match prim {
            Primitive::Line { from, to, color, width, opacity } => {
                if *opacity <= 0.0 { return; }
                let mut paint = stroke_paint(*width, opts.anti_alias);
                paint.set_color(color.with_opacity(*opacity));
                canvas.draw_line(*from, *to, &paint);
            }
            Primitive::Circle { center, radius, color } => {
                if *radius <= 0.0 { return; }
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(opts.anti_alias);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(skia::Color::from(*color));
                canvas.draw_circle(*center, *radius, &paint);
            }
            Primitive::Text { origin, text, size, anchor, color, opacity } => {
                if !opts.draw_labels || *opacity <= 0.0 { return; }
                self.text.draw(canvas, text, origin.x, origin.y, *size, color.with_opacity(*opacity), *anchor);
            }
            Primitive::Path { path, color, width, dash, opacity } => {
                if *opacity <= 0.0 || path.is_empty() { return; }
                let mut paint = stroke_paint(*width, opts.anti_alias);
                paint.set_color(color.with_opacity(*opacity));
                paint.set_stroke_cap(skia::paint::Cap::Square);
                paint.set_stroke_join(skia::paint::Join::Round);
                if let Some(d) = dash {
                    if d.interval > 0.0 {
                        paint.set_path_effect(skia::PathEffect::dash(&[d.interval, d.interval], d.offset));
                    }
                }
                canvas.draw_path(&path.to_skia(), &paint);
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Total contour length of `path` as Skia walks it; `None` for an empty or
/// zero-length path.
pub fn measure(path: &PathDescription) -> Option<f32> {
    let sk = path.to_skia();
    let total: f32 = skia::ContourMeasureIter::new(&sk, false, None).map(|c| c.length()).sum();
    (total > 0.0).then_some(total)
}

fn stroke_paint(width: f32, anti_alias: bool) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(anti_alias);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}
