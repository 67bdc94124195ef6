//! Raster canvas - immediate-mode implementation of `DrawContext`

use std::sync::Arc;

use aurora_core::{Color, DrawContext, Gradient, Point, Rect, Size, Stroke, TextMetrics, TextStyle};
use aurora_text::FontProvider;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tiny_skia::{FillRule, LineCap, Paint, Path, Pixmap, PremultipliedColorU8, Transform};

use crate::gradient::paint_gradient;
use crate::shapes;
use crate::{PaintError, Result};

/// Source-over blend of `color` at `coverage` onto a premultiplied pixel
pub(crate) fn blend_pixel(
    dst: PremultipliedColorU8,
    color: Color,
    coverage: u8,
) -> PremultipliedColorU8 {
    let sa = (color.a as u32 * coverage as u32 + 127) / 255;
    if sa == 0 {
        return dst;
    }
    let inv = 255 - sa;
    let premul = |c: u8| (c as u32 * sa + 127) / 255;
    let over = |s: u32, d: u8| s + (d as u32 * inv + 127) / 255;

    let a = over(sa, dst.alpha()).min(255);
    let r = over(premul(color.r), dst.red()).min(a);
    let g = over(premul(color.g), dst.green()).min(a);
    let b = over(premul(color.b), dst.blue()).min(a);
    PremultipliedColorU8::from_rgba(r as u8, g as u8, b as u8, a as u8).unwrap_or(dst)
}

/// CPU raster surface
pub struct Canvas {
    pixmap: Pixmap,
    fonts: Arc<dyn FontProvider>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32, fonts: Arc<dyn FontProvider>) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidSize { width, height })?;
        Ok(Self { pixmap, fonts })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn bounds(&self) -> Rect {
        self.surface_size().to_rect()
    }

    pub fn fonts(&self) -> &Arc<dyn FontProvider> {
        &self.fonts
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Replace every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// Straight-alpha color of a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Copy out as straight-alpha RGBA
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let c = self.pixel(x, y).unwrap_or(Color::TRANSPARENT);
            Rgba(c.to_array())
        })
    }

    /// Flatten onto an opaque `background`, dropping the alpha channel
    pub fn to_rgb_image(&self, background: Color) -> RgbImage {
        let stride = self.width() as usize;
        let pixels = self.pixmap.pixels();
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let p = pixels[y as usize * stride + x as usize];
            let inv = 255 - p.alpha() as u32;
            let flat = |c: u8, bg: u8| (c as u32 + (bg as u32 * inv + 127) / 255).min(255) as u8;
            Rgb([
                flat(p.red(), background.r),
                flat(p.green(), background.g),
                flat(p.blue(), background.b),
            ])
        })
    }

    fn paint_for(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn fill_path(&mut self, path: Option<Path>, color: Color, what: &str) {
        match path {
            Some(path) => self.pixmap.fill_path(
                &path,
                &Self::paint_for(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            ),
            None => tracing::trace!("Skipping degenerate {}", what),
        }
    }

    fn stroke_path(&mut self, path: Option<Path>, stroke: &Stroke, cap: LineCap, what: &str) {
        if stroke.width <= 0.0 {
            return;
        }
        match path {
            Some(path) => {
                let sk_stroke = tiny_skia::Stroke {
                    width: stroke.width,
                    line_cap: cap,
                    ..Default::default()
                };
                self.pixmap.stroke_path(
                    &path,
                    &Self::paint_for(stroke.color),
                    &sk_stroke,
                    Transform::identity(),
                    None,
                );
            }
            None => tracing::trace!("Skipping degenerate {}", what),
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl DrawContext for Canvas {
    fn surface_size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn fill_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        self.fill_path(shapes::rounded_rect(rect, radius), color, "rect");
    }

    fn stroke_rect(&mut self, rect: Rect, radius: i32, stroke: &Stroke) {
        self.stroke_path(
            shapes::rounded_rect(rect, radius),
            stroke,
            LineCap::Butt,
            "rect outline",
        );
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.fill_path(shapes::ellipse(rect), color, "ellipse");
    }

    fn stroke_ellipse(&mut self, rect: Rect, stroke: &Stroke) {
        self.stroke_path(shapes::ellipse(rect), stroke, LineCap::Butt, "ellipse outline");
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.stroke_path(shapes::segment(from, to), stroke, LineCap::Round, "line");
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let mask = self.fonts.resolve_px(style.role, style.size).rasterize(text);
        if mask.is_empty() {
            return;
        }

        let (cw, ch) = (self.width() as i32, self.height() as i32);
        let stride = cw as usize;
        let left = origin.x + mask.left;
        let top = origin.y + mask.top;
        let pixels = self.pixmap.pixels_mut();
        for my in 0..mask.height {
            let y = top + my as i32;
            if y < 0 || y >= ch {
                continue;
            }
            for mx in 0..mask.width {
                let x = left + mx as i32;
                if x < 0 || x >= cw {
                    continue;
                }
                let coverage = mask.get(mx, my);
                if coverage == 0 {
                    continue;
                }
                let idx = y as usize * stride + x as usize;
                pixels[idx] = blend_pixel(pixels[idx], style.color, coverage);
            }
        }
    }

    fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        paint_gradient(&mut self.pixmap, rect, gradient);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.fonts.resolve_px(style.role, style.size).measure(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{DrawContextExt, FontRole, RecordingContext};
    use aurora_text::BuiltinFontProvider;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h, Arc::new(BuiltinFontProvider)).unwrap()
    }

    #[test]
    fn test_zero_size_is_error() {
        let err = Canvas::new(0, 10, Arc::new(BuiltinFontProvider)).unwrap_err();
        assert_eq!(err, PaintError::InvalidSize { width: 0, height: 10 });
    }

    #[test]
    fn test_fill_rect_paints_interior() {
        let mut c = canvas(50, 50);
        c.fill_rect(Rect::new(10, 10, 20, 20), 4, Color::rgb(255, 0, 0));
        assert_eq!(c.pixel(20, 20), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.pixel(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut c = canvas(10, 10);
        c.clear(Color::rgb(0, 0, 0));
        c.fill_rect(Rect::new(0, 0, 10, 10), 0, Color::rgba(255, 255, 255, 128));
        let p = c.pixel(5, 5).unwrap();
        assert!((127..=129).contains(&p.r), "got {p:?}");
        assert_eq!(p.a, 255);
    }

    #[test]
    fn test_later_draws_occlude_earlier() {
        let mut c = canvas(20, 20);
        c.fill_circle(Point::new(10, 10), 8, Color::rgb(0, 0, 255));
        c.fill_circle(Point::new(10, 10), 4, Color::rgb(0, 255, 0));
        assert_eq!(c.pixel(10, 10), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_text_leaves_ink() {
        let mut c = canvas(100, 40);
        c.clear(Color::WHITE);
        let style = TextStyle::new(FontRole::Body, 20.0, Color::BLACK);
        c.draw_text("Hej", Point::new(5, 5), &style);
        let dark = (0..100)
            .flat_map(|x| (0..40).map(move |y| (x, y)))
            .filter(|&(x, y)| c.pixel(x, y).map(|p| p.r < 128).unwrap_or(false))
            .count();
        assert!(dark > 0);
    }

    #[test]
    fn test_offscreen_text_is_clipped() {
        let mut c = canvas(10, 10);
        let style = TextStyle::new(FontRole::Body, 40.0, Color::BLACK);
        c.draw_text("Overflow", Point::new(-50, -50), &style);
        c.draw_text("Overflow", Point::new(8, 8), &style);
    }

    #[test]
    fn test_replay_matches_direct_drawing() {
        let mut recording = RecordingContext::new(Size::new(30, 30));
        recording.fill_rect(Rect::new(0, 0, 30, 30), 0, Color::rgb(9, 9, 9));
        recording.draw_line(Point::new(0, 15), Point::new(30, 15), &Stroke::new(2.0, Color::WHITE));

        let mut replayed = canvas(30, 30);
        recording.replay(&mut replayed);

        let mut direct = canvas(30, 30);
        direct.fill_rect(Rect::new(0, 0, 30, 30), 0, Color::rgb(9, 9, 9));
        direct.draw_line(Point::new(0, 15), Point::new(30, 15), &Stroke::new(2.0, Color::WHITE));

        assert_eq!(replayed.pixmap().data(), direct.pixmap().data());
    }

    #[test]
    fn test_flatten_over_white() {
        let c = canvas(4, 4);
        let rgb = c.to_rgb_image(Color::WHITE);
        assert_eq!(rgb.get_pixel(1, 1).0, [255, 255, 255]);
    }
}
