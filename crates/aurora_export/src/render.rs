//! Raster pipeline
//!
//! Icons are drawn at `max(2 × size, 1024)` and downsampled with Lanczos3 so
//! small sizes stay crisp. Everything is flattened to opaque RGB before it
//! reaches a sink, since the stores reject icons with an alpha channel.

use std::sync::Arc;

use aurora_core::{Color, Size};
use aurora_paint::{Canvas, PaintError};
use aurora_screens::{icon, screenshot, ScreenSpec};
use aurora_text::FontProvider;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, RgbaImage};
use tracing::debug;

use crate::Result;

/// Side length an icon of `size` is drawn at before downsampling
pub fn icon_render_size(size: u32) -> u32 {
    size.saturating_mul(2).max(1024)
}

/// Render the app icon at `size × size`
pub fn render_icon(size: u32, fonts: Arc<dyn FontProvider>) -> Result<RgbImage> {
    if size == 0 {
        return Err(PaintError::InvalidSize {
            width: size,
            height: size,
        }
        .into());
    }
    let side = icon_render_size(size);
    let mut canvas = Canvas::new(side, side, fonts)?;
    canvas.clear(Color::WHITE);
    icon::compose(&mut canvas, Size::new(side, side));

    debug!(from = side, to = size, "downsampling icon");
    let resized = imageops::resize(&canvas.to_rgba_image(), size, size, FilterType::Lanczos3);
    Ok(flatten(&resized, Color::WHITE))
}

/// Render one store screenshot at `width × height`
pub fn render_screenshot(
    width: u32,
    height: u32,
    screen: &ScreenSpec,
    fonts: Arc<dyn FontProvider>,
) -> Result<RgbImage> {
    let mut canvas = Canvas::new(width, height, fonts)?;
    canvas.clear(Color::BLACK);
    screenshot::compose(&mut canvas, Size::new(width, height), screen);
    Ok(canvas.to_rgb_image(Color::BLACK))
}

/// Composite straight-alpha RGBA over an opaque `background`
pub fn flatten(image: &RgbaImage, background: Color) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let a = a as u32;
        let mix = |c: u8, bg: u8| ((c as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Rgb([
            mix(r, background.r),
            mix(g, background.g),
            mix(b, background.b),
        ])
    })
}
