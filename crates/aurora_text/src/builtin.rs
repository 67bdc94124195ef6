//! Built-in fallback glyph set
//!
//! A Latin-1 bitmap font from embedded-graphics, scaled with nearest-neighbour
//! sampling. It always exists, so text renders even on machines without a
//! single usable font file.

use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{
    DrawTarget, Drawable, OriginDimensions, Pixel, Point as EgPoint, Size as EgSize,
};
use embedded_graphics::text::{Baseline, Text};

use crate::handle::GlyphMask;

const FONT: &MonoFont<'static> = &FONT_6X10;

/// One-bit target that embedded-graphics renders glyphs into
struct BitGrid {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitGrid {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }
}

impl OriginDimensions for BitGrid {
    fn size(&self) -> EgSize {
        EgSize::new(self.width, self.height)
    }
}

impl DrawTarget for BitGrid {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.bits[(y * self.width + x) as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

/// Native glyph cell advance in font pixels
fn cell_advance() -> u32 {
    FONT.character_size.width + FONT.character_spacing
}

/// Pixels per font pixel at the requested size (the cell height is one em)
fn scale(size: f32) -> f32 {
    (size / FONT.character_size.height as f32).max(0.1)
}

/// Advance width of `text` in pixels
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * cell_advance() as f32 * scale(size)
}

/// Line height in pixels
pub fn line_height(size: f32) -> f32 {
    FONT.character_size.height as f32 * scale(size) * 1.2
}

/// Render `text` into a coverage mask at `size` pixels per em
pub fn rasterize(text: &str, size: f32) -> GlyphMask {
    let chars = text.chars().count() as u32;
    let native_w = chars * cell_advance();
    let native_h = FONT.character_size.height;
    if native_w == 0 {
        return GlyphMask::empty();
    }

    let mut grid = BitGrid::new(native_w, native_h);
    let style = MonoTextStyle::new(FONT, BinaryColor::On);
    // Infallible target
    let _ = Text::with_baseline(text, EgPoint::zero(), style, Baseline::Top).draw(&mut grid);

    let s = scale(size);
    let width = (native_w as f32 * s).ceil().max(1.0) as u32;
    let height = (native_h as f32 * s).ceil().max(1.0) as u32;
    let mut coverage = vec![0u8; (width * height) as usize];
    for y in 0..height {
        let src_y = (y as f32 / s) as u32;
        for x in 0..width {
            let src_x = (x as f32 / s) as u32;
            if grid.get(src_x, src_y) {
                coverage[(y * width + x) as usize] = 255;
            }
        }
    }

    GlyphMask {
        width,
        height,
        left: 0,
        top: 0,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_linear_in_size() {
        let w10 = text_width("Emma", 10.0);
        let w20 = text_width("Emma", 20.0);
        assert_eq!(w10, 24.0);
        assert_eq!(w20, 48.0);
    }

    #[test]
    fn test_rasterize_has_ink() {
        let mask = rasterize("Ö", 20.0);
        assert_eq!(mask.width, 12);
        assert_eq!(mask.height, 20);
        assert!(mask.coverage.iter().any(|&c| c == 255));
    }

    #[test]
    fn test_space_has_no_ink() {
        let mask = rasterize("  ", 10.0);
        assert!(mask.coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_empty_text() {
        assert!(rasterize("", 30.0).is_empty());
    }
}
