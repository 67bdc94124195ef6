//! Gradient painter
//!
//! Fills a rectangle of the pixmap with a multi-stop gradient. Vertical
//! gradients compute one color per scanline; diagonal gradients compute one
//! per pixel using the fixed 0.6/0.4 axis weighting of the app icon.

use aurora_core::{Color, Gradient, GradientAxis, Rect};
use tiny_skia::Pixmap;

use crate::canvas::blend_pixel;

/// Normalized progress of local pixel `(x, y)` along `axis` in a `w × h` region
pub fn gradient_progress(axis: GradientAxis, x: u32, y: u32, w: u32, h: u32) -> f64 {
    axis.progress(x, y, w, h)
}

/// Paint `gradient` over `rect`, clipped to the pixmap
///
/// Progress is measured in the rect's own coordinate space, so a rect that
/// hangs off the canvas keeps its full color range.
pub fn paint_gradient(pixmap: &mut Pixmap, rect: Rect, gradient: &Gradient) {
    if rect.is_empty() {
        return;
    }
    let bounds = Rect::new(0, 0, pixmap.width() as i32, pixmap.height() as i32);
    let visible = rect.clamp_to(&bounds);
    if visible.is_empty() {
        return;
    }

    let stride = pixmap.width() as usize;
    let (w, h) = (rect.w as u32, rect.h as u32);
    let pixels = pixmap.pixels_mut();

    for py in visible.y..visible.bottom() {
        let ly = (py - rect.y) as u32;
        let row_color = match gradient.axis {
            GradientAxis::Vertical => Some(
                gradient
                    .stops
                    .sample(gradient_progress(gradient.axis, 0, ly, w, h)),
            ),
            GradientAxis::Diagonal => None,
        };
        let row = py as usize * stride;
        for px in visible.x..visible.right() {
            let color: Color = match row_color {
                Some(c) => c,
                None => gradient.stops.sample(gradient_progress(
                    gradient.axis,
                    (px - rect.x) as u32,
                    ly,
                    w,
                    h,
                )),
            };
            let idx = row + px as usize;
            pixels[idx] = blend_pixel(pixels[idx], color, 255);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::ColorStops;

    const VIOLET: Color = Color::rgb(124, 92, 252);
    const SKY: Color = Color::rgb(103, 195, 243);
    const MINT: Color = Color::rgb(110, 231, 183);

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let p = pixmap.pixel(x, y).unwrap().demultiply();
        [p.red(), p.green(), p.blue(), p.alpha()]
    }

    #[test]
    fn test_diagonal_matches_reference_formula() {
        let mut pixmap = Pixmap::new(64, 64).unwrap();
        let gradient = Gradient::diagonal(ColorStops::three(VIOLET, SKY, MINT));
        paint_gradient(&mut pixmap, Rect::new(0, 0, 64, 64), &gradient);

        for &(x, y) in &[(0u32, 0u32), (10, 50), (32, 32), (63, 63), (63, 0)] {
            let t = x as f64 / 64.0 * 0.6 + y as f64 / 64.0 * 0.4;
            let expected = if t < 0.5 {
                Color::lerp(&VIOLET, &SKY, t * 2.0)
            } else {
                Color::lerp(&SKY, &MINT, (t - 0.5) * 2.0)
            };
            assert_eq!(pixel(&pixmap, x, y), expected.to_array(), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_full_icon_gradient_matches_reference() {
        fn mix(a: Color, b: Color, t: f64) -> [u8; 3] {
            let c = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;
            [c(a.r, b.r), c(a.g, b.g), c(a.b, b.b)]
        }

        let size = 1024;
        let mut pixmap = Pixmap::new(size, size).unwrap();
        let gradient = Gradient::diagonal(ColorStops::three(VIOLET, SKY, MINT));
        paint_gradient(&mut pixmap, Rect::new(0, 0, size as i32, size as i32), &gradient);

        let n = size as f64;
        let mut mismatches = 0;
        for y in 0..size {
            for x in 0..size {
                let t = x as f64 / n * 0.6 + y as f64 / n * 0.4;
                let want = if t < 0.5 {
                    mix(VIOLET, SKY, t * 2.0)
                } else {
                    mix(SKY, MINT, (t - 0.5) * 2.0)
                };
                let got = pixel(&pixmap, x, y);
                if got[..3] != want {
                    mismatches += 1;
                }
            }
        }
        assert_eq!(mismatches, 0);
    }

    #[test]
    fn test_progress_matches_descriptor() {
        let gradient = Gradient::diagonal(ColorStops::two(VIOLET, MINT));
        for &(x, y) in &[(0u32, 0u32), (512, 512), (1023, 0), (200, 900)] {
            assert_eq!(
                gradient_progress(GradientAxis::Diagonal, x, y, 1024, 1024),
                gradient.progress(x, y, 1024, 1024)
            );
        }
        assert_eq!(gradient_progress(GradientAxis::Vertical, 99, 50, 7, 100), 0.5);
    }

    #[test]
    fn test_vertical_rows_are_uniform() {
        let mut pixmap = Pixmap::new(40, 20).unwrap();
        let gradient = Gradient::vertical(ColorStops::two(VIOLET, MINT));
        paint_gradient(&mut pixmap, Rect::new(0, 0, 40, 20), &gradient);
        assert_eq!(pixel(&pixmap, 0, 7), pixel(&pixmap, 39, 7));
        assert_eq!(pixel(&pixmap, 5, 0), VIOLET.to_array());
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let mut pixmap = Pixmap::new(10, 10).unwrap();
        let gradient = Gradient::vertical(ColorStops::two(VIOLET, MINT));
        paint_gradient(&mut pixmap, Rect::new(5, -10, 50, 20), &gradient);
        // row 0 of the canvas is halfway down the gradient rect
        assert_eq!(pixel(&pixmap, 6, 0), Color::lerp(&VIOLET, &MINT, 0.5).to_array());
        assert_eq!(pixel(&pixmap, 2, 0)[3], 0);
    }
}
