//! Text-driven sizing: badge pills and shrink-to-fit headlines

use aurora_core::{Point, Rect, TextMeasurer, TextStyle};

/// Pill sized around a measured label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pill {
    pub width: i32,
    pub height: i32,
    /// Horizontal padding on each side of the label
    pub pad: i32,
}

impl Pill {
    /// Pill whose right edge sits at `right`
    pub fn ending_at(&self, right: i32, y: i32) -> Rect {
        Rect::new(right - self.width, y, self.width, self.height)
    }

    /// Pill whose left edge sits at `x`
    pub fn starting_at(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    /// Label origin inside `rect` for a line `text_height` tall
    pub fn text_origin(&self, rect: Rect, text_height: f32) -> Point {
        let dy = ((rect.h as f32 - text_height) / 2.0).floor() as i32;
        Point::new(rect.x + self.pad, rect.y + dy)
    }
}

/// Pill width from the label width: `⌈text_width⌉ + 2 × pad`,
/// with `pad = ⌊height × pad_frac⌋`
pub fn pill_for_text(text_width: f32, height: i32, pad_frac: f64) -> Pill {
    let height = height.max(0);
    let pad = (height as f64 * pad_frac).floor() as i32;
    Pill {
        width: text_width.max(0.0).ceil() as i32 + 2 * pad,
        height,
        pad,
    }
}

/// Widest line of a possibly multi-line string
pub fn widest_line(measurer: &dyn TextMeasurer, text: &str, style: &TextStyle) -> f32 {
    text.lines()
        .map(|line| measurer.measure(line, style).width)
        .fold(0.0, f32::max)
}

/// Shrink `style` until every line of `text` fits in `max_width`
///
/// Starts from a proportional guess, then steps down a pixel at a time. Never
/// goes below `min_scale × style.size`; text that still overflows at that
/// size is returned as is and left to overhang.
pub fn fit_text_size(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: i32,
    min_scale: f32,
) -> TextStyle {
    let max_width = max_width.max(0) as f32;
    let width = widest_line(measurer, text, style);
    if width <= max_width {
        return *style;
    }

    let floor_size = (style.size * min_scale.clamp(0.0, 1.0)).max(1.0);
    let guess = (style.size * max_width / width).floor().max(floor_size);
    let mut fitted = style.with_size(guess);
    while fitted.size > floor_size && widest_line(measurer, text, &fitted) > max_width {
        fitted = fitted.with_size((fitted.size - 1.0).max(floor_size));
    }
    tracing::trace!("Shrunk text from {}px to {}px", style.size, fitted.size);
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{Color, EstimatedMeasurer, FontRole};

    fn style(size: f32) -> TextStyle {
        TextStyle::new(FontRole::Headline, size, Color::WHITE)
    }

    #[test]
    fn test_pill_wraps_text() {
        let pill = pill_for_text(41.3, 40, 0.3);
        assert_eq!(pill.pad, 12);
        assert_eq!(pill.width, 42 + 24);
        let rect = pill.ending_at(500, 100);
        assert_eq!(rect, Rect::new(434, 100, 66, 40));
        let origin = pill.text_origin(rect, 20.0);
        assert_eq!(origin, Point::new(446, 110));
        assert!(origin.x as f32 + 41.3 <= rect.right() as f32);
    }

    #[test]
    fn test_fitting_text_unchanged() {
        let fitted = fit_text_size(&EstimatedMeasurer, "Hej", &style(20.0), 1000, 0.5);
        assert_eq!(fitted.size, 20.0);
    }

    #[test]
    fn test_shrinks_until_it_fits() {
        // 20 chars at 0.55 em: 100px font is 1100px wide
        let text = "Alla födelsedagar på";
        let fitted = fit_text_size(&EstimatedMeasurer, text, &style(100.0), 600, 0.3);
        assert!(EstimatedMeasurer.measure(text, &fitted).width <= 600.0);
        assert!(fitted.size >= 50.0);
    }

    #[test]
    fn test_respects_min_scale() {
        let fitted = fit_text_size(&EstimatedMeasurer, "very long headline", &style(100.0), 10, 0.5);
        assert_eq!(fitted.size, 50.0);
    }

    #[test]
    fn test_multiline_uses_widest_line() {
        let width = widest_line(&EstimatedMeasurer, "ab\nabcd", &style(10.0));
        assert_eq!(width, 22.0);
    }
}
