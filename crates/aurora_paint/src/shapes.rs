//! Path construction for the primitive shapes

use aurora_core::{Point, Rect};
use tiny_skia::{Path, PathBuilder};

/// Cubic Bézier handle length for a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Rounded rectangle path; the radius is limited to half the shorter side
///
/// Returns `None` for empty rects.
pub fn rounded_rect(rect: Rect, radius: i32) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let x0 = rect.x as f32;
    let y0 = rect.y as f32;
    let x1 = rect.right() as f32;
    let y1 = rect.bottom() as f32;
    let r = (radius.max(0) as f32).min(rect.w as f32 / 2.0).min(rect.h as f32 / 2.0);

    if r <= 0.0 {
        let sk = tiny_skia::Rect::from_ltrb(x0, y0, x1, y1)?;
        return Some(PathBuilder::from_rect(sk));
    }

    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

/// Ellipse inscribed in `rect`
pub fn ellipse(rect: Rect) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let oval = tiny_skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)?;
    PathBuilder::from_oval(oval)
}

/// Single line segment
pub fn segment(from: Point, to: Point) -> Option<Path> {
    if from == to {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(from.x as f32, from.y as f32);
    pb.line_to(to.x as f32, to.y as f32);
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_bounds() {
        let path = rounded_rect(Rect::new(10, 20, 100, 40), 12).unwrap();
        let b = path.bounds();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (10.0, 20.0, 110.0, 60.0));
    }

    #[test]
    fn test_oversized_radius_is_capped() {
        // radius larger than half the height still yields a valid pill
        let path = rounded_rect(Rect::new(0, 0, 100, 20), 500).unwrap();
        assert_eq!(path.bounds().height(), 20.0);
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(rounded_rect(Rect::new(0, 0, 0, 10), 2).is_none());
        assert!(ellipse(Rect::new(0, 0, 10, -1)).is_none());
        assert!(segment(Point::new(3, 3), Point::new(3, 3)).is_none());
    }
}
