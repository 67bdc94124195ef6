//! Fraction arithmetic
//!
//! `frac` is the only way sizes and offsets are derived from a dimension.

use aurora_core::{Point, Rect};

/// Edge length of the design grid the icon artwork is drawn on
pub const DESIGN_GRID: f64 = 1024.0;

/// `⌊dim × f⌋`
///
/// Fractions are `f64`: an `f32` `0.06` is slightly below 0.06 and would
/// lose a pixel on round dimensions.
pub fn frac(dim: i32, f: f64) -> i32 {
    (dim.max(0) as f64 * f).floor() as i32
}

/// `units` on the 1024 design grid, scaled to `size`
pub fn design(size: i32, units: f64) -> i32 {
    frac(size, units / DESIGN_GRID)
}

/// Fraction helpers bound to one region
///
/// Horizontal fractions are of the region width, vertical of its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proportions {
    region: Rect,
}

impl Proportions {
    pub fn new(region: Rect) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Horizontal length: `⌊w × f⌋`
    pub fn dx(&self, f: f64) -> i32 {
        frac(self.region.w, f)
    }

    /// Vertical length: `⌊h × f⌋`
    pub fn dy(&self, f: f64) -> i32 {
        frac(self.region.h, f)
    }

    /// Absolute x at fraction `f` of the width
    pub fn x(&self, f: f64) -> i32 {
        self.region.x + self.dx(f)
    }

    /// Absolute y at fraction `f` of the height
    pub fn y(&self, f: f64) -> i32 {
        self.region.y + self.dy(f)
    }

    pub fn point(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x(fx), self.y(fy))
    }

    /// Rect from fractional position and size, clamped to the region
    pub fn rect(&self, fx: f64, fy: f64, fw: f64, fh: f64) -> Rect {
        self.clamp(Rect::new(self.x(fx), self.y(fy), self.dx(fw), self.dy(fh)))
    }

    /// Clamp an arbitrary rect into the region
    pub fn clamp(&self, rect: Rect) -> Rect {
        rect.clamp_to(&self.region)
    }

    /// Clamp a point into the region
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.region.x, self.region.right()),
            p.y.clamp(self.region.y, self.region.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frac_floors() {
        assert_eq!(frac(2796, 0.06), 167);
        assert_eq!(frac(1000, 0.035), 35);
        assert_eq!(frac(15, 0.5), 7);
        assert_eq!(frac(-10, 0.5), 0);
    }

    #[test]
    fn test_design_grid_scaling() {
        assert_eq!(design(1024, 340.0), 340);
        assert_eq!(design(512, 340.0), 170);
        assert_eq!(design(180, 200.0), 35);
    }

    #[test]
    fn test_proportions_rect_is_clamped() {
        let p = Proportions::new(Rect::new(100, 50, 200, 400));
        assert_eq!(p.rect(0.1, 0.1, 0.5, 0.5), Rect::new(120, 90, 100, 200));
        assert_eq!(p.rect(0.75, 0.0, 0.5, 0.1), Rect::new(250, 50, 50, 40));
    }
}
