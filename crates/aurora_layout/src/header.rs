//! Header band: the status bar strip and the title origin beneath it

use aurora_core::{Point, Rect};

use crate::proportion::{frac, Proportions};

/// Status bar and header positions for a screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBand {
    region: Rect,
    /// Strip at the top of the screen reserved for the status bar
    pub status_bar: Rect,
    /// Top-left corner of the screen title
    pub title_origin: Point,
}

impl HeaderBand {
    /// Status bar height as a fraction of the screen height
    pub const STATUS_BAR: f64 = 0.06;
    /// Gap between status bar and title
    pub const GAP: f64 = 0.02;
    /// Left inset of the title as a fraction of the screen width
    pub const INSET: f64 = 0.06;

    pub fn new(region: Rect, status_frac: f64, gap_frac: f64) -> Self {
        let p = Proportions::new(region);
        let status_bar = p.clamp(Rect::new(region.x, region.y, region.w, p.dy(status_frac)));
        let title_origin = p.clamp_point(Point::new(
            p.x(Self::INSET),
            region.y + status_bar.h + p.dy(gap_frac),
        ));
        Self {
            region,
            status_bar,
            title_origin,
        }
    }

    /// Header with the standard status bar and gap
    pub fn standard(region: Rect) -> Self {
        Self::new(region, Self::STATUS_BAR, Self::GAP)
    }

    /// Absolute y `f` screen heights below the title origin, clamped
    pub fn below(&self, f: f64) -> i32 {
        (self.title_origin.y + frac(self.region.h, f)).min(self.region.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_header() {
        let header = HeaderBand::standard(Rect::new(50, 100, 1000, 2000));
        assert_eq!(header.status_bar, Rect::new(50, 100, 1000, 120));
        assert_eq!(header.title_origin, Point::new(110, 260));
        assert_eq!(header.below(0.07), 400);
    }

    #[test]
    fn test_tiny_region_stays_inside() {
        let region = Rect::new(0, 0, 3, 2);
        let header = HeaderBand::new(region, 0.9, 0.9);
        assert!(region.contains_rect(&header.status_bar));
        assert!(header.title_origin.y <= region.bottom());
        assert!(header.below(5.0) <= region.bottom());
    }
}
