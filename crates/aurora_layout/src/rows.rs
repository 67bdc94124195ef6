//! Vertical row lists
//!
//! Rows have a fixed height and gap, both fractions of the region height.
//! Row `i` starts at `top + i × (height + gap)`. Rows are emitted until the
//! next one would end below `region.bottom() - reserve`; whatever is left
//! over is dropped silently.

use aurora_core::Rect;

use crate::proportion::Proportions;

/// Fixed-height rows stacked from a top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowList {
    region: Rect,
    top: i32,
    row_height: i32,
    gap: i32,
    margin: i32,
    reserve: i32,
}

impl RowList {
    /// Rows starting at absolute `top` inside `region`
    pub fn new(region: Rect, top: i32, row_frac: f64, gap_frac: f64) -> Self {
        let p = Proportions::new(region);
        Self {
            region,
            top: top.clamp(region.y, region.bottom()),
            row_height: p.dy(row_frac),
            gap: p.dy(gap_frac),
            margin: 0,
            reserve: 0,
        }
    }

    /// Horizontal margin on both sides, as a fraction of the region width
    pub fn with_margin(mut self, f: f64) -> Self {
        self.margin = Proportions::new(self.region).dx(f);
        self
    }

    /// Space kept free at the bottom, as a fraction of the region height
    pub fn with_reserve(mut self, f: f64) -> Self {
        self.reserve = Proportions::new(self.region).dy(f);
        self
    }

    pub fn row_height(&self) -> i32 {
        self.row_height
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Lowest y a row may reach
    pub fn limit(&self) -> i32 {
        self.region.bottom() - self.reserve
    }

    /// Row rect by index, ignoring the overflow limit
    fn row_unchecked(&self, index: usize) -> Rect {
        let step = (self.row_height + self.gap) as i64;
        let y = (self.top as i64 + index as i64 * step).min(i32::MAX as i64) as i32;
        Rect::new(
            self.region.x + self.margin,
            y,
            self.region.w - 2 * self.margin,
            self.row_height,
        )
        .clamp_to(&self.region)
    }

    fn fits(&self, index: usize) -> bool {
        let step = (self.row_height + self.gap) as i64;
        let bottom = self.top as i64 + index as i64 * step + self.row_height as i64;
        bottom <= self.limit() as i64
    }

    /// Row `index`, or `None` if it falls past the limit
    pub fn row(&self, index: usize) -> Option<Rect> {
        self.fits(index).then(|| self.row_unchecked(index))
    }

    /// How many rows fit before the limit
    ///
    /// Degenerate lists with no vertical extent report `usize::MAX` when the
    /// first row fits, since every subsequent row lands on the same line.
    pub fn capacity(&self) -> usize {
        if !self.fits(0) {
            return 0;
        }
        let step = self.row_height + self.gap;
        if step <= 0 {
            return usize::MAX;
        }
        ((self.limit() - self.top - self.row_height) / step) as usize + 1
    }

    /// Rects for up to `count` rows
    pub fn layout(&self, count: usize) -> Vec<Rect> {
        let shown = count.min(self.capacity());
        if shown < count {
            tracing::trace!("Row list holds {} of {} entries", shown, count);
        }
        (0..shown).map(|i| self.row_unchecked(i)).collect()
    }

    /// Y just below the last of `rows` rows
    pub fn end_of(&self, rows: usize) -> i32 {
        if rows == 0 {
            return self.top;
        }
        let last = self.row_unchecked(rows - 1);
        last.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overflow_drops_extra_entries() {
        // 1000px tall: rows of 90 + 10 gap starting at 100, limit at 1000
        let rows = RowList::new(Rect::new(0, 0, 500, 1000), 100, 0.09, 0.01);
        let k = rows.capacity();
        assert_eq!(k, 9);
        assert_eq!(rows.layout(k + 5).len(), k);
        assert!(rows.row(k).is_none());
    }

    #[test]
    fn test_reserve_reduces_capacity() {
        let base = RowList::new(Rect::new(0, 0, 500, 1000), 100, 0.09, 0.01);
        let reserved = base.with_reserve(0.08);
        assert_eq!(reserved.limit(), 920);
        assert_eq!(reserved.capacity(), 8);
    }

    #[test]
    fn test_margin_insets_rows() {
        let rows = RowList::new(Rect::new(10, 0, 200, 1000), 0, 0.1, 0.0).with_margin(0.05);
        assert_eq!(rows.row(1), Some(Rect::new(20, 100, 180, 100)));
        assert_eq!(rows.end_of(2), 200);
    }

    #[test]
    fn test_zero_height_list() {
        let rows = RowList::new(Rect::new(0, 0, 10, 5), 0, 0.0, 0.0);
        assert_eq!(rows.capacity(), usize::MAX);
        assert_eq!(rows.layout(3).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_rows_stay_in_region(
            w in 1i32..3000,
            h in 1i32..3000,
            top_frac in 0.0f64..1.0,
            count in 0usize..20,
        ) {
            let region = Rect::new(0, 0, w, h);
            let top = (h as f64 * top_frac) as i32;
            let rows = RowList::new(region, top, 0.09, 0.015).with_margin(0.05).with_reserve(0.08);
            for r in rows.layout(count) {
                prop_assert!(region.contains_rect(&r));
                prop_assert!(r.bottom() <= rows.limit());
            }
        }
    }
}
