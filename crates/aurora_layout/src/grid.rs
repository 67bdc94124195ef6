//! Two-column grid
//!
//! Cells are addressed by item index: `(row, col) = divmod(i, 2)`. Columns
//! share the region width with three equal margins (left, middle, right).

use aurora_core::Rect;

use crate::proportion::Proportions;

/// `(row, col)` of item `index` in a two-column grid
pub fn grid_position(index: usize) -> (usize, usize) {
    cell_position(index, 2)
}

/// `(row, col)` of item `index` in a grid with `columns` columns
pub fn cell_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}

/// Two-column card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid2 {
    region: Rect,
    top: i32,
    margin: i32,
    cell_width: i32,
    cell_height: i32,
    row_gap: i32,
    reserve: i32,
}

impl Grid2 {
    /// Grid starting at absolute `top`
    ///
    /// `margin_frac` is of the region width; `cell_frac` and `gap_frac` are of
    /// the region height.
    pub fn new(region: Rect, top: i32, margin_frac: f64, cell_frac: f64, gap_frac: f64) -> Self {
        let p = Proportions::new(region);
        let margin = p.dx(margin_frac);
        Self {
            region,
            top: top.clamp(region.y, region.bottom()),
            margin,
            cell_width: ((region.w - 3 * margin) / 2).max(0),
            cell_height: p.dy(cell_frac),
            row_gap: p.dy(gap_frac),
            reserve: 0,
        }
    }

    /// Space kept free at the bottom, as a fraction of the region height
    pub fn with_reserve(mut self, f: f64) -> Self {
        self.reserve = Proportions::new(self.region).dy(f);
        self
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    fn row_top(&self, row: usize) -> i64 {
        self.top as i64 + row as i64 * (self.cell_height + self.row_gap) as i64
    }

    /// Whether item `index` fits above the bottom reserve
    pub fn fits(&self, index: usize) -> bool {
        let (row, _) = grid_position(index);
        self.row_top(row) + self.cell_height as i64 <= (self.region.bottom() - self.reserve) as i64
    }

    /// Cell of item `index`, clamped to the region
    pub fn cell(&self, index: usize) -> Rect {
        let (row, col) = grid_position(index);
        let x = self.region.x + self.margin + col as i32 * (self.cell_width + self.margin);
        let y = self.row_top(row).min(i32::MAX as i64) as i32;
        Rect::new(x, y, self.cell_width, self.cell_height).clamp_to(&self.region)
    }

    /// Cells for up to `count` items; items past the reserve are dropped
    pub fn cells(&self, count: usize) -> Vec<Rect> {
        let cells: Vec<Rect> = (0..count)
            .take_while(|&i| self.fits(i))
            .map(|i| self.cell(i))
            .collect();
        if cells.len() < count {
            tracing::trace!("Grid holds {} of {} items", cells.len(), count);
        }
        cells
    }

    /// Y below `rows` full rows, gap included
    pub fn end_of(&self, rows: usize) -> i32 {
        self.row_top(rows).min(self.region.bottom() as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_position_divmod() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(3), (1, 1));
        assert_eq!(grid_position(4), (2, 0));
        assert_eq!(cell_position(13, 7), (1, 6));
    }

    #[test]
    fn test_cells_share_width() {
        let grid = Grid2::new(Rect::new(0, 0, 1000, 2000), 200, 0.05, 0.18, 0.02);
        assert_eq!(grid.margin(), 50);
        assert_eq!(grid.cell_width(), 425);
        assert_eq!(grid.cell(1), Rect::new(525, 200, 425, 360));
        assert_eq!(grid.cell(2), Rect::new(50, 600, 425, 360));
        assert_eq!(grid.end_of(2), 1000);
    }

    #[test]
    fn test_overflow_truncates() {
        let grid = Grid2::new(Rect::new(0, 0, 1000, 1000), 0, 0.05, 0.3, 0.05);
        // rows at 0, 350, 700; a fourth at 1050 would not fit
        assert_eq!(grid.cells(10).len(), 6);
    }

    proptest! {
        #[test]
        fn prop_cells_stay_in_region(w in 1i32..3000, h in 1i32..3000, count in 0usize..12) {
            let region = Rect::new(7, 11, w, h);
            let grid = Grid2::new(region, region.y + h / 5, 0.05, 0.18, 0.02);
            for cell in grid.cells(count) {
                prop_assert!(region.contains_rect(&cell));
            }
        }
    }
}
