//! Tiered tree placement
//!
//! Nodes sit on horizontal tiers (fractions of the region height) chosen by
//! their depth, and at fixed horizontal offsets from the region centre
//! (fractions of the region width). Depth is found by following parent links.

use aurora_core::{Point, Rect};
use smallvec::SmallVec;

use crate::proportion::{frac, Proportions};

/// Placement input for one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSlot {
    /// Index of the parent node in the same table
    pub parent: Option<usize>,
    /// Horizontal offset of the node centre from the region centre,
    /// as a fraction of the region width
    pub offset: f64,
}

impl TreeSlot {
    pub const fn root(offset: f64) -> Self {
        Self {
            parent: None,
            offset,
        }
    }

    pub const fn child_of(parent: usize, offset: f64) -> Self {
        Self {
            parent: Some(parent),
            offset,
        }
    }
}

/// Computed node circles and parent → child segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePlacement {
    /// Circle bounding box per node, in table order
    pub nodes: Vec<Rect>,
    /// `(parent, child)` index pairs
    pub edges: Vec<(usize, usize)>,
}

impl TreePlacement {
    pub fn center(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).map(Rect::center)
    }

    /// Edge segments as `(parent centre, child centre)`
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.edges
            .iter()
            .filter_map(|&(p, c)| Some((self.center(p)?, self.center(c)?)))
    }
}

/// Tier layout for a relationship diagram
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    region: Rect,
    tiers: SmallVec<[f64; 4]>,
    radius_frac: f64,
}

impl TreeLayout {
    /// `tiers[d]` is the centre line for depth `d` as a fraction of the region
    /// height; deeper nodes reuse the last tier. `radius_frac` is of the width.
    pub fn new(region: Rect, tiers: &[f64], radius_frac: f64) -> Self {
        Self {
            region,
            tiers: tiers.iter().copied().collect(),
            radius_frac,
        }
    }

    /// Node radius in pixels, never larger than half the region
    pub fn radius(&self) -> i32 {
        frac(self.region.w, self.radius_frac)
            .min(self.region.w / 2)
            .min(self.region.h / 2)
    }

    /// Depth of `index` by parent links
    ///
    /// Links pointing outside the table end the walk; cycles stop after
    /// visiting every node once.
    pub fn depth(slots: &[TreeSlot], index: usize) -> usize {
        let mut depth = 0;
        let mut current = slots.get(index).and_then(|s| s.parent);
        while let Some(parent) = current {
            if parent >= slots.len() || depth >= slots.len() {
                break;
            }
            depth += 1;
            current = slots[parent].parent;
        }
        depth
    }

    fn tier_y(&self, depth: usize) -> i32 {
        let f = self
            .tiers
            .get(depth)
            .or_else(|| self.tiers.last())
            .copied()
            .unwrap_or(0.5);
        Proportions::new(self.region).y(f)
    }

    /// Place every node and collect the edges
    pub fn place(&self, slots: &[TreeSlot]) -> TreePlacement {
        let r = self.radius();
        let region = self.region;
        let centre_x = region.x + region.w / 2;

        let nodes = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let offset = (region.w as f64 * slot.offset).floor() as i32;
                let cx = (centre_x + offset).clamp(region.x + r, region.right() - r);
                let cy = self
                    .tier_y(Self::depth(slots, i))
                    .clamp(region.y + r, region.bottom() - r);
                Rect::from_circle(Point::new(cx, cy), r).clamp_to(&region)
            })
            .collect();

        let edges = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot.parent {
                Some(p) if p < slots.len() && p != i => Some((p, i)),
                _ => None,
            })
            .collect();

        TreePlacement { nodes, edges }
    }
}
