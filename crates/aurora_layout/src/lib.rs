//! Aurora Layout Engine
//!
//! Turns a bounding region and a handful of fractions into absolute pixel
//! rectangles. Nothing in here knows about absolute pixel constants: every
//! size and offset is `dimension × fraction`, floored, which is what lets the
//! same composer render a 16px favicon and a 2796px screenshot.
//!
//! - [`proportion`]: `frac`, `design` and the `Proportions` helper
//! - [`header`]: status bar band and header origin
//! - [`rows`]: vertical row lists with the overflow policy
//! - [`grid`]: two-column grid (`divmod(i, 2)`)
//! - [`tree`]: tiered node placement for relationship diagrams
//! - [`text_fit`]: badge pills and shrink-to-fit font sizing
//!
//! Every rectangle handed back is clamped to the region it was computed in.
//!
//! # Example
//!
//! ```rust
//! use aurora_core::Rect;
//! use aurora_layout::RowList;
//!
//! let screen = Rect::new(0, 0, 400, 800);
//! let rows = RowList::new(screen, 100, 0.09, 0.015).with_margin(0.05);
//! let laid_out = rows.layout(6);
//! assert!(laid_out.iter().all(|r| screen.contains_rect(r)));
//! ```

pub mod grid;
pub mod header;
pub mod proportion;
pub mod rows;
pub mod text_fit;
pub mod tree;

pub use grid::{cell_position, grid_position, Grid2};
pub use header::HeaderBand;
pub use proportion::{design, frac, Proportions, DESIGN_GRID};
pub use rows::RowList;
pub use text_fit::{fit_text_size, pill_for_text, widest_line, Pill};
pub use tree::{TreeLayout, TreePlacement, TreeSlot};
