//! Aurora Core
//!
//! Foundational types shared by every Aurora crate:
//!
//! - **Colors**: 8-bit RGBA values and the truncating linear interpolator
//! - **Gradients**: 2–3 stop color sequences and the diagonal/vertical axis modes
//! - **Geometry**: integer pixel points, sizes and rectangles
//! - **Draw Context**: the primitive drawing API that composers target, plus a
//!   `RecordingContext` that captures commands for inspection or replay
//!
//! # Example
//!
//! ```rust
//! use aurora_core::{Color, DrawContext, DrawContextExt, Rect, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(200, 100));
//! ctx.fill_rect(Rect::new(10, 10, 80, 40), 8, Color::rgb(124, 92, 252));
//! ctx.fill_circle(aurora_core::Point::new(150, 50), 20, Color::WHITE);
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Color, ColorStops, Gradient, GradientAxis};
pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, EstimatedMeasurer, FontRole, Panel,
    RecordingContext, Stroke, TextMeasurer, TextMetrics, TextStyle,
};
pub use geometry::{Point, Rect, Size};

use thiserror::Error;

/// Errors raised while building core values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Gradients blend between two or three colors only
    #[error("a gradient needs 2 or 3 color stops, got {0}")]
    StopCount(usize),
}

pub type Result<T> = std::result::Result<T, CoreError>;
