//! Aurora Paint
//!
//! CPU rasterization of the Aurora draw API. `Canvas` implements
//! `aurora_core::DrawContext` on top of a tiny-skia pixmap:
//!
//! - Anti-aliased rounded rectangles, ellipses and line segments
//! - Gradient fills painted pixel by pixel (see [`gradient`])
//! - Text rendered through an `aurora_text::FontProvider`
//! - Conversion to `image` buffers for the output sink
//!
//! # Example
//!
//! ```ignore
//! use aurora_paint::Canvas;
//! use aurora_core::{Color, DrawContext, Rect};
//!
//! let mut canvas = Canvas::new(512, 512, Arc::new(BuiltinFontProvider))?;
//! canvas.fill_rect(Rect::new(32, 32, 200, 120), 16, Color::rgb(124, 92, 252));
//! let image = canvas.to_rgb_image(Color::WHITE);
//! ```

pub mod canvas;
pub mod gradient;
pub mod shapes;

pub use canvas::Canvas;
pub use gradient::{gradient_progress, paint_gradient};

use thiserror::Error;

/// Errors creating a canvas
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Width or height of zero
    #[error("Invalid canvas size {width}x{height}: width and height must be > 0")]
    InvalidSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PaintError>;
