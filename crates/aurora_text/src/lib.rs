//! Font resolution and text rasterization for Aurora
//!
//! This crate is the font collaborator of the renderer:
//! - Font discovery via fontdb, parsing via ttf-parser
//! - Role-based resolution (`FontProvider`) that always yields a usable handle
//! - A built-in bitmap glyph set used whenever no outline font is available
//! - Text measurement and coverage-mask rasterization

pub mod builtin;
pub mod config;
pub mod face;
pub mod handle;
pub mod provider;

pub use config::FontConfig;
pub use face::{FontFace, FontMetrics};
pub use handle::{FontHandle, GlyphMask};
pub use provider::{BuiltinFontProvider, FontProvider, SystemFontProvider};

use thiserror::Error;

/// Text errors
///
/// These never reach the layout engine; providers turn them into a fallback.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to parse font: {0}")]
    FontParseError(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
