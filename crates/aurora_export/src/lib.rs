//! Aurora Export
//!
//! Turns compositions into files:
//!
//! - [`targets`]: store screenshot sizes and the icon size tables
//! - [`render`]: raster pipeline (supersampled icons, flattened RGB output)
//! - [`sink`]: where finished images go (`PngDirSink`, `MemorySink`)
//! - [`config`]: TOML asset configuration
//! - [`batch`]: renders every configured target into a sink
//!
//! # Example
//!
//! ```ignore
//! use aurora_export::{AssetConfig, Batch, PngDirSink};
//!
//! let config = AssetConfig::load_default()?;
//! let mut sink = PngDirSink::new(&config.output_dir);
//! Batch::with_system_fonts(config).run(&mut sink)?;
//! ```

pub mod batch;
pub mod config;
pub mod render;
pub mod sink;
pub mod targets;

pub use batch::{Batch, BatchReport};
pub use config::AssetConfig;
pub use render::{render_icon, render_screenshot};
pub use sink::{ImageSink, MemorySink, PngDirSink};
pub use targets::{ScreenshotSize, Target};

use thiserror::Error;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid asset config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown screen '{0}'")]
    UnknownScreen(String),

    #[error("Canvas error: {0}")]
    Paint(#[from] aurora_paint::PaintError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
