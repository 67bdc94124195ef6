//! Aurora Screens
//!
//! Everything that decides *what* ends up on an asset:
//!
//! - [`composers`]: the mock app screens, one function per screen
//! - [`frame`]: phone and tablet device frames around a composer
//! - [`screenshot`] and [`icon`]: full canvas compositions
//! - [`catalog`]: marketing copy and background per screenshot
//! - [`data`] and [`palette`]: sample content and brand colors
//!
//! Nothing here touches pixels. Compositions draw through
//! `aurora_core::DrawContext`, so the same call can fill a raster canvas or a
//! `RecordingContext` under test.
//!
//! # Example
//!
//! ```rust
//! use aurora_core::{RecordingContext, Size};
//! use aurora_screens::{catalog, screenshot};
//!
//! let size = Size::new(645, 1398);
//! let mut ctx = RecordingContext::new(size);
//! let home = catalog::find("home").unwrap();
//! screenshot::compose(&mut ctx, size, &home);
//! assert!(!ctx.commands().is_empty());
//! ```

pub mod catalog;
pub mod composers;
pub mod data;
pub mod frame;
pub mod icon;
pub mod palette;
pub mod screenshot;

pub use catalog::{catalog, find, ScreenSpec};
pub use composers::Composer;
pub use frame::{DeviceFrame, DeviceKind};
