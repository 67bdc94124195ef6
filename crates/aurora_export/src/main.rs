//! Asset generator
//!
//! Renders the app icon set and the store screenshots described by
//! `aurora.toml` (or the file named by `AURORA_CONFIG`).
//!
//! Usage:
//!   aurora-assets                          # Defaults: all screens, all sizes
//!   AURORA_CONFIG=ci.toml aurora-assets    # Custom config
//!   RUST_LOG=debug aurora-assets           # Font discovery and layout detail

use anyhow::{Context, Result};
use aurora_export::{AssetConfig, Batch, PngDirSink};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AssetConfig::load_default().context("Failed to load asset config")?;
    let mut sink = PngDirSink::new(&config.output_dir);
    let batch = Batch::with_system_fonts(config);

    let report = batch.run(&mut sink).context("Asset generation failed")?;

    println!(
        "Wrote {} files to {}",
        report.total(),
        sink.root().display()
    );
    Ok(())
}
