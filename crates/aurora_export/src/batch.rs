//! Batch driver: renders every configured target into a sink
//!
//! Targets are rendered one after the other on a fresh canvas each. The font
//! provider is the only thing shared between renders.

use std::sync::Arc;
use std::time::Instant;

use aurora_screens::catalog::names;
use aurora_screens::{catalog, ScreenSpec};
use aurora_text::{FontProvider, SystemFontProvider};
use tracing::{info, info_span, warn};

use crate::config::AssetConfig;
use crate::render::{render_icon, render_screenshot};
use crate::sink::ImageSink;
use crate::targets::{icon_targets, Target};
use crate::{ExportError, Result};

/// Counts of written files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub icons: usize,
    pub screenshots: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.icons + self.screenshots
    }
}

pub struct Batch {
    config: AssetConfig,
    fonts: Arc<dyn FontProvider>,
}

impl Batch {
    pub fn new(config: AssetConfig, fonts: Arc<dyn FontProvider>) -> Self {
        Self { config, fonts }
    }

    /// Batch using the system fonts named in the config's `[fonts]` table
    pub fn with_system_fonts(config: AssetConfig) -> Self {
        let fonts = Arc::new(SystemFontProvider::new(&config.fonts));
        Self::new(config, fonts)
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Screens selected by the config, in catalog order
    pub fn screens(&self) -> Result<Vec<ScreenSpec>> {
        let all = catalog();
        if self.config.screens.is_empty() {
            return Ok(all);
        }
        if let Some(unknown) = self
            .config
            .screens
            .iter()
            .find(|name| !all.iter().any(|s| s.name == name.as_str()))
        {
            warn!("Known screens: {}", names().join(", "));
            return Err(ExportError::UnknownScreen(unknown.clone()));
        }
        Ok(all
            .into_iter()
            .filter(|s| self.config.screens.iter().any(|n| n == s.name))
            .collect())
    }

    /// Screenshot targets paired with the screen drawn into each
    pub fn screenshot_targets(&self) -> Result<Vec<(Target, ScreenSpec)>> {
        let screens = self.screens()?;
        Ok(self
            .config
            .screenshots
            .iter()
            .flat_map(|size| {
                screens
                    .iter()
                    .map(move |screen| (size.target(screen.file_stem), screen.clone()))
            })
            .collect())
    }

    pub fn run(&self, sink: &mut dyn ImageSink) -> Result<BatchReport> {
        let start = Instant::now();
        let mut report = BatchReport::default();

        // Resolve screen names before any file is written
        let shots = self.screenshot_targets()?;

        if self.config.icons {
            let _span = info_span!("icons").entered();
            for target in icon_targets() {
                let image = render_icon(target.width, self.fonts.clone())?;
                sink.accept(&image, &target)?;
                report.icons += 1;
            }
        }

        {
            let _span = info_span!("screenshots").entered();
            for (target, screen) in &shots {
                let image =
                    render_screenshot(target.width, target.height, screen, self.fonts.clone())?;
                sink.accept(&image, target)?;
                report.screenshots += 1;
            }
        }

        info!(
            "Generated {} icons and {} screenshots in {:.2?}",
            report.icons,
            report.screenshots,
            start.elapsed()
        );
        Ok(report)
    }
}
