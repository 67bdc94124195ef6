//! Asset configuration
//!
//! ```toml
//! output_dir = "build/assets"
//! screens = ["home", "gifts"]
//! icons = false
//!
//! [[screenshots]]
//! name = "iphone_67"
//! width = 1290
//! height = 2796
//!
//! [fonts]
//! families = ["Inter"]
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::path::{Path, PathBuf};

use aurora_text::FontConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::targets::{app_store_sizes, ScreenshotSize};
use crate::Result;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "AURORA_CONFIG";
/// Config file read when `AURORA_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "aurora.toml";

/// What to render and where to put it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root that target paths are resolved against
    pub output_dir: PathBuf,
    /// Catalog screens to render; empty means all of them
    pub screens: Vec<String>,
    /// Screenshot canvas sizes
    pub screenshots: Vec<ScreenshotSize>,
    /// Whether to render the icon set
    pub icons: bool,
    pub fonts: FontConfig,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            screens: Vec::new(),
            screenshots: app_store_sizes(),
            icons: true,
            fonts: FontConfig::default(),
        }
    }
}

impl AssetConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        debug!("Loaded asset config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Load from `$AURORA_CONFIG`, else `aurora.toml`, else defaults
    ///
    /// A path named by the environment variable must exist; the default file
    /// is optional.
    pub fn load_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            warn!("No {} found, using default asset config", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AssetConfig::from_toml_str("").unwrap(), AssetConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AssetConfig::from_toml_str(
            r#"
            output_dir = "out"
            screens = ["home"]
            icons = false

            [[screenshots]]
            name = "small"
            width = 320
            height = 640

            [fonts]
            scan_system = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.screens, vec!["home".to_string()]);
        assert!(!config.icons);
        assert_eq!(config.screenshots, vec![ScreenshotSize::new("small", 320, 640)]);
        assert!(!config.fonts.scan_system);
        assert_eq!(config.fonts.families, FontConfig::default().families);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AssetConfig::from_toml_str("icons = \"yes\"").unwrap_err();
        assert!(matches!(err, crate::ExportError::Config(_)));
    }
}
