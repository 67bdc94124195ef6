//! Font provider configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which fonts the system provider should try, in order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred family names, tried before the generic sans-serif family
    pub families: Vec<String>,
    /// Extra font files to load (bundled fonts)
    pub paths: Vec<PathBuf>,
    /// Scan all system font directories when the known fonts don't match
    pub scan_system: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            families: [
                "Helvetica",
                "Helvetica Neue",
                "Arial",
                "DejaVu Sans",
                "Liberation Sans",
                "Noto Sans",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            paths: Vec::new(),
            scan_system: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FontConfig = toml::from_str(r#"paths = ["fonts/Inter.ttf"]"#).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("fonts/Inter.ttf")]);
        assert_eq!(config.families, FontConfig::default().families);
        assert!(config.scan_system);
    }
}
