//! Font providers
//!
//! A provider turns a logical `FontRole` into a `FontHandle`. Resolution can
//! never fail: when no configured or known font can be located the provider
//! hands out the built-in glyph set instead.

use std::path::Path;
use std::sync::Arc;

use aurora_core::FontRole;
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rustc_hash::FxHashMap;

use crate::config::FontConfig;
use crate::face::FontFace;
use crate::handle::FontHandle;

/// Resolves font roles into renderable handles
pub trait FontProvider: Send + Sync {
    /// Handle for `role` at an explicit pixel size
    fn resolve_px(&self, role: FontRole, size: f32) -> FontHandle;

    /// Handle for `role` sized by its fraction of `canvas_height`
    fn resolve(&self, role: FontRole, canvas_height: u32) -> FontHandle {
        self.resolve_px(role, role.size_for_height(canvas_height as i32))
    }
}

/// Provider that only ever uses the built-in glyph set
///
/// Deterministic on every machine, which makes it the provider of choice for
/// tests and headless environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontProvider;

impl FontProvider for BuiltinFontProvider {
    fn resolve_px(&self, _role: FontRole, size: f32) -> FontHandle {
        FontHandle::builtin(size)
    }
}

/// Known system font paths for each platform
/// These are loaded directly without scanning all system fonts
#[cfg(target_os = "macos")]
const KNOWN_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/HelveticaNeue.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
];

#[cfg(target_os = "windows")]
const KNOWN_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const KNOWN_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
];

/// Provider backed by fontdb discovery
///
/// All roles are resolved once at construction; afterwards the provider is
/// immutable and can be shared freely.
pub struct SystemFontProvider {
    faces: FxHashMap<FontRole, Arc<FontFace>>,
}

impl SystemFontProvider {
    /// Discover fonts according to `config`
    ///
    /// Loads the known platform fonts and the configured paths first. A full
    /// system scan only happens if some role is still unresolved afterwards.
    pub fn new(config: &FontConfig) -> Self {
        let mut db = Database::new();

        let mut loaded_count = 0;
        for path in KNOWN_FONT_PATHS {
            if Path::new(path).exists() && db.load_font_file(path).is_ok() {
                loaded_count += 1;
            }
        }
        tracing::debug!("Loaded {} known system fonts", loaded_count);

        for path in &config.paths {
            if let Err(e) = db.load_font_file(path) {
                tracing::warn!("Could not load font {}: {}", path.display(), e);
            }
        }

        let mut provider = Self::from_database(&db, config);
        if provider.faces.len() < FontRole::ALL.len() && config.scan_system {
            tracing::debug!("Loading all system fonts (lazy scan)...");
            db.load_system_fonts();
            tracing::debug!("System fonts loaded: {} faces", db.faces().count());
            provider = Self::from_database(&db, config);
        }
        provider
    }

    /// Resolve roles against an already populated database
    pub fn from_database(db: &Database, config: &FontConfig) -> Self {
        let mut faces = FxHashMap::default();
        for role in FontRole::ALL {
            match query_face(db, config, role) {
                Some(face) => {
                    tracing::debug!("Font for {:?}: '{}'", role, face.family_name());
                    faces.insert(role, Arc::new(face));
                }
                None => tracing::warn!("No font found for {:?}, using built-in glyphs", role),
            }
        }
        Self { faces }
    }

    /// Number of roles backed by an outline font
    pub fn resolved_roles(&self) -> usize {
        self.faces.len()
    }
}

impl FontProvider for SystemFontProvider {
    fn resolve_px(&self, role: FontRole, size: f32) -> FontHandle {
        match self.faces.get(&role) {
            Some(face) => FontHandle::outline(face.clone(), size),
            None => FontHandle::builtin(size),
        }
    }
}

impl std::fmt::Debug for SystemFontProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for role in FontRole::ALL {
            if let Some(face) = self.faces.get(&role) {
                map.entry(&role, &face.family_name());
            }
        }
        map.finish()
    }
}

fn query_face(db: &Database, config: &FontConfig, role: FontRole) -> Option<FontFace> {
    let mut families: Vec<Family<'_>> = config
        .families
        .iter()
        .map(|name| Family::Name(name.as_str()))
        .collect();
    families.push(Family::SansSerif);

    let query = Query {
        families: &families,
        weight: if role.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        },
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db.query(&query)?;
    let parsed = db.with_face_data(id, |data, index| {
        FontFace::from_data_with_index(data.to_vec(), index)
    })?;
    match parsed {
        Ok(face) => Some(face),
        Err(e) => {
            tracing::warn!("Skipping unreadable font for {:?}: {}", role, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_falls_back() {
        let provider = SystemFontProvider::from_database(&Database::new(), &FontConfig::default());
        assert_eq!(provider.resolved_roles(), 0);
        for role in FontRole::ALL {
            assert!(provider.resolve_px(role, 24.0).is_fallback());
        }
    }

    #[test]
    fn test_resolve_uses_role_fraction() {
        let handle = BuiltinFontProvider.resolve(FontRole::Title, 2000);
        assert_eq!(handle.size(), 70.0);
    }
}
