//! Output targets: store screenshot sizes and icon size tables

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One output file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Path relative to the output root
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Target {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn square(path: impl Into<PathBuf>, side: u32) -> Self {
        Self::new(path, side, side)
    }
}

/// A named screenshot canvas size
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScreenshotSize {
    /// Directory name for this size
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl ScreenshotSize {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }

    /// Target for one screen at this size
    pub fn target(&self, file_stem: &str) -> Target {
        Target::new(
            PathBuf::from(SCREENSHOT_DIR)
                .join(&self.name)
                .join(format!("{file_stem}.png")),
            self.width,
            self.height,
        )
    }
}

const SCREENSHOT_DIR: &str = "assets/screenshots";
const ICON_DIR: &str = "assets/app_icon";
const IOS_ICON_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// App Store screenshot sizes
pub fn app_store_sizes() -> Vec<ScreenshotSize> {
    vec![
        ScreenshotSize::new("iphone_67", 1290, 2796),
        ScreenshotSize::new("iphone_65", 1284, 2778),
        ScreenshotSize::new("iphone_55", 1242, 2208),
        ScreenshotSize::new("ipad_13", 2064, 2752),
    ]
}

/// iOS asset catalog icons: file name and pixel side
pub const IOS_ICONS: &[(&str, u32)] = &[
    ("Icon-App-20x20@1x.png", 20),
    ("Icon-App-20x20@2x.png", 40),
    ("Icon-App-20x20@3x.png", 60),
    ("Icon-App-29x29@1x.png", 29),
    ("Icon-App-29x29@2x.png", 58),
    ("Icon-App-29x29@3x.png", 87),
    ("Icon-App-40x40@1x.png", 40),
    ("Icon-App-40x40@2x.png", 80),
    ("Icon-App-40x40@3x.png", 120),
    ("Icon-App-60x60@2x.png", 120),
    ("Icon-App-60x60@3x.png", 180),
    ("Icon-App-76x76@1x.png", 76),
    ("Icon-App-76x76@2x.png", 152),
    ("Icon-App-83.5x83.5@2x.png", 167),
];

/// Android launcher icons: mipmap density directory and pixel side
pub const ANDROID_ICONS: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Every icon file, App Store master first
pub fn icon_targets() -> Vec<Target> {
    let mut targets = vec![
        Target::square(format!("{ICON_DIR}/app_icon_1024.png"), 1024),
        Target::square(format!("{IOS_ICON_DIR}/Icon-App-1024x1024@1x.png"), 1024),
    ];
    targets.extend(
        IOS_ICONS
            .iter()
            .map(|(name, side)| Target::square(format!("{IOS_ICON_DIR}/{name}"), *side)),
    );
    targets.extend(ANDROID_ICONS.iter().map(|(dir, side)| {
        Target::square(format!("{ANDROID_RES_DIR}/{dir}/ic_launcher.png"), *side)
    }));
    targets.extend([
        Target::square("web/icons/Icon-192.png", 192),
        Target::square("web/icons/Icon-512.png", 512),
        Target::square("web/favicon.png", 16),
        Target::square(format!("{ICON_DIR}/play_store_512.png"), 512),
    ]);
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_icon_paths_unique() {
        let targets = icon_targets();
        let paths: HashSet<_> = targets.iter().map(|t| &t.path).collect();
        assert_eq!(paths.len(), targets.len());
        assert_eq!(targets.len(), 2 + IOS_ICONS.len() + ANDROID_ICONS.len() + 4);
    }

    #[test]
    fn test_icons_are_square() {
        assert!(icon_targets().iter().all(|t| t.width == t.height && t.width > 0));
        assert!(icon_targets().iter().any(|t| t.width == 16));
    }

    #[test]
    fn test_screenshot_target_path() {
        let size = ScreenshotSize::new("iphone_67", 1290, 2796);
        let target = size.target("01_home");
        assert_eq!(target.path, PathBuf::from("assets/screenshots/iphone_67/01_home.png"));
        assert_eq!((target.width, target.height), (1290, 2796));
    }
}
