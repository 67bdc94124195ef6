//! Brand palette

use aurora_core::Color;

pub const VIOLET: Color = Color::rgb(124, 92, 252);
pub const SKY: Color = Color::rgb(103, 195, 243);
pub const MINT: Color = Color::rgb(110, 231, 183);
pub const CORAL: Color = Color::rgb(255, 107, 138);
pub const PEACH: Color = Color::rgb(255, 176, 136);
pub const LAVENDER: Color = Color::rgb(167, 139, 250);
pub const GOLD: Color = Color::rgb(255, 215, 0);
pub const WHITE: Color = Color::WHITE;

/// Primary text
pub const DARK: Color = Color::rgb(26, 26, 46);
/// Secondary text
pub const GRAY: Color = Color::rgb(107, 114, 128);
/// Weekday labels, placeholders
pub const MUTED: Color = Color::rgb(150, 150, 160);
/// Inactive nav dots, disabled switch tracks
pub const INACTIVE: Color = Color::rgb(180, 180, 190);

/// Frosted card fill
pub const GLASS: Color = Color::rgba(255, 255, 255, 200);
/// Slightly denser card fill
pub const GLASS_DENSE: Color = Color::rgba(255, 255, 255, 220);

/// Device body
pub const DEVICE_BODY: Color = Color::rgb(20, 20, 30);
/// Screen background inside the bezel
pub const SCREEN: Color = Color::rgb(245, 243, 255);
