//! End-to-end rendering through the raster canvas

use std::sync::Arc;

use aurora_core::Color;
use aurora_export::{
    render_icon, render_screenshot, AssetConfig, Batch, MemorySink, PngDirSink, ScreenshotSize,
};
use aurora_screens::palette::{MINT, SKY, VIOLET};
use aurora_text::BuiltinFontProvider;
use image::RgbImage;

fn near(img: &RgbImage, x: u32, y: u32, expected: Color, tolerance: i32) -> bool {
    let [r, g, b] = img.get_pixel(x, y).0;
    [(r, expected.r), (g, expected.g), (b, expected.b)]
        .iter()
        .all(|(got, want)| (*got as i32 - *want as i32).abs() <= tolerance)
}

#[test]
fn master_icon_follows_the_aurora_gradient() {
    let icon = render_icon(1024, Arc::new(BuiltinFontProvider)).unwrap();
    assert_eq!(icon.dimensions(), (1024, 1024));

    assert!(near(&icon, 0, 0, VIOLET, 3), "corner {:?}", icon.get_pixel(0, 0));
    // 0.6 × 853 / 1024 lands on the middle stop; the cake sits lower down
    assert!(near(&icon, 853, 0, SKY, 4), "midpoint {:?}", icon.get_pixel(853, 0));
    assert!(near(&icon, 1023, 1023, MINT, 3), "bottom right {:?}", icon.get_pixel(1023, 1023));
}

#[test]
fn icon_cake_is_lighter_than_background() {
    let icon = render_icon(180, Arc::new(BuiltinFontProvider)).unwrap();
    // Middle of the cake body, below the frosting
    let body = icon.get_pixel(90, 118).0;
    let sky_ish = icon.get_pixel(150, 10).0;
    let luma = |p: [u8; 3]| p.iter().map(|c| *c as u32).sum::<u32>();
    assert!(luma(body) > luma(sky_ish));
}

#[test]
fn screenshot_has_requested_size() {
    let home = aurora_screens::find("home").unwrap();
    let img = render_screenshot(129, 280, &home, Arc::new(BuiltinFontProvider)).unwrap();
    assert_eq!(img.dimensions(), (129, 280));
    // Top of the background is the first gradient stop
    assert!(near(&img, 0, 0, VIOLET, 3));
}

#[test]
fn batch_writes_every_screen_per_size() {
    let config = AssetConfig {
        screens: vec!["home".into(), "calendar".into()],
        screenshots: vec![
            ScreenshotSize::new("small", 90, 195),
            ScreenshotSize::new("tablet", 150, 200),
        ],
        icons: false,
        ..AssetConfig::default()
    };
    let mut sink = MemorySink::new();
    let report = Batch::new(config, Arc::new(BuiltinFontProvider))
        .run(&mut sink)
        .unwrap();

    assert_eq!(report.screenshots, 4);
    assert_eq!(report.icons, 0);
    let shot = sink.get("assets/screenshots/tablet/07_calendar.png").unwrap();
    assert_eq!(shot.dimensions(), (150, 200));
}

#[test]
fn png_sink_round_trips_through_disk() {
    let root = std::env::temp_dir().join(format!("aurora-batch-{}", std::process::id()));
    let config = AssetConfig {
        output_dir: root.clone(),
        screens: vec!["gifts".into()],
        screenshots: vec![ScreenshotSize::new("small", 90, 195)],
        icons: false,
        ..AssetConfig::default()
    };
    let mut sink = PngDirSink::new(&config.output_dir);
    Batch::new(config, Arc::new(BuiltinFontProvider))
        .run(&mut sink)
        .unwrap();

    let written = image::open(root.join("assets/screenshots/small/05_gifts.png")).unwrap();
    assert_eq!((written.width(), written.height()), (90, 195));
    std::fs::remove_dir_all(&root).unwrap();
}
