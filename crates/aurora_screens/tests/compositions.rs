//! Cross-module layout properties of the screen compositions

use aurora_core::{DrawCommand, RecordingContext, Rect, Size};
use aurora_screens::composers::countdown;
use aurora_screens::{catalog, icon, screenshot, DeviceFrame};
use proptest::prelude::*;

fn shape_rects(ctx: &RecordingContext) -> Vec<Rect> {
    ctx.commands().iter().filter_map(DrawCommand::shape_rect).collect()
}

fn assert_inside(bounds: Rect, rects: &[Rect], what: &str) {
    for rect in rects {
        assert!(
            bounds.contains_rect(rect),
            "{what}: {rect:?} escapes {bounds:?}"
        );
        assert!(rect.w >= 0 && rect.h >= 0, "{what}: negative size {rect:?}");
    }
}

proptest! {
    #[test]
    fn composers_stay_in_their_region(w in 1i32..900, h in 1i32..2000, dx in 0i32..40, dy in 0i32..40) {
        let region = Rect::new(dx, dy, w, h);
        let canvas = Size::new((w + 2 * dx) as u32, (h + 2 * dy) as u32);
        for screen in catalog() {
            let mut ctx = RecordingContext::new(canvas);
            (screen.composer)(&mut ctx, region);
            assert_inside(region, &shape_rects(&ctx), screen.name);
        }
    }

    #[test]
    fn screenshots_stay_on_canvas(w in 1u32..1400, h in 1u32..3000) {
        let size = Size::new(w, h);
        for screen in catalog() {
            let mut ctx = RecordingContext::new(size);
            screenshot::compose(&mut ctx, size, &screen);
            assert_inside(size.to_rect(), &shape_rects(&ctx), screen.name);
        }
    }

    #[test]
    fn frames_stay_inside_outer_rect(x in 0i32..200, y in 0i32..200, w in 0i32..1500, h in 0i32..3000) {
        let outer = Rect::new(x, y, w, h);
        for frame in [DeviceFrame::phone(outer), DeviceFrame::tablet(outer)] {
            assert!(outer.contains_rect(&frame.screen));
            assert!(outer.contains_rect(&frame.sensor()));
        }
    }

    #[test]
    fn icon_stays_on_canvas(side in 1u32..2048) {
        let canvas = Rect::new(0, 0, side as i32, side as i32);
        assert_inside(canvas, &icon::layout(side).rects(), "icon");
    }
}

#[test]
fn composers_scale_with_the_region() {
    let small = Rect::new(0, 0, 600, 1300);
    let large = Rect::new(0, 0, 1200, 2600);
    for screen in catalog() {
        let mut a = RecordingContext::new(Size::new(600, 1300));
        let mut b = RecordingContext::new(Size::new(1200, 2600));
        (screen.composer)(&mut a, small);
        (screen.composer)(&mut b, large);

        let ra = shape_rects(&a);
        let rb = shape_rects(&b);
        assert_eq!(ra.len(), rb.len(), "{} drew a different element count", screen.name);
        for (x, y) in ra.iter().zip(&rb) {
            let fa = x.fraction_of(&small);
            let fb = y.fraction_of(&large);
            for k in 0..4 {
                assert!(
                    (fa[k] - fb[k]).abs() <= 0.012,
                    "{}: {x:?} vs {y:?}",
                    screen.name
                );
            }
        }
    }
}

#[test]
fn countdown_panel_matches_across_phone_sizes() {
    let tall = screenshot::layout(Size::new(1290, 2796)).screen;
    let short = screenshot::layout(Size::new(1242, 2208)).screen;

    let a = countdown::layout(tall).number_panel.fraction_of(&tall);
    let b = countdown::layout(short).number_panel.fraction_of(&short);
    for k in 0..4 {
        assert!((a[k] - b[k]).abs() < 0.005, "panel {a:?} vs {b:?}");
    }
}

#[test]
fn icon_cake_scales_down_to_180() {
    let master = icon::layout(1024);
    let small = icon::layout(180);
    let scale = 180.0 / 1024.0;

    let close = |big: Rect, little: Rect, tolerance: f32| {
        let edges = [
            (big.x, little.x),
            (big.y, little.y),
            (big.right(), little.right()),
            (big.bottom(), little.bottom()),
        ];
        edges
            .iter()
            .all(|(b, l)| (*b as f32 * scale - *l as f32).abs() <= tolerance)
    };

    assert!(close(master.body, small.body, 1.0), "{:?} vs {:?}", master.body, small.body);
    // Thin parts stack several floors; allow a little more drift
    for (big, little) in master.rects().into_iter().zip(small.rects()) {
        assert!(close(big, little, 3.0), "{big:?} vs {little:?}");
    }
}
