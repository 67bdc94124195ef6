//! Store screenshot composition
//!
//! Vertical background gradient, a centered marketing headline with a
//! subtitle under it, and a device frame showing one catalog screen.

use aurora_core::{
    DrawContext, DrawContextExt, FontRole, Gradient, Rect, Size, TextStyle,
};
use aurora_layout::{fit_text_size, frac};
use tracing::debug;

use crate::catalog::ScreenSpec;
use crate::composers::ContextMeasurer;
use crate::frame::{DeviceFrame, DeviceKind};
use crate::palette::WHITE;

/// Device width as a fraction of the canvas width
pub const DEVICE_WIDTH: f64 = 0.72;
/// Device top edge as a fraction of the canvas height
pub const DEVICE_TOP: f64 = 0.16;
/// Phone height to width ratio
pub const PHONE_ASPECT: f64 = 2.16;
/// Tablet height to width ratio
pub const TABLET_ASPECT: f64 = 1.4;
/// Canvases squatter than this get a tablet frame
pub const TABLET_THRESHOLD: f64 = 1.6;

const TITLE_TOP: f64 = 0.06;
const SUBTITLE_GAP: f64 = 0.045;
const SUBTITLE_SIZE: f64 = 0.018;
const TEXT_WIDTH: f64 = 0.9;

/// Device kind used for a canvas of `size`
pub fn device_kind(size: Size) -> DeviceKind {
    let ratio = size.height as f64 / size.width.max(1) as f64;
    if ratio < TABLET_THRESHOLD {
        DeviceKind::Tablet
    } else {
        DeviceKind::Phone
    }
}

/// Device frame placement for a screenshot canvas
///
/// The frame is horizontally centered and never extends below the canvas:
/// its height is the aspect height or the room left under the top offset,
/// whichever is smaller.
pub fn layout(size: Size) -> DeviceFrame {
    let w = size.width as i32;
    let h = size.height as i32;
    let kind = device_kind(size);
    let aspect = match kind {
        DeviceKind::Phone => PHONE_ASPECT,
        DeviceKind::Tablet => TABLET_ASPECT,
    };

    let device_w = frac(w, DEVICE_WIDTH);
    let top = frac(h, DEVICE_TOP);
    let device_h = frac(device_w, aspect).min(h - top);
    DeviceFrame::new(kind, Rect::new((w - device_w) / 2, top, device_w, device_h))
}

/// Paint a full screenshot for `screen` onto a canvas of `size`
pub fn compose(ctx: &mut dyn DrawContext, size: Size, screen: &ScreenSpec) {
    let canvas = size.to_rect();
    debug!(screen = screen.name, width = size.width, height = size.height, "composing screenshot");
    ctx.fill_gradient(canvas, &Gradient::vertical(screen.stops.clone()));

    let max_width = frac(canvas.w, TEXT_WIDTH);
    let title = fitted(
        &*ctx,
        screen.title,
        TextStyle::for_role(FontRole::Headline, canvas.h, WHITE),
        max_width,
    );
    let line_h = ctx.measure_text("Åg", &title).height.ceil() as i32;
    let extra_lines = screen.title.lines().count().saturating_sub(1) as i32;

    // Multi-line titles grow upwards around the single-line anchor
    let text_y = (frac(canvas.h, TITLE_TOP) - extra_lines * line_h / 2).max(0);
    for (i, line) in screen.title.lines().enumerate() {
        ctx.draw_text_centered(line, 0, canvas.w, text_y + i as i32 * line_h, &title);
    }

    let subtitle = fitted(
        &*ctx,
        screen.subtitle,
        TextStyle::new(FontRole::Caption, frac(canvas.h, SUBTITLE_SIZE) as f32, WHITE.with_alpha(200)),
        max_width,
    );
    let subtitle_y = text_y + frac(canvas.h, SUBTITLE_GAP) + extra_lines * line_h;
    ctx.draw_text_centered(screen.subtitle, 0, canvas.w, subtitle_y, &subtitle);

    layout(size).paint(ctx, |ctx, region| (screen.composer)(ctx, region));
}

fn fitted(ctx: &dyn DrawContext, text: &str, style: TextStyle, max_width: i32) -> TextStyle {
    fit_text_size(&ContextMeasurer(ctx), text, &style, max_width, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use aurora_core::{DrawCommand, RecordingContext};

    #[test]
    fn test_phone_layout_on_iphone_canvas() {
        let frame = layout(Size::new(1290, 2796));
        assert_eq!(frame.kind, DeviceKind::Phone);
        assert_eq!(frame.outer.w, 928);
        assert_eq!(frame.outer.x, (1290 - 928) / 2);
        assert_eq!(frame.outer.y, 447);
        assert_eq!(frame.outer.h, 2004);
    }

    #[test]
    fn test_frame_height_limited_by_canvas() {
        let frame = layout(Size::new(1242, 2208));
        assert_eq!(frame.kind, DeviceKind::Phone);
        assert_eq!(frame.outer.bottom(), 2208);
    }

    #[test]
    fn test_tablet_layout_on_ipad_canvas() {
        let frame = layout(Size::new(2064, 2752));
        assert_eq!(frame.kind, DeviceKind::Tablet);
        assert!(frame.outer.bottom() <= 2752);
    }

    #[test]
    fn test_one_pixel_canvas_keeps_device_on_canvas() {
        let size = Size::new(94, 1);
        let frame = layout(size);
        assert_eq!(frame.outer, Rect::new(13, 0, 67, 1));
        assert!(frame.outer.contains_rect(&frame.screen));

        let canvas = size.to_rect();
        for screen in crate::catalog() {
            let mut ctx = RecordingContext::new(size);
            compose(&mut ctx, size, &screen);
            for rect in ctx.shape_rects() {
                assert!(canvas.contains_rect(&rect), "{}: {rect:?}", screen.name);
            }
        }
    }

    #[test]
    fn test_background_then_text_then_device() {
        let size = Size::new(645, 1398);
        let mut ctx = RecordingContext::new(size);
        let home = find("home").unwrap();
        compose(&mut ctx, size, &home);

        let cmds = ctx.commands();
        assert!(matches!(
            &cmds[0],
            DrawCommand::FillGradient { rect, .. } if *rect == size.to_rect()
        ));
        let lines: Vec<&str> = cmds[1..4]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec!["Alla födelsedagar", "på ett ställe", home.subtitle]);
        assert!(matches!(cmds[4], DrawCommand::FillRect { .. }));
    }

    #[test]
    fn test_title_fits_canvas_width() {
        let size = Size::new(400, 2000);
        let mut ctx = RecordingContext::new(size);
        compose(&mut ctx, size, &find("gifts").unwrap());
        for cmd in ctx.commands() {
            if let DrawCommand::Text { text, origin, style } = cmd {
                if style.role == FontRole::Headline {
                    let width = ctx.measure_text(text, style).width;
                    assert!(origin.x >= 0, "{text} starts off canvas");
                    assert!(origin.x as f32 + width <= 400.0 + 1.0);
                }
            }
        }
    }
}
