//! Screen composers
//!
//! Each composer paints one mock app screen into the screen rectangle handed
//! to it by the device frame. Composers are plain functions: they read their
//! sample content from [`crate::data`], derive every position from the region
//! through `aurora_layout`, and issue primitive draw calls. Content that does
//! not fit is dropped, never reported.

pub mod calendar;
pub mod countdown;
pub mod gifts;
pub mod home;
pub mod import;
pub mod premium;
pub mod relations;
pub mod reminders;

use aurora_core::{
    Color, DrawContext, DrawContextExt, FontRole, Panel, Point, Rect, TextMeasurer, TextMetrics,
    TextStyle,
};
use aurora_layout::{frac, HeaderBand, Proportions};

use crate::palette::{DARK, WHITE};

/// Signature shared by every composer
pub type Composer = fn(&mut dyn DrawContext, Rect);

/// Text style sized by the role's default fraction of the screen height
pub(crate) fn role_text(role: FontRole, region: Rect, color: Color) -> TextStyle {
    TextStyle::for_role(role, region.h, color)
}

/// Text style sized by an explicit fraction of the screen height
pub(crate) fn sized_text(role: FontRole, region: Rect, f: f64, color: Color) -> TextStyle {
    TextStyle::new(role, frac(region.h, f) as f32, color)
}

/// Status bar clock and battery, then the screen title
pub(crate) fn draw_header(ctx: &mut dyn DrawContext, region: Rect, title: &str) -> HeaderBand {
    draw_header_styled(ctx, region, title, role_text(FontRole::Title, region, DARK))
}

pub(crate) fn draw_header_styled(
    ctx: &mut dyn DrawContext,
    region: Rect,
    title: &str,
    style: TextStyle,
) -> HeaderBand {
    let header = HeaderBand::standard(region);
    let bar = header.status_bar;
    let p = Proportions::new(region);

    let clock = sized_text(FontRole::Caption, region, 0.014, DARK);
    let clock_y = bar.y + (bar.h - clock.size as i32) / 2;
    ctx.draw_text("9:41", Point::new(p.x(0.1), clock_y), &clock);

    let battery = p.clamp(Rect::new(
        p.x(0.82),
        bar.y + bar.h * 2 / 5,
        p.dx(0.07),
        bar.h / 5,
    ));
    ctx.draw_panel(&Panel::new(battery, battery.h / 3, DARK));

    ctx.draw_text(title, header.title_origin, &style);
    header
}

/// Bounding box of a circle, clamped to `bounds`
pub(crate) fn circle_in(bounds: Rect, center: Point, radius: i32) -> Rect {
    Rect::from_circle(center, radius).clamp_to(&bounds)
}

/// Filled circle with a centered initial
pub(crate) fn draw_avatar(
    ctx: &mut dyn DrawContext,
    bounds: Rect,
    center: Point,
    radius: i32,
    color: Color,
    initial: &str,
) {
    ctx.fill_ellipse(circle_in(bounds, center, radius), color);
    let style = TextStyle::new(FontRole::Body, radius as f32, WHITE);
    ctx.draw_text_at_center(initial, center, &style);
}

/// Borrow a draw context as a `TextMeasurer`
pub(crate) struct ContextMeasurer<'a>(pub &'a dyn DrawContext);

impl TextMeasurer for ContextMeasurer<'_> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.0.measure_text(text, style)
    }
}
