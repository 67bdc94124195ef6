//! Reminder settings: a list of rows, each with an on/off switch

use aurora_core::{Color, DrawContext, DrawContextExt, FontRole, Panel, Point, Rect};
use aurora_layout::{frac, Proportions, RowList};

use super::{circle_in, draw_header, role_text};
use crate::data::{Entry, REMINDERS};
use crate::palette::{DARK, GLASS_DENSE, GRAY, MINT, WHITE};

const ROW_HEIGHT: f64 = 0.08;
const ROW_GAP: f64 = 0.014;
const MARGIN: f64 = 0.05;

const TRACK_OFF: Color = Color::rgb(209, 213, 219);

/// Switch geometry inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch {
    pub track: Rect,
    pub knob: Rect,
}

/// Track at the right end of `row`; the knob sits right when `on`
pub fn switch_for(row: Rect, on: bool) -> Switch {
    let track_h = frac(row.h, 0.4);
    let track_w = (track_h * 9 / 5).min(frac(row.w, 0.25));
    let track = Rect::new(
        row.right() - frac(row.w, 0.05) - track_w,
        row.y + (row.h - track_h) / 2,
        track_w,
        track_h,
    )
    .clamp_to(&row);

    let inset = (track.h / 10).max(1).min(track.h / 2);
    let d = (track.h - 2 * inset).max(0);
    let knob_x = if on {
        track.right() - inset - d
    } else {
        track.x + inset
    };
    let knob = Rect::new(knob_x, track.y + inset, d, d).clamp_to(&track);
    Switch { track, knob }
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header(ctx, region, "Påminnelser");
    let p = Proportions::new(region);
    ctx.draw_text(
        "Välj när du vill bli påmind",
        Point::new(header.title_origin.x, header.below(0.045)),
        &role_text(FontRole::Caption, region, GRAY),
    );

    let rows = RowList::new(region, header.below(0.085), ROW_HEIGHT, ROW_GAP)
        .with_margin(MARGIN)
        .with_reserve(0.03);
    let radius = p.dx(0.035);
    for (entry, row) in REMINDERS.iter().zip(rows.layout(REMINDERS.len())) {
        draw_row(ctx, region, row, radius, entry);
    }
}

fn draw_row(ctx: &mut dyn DrawContext, region: Rect, row: Rect, radius: i32, entry: &Entry) {
    ctx.draw_panel(&Panel::new(row, radius, GLASS_DENSE));

    let stripe = Rect::new(
        row.x + frac(row.w, 0.04),
        row.y + frac(row.h, 0.25),
        frac(row.w, 0.012),
        frac(row.h, 0.5),
    )
    .clamp_to(&row);
    ctx.draw_panel(&Panel::new(stripe, stripe.w / 2, entry.accent));

    let text_x = stripe.right() + frac(row.w, 0.04);
    ctx.draw_text(
        entry.label,
        Point::new(text_x, row.y + frac(row.h, 0.18)),
        &role_text(FontRole::Body, region, DARK),
    );
    ctx.draw_text(
        entry.secondary,
        Point::new(text_x, row.y + frac(row.h, 0.54)),
        &role_text(FontRole::Caption, region, GRAY),
    );

    let switch = switch_for(row, entry.highlighted);
    let track_color = if entry.highlighted { MINT } else { TRACK_OFF };
    ctx.draw_panel(&Panel::pill(switch.track, track_color));
    let knob = switch.knob;
    ctx.fill_ellipse(circle_in(switch.track, knob.center(), knob.w / 2), WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composers::test_util::record;
    use aurora_core::DrawCommand;

    #[test]
    fn test_knob_side_follows_state() {
        let row = Rect::new(0, 0, 800, 100);
        let on = switch_for(row, true);
        let off = switch_for(row, false);
        assert_eq!(on.track, off.track);
        assert!(on.knob.center().x > on.track.center().x);
        assert!(off.knob.center().x < off.track.center().x);
        assert!(on.track.contains_rect(&on.knob));
    }

    #[test]
    fn test_tracks_colored_by_state() {
        let ctx = record(compose, 900, 1950);
        let tracks = ctx
            .commands()
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::FillRect { color, .. } if *color == MINT || *color == TRACK_OFF)
            })
            .count();
        assert_eq!(tracks, REMINDERS.len());
    }
}
