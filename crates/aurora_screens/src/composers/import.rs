//! Contact import: search field, selectable contacts, import button

use aurora_core::{DrawContext, DrawContextExt, FontRole, Panel, Point, Rect, Stroke};
use aurora_layout::{frac, Proportions, RowList};

use super::{draw_avatar, draw_header, role_text};
use crate::data::{Entry, CONTACTS};
use crate::palette::{DARK, GLASS_DENSE, GRAY, INACTIVE, MUTED, VIOLET, WHITE};

const ROW_HEIGHT: f64 = 0.07;
const ROW_GAP: f64 = 0.01;
const MARGIN: f64 = 0.05;
const BUTTON_HEIGHT: f64 = 0.06;
/// Room below the last row for the import button
const BUTTON_RESERVE: f64 = 0.11;

/// Label for the import button
pub fn button_label(selected: usize) -> String {
    format!("Importera {} kontakter", selected)
}

/// Square check box at the right end of `row`
pub fn checkbox_for(row: Rect) -> Rect {
    let side = frac(row.h, 0.34).min(frac(row.w, 0.1));
    Rect::new(
        row.right() - frac(row.w, 0.06) - side,
        row.y + (row.h - side) / 2,
        side,
        side,
    )
    .clamp_to(&row)
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header(ctx, region, "Importera kontakter");
    let p = Proportions::new(region);
    let margin = p.dx(MARGIN);

    let search = p.clamp(Rect::new(
        region.x + margin,
        header.below(0.06),
        region.w - 2 * margin,
        p.dy(0.05),
    ));
    ctx.draw_panel(&Panel::pill(search, GLASS_DENSE));
    let hint = role_text(FontRole::Caption, region, MUTED);
    let hint_y = search.y + (search.h - hint.size as i32) / 2;
    ctx.draw_text("Sök kontakter", Point::new(search.x + frac(search.w, 0.06), hint_y), &hint);

    let rows = RowList::new(region, search.bottom() + p.dy(0.02), ROW_HEIGHT, ROW_GAP)
        .with_margin(MARGIN)
        .with_reserve(BUTTON_RESERVE);
    for (entry, row) in CONTACTS.iter().zip(rows.layout(CONTACTS.len())) {
        draw_contact(ctx, region, row, entry);
    }

    let selected = CONTACTS.iter().filter(|c| c.highlighted).count();
    let button = p.clamp(Rect::new(
        region.x + margin,
        region.bottom() - p.dy(0.03) - p.dy(BUTTON_HEIGHT),
        region.w - 2 * margin,
        p.dy(BUTTON_HEIGHT),
    ));
    ctx.draw_panel(&Panel::pill(button, VIOLET));
    let label = role_text(FontRole::Body, region, WHITE);
    let label_y = button.y + (button.h - label.size as i32) / 2;
    ctx.draw_text_centered(&button_label(selected), button.x, button.w, label_y, &label);
}

fn draw_contact(ctx: &mut dyn DrawContext, region: Rect, row: Rect, entry: &Entry) {
    ctx.draw_panel(&Panel::new(row, frac(region.w, 0.03), GLASS_DENSE));

    let av_r = frac(row.h, 0.32).min(frac(row.w, 0.07));
    let av_center = Point::new(row.x + frac(row.w, 0.08), row.y + row.h / 2);
    draw_avatar(ctx, row, av_center, av_r, entry.accent, entry.initial());

    let text_x = av_center.x + av_r + frac(row.w, 0.04);
    ctx.draw_text(
        entry.label,
        Point::new(text_x, row.y + frac(row.h, 0.16)),
        &role_text(FontRole::Body, region, DARK),
    );
    ctx.draw_text(
        entry.secondary,
        Point::new(text_x, row.y + frac(row.h, 0.55)),
        &role_text(FontRole::Caption, region, GRAY),
    );

    let check = checkbox_for(row);
    let radius = check.w / 4;
    if entry.highlighted {
        ctx.draw_panel(&Panel::new(check, radius, VIOLET));
        // Tick from the lower-left notch up to the top right
        let tick = Stroke::new((check.w as f32 / 8.0).max(1.0), WHITE);
        let a = Point::new(check.x + check.w / 4, check.y + check.h / 2);
        let b = Point::new(check.x + check.w * 2 / 5, check.y + check.h * 7 / 10);
        let c = Point::new(check.x + check.w * 3 / 4, check.y + check.h * 3 / 10);
        ctx.draw_line(a, b, &tick);
        ctx.draw_line(b, c, &tick);
    } else {
        let border = Stroke::new((check.w as f32 / 10.0).max(1.0), INACTIVE);
        ctx.draw_panel(&Panel::outline(check, radius, border));
    }
}
