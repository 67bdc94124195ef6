//! Home screen: upcoming birthdays as frosted cards above a bottom nav bar

use aurora_core::{DrawContext, DrawContextExt, FontRole, Panel, Point, Rect, TextStyle};
use aurora_layout::{frac, pill_for_text, Proportions, RowList};

use super::{circle_in, draw_avatar, draw_header, role_text};
use crate::data::{Entry, BIRTHDAYS};
use crate::palette::{DARK, GLASS, GRAY, INACTIVE, VIOLET};

const CARD_HEIGHT: f64 = 0.09;
const CARD_GAP: f64 = 0.015;
const CARD_MARGIN: f64 = 0.05;
/// Keeps the last card clear of the nav bar
const BOTTOM_RESERVE: f64 = 0.08;
const NAV_HEIGHT: f64 = 0.07;
const NAV_ITEMS: i32 = 4;

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header(ctx, region, "Födelsedagar");
    let rows = RowList::new(region, header.below(0.07), CARD_HEIGHT, CARD_GAP)
        .with_margin(CARD_MARGIN)
        .with_reserve(BOTTOM_RESERVE);

    let radius = frac(region.w, 0.04);
    let name = role_text(FontRole::Body, region, DARK);
    let detail = role_text(FontRole::Caption, region, GRAY);
    for (entry, card) in BIRTHDAYS.iter().zip(rows.layout(BIRTHDAYS.len())) {
        draw_card(ctx, card, radius, entry, &name, &detail);
    }

    draw_nav(ctx, region);
}

/// Avatar, name, date line and a day-count pill
pub(crate) fn draw_card(
    ctx: &mut dyn DrawContext,
    card: Rect,
    radius: i32,
    entry: &Entry,
    name: &TextStyle,
    detail: &TextStyle,
) {
    ctx.draw_panel(&Panel::new(card, radius, GLASS));

    let av_r = frac(card.h, 0.35).min(frac(card.w, 0.08));
    let av_center = Point::new(card.x + frac(card.w, 0.08), card.y + card.h / 2);
    draw_avatar(ctx, card, av_center, av_r, entry.accent, entry.initial());

    let text_x = av_center.x + av_r + frac(card.w, 0.04);
    ctx.draw_text(entry.label, Point::new(text_x, card.y + frac(card.h, 0.18)), name);
    ctx.draw_text(
        entry.secondary,
        Point::new(text_x, card.y + frac(card.h, 0.52)),
        detail,
    );

    if let Some(badge) = entry.badge {
        let style = detail.with_color(entry.accent);
        let metrics = ctx.measure_text(badge, &style);
        let pill = pill_for_text(metrics.width, frac(card.h, 0.5), 0.3);
        let rect = pill
            .ending_at(card.right() - frac(card.w, 0.03), card.y + frac(card.h, 0.25))
            .clamp_to(&card);
        ctx.draw_panel(&Panel::pill(rect, entry.accent.with_alpha(40)));
        ctx.draw_text(badge, pill.text_origin(rect, metrics.height), &style);
    }
}

fn draw_nav(ctx: &mut dyn DrawContext, region: Rect) {
    let p = Proportions::new(region);
    let nav_y = region.bottom() - p.dy(NAV_HEIGHT);
    let bar = Rect::new(region.x, nav_y, region.w, region.bottom() - nav_y);
    ctx.draw_panel(&Panel::new(bar, 0, GLASS.with_alpha(230)));

    let spacing = region.w / (NAV_ITEMS + 1);
    let r = p.dx(0.025).min(p.dy(0.025));
    let cy = nav_y + p.dy(0.025);
    for i in 0..NAV_ITEMS {
        let center = Point::new(region.x + spacing * (i + 1), cy);
        let color = if i == 0 { VIOLET } else { INACTIVE };
        ctx.fill_ellipse(circle_in(bar, center, r), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composers::test_util::{record, texts};
    use aurora_core::{DrawCommand, EstimatedMeasurer, TextMeasurer};

    #[test]
    fn test_all_cards_fit_on_a_tall_screen() {
        let ctx = record(compose, 1000, 2160);
        let drawn = texts(&ctx);
        for entry in BIRTHDAYS {
            assert!(drawn.iter().any(|t| t == entry.label), "{} missing", entry.label);
        }
    }

    #[test]
    fn test_cards_stay_above_nav_bar() {
        let ctx = record(compose, 600, 1300);
        let nav_top = 1300 - frac(1300, NAV_HEIGHT);
        let cards: Vec<Rect> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color, .. } if *color == GLASS => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), BIRTHDAYS.len());
        assert!(cards.iter().all(|c| c.bottom() <= nav_top));
    }

    #[test]
    fn test_badge_pill_contains_label() {
        let ctx = record(compose, 1000, 2160);
        let cmds = ctx.commands();
        let pos = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { text, .. } if text == "7d"))
            .unwrap();
        let pill = cmds[pos - 1].shape_rect().unwrap();
        if let DrawCommand::Text { origin, style, .. } = &cmds[pos] {
            let width = EstimatedMeasurer.measure("7d", style).width;
            assert!(origin.x >= pill.x);
            assert!(origin.x as f32 + width <= pill.right() as f32);
        }
    }
}
