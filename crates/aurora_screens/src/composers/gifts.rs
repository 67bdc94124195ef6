//! Gift suggestions: two-column card grid and a full-width pay button

use aurora_core::{DrawContext, DrawContextExt, FontRole, Panel, Point, Rect};
use aurora_layout::{frac, Grid2, Proportions};

use super::{circle_in, draw_header_styled, role_text, sized_text};
use crate::data::{Gift, GIFTS, GIFT_BUTTON, GIFT_DETAIL, GIFT_RECIPIENT};
use crate::palette::{DARK, GLASS_DENSE, GRAY, MINT, WHITE};

const MARGIN: f64 = 0.05;
const CARD_HEIGHT: f64 = 0.18;
const ROW_GAP: f64 = 0.02;
const BUTTON_HEIGHT: f64 = 0.06;

/// Grid used for the gift cards
pub fn grid(region: Rect, top: i32) -> Grid2 {
    Grid2::new(region, top, MARGIN, CARD_HEIGHT, ROW_GAP).with_reserve(BUTTON_HEIGHT + 0.04)
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header_styled(
        ctx,
        region,
        GIFT_RECIPIENT,
        sized_text(FontRole::Title, region, 0.03, DARK),
    );
    let p = Proportions::new(region);
    ctx.draw_text(
        GIFT_DETAIL,
        Point::new(header.title_origin.x, header.below(0.04)),
        &sized_text(FontRole::Caption, region, 0.015, GRAY),
    );

    let grid = grid(region, header.below(0.08));
    let cells = grid.cells(GIFTS.len());
    let radius = p.dx(0.04);
    for (gift, cell) in GIFTS.iter().zip(&cells) {
        draw_gift(ctx, region, *cell, radius, gift);
    }

    let rows = cells.len().div_ceil(2);
    let button = p.clamp(Rect::new(
        region.x + grid.margin(),
        grid.end_of(rows) + p.dy(0.02),
        region.w - 2 * grid.margin(),
        p.dy(BUTTON_HEIGHT),
    ));
    ctx.draw_panel(&Panel::pill(button, MINT));
    let label = role_text(FontRole::Body, region, WHITE);
    let label_y = button.y + frac(button.h, 0.25);
    ctx.draw_text_centered(GIFT_BUTTON, button.x, button.w, label_y, &label);
}

fn draw_gift(ctx: &mut dyn DrawContext, region: Rect, card: Rect, radius: i32, gift: &Gift) {
    ctx.draw_panel(&Panel::new(card, radius, GLASS_DENSE));

    let well = Rect::new(
        card.x + frac(card.w, 0.1),
        card.y + frac(card.h, 0.08),
        card.w - 2 * frac(card.w, 0.1),
        frac(card.h, 0.55) - frac(card.h, 0.08),
    )
    .clamp_to(&card);
    ctx.draw_panel(&Panel::new(well, frac(radius, 0.7), gift.color.with_alpha(50)));

    let emoji_r = frac(card.w, 0.1).min(well.h / 2);
    let emoji = Point::new(
        card.x + card.w / 2,
        card.y + frac(card.h, 0.55) / 2 + frac(card.h, 0.04),
    );
    ctx.fill_ellipse(circle_in(well, emoji, emoji_r), gift.color);

    let text_x = card.x + frac(card.w, 0.1);
    ctx.draw_text(
        gift.name,
        Point::new(text_x, card.y + frac(card.h, 0.62)),
        &role_text(FontRole::Body, region, DARK),
    );
    ctx.draw_text(
        gift.price,
        Point::new(text_x, card.y + frac(card.h, 0.8)),
        &sized_text(FontRole::Caption, region, 0.015, gift.color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composers::test_util::{record, texts};

    #[test]
    fn test_cards_follow_grid_positions() {
        let region = Rect::new(0, 0, 1000, 2000);
        let g = grid(region, 300);
        let cells = g.cells(GIFTS.len());
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].y, cells[1].y);
        assert_eq!(cells[0].x, cells[2].x);
        assert!(cells[2].y > cells[0].bottom());
    }

    #[test]
    fn test_button_below_grid() {
        let ctx = record(compose, 1000, 2000);
        let button = ctx
            .commands()
            .iter()
            .rev()
            .find_map(|c| match c {
                aurora_core::DrawCommand::FillRect { rect, color, .. } if *color == MINT => {
                    Some(*rect)
                }
                _ => None,
            })
            .unwrap();
        let region = Rect::new(0, 0, 1000, 2000);
        let top = aurora_layout::HeaderBand::standard(region).below(0.08);
        let cells = grid(region, top).cells(GIFTS.len());
        assert!(button.y > cells[3].bottom());
        assert!(region.contains_rect(&button));
        assert!(texts(&ctx).iter().any(|t| t == GIFT_BUTTON));
    }
}
