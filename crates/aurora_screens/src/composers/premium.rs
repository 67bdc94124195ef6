//! Premium upsell: gradient banner with crown, then three price plans

use aurora_core::{
    Color, ColorStops, DrawContext, DrawContextExt, FontRole, Gradient, Panel, Point, Rect,
};
use aurora_layout::{frac, HeaderBand, Proportions, RowList};

use super::{circle_in, role_text, sized_text};
use crate::data::{Plan, PLANS, PREMIUM_BADGE, PREMIUM_FEATURES, PREMIUM_TITLE};
use crate::palette::{CORAL, DARK, GLASS_DENSE, GOLD, VIOLET, WHITE};

const BANNER_HEIGHT: f64 = 0.25;
const PLAN_HEIGHT: f64 = 0.08;
const PLAN_GAP: f64 = 0.015;

const BADGE_TEXT: Color = Color::rgb(200, 200, 255);

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let p = Proportions::new(region);
    let header = HeaderBand::standard(region);

    let banner = p.clamp(Rect::new(
        region.x,
        header.title_origin.y,
        region.w,
        p.dy(BANNER_HEIGHT),
    ));
    ctx.fill_gradient(banner, &Gradient::vertical(ColorStops::two(VIOLET, CORAL)));

    let crown = Point::new(banner.x + banner.w / 2, banner.y + frac(banner.h, 0.2));
    let crown_r = p.dx(0.06).min(frac(banner.h, 0.2));
    ctx.fill_ellipse(circle_in(banner, crown, crown_r), GOLD);

    ctx.draw_text_centered(
        PREMIUM_TITLE,
        banner.x,
        banner.w,
        banner.y + frac(banner.h, 0.45),
        &sized_text(FontRole::Title, region, 0.03, WHITE),
    );
    ctx.draw_text_centered(
        PREMIUM_FEATURES,
        banner.x,
        banner.w,
        banner.y + frac(banner.h, 0.68),
        &sized_text(FontRole::Caption, region, 0.015, WHITE.with_alpha(200)),
    );

    let plans = RowList::new(region, banner.bottom() + p.dy(0.03), PLAN_HEIGHT, PLAN_GAP)
        .with_margin(0.05)
        .with_reserve(0.02);
    let radius = p.dx(0.03);
    for (plan, row) in PLANS.iter().zip(plans.layout(PLANS.len())) {
        draw_plan(ctx, region, row, radius, plan);
    }
}

fn draw_plan(ctx: &mut dyn DrawContext, region: Rect, row: Rect, radius: i32, plan: &Plan) {
    let p = Proportions::new(region);
    let name_x = p.x(0.1);
    let price_x = region.right() - p.dx(0.3);
    let body = role_text(FontRole::Body, region, DARK);

    if plan.popular {
        ctx.draw_panel(&Panel::new(row, radius, VIOLET));
        let top = row.y + frac(row.h, 0.15);
        ctx.draw_text(plan.name, Point::new(name_x, top), &body.with_color(WHITE));
        ctx.draw_text(plan.price, Point::new(price_x, top), &body.with_color(WHITE));
        ctx.draw_text(
            PREMIUM_BADGE,
            Point::new(price_x, row.y + frac(row.h, 0.55)),
            &sized_text(FontRole::Caption, region, 0.015, BADGE_TEXT),
        );
    } else {
        ctx.draw_panel(&Panel::new(row, radius, GLASS_DENSE));
        let top = row.y + frac(row.h, 0.3);
        ctx.draw_text(plan.name, Point::new(name_x, top), &body);
        ctx.draw_text(plan.price, Point::new(price_x, top), &body.with_color(VIOLET));
    }
}
