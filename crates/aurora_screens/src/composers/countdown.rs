//! Countdown screen: hero card, big day counter, unit tiles, upcoming list

use aurora_core::{DrawContext, DrawContextExt, FontRole, Panel, Point, Rect};
use aurora_layout::{frac, pill_for_text, HeaderBand, Proportions, RowList};

use super::{circle_in, draw_avatar, draw_header, role_text, sized_text};
use crate::data::{
    COUNTDOWN_CAPTION, COUNTDOWN_DAYS, COUNTDOWN_DETAIL, COUNTDOWN_NAME, COUNTDOWN_UNITS, UPCOMING,
};
use crate::palette::{CORAL, DARK, GLASS, GLASS_DENSE, GRAY, VIOLET, WHITE};

const MARGIN: f64 = 0.05;
const HERO_HEIGHT: f64 = 0.11;
const PANEL_HEIGHT: f64 = 0.2;
const TILE_HEIGHT: f64 = 0.09;
const SECTION_GAP: f64 = 0.02;
const ROW_HEIGHT: f64 = 0.065;
const ROW_GAP: f64 = 0.012;

/// Geometry of the countdown screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownLayout {
    pub header: HeaderBand,
    pub hero: Rect,
    pub number_panel: Rect,
    pub tiles: [Rect; 3],
    /// Origin of the "upcoming" section label
    pub section_label: Point,
    pub upcoming: Vec<Rect>,
}

/// Compute the countdown geometry for a screen region
pub fn layout(region: Rect) -> CountdownLayout {
    let p = Proportions::new(region);
    let header = HeaderBand::standard(region);
    let margin = p.dx(MARGIN);
    let inner_w = region.w - 2 * margin;

    let hero = p.clamp(Rect::new(
        region.x + margin,
        header.below(0.065),
        inner_w,
        p.dy(HERO_HEIGHT),
    ));
    let number_panel = p.clamp(Rect::new(
        region.x + margin,
        hero.bottom() + p.dy(SECTION_GAP),
        inner_w,
        p.dy(PANEL_HEIGHT),
    ));

    let tile_y = number_panel.bottom() + p.dy(SECTION_GAP);
    let tile_w = ((region.w - 4 * margin) / 3).max(0);
    let tiles = [0, 1, 2].map(|i| {
        p.clamp(Rect::new(
            region.x + margin + i * (tile_w + margin),
            tile_y,
            tile_w,
            p.dy(TILE_HEIGHT),
        ))
    });

    let section_label = p.clamp_point(Point::new(
        region.x + margin,
        tiles[0].bottom() + p.dy(SECTION_GAP),
    ));
    let upcoming = RowList::new(
        region,
        section_label.y + p.dy(0.035),
        ROW_HEIGHT,
        ROW_GAP,
    )
    .with_margin(MARGIN)
    .with_reserve(0.03)
    .layout(UPCOMING.len());

    CountdownLayout {
        header,
        hero,
        number_panel,
        tiles,
        section_label,
        upcoming,
    }
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    draw_header(ctx, region, "Nedräkning");
    let geo = layout(region);
    let radius = frac(region.w, 0.04);

    // Hero card
    let hero = geo.hero;
    ctx.draw_panel(&Panel::new(hero, radius, GLASS_DENSE));
    let av_r = frac(hero.h, 0.32).min(frac(hero.w, 0.08));
    let av_center = Point::new(hero.x + frac(hero.w, 0.09), hero.y + hero.h / 2);
    draw_avatar(ctx, hero, av_center, av_r, CORAL, "E");
    let text_x = av_center.x + av_r + frac(hero.w, 0.05);
    ctx.draw_text(
        COUNTDOWN_NAME,
        Point::new(text_x, hero.y + frac(hero.h, 0.2)),
        &role_text(FontRole::Body, region, DARK),
    );
    ctx.draw_text(
        COUNTDOWN_DETAIL,
        Point::new(text_x, hero.y + frac(hero.h, 0.55)),
        &role_text(FontRole::Caption, region, GRAY),
    );

    // Number panel
    let panel = geo.number_panel;
    ctx.draw_panel(&Panel::new(panel, radius, VIOLET));
    let numeral = role_text(FontRole::Numeral, region, WHITE);
    ctx.draw_text_centered(
        COUNTDOWN_DAYS,
        panel.x,
        panel.w,
        panel.y + frac(panel.h, 0.18),
        &numeral,
    );
    ctx.draw_text_centered(
        COUNTDOWN_CAPTION,
        panel.x,
        panel.w,
        panel.y + frac(panel.h, 0.72),
        &sized_text(FontRole::Body, region, 0.022, WHITE.with_alpha(220)),
    );

    // Unit tiles
    let value = sized_text(FontRole::Title, region, 0.03, VIOLET);
    let unit = role_text(FontRole::Caption, region, GRAY);
    for (tile, (amount, label)) in geo.tiles.iter().zip(COUNTDOWN_UNITS) {
        ctx.draw_panel(&Panel::new(*tile, frac(region.w, 0.03), GLASS_DENSE));
        ctx.draw_text_centered(amount, tile.x, tile.w, tile.y + frac(tile.h, 0.15), &value);
        ctx.draw_text_centered(label, tile.x, tile.w, tile.y + frac(tile.h, 0.62), &unit);
    }

    // Upcoming
    ctx.draw_text(
        "Kommande",
        geo.section_label,
        &role_text(FontRole::Body, region, DARK),
    );
    let name = role_text(FontRole::Body, region, DARK);
    let date = role_text(FontRole::Caption, region, GRAY);
    for (entry, row) in UPCOMING.iter().zip(&geo.upcoming) {
        ctx.draw_panel(&Panel::new(*row, frac(region.w, 0.03), GLASS));
        let dot_r = frac(row.h, 0.2).min(frac(row.w, 0.03));
        let dot = Point::new(row.x + frac(row.w, 0.06), row.y + row.h / 2);
        ctx.fill_ellipse(circle_in(*row, dot, dot_r), entry.accent);

        let text_x = dot.x + dot_r + frac(row.w, 0.04);
        ctx.draw_text(entry.label, Point::new(text_x, row.y + frac(row.h, 0.15)), &name);
        ctx.draw_text(entry.secondary, Point::new(text_x, row.y + frac(row.h, 0.55)), &date);

        if let Some(badge) = entry.badge {
            let style = date.with_color(entry.accent);
            let metrics = ctx.measure_text(badge, &style);
            let pill = pill_for_text(metrics.width, frac(row.h, 0.5), 0.3);
            let rect = pill
                .ending_at(row.right() - frac(row.w, 0.04), row.y + frac(row.h, 0.25))
                .clamp_to(row);
            ctx.draw_panel(&Panel::pill(rect, entry.accent.with_alpha(40)));
            ctx.draw_text(badge, pill.text_origin(rect, metrics.height), &style);
        }
    }
}
