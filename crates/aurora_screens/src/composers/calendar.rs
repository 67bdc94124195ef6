//! Month view with today and birthdays highlighted

use aurora_core::{Color, DrawContext, DrawContextExt, FontRole, Rect};
use aurora_layout::{cell_position, frac, Proportions};

use super::{circle_in, draw_header, sized_text};
use crate::data::{CALENDAR_BIRTHDAYS, CALENDAR_MONTH, MONTH_DAYS, MONTH_START, TODAY, WEEKDAYS};
use crate::palette::{DARK, MUTED, VIOLET, WHITE};

const COLUMNS: usize = 7;
const CELL_HEIGHT: f64 = 0.065;

/// Cell of day `day` (1-based) in the month grid starting at `top`
pub fn day_cell(region: Rect, top: i32, day: u32) -> Rect {
    let cell_w = region.w / COLUMNS as i32;
    let cell_h = frac(region.h, CELL_HEIGHT);
    let (row, col) = cell_position((MONTH_START + day - 1) as usize, COLUMNS);
    Rect::new(
        region.x + col as i32 * cell_w,
        top + row as i32 * cell_h,
        cell_w,
        cell_h,
    )
    .clamp_to(&region)
}

fn highlight(day: u32) -> Option<Color> {
    if day == TODAY {
        return Some(VIOLET);
    }
    CALENDAR_BIRTHDAYS
        .iter()
        .find(|(d, _)| *d == day)
        .map(|(_, color)| *color)
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header(ctx, region, CALENDAR_MONTH);
    let p = Proportions::new(region);
    let small = sized_text(FontRole::Caption, region, 0.014, MUTED);

    let weekday_y = header.below(0.07);
    let cell_w = region.w / COLUMNS as i32;
    for (i, name) in WEEKDAYS.iter().enumerate() {
        ctx.draw_text_centered(name, region.x + i as i32 * cell_w, cell_w, weekday_y, &small);
    }

    let top = (weekday_y + p.dy(0.03)).min(region.bottom());
    for day in 1..=MONTH_DAYS {
        let cell = day_cell(region, top, day);
        if cell.is_empty() {
            continue;
        }
        let center = cell.center();
        let r = frac(cell_w, 0.35).min(cell.h / 2);
        let label = day.to_string();
        let color = match highlight(day) {
            Some(fill) => {
                ctx.fill_ellipse(circle_in(cell, center, r), fill);
                WHITE
            }
            None => DARK,
        };
        ctx.draw_text_at_center(&label, center, &small.with_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composers::test_util::record;
    use aurora_core::DrawCommand;

    #[test]
    fn test_first_day_lands_on_sunday() {
        let region = Rect::new(0, 0, 700, 1400);
        let first = day_cell(region, 200, 1);
        assert_eq!(first.x, 600);
        assert_eq!(first.y, 200);
        let second = day_cell(region, 200, 2);
        assert_eq!((second.x, second.y), (0, 200 + frac(1400, CELL_HEIGHT)));
    }

    #[test]
    fn test_highlights_today_and_birthdays() {
        let ctx = record(compose, 700, 1400);
        let circles = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillEllipse { .. }))
            .count();
        assert_eq!(circles, 1 + CALENDAR_BIRTHDAYS.len());
    }
}
