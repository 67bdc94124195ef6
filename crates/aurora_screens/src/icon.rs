//! App icon: aurora gradient with a birthday cake
//!
//! Every measurement is in units of the 1024px design grid and scaled with
//! [`design`], so a 180px render has the same composition as the master.

use aurora_core::{Color, ColorStops, DrawContext, Gradient, Point, Rect, Size};
use aurora_layout::design;
use tracing::debug;

use crate::palette::{LAVENDER, MINT, PEACH, SKY, VIOLET, WHITE};

const CAKE: Color = Color::rgba(255, 255, 255, 220);
const FROSTING: Color = Color::rgba(255, 107, 138, 200);
const PLATE: Color = Color::rgba(255, 255, 255, 160);
const FLAME_OUTER: Color = Color::rgba(255, 200, 60, 220);
const FLAME_INNER: Color = Color::rgba(255, 245, 200, 240);
const CANDLES: [Color; 3] = [PEACH.with_alpha(230), WHITE.with_alpha(240), LAVENDER.with_alpha(230)];

/// Background gradient of the icon
pub fn background() -> Gradient {
    Gradient::diagonal(ColorStops::three(VIOLET, SKY, MINT))
}

/// Pixel geometry of the cake for one icon size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CakeLayout {
    pub body: Rect,
    pub body_radius: i32,
    /// Frosting band across the top of the body
    pub frosting: Rect,
    /// Square-cornered fill under the frosting's rounded bottom corners
    pub frosting_fill: Rect,
    pub candles: [Rect; 3],
    pub candle_radius: i32,
    pub outer_flames: [Rect; 3],
    pub inner_flames: [Rect; 3],
    pub plate: Rect,
    pub plate_radius: i32,
}

impl CakeLayout {
    /// Every rectangle in paint order
    pub fn rects(&self) -> Vec<Rect> {
        let mut all = vec![self.body, self.frosting, self.frosting_fill];
        for i in 0..3 {
            all.extend([self.candles[i], self.outer_flames[i], self.inner_flames[i]]);
        }
        all.push(self.plate);
        all
    }
}

/// Cake geometry for a square icon of side `size`
pub fn layout(size: u32) -> CakeLayout {
    let s = size as i32;
    let d = |units: f64| design(s, units);
    let canvas = Rect::new(0, 0, s, s);
    let fit = |r: Rect| r.clamp_to(&canvas);

    let cx = s / 2;
    let cy = s / 2 + s / 20;

    let cake_w = d(340.0);
    let cake_h = d(200.0);
    let cake_top = cy - d(20.0);
    let cake_left = cx - cake_w / 2;
    let body_radius = d(30.0);
    let body = Rect::new(cake_left, cake_top, cake_w, cake_h);

    let frost_h = d(35.0);
    let frosting = Rect::new(cake_left, cake_top, cake_w, frost_h);
    let frosting_fill = Rect::new(
        cake_left,
        cake_top + body_radius,
        cake_w,
        (frost_h - body_radius).max(0),
    );

    let candle_w = d(18.0);
    let candle_h = d(100.0);
    let candle_top = cake_top - candle_h;
    let flame_bottom = candle_top - d(4.0);
    let spread = d(90.0);
    let positions = [cx - spread, cx, cx + spread];

    let candle = |pos: i32| {
        fit(Rect::from_points(
            Point::new(pos - candle_w / 2, candle_top),
            Point::new(pos + candle_w / 2, cake_top + d(5.0)),
        ))
    };
    let flame = |pos: i32, half_w: f64, above: f64, below: f64| {
        fit(Rect::from_points(
            Point::new(pos - d(half_w), flame_bottom - d(above)),
            Point::new(pos + d(half_w), flame_bottom + d(below)),
        ))
    };

    let plate_w = cake_w + d(60.0);
    let plate_y = body.bottom() + d(8.0);
    let plate = Rect::from_points(
        Point::new(cx - plate_w / 2, plate_y),
        Point::new(cx + plate_w / 2, plate_y + d(16.0)),
    );

    CakeLayout {
        body: fit(body),
        body_radius,
        frosting: fit(frosting),
        frosting_fill: fit(frosting_fill),
        candles: positions.map(candle),
        candle_radius: d(6.0),
        outer_flames: positions.map(|p| flame(p, 22.0, 40.0, 10.0)),
        inner_flames: positions.map(|p| flame(p, 12.0, 24.0, 4.0)),
        plate: fit(plate),
        plate_radius: d(8.0),
    }
}

/// Paint the icon onto a square canvas of `size`
///
/// Shapes blend source-over onto the gradient, so translucent frosting and
/// flames pick up the background behind them.
pub fn compose(ctx: &mut dyn DrawContext, size: Size) {
    let side = size.width.min(size.height);
    debug!(side, "composing icon");
    ctx.fill_gradient(Rect::new(0, 0, side as i32, side as i32), &background());

    let cake = layout(side);
    ctx.fill_rect(cake.body, cake.body_radius, CAKE);
    ctx.fill_rect(cake.frosting, cake.body_radius, FROSTING);
    if !cake.frosting_fill.is_empty() {
        ctx.fill_rect(cake.frosting_fill, 0, FROSTING);
    }

    for i in 0..3 {
        ctx.fill_rect(cake.candles[i], cake.candle_radius, CANDLES[i]);
        ctx.fill_ellipse(cake.outer_flames[i], FLAME_OUTER);
        ctx.fill_ellipse(cake.inner_flames[i], FLAME_INNER);
    }

    ctx.fill_rect(cake.plate, cake.plate_radius, PLATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{DrawCommand, RecordingContext};

    #[test]
    fn test_master_geometry() {
        let cake = layout(1024);
        assert_eq!(cake.body, Rect::new(342, 543, 340, 200));
        assert_eq!(cake.body_radius, 30);
        assert_eq!(cake.frosting_fill, Rect::new(342, 573, 340, 5));
        assert_eq!(cake.candles[1], Rect::new(503, 443, 18, 105));
        assert_eq!(cake.outer_flames[0], Rect::new(400, 399, 44, 50));
        assert_eq!(cake.plate, Rect::new(312, 751, 400, 16));
    }

    #[test]
    fn test_candles_stand_on_cake() {
        let cake = layout(1024);
        for candle in cake.candles {
            assert!(candle.bottom() > cake.body.y);
            assert!(candle.y < cake.body.y);
        }
        for (outer, inner) in cake.outer_flames.iter().zip(&cake.inner_flames) {
            assert!(outer.contains_rect(inner));
        }
    }

    #[test]
    fn test_tiny_icon_stays_on_canvas() {
        for side in [1, 2, 16, 20, 29] {
            let canvas = Rect::new(0, 0, side, side);
            for rect in layout(side as u32).rects() {
                assert!(canvas.contains_rect(&rect), "{rect:?} escapes {side}px icon");
            }
        }
    }

    #[test]
    fn test_gradient_first_plate_last() {
        let mut ctx = RecordingContext::new(Size::new(512, 512));
        compose(&mut ctx, Size::new(512, 512));
        let cmds = ctx.commands();
        assert!(matches!(cmds[0], DrawCommand::FillGradient { .. }));
        assert!(matches!(
            cmds.last(),
            Some(DrawCommand::FillRect { color, .. }) if *color == PLATE
        ));
    }
}
