//! Device frame compositor
//!
//! A device frame is a rounded body, an inset screen and a sensor cutout on
//! top. The screen rectangle is where a composer paints its mock screen.

use aurora_core::{DrawContext, Rect};
use aurora_layout::frac;
use tracing::trace;

use crate::palette::{DEVICE_BODY, SCREEN};

/// Kind of device drawn around the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Phone,
    Tablet,
}

impl DeviceKind {
    /// Body corner radius as a fraction of the frame width
    pub fn corner_fraction(self) -> f64 {
        match self {
            DeviceKind::Phone => 0.12,
            DeviceKind::Tablet => 0.05,
        }
    }

    /// Bezel thickness as a fraction of the frame width
    pub fn bezel_fraction(self) -> f64 {
        match self {
            DeviceKind::Phone => 0.04,
            DeviceKind::Tablet => 0.03,
        }
    }
}

/// Resolved frame geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceFrame {
    pub kind: DeviceKind,
    pub outer: Rect,
    pub corner_radius: i32,
    pub bezel: i32,
    pub screen: Rect,
    pub screen_radius: i32,
}

impl DeviceFrame {
    pub fn new(kind: DeviceKind, outer: Rect) -> Self {
        let corner_radius = frac(outer.w, kind.corner_fraction());
        let bezel = frac(outer.w, kind.bezel_fraction());
        let screen = outer.inset(bezel, bezel);
        Self {
            kind,
            outer,
            corner_radius,
            bezel,
            screen,
            screen_radius: frac(corner_radius, 0.85),
        }
    }

    pub fn phone(outer: Rect) -> Self {
        Self::new(DeviceKind::Phone, outer)
    }

    pub fn tablet(outer: Rect) -> Self {
        Self::new(DeviceKind::Tablet, outer)
    }

    /// Rectangle of the sensor cutout drawn over the screen
    ///
    /// Phones get a pill shaped island, tablets a small camera dot centered
    /// in the top bezel.
    pub fn sensor(&self) -> Rect {
        let o = self.outer;
        let rect = match self.kind {
            DeviceKind::Phone => {
                let w = frac(o.w, 0.28);
                let h = frac(o.h, 0.018);
                Rect::new(
                    o.x + (o.w - w) / 2,
                    o.y + self.bezel + frac(o.h, 0.012),
                    w,
                    h,
                )
            }
            DeviceKind::Tablet => {
                let d = frac(self.bezel, 0.4).max(1);
                Rect::new(o.x + (o.w - d) / 2, o.y + (self.bezel - d) / 2, d, d)
            }
        };
        rect.clamp_to(&o)
    }

    /// Paint the frame with `content` drawn into the screen rectangle
    ///
    /// Order is body, screen background, content, then the sensor so the
    /// cutout always sits on top of whatever the screen shows.
    pub fn paint(
        &self,
        ctx: &mut dyn DrawContext,
        content: impl FnOnce(&mut dyn DrawContext, Rect),
    ) {
        trace!(kind = ?self.kind, outer = ?self.outer, "painting device frame");
        ctx.fill_rect(self.outer, self.corner_radius, DEVICE_BODY);
        if !self.screen.is_empty() {
            ctx.fill_rect(self.screen, self.screen_radius, SCREEN);
            content(ctx, self.screen);
        }

        let sensor = self.sensor();
        match self.kind {
            DeviceKind::Phone => ctx.fill_rect(sensor, sensor.h / 2, DEVICE_BODY),
            DeviceKind::Tablet => ctx.fill_ellipse(sensor, SCREEN.with_alpha(90)),
        }
    }
}
