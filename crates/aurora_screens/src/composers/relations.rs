//! Relationship tree: family members on tiers, linked to their parents

use aurora_core::{DrawContext, DrawContextExt, FontRole, Point, Rect, Stroke, TextStyle};
use aurora_layout::{frac, Proportions, TreeLayout, TreePlacement, TreeSlot};

use super::{circle_in, draw_header, role_text};
use crate::data::{FAMILY, FAMILY_TIERS};
use crate::palette::{DARK, GRAY, INACTIVE, WHITE};

const NODE_RADIUS: f64 = 0.075;

/// Node and edge geometry for the family table
pub fn layout(region: Rect) -> TreePlacement {
    let slots: Vec<TreeSlot> = FAMILY.iter().map(|n| n.slot()).collect();
    TreeLayout::new(region, FAMILY_TIERS, NODE_RADIUS).place(&slots)
}

pub fn compose(ctx: &mut dyn DrawContext, region: Rect) {
    let header = draw_header(ctx, region, "Familjen");
    let p = Proportions::new(region);
    ctx.draw_text(
        "Släkt och vänner samlade",
        Point::new(header.title_origin.x, header.below(0.045)),
        &role_text(FontRole::Caption, region, GRAY),
    );

    let placement = layout(region);

    // Edges first so the node circles cover their ends
    let edge = Stroke::new(p.dx(0.008).max(1) as f32, INACTIVE);
    for (from, to) in placement.segments() {
        ctx.draw_line(from, to, &edge);
    }

    let ring = p.dx(0.01);
    let label = role_text(FontRole::Caption, region, DARK);
    for (node, rect) in FAMILY.iter().zip(&placement.nodes) {
        let center = rect.center();
        let r = rect.w.min(rect.h) / 2;
        ctx.fill_ellipse(*rect, WHITE);
        ctx.fill_ellipse(circle_in(*rect, center, r - ring), node.color);

        ctx.draw_text_at_center(node.initials, center, &initials_style(region, r));

        let label_y = (rect.bottom() + p.dy(0.01)).min(region.bottom());
        ctx.draw_text_centered(node.label, center.x - r * 2, r * 4, label_y, &label);
    }
}

fn initials_style(region: Rect, radius: i32) -> TextStyle {
    role_text(FontRole::Body, region, WHITE).with_size(frac(radius, 0.7) as f32)
}
