//! Draw Context - the primitive drawing API
//!
//! Composers never touch pixels directly. They issue draw calls against a
//! `DrawContext` using final pixel coordinates, and the context decides what
//! to do with them:
//!
//! - `RecordingContext` captures `DrawCommand`s for inspection or later replay
//! - the raster canvas in `aurora_paint` rasterizes each call immediately
//!
//! The context performs no layout of its own. Text is drawn from its top-left
//! corner; `DrawContextExt::draw_text_centered` measures first and offsets,
//! but never wraps or truncates.
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext, region: Rect) {
//!     ctx.fill_rect(region, 12, Color::WHITE);
//!     let style = TextStyle::new(FontRole::Body, 18.0, Color::BLACK);
//!     ctx.draw_text_centered("Hej", region.x, region.w, region.y + 4, &style);
//! }
//! ```

use crate::color::{Color, Gradient};
use crate::geometry::{Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Text styling
// ─────────────────────────────────────────────────────────────────────────────

/// Logical typeface role, resolved to a concrete font by a font provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontRole {
    /// Marketing headline above the device
    Headline,
    /// Screen titles
    Title,
    /// Names and primary row text
    #[default]
    Body,
    /// Secondary text, badges, labels
    Caption,
    /// Large numerals such as the countdown
    Numeral,
}

impl FontRole {
    pub const ALL: [FontRole; 5] = [
        FontRole::Headline,
        FontRole::Title,
        FontRole::Body,
        FontRole::Caption,
        FontRole::Numeral,
    ];

    /// Default font size as a fraction of the canvas (or screen) height
    pub fn height_fraction(self) -> f32 {
        match self {
            FontRole::Headline => 0.032,
            FontRole::Title => 0.035,
            FontRole::Body => 0.02,
            FontRole::Caption => 0.016,
            FontRole::Numeral => 0.08,
        }
    }

    /// Whether the role prefers a heavy weight
    pub fn is_bold(self) -> bool {
        matches!(
            self,
            FontRole::Headline | FontRole::Title | FontRole::Numeral
        )
    }

    /// Pixel size for this role on a surface of the given height
    pub fn size_for_height(self, height: i32) -> f32 {
        (height.max(0) as f32 * self.height_fraction()).floor()
    }
}

/// Text appearance for a single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(role: FontRole, size: f32, color: Color) -> Self {
        Self {
            role,
            size: size.max(1.0),
            color,
        }
    }

    /// Style sized by the role's default fraction of `height`
    pub fn for_role(role: FontRole, height: i32, color: Color) -> Self {
        Self::new(role, role.size_for_height(height), color)
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Measured extent of a single line of text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width in pixels
    pub width: f32,
    /// Line height in pixels
    pub height: f32,
}

/// Measures text before layout decisions are made
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Measurer that assumes an average glyph advance of 0.55 em
///
/// Used where no real font is available, e.g. while recording in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasurer;

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * style.size * 0.55,
            height: style.size * 1.2,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strokes and panels
// ─────────────────────────────────────────────────────────────────────────────

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width: width.max(0.0),
            color,
        }
    }
}

/// Rectangular visual unit: card, toggle track, grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub radius: i32,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl Panel {
    pub fn new(rect: Rect, radius: i32, fill: Color) -> Self {
        Self {
            rect,
            radius,
            fill,
            stroke: None,
        }
    }

    /// Fully rounded ends (radius = half the height)
    pub fn pill(rect: Rect, fill: Color) -> Self {
        Self::new(rect, rect.h / 2, fill)
    }

    /// Border only, with no fill
    pub fn outline(rect: Rect, radius: i32, stroke: Stroke) -> Self {
        Self::new(rect, radius, Color::TRANSPARENT).with_stroke(stroke)
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        radius: i32,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        radius: i32,
        stroke: Stroke,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    StrokeEllipse {
        rect: Rect,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    FillGradient {
        rect: Rect,
        gradient: Gradient,
    },
}

impl DrawCommand {
    /// Bounding rectangle of a shape command, `None` for lines and text
    pub fn shape_rect(&self) -> Option<Rect> {
        match self {
            DrawCommand::FillRect { rect, .. }
            | DrawCommand::StrokeRect { rect, .. }
            | DrawCommand::FillEllipse { rect, .. }
            | DrawCommand::StrokeEllipse { rect, .. }
            | DrawCommand::FillGradient { rect, .. } => Some(*rect),
            DrawCommand::Line { .. } | DrawCommand::Text { .. } => None,
        }
    }

    /// Replay this command onto another context
    pub fn apply(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::FillRect {
                rect,
                radius,
                color,
            } => ctx.fill_rect(*rect, *radius, *color),
            DrawCommand::StrokeRect {
                rect,
                radius,
                stroke,
            } => ctx.stroke_rect(*rect, *radius, stroke),
            DrawCommand::FillEllipse { rect, color } => ctx.fill_ellipse(*rect, *color),
            DrawCommand::StrokeEllipse { rect, stroke } => ctx.stroke_ellipse(*rect, stroke),
            DrawCommand::Line { from, to, stroke } => ctx.draw_line(*from, *to, stroke),
            DrawCommand::Text {
                text,
                origin,
                style,
            } => ctx.draw_text(text, *origin, style),
            DrawCommand::FillGradient { rect, gradient } => ctx.fill_gradient(*rect, gradient),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DrawContext
// ─────────────────────────────────────────────────────────────────────────────

/// Primitive drawing operations in final pixel coordinates
pub trait DrawContext {
    /// Size of the surface being drawn on
    fn surface_size(&self) -> Size;

    /// Fill a rectangle, rounding its corners by `radius`
    fn fill_rect(&mut self, rect: Rect, radius: i32, color: Color);

    /// Outline a rectangle, rounding its corners by `radius`
    fn stroke_rect(&mut self, rect: Rect, radius: i32, stroke: &Stroke);

    /// Fill the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Outline the ellipse inscribed in `rect`
    fn stroke_ellipse(&mut self, rect: Rect, stroke: &Stroke);

    /// Straight line segment
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Fill `rect` with a gradient
    fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient);

    /// Measure a single line of text as it would be drawn
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Convenience helpers built on the primitive operations
pub trait DrawContextExt: DrawContext {
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.fill_ellipse(Rect::from_circle(center, radius), color);
    }

    /// Fill then outline a panel; a fully transparent fill is skipped
    fn draw_panel(&mut self, panel: &Panel) {
        if panel.fill.a > 0 {
            self.fill_rect(panel.rect, panel.radius, panel.fill);
        }
        if let Some(stroke) = panel.stroke {
            self.stroke_rect(panel.rect, panel.radius, &stroke);
        }
    }

    /// Draw text horizontally centered within `x..x + width`
    ///
    /// Returns the measured text width. Text wider than `width` overhangs on
    /// both sides; shrinking it is the caller's job.
    fn draw_text_centered(
        &mut self,
        text: &str,
        x: i32,
        width: i32,
        y: i32,
        style: &TextStyle,
    ) -> f32 {
        let measured = self.measure_text(text, style).width;
        let offset = ((width as f32 - measured) / 2.0).floor() as i32;
        self.draw_text(text, Point::new(x + offset, y), style);
        measured
    }

    /// Draw text centered both ways on `center`
    fn draw_text_at_center(&mut self, text: &str, center: Point, style: &TextStyle) {
        let metrics = self.measure_text(text, style);
        let origin = Point::new(
            center.x - (metrics.width / 2.0) as i32,
            center.y - (metrics.height / 2.0) as i32,
        );
        self.draw_text(text, origin, style);
    }
}

impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingContext
// ─────────────────────────────────────────────────────────────────────────────

/// Context that records commands instead of drawing them
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    size: Size,
    measurer: Box<dyn TextMeasurer>,
}

impl RecordingContext {
    /// Create a recording context that estimates text widths
    pub fn new(size: Size) -> Self {
        Self::with_measurer(size, Box::new(EstimatedMeasurer))
    }

    /// Create a recording context with a real text measurer
    pub fn with_measurer(size: Size, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            commands: Vec::new(),
            size,
            measurer,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every shape rectangle recorded so far, in draw order
    pub fn shape_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(DrawCommand::shape_rect)
            .collect()
    }

    /// Replay the recording onto another context
    pub fn replay(&self, target: &mut dyn DrawContext) {
        tracing::trace!("Replaying {} draw commands", self.commands.len());
        for command in &self.commands {
            command.apply(target);
        }
    }
}

impl std::fmt::Debug for RecordingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingContext")
            .field("size", &self.size)
            .field("commands", &self.commands.len())
            .finish()
    }
}

impl DrawContext for RecordingContext {
    fn surface_size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            radius,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, radius: i32, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            radius,
            stroke: *stroke,
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { rect, color });
    }

    fn stroke_ellipse(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeEllipse {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }

    fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        self.commands.push(DrawCommand::FillGradient {
            rect,
            gradient: gradient.clone(),
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}
