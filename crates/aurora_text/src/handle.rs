//! Resolved fonts and rasterized text

use std::sync::Arc;

use aurora_core::TextMetrics;
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

use crate::builtin;
use crate::face::{glyph_for, FontFace};

/// 8-bit coverage bitmap for one line of text
///
/// `left`/`top` locate the bitmap relative to the text origin (the top-left
/// corner of the line box).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y * self.width + x) as usize]
    }
}

#[derive(Clone)]
enum GlyphSource {
    Outline(Arc<FontFace>),
    Builtin,
}

/// A font at a concrete pixel size
#[derive(Clone)]
pub struct FontHandle {
    source: GlyphSource,
    size: f32,
}

impl FontHandle {
    pub fn outline(face: Arc<FontFace>, size: f32) -> Self {
        Self {
            source: GlyphSource::Outline(face),
            size: size.max(1.0),
        }
    }

    /// The built-in bitmap glyph set
    pub fn builtin(size: f32) -> Self {
        Self {
            source: GlyphSource::Builtin,
            size: size.max(1.0),
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, GlyphSource::Builtin)
    }

    pub fn family(&self) -> &str {
        match &self.source {
            GlyphSource::Outline(face) => face.family_name(),
            GlyphSource::Builtin => "builtin",
        }
    }

    /// Same face at another size
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            source: self.source.clone(),
            size: size.max(1.0),
        }
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        match &self.source {
            GlyphSource::Outline(face) => {
                let metrics = face.metrics();
                let width = face
                    .as_ttf_face()
                    .map(|ttf| {
                        text.chars()
                            .map(|c| ttf.glyph_hor_advance(glyph_for(&ttf, c)).unwrap_or(0) as f32)
                            .sum::<f32>()
                    })
                    .unwrap_or(0.0)
                    * metrics.scale(self.size);
                TextMetrics {
                    width,
                    height: metrics.line_height_px(self.size),
                }
            }
            GlyphSource::Builtin => TextMetrics {
                width: builtin::text_width(text, self.size),
                height: builtin::line_height(self.size),
            },
        }
    }

    /// Rasterize one line of text into a coverage mask
    pub fn rasterize(&self, text: &str) -> GlyphMask {
        match &self.source {
            GlyphSource::Outline(face) => rasterize_outline(face, text, self.size)
                .unwrap_or_else(|| builtin::rasterize(text, self.size)),
            GlyphSource::Builtin => builtin::rasterize(text, self.size),
        }
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("family", &self.family())
            .field("size", &self.size)
            .finish()
    }
}

/// Padding around outline masks so antialiased edges and overshoot survive
const MASK_PAD: i32 = 2;

/// Converts ttf-parser outline callbacks into a tiny-skia path in pixels
struct PathSink {
    builder: PathBuilder,
    origin_x: f32,
    baseline: f32,
    scale: f32,
}

impl PathSink {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// `None` when the face can't be re-parsed; the caller falls back to builtin
fn rasterize_outline(face: &FontFace, text: &str, size: f32) -> Option<GlyphMask> {
    let ttf = face.as_ttf_face()?;
    let metrics = face.metrics();
    let scale = metrics.scale(size);
    let pad = MASK_PAD as f32;

    let ascender = metrics.ascender_px(size);
    let advance: f32 = text
        .chars()
        .map(|c| ttf.glyph_hor_advance(glyph_for(&ttf, c)).unwrap_or(0) as f32 * scale)
        .sum();
    let width = (advance + pad * 2.0).ceil().max(1.0) as u32;
    let height = (ascender - metrics.descender_px(size) + pad * 2.0)
        .ceil()
        .max(1.0) as u32;

    let mut sink = PathSink {
        builder: PathBuilder::new(),
        origin_x: pad,
        baseline: pad + ascender,
        scale,
    };
    for c in text.chars() {
        let glyph = glyph_for(&ttf, c);
        ttf.outline_glyph(glyph, &mut sink);
        sink.origin_x += ttf.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
    }

    let mut mask = Mask::new(width, height)?;
    // Whitespace-only text has no path but still occupies its box
    if let Some(path) = sink.builder.finish() {
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    }

    Some(GlyphMask {
        width,
        height,
        left: -MASK_PAD,
        top: -MASK_PAD,
        coverage: mask.data().to_vec(),
    })
}
