//! Colors, interpolation and gradient descriptors

use smallvec::SmallVec;

use crate::{CoreError, Result};

/// 8-bit RGBA color
///
/// Alpha only matters where the target surface blends; `rgb` colors are opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    ///
    /// `t` is clamped to `[0, 1]`; every channel is truncated toward zero,
    /// so `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b` exactly.
    pub fn lerp(a: &Color, b: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let from = from as f64;
            (from + (to as f64 - from) * t) as u8
        };
        Color {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::rgb(c[0], c[1], c[2])
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Ordered sequence of two or three gradient colors
///
/// Positions are implicit: the stops are spread evenly over `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStops {
    stops: SmallVec<[Color; 3]>,
}

impl ColorStops {
    pub fn two(start: Color, end: Color) -> Self {
        Self {
            stops: SmallVec::from_buf_and_len([start, end, end], 2),
        }
    }

    pub fn three(start: Color, middle: Color, end: Color) -> Self {
        Self {
            stops: SmallVec::from_buf([start, middle, end]),
        }
    }

    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        match *colors {
            [a, b] => Ok(Self::two(a, b)),
            [a, b, c] => Ok(Self::three(a, b, c)),
            _ => Err(CoreError::StopCount(colors.len())),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.stops
    }

    pub fn first(&self) -> Color {
        self.stops[0]
    }

    pub fn last(&self) -> Color {
        self.stops[self.stops.len() - 1]
    }

    /// Color at progress `t`
    ///
    /// Three-stop sequences compose two interpolations split at `t = 0.5`.
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match *self.stops.as_slice() {
            [a, b, c] => {
                if t < 0.5 {
                    Color::lerp(&a, &b, t * 2.0)
                } else {
                    Color::lerp(&b, &c, (t - 0.5) * 2.0)
                }
            }
            [a, b] => Color::lerp(&a, &b, t),
            // Construction guarantees 2 or 3 stops
            _ => self.first(),
        }
    }
}

/// Direction in which gradient progress advances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientAxis {
    /// Weighted blend of both axes: `0.6·x/w + 0.4·y/h`
    Diagonal,
    /// Top to bottom, one color per scanline
    #[default]
    Vertical,
}

impl GradientAxis {
    /// Normalized progress for local pixel `(x, y)` in a `width × height` region
    ///
    /// Computed in `f64` with the division before the weighting, so icon
    /// pixels come out identical to the reference artwork.
    pub fn progress(self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let w = width.max(1) as f64;
        let h = height.max(1) as f64;
        match self {
            GradientAxis::Diagonal => x as f64 / w * 0.6 + y as f64 / h * 0.4,
            GradientAxis::Vertical => y as f64 / h,
        }
    }
}

/// Gradient fill description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub axis: GradientAxis,
    pub stops: ColorStops,
}

impl Gradient {
    pub fn vertical(stops: ColorStops) -> Self {
        Self {
            axis: GradientAxis::Vertical,
            stops,
        }
    }

    pub fn diagonal(stops: ColorStops) -> Self {
        Self {
            axis: GradientAxis::Diagonal,
            stops,
        }
    }

    pub fn progress(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        self.axis.progress(x, y, width, height)
    }

    /// Color for local pixel `(x, y)` in a `width × height` region
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        self.stops.sample(self.progress(x, y, width, height))
    }
}
