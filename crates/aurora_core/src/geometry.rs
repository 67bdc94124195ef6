//! Integer pixel geometry
//!
//! Everything the layout engine produces is expressed in whole pixels of the
//! target raster, so these types use integers rather than floats.

/// Pixel position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Canvas size in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rect covering the whole canvas
    pub fn to_rect(self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// Axis-aligned pixel rectangle (`x..x + w`, `y..y + h`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect spanning two corners, in either order
    pub fn from_points(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Rect::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Square bounding box of a circle
    pub fn from_circle(center: Point, radius: i32) -> Self {
        let r = radius.max(0);
        Rect::new(center.x - r, center.y - r, r * 2, r * 2)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Shrink from all sides, never producing a negative size
    ///
    /// Each offset is limited to half the matching side so the result stays
    /// inside `self` even when the inset is thicker than the rect.
    pub fn inset(&self, dx: i32, dy: i32) -> Self {
        let dx = dx.min(self.w / 2);
        let dy = dy.min(self.h / 2);
        Rect::new(
            self.x + dx,
            self.y + dy,
            (self.w - 2 * dx).max(0),
            (self.h - 2 * dy).max(0),
        )
    }

    /// Clip this rect into `bounds`
    ///
    /// The result always lies inside `bounds`; a rect entirely outside
    /// collapses to an empty rect on the nearest edge.
    pub fn clamp_to(&self, bounds: &Rect) -> Self {
        let x0 = self.x.clamp(bounds.x, bounds.right());
        let y0 = self.y.clamp(bounds.y, bounds.bottom());
        let x1 = self.right().clamp(x0, bounds.right());
        let y1 = self.bottom().clamp(y0, bounds.bottom());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Position and size as fractions of `frame`: `[fx, fy, fw, fh]`
    pub fn fraction_of(&self, frame: &Rect) -> [f32; 4] {
        let fw = frame.w.max(1) as f32;
        let fh = frame.h.max(1) as f32;
        [
            (self.x - frame.x) as f32 / fw,
            (self.y - frame.y) as f32 / fh,
            self.w as f32 / fw,
            self.h as f32 / fh,
        ]
    }
}
