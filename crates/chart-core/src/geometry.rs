// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers shared by transforms, renderer and draw contexts.

/// A point in either data space or pixel space, depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Origin + size rectangle. Width/height may be negative until `standardized()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build from two opposite corners, keeping their order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x: a.x, y: a.y, width: b.x - a.x, height: b.y - a.y }
    }

    pub fn min_x(&self) -> f64 { self.x.min(self.x + self.width) }
    pub fn max_x(&self) -> f64 { self.x.max(self.x + self.width) }
    pub fn min_y(&self) -> f64 { self.y.min(self.y + self.height) }
    pub fn max_y(&self) -> f64 { self.y.max(self.y + self.height) }

    /// Same rectangle with non-negative width and height.
    pub fn standardized(&self) -> Self {
        Self {
            x: self.min_x(),
            y: self.min_y(),
            width: self.width.abs(),
            height: self.height.abs(),
        }
    }

    pub fn far_corner(&self) -> Point { Point::new(self.x + self.width, self.y + self.height) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
