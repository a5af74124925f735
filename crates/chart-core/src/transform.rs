// File: crates/chart-core/src/transform.rs
// Summary: Data-space to pixel-space mapping for one y-axis.

use crate::geometry::{Point, Rect};
use crate::viewport::ViewPortHandler;

/// Affine value→pixel map: x grows right, y grows downward on screen.
///
/// `px = offset_x + (x - x_min) * px_per_x`
/// `py = offset_y - (y - y_min) * px_per_y`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformer {
    x_min: f64,
    y_min: f64,
    px_per_x: f64,
    px_per_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for Transformer {
    fn default() -> Self {
        Self { x_min: 0.0, y_min: 0.0, px_per_x: 1.0, px_per_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl Transformer {
    /// Fit `[x_min, x_min + x_range] × [y_min, y_min + y_range]` into the
    /// viewport's content rectangle, then apply its horizontal zoom and pan.
    pub fn prepare(viewport: &ViewPortHandler, x_min: f64, x_range: f64, y_min: f64, y_range: f64) -> Self {
        let content = viewport.content_rect();
        let x_range = if x_range.abs() < 1e-12 { 1.0 } else { x_range };
        let y_range = if y_range.abs() < 1e-12 { 1.0 } else { y_range };
        Self {
            x_min,
            y_min,
            px_per_x: content.width / x_range * viewport.scale_x(),
            px_per_y: content.height / y_range,
            offset_x: viewport.content_left() + viewport.trans_x(),
            offset_y: viewport.content_bottom(),
        }
    }

    #[inline]
    pub fn pixel_for_value(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.offset_x + (x - self.x_min) * self.px_per_x,
            self.offset_y - (y - self.y_min) * self.px_per_y,
        )
    }

    #[inline]
    pub fn value_for_pixel(&self, px: f64, py: f64) -> Point {
        Point::new(
            self.x_min + (px - self.offset_x) / self.px_per_x,
            self.y_min + (self.offset_y - py) / self.px_per_y,
        )
    }

    /// In-place transform of every point.
    pub fn point_values_to_pixel(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.pixel_for_value(p.x, p.y);
        }
    }

    /// In-place transform of both corners. The result keeps corner order, so
    /// a rect with ascending data y ends up with negative pixel height.
    pub fn rect_value_to_pixel(&self, rect: &mut Rect) {
        let a = self.pixel_for_value(rect.x, rect.y);
        let far = rect.far_corner();
        let b = self.pixel_for_value(far.x, far.y);
        *rect = Rect::from_corners(a, b);
    }
}
