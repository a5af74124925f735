// File: crates/chart-core/src/viewport.rs
// Summary: Surface size, content (plot) rectangle and horizontal zoom state.

use crate::geometry::Rect;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the content rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Where the chart content lives on screen and how far it is zoomed/panned
/// horizontally. Zoom and pan are set by the host; nothing here reacts to input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPortHandler {
    chart_width: f64,
    chart_height: f64,
    content: Rect,
    scale_x: f64,
    trans_x: f64,
}

impl ViewPortHandler {
    pub fn new(width: i32, height: i32, insets: Insets) -> Self {
        let mut vp = Self {
            chart_width: 0.0,
            chart_height: 0.0,
            content: Rect::default(),
            scale_x: 1.0,
            trans_x: 0.0,
        };
        vp.set_chart_dimens(width, height, insets);
        vp
    }

    pub fn set_chart_dimens(&mut self, width: i32, height: i32, insets: Insets) {
        self.chart_width = width.max(0) as f64;
        self.chart_height = height.max(0) as f64;
        let w = (self.chart_width - insets.left as f64 - insets.right as f64).max(1.0);
        let h = (self.chart_height - insets.top as f64 - insets.bottom as f64).max(1.0);
        self.content = Rect::new(insets.left as f64, insets.top as f64, w, h);
    }

    pub fn chart_width(&self) -> f64 { self.chart_width }
    pub fn chart_height(&self) -> f64 { self.chart_height }
    pub fn content_rect(&self) -> Rect { self.content }
    pub fn content_left(&self) -> f64 { self.content.x }
    pub fn content_right(&self) -> f64 { self.content.x + self.content.width }
    pub fn content_top(&self) -> f64 { self.content.y }
    pub fn content_bottom(&self) -> f64 { self.content.y + self.content.height }

    /// Horizontal zoom factor, 1 = whole x range fits the content width.
    pub fn scale_x(&self) -> f64 { self.scale_x }

    /// Horizontal pan in pixels (negative scrolls content to the left).
    pub fn trans_x(&self) -> f64 { self.trans_x }

    /// Zoom is never below 1; pan is limited so content cannot leave the view.
    pub fn set_zoom(&mut self, scale_x: f64, trans_x: f64) {
        self.scale_x = if scale_x.is_finite() { scale_x.max(1.0) } else { 1.0 };
        let max_trans = self.content.width * (self.scale_x - 1.0);
        self.trans_x = if trans_x.is_finite() { trans_x.clamp(-max_trans, 0.0) } else { 0.0 };
    }

    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content_left() <= x + 1.0
    }

    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = (x * 100.0).floor() / 100.0;
        self.content_right() >= x - 1.0
    }

    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content_top() <= y
    }

    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        let y = (y * 100.0).trunc() / 100.0;
        self.content_bottom() >= y
    }

    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }
}
