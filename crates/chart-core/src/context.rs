// File: crates/chart-core/src/context.rs
// Summary: Renderer-agnostic 2D drawing context and a recording implementation.

use skia_safe as skia;

use crate::candle::LineDash;
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Minimal stroke/fill/text surface the chart renderers draw into.
/// All coordinates are in pixels.
pub trait DrawContext {
    /// Push the current stroke/fill/dash state.
    fn save(&mut self);
    /// Pop back to the last saved state.
    fn restore(&mut self);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: skia::Color);
    fn set_fill_color(&mut self, color: skia::Color);
    /// `None` draws solid lines.
    fn set_line_dash(&mut self, dash: Option<&LineDash>);
    /// Strokes one segment per consecutive pair; a trailing odd point is ignored.
    fn stroke_line_segments(&mut self, points: &[Point]);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    /// `at` is the top of the text box, horizontally anchored per `align`.
    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: skia::Color);
}

/// One recorded call, with the style that was current when it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Segments { points: Vec<Point>, color: skia::Color, width: f32, dash: Option<LineDash> },
    StrokeRect { rect: Rect, color: skia::Color, width: f32 },
    FillRect { rect: Rect, color: skia::Color },
    Text { text: String, at: Point, align: TextAlign, size: f32, color: skia::Color },
}

#[derive(Clone, Debug, PartialEq)]
struct PenState {
    stroke: skia::Color,
    fill: skia::Color,
    width: f32,
    dash: Option<LineDash>,
}

impl Default for PenState {
    fn default() -> Self {
        Self { stroke: skia::Color::BLACK, fill: skia::Color::BLACK, width: 1.0, dash: None }
    }
}

/// Headless context that keeps every draw call. Useful for tests and for
/// inspecting a frame without a raster surface.
#[derive(Default)]
pub struct RecordingContext {
    pub ops: Vec<DrawOp>,
    pen: PenState,
    stack: Vec<PenState>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth of the save stack; zero once every `save` has been matched.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Segments { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::StrokeRect { .. } | DrawOp::FillRect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.stack.push(self.pen.clone());
    }

    fn restore(&mut self) {
        if let Some(pen) = self.stack.pop() {
            self.pen = pen;
        }
    }

    fn set_line_width(&mut self, width: f32) { self.pen.width = width; }
    fn set_stroke_color(&mut self, color: skia::Color) { self.pen.stroke = color; }
    fn set_fill_color(&mut self, color: skia::Color) { self.pen.fill = color; }
    fn set_line_dash(&mut self, dash: Option<&LineDash>) { self.pen.dash = dash.cloned(); }

    fn stroke_line_segments(&mut self, points: &[Point]) {
        self.ops.push(DrawOp::Segments {
            points: points.to_vec(),
            color: self.pen.stroke,
            width: self.pen.width,
            dash: self.pen.dash.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::StrokeRect { rect, color: self.pen.stroke, width: self.pen.width });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect { rect, color: self.pen.fill });
    }

    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: skia::Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, align, size, color });
    }
}
