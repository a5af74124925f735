// File: crates/chart-core/src/renderer/mod.rs
// Summary: Renderer traits, the data-provider seam, and shared highlight drawing.

pub mod candle;

pub use candle::CandleStickRenderer;

use crate::axis::AxisDependency;
use crate::candle::{CandleData, HighlightStyle};
use crate::context::DrawContext;
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::transform::Transformer;
use crate::viewport::ViewPortHandler;

/// What a candle renderer needs from its host chart.
pub trait CandleDataProvider {
    fn candle_data(&self) -> Option<&CandleData>;
    /// Smallest x visible at the left edge of the content area.
    fn lowest_visible_x(&self) -> f64;
    /// Largest x visible at the right edge of the content area.
    fn highest_visible_x(&self) -> f64;
    /// Value labels are suppressed once this many values (scaled by zoom) are visible.
    fn max_visible_value_count(&self) -> usize;
    fn transformer(&self, axis: AxisDependency) -> &Transformer;
}

/// One drawing pass over a chart's data, split into the stages the host calls
/// in order: data, values, highlights, extras.
pub trait DataRenderer {
    fn draw_data(&mut self, ctx: &mut dyn DrawContext);
    fn draw_values(&mut self, ctx: &mut dyn DrawContext);
    fn draw_extras(&mut self, ctx: &mut dyn DrawContext);
    fn draw_highlighted(&mut self, ctx: &mut dyn DrawContext, highlights: &[Highlight]);
}

/// Crosshair through `point` spanning the content rectangle. Stroke colour,
/// width and dash are expected to be set by the caller.
pub fn draw_highlight_lines(ctx: &mut dyn DrawContext, viewport: &ViewPortHandler, point: Point, style: &HighlightStyle) {
    if style.draw_vertical {
        ctx.stroke_line_segments(&[
            Point::new(point.x, viewport.content_top()),
            Point::new(point.x, viewport.content_bottom()),
        ]);
    }
    if style.draw_horizontal {
        ctx.stroke_line_segments(&[
            Point::new(viewport.content_left(), point.y),
            Point::new(viewport.content_right(), point.y),
        ]);
    }
}
