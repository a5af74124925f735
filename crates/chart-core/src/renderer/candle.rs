// File: crates/chart-core/src/renderer/candle.rs
// Summary: Candlestick renderer: wick/body or OHLC-tick geometry, value labels, highlight crosshairs.

use tracing::{debug, trace};

use crate::animator::Animator;
use crate::candle::{resolve_candle_color, resolve_shadow_color, CandleDataSet, Trend};
use crate::context::{DrawContext, TextAlign};
use crate::entry::{CandleEntry, Rounding};
use crate::geometry::{Point, Rect};
use crate::highlight::Highlight;
use crate::renderer::{draw_highlight_lines, CandleDataProvider, DataRenderer};
use crate::viewport::ViewPortHandler;

/// Gap between a value label's bottom and the wick top, in pixels.
const VALUE_LABEL_GAP: f64 = 5.0;

/// Entry indices a dataset pass visits.
///
/// `min..max` is the visible window; `min..end` is the part already revealed
/// by the horizontal animation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanRange {
    pub min: usize,
    pub max: usize,
    pub end: usize,
}

/// Window from the located lower/upper entry indices.
///
/// When both lookups land on the same entry the window is widened one step to
/// the left and made at least two wide; `entry_count` clamps after widening.
pub fn scan_range(from: usize, to: usize, entry_count: usize, phase_x: f64) -> ScanRange {
    let diff = usize::from(from == to);
    let min = from.saturating_sub(diff);
    let max = (min + 2).max(to + 1).min(entry_count);
    let span = max.saturating_sub(min) as f64;
    let end = ((span * phase_x).ceil() as usize + min).min(max);
    ScanRange { min, max, end }
}

/// Wick points in data space: high, upper body edge, low, lower body edge.
/// Stroked as two segments (high→upper edge, low→lower edge).
pub fn shadow_points(e: &CandleEntry, phase_y: f64) -> [Point; 4] {
    let (upper, lower) = match e.trend() {
        Trend::Decreasing => (e.open, e.close),
        Trend::Increasing => (e.close, e.open),
        Trend::Neutral => (e.open, e.open),
    };
    [
        Point::new(e.x, e.high * phase_y),
        Point::new(e.x, upper * phase_y),
        Point::new(e.x, e.low * phase_y),
        Point::new(e.x, lower * phase_y),
    ]
}

/// Body in data space: `[x-0.5+space, x+0.5-space]` wide, from close to open.
pub fn body_rect(e: &CandleEntry, bar_space: f64, phase_y: f64) -> Rect {
    let left = e.x - 0.5 + bar_space;
    let right = e.x + 0.5 - bar_space;
    let close = e.close * phase_y;
    let open = e.open * phase_y;
    Rect::new(left, close, right - left, open - close)
}

/// Tick-style segments in data space: high-low range, open tick to the left,
/// close tick to the right.
pub fn ohlc_ticks(e: &CandleEntry, bar_space: f64, phase_y: f64) -> ([Point; 2], [Point; 2], [Point; 2]) {
    let open = e.open * phase_y;
    let close = e.close * phase_y;
    (
        [Point::new(e.x, e.high * phase_y), Point::new(e.x, e.low * phase_y)],
        [Point::new(e.x - 0.5 + bar_space, open), Point::new(e.x, open)],
        [Point::new(e.x + 0.5 - bar_space, close), Point::new(e.x, close)],
    )
}

/// Draws candle datasets from a [`CandleDataProvider`].
///
/// Any missing collaborator makes the affected stage a no-op.
pub struct CandleStickRenderer<'a> {
    provider: Option<&'a dyn CandleDataProvider>,
    animator: Option<Animator>,
    viewport: Option<ViewPortHandler>,
    // scratch, reused per entry
    shadow: [Point; 4],
    range: [Point; 2],
    open: [Point; 2],
    close: [Point; 2],
    body: Rect,
}

impl<'a> CandleStickRenderer<'a> {
    pub fn new(
        provider: Option<&'a dyn CandleDataProvider>,
        animator: Option<Animator>,
        viewport: Option<ViewPortHandler>,
    ) -> Self {
        Self {
            provider,
            animator,
            viewport,
            shadow: [Point::default(); 4],
            range: [Point::default(); 2],
            open: [Point::default(); 2],
            close: [Point::default(); 2],
            body: Rect::default(),
        }
    }

    pub fn draw_data_set(&mut self, ctx: &mut dyn DrawContext, set: &CandleDataSet) {
        let (Some(provider), Some(animator)) = (self.provider, self.animator) else {
            debug!(label = %set.label, "candle pass skipped: no provider or animator");
            return;
        };

        let trans = provider.transformer(set.axis);
        let phase_x = animator.clamped_phase_x();
        let phase_y = animator.phase_y;
        let style = &set.style;
        let bar_space = style.bar_space();

        let (Some(from), Some(to)) = (
            set.entry_index_for_x(provider.lowest_visible_x(), Rounding::Down),
            set.entry_index_for_x(provider.highest_visible_x(), Rounding::Up),
        ) else {
            return;
        };
        let window = scan_range(from, to, set.entry_count(), phase_x);
        debug!(label = %set.label, ?window, "candle scan window");

        ctx.save();
        ctx.set_line_width(style.shadow_width);

        for j in window.min..window.end {
            let Some(e) = set.entry(j) else { continue };
            if e.x < window.min as f64 || e.x >= window.max as f64 {
                continue;
            }
            let trend = e.trend();
            let palette = set.color_at(j);

            if style.show_candle_bar {
                self.shadow = shadow_points(e, phase_y);
                trans.point_values_to_pixel(&mut self.shadow);
                ctx.set_stroke_color(resolve_shadow_color(style, trend, palette));
                ctx.stroke_line_segments(&self.shadow);

                self.body = body_rect(e, bar_space, phase_y);
                trans.rect_value_to_pixel(&mut self.body);

                let color = resolve_candle_color(style, trend, palette);
                if style.is_filled(trend) {
                    ctx.set_fill_color(color);
                    ctx.fill_rect(self.body);
                } else {
                    ctx.set_stroke_color(color);
                    ctx.stroke_rect(self.body);
                }
            } else {
                (self.range, self.open, self.close) = ohlc_ticks(e, bar_space, phase_y);
                trans.point_values_to_pixel(&mut self.range);
                trans.point_values_to_pixel(&mut self.open);
                trans.point_values_to_pixel(&mut self.close);

                ctx.set_stroke_color(resolve_candle_color(style, trend, palette));
                ctx.stroke_line_segments(&self.range);
                ctx.stroke_line_segments(&self.open);
                ctx.stroke_line_segments(&self.close);
            }
        }

        ctx.restore();
    }
}

impl DataRenderer for CandleStickRenderer<'_> {
    fn draw_data(&mut self, ctx: &mut dyn DrawContext) {
        let Some(data) = self.provider.and_then(|p| p.candle_data()) else {
            return;
        };
        for set in &data.data_sets {
            if set.visible && set.entry_count() > 0 {
                self.draw_data_set(ctx, set);
            }
        }
    }

    fn draw_values(&mut self, ctx: &mut dyn DrawContext) {
        let (Some(provider), Some(animator), Some(viewport)) = (self.provider, self.animator, self.viewport) else {
            return;
        };
        let Some(data) = provider.candle_data() else { return };

        let limit = (provider.max_visible_value_count() as f64 * viewport.scale_x()).ceil();
        if data.entry_count() as f64 >= limit {
            debug!(values = data.entry_count(), limit, "value labels suppressed");
            return;
        }

        let phase_x = animator.clamped_phase_x();
        let phase_y = animator.phase_y;

        for set in &data.data_sets {
            if !set.draw_values || set.entry_count() == 0 {
                continue;
            }
            let Some(formatter) = set.value_formatter.as_deref() else { continue };
            let trans = provider.transformer(set.axis);

            let min = provider.lowest_visible_x().floor().max(0.0) as usize;
            let max = (provider.highest_visible_x().ceil().max(0.0) as usize).min(set.entry_count());
            let end = ((max.saturating_sub(min) as f64 * phase_x).ceil() as usize + min).min(max);
            let y_offset = set.value_font_size as f64 + VALUE_LABEL_GAP;

            for j in min..end {
                let Some(e) = set.entry(j) else { break };
                let pt = trans.pixel_for_value(e.x, e.high * phase_y);

                if !viewport.is_in_bounds_right(pt.x) {
                    break;
                }
                if !viewport.is_in_bounds_left(pt.x) || !viewport.is_in_bounds_y(pt.y) {
                    continue;
                }

                ctx.draw_text(
                    &formatter.format(e.high),
                    Point::new(pt.x, pt.y - y_offset),
                    TextAlign::Center,
                    set.value_font_size,
                    set.value_text_color_at(j),
                );
            }
        }
    }

    fn draw_extras(&mut self, _ctx: &mut dyn DrawContext) {}

    fn draw_highlighted(&mut self, ctx: &mut dyn DrawContext, highlights: &[Highlight]) {
        let (Some(provider), Some(animator), Some(viewport)) = (self.provider, self.animator, self.viewport) else {
            return;
        };
        let Some(data) = provider.candle_data() else { return };

        ctx.save();

        for high in highlights {
            let range = high.data_set.range(data.data_set_count());
            for index in range {
                let Some(set) = data.data_set(index) else { continue };
                if !set.highlight_enabled {
                    continue;
                }
                let Some(e) = set.entry_for_x(high.x, Rounding::Closest) else { continue };
                if e.x != high.x {
                    trace!(requested = high.x, nearest = e.x, "highlight has no exact entry");
                    continue;
                }

                let hl = &set.style.highlight;
                ctx.set_stroke_color(hl.color);
                ctx.set_line_width(hl.line_width);
                ctx.set_line_dash(hl.dash.as_ref());

                let low = e.low * animator.phase_y;
                let high_v = e.high * animator.phase_y;
                let y = (low + high_v) / 2.0;
                let pt = provider.transformer(set.axis).pixel_for_value(high.x, y);

                draw_highlight_lines(ctx, &viewport, pt, hl);
            }
        }

        ctx.restore();
    }
}
