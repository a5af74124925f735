// File: crates/chart-core/src/chart.rs
// Summary: Candlestick chart host (provider for the renderer) and headless PNG pipeline using Skia raster surfaces.

use skia_safe as skia;

use crate::animator::Animator;
use crate::axis::{Axis, AxisDependency};
use crate::candle::{CandleData, CandleDataSet};
use crate::context::DrawContext;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::highlight::{DataSetSelector, Highlight};
use crate::renderer::{CandleDataProvider, CandleStickRenderer, DataRenderer};
use crate::skia_context::SkiaContext;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::transform::Transformer;
use crate::viewport::{Insets, ViewPortHandler, HEIGHT, WIDTH};

/// Horizontal padding added on both sides of the x range so edge bodies fit.
const X_PADDING: f64 = 0.5;
/// Fraction of the y span added above and below the data.
const Y_MARGIN: f64 = 0.02;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_grid: bool,
    pub draw_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_grid: true,
            draw_values: true,
        }
    }
}

pub struct CandleStickChart {
    pub data: CandleData,
    pub x_axis: Axis,
    pub left_axis: Axis,
    pub right_axis: Axis,
    pub animator: Animator,
    pub max_visible_value_count: usize,
    viewport: ViewPortHandler,
    left: Transformer,
    right: Transformer,
    highlights: Vec<Highlight>,
}

impl Default for CandleStickChart {
    fn default() -> Self {
        Self::new(CandleData::default())
    }
}

impl CandleStickChart {
    pub fn new(data: CandleData) -> Self {
        let mut chart = Self {
            data,
            x_axis: Axis::default_x(),
            left_axis: Axis::default_y(),
            right_axis: Axis::default_y(),
            animator: Animator::finished(),
            max_visible_value_count: 100,
            viewport: ViewPortHandler::new(WIDTH, HEIGHT, Insets::default()),
            left: Transformer::default(),
            right: Transformer::default(),
            highlights: Vec::new(),
        };
        chart.notify_data_changed();
        chart
    }

    pub fn add_data_set(&mut self, set: CandleDataSet) {
        self.data.data_sets.push(set);
        self.notify_data_changed();
    }

    pub fn viewport(&self) -> &ViewPortHandler {
        &self.viewport
    }

    pub fn set_viewport(&mut self, width: i32, height: i32, insets: Insets) {
        self.viewport.set_chart_dimens(width, height, insets);
        self.prepare_transformers();
    }

    /// Horizontal zoom (≥ 1) and pan in pixels.
    pub fn set_zoom(&mut self, scale_x: f64, trans_x: f64) {
        self.viewport.set_zoom(scale_x, trans_x);
        self.prepare_transformers();
    }

    /// Recompute dataset bounds and refit axes. Call after mutating entries.
    pub fn notify_data_changed(&mut self) {
        self.data.recompute();
        if let Some((x0, x1)) = self.data.x_bounds() {
            self.x_axis.fit(x0 - X_PADDING, x1 + X_PADDING);
        }
        let left = self.data.y_bounds(AxisDependency::Left);
        let right = self.data.y_bounds(AxisDependency::Right);
        if let Some((y0, y1)) = left.or(right) {
            fit_with_margin(&mut self.left_axis, y0, y1);
        }
        if let Some((y0, y1)) = right.or(left) {
            fit_with_margin(&mut self.right_axis, y0, y1);
        }
        self.prepare_transformers();
    }

    fn prepare_transformers(&mut self) {
        let x_range = self.x_axis.range();
        self.left = Transformer::prepare(&self.viewport, self.x_axis.min, x_range, self.left_axis.min, self.left_axis.range());
        self.right = Transformer::prepare(&self.viewport, self.x_axis.min, x_range, self.right_axis.min, self.right_axis.range());
    }

    pub fn highlight_value(&mut self, x: f64, data_set: DataSetSelector) {
        self.highlights.push(Highlight::new(x, data_set));
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// One full frame: grid, candles, value labels, highlights, extras.
    pub fn draw(&self, ctx: &mut dyn DrawContext, opts: &RenderOptions) {
        if opts.draw_grid {
            draw_grid(ctx, &self.viewport, &opts.theme);
        }
        let mut renderer = CandleStickRenderer::new(Some(self as &dyn CandleDataProvider), Some(self.animator), Some(self.viewport));
        renderer.draw_data(ctx);
        if opts.draw_values {
            renderer.draw_values(ctx);
        }
        renderer.draw_highlighted(ctx, &self.highlights);
        renderer.draw_extras(ctx);
    }

    /// Render the chart to PNG bytes using a CPU raster surface sized by `opts`.
    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.set_viewport(opts.width, opts.height, opts.insets);

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let shaper = TextShaper::new();
        let mut ctx = SkiaContext::new(canvas, &shaper);
        self.draw(&mut ctx, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl CandleDataProvider for CandleStickChart {
    fn candle_data(&self) -> Option<&CandleData> {
        Some(&self.data)
    }

    fn lowest_visible_x(&self) -> f64 {
        let p = self.left.value_for_pixel(self.viewport.content_left(), self.viewport.content_bottom());
        p.x.max(self.x_axis.min)
    }

    fn highest_visible_x(&self) -> f64 {
        let p = self.left.value_for_pixel(self.viewport.content_right(), self.viewport.content_bottom());
        p.x.min(self.x_axis.max)
    }

    fn max_visible_value_count(&self) -> usize {
        self.max_visible_value_count
    }

    fn transformer(&self, axis: AxisDependency) -> &Transformer {
        match axis {
            AxisDependency::Left => &self.left,
            AxisDependency::Right => &self.right,
        }
    }
}

fn fit_with_margin(axis: &mut Axis, y0: f64, y1: f64) {
    let m = (y1 - y0) * Y_MARGIN;
    axis.fit(y0 - m, y1 + m);
}

fn draw_grid(ctx: &mut dyn DrawContext, vp: &ViewPortHandler, theme: &Theme) {
    let (l, t, r, b) = (vp.content_left(), vp.content_top(), vp.content_right(), vp.content_bottom());
    ctx.save();
    ctx.set_line_width(1.0);
    ctx.set_stroke_color(theme.grid);
    for i in 0..10 {
        let x = l + (r - l) * i as f64 / 9.0;
        ctx.stroke_line_segments(&[Point::new(x, t), Point::new(x, b)]);
    }
    for i in 0..6 {
        let y = t + (b - t) * i as f64 / 5.0;
        ctx.stroke_line_segments(&[Point::new(l, y), Point::new(r, y)]);
    }
    ctx.set_line_width(1.5);
    ctx.set_stroke_color(theme.axis_line);
    ctx.stroke_line_segments(&[Point::new(l, b), Point::new(r, b), Point::new(l, t), Point::new(l, b)]);
    ctx.restore();
}
