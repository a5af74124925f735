// File: crates/chart-core/src/skia_context.rs
// Summary: DrawContext backed by a Skia canvas (CPU raster or GPU surface).

use skia_safe as skia;
use tracing::warn;

use crate::candle::LineDash;
use crate::context::{DrawContext, TextAlign};
use crate::geometry::{Point, Rect};
use crate::text::TextShaper;

pub struct SkiaContext<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
    stroke: skia::Paint,
    fill: skia::Paint,
    stack: Vec<(skia::Paint, skia::Paint)>,
}

impl<'a> SkiaContext<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a TextShaper) -> Self {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(skia::Color::BLACK);

        Self { canvas, text, stroke, fill, stack: Vec::new() }
    }
}

fn to_sk_rect(rect: Rect) -> skia::Rect {
    let r = rect.standardized();
    skia::Rect::from_ltrb(r.x as f32, r.y as f32, (r.x + r.width) as f32, (r.y + r.height) as f32)
}

impl DrawContext for SkiaContext<'_> {
    fn save(&mut self) {
        self.canvas.save();
        self.stack.push((self.stroke.clone(), self.fill.clone()));
    }

    fn restore(&mut self) {
        if let Some((stroke, fill)) = self.stack.pop() {
            self.stroke = stroke;
            self.fill = fill;
            self.canvas.restore();
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.stroke.set_stroke_width(width.max(0.0));
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.stroke.set_color(color);
    }

    fn set_fill_color(&mut self, color: skia::Color) {
        self.fill.set_color(color);
    }

    fn set_line_dash(&mut self, dash: Option<&LineDash>) {
        let effect = dash.and_then(|d| {
            let intervals = d.intervals()?;
            let effect = skia::PathEffect::dash(&intervals, d.phase);
            if effect.is_none() {
                warn!(?intervals, "dash pattern rejected, stroking solid");
            }
            effect
        });
        self.stroke.set_path_effect(effect);
    }

    fn stroke_line_segments(&mut self, points: &[Point]) {
        for pair in points.chunks_exact(2) {
            self.canvas.draw_line(
                (pair[0].x as f32, pair[0].y as f32),
                (pair[1].x as f32, pair[1].y as f32),
                &self.stroke,
            );
        }
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.canvas.draw_rect(to_sk_rect(rect), &self.stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.canvas.draw_rect(to_sk_rect(rect), &self.fill);
    }

    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: skia::Color) {
        self.text.draw(self.canvas, text, at.x as f32, at.y as f32, align, size, color);
    }
}
