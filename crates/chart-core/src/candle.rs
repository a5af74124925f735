// File: crates/chart-core/src/candle.rs
// Summary: Candle datasets, per-dataset style, trend classification and colour resolution.

use skia_safe as skia;

use crate::axis::AxisDependency;
use crate::entry::{entry_index_for_x, CandleEntry, Rounding};
use crate::format::{DecimalFormatter, ValueFormatter};
use crate::geometry::clamp;

/// Largest accepted bar space; wider would leave bodies with no width.
pub const MAX_BAR_SPACE: f64 = 0.45;

/// Direction of a candle, decided by open vs close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    /// `open < close`
    Increasing,
    /// `open > close`
    Decreasing,
    /// `open == close`, and anything incomparable (NaN).
    Neutral,
}

impl Trend {
    pub fn of(open: f64, close: f64) -> Self {
        if open > close {
            Trend::Decreasing
        } else if open < close {
            Trend::Increasing
        } else {
            Trend::Neutral
        }
    }
}

impl CandleEntry {
    pub fn trend(&self) -> Trend {
        Trend::of(self.open, self.close)
    }
}

/// Dash pattern for stroked lines, in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDash {
    pub phase: f32,
    pub lengths: Vec<f32>,
}

impl LineDash {
    /// On/off intervals with an even count: an odd pattern is repeated once
    /// so its on/off roles alternate. `None` when there is nothing to dash.
    pub fn intervals(&self) -> Option<Vec<f32>> {
        match self.lengths.len() {
            0 => None,
            n if n % 2 == 1 => Some(self.lengths.repeat(2)),
            _ => Some(self.lengths.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightStyle {
    pub color: skia::Color,
    pub line_width: f32,
    pub dash: Option<LineDash>,
    pub draw_vertical: bool,
    pub draw_horizontal: bool,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::from_argb(255, 255, 187, 115),
            line_width: 0.5,
            dash: None,
            draw_vertical: true,
            draw_horizontal: true,
        }
    }
}

/// Candle appearance. Unset colours fall back to the dataset palette.
#[derive(Clone, Debug, PartialEq)]
pub struct CandleStyle {
    bar_space: f64,
    pub shadow_width: f32,
    /// Body + wick when true, open/close ticks on a range line when false.
    pub show_candle_bar: bool,
    pub shadow_color_same_as_candle: bool,
    pub shadow_color: Option<skia::Color>,
    pub increasing_color: Option<skia::Color>,
    pub decreasing_color: Option<skia::Color>,
    pub neutral_color: Option<skia::Color>,
    pub increasing_filled: bool,
    pub decreasing_filled: bool,
    pub highlight: HighlightStyle,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            bar_space: 0.1,
            shadow_width: 1.5,
            show_candle_bar: true,
            shadow_color_same_as_candle: false,
            shadow_color: None,
            increasing_color: None,
            decreasing_color: None,
            neutral_color: None,
            increasing_filled: false,
            decreasing_filled: true,
            highlight: HighlightStyle::default(),
        }
    }
}

impl CandleStyle {
    /// Horizontal gap left on each side of a body, in x units.
    pub fn bar_space(&self) -> f64 {
        self.bar_space
    }

    /// Clamped into `[0, MAX_BAR_SPACE]`.
    pub fn set_bar_space(&mut self, space: f64) {
        let clamped = if space.is_nan() { 0.0 } else { clamp(space, 0.0, MAX_BAR_SPACE) };
        if clamped != space {
            tracing::warn!(requested = space, applied = clamped, "bar space clamped");
        }
        self.bar_space = clamped;
    }

    pub fn trend_color(&self, trend: Trend) -> Option<skia::Color> {
        match trend {
            Trend::Increasing => self.increasing_color,
            Trend::Decreasing => self.decreasing_color,
            Trend::Neutral => self.neutral_color,
        }
    }

    /// Neutral bodies are always outlined.
    pub fn is_filled(&self, trend: Trend) -> bool {
        match trend {
            Trend::Increasing => self.increasing_filled,
            Trend::Decreasing => self.decreasing_filled,
            Trend::Neutral => false,
        }
    }
}

/// Body/tick colour: the trend's configured colour, else the palette colour.
pub fn resolve_candle_color(style: &CandleStyle, trend: Trend, palette: skia::Color) -> skia::Color {
    style.trend_color(trend).unwrap_or(palette)
}

/// Wick colour: the candle colour in "same as candle" mode, otherwise the
/// explicit shadow colour, else the palette colour.
pub fn resolve_shadow_color(style: &CandleStyle, trend: Trend, palette: skia::Color) -> skia::Color {
    if style.shadow_color_same_as_candle {
        return resolve_candle_color(style, trend, palette);
    }
    style.shadow_color.unwrap_or(palette)
}

pub struct CandleDataSet {
    pub label: String,
    pub visible: bool,
    pub highlight_enabled: bool,
    pub draw_values: bool,
    pub axis: AxisDependency,
    pub style: CandleStyle,
    /// Per-index palette; `color_at` wraps around.
    pub colors: Vec<skia::Color>,
    pub value_colors: Vec<skia::Color>,
    pub value_font_size: f32,
    pub value_formatter: Option<Box<dyn ValueFormatter>>,
    entries: Vec<CandleEntry>,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl CandleDataSet {
    pub fn new(entries: Vec<CandleEntry>, label: impl Into<String>) -> Self {
        let mut set = Self {
            label: label.into(),
            visible: true,
            highlight_enabled: true,
            draw_values: true,
            axis: AxisDependency::Left,
            style: CandleStyle::default(),
            colors: vec![skia::Color::from_argb(255, 140, 234, 255)],
            value_colors: vec![skia::Color::BLACK],
            value_font_size: 7.0,
            value_formatter: Some(Box::new(DecimalFormatter::default())),
            entries,
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        };
        set.recompute();
        set
    }

    pub fn entries(&self) -> &[CandleEntry] {
        &self.entries
    }

    /// Raw access for in-place edits. Call [`CandleDataSet::recompute`] afterwards.
    pub fn entries_mut(&mut self) -> &mut Vec<CandleEntry> {
        &mut self.entries
    }

    pub fn replace_entries(&mut self, entries: Vec<CandleEntry>) {
        self.entries = entries;
        self.recompute();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, index: usize) -> Option<&CandleEntry> {
        self.entries.get(index)
    }

    pub fn entry_index_for_x(&self, x: f64, rounding: Rounding) -> Option<usize> {
        entry_index_for_x(&self.entries, x, rounding)
    }

    pub fn entry_for_x(&self, x: f64, rounding: Rounding) -> Option<&CandleEntry> {
        self.entry_index_for_x(x, rounding).and_then(|i| self.entries.get(i))
    }

    pub fn color_at(&self, index: usize) -> skia::Color {
        palette_at(&self.colors, index, skia::Color::BLACK)
    }

    pub fn value_text_color_at(&self, index: usize) -> skia::Color {
        palette_at(&self.value_colors, index, skia::Color::BLACK)
    }

    /// Refresh x bounds and the low/high extremes.
    pub fn recompute(&mut self) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for e in &self.entries {
            x_min = x_min.min(e.x);
            x_max = x_max.max(e.x);
            y_min = y_min.min(e.low);
            y_max = y_max.max(e.high);
        }
        if x_min == f64::INFINITY {
            x_min = 0.0;
            x_max = 0.0;
        }
        if y_min == f64::INFINITY {
            y_min = 0.0;
            y_max = 0.0;
        }
        self.x_min = x_min;
        self.x_max = x_max;
        self.y_min = y_min;
        self.y_max = y_max;
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }
}

fn palette_at(colors: &[skia::Color], index: usize, fallback: skia::Color) -> skia::Color {
    if colors.is_empty() {
        fallback
    } else {
        colors[index % colors.len()]
    }
}

/// All candle datasets of one chart.
#[derive(Default)]
pub struct CandleData {
    pub data_sets: Vec<CandleDataSet>,
}

impl CandleData {
    pub fn new(data_sets: Vec<CandleDataSet>) -> Self {
        Self { data_sets }
    }

    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    pub fn data_set(&self, index: usize) -> Option<&CandleDataSet> {
        self.data_sets.get(index)
    }

    /// Total entries across every dataset.
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(CandleDataSet::entry_count).sum()
    }

    pub fn recompute(&mut self) {
        for set in &mut self.data_sets {
            set.recompute();
        }
    }

    /// `(x_min, x_max)` across all non-empty datasets.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        self.bounds_where(|_| true).map(|(x0, x1, _, _)| (x0, x1))
    }

    /// `(y_min, y_max)` across the non-empty datasets scaled against `axis`.
    pub fn y_bounds(&self, axis: AxisDependency) -> Option<(f64, f64)> {
        self.bounds_where(|s| s.axis == axis).map(|(_, _, y0, y1)| (y0, y1))
    }

    fn bounds_where(&self, pred: impl Fn(&CandleDataSet) -> bool) -> Option<(f64, f64, f64, f64)> {
        self.data_sets
            .iter()
            .filter(|s| s.entry_count() > 0 && pred(s))
            .map(|s| (s.x_min, s.x_max, s.y_min, s.y_max))
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
    }
}
