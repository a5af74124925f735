// File: crates/chart-core/src/bar.rs
// Summary: Bar dataset with cached aggregate statistics (stack depth, stacked count, bounds).

use skia_safe as skia;

use crate::entry::BarEntry;

/// Derived values over a bar entry sequence. A pure function of the entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStats {
    /// Deepest stack across all entries, at least 1.
    pub stack_size: usize,
    /// Entry count where every stack component counts separately.
    pub entry_count_stacks: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for BarStats {
    fn default() -> Self {
        Self { stack_size: 1, entry_count_stacks: 0, x_min: 0.0, x_max: 0.0, y_min: 0.0, y_max: 0.0 }
    }
}

impl BarStats {
    /// Single O(n) scan over `entries`.
    ///
    /// Entries with a NaN `y` do not touch the bounds. A stacked entry spans
    /// `[-negative_sum, positive_sum]` instead of its raw `y`. When nothing
    /// contributed to an axis pair it collapses to `(0, 0)`.
    pub fn compute(entries: &[BarEntry]) -> Self {
        let mut stats = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
            ..Self::default()
        };

        for e in entries {
            let len = e.stack_len();
            stats.entry_count_stacks += len;
            if e.is_stacked() {
                stats.stack_size = stats.stack_size.max(len);
            }

            if e.y.is_nan() {
                continue;
            }
            let (lo, hi) = if e.is_stacked() { (-e.negative_sum(), e.positive_sum()) } else { (e.y, e.y) };
            stats.y_min = stats.y_min.min(lo);
            stats.y_max = stats.y_max.max(hi);
            stats.x_min = stats.x_min.min(e.x);
            stats.x_max = stats.x_max.max(e.x);
        }

        if stats.y_min == f64::INFINITY {
            stats.y_min = 0.0;
            stats.y_max = 0.0;
        }
        if stats.x_min == f64::INFINITY {
            stats.x_min = 0.0;
            stats.x_max = 0.0;
        }
        stats
    }

    pub fn is_stacked(&self) -> bool {
        self.stack_size > 1
    }
}

/// Bar dataset. Statistics are cached and refreshed only through `recompute()`,
/// which the bulk mutators call once per call.
pub struct BarDataSet {
    pub label: String,
    pub visible: bool,
    /// Labels describing each component of a stacked bar.
    pub stack_labels: Vec<String>,
    /// Fill behind each bar indicating the maximum value.
    pub bar_shadow_color: skia::Color,
    /// Border stroke width; 0 disables borders.
    pub bar_border_width: f32,
    pub bar_border_color: skia::Color,
    /// Alpha of the highlight bar, 0 (transparent) to 1 (opaque).
    pub highlight_alpha: f32,
    pub highlight_color: skia::Color,
    entries: Vec<BarEntry>,
    stats: BarStats,
}

impl BarDataSet {
    pub fn new(entries: Vec<BarEntry>, label: impl Into<String>) -> Self {
        let mut set = Self {
            label: label.into(),
            visible: true,
            stack_labels: vec!["Stack".to_string()],
            bar_shadow_color: skia::Color::from_argb(255, 215, 215, 215),
            bar_border_width: 0.0,
            bar_border_color: skia::Color::BLACK,
            highlight_alpha: 120.0 / 255.0,
            highlight_color: skia::Color::BLACK,
            entries,
            stats: BarStats::default(),
        };
        set.recompute();
        set
    }

    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    /// Raw access for in-place edits. Call [`BarDataSet::recompute`] afterwards.
    pub fn entries_mut(&mut self) -> &mut Vec<BarEntry> {
        &mut self.entries
    }

    pub fn replace_entries(&mut self, entries: Vec<BarEntry>) {
        self.entries = entries;
        self.recompute();
    }

    pub fn extend_entries(&mut self, entries: impl IntoIterator<Item = BarEntry>) {
        self.entries.extend(entries);
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.stats = BarStats::compute(&self.entries);
        tracing::trace!(
            label = %self.label,
            stack_size = self.stats.stack_size,
            entry_count_stacks = self.stats.entry_count_stacks,
            "bar stats recomputed"
        );
    }

    pub fn stats(&self) -> &BarStats { &self.stats }
    pub fn stack_size(&self) -> usize { self.stats.stack_size }
    pub fn is_stacked(&self) -> bool { self.stats.is_stacked() }
    pub fn entry_count_stacks(&self) -> usize { self.stats.entry_count_stacks }
    pub fn entry_count(&self) -> usize { self.entries.len() }
    pub fn x_min(&self) -> f64 { self.stats.x_min }
    pub fn x_max(&self) -> f64 { self.stats.x_max }
    pub fn y_min(&self) -> f64 { self.stats.y_min }
    pub fn y_max(&self) -> f64 { self.stats.y_max }
}
