// File: crates/chart-core/src/entry.rs
// Summary: Chart entries (bar, candle) and the shared x-position lookup.

/// Anything positioned on the x-axis with a representative y value.
pub trait ChartEntry {
    fn x(&self) -> f64;
}

/// One bar: a single value, or an ordered stack of values summed into one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarEntry {
    pub x: f64,
    pub y: f64,
    y_values: Option<Vec<f64>>,
    positive_sum: f64,
    negative_sum: f64,
}

impl BarEntry {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, y_values: None, positive_sum: 0.0, negative_sum: 0.0 }
    }

    /// Stacked bar; `y` becomes the sum of all components.
    pub fn stacked(x: f64, values: Vec<f64>) -> Self {
        let mut e = Self::new(x, 0.0);
        e.set_y_values(values);
        e
    }

    pub fn y_values(&self) -> Option<&[f64]> {
        self.y_values.as_deref()
    }

    pub fn set_y_values(&mut self, values: Vec<f64>) {
        self.y = values.iter().sum();
        self.positive_sum = values.iter().filter(|v| **v > 0.0).sum();
        self.negative_sum = values.iter().filter(|v| **v < 0.0).map(|v| v.abs()).sum();
        self.y_values = Some(values);
    }

    pub fn is_stacked(&self) -> bool {
        self.y_values.is_some()
    }

    /// Number of logical values this bar represents (1 when unstacked).
    pub fn stack_len(&self) -> usize {
        self.y_values.as_ref().map_or(1, Vec::len)
    }

    /// Sum of the positive stack components.
    pub fn positive_sum(&self) -> f64 {
        self.positive_sum
    }

    /// Magnitude of the sum of the negative stack components (non-negative).
    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }
}

impl ChartEntry for BarEntry {
    fn x(&self) -> f64 { self.x }
}

/// Open/high/low/close entry. No ordering between the four prices is enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleEntry {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleEntry {
    pub const fn new(x: f64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { x, open, high, low, close }
    }
}

impl ChartEntry for CandleEntry {
    fn x(&self) -> f64 { self.x }
}

/// Direction used when no entry sits exactly at the requested x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
    Closest,
}

/// Binary search over x-sorted entries for the index nearest to `x`.
///
/// `Up` moves to the next entry when the closest one lies left of `x`, `Down`
/// moves to the previous entry when it lies right of `x`. Returns `None` only
/// for an empty slice.
pub fn entry_index_for_x<E: ChartEntry>(entries: &[E], x: f64, rounding: Rounding) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let mut low = 0usize;
    let mut high = entries.len() - 1;
    while low < high {
        let m = (low + high) / 2;
        let d1 = entries[m].x() - x;
        let d2 = entries[m + 1].x() - x;
        let (ad1, ad2) = (d1.abs(), d2.abs());
        if ad2 < ad1 {
            low = m + 1;
        } else if ad1 < ad2 {
            high = m;
        } else if d1 >= 0.0 {
            high = m;
        } else {
            low = m + 1;
        }
    }
    let mut closest = high;
    let closest_x = entries[closest].x();
    match rounding {
        Rounding::Up if closest_x < x && closest + 1 < entries.len() => closest += 1,
        Rounding::Down if closest_x > x && closest > 0 => closest -= 1,
        _ => {}
    }
    Some(closest)
}
