// File: crates/chart-core/src/axis.rs
// Summary: Axis ranges and the left/right axis a dataset scales against.

use serde::Deserialize;

/// Which of the two y-axes a dataset is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Index", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Price", 0.0, 100.0)
    }

    /// Span of the axis, never below a tiny epsilon so callers can divide by it.
    pub fn range(&self) -> f64 {
        (self.max - self.min).abs().max(1e-9)
    }

    /// Reset min/max from data bounds; a degenerate range is opened up by one unit.
    pub fn fit(&mut self, min: f64, max: f64) {
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        self.min = min;
        self.max = if (max - min).abs() < 1e-9 { min + 1.0 } else { max };
    }
}
