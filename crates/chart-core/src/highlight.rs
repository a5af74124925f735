// File: crates/chart-core/src/highlight.rs
// Summary: Highlight requests (selected x-position on one or all datasets).

/// Which datasets a highlight applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSetSelector {
    All,
    Index(usize),
}

impl DataSetSelector {
    /// Half-open dataset index range covered, given `count` datasets.
    pub fn range(&self, count: usize) -> std::ops::Range<usize> {
        match *self {
            DataSetSelector::All => 0..count,
            DataSetSelector::Index(i) => i..i.saturating_add(1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub x: f64,
    pub data_set: DataSetSelector,
}

impl Highlight {
    pub const fn new(x: f64, data_set: DataSetSelector) -> Self {
        Self { x, data_set }
    }

    pub const fn all(x: f64) -> Self {
        Self::new(x, DataSetSelector::All)
    }
}
