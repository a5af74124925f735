// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports datasets, aggregation, the candlestick renderer and PNG rendering.

pub mod animator;
pub mod axis;
pub mod bar;
pub mod candle;
pub mod chart;
pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod format;
pub mod geometry;
pub mod highlight;
pub mod renderer;
pub mod skia_context;
pub mod text;
pub mod theme;
pub mod transform;
pub mod viewport;

pub use animator::Animator;
pub use axis::{Axis, AxisDependency};
pub use bar::{BarDataSet, BarStats};
pub use candle::{CandleData, CandleDataSet, CandleStyle, HighlightStyle, LineDash, Trend};
pub use chart::{CandleStickChart, RenderOptions};
pub use config::CandleStyleConfig;
pub use context::{DrawContext, DrawOp, RecordingContext, TextAlign};
pub use entry::{BarEntry, CandleEntry, ChartEntry, Rounding};
pub use error::{ChartError, Result};
pub use format::{DecimalFormatter, ValueFormatter};
pub use geometry::{Point, Rect};
pub use highlight::{DataSetSelector, Highlight};
pub use renderer::{CandleDataProvider, CandleStickRenderer, DataRenderer};
pub use skia_context::SkiaContext;
pub use text::TextShaper;
pub use theme::Theme;
pub use transform::Transformer;
pub use viewport::{Insets, ViewPortHandler};
