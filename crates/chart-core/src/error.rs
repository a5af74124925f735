// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible parts of the crate (output pipeline, style loading).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid style JSON: {0}")]
    StyleJson(#[from] serde_json::Error),
    #[error("invalid colour '{0}', expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
