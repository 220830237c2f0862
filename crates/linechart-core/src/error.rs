// File: crates/linechart-core/src/error.rs
// Summary: Typed errors for geometry resolution, configuration and rasterization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Fewer than two points: tick gaps divide by `count - 1`.
    #[error("insufficient data: need at least 2 points, got {count}")]
    InsufficientData { count: usize },

    #[error("invalid value {value} at index {index}: values must be finite and non-negative")]
    InvalidValue { index: usize, value: f64 },

    /// Every value is zero, so the value axis has no extent.
    #[error("insufficient data: maximum value is zero")]
    ZeroRange,

    #[error("degenerate layout: usable width {usable_width}px, axis height {axis_height}px")]
    DegenerateLayout { usable_width: f32, axis_height: f32 },

    #[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("failed to create raster surface: {0}")]
    Surface(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
