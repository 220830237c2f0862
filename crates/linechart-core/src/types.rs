// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (data points, pixel points, default sizes).

use serde::{Deserialize, Serialize};
use skia_safe as skia;

/// Default viewport width in pixels, used when the host does not supply one.
pub const WIDTH: f32 = 360.0;

/// One sample of the series. Order in the slice is the horizontal order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub label: Option<String>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: Some(label.into()), value }
    }

    /// A point with no category label; drawn without text.
    pub fn unlabeled(value: f64) -> Self {
        Self { label: None, value }
    }
}

/// Screen-space position in pixels, y growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<Point> for skia::Point {
    fn from(p: Point) -> Self {
        skia::Point::new(p.x, p.y)
    }
}
