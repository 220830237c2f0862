// File: crates/linechart-core/src/axis.rs
// Summary: Axis segments and tick marks in pixel space.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight axis line. `start` is the fixed origin end (left for the
/// x-axis, bottom for the y-axis); `end` is where the reveal finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSegment {
    pub start: Point,
    pub end: Point,
    pub orientation: Orientation,
}

impl AxisSegment {
    pub const fn horizontal(start: Point, end: Point) -> Self {
        Self { start, end, orientation: Orientation::Horizontal }
    }

    pub const fn vertical(start: Point, end: Point) -> Self {
        Self { start, end, orientation: Orientation::Vertical }
    }

    /// The coordinate an extent animation starts from.
    pub fn start_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal => self.start.x,
            Orientation::Vertical => self.start.y,
        }
    }

    /// The coordinate an extent animation ends at.
    pub fn end_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal => self.end.x,
            Orientation::Vertical => self.end.y,
        }
    }

    /// Visible part of the axis while its moving end sits at `extent`.
    pub fn revealed(&self, extent: f32) -> (Point, Point) {
        let moving = match self.orientation {
            Orientation::Horizontal => Point::new(extent, self.start.y),
            Orientation::Vertical => Point::new(self.start.x, extent),
        };
        (self.start, moving)
    }
}

/// Category tick below the x-axis.
#[derive(Clone, Debug, PartialEq)]
pub struct XTick {
    pub x: f32,
    pub label: Option<String>,
}

/// Value tick left of the y-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YTick {
    pub y: f32,
    pub value: f64,
}

impl YTick {
    /// Display text: the value rounded to the nearest integer.
    pub fn text(&self) -> String {
        format!("{}", self.value.round() as i64)
    }
}
