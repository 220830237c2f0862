// File: crates/linechart-core/src/geometry.rs
// Summary: Geometry resolver: data + layout + viewport width to pixel coordinates.

use log::debug;

use crate::axis::{AxisSegment, XTick, YTick};
use crate::config::LayoutConfig;
use crate::error::{ChartError, Result};
use crate::grid::{linspace, tick_gap};
use crate::path::PathDescription;
use crate::scale::ValueScale;
use crate::types::{DataPoint, Point};

/// Pixel layout for one (data, config, viewport) triple. Read-only; derive a
/// new one whenever any input changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGeometry {
    pub viewport_width: f32,
    pub x_axis: AxisSegment,
    /// Starts at the bottom (origin) and ends at the top.
    pub y_axis: AxisSegment,
    pub x_tick_gap: f32,
    pub y_tick_gap: f32,
    pub value_max: f64,
    pub value_step: f64,
    pub scale: ValueScale,
    /// `value_step * i` for each index; first is 0, last is `value_max`.
    pub y_labels: Vec<f64>,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
    pub points: Vec<Point>,
    pub path: PathDescription,
}

impl ResolvedGeometry {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Largest y-axis label, the value mapped to the top padding line.
    pub fn max_label(&self) -> Option<f64> {
        self.y_labels.last().copied()
    }
}

/// Resolve pixel geometry for `data` laid out in a `viewport_width` wide
/// container described by `config`.
///
/// Rejects fewer than two points, negative or non-finite values, an all-zero
/// series, and layouts that leave no room for the axes.
pub fn resolve(data: &[DataPoint], config: &LayoutConfig, viewport_width: f32) -> Result<ResolvedGeometry> {
    let n = data.len();
    if n < 2 {
        return Err(ChartError::InsufficientData { count: n });
    }
    if let Some((index, p)) = data.iter().enumerate().find(|(_, p)| !p.value.is_finite() || p.value < 0.0) {
        return Err(ChartError::InvalidValue { index, value: p.value });
    }

    let value_min = 0.0f64;
    let value_max = data.iter().map(|p| p.value).fold(value_min, f64::max);
    if value_max <= value_min {
        return Err(ChartError::ZeroRange);
    }

    let left = config.margin_left;
    let right = viewport_width - config.screen_padding;
    let top = config.screen_padding;
    let bottom = config.container_height - config.margin_bottom;
    let usable_width = right - left;
    let axis_height = bottom - top;
    if !(usable_width > 0.0 && axis_height > 0.0) {
        return Err(ChartError::DegenerateLayout { usable_width, axis_height });
    }

    let x_axis = AxisSegment::horizontal(Point::new(left, bottom), Point::new(right, bottom));
    let y_axis = AxisSegment::vertical(Point::new(left, bottom), Point::new(left, top));

    let x_tick_gap = tick_gap(usable_width, n);
    let y_tick_gap = tick_gap(axis_height, n);
    let value_step = (value_max - value_min) / (n - 1) as f64;

    let y_labels = linspace(value_min, value_max, n);
    let max_label = y_labels[n - 1];
    let scale = ValueScale::from_steps(top, max_label, y_tick_gap, value_step);

    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(left + x_tick_gap * i as f32, scale.to_px(p.value)))
        .collect();

    let x_ticks = data
        .iter()
        .zip(&points)
        .map(|(p, pt)| XTick { x: pt.x, label: p.label.clone() })
        .collect();
    let y_ticks = y_labels
        .iter()
        .enumerate()
        .map(|(i, &value)| YTick { y: bottom - y_tick_gap * i as f32, value })
        .collect();

    let path = PathDescription::through(&points);
    debug!(
        "resolved geometry: {n} points, width {viewport_width}px, max {value_max}, x gap {x_tick_gap:.2}px, y gap {y_tick_gap:.2}px"
    );

    Ok(ResolvedGeometry {
        viewport_width,
        x_axis,
        y_axis,
        x_tick_gap,
        y_tick_gap,
        value_max,
        value_step,
        scale,
        y_labels,
        x_ticks,
        y_ticks,
        points,
        path,
    })
}
