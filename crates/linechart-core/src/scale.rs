// File: crates/linechart-core/src/scale.rs
// Summary: Value (Y) scale mapping data values onto the vertical axis.

/// Maps a value onto a pixel row: `(max - value) * px_per_unit + top_px`.
/// Zero sits on the x-axis, `max` on the top padding line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub max: f64,
    /// Pixels per unit value: y tick gap over value step.
    pub px_per_unit: f64,
}

impl ValueScale {
    /// Build from the per-index pixel gap and value step. Both must be positive.
    pub fn from_steps(top_px: f32, max: f64, tick_gap_px: f32, value_step: f64) -> Self {
        Self { top_px, max, px_per_unit: tick_gap_px as f64 / value_step }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f32 {
        ((self.max - value) * self.px_per_unit) as f32 + self.top_px
    }
}
