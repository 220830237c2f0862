// File: crates/linechart-core/src/config.rs
// Summary: Layout configuration with per-field defaults; any subset may be overridden.

use serde::{Deserialize, Serialize};

use crate::theme::HexColor;

/// Visual and spacing options for one chart. Missing fields in a serialized
/// config fall back to [`LayoutConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub container_height: f32,
    /// Distance from the left edge to the y-axis.
    pub margin_left: f32,
    /// Distance from the bottom edge to the x-axis.
    pub margin_bottom: f32,
    /// Gap kept to the right and top screen borders.
    pub screen_padding: f32,
    pub marker_radius: f32,
    pub marker_color: HexColor,
    pub axis_color: HexColor,
    pub axis_width: f32,
    pub axis_label_font_size: f32,
    pub line_color: HexColor,
    pub line_width: f32,
    pub background: HexColor,
    pub tick_length: f32,
    pub x_label_offset: f32,
    pub y_label_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_height: 400.0,
            margin_left: 50.0,
            margin_bottom: 50.0,
            screen_padding: 20.0,
            marker_radius: 4.0,
            marker_color: HexColor::rgb(0xd9, 0xd0, 0x50),
            axis_color: HexColor::rgb(0x66, 0xdd, 0xaa),
            axis_width: 2.0,
            axis_label_font_size: 10.0,
            line_color: HexColor::rgb(0xd9, 0xd0, 0x50),
            line_width: 2.0,
            background: HexColor::rgb(0x33, 0x33, 0x33),
            tick_length: 10.0,
            x_label_offset: 25.0,
            y_label_offset: 20.0,
        }
    }
}
