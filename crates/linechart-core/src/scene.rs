// File: crates/linechart-core/src/scene.rs
// Summary: Scene composition: geometry + animated values into ordered drawing primitives.

use crate::animation::AnimationState;
use crate::config::LayoutConfig;
use crate::geometry::ResolvedGeometry;
use crate::path::PathDescription;
use crate::theme::HexColor;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Stroke dash pattern: `interval` on, `interval` off, shifted by `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub interval: f32,
    pub offset: f32,
}

/// Which part of the chart a primitive belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Axes,
    XTicks,
    YTicks,
    Line,
    Markers,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        color: HexColor,
        width: f32,
        opacity: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: HexColor,
    },
    Text {
        origin: Point,
        text: String,
        size: f32,
        anchor: TextAnchor,
        color: HexColor,
        opacity: f32,
    },
    Path {
        path: PathDescription,
        color: HexColor,
        width: f32,
        dash: Option<Dash>,
        opacity: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: HexColor,
    /// Primitives in paint order, tagged with their layer.
    pub items: Vec<(Layer, Primitive)>,
}

impl Scene {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(move |(l, _)| *l == layer).map(|(_, p)| p)
    }

    /// The connecting line, if the scene has one.
    pub fn line_path(&self) -> Option<&PathDescription> {
        self.layer(Layer::Line).find_map(|p| match p {
            Primitive::Path { path, .. } => Some(path),
            _ => None,
        })
    }
}

/// Compose one frame. Layers are painted in order: axes with endpoint
/// markers, category ticks, value ticks, the connecting line, point markers.
pub fn compose(geometry: &ResolvedGeometry, state: &AnimationState, config: &LayoutConfig) -> Scene {
    let mut items = Vec::with_capacity(8 + geometry.point_count() * 5);
    let axis = |from, to, opacity| Primitive::Line {
        from,
        to,
        color: config.axis_color,
        width: config.axis_width,
        opacity,
    };
    let marker = |center| Primitive::Circle { center, radius: state.marker_radius, color: config.marker_color };

    // (a) axes
    let x = &geometry.x_axis;
    let y = &geometry.y_axis;
    items.push((Layer::Axes, marker(x.start)));
    items.push((Layer::Axes, marker(x.end)));
    items.push((Layer::Axes, marker(y.end)));
    let (from, to) = x.revealed(state.x_axis_extent);
    items.push((Layer::Axes, axis(from, to, 1.0)));
    let (from, to) = y.revealed(state.y_axis_extent);
    items.push((Layer::Axes, axis(from, to, 1.0)));

    // (b) category ticks and labels
    let base_y = x.start.y;
    for tick in &geometry.x_ticks {
        items.push((
            Layer::XTicks,
            axis(Point::new(tick.x, base_y), Point::new(tick.x, base_y + config.tick_length), state.label_opacity),
        ));
        if let Some(label) = &tick.label {
            items.push((
                Layer::XTicks,
                Primitive::Text {
                    origin: Point::new(tick.x, base_y + config.x_label_offset),
                    text: label.clone(),
                    size: config.axis_label_font_size,
                    anchor: TextAnchor::Middle,
                    color: config.axis_color,
                    opacity: state.label_opacity,
                },
            ));
        }
    }

    // (c) value ticks and labels
    let axis_x = y.start.x;
    for tick in &geometry.y_ticks {
        items.push((
            Layer::YTicks,
            axis(Point::new(axis_x, tick.y), Point::new(axis_x - config.tick_length, tick.y), state.label_opacity),
        ));
        items.push((
            Layer::YTicks,
            Primitive::Text {
                origin: Point::new(axis_x - config.y_label_offset, tick.y + config.axis_label_font_size / 3.0),
                text: tick.text(),
                size: config.axis_label_font_size,
                anchor: TextAnchor::End,
                color: config.axis_color,
                opacity: state.label_opacity,
            },
        ));
    }

    // (d) connecting line; dashed only once its length is known
    let dash = state.path_length.map(|interval| Dash { interval, offset: state.path_dash_offset });
    items.push((
        Layer::Line,
        Primitive::Path {
            path: geometry.path.clone(),
            color: config.line_color,
            width: config.line_width,
            dash,
            opacity: state.path_opacity,
        },
    ));

    // (e) point markers
    for &p in &geometry.points {
        items.push((Layer::Markers, marker(p)));
    }

    Scene {
        width: geometry.viewport_width,
        height: config.container_height,
        background: config.background,
        items,
    }
}
