// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the geometry resolver, animation driver and renderer.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod render;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{AnimationDriver, AnimationState, Channel, RevealTargets, Transition};
pub use chart::LineChart;
pub use config::LayoutConfig;
pub use easing::Easing;
pub use error::ChartError;
pub use geometry::{resolve, ResolvedGeometry};
pub use path::{PathCommand, PathDescription};
pub use render::{Frame, RenderEvent, RenderOptions, SkiaRenderer};
pub use scene::{compose, Layer, Primitive, Scene};
pub use theme::HexColor;
pub use types::{DataPoint, Point};
