// File: crates/linechart-core/src/path.rs
// Summary: Move/line path description through the data points.

use std::fmt;

use skia_safe as skia;

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

/// Polyline path: one move-to followed by a line-to per remaining point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    pub fn through(points: &[Point]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, &p)| if i == 0 { PathCommand::MoveTo(p) } else { PathCommand::LineTo(p) })
            .collect();
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sum of segment lengths. Backends measure the drawn path themselves;
    /// this is the analytic value for straight segments.
    pub fn polyline_length(&self) -> f32 {
        self.commands
            .windows(2)
            .map(|w| w[0].point().distance(w[1].point()))
            .sum()
    }

    pub fn to_skia(&self) -> skia::Path {
        let mut path = skia::Path::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => { path.move_to(p); }
                PathCommand::LineTo(p) => { path.line_to(p); }
            }
        }
        path
    }
}

/// SVG path data, e.g. `M50 330L195 180L340 20`.
impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
            }
        }
        Ok(())
    }
}
