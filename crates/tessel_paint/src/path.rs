//! Path building and representation

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tessel_core::{Point, Rect};

/// Path command
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Circular arc; angles in radians
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: impl IntoIterator<Item = PathCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// A single straight segment
    pub fn from_line(line: &LineData) -> Self {
        PathBuilder::new()
            .move_to(line.start.x, line.start.y)
            .line_to(line.end.x, line.end.y)
            .build()
    }

    /// A single arc segment
    pub fn from_arc(arc: &ArcData) -> Self {
        PathBuilder::new()
            .arc(
                arc.center.x,
                arc.center.y,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                arc.clockwise,
            )
            .build()
    }

    pub fn from_quad_curve(curve: &QuadCurveData) -> Self {
        PathBuilder::new()
            .move_to(curve.start.x, curve.start.y)
            .quad_to(curve.control.x, curve.control.y, curve.end.x, curve.end.y)
            .build()
    }

    pub fn from_bezier_curve(curve: &BezierCurveData) -> Self {
        PathBuilder::new()
            .move_to(curve.start.x, curve.start.y)
            .cubic_to(
                curve.control1.x,
                curve.control1.y,
                curve.control2.x,
                curve.control2.y,
                curve.end.x,
                curve.end.y,
            )
            .build()
    }

    /// Closed rectangle path
    pub fn from_rect(rect: Rect) -> Self {
        PathBuilder::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.max_x(), rect.y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.x(), rect.max_y())
            .close()
            .build()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Append a line from the current point (the origin if there is none)
    pub fn add_line_to(&mut self, point: Point) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(Point::ZERO));
        }
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Bounding box of every point the path mentions, control points included
    ///
    /// Cheap and conservative: curves are bounded by their control polygon and
    /// arcs by the box of their full circle. An empty path yields `Rect::ZERO`.
    pub fn fast_bounding_rect(&self) -> Rect {
        let mut bounds = Bounds::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => bounds.add(p),
                PathCommand::QuadTo { control, end } => {
                    bounds.add(control);
                    bounds.add(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    bounds.add(control1);
                    bounds.add(control2);
                    bounds.add(end);
                }
                PathCommand::Arc { center, radius, .. } => {
                    let r = radius.abs();
                    bounds.add(Point::new(center.x - r, center.y - r));
                    bounds.add(Point::new(center.x + r, center.y + r));
                }
                PathCommand::Close => {}
            }
        }

        bounds.to_rect()
    }
}

#[derive(Default)]
struct Bounds {
    min: Option<Point>,
    max: Point,
}

impl Bounds {
    fn add(&mut self, p: Point) {
        match &mut self.min {
            None => {
                self.min = Some(p);
                self.max = p;
            }
            Some(min) => {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                self.max.x = self.max.x.max(p.x);
                self.max.y = self.max.y.max(p.y);
            }
        }
    }

    fn to_rect(&self) -> Rect {
        match self.min {
            Some(min) if min.x.is_finite() && min.y.is_finite() => Rect::new(
                min.x,
                min.y,
                self.max.x - min.x,
                self.max.y - min.y,
            ),
            _ => Rect::ZERO,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "move to {p}")?,
                PathCommand::LineTo(p) => write!(f, "add line to {p}")?,
                PathCommand::QuadTo { control, end } => {
                    write!(f, "add quad curve to {control} {end}")?
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => write!(f, "add curve to {control1} {control2} {end}")?,
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => write!(
                    f,
                    "add arc {center} {radius} {start_angle} {end_angle} {}",
                    if *clockwise { "clockwise" } else { "counterclockwise" }
                )?,
                PathCommand::Close => f.write_str("close subpath")?,
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline Path Data
// ─────────────────────────────────────────────────────────────────────────────

/// A straight segment stored inline instead of as a full `Path`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    pub start: Point,
    pub end: Point,
}

/// A circular arc stored inline
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcData {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub clockwise: bool,
}

/// A quadratic curve stored inline
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadCurveData {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

/// A cubic Bézier curve stored inline
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierCurveData {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
        self
    }

    pub fn arc(mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, clockwise: bool) -> Self {
        self.path.commands.push(PathCommand::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle: start,
            end_angle: end,
            clockwise,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
