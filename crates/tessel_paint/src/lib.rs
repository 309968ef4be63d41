//! Tessel Paint
//!
//! Vector drawing vocabulary shared by recorders and drawing surfaces.
//!
//! # Features
//!
//! - Paths (lines, quadratic and cubic curves, arcs) with cheap bounds
//! - Inline path data for single-segment fills and strokes
//! - Gradients, rounded rects and stroke style enums
//! - CSS path operations, including `ray()` length resolution

pub mod geometry_utilities;
pub mod gradient;
pub mod path;
pub mod path_operation;
pub mod primitives;
pub mod stroke;

pub use gradient::{Gradient, GradientStop};
pub use path::{ArcData, BezierCurveData, LineData, Path, PathBuilder, PathCommand, QuadCurveData};
pub use path_operation::{PathOperation, RayPathOperation, RaySize, ReferenceBox};
pub use primitives::{CornerRadius, RoundedRect};
pub use stroke::{DashArray, LineCap, LineJoin, StrokeStyle, WindRule};
