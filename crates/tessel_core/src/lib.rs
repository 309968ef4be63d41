//! Tessel Core
//!
//! Foundational value types shared by every Tessel crate:
//!
//! - **Geometry**: points, sizes, rects and affine transforms
//! - **Color**: RGBA colors plus compositing and blend modes
//! - **Resources**: stable identifiers for images, fonts and media
//!
//! Everything here is plain data: `Copy` where it can be, and serializable so
//! recorded drawing commands can cross thread or process boundaries.

pub mod color;
pub mod geometry;
pub mod resource;

pub use color::{BlendMode, Color, CompositeOperator};
pub use geometry::{AffineTransform, Point, Rect, RectEdges, Size};
pub use resource::{OptionalResourceId, RenderingResourceId};
