//! CSS path operations (`clip-path` / `offset-path` values)
//!
//! A path operation describes where a path comes from: a reference to an SVG
//! element, one of the CSS reference boxes, or a `ray()` cast from a starting
//! position inside the containing block.

use serde::{Deserialize, Serialize};
use tessel_core::{Point, Rect};

use crate::geometry_utilities::{
    deg_to_rad, distance_of_point_to_sides_of_rect, length_of_ray_intersection_with_bounding_box,
    to_positive_angle,
};
use crate::path::Path;

/// Source of a path used for clipping or motion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathOperation {
    /// `url(#fragment)` pointing at an SVG element
    Reference { url: String, fragment: String },
    /// One of the CSS reference boxes
    Box(ReferenceBox),
    /// `ray(<angle> <size> contain?)`
    Ray(RayPathOperation),
}

impl PathOperation {
    pub fn reference(url: impl Into<String>, fragment: impl Into<String>) -> Self {
        PathOperation::Reference {
            url: url.into(),
            fragment: fragment.into(),
        }
    }
}

/// CSS reference box keywords
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceBox {
    ContentBox,
    PaddingBox,
    #[default]
    BorderBox,
    MarginBox,
    FillBox,
    StrokeBox,
    ViewBox,
}

/// Size keyword of a `ray()`, picking how far the ray extends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaySize {
    ClosestSide,
    FarthestSide,
    FarthestCorner,
    #[default]
    ClosestCorner,
    Sides,
}

/// `ray()` path: a straight line from a starting position at an angle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayPathOperation {
    angle: f32,
    size: RaySize,
    is_containing: bool,
    position: Point,
    containing_block_bounding_rect: Rect,
}

impl RayPathOperation {
    /// `angle` is in degrees, 0 pointing up
    pub fn new(angle: f32, size: RaySize, is_containing: bool) -> Self {
        Self {
            angle,
            size,
            is_containing,
            position: Point::ZERO,
            containing_block_bounding_rect: Rect::ZERO,
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_containing_block(mut self, rect: Rect) -> Self {
        self.containing_block_bounding_rect = rect;
        self
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn size(&self) -> RaySize {
        self.size
    }

    pub fn is_containing(&self) -> bool {
        self.is_containing
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn containing_block_bounding_rect(&self) -> Rect {
        self.containing_block_bounding_rect
    }

    /// Length of the ray for its size keyword
    pub fn length_for_path(&self) -> f32 {
        let bounds = &self.containing_block_bounding_rect;
        let d = distance_of_point_to_sides_of_rect(bounds, self.position);

        match self.size {
            RaySize::ClosestSide => d.top.min(d.bottom).min(d.left).min(d.right),
            RaySize::FarthestSide => d.top.max(d.bottom).max(d.left).max(d.right),
            RaySize::FarthestCorner => d.left.max(d.right).hypot(d.top.max(d.bottom)),
            RaySize::ClosestCorner => d.left.min(d.right).hypot(d.top.min(d.bottom)),
            RaySize::Sides => {
                length_of_ray_intersection_with_bounding_box(bounds, self.position, self.angle)
            }
        }
    }

    /// The ray as a path starting at the origin
    ///
    /// Empty when there is no containing block to measure against.
    pub fn path_for_reference_rect(&self) -> Path {
        let mut path = Path::new();
        if self.containing_block_bounding_rect.is_zero() {
            return path;
        }
        let length = self.length_for_path();
        let radians = deg_to_rad(to_positive_angle(self.angle) - 90.0);
        path.add_line_to(Point::new(radians.cos() * length, radians.sin() * length));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    // Distances to sides: top 10, right 7, bottom 5, left 3.
    fn ray(size: RaySize) -> RayPathOperation {
        RayPathOperation::new(0.0, size, false)
            .with_containing_block(Rect::new(0.0, 0.0, 10.0, 15.0))
            .with_position(Point::new(3.0, 10.0))
    }

    #[test]
    fn test_side_lengths() {
        assert_eq!(ray(RaySize::ClosestSide).length_for_path(), 3.0);
        assert_eq!(ray(RaySize::FarthestSide).length_for_path(), 10.0);
    }

    #[test]
    fn test_corner_lengths() {
        let farthest = ray(RaySize::FarthestCorner).length_for_path();
        assert!((farthest - (7.0f32 * 7.0 + 10.0 * 10.0).sqrt()).abs() < 1e-5);

        let closest = ray(RaySize::ClosestCorner).length_for_path();
        assert!((closest - (3.0f32 * 3.0 + 5.0 * 5.0).sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_sides_length_follows_angle() {
        // Straight up from y = 10 reaches the top edge after 10 units
        assert!((ray(RaySize::Sides).length_for_path() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_path_for_zero_rect_is_empty() {
        let op = RayPathOperation::new(45.0, RaySize::FarthestSide, false);
        assert!(op.path_for_reference_rect().is_empty());
    }

    #[test]
    fn test_path_points_along_angle() {
        let path = ray(RaySize::FarthestSide).path_for_reference_rect();
        assert_eq!(path.len(), 2);
        match path.commands()[1] {
            PathCommand::LineTo(p) => {
                assert!(p.x.abs() < 1e-4);
                assert!((p.y + 10.0).abs() < 1e-4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
