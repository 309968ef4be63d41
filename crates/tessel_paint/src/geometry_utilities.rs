//! Angle and distance helpers used by CSS path operations

use tessel_core::{Point, Rect, RectEdges};

pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Normalize an angle in degrees into `[0, 360)`
pub fn to_positive_angle(degrees: f32) -> f32 {
    let angle = degrees % 360.0;
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Absolute distance from `point` to each side of `rect`
pub fn distance_of_point_to_sides_of_rect(rect: &Rect, point: Point) -> RectEdges<f32> {
    RectEdges {
        top: (point.y - rect.y()).abs(),
        right: (point.x - rect.max_x()).abs(),
        bottom: (point.y - rect.max_y()).abs(),
        left: (point.x - rect.x()).abs(),
    }
}

/// Length of a ray cast from `origin` at `angle_degrees` until it leaves `rect`
///
/// Angles follow CSS: 0 points up and positive angles turn clockwise. A ray
/// starting outside the rect has no intersection length.
pub fn length_of_ray_intersection_with_bounding_box(
    rect: &Rect,
    origin: Point,
    angle_degrees: f32,
) -> f32 {
    if !rect.contains(origin) {
        return 0.0;
    }

    let radians = deg_to_rad(to_positive_angle(angle_degrees) - 90.0);
    let dx = radians.cos();
    let dy = radians.sin();

    let exit_x = axis_exit(origin.x, dx, rect.x(), rect.max_x());
    let exit_y = axis_exit(origin.y, dy, rect.y(), rect.max_y());

    match (exit_x, exit_y) {
        (Some(tx), Some(ty)) => tx.min(ty),
        (Some(t), None) | (None, Some(t)) => t,
        (None, None) => 0.0,
    }
}

fn axis_exit(position: f32, direction: f32, min: f32, max: f32) -> Option<f32> {
    if direction.abs() <= f32::EPSILON {
        None
    } else if direction > 0.0 {
        Some((max - position) / direction)
    } else {
        Some((min - position) / direction)
    }
}
