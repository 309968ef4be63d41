//! Geometry primitives shared by the paint and display list crates
//!
//! All coordinates are `f32` in the local coordinate space of whatever
//! drawing surface consumes them. `Rect` follows the conventions of a 2D
//! drawing context: an empty rect (zero or negative extent) is ignored when
//! uniting, and `inflate`/`expand` grow the rect rather than validating it.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Points and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move the point by a size delta
    pub fn move_by(&mut self, delta: Size) {
        self.x += delta.width;
        self.y += delta.height;
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub for Point {
    type Output = Size;

    fn sub(self, rhs: Point) -> Size {
        Size::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={} height={}", self.width, self.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rectangles
// ─────────────────────────────────────────────────────────────────────────────

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Smallest rect spanning both points
    pub fn from_points(p0: Point, p1: Point) -> Self {
        let mut rect = Rect::ZERO;
        rect.fit_to_points(p0, p1);
        rect
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// True when the rect has no area
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// True when origin and size are both zero
    pub fn is_zero(&self) -> bool {
        self.origin == Point::ZERO && self.size.is_zero()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Grow this rect to also cover `other`
    ///
    /// Empty rects do not contribute: uniting with an empty rect is a no-op,
    /// and uniting an empty rect with a non-empty one yields the latter.
    pub fn unite(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        self.unite_even_if_empty(other);
    }

    /// Union that also takes degenerate rects into account
    pub fn unite_even_if_empty(&mut self, other: &Rect) {
        let min_x = self.x().min(other.x());
        let min_y = self.y().min(other.y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        *self = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
    }

    /// Return the union of two rects
    pub fn united(mut self, other: &Rect) -> Rect {
        self.unite(other);
        self
    }

    /// Grow by `delta` on every side
    pub fn inflate(&mut self, delta: f32) {
        self.origin.x -= delta;
        self.origin.y -= delta;
        self.size.width += 2.0 * delta;
        self.size.height += 2.0 * delta;
    }

    /// Return a copy grown by `delta` on every side
    pub fn inflated(mut self, delta: f32) -> Rect {
        self.inflate(delta);
        self
    }

    /// Grow the size only; the origin stays where it is
    pub fn expand(&mut self, dw: f32, dh: f32) {
        self.size.width += dw;
        self.size.height += dh;
    }

    /// Return a copy with the size grown by `(dw, dh)`
    pub fn expanded(mut self, dw: f32, dh: f32) -> Rect {
        self.expand(dw, dh);
        self
    }

    /// Replace this rect with the smallest rect spanning both points
    pub fn fit_to_points(&mut self, p0: Point, p1: Point) {
        let x = p0.x.min(p1.x);
        let y = p0.y.min(p1.y);
        let max_x = p0.x.max(p1.x);
        let max_y = p0.y.max(p1.y);
        *self = Rect::new(x, y, max_x - x, max_y - y);
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at ({},{}) size {}x{}",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

/// Per-side values of a box, in CSS order
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectEdges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> RectEdges<T> {
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transforms
// ─────────────────────────────────────────────────────────────────────────────

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self {
            elements: [a, b, c, d, tx, ty],
        }
    }

    pub fn translation(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle` radians
    pub fn rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(a * point.x + c * point.y + tx, b * point.x + d * point.y + ty)
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &AffineTransform) -> AffineTransform {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        AffineTransform {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, tx, ty] = self.elements;
        write!(f, "{{m=(({a},{b})({c},{d})) t=({tx},{ty})}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unite_ignores_empty() {
        let mut rect = Rect::ZERO;
        rect.unite(&Rect::new(10.0, 10.0, 5.0, 5.0));
        assert_eq!(rect, Rect::new(10.0, 10.0, 5.0, 5.0));

        rect.unite(&Rect::new(100.0, 100.0, 0.0, 10.0));
        assert_eq!(rect, Rect::new(10.0, 10.0, 5.0, 5.0));

        rect.unite(&Rect::new(0.0, 12.0, 2.0, 8.0));
        assert_eq!(rect, Rect::new(0.0, 10.0, 15.0, 10.0));
    }

    #[test]
    fn test_inflate_and_expand() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.inflated(3.0), Rect::new(7.0, 17.0, 36.0, 46.0));
        // expand keeps the origin
        assert_eq!(rect.expanded(2.0, 4.0), Rect::new(10.0, 20.0, 32.0, 44.0));
    }

    #[test]
    fn test_fit_to_points() {
        let rect = Rect::from_points(Point::new(50.0, 5.0), Point::new(10.0, 25.0));
        assert_eq!(rect, Rect::new(10.0, 5.0, 40.0, 20.0));
        assert!(rect.contains(Point::new(50.0, 5.0)));
        assert!(rect.contains(Point::new(10.0, 25.0)));
    }

    #[test]
    fn test_point_plus_size() {
        let p = Point::new(1.0, 2.0) + Size::new(10.0, 20.0);
        assert_eq!(p, Point::new(11.0, 22.0));
        assert_eq!(p - Point::new(1.0, 2.0), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_transform_then() {
        let t = AffineTransform::translation(10.0, 0.0).then(&AffineTransform::scale(2.0, 2.0));
        // Scale first, then translate
        assert_eq!(t.transform_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
        assert!(AffineTransform::default().is_identity());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1,2.5)");
        assert_eq!(Rect::new(0.0, 1.0, 10.0, 20.0).to_string(), "at (0,1) size 10x20");
        assert_eq!(Size::new(3.0, 4.0).to_string(), "width=3 height=4");
    }
}
