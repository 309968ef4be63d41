//! Geometric primitives built on top of `Rect`

use std::fmt;

use serde::{Deserialize, Serialize};
use tessel_core::Rect;

/// Corner radius for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius::uniform(0.0);

    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// A rounded rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundedRect {
    pub fn new(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        Self {
            rect,
            corner_radius: corner_radius.into(),
        }
    }

    pub fn is_rounded(&self) -> bool {
        !self.corner_radius.is_zero()
    }
}

impl fmt::Display for RoundedRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.corner_radius;
        write!(
            f,
            "{} radii ({} {} {} {})",
            self.rect, r.top_left, r.top_right, r.bottom_right, r.bottom_left
        )
    }
}
