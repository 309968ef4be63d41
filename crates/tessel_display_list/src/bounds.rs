//! Item bounds
//!
//! Local bounds are in the item's own coordinate space and only exist for
//! items whose extent can be read off their payload (plus the surface's
//! stroke thickness for strokes).

use tessel_core::Rect;

use crate::items::Item;
use crate::surface::DrawingSurface;

/// Outline width of platform focus rings
pub const FOCUS_RING_WIDTH: f32 = 3.0;

/// Item with computable local bounds
pub trait LocalBounds {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect;
}

impl Item {
    /// Bounds in the item's coordinate space, when they can be computed
    pub fn local_bounds(&self, surface: &dyn DrawingSurface) -> Option<Rect> {
        let bounds = match self {
            Item::DrawLine(item) => item.local_bounds(surface),
            Item::DrawLinesForText(item) => item.local_bounds(surface),
            Item::DrawDotsForDocumentMarker(item) => item.local_bounds(surface),
            Item::DrawFocusRingPath(item) => item.local_bounds(surface),
            Item::DrawFocusRingRects(item) => item.local_bounds(surface),
            Item::StrokeRect(item) => item.local_bounds(surface),
            Item::StrokeLine(item) => item.local_bounds(surface),
            Item::StrokeArc(item) => item.local_bounds(surface),
            Item::StrokeQuadCurve(item) => item.local_bounds(surface),
            Item::StrokeBezierCurve(item) => item.local_bounds(surface),
            Item::StrokePath(item) => item.local_bounds(surface),
            Item::StrokeEllipse(item) => item.local_bounds(surface),
            _ => return None,
        };
        Some(bounds)
    }

    /// Bounds precomputed when the item was recorded
    pub fn global_bounds(&self) -> Option<Rect> {
        match self {
            Item::DrawGlyphs(item) => Some(item.bounds()),
            _ => None,
        }
    }
}
