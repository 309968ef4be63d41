//! Stroke items
//!
//! Stroke bounds grow the geometry's width and height by the stroke
//! thickness of the surface they are measured against. The origin is left
//! in place, so strokes extending up or left of the geometry are not
//! covered.

use serde::{Deserialize, Serialize};
use tessel_core::{Point, Rect};
use tessel_paint::{ArcData, BezierCurveData, LineData, Path, QuadCurveData};

use crate::apply::ApplyItem;
use crate::bounds::LocalBounds;
use crate::dump::DumpProperties;
use crate::surface::DrawingSurface;
use crate::text_stream::PropertySink;

fn stroked(rect: Rect, surface: &dyn DrawingSurface) -> Rect {
    let thickness = surface.stroke_thickness();
    rect.expanded(thickness, thickness)
}

/// Stroke a rect with an explicit line width
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeRect {
    rect: Rect,
    line_width: f32,
}

impl StrokeRect {
    pub fn new(rect: Rect, line_width: f32) -> Self {
        Self { rect, line_width }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }
}

impl ApplyItem for StrokeRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_rect(self.rect, self.line_width);
    }
}

impl LocalBounds for StrokeRect {
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        self.rect.expanded(self.line_width, self.line_width)
    }
}

impl DumpProperties for StrokeRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("line-width", &self.line_width);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeLine {
    start: Point,
    end: Point,
}

impl StrokeLine {
    pub fn new(line: LineData) -> Self {
        Self {
            start: line.start,
            end: line.end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn path(&self) -> Path {
        Path::from_line(&LineData {
            start: self.start,
            end: self.end,
        })
    }
}

impl ApplyItem for StrokeLine {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_path(&self.path());
    }
}

impl LocalBounds for StrokeLine {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        let mut bounds = Rect::ZERO;
        bounds.fit_to_points(self.start, self.end);
        stroked(bounds, surface)
    }
}

impl DumpProperties for StrokeLine {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("start", &self.start);
        sink.dump_property("end", &self.end);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeArc {
    arc: ArcData,
}

impl StrokeArc {
    pub fn new(arc: ArcData) -> Self {
        Self { arc }
    }

    pub fn arc(&self) -> &ArcData {
        &self.arc
    }

    pub fn path(&self) -> Path {
        Path::from_arc(&self.arc)
    }
}

impl ApplyItem for StrokeArc {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_path(&self.path());
    }
}

impl LocalBounds for StrokeArc {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        stroked(self.path().fast_bounding_rect(), surface)
    }
}

impl DumpProperties for StrokeArc {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeQuadCurve {
    curve: QuadCurveData,
}

impl StrokeQuadCurve {
    pub fn new(curve: QuadCurveData) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &QuadCurveData {
        &self.curve
    }

    pub fn path(&self) -> Path {
        Path::from_quad_curve(&self.curve)
    }
}

impl ApplyItem for StrokeQuadCurve {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_path(&self.path());
    }
}

impl LocalBounds for StrokeQuadCurve {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        stroked(self.path().fast_bounding_rect(), surface)
    }
}

impl DumpProperties for StrokeQuadCurve {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeBezierCurve {
    curve: BezierCurveData,
}

impl StrokeBezierCurve {
    pub fn new(curve: BezierCurveData) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &BezierCurveData {
        &self.curve
    }

    pub fn path(&self) -> Path {
        Path::from_bezier_curve(&self.curve)
    }
}

impl ApplyItem for StrokeBezierCurve {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_path(&self.path());
    }
}

impl LocalBounds for StrokeBezierCurve {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        stroked(self.path().fast_bounding_rect(), surface)
    }
}

impl DumpProperties for StrokeBezierCurve {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePath {
    path: Path,
}

impl StrokePath {
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplyItem for StrokePath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_path(&self.path);
    }
}

impl LocalBounds for StrokePath {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        stroked(self.path.fast_bounding_rect(), surface)
    }
}

impl DumpProperties for StrokePath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeEllipse {
    rect: Rect,
}

impl StrokeEllipse {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for StrokeEllipse {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_ellipse(self.rect);
    }
}

impl LocalBounds for StrokeEllipse {
    fn local_bounds(&self, surface: &dyn DrawingSurface) -> Rect {
        stroked(self.rect, surface)
    }
}

impl DumpProperties for StrokeEllipse {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}
