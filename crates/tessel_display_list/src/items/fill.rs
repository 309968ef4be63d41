//! Fill items

use serde::{Deserialize, Serialize};
use tessel_core::{BlendMode, Color, CompositeOperator, Rect};
use tessel_paint::{ArcData, BezierCurveData, Gradient, LineData, Path, QuadCurveData, RoundedRect};

use crate::apply::ApplyItem;
use crate::dump::DumpProperties;
use crate::surface::DrawingSurface;
use crate::text_stream::PropertySink;

/// Fill with the current fill color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRect {
    rect: Rect,
}

impl FillRect {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for FillRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_rect(self.rect);
    }
}

impl DumpProperties for FillRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRectWithColor {
    rect: Rect,
    color: Color,
}

impl FillRectWithColor {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for FillRectWithColor {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_rect_with_color(self.rect, self.color);
    }
}

impl DumpProperties for FillRectWithColor {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("color", &self.color);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRectWithGradient {
    rect: Rect,
    gradient: Gradient,
}

impl FillRectWithGradient {
    pub fn new(rect: Rect, gradient: Gradient) -> Self {
        Self { rect, gradient }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

impl ApplyItem for FillRectWithGradient {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_rect_with_gradient(self.rect, &self.gradient);
    }
}

impl DumpProperties for FillRectWithGradient {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("gradient", &self.gradient);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillCompositedRect {
    rect: Rect,
    color: Color,
    op: CompositeOperator,
    blend_mode: BlendMode,
}

impl FillCompositedRect {
    pub fn new(rect: Rect, color: Color, op: CompositeOperator, blend_mode: BlendMode) -> Self {
        Self {
            rect,
            color,
            op,
            blend_mode,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn composite_operator(&self) -> CompositeOperator {
        self.op
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
}

impl ApplyItem for FillCompositedRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_composited_rect(self.rect, self.color, self.op, self.blend_mode);
    }
}

impl DumpProperties for FillCompositedRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("color", &self.color);
        sink.dump_property("composite-operation", &self.op);
        sink.dump_property("blend-mode", &self.blend_mode);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRoundedRect {
    rect: RoundedRect,
    color: Color,
    blend_mode: BlendMode,
}

impl FillRoundedRect {
    pub fn new(rect: RoundedRect, color: Color, blend_mode: BlendMode) -> Self {
        Self {
            rect,
            color,
            blend_mode,
        }
    }

    pub fn rounded_rect(&self) -> &RoundedRect {
        &self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
}

impl ApplyItem for FillRoundedRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_rounded_rect(&self.rect, self.color, self.blend_mode);
    }
}

impl DumpProperties for FillRoundedRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("color", &self.color);
        sink.dump_property("blend-mode", &self.blend_mode);
    }
}

/// Fill a rect except for a rounded hole in it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRectWithRoundedHole {
    rect: Rect,
    rounded_hole_rect: RoundedRect,
    color: Color,
}

impl FillRectWithRoundedHole {
    pub fn new(rect: Rect, rounded_hole_rect: RoundedRect, color: Color) -> Self {
        Self {
            rect,
            rounded_hole_rect,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn rounded_hole_rect(&self) -> &RoundedRect {
        &self.rounded_hole_rect
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for FillRectWithRoundedHole {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_rect_with_rounded_hole(self.rect, &self.rounded_hole_rect, self.color);
    }
}

impl DumpProperties for FillRectWithRoundedHole {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("rounded-hole-rect", &self.rounded_hole_rect);
        sink.dump_property("color", &self.color);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-segment paths
//
// Simple paths are stored as their inline data and only turned into a
// `Path` when applied or dumped.
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillLine {
    line: LineData,
}

impl FillLine {
    pub fn new(line: LineData) -> Self {
        Self { line }
    }

    pub fn line(&self) -> &LineData {
        &self.line
    }

    pub fn path(&self) -> Path {
        Path::from_line(&self.line)
    }
}

impl ApplyItem for FillLine {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_path(&self.path());
    }
}

impl DumpProperties for FillLine {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillArc {
    arc: ArcData,
}

impl FillArc {
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

impl ApplyItem for FillArc {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_path(&self.path());
    }
}

impl DumpProperties for FillArc {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillQuadCurve {
    curve: QuadCurveData,
}

impl FillQuadCurve {
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

impl ApplyItem for FillQuadCurve {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_path(&self.path());
    }
}

impl DumpProperties for FillQuadCurve {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillBezierCurve {
    curve: BezierCurveData,
}

impl FillBezierCurve {
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

impl ApplyItem for FillBezierCurve {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_path(&self.path());
    }
}

impl DumpProperties for FillBezierCurve {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path());
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillPath {
    path: Path,
}

impl FillPath {
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplyItem for FillPath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_path(&self.path);
    }
}

impl DumpProperties for FillPath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillEllipse {
    rect: Rect,
}

impl FillEllipse {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for FillEllipse {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_ellipse(self.rect);
    }
}

impl DumpProperties for FillEllipse {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}
