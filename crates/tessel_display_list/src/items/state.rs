//! State stack, transform and paint-state items

use serde::{Deserialize, Serialize};
use tessel_core::{AffineTransform, Color, Size};
use tessel_paint::{DashArray, LineCap, LineJoin};

use crate::apply::ApplyItem;
use crate::dump::DumpProperties;
use crate::graphics_state::GraphicsState;
use crate::surface::DrawingSurface;
use crate::text_stream::{ListDisplay, PropertySink};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Save;

impl ApplyItem for Save {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.save();
    }
}

impl DumpProperties for Save {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Restore;

impl ApplyItem for Restore {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.restore();
    }
}

impl DumpProperties for Restore {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    x: f32,
    y: f32,
}

impl Translate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl ApplyItem for Translate {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.translate(self.x, self.y);
    }
}

impl DumpProperties for Translate {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("x", &self.x);
        sink.dump_property("y", &self.y);
    }
}

/// Rotation in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotate {
    angle: f32,
}

impl Rotate {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl ApplyItem for Rotate {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.rotate(self.angle);
    }
}

impl DumpProperties for Rotate {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("angle", &self.angle);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    amount: Size,
}

impl Scale {
    pub fn new(amount: Size) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Size {
        self.amount
    }
}

impl ApplyItem for Scale {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.scale(self.amount);
    }
}

impl DumpProperties for Scale {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("size", &self.amount);
    }
}

/// Replace the current transform
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetCTM {
    transform: AffineTransform,
}

impl SetCTM {
    pub fn new(transform: AffineTransform) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }
}

impl ApplyItem for SetCTM {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_ctm(&self.transform);
    }
}

impl DumpProperties for SetCTM {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("set-ctm", &self.transform);
    }
}

/// Multiply the current transform
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcatenateCTM {
    transform: AffineTransform,
}

impl ConcatenateCTM {
    pub fn new(transform: AffineTransform) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }
}

impl ApplyItem for ConcatenateCTM {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.concat_ctm(&self.transform);
    }
}

impl DumpProperties for ConcatenateCTM {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("ctm", &self.transform);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetInlineFillColor {
    color: Color,
}

impl SetInlineFillColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for SetInlineFillColor {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_fill_color(self.color);
    }
}

impl DumpProperties for SetInlineFillColor {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("color", &self.color);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetInlineStrokeColor {
    color: Color,
}

impl SetInlineStrokeColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for SetInlineStrokeColor {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_stroke_color(self.color);
    }
}

impl DumpProperties for SetInlineStrokeColor {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("color", &self.color);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetStrokeThickness {
    thickness: f32,
}

impl SetStrokeThickness {
    pub fn new(thickness: f32) -> Self {
        Self { thickness }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl ApplyItem for SetStrokeThickness {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_stroke_thickness(self.thickness);
    }
}

impl DumpProperties for SetStrokeThickness {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("thickness", &self.thickness);
    }
}

/// Batched paint-state change
///
/// The only item that can change after construction: a recorder folds
/// back-to-back state changes into the previous `SetState`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SetState {
    state: GraphicsState,
}

impl SetState {
    pub fn new(state: GraphicsState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GraphicsState {
        &mut self.state
    }

    pub fn merge(&mut self, other: &GraphicsState) {
        self.state.merge(other);
    }
}

impl ApplyItem for SetState {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.update_state(&self.state);
    }
}

impl DumpProperties for SetState {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("state", &self.state);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetLineCap {
    line_cap: LineCap,
}

impl SetLineCap {
    pub fn new(line_cap: LineCap) -> Self {
        Self { line_cap }
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }
}

impl ApplyItem for SetLineCap {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_line_cap(self.line_cap);
    }
}

impl DumpProperties for SetLineCap {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("line-cap", &self.line_cap);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetLineDash {
    dash_array: DashArray,
    dash_offset: f32,
}

impl SetLineDash {
    pub fn new(dash_array: DashArray, dash_offset: f32) -> Self {
        Self {
            dash_array,
            dash_offset,
        }
    }

    pub fn dash_array(&self) -> &[f32] {
        &self.dash_array
    }

    pub fn dash_offset(&self) -> f32 {
        self.dash_offset
    }
}

impl ApplyItem for SetLineDash {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_line_dash(&self.dash_array, self.dash_offset);
    }
}

impl DumpProperties for SetLineDash {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("dash-array", &ListDisplay(&self.dash_array));
        sink.dump_property("dash-offset", &self.dash_offset);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetLineJoin {
    line_join: LineJoin,
}

impl SetLineJoin {
    pub fn new(line_join: LineJoin) -> Self {
        Self { line_join }
    }

    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }
}

impl ApplyItem for SetLineJoin {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_line_join(self.line_join);
    }
}

impl DumpProperties for SetLineJoin {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("line-join", &self.line_join);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetMiterLimit {
    miter_limit: f32,
}

impl SetMiterLimit {
    pub fn new(miter_limit: f32) -> Self {
        Self { miter_limit }
    }

    pub fn miter_limit(&self) -> f32 {
        self.miter_limit
    }
}

impl ApplyItem for SetMiterLimit {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.set_miter_limit(self.miter_limit);
    }
}

impl DumpProperties for SetMiterLimit {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("mitre-limit", &self.miter_limit);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearShadow;

impl ApplyItem for ClearShadow {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clear_shadow();
    }
}

impl DumpProperties for ClearShadow {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}
