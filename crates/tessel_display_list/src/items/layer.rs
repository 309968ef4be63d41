//! Transparency layers, patterns and device scale

use serde::{Deserialize, Serialize};
use tessel_core::Rect;

use crate::apply::ApplyItem;
use crate::dump::DumpProperties;
use crate::surface::DrawingSurface;
use crate::text_stream::PropertySink;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClearRect {
    rect: Rect,
}

impl ClearRect {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for ClearRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clear_rect(self.rect);
    }
}

impl DumpProperties for ClearRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeginTransparencyLayer {
    opacity: f32,
}

impl BeginTransparencyLayer {
    pub fn new(opacity: f32) -> Self {
        Self { opacity }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl ApplyItem for BeginTransparencyLayer {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.begin_transparency_layer(self.opacity);
    }
}

impl DumpProperties for BeginTransparencyLayer {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("opacity", &self.opacity);
    }
}

/// Close the innermost transparency layer
///
/// Does nothing when no layer is open on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndTransparencyLayer;

impl ApplyItem for EndTransparencyLayer {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        if surface.is_in_transparency_layer() {
            surface.end_transparency_layer();
        }
    }
}

impl DumpProperties for EndTransparencyLayer {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyStrokePattern;

impl ApplyItem for ApplyStrokePattern {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.apply_stroke_pattern();
    }
}

impl DumpProperties for ApplyStrokePattern {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyFillPattern;

impl ApplyItem for ApplyFillPattern {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.apply_fill_pattern();
    }
}

impl DumpProperties for ApplyFillPattern {
    fn dump_properties(&self, _sink: &mut dyn PropertySink) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyDeviceScaleFactor {
    scale_factor: f32,
}

impl ApplyDeviceScaleFactor {
    pub fn new(scale_factor: f32) -> Self {
        Self { scale_factor }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }
}

impl ApplyItem for ApplyDeviceScaleFactor {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.apply_device_scale_factor(self.scale_factor);
    }
}

impl DumpProperties for ApplyDeviceScaleFactor {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("scale-factor", &self.scale_factor);
    }
}
