//! Clipping items

use serde::{Deserialize, Serialize};
use tessel_core::{Rect, RenderingResourceId};
use tessel_paint::{Path, WindRule};

use crate::apply::{ApplyItem, ApplyWithResource};
use crate::dump::DumpProperties;
use crate::resources::ImageBuffer;
use crate::surface::DrawingSurface;
use crate::text_stream::PropertySink;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    rect: Rect,
}

impl Clip {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for Clip {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clip(self.rect);
    }
}

impl DumpProperties for Clip {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipOut {
    rect: Rect,
}

impl ClipOut {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for ClipOut {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clip_out(self.rect);
    }
}

impl DumpProperties for ClipOut {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}

/// Clip to the alpha of an image buffer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipToImageBuffer {
    image_buffer_identifier: RenderingResourceId,
    destination_rect: Rect,
}

impl ClipToImageBuffer {
    pub fn new(image_buffer_identifier: RenderingResourceId, destination_rect: Rect) -> Self {
        Self {
            image_buffer_identifier,
            destination_rect,
        }
    }

    pub fn image_buffer_identifier(&self) -> RenderingResourceId {
        self.image_buffer_identifier
    }

    pub fn destination_rect(&self) -> Rect {
        self.destination_rect
    }
}

impl ApplyWithResource for ClipToImageBuffer {
    type Resource<'r> = &'r ImageBuffer;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, image_buffer: Self::Resource<'_>) {
        surface.clip_to_image_buffer(image_buffer, self.destination_rect);
    }
}

impl DumpProperties for ClipToImageBuffer {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("image-buffer-identifier", &self.image_buffer_identifier);
        sink.dump_property("dest-rect", &self.destination_rect);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipOutToPath {
    path: Path,
}

impl ClipOutToPath {
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplyItem for ClipOutToPath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clip_out_to_path(&self.path);
    }
}

impl DumpProperties for ClipOutToPath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipPath {
    path: Path,
    wind_rule: WindRule,
}

impl ClipPath {
    pub fn new(path: Path, wind_rule: WindRule) -> Self {
        Self { path, wind_rule }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn wind_rule(&self) -> WindRule {
        self.wind_rule
    }
}

impl ApplyItem for ClipPath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.clip_path(&self.path, self.wind_rule);
    }
}

impl DumpProperties for ClipPath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
        sink.dump_property("wind-rule", &self.wind_rule);
    }
}
