//! Resources referenced by drawing items
//!
//! Items never own images, fonts or media players; they carry a
//! [`RenderingResourceId`] and the replayer looks the live resource up in a
//! [`ResourceHeap`] that was filled before replay started.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tessel_core::{Color, Rect, RenderingResourceId, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Resource descriptions
// ─────────────────────────────────────────────────────────────────────────────

/// Offscreen drawing buffer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageBuffer {
    id: RenderingResourceId,
    logical_size: Size,
    #[serde(default = "default_scale")]
    resolution_scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl ImageBuffer {
    pub fn new(id: RenderingResourceId, logical_size: Size) -> Self {
        Self {
            id,
            logical_size,
            resolution_scale: 1.0,
        }
    }

    pub fn with_resolution_scale(mut self, scale: f32) -> Self {
        self.resolution_scale = scale;
        self
    }

    pub fn id(&self) -> RenderingResourceId {
        self.id
    }

    pub fn logical_size(&self) -> Size {
        self.logical_size
    }

    pub fn resolution_scale(&self) -> f32 {
        self.resolution_scale
    }
}

/// Decoded platform image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NativeImage {
    id: RenderingResourceId,
    size: Size,
}

impl NativeImage {
    pub fn new(id: RenderingResourceId, size: Size) -> Self {
        Self { id, size }
    }

    pub fn id(&self) -> RenderingResourceId {
        self.id
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Vertical font metrics needed to approximate glyph bounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A sized font instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    id: RenderingResourceId,
    family: String,
    size: f32,
    metrics: FontMetrics,
}

impl Font {
    pub fn new(
        id: RenderingResourceId,
        family: impl Into<String>,
        size: f32,
        metrics: FontMetrics,
    ) -> Self {
        Self {
            id,
            family: family.into(),
            size,
            metrics,
        }
    }

    pub fn id(&self) -> RenderingResourceId {
        self.id
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

/// Video source whose current frame can be painted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaPlayer {
    id: RenderingResourceId,
    natural_size: Size,
}

impl MediaPlayer {
    pub fn new(id: RenderingResourceId, natural_size: Size) -> Self {
        Self { id, natural_size }
    }

    pub fn id(&self) -> RenderingResourceId {
        self.id
    }

    pub fn natural_size(&self) -> Size {
        self.natural_size
    }
}

/// Platform-drawn artwork (buttons, attachment icons)
///
/// Small enough to be carried inline by the item that draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemImage {
    name: String,
}

impl SystemImage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SystemImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Either kind of image a pattern can tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceImage<'a> {
    NativeImage(&'a NativeImage),
    ImageBuffer(&'a ImageBuffer),
}

impl<'a> SourceImage<'a> {
    pub fn id(&self) -> RenderingResourceId {
        match self {
            SourceImage::NativeImage(image) => image.id(),
            SourceImage::ImageBuffer(buffer) => buffer.id(),
        }
    }

    pub fn native_image_if_exists(&self) -> Option<&'a NativeImage> {
        match *self {
            SourceImage::NativeImage(image) => Some(image),
            SourceImage::ImageBuffer(_) => None,
        }
    }

    pub fn image_buffer_if_exists(&self) -> Option<&'a ImageBuffer> {
        match *self {
            SourceImage::ImageBuffer(buffer) => Some(buffer),
            SourceImage::NativeImage(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

/// A single CSS filter function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FilterFunction {
    Blur { std_deviation: f32 },
    DropShadow { offset: Size, std_deviation: f32, color: Color },
    Grayscale(f32),
    Sepia(f32),
    Saturate(f32),
    HueRotate(f32),
    Invert(f32),
    Opacity(f32),
    Brightness(f32),
    Contrast(f32),
}

impl fmt::Display for FilterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterFunction::Blur { std_deviation } => write!(f, "blur({std_deviation})"),
            FilterFunction::DropShadow {
                offset,
                std_deviation,
                color,
            } => write!(
                f,
                "drop-shadow({} {} {std_deviation} {color})",
                offset.width, offset.height
            ),
            FilterFunction::Grayscale(amount) => write!(f, "grayscale({amount})"),
            FilterFunction::Sepia(amount) => write!(f, "sepia({amount})"),
            FilterFunction::Saturate(amount) => write!(f, "saturate({amount})"),
            FilterFunction::HueRotate(degrees) => write!(f, "hue-rotate({degrees})"),
            FilterFunction::Invert(amount) => write!(f, "invert({amount})"),
            FilterFunction::Opacity(amount) => write!(f, "opacity({amount})"),
            FilterFunction::Brightness(amount) => write!(f, "brightness({amount})"),
            FilterFunction::Contrast(amount) => write!(f, "contrast({amount})"),
        }
    }
}

/// Chain of filter functions applied over a region
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    functions: Vec<FilterFunction>,
    region: Rect,
}

impl Filter {
    pub fn new(functions: Vec<FilterFunction>, region: Rect) -> Self {
        Self { functions, region }
    }

    pub fn functions(&self) -> &[FilterFunction] {
        &self.functions
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{function}")?;
        }
        write!(f, "] region {}", self.region)
    }
}

/// Cache of filter outputs shared across one replay
///
/// Surfaces record the output extent of each filtered source so later
/// draws of the same source can reuse it.
#[derive(Clone, Debug, Default)]
pub struct FilterResults {
    outputs: FxHashMap<RenderingResourceId, Rect>,
}

impl FilterResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_result(&mut self, source: RenderingResourceId, output: Rect) {
        self.outputs.insert(source, output);
    }

    pub fn result(&self, source: RenderingResourceId) -> Option<Rect> {
        self.outputs.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn clear(&mut self) {
        self.outputs.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource heap
// ─────────────────────────────────────────────────────────────────────────────

/// Side table mapping resource identifiers to live resources
#[derive(Clone, Debug, Default)]
pub struct ResourceHeap {
    image_buffers: FxHashMap<RenderingResourceId, ImageBuffer>,
    native_images: FxHashMap<RenderingResourceId, NativeImage>,
    fonts: FxHashMap<RenderingResourceId, Font>,
    media_players: FxHashMap<RenderingResourceId, MediaPlayer>,
}

impl ResourceHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image buffer, replacing any buffer with the same identifier
    pub fn add_image_buffer(&mut self, buffer: ImageBuffer) -> Option<ImageBuffer> {
        self.image_buffers.insert(buffer.id(), buffer)
    }

    pub fn add_native_image(&mut self, image: NativeImage) -> Option<NativeImage> {
        self.native_images.insert(image.id(), image)
    }

    pub fn add_font(&mut self, font: Font) -> Option<Font> {
        self.fonts.insert(font.id(), font)
    }

    pub fn add_media_player(&mut self, player: MediaPlayer) -> Option<MediaPlayer> {
        self.media_players.insert(player.id(), player)
    }

    pub fn image_buffer(&self, id: RenderingResourceId) -> Option<&ImageBuffer> {
        self.image_buffers.get(&id)
    }

    pub fn native_image(&self, id: RenderingResourceId) -> Option<&NativeImage> {
        self.native_images.get(&id)
    }

    pub fn font(&self, id: RenderingResourceId) -> Option<&Font> {
        self.fonts.get(&id)
    }

    pub fn media_player(&self, id: RenderingResourceId) -> Option<&MediaPlayer> {
        self.media_players.get(&id)
    }

    /// Resolve an identifier for pattern drawing
    ///
    /// Native images take precedence over image buffers.
    pub fn source_image(&self, id: RenderingResourceId) -> Option<SourceImage<'_>> {
        self.native_image(id)
            .map(SourceImage::NativeImage)
            .or_else(|| self.image_buffer(id).map(SourceImage::ImageBuffer))
    }

    pub fn len(&self) -> usize {
        self.image_buffers.len()
            + self.native_images.len()
            + self.fonts.len()
            + self.media_players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.image_buffers.clear();
        self.native_images.clear();
        self.fonts.clear();
        self.media_players.clear();
    }
}
