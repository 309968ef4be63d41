//! Tessel Display List
//!
//! Recorded drawing commands and the machinery around them.
//!
//! # Features
//!
//! - **Items**: a closed set of drawing commands with typed payloads
//! - **Apply**: every item drives exactly one [`DrawingSurface`] call
//! - **Bounds**: local bounds for lines, strokes, focus rings and text lines
//! - **Dump**: s-expression debug traces through [`TextStream`]
//! - **Record / replay**: [`Recorder`] builds a [`DisplayList`] from surface
//!   calls and [`Replayer`] plays it back against any surface
//!
//! # Example
//!
//! ```rust
//! use tessel_core::{Color, Rect};
//! use tessel_display_list::testing::CallLogSurface;
//! use tessel_display_list::{DrawingSurface, Recorder, Replayer, ResourceHeap};
//!
//! let mut recorder = Recorder::new();
//! recorder.save();
//! recorder.fill_rect_with_color(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
//! recorder.restore();
//! let list = recorder.into_display_list();
//!
//! let heap = ResourceHeap::new();
//! let mut surface = CallLogSurface::new();
//! let summary = Replayer::new(&mut surface, &heap).replay(&list).unwrap();
//! assert_eq!(summary.items_applied, 3);
//! ```
//!
//! Resources (image buffers, native images, fonts, media players) are never
//! stored in items. Items carry a [`RenderingResourceId`](tessel_core::RenderingResourceId)
//! and the replayer resolves it through a [`ResourceHeap`].

pub mod apply;
pub mod bounds;
pub mod display_list;
pub mod dump;
pub mod error;
pub mod graphics_state;
pub mod items;
pub mod recorder;
pub mod replayer;
pub mod resources;
pub mod surface;
pub mod testing;
pub mod text_stream;
pub mod types;

pub use apply::{ApplyItem, ApplyWithResource};
pub use bounds::{LocalBounds, FOCUS_RING_WIDTH};
pub use display_list::DisplayList;
pub use dump::DumpProperties;
pub use error::{ApplyError, ReplayError};
pub use graphics_state::{DropShadow, GraphicsState};
pub use items::{Item, ItemType};
pub use recorder::Recorder;
pub use replayer::{ReplayConfig, ReplaySummary, Replayer};
pub use resources::{
    Filter, FilterFunction, FilterResults, Font, FontMetrics, ImageBuffer, MediaPlayer,
    NativeImage, ResourceHeap, SourceImage, SystemImage,
};
pub use surface::DrawingSurface;
pub use text_stream::{ListDisplay, PropertySink, TextStream};
pub use types::{
    DocumentMarkerLineStyle, DocumentMarkerLineStyleMode, FontSmoothingMode, GlyphAdvance,
    GlyphId, ImagePaintingOptions, InterpolationQuality,
};
