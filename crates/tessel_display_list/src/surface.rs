//! Drawing surface abstraction
//!
//! [`DrawingSurface`] is the capability every display list item is applied
//! against. A GPU renderer, the [`Recorder`](crate::Recorder) and the
//! [`CallLogSurface`](crate::testing::CallLogSurface) used in tests all
//! implement it.

use tessel_core::{AffineTransform, BlendMode, Color, CompositeOperator, Point, Rect, Size};
use tessel_paint::{Gradient, LineCap, LineJoin, Path, RoundedRect, StrokeStyle, WindRule};

use crate::graphics_state::GraphicsState;
use crate::resources::{
    Filter, FilterResults, Font, ImageBuffer, MediaPlayer, NativeImage, SourceImage, SystemImage,
};
use crate::types::{
    DocumentMarkerLineStyle, FontSmoothingMode, GlyphAdvance, GlyphId, ImagePaintingOptions,
};

/// Target of recorded drawing commands
///
/// Each method corresponds to exactly one item kind. Implementations are
/// free to rasterize immediately, forward elsewhere, or record.
pub trait DrawingSurface {
    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Current stroke width, used for stroke bounds
    fn stroke_thickness(&self) -> f32;

    /// Whether a transparency layer is currently open
    fn is_in_transparency_layer(&self) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // State stack and transform
    // ─────────────────────────────────────────────────────────────────────────

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate by `angle` radians
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, amount: Size);
    fn set_ctm(&mut self, transform: &AffineTransform);
    fn concat_ctm(&mut self, transform: &AffineTransform);

    // ─────────────────────────────────────────────────────────────────────────
    // Paint state
    // ─────────────────────────────────────────────────────────────────────────

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_thickness(&mut self, thickness: f32);
    fn update_state(&mut self, state: &GraphicsState);
    fn set_line_cap(&mut self, line_cap: LineCap);
    fn set_line_dash(&mut self, dash_array: &[f32], dash_offset: f32);
    fn set_line_join(&mut self, line_join: LineJoin);
    fn set_miter_limit(&mut self, miter_limit: f32);
    fn clear_shadow(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Clipping
    // ─────────────────────────────────────────────────────────────────────────

    fn clip(&mut self, rect: Rect);
    fn clip_out(&mut self, rect: Rect);
    fn clip_to_image_buffer(&mut self, image_buffer: &ImageBuffer, destination_rect: Rect);
    fn clip_out_to_path(&mut self, path: &Path);
    fn clip_path(&mut self, path: &Path, wind_rule: WindRule);

    // ─────────────────────────────────────────────────────────────────────────
    // Images and text
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_filtered_image_buffer(
        &mut self,
        source_image: Option<&ImageBuffer>,
        source_image_rect: Rect,
        filter: &Filter,
        results: &mut FilterResults,
    );

    fn draw_glyphs(
        &mut self,
        font: &Font,
        glyphs: &[GlyphId],
        advances: &[GlyphAdvance],
        local_anchor: Point,
        smoothing_mode: FontSmoothingMode,
    );

    fn draw_image_buffer(
        &mut self,
        image_buffer: &ImageBuffer,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    );

    fn draw_native_image(
        &mut self,
        image: &NativeImage,
        image_size: Size,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    );

    fn draw_system_image(&mut self, system_image: &SystemImage, destination_rect: Rect);

    #[allow(clippy::too_many_arguments)]
    fn draw_pattern(
        &mut self,
        image: SourceImage<'_>,
        destination_rect: Rect,
        tile_rect: Rect,
        pattern_transform: &AffineTransform,
        phase: Point,
        spacing: Size,
        options: ImagePaintingOptions,
    );

    fn paint_frame_for_media(&mut self, player: &MediaPlayer, destination: Rect);

    // ─────────────────────────────────────────────────────────────────────────
    // Shapes
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_rect(&mut self, rect: Rect, border_thickness: f32);
    fn draw_line(&mut self, point1: Point, point2: Point);

    fn draw_lines_for_text(
        &mut self,
        point: Point,
        thickness: f32,
        widths: &[f32],
        printing: bool,
        double_lines: bool,
        style: StrokeStyle,
    );

    fn draw_dots_for_document_marker(&mut self, rect: Rect, style: DocumentMarkerLineStyle);
    fn draw_ellipse(&mut self, rect: Rect);
    fn draw_path(&mut self, path: &Path);
    fn draw_focus_ring_path(&mut self, path: &Path, width: f32, offset: f32, color: Color);
    fn draw_focus_ring_rects(&mut self, rects: &[Rect], width: f32, offset: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_rect_with_color(&mut self, rect: Rect, color: Color);
    fn fill_rect_with_gradient(&mut self, rect: Rect, gradient: &Gradient);
    fn fill_composited_rect(
        &mut self,
        rect: Rect,
        color: Color,
        op: CompositeOperator,
        blend_mode: BlendMode,
    );
    fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Color, blend_mode: BlendMode);
    fn fill_rect_with_rounded_hole(&mut self, rect: Rect, rounded_hole_rect: &RoundedRect, color: Color);
    fn fill_path(&mut self, path: &Path);
    fn fill_ellipse(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect, line_width: f32);
    fn stroke_path(&mut self, path: &Path);
    fn stroke_ellipse(&mut self, rect: Rect);

    // ─────────────────────────────────────────────────────────────────────────
    // Layers and patterns
    // ─────────────────────────────────────────────────────────────────────────

    fn clear_rect(&mut self, rect: Rect);
    fn begin_transparency_layer(&mut self, opacity: f32);
    fn end_transparency_layer(&mut self);
    fn apply_stroke_pattern(&mut self);
    fn apply_fill_pattern(&mut self);
    fn apply_device_scale_factor(&mut self, scale_factor: f32);
}
