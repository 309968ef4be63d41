//! Recording surface
//!
//! [`Recorder`] is a [`DrawingSurface`] that appends one item per call to a
//! [`DisplayList`] instead of drawing. It keeps just enough state (transform,
//! stroke thickness, open transparency layers) to answer surface queries the
//! way a live context would.

use tessel_core::{AffineTransform, BlendMode, Color, CompositeOperator, Point, Rect, Size};
use tessel_paint::{Gradient, LineCap, LineJoin, Path, RoundedRect, StrokeStyle, WindRule};
use tracing::{debug, warn};

use crate::display_list::DisplayList;
use crate::graphics_state::GraphicsState;
use crate::items::*;
use crate::resources::{
    Filter, FilterResults, Font, ImageBuffer, MediaPlayer, NativeImage, SourceImage, SystemImage,
};
use crate::surface::DrawingSurface;
use crate::types::{
    DocumentMarkerLineStyle, FontSmoothingMode, GlyphAdvance, GlyphId, ImagePaintingOptions,
};

#[derive(Clone, Copy, Debug)]
struct RecorderState {
    ctm: AffineTransform,
    stroke_thickness: f32,
}

impl Default for RecorderState {
    fn default() -> Self {
        Self {
            ctm: AffineTransform::IDENTITY,
            stroke_thickness: 1.0,
        }
    }
}

/// Surface that records calls into a display list
#[derive(Debug, Default)]
pub struct Recorder {
    list: DisplayList,
    state: RecorderState,
    stack: Vec<RecorderState>,
    transparency_layer_depth: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording with a base transform already in effect
    pub fn with_base_ctm(mut self, ctm: AffineTransform) -> Self {
        self.state.ctm = ctm;
        self
    }

    /// Current transform, as the recorded items so far would leave it
    pub fn ctm(&self) -> AffineTransform {
        self.state.ctm
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn transparency_layer_depth(&self) -> usize {
        self.transparency_layer_depth
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Hand out the recorded list and start a fresh one
    ///
    /// Transform and stroke state carry over.
    pub fn take_display_list(&mut self) -> DisplayList {
        std::mem::take(&mut self.list)
    }

    pub fn into_display_list(self) -> DisplayList {
        self.list
    }

    fn append(&mut self, item: impl Into<Item>) {
        self.list.append(item);
    }

    fn concat(&mut self, transform: &AffineTransform) {
        self.state.ctm = self.state.ctm.then(transform);
    }
}

impl DrawingSurface for Recorder {
    fn stroke_thickness(&self) -> f32 {
        self.state.stroke_thickness
    }

    fn is_in_transparency_layer(&self) -> bool {
        self.transparency_layer_depth > 0
    }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.append(Save);
    }

    fn restore(&mut self) {
        let Some(state) = self.stack.pop() else {
            warn!("restore without matching save ignored");
            return;
        };
        self.state = state;
        self.append(Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.concat(&AffineTransform::translation(x, y));
        self.append(Translate::new(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.concat(&AffineTransform::rotation(angle));
        self.append(Rotate::new(angle));
    }

    fn scale(&mut self, amount: Size) {
        self.concat(&AffineTransform::scale(amount.width, amount.height));
        self.append(Scale::new(amount));
    }

    fn set_ctm(&mut self, transform: &AffineTransform) {
        self.state.ctm = *transform;
        self.append(SetCTM::new(*transform));
    }

    fn concat_ctm(&mut self, transform: &AffineTransform) {
        self.concat(transform);
        self.append(ConcatenateCTM::new(*transform));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.append(SetInlineFillColor::new(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.append(SetInlineStrokeColor::new(color));
    }

    fn set_stroke_thickness(&mut self, thickness: f32) {
        self.state.stroke_thickness = thickness;
        self.append(SetStrokeThickness::new(thickness));
    }

    fn update_state(&mut self, state: &GraphicsState) {
        if let Some(thickness) = state.stroke_thickness {
            self.state.stroke_thickness = thickness;
        }

        if let Some(Item::SetState(previous)) = self.list.last_mut() {
            previous.merge(state);
            debug!(
                changed = previous.state().changed_count(),
                "coalesced state change"
            );
            return;
        }
        self.append(SetState::new(state.clone()));
    }

    fn set_line_cap(&mut self, line_cap: LineCap) {
        self.append(SetLineCap::new(line_cap));
    }

    fn set_line_dash(&mut self, dash_array: &[f32], dash_offset: f32) {
        self.append(SetLineDash::new(dash_array.iter().copied().collect(), dash_offset));
    }

    fn set_line_join(&mut self, line_join: LineJoin) {
        self.append(SetLineJoin::new(line_join));
    }

    fn set_miter_limit(&mut self, miter_limit: f32) {
        self.append(SetMiterLimit::new(miter_limit));
    }

    fn clear_shadow(&mut self) {
        self.append(ClearShadow);
    }

    fn clip(&mut self, rect: Rect) {
        self.append(Clip::new(rect));
    }

    fn clip_out(&mut self, rect: Rect) {
        self.append(ClipOut::new(rect));
    }

    fn clip_to_image_buffer(&mut self, image_buffer: &ImageBuffer, destination_rect: Rect) {
        self.append(ClipToImageBuffer::new(image_buffer.id(), destination_rect));
    }

    fn clip_out_to_path(&mut self, path: &Path) {
        self.append(ClipOutToPath::new(path.clone()));
    }

    fn clip_path(&mut self, path: &Path, wind_rule: WindRule) {
        self.append(ClipPath::new(path.clone(), wind_rule));
    }

    fn draw_filtered_image_buffer(
        &mut self,
        source_image: Option<&ImageBuffer>,
        source_image_rect: Rect,
        filter: &Filter,
        _results: &mut FilterResults,
    ) {
        self.append(DrawFilteredImageBuffer::new(
            source_image.map(ImageBuffer::id),
            source_image_rect,
            filter.clone(),
        ));
    }

    fn draw_glyphs(
        &mut self,
        font: &Font,
        glyphs: &[GlyphId],
        advances: &[GlyphAdvance],
        local_anchor: Point,
        smoothing_mode: FontSmoothingMode,
    ) {
        self.append(DrawGlyphs::new(
            font,
            glyphs,
            advances,
            local_anchor,
            smoothing_mode,
        ));
    }

    fn draw_image_buffer(
        &mut self,
        image_buffer: &ImageBuffer,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) {
        self.append(DrawImageBuffer::new(
            image_buffer.id(),
            destination_rect,
            source_rect,
            options,
        ));
    }

    fn draw_native_image(
        &mut self,
        image: &NativeImage,
        image_size: Size,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) {
        self.append(DrawNativeImage::new(
            image.id(),
            image_size,
            destination_rect,
            source_rect,
            options,
        ));
    }

    fn draw_system_image(&mut self, system_image: &SystemImage, destination_rect: Rect) {
        self.append(DrawSystemImage::new(system_image.clone(), destination_rect));
    }

    fn draw_pattern(
        &mut self,
        image: SourceImage<'_>,
        destination_rect: Rect,
        tile_rect: Rect,
        pattern_transform: &AffineTransform,
        phase: Point,
        spacing: Size,
        options: ImagePaintingOptions,
    ) {
        self.append(DrawPattern::new(
            image.id(),
            destination_rect,
            tile_rect,
            *pattern_transform,
            phase,
            spacing,
            options,
        ));
    }

    fn paint_frame_for_media(&mut self, player: &MediaPlayer, destination: Rect) {
        self.append(PaintFrameForMedia::new(player.id(), destination));
    }

    fn draw_rect(&mut self, rect: Rect, border_thickness: f32) {
        self.append(DrawRect::new(rect, border_thickness));
    }

    fn draw_line(&mut self, point1: Point, point2: Point) {
        self.append(DrawLine::new(point1, point2));
    }

    fn draw_lines_for_text(
        &mut self,
        point: Point,
        thickness: f32,
        widths: &[f32],
        printing: bool,
        double_lines: bool,
        style: StrokeStyle,
    ) {
        self.append(DrawLinesForText::new(
            point,
            Size::ZERO,
            widths.to_vec(),
            thickness,
            printing,
            double_lines,
            style,
        ));
    }

    fn draw_dots_for_document_marker(&mut self, rect: Rect, style: DocumentMarkerLineStyle) {
        self.append(DrawDotsForDocumentMarker::new(rect, style));
    }

    fn draw_ellipse(&mut self, rect: Rect) {
        self.append(DrawEllipse::new(rect));
    }

    fn draw_path(&mut self, path: &Path) {
        self.append(DrawPath::new(path.clone()));
    }

    fn draw_focus_ring_path(&mut self, path: &Path, width: f32, offset: f32, color: Color) {
        self.append(DrawFocusRingPath::new(path.clone(), width, offset, color));
    }

    fn draw_focus_ring_rects(&mut self, rects: &[Rect], width: f32, offset: f32, color: Color) {
        self.append(DrawFocusRingRects::new(rects.to_vec(), width, offset, color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.append(FillRect::new(rect));
    }

    fn fill_rect_with_color(&mut self, rect: Rect, color: Color) {
        self.append(FillRectWithColor::new(rect, color));
    }

    fn fill_rect_with_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        self.append(FillRectWithGradient::new(rect, gradient.clone()));
    }

    fn fill_composited_rect(
        &mut self,
        rect: Rect,
        color: Color,
        op: CompositeOperator,
        blend_mode: BlendMode,
    ) {
        self.append(FillCompositedRect::new(rect, color, op, blend_mode));
    }

    fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Color, blend_mode: BlendMode) {
        self.append(FillRoundedRect::new(*rect, color, blend_mode));
    }

    fn fill_rect_with_rounded_hole(
        &mut self,
        rect: Rect,
        rounded_hole_rect: &RoundedRect,
        color: Color,
    ) {
        self.append(FillRectWithRoundedHole::new(rect, *rounded_hole_rect, color));
    }

    fn fill_path(&mut self, path: &Path) {
        self.append(FillPath::new(path.clone()));
    }

    fn fill_ellipse(&mut self, rect: Rect) {
        self.append(FillEllipse::new(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32) {
        self.append(StrokeRect::new(rect, line_width));
    }

    fn stroke_path(&mut self, path: &Path) {
        self.append(StrokePath::new(path.clone()));
    }

    fn stroke_ellipse(&mut self, rect: Rect) {
        self.append(StrokeEllipse::new(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.append(ClearRect::new(rect));
    }

    fn begin_transparency_layer(&mut self, opacity: f32) {
        self.transparency_layer_depth += 1;
        self.append(BeginTransparencyLayer::new(opacity));
    }

    fn end_transparency_layer(&mut self) {
        if self.transparency_layer_depth == 0 {
            warn!("end of transparency layer without a matching begin ignored");
            return;
        }
        self.transparency_layer_depth -= 1;
        self.append(EndTransparencyLayer);
    }

    fn apply_stroke_pattern(&mut self) {
        self.append(ApplyStrokePattern);
    }

    fn apply_fill_pattern(&mut self) {
        self.append(ApplyFillPattern);
    }

    fn apply_device_scale_factor(&mut self, scale_factor: f32) {
        self.concat(&AffineTransform::scale(scale_factor, scale_factor));
        self.append(ApplyDeviceScaleFactor::new(scale_factor));
    }
}
