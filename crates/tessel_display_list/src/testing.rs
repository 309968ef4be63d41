//! Surface that logs calls instead of drawing
//!
//! Used to verify what a display list does to a surface, and by the CLI to
//! replay without a renderer.

use tessel_core::{
    AffineTransform, BlendMode, Color, CompositeOperator, Point, Rect, RenderingResourceId, Size,
};
use tessel_paint::{Gradient, LineCap, LineJoin, Path, RoundedRect, StrokeStyle, WindRule};

use crate::graphics_state::GraphicsState;
use crate::resources::{
    Filter, FilterResults, Font, ImageBuffer, MediaPlayer, NativeImage, SourceImage, SystemImage,
};
use crate::surface::DrawingSurface;
use crate::types::{
    DocumentMarkerLineStyle, FontSmoothingMode, GlyphAdvance, GlyphId, ImagePaintingOptions,
};

/// One call made on a [`CallLogSurface`]
///
/// Resources are logged by identifier.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    Scale(Size),
    SetCTM(AffineTransform),
    ConcatCTM(AffineTransform),
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetStrokeThickness(f32),
    UpdateState(GraphicsState),
    SetLineCap(LineCap),
    SetLineDash { dash_array: Vec<f32>, dash_offset: f32 },
    SetLineJoin(LineJoin),
    SetMiterLimit(f32),
    ClearShadow,
    Clip(Rect),
    ClipOut(Rect),
    ClipToImageBuffer {
        image_buffer: RenderingResourceId,
        destination_rect: Rect,
    },
    ClipOutToPath(Path),
    ClipPath { path: Path, wind_rule: WindRule },
    DrawFilteredImageBuffer {
        source_image: Option<RenderingResourceId>,
        source_image_rect: Rect,
        filter: Filter,
    },
    DrawGlyphs {
        font: RenderingResourceId,
        glyphs: Vec<GlyphId>,
        advances: Vec<GlyphAdvance>,
        local_anchor: Point,
        smoothing_mode: FontSmoothingMode,
    },
    DrawImageBuffer {
        image_buffer: RenderingResourceId,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    },
    DrawNativeImage {
        image: RenderingResourceId,
        image_size: Size,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    },
    DrawSystemImage {
        system_image: SystemImage,
        destination_rect: Rect,
    },
    DrawPattern {
        image: RenderingResourceId,
        is_native_image: bool,
        destination_rect: Rect,
        tile_rect: Rect,
        pattern_transform: AffineTransform,
        phase: Point,
        spacing: Size,
        options: ImagePaintingOptions,
    },
    PaintFrameForMedia {
        player: RenderingResourceId,
        destination: Rect,
    },
    DrawRect { rect: Rect, border_thickness: f32 },
    DrawLine { point1: Point, point2: Point },
    DrawLinesForText {
        point: Point,
        thickness: f32,
        widths: Vec<f32>,
        printing: bool,
        double_lines: bool,
        style: StrokeStyle,
    },
    DrawDotsForDocumentMarker {
        rect: Rect,
        style: DocumentMarkerLineStyle,
    },
    DrawEllipse(Rect),
    DrawPath(Path),
    DrawFocusRingPath {
        path: Path,
        width: f32,
        offset: f32,
        color: Color,
    },
    DrawFocusRingRects {
        rects: Vec<Rect>,
        width: f32,
        offset: f32,
        color: Color,
    },
    FillRect(Rect),
    FillRectWithColor { rect: Rect, color: Color },
    FillRectWithGradient { rect: Rect, gradient: Gradient },
    FillCompositedRect {
        rect: Rect,
        color: Color,
        op: CompositeOperator,
        blend_mode: BlendMode,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
        blend_mode: BlendMode,
    },
    FillRectWithRoundedHole {
        rect: Rect,
        rounded_hole_rect: RoundedRect,
        color: Color,
    },
    FillPath(Path),
    FillEllipse(Rect),
    StrokeRect { rect: Rect, line_width: f32 },
    StrokePath(Path),
    StrokeEllipse(Rect),
    ClearRect(Rect),
    BeginTransparencyLayer(f32),
    EndTransparencyLayer,
    ApplyStrokePattern,
    ApplyFillPattern,
    ApplyDeviceScaleFactor(f32),
}

/// Drawing surface that records every call it receives
#[derive(Clone, Debug)]
pub struct CallLogSurface {
    calls: Vec<SurfaceCall>,
    stroke_thickness: f32,
    thickness_stack: Vec<f32>,
    transparency_layer_depth: usize,
}

impl Default for CallLogSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            stroke_thickness: 1.0,
            thickness_stack: Vec::new(),
            transparency_layer_depth: 0,
        }
    }
}

impl CallLogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stroke thickness other than 1
    pub fn with_stroke_thickness(mut self, thickness: f32) -> Self {
        self.stroke_thickness = thickness;
        self
    }

    /// Start inside `depth` transparency layers
    pub fn with_transparency_layers(mut self, depth: usize) -> Self {
        self.transparency_layer_depth = depth;
        self
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<&SurfaceCall> {
        self.calls.last()
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    fn log(&mut self, call: SurfaceCall) {
        self.calls.push(call);
    }
}

impl DrawingSurface for CallLogSurface {
    fn stroke_thickness(&self) -> f32 {
        self.stroke_thickness
    }

    fn is_in_transparency_layer(&self) -> bool {
        self.transparency_layer_depth > 0
    }

    fn save(&mut self) {
        self.thickness_stack.push(self.stroke_thickness);
        self.log(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        if let Some(thickness) = self.thickness_stack.pop() {
            self.stroke_thickness = thickness;
        }
        self.log(SurfaceCall::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.log(SurfaceCall::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.log(SurfaceCall::Rotate(angle));
    }

    fn scale(&mut self, amount: Size) {
        self.log(SurfaceCall::Scale(amount));
    }

    fn set_ctm(&mut self, transform: &AffineTransform) {
        self.log(SurfaceCall::SetCTM(*transform));
    }

    fn concat_ctm(&mut self, transform: &AffineTransform) {
        self.log(SurfaceCall::ConcatCTM(*transform));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.log(SurfaceCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.log(SurfaceCall::SetStrokeColor(color));
    }

    fn set_stroke_thickness(&mut self, thickness: f32) {
        self.stroke_thickness = thickness;
        self.log(SurfaceCall::SetStrokeThickness(thickness));
    }

    fn update_state(&mut self, state: &GraphicsState) {
        if let Some(thickness) = state.stroke_thickness {
            self.stroke_thickness = thickness;
        }
        self.log(SurfaceCall::UpdateState(state.clone()));
    }

    fn set_line_cap(&mut self, line_cap: LineCap) {
        self.log(SurfaceCall::SetLineCap(line_cap));
    }

    fn set_line_dash(&mut self, dash_array: &[f32], dash_offset: f32) {
        self.log(SurfaceCall::SetLineDash {
            dash_array: dash_array.to_vec(),
            dash_offset,
        });
    }

    fn set_line_join(&mut self, line_join: LineJoin) {
        self.log(SurfaceCall::SetLineJoin(line_join));
    }

    fn set_miter_limit(&mut self, miter_limit: f32) {
        self.log(SurfaceCall::SetMiterLimit(miter_limit));
    }

    fn clear_shadow(&mut self) {
        self.log(SurfaceCall::ClearShadow);
    }

    fn clip(&mut self, rect: Rect) {
        self.log(SurfaceCall::Clip(rect));
    }

    fn clip_out(&mut self, rect: Rect) {
        self.log(SurfaceCall::ClipOut(rect));
    }

    fn clip_to_image_buffer(&mut self, image_buffer: &ImageBuffer, destination_rect: Rect) {
        self.log(SurfaceCall::ClipToImageBuffer {
            image_buffer: image_buffer.id(),
            destination_rect,
        });
    }

    fn clip_out_to_path(&mut self, path: &Path) {
        self.log(SurfaceCall::ClipOutToPath(path.clone()));
    }

    fn clip_path(&mut self, path: &Path, wind_rule: WindRule) {
        self.log(SurfaceCall::ClipPath {
            path: path.clone(),
            wind_rule,
        });
    }

    fn draw_filtered_image_buffer(
        &mut self,
        source_image: Option<&ImageBuffer>,
        source_image_rect: Rect,
        filter: &Filter,
        results: &mut FilterResults,
    ) {
        if let Some(source) = source_image {
            results.set_result(source.id(), filter.region());
        }
        self.log(SurfaceCall::DrawFilteredImageBuffer {
            source_image: source_image.map(ImageBuffer::id),
            source_image_rect,
            filter: filter.clone(),
        });
    }

    fn draw_glyphs(
        &mut self,
        font: &Font,
        glyphs: &[GlyphId],
        advances: &[GlyphAdvance],
        local_anchor: Point,
        smoothing_mode: FontSmoothingMode,
    ) {
        self.log(SurfaceCall::DrawGlyphs {
            font: font.id(),
            glyphs: glyphs.to_vec(),
            advances: advances.to_vec(),
            local_anchor,
            smoothing_mode,
        });
    }

    fn draw_image_buffer(
        &mut self,
        image_buffer: &ImageBuffer,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) {
        self.log(SurfaceCall::DrawImageBuffer {
            image_buffer: image_buffer.id(),
            destination_rect,
            source_rect,
            options,
        });
    }

    fn draw_native_image(
        &mut self,
        image: &NativeImage,
        image_size: Size,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) {
        self.log(SurfaceCall::DrawNativeImage {
            image: image.id(),
            image_size,
            destination_rect,
            source_rect,
            options,
        });
    }

    fn draw_system_image(&mut self, system_image: &SystemImage, destination_rect: Rect) {
        self.log(SurfaceCall::DrawSystemImage {
            system_image: system_image.clone(),
            destination_rect,
        });
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
        self.log(SurfaceCall::DrawPattern {
            image: image.id(),
            is_native_image: image.native_image_if_exists().is_some(),
            destination_rect,
            tile_rect,
            pattern_transform: *pattern_transform,
            phase,
            spacing,
            options,
        });
    }

    fn paint_frame_for_media(&mut self, player: &MediaPlayer, destination: Rect) {
        self.log(SurfaceCall::PaintFrameForMedia {
            player: player.id(),
            destination,
        });
    }

    fn draw_rect(&mut self, rect: Rect, border_thickness: f32) {
        self.log(SurfaceCall::DrawRect {
            rect,
            border_thickness,
        });
    }

    fn draw_line(&mut self, point1: Point, point2: Point) {
        self.log(SurfaceCall::DrawLine { point1, point2 });
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
        self.log(SurfaceCall::DrawLinesForText {
            point,
            thickness,
            widths: widths.to_vec(),
            printing,
            double_lines,
            style,
        });
    }

    fn draw_dots_for_document_marker(&mut self, rect: Rect, style: DocumentMarkerLineStyle) {
        self.log(SurfaceCall::DrawDotsForDocumentMarker { rect, style });
    }

    fn draw_ellipse(&mut self, rect: Rect) {
        self.log(SurfaceCall::DrawEllipse(rect));
    }

    fn draw_path(&mut self, path: &Path) {
        self.log(SurfaceCall::DrawPath(path.clone()));
    }

    fn draw_focus_ring_path(&mut self, path: &Path, width: f32, offset: f32, color: Color) {
        self.log(SurfaceCall::DrawFocusRingPath {
            path: path.clone(),
            width,
            offset,
            color,
        });
    }

    fn draw_focus_ring_rects(&mut self, rects: &[Rect], width: f32, offset: f32, color: Color) {
        self.log(SurfaceCall::DrawFocusRingRects {
            rects: rects.to_vec(),
            width,
            offset,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.log(SurfaceCall::FillRect(rect));
    }

    fn fill_rect_with_color(&mut self, rect: Rect, color: Color) {
        self.log(SurfaceCall::FillRectWithColor { rect, color });
    }

    fn fill_rect_with_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        self.log(SurfaceCall::FillRectWithGradient {
            rect,
            gradient: gradient.clone(),
        });
    }

    fn fill_composited_rect(
        &mut self,
        rect: Rect,
        color: Color,
        op: CompositeOperator,
        blend_mode: BlendMode,
    ) {
        self.log(SurfaceCall::FillCompositedRect {
            rect,
            color,
            op,
            blend_mode,
        });
    }

    fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Color, blend_mode: BlendMode) {
        self.log(SurfaceCall::FillRoundedRect {
            rect: *rect,
            color,
            blend_mode,
        });
    }

    fn fill_rect_with_rounded_hole(
        &mut self,
        rect: Rect,
        rounded_hole_rect: &RoundedRect,
        color: Color,
    ) {
        self.log(SurfaceCall::FillRectWithRoundedHole {
            rect,
            rounded_hole_rect: *rounded_hole_rect,
            color,
        });
    }

    fn fill_path(&mut self, path: &Path) {
        self.log(SurfaceCall::FillPath(path.clone()));
    }

    fn fill_ellipse(&mut self, rect: Rect) {
        self.log(SurfaceCall::FillEllipse(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32) {
        self.log(SurfaceCall::StrokeRect { rect, line_width });
    }

    fn stroke_path(&mut self, path: &Path) {
        self.log(SurfaceCall::StrokePath(path.clone()));
    }

    fn stroke_ellipse(&mut self, rect: Rect) {
        self.log(SurfaceCall::StrokeEllipse(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.log(SurfaceCall::ClearRect(rect));
    }

    fn begin_transparency_layer(&mut self, opacity: f32) {
        self.transparency_layer_depth += 1;
        self.log(SurfaceCall::BeginTransparencyLayer(opacity));
    }

    fn end_transparency_layer(&mut self) {
        self.transparency_layer_depth = self.transparency_layer_depth.saturating_sub(1);
        self.log(SurfaceCall::EndTransparencyLayer);
    }

    fn apply_stroke_pattern(&mut self) {
        self.log(SurfaceCall::ApplyStrokePattern);
    }

    fn apply_fill_pattern(&mut self) {
        self.log(SurfaceCall::ApplyFillPattern);
    }

    fn apply_device_scale_factor(&mut self, scale_factor: f32) {
        self.log(SurfaceCall::ApplyDeviceScaleFactor(scale_factor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::FilterFunction;

    #[test]
    fn test_logs_calls_with_arguments() {
        let mut surface = CallLogSurface::new();
        surface.translate(1.0, 2.0);
        surface.stroke_rect(Rect::new(0.0, 0.0, 4.0, 4.0), 3.0);

        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::Translate { x: 1.0, y: 2.0 },
                SurfaceCall::StrokeRect {
                    rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                    line_width: 3.0,
                },
            ]
        );
        assert_eq!(surface.take_calls().len(), 2);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_stroke_thickness_follows_save_restore() {
        let mut surface = CallLogSurface::new().with_stroke_thickness(2.0);
        surface.save();
        surface.set_stroke_thickness(5.0);
        assert_eq!(surface.stroke_thickness(), 5.0);
        surface.update_state(&GraphicsState::new().with_stroke_thickness(7.0));
        assert_eq!(surface.stroke_thickness(), 7.0);
        surface.restore();
        assert_eq!(surface.stroke_thickness(), 2.0);
    }

    #[test]
    fn test_transparency_layer_depth() {
        let mut surface = CallLogSurface::new();
        assert!(!surface.is_in_transparency_layer());
        surface.begin_transparency_layer(0.5);
        assert!(surface.is_in_transparency_layer());
        surface.end_transparency_layer();
        assert!(!surface.is_in_transparency_layer());
        surface.end_transparency_layer();
        assert!(!surface.is_in_transparency_layer());
        assert!(CallLogSurface::new()
            .with_transparency_layers(1)
            .is_in_transparency_layer());
    }

    #[test]
    fn test_filtered_draw_stores_region() {
        let id = RenderingResourceId::new(3);
        let buffer = ImageBuffer::new(id, Size::new(8.0, 8.0));
        let region = Rect::new(1.0, 1.0, 6.0, 6.0);
        let filter = Filter::new(vec![FilterFunction::Opacity(0.5)], region);
        let mut results = FilterResults::new();
        let mut surface = CallLogSurface::new();

        surface.draw_filtered_image_buffer(Some(&buffer), Rect::ZERO, &filter, &mut results);
        surface.draw_filtered_image_buffer(None, Rect::ZERO, &filter, &mut results);

        assert_eq!(results.result(id), Some(region));
        assert_eq!(results.len(), 1);
        assert!(matches!(
            surface.last_call(),
            Some(SurfaceCall::DrawFilteredImageBuffer { source_image: None, .. })
        ));
    }
}
