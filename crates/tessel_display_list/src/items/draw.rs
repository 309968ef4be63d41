//! Image, text and shape drawing items

use serde::{Deserialize, Serialize};
use tessel_core::{AffineTransform, Color, OptionalResourceId, Point, Rect, RenderingResourceId, Size};
use tessel_paint::{Path, StrokeStyle};

use crate::apply::{ApplyItem, ApplyWithResource};
use crate::bounds::{LocalBounds, FOCUS_RING_WIDTH};
use crate::dump::DumpProperties;
use crate::resources::{
    Filter, FilterResults, Font, ImageBuffer, MediaPlayer, NativeImage, SourceImage, SystemImage,
};
use crate::surface::DrawingSurface;
use crate::text_stream::{ListDisplay, PropertySink};
use crate::types::{
    DocumentMarkerLineStyle, DocumentMarkerLineStyleMode, FontSmoothingMode, GlyphAdvance,
    GlyphId, ImagePaintingOptions,
};

// ─────────────────────────────────────────────────────────────────────────────
// Images
// ─────────────────────────────────────────────────────────────────────────────

/// Draw an image buffer through a filter chain
///
/// Without a source the filter renders from transparent black.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawFilteredImageBuffer {
    source_image_identifier: Option<RenderingResourceId>,
    source_image_rect: Rect,
    filter: Filter,
}

impl DrawFilteredImageBuffer {
    pub fn new(
        source_image_identifier: Option<RenderingResourceId>,
        source_image_rect: Rect,
        filter: Filter,
    ) -> Self {
        Self {
            source_image_identifier,
            source_image_rect,
            filter,
        }
    }

    pub fn source_image_identifier(&self) -> Option<RenderingResourceId> {
        self.source_image_identifier
    }

    pub fn source_image_rect(&self) -> Rect {
        self.source_image_rect
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl ApplyWithResource for DrawFilteredImageBuffer {
    type Resource<'r> = (Option<&'r ImageBuffer>, &'r mut FilterResults);

    fn apply_with(&self, surface: &mut dyn DrawingSurface, resource: Self::Resource<'_>) {
        let (source_image, results) = resource;
        surface.draw_filtered_image_buffer(
            source_image,
            self.source_image_rect,
            &self.filter,
            results,
        );
    }
}

impl DumpProperties for DrawFilteredImageBuffer {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property(
            "source-image-identifier",
            &OptionalResourceId(self.source_image_identifier),
        );
        sink.dump_property("source-image-rect", &self.source_image_rect);
        sink.dump_property("filter", &self.filter);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawImageBuffer {
    image_buffer_identifier: RenderingResourceId,
    destination_rect: Rect,
    source_rect: Rect,
    options: ImagePaintingOptions,
}

impl DrawImageBuffer {
    pub fn new(
        image_buffer_identifier: RenderingResourceId,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) -> Self {
        Self {
            image_buffer_identifier,
            destination_rect,
            source_rect,
            options,
        }
    }

    pub fn image_buffer_identifier(&self) -> RenderingResourceId {
        self.image_buffer_identifier
    }

    pub fn destination_rect(&self) -> Rect {
        self.destination_rect
    }

    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    pub fn options(&self) -> ImagePaintingOptions {
        self.options
    }
}

impl ApplyWithResource for DrawImageBuffer {
    type Resource<'r> = &'r ImageBuffer;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, image_buffer: Self::Resource<'_>) {
        surface.draw_image_buffer(
            image_buffer,
            self.destination_rect,
            self.source_rect,
            self.options,
        );
    }
}

impl DumpProperties for DrawImageBuffer {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("image-buffer-identifier", &self.image_buffer_identifier);
        sink.dump_property("dest-rect", &self.destination_rect);
        sink.dump_property("source-rect", &self.source_rect);
        sink.dump_property("options", &self.options);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawNativeImage {
    image_identifier: RenderingResourceId,
    image_size: Size,
    destination_rect: Rect,
    source_rect: Rect,
    options: ImagePaintingOptions,
}

impl DrawNativeImage {
    pub fn new(
        image_identifier: RenderingResourceId,
        image_size: Size,
        destination_rect: Rect,
        source_rect: Rect,
        options: ImagePaintingOptions,
    ) -> Self {
        Self {
            image_identifier,
            image_size,
            destination_rect,
            source_rect,
            options,
        }
    }

    pub fn image_identifier(&self) -> RenderingResourceId {
        self.image_identifier
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn destination_rect(&self) -> Rect {
        self.destination_rect
    }

    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    pub fn options(&self) -> ImagePaintingOptions {
        self.options
    }
}

impl ApplyWithResource for DrawNativeImage {
    type Resource<'r> = &'r NativeImage;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, image: Self::Resource<'_>) {
        surface.draw_native_image(
            image,
            self.image_size,
            self.destination_rect,
            self.source_rect,
            self.options,
        );
    }
}

impl DumpProperties for DrawNativeImage {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("image-identifier", &self.image_identifier);
        sink.dump_property("image-size", &self.image_size);
        sink.dump_property("dest-rect", &self.destination_rect);
        sink.dump_property("source-rect", &self.source_rect);
        sink.dump_property("options", &self.options);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawSystemImage {
    system_image: SystemImage,
    destination_rect: Rect,
}

impl DrawSystemImage {
    pub fn new(system_image: SystemImage, destination_rect: Rect) -> Self {
        Self {
            system_image,
            destination_rect,
        }
    }

    pub fn system_image(&self) -> &SystemImage {
        &self.system_image
    }

    pub fn destination_rect(&self) -> Rect {
        self.destination_rect
    }
}

impl ApplyItem for DrawSystemImage {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_system_image(&self.system_image, self.destination_rect);
    }
}

impl DumpProperties for DrawSystemImage {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("system-image", &self.system_image);
        sink.dump_property("destination", &self.destination_rect);
    }
}

/// Tile an image over a destination rect
///
/// The identifier names either a native image or an image buffer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawPattern {
    image_identifier: RenderingResourceId,
    destination: Rect,
    tile_rect: Rect,
    pattern_transform: AffineTransform,
    phase: Point,
    spacing: Size,
    options: ImagePaintingOptions,
}

impl DrawPattern {
    pub fn new(
        image_identifier: RenderingResourceId,
        destination: Rect,
        tile_rect: Rect,
        pattern_transform: AffineTransform,
        phase: Point,
        spacing: Size,
        options: ImagePaintingOptions,
    ) -> Self {
        Self {
            image_identifier,
            destination,
            tile_rect,
            pattern_transform,
            phase,
            spacing,
            options,
        }
    }

    pub fn image_identifier(&self) -> RenderingResourceId {
        self.image_identifier
    }

    pub fn destination(&self) -> Rect {
        self.destination
    }

    pub fn tile_rect(&self) -> Rect {
        self.tile_rect
    }

    pub fn pattern_transform(&self) -> &AffineTransform {
        &self.pattern_transform
    }

    pub fn phase(&self) -> Point {
        self.phase
    }

    pub fn spacing(&self) -> Size {
        self.spacing
    }

    pub fn options(&self) -> ImagePaintingOptions {
        self.options
    }
}

impl ApplyWithResource for DrawPattern {
    type Resource<'r> = SourceImage<'r>;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, image: Self::Resource<'_>) {
        surface.draw_pattern(
            image,
            self.destination,
            self.tile_rect,
            &self.pattern_transform,
            self.phase,
            self.spacing,
            self.options,
        );
    }
}

impl DumpProperties for DrawPattern {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("image-identifier", &self.image_identifier);
        sink.dump_property("dest-rect", &self.destination);
        sink.dump_property("tile-rect", &self.tile_rect);
        sink.dump_property("pattern-transform", &self.pattern_transform);
        sink.dump_property("phase", &self.phase);
        sink.dump_property("spacing", &self.spacing);
        sink.dump_property("options", &self.options);
    }
}

/// Paint the current frame of a media player
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintFrameForMedia {
    player_identifier: RenderingResourceId,
    destination: Rect,
}

impl PaintFrameForMedia {
    pub fn new(player_identifier: RenderingResourceId, destination: Rect) -> Self {
        Self {
            player_identifier,
            destination,
        }
    }

    pub fn player_identifier(&self) -> RenderingResourceId {
        self.player_identifier
    }

    pub fn destination(&self) -> Rect {
        self.destination
    }
}

impl ApplyWithResource for PaintFrameForMedia {
    type Resource<'r> = &'r MediaPlayer;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, player: Self::Resource<'_>) {
        surface.paint_frame_for_media(player, self.destination);
    }
}

impl DumpProperties for PaintFrameForMedia {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("player-identifier", &self.player_identifier);
        sink.dump_property("destination", &self.destination);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

/// A run of positioned glyphs
///
/// Bounds are computed once at construction: each glyph occupies a cell as
/// wide as its advance and as tall as the font's ascent plus descent. Ink
/// that overflows the cell is not accounted for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawGlyphs {
    font_identifier: RenderingResourceId,
    glyphs: Vec<GlyphId>,
    advances: Vec<GlyphAdvance>,
    bounds: Rect,
    local_anchor: Point,
    smoothing_mode: FontSmoothingMode,
}

impl DrawGlyphs {
    /// Record a glyph run drawn with `font`
    ///
    /// Glyphs without a matching advance are dropped.
    pub fn new(
        font: &Font,
        glyphs: &[GlyphId],
        advances: &[GlyphAdvance],
        local_anchor: Point,
        smoothing_mode: FontSmoothingMode,
    ) -> Self {
        let count = glyphs.len().min(advances.len());
        let advances = &advances[..count];
        let bounds = glyph_run_bounds(font, advances, local_anchor);
        Self {
            font_identifier: font.id(),
            glyphs: glyphs[..count].to_vec(),
            advances: advances.to_vec(),
            bounds,
            local_anchor,
            smoothing_mode,
        }
    }

    pub fn font_identifier(&self) -> RenderingResourceId {
        self.font_identifier
    }

    pub fn glyphs(&self) -> &[GlyphId] {
        &self.glyphs
    }

    pub fn advances(&self) -> &[GlyphAdvance] {
        &self.advances
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn local_anchor(&self) -> Point {
        self.local_anchor
    }

    pub fn smoothing_mode(&self) -> FontSmoothingMode {
        self.smoothing_mode
    }
}

fn glyph_run_bounds(font: &Font, advances: &[GlyphAdvance], local_anchor: Point) -> Rect {
    let metrics = font.metrics();
    let mut current = local_anchor;
    let mut bounds = Rect::ZERO;
    for advance in advances {
        let glyph_rect = Rect::new(
            current.x,
            current.y - metrics.ascent,
            advance.width,
            metrics.height(),
        );
        bounds.unite(&glyph_rect);
        current.move_by(*advance);
    }
    bounds
}

impl ApplyWithResource for DrawGlyphs {
    type Resource<'r> = &'r Font;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, font: Self::Resource<'_>) {
        surface.draw_glyphs(
            font,
            &self.glyphs,
            &self.advances,
            self.local_anchor,
            self.smoothing_mode,
        );
    }
}

impl DumpProperties for DrawGlyphs {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("font-identifier", &self.font_identifier);
        sink.dump_property("glyphs", &ListDisplay(&self.glyphs));
        sink.dump_property("advances", &ListDisplay(&self.advances));
        sink.dump_property("bounds", &self.bounds);
        sink.dump_property("local-anchor", &self.local_anchor);
        sink.dump_property("smoothing-mode", &self.smoothing_mode);
    }
}

/// Underlines, overlines and strike-throughs for a text run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawLinesForText {
    block_location: Point,
    local_anchor: Size,
    widths: Vec<f32>,
    thickness: f32,
    printing: bool,
    double_lines: bool,
    style: StrokeStyle,
}

impl DrawLinesForText {
    pub fn new(
        block_location: Point,
        local_anchor: Size,
        widths: Vec<f32>,
        thickness: f32,
        printing: bool,
        double_lines: bool,
        style: StrokeStyle,
    ) -> Self {
        Self {
            block_location,
            local_anchor,
            widths,
            thickness,
            printing,
            double_lines,
            style,
        }
    }

    pub fn block_location(&self) -> Point {
        self.block_location
    }

    pub fn local_anchor(&self) -> Size {
        self.local_anchor
    }

    /// Where the first line starts
    pub fn point(&self) -> Point {
        self.block_location + self.local_anchor
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_printing(&self) -> bool {
        self.printing
    }

    pub fn double_lines(&self) -> bool {
        self.double_lines
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl ApplyItem for DrawLinesForText {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_lines_for_text(
            self.point(),
            self.thickness,
            &self.widths,
            self.printing,
            self.double_lines,
            self.style,
        );
    }
}

impl LocalBounds for DrawLinesForText {
    // The last width is the end of the line furthest from `point()`.
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        let Some(&width) = self.widths.last() else {
            return Rect::ZERO;
        };
        Rect::from_origin_size(self.point(), Size::new(width, self.thickness)).inflated(1.0)
    }
}

impl DumpProperties for DrawLinesForText {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("block-location", &self.block_location);
        sink.dump_property("local-anchor", &self.local_anchor);
        sink.dump_property("widths", &ListDisplay(&self.widths));
        sink.dump_property("thickness", &self.thickness);
        sink.dump_property("is-printing", &self.printing);
        sink.dump_property("double", &self.double_lines);
        sink.dump_property("style", &self.style);
    }
}

/// Spelling and grammar marker dots
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawDotsForDocumentMarker {
    rect: Rect,
    style_mode: DocumentMarkerLineStyleMode,
    should_use_dark_appearance: bool,
}

impl DrawDotsForDocumentMarker {
    pub fn new(rect: Rect, style: DocumentMarkerLineStyle) -> Self {
        Self {
            rect,
            style_mode: style.mode,
            should_use_dark_appearance: style.should_use_dark_appearance,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> DocumentMarkerLineStyle {
        DocumentMarkerLineStyle {
            mode: self.style_mode,
            should_use_dark_appearance: self.should_use_dark_appearance,
        }
    }
}

impl ApplyItem for DrawDotsForDocumentMarker {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_dots_for_document_marker(self.rect, self.style());
    }
}

impl LocalBounds for DrawDotsForDocumentMarker {
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        self.rect
    }
}

impl DumpProperties for DrawDotsForDocumentMarker {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("style-mode", &self.style_mode);
        sink.dump_property("dark-appearance", &self.should_use_dark_appearance);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shapes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    rect: Rect,
    border_thickness: f32,
}

impl DrawRect {
    pub fn new(rect: Rect, border_thickness: f32) -> Self {
        Self {
            rect,
            border_thickness,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }
}

impl ApplyItem for DrawRect {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_rect(self.rect, self.border_thickness);
    }
}

impl DumpProperties for DrawRect {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
        sink.dump_property("border-thickness", &self.border_thickness);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawLine {
    point1: Point,
    point2: Point,
}

impl DrawLine {
    pub fn new(point1: Point, point2: Point) -> Self {
        Self { point1, point2 }
    }

    pub fn point1(&self) -> Point {
        self.point1
    }

    pub fn point2(&self) -> Point {
        self.point2
    }
}

impl ApplyItem for DrawLine {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_line(self.point1, self.point2);
    }
}

impl LocalBounds for DrawLine {
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        let mut bounds = Rect::ZERO;
        bounds.fit_to_points(self.point1, self.point2);
        bounds
    }
}

impl DumpProperties for DrawLine {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("point-1", &self.point1);
        sink.dump_property("point-2", &self.point2);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawEllipse {
    rect: Rect,
}

impl DrawEllipse {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl ApplyItem for DrawEllipse {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_ellipse(self.rect);
    }
}

impl DumpProperties for DrawEllipse {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rect", &self.rect);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawPath {
    path: Path,
}

impl DrawPath {
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplyItem for DrawPath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_path(&self.path);
    }
}

impl DumpProperties for DrawPath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawFocusRingPath {
    path: Path,
    width: f32,
    offset: f32,
    color: Color,
}

impl DrawFocusRingPath {
    pub fn new(path: Path, width: f32, offset: f32, color: Color) -> Self {
        Self {
            path,
            width,
            offset,
            color,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for DrawFocusRingPath {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_focus_ring_path(&self.path, self.width, self.offset, self.color);
    }
}

impl LocalBounds for DrawFocusRingPath {
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        self.path.fast_bounding_rect().inflated(FOCUS_RING_WIDTH)
    }
}

impl DumpProperties for DrawFocusRingPath {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("path", &self.path);
        sink.dump_property("width", &self.width);
        sink.dump_property("offset", &self.offset);
        sink.dump_property("color", &self.color);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawFocusRingRects {
    rects: Vec<Rect>,
    width: f32,
    offset: f32,
    color: Color,
}

impl DrawFocusRingRects {
    pub fn new(rects: Vec<Rect>, width: f32, offset: f32, color: Color) -> Self {
        Self {
            rects,
            width,
            offset,
            color,
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ApplyItem for DrawFocusRingRects {
    fn apply(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_focus_ring_rects(&self.rects, self.width, self.offset, self.color);
    }
}

impl LocalBounds for DrawFocusRingRects {
    fn local_bounds(&self, _surface: &dyn DrawingSurface) -> Rect {
        let mut bounds = Rect::ZERO;
        for rect in &self.rects {
            bounds.unite(rect);
        }
        bounds.inflated(FOCUS_RING_WIDTH)
    }
}

impl DumpProperties for DrawFocusRingRects {
    fn dump_properties(&self, sink: &mut dyn PropertySink) {
        sink.dump_property("rects", &ListDisplay(&self.rects));
        sink.dump_property("width", &self.width);
        sink.dump_property("offset", &self.offset);
        sink.dump_property("color", &self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::FontMetrics;

    fn font() -> Font {
        Font::new(RenderingResourceId::new(1), "Inter", 16.0, FontMetrics::new(12.0, 4.0))
    }

    #[test]
    fn test_glyph_bounds_cover_advances() {
        let item = DrawGlyphs::new(
            &font(),
            &[1, 2, 3],
            &[Size::new(10.0, 0.0), Size::new(8.0, 0.0), Size::new(6.0, 0.0)],
            Point::new(5.0, 20.0),
            FontSmoothingMode::Antialiased,
        );
        assert_eq!(item.bounds(), Rect::new(5.0, 8.0, 24.0, 16.0));
        assert_eq!(item.font_identifier(), RenderingResourceId::new(1));
    }

    #[test]
    fn test_glyph_bounds_follow_vertical_advance() {
        let item = DrawGlyphs::new(
            &font(),
            &[1, 2],
            &[Size::new(10.0, 5.0), Size::new(10.0, 5.0)],
            Point::ZERO,
            FontSmoothingMode::AutoSmoothing,
        );
        // Second cell starts at (10, 5 - ascent)
        assert_eq!(item.bounds(), Rect::new(0.0, -12.0, 20.0, 21.0));
    }

    #[test]
    fn test_glyphs_without_advances_are_dropped() {
        let item = DrawGlyphs::new(
            &font(),
            &[1, 2, 3],
            &[Size::new(10.0, 0.0)],
            Point::ZERO,
            FontSmoothingMode::AutoSmoothing,
        );
        assert_eq!(item.glyphs(), &[1]);
        assert_eq!(item.advances().len(), 1);
    }

    #[test]
    fn test_empty_glyph_run_has_zero_bounds() {
        let item = DrawGlyphs::new(&font(), &[], &[], Point::new(3.0, 3.0), FontSmoothingMode::NoSmoothing);
        assert_eq!(item.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_lines_for_text_point() {
        let item = DrawLinesForText::new(
            Point::new(10.0, 20.0),
            Size::new(1.0, 2.0),
            vec![10.0, 20.0],
            2.0,
            false,
            false,
            StrokeStyle::Solid,
        );
        assert_eq!(item.point(), Point::new(11.0, 22.0));
    }

    #[test]
    fn test_marker_style_round_trips_through_fields() {
        let style = DocumentMarkerLineStyle {
            mode: DocumentMarkerLineStyleMode::Grammar,
            should_use_dark_appearance: true,
        };
        let item = DrawDotsForDocumentMarker::new(Rect::new(0.0, 0.0, 4.0, 2.0), style);
        assert_eq!(item.style(), style);
    }
}
