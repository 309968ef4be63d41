//! Shared fixtures for integration tests

#![allow(dead_code)]

use smallvec::smallvec;
use tessel_core::{
    AffineTransform, BlendMode, Color, CompositeOperator, Point, Rect, RenderingResourceId, Size,
};
use tessel_display_list::items::*;
use tessel_display_list::testing::SurfaceCall;
use tessel_display_list::{
    DocumentMarkerLineStyle, DocumentMarkerLineStyleMode, Filter, FilterFunction, Font,
    FontMetrics, FontSmoothingMode, GlyphAdvance, GlyphId, GraphicsState, ImageBuffer,
    ImagePaintingOptions, MediaPlayer, NativeImage, ResourceHeap, SystemImage,
};
use tessel_paint::{
    ArcData, BezierCurveData, Gradient, LineCap, LineData, LineJoin, Path, PathBuilder,
    QuadCurveData, RoundedRect, StrokeStyle, WindRule,
};

pub const IMAGE_BUFFER_ID: RenderingResourceId = RenderingResourceId::new(1);
pub const NATIVE_IMAGE_ID: RenderingResourceId = RenderingResourceId::new(2);
pub const FONT_ID: RenderingResourceId = RenderingResourceId::new(3);
pub const MEDIA_PLAYER_ID: RenderingResourceId = RenderingResourceId::new(4);

pub fn font() -> Font {
    Font::new(FONT_ID, "Inter", 16.0, FontMetrics::new(12.0, 4.0))
}

/// Heap holding every resource the sample items reference
pub fn sample_resources() -> ResourceHeap {
    let mut heap = ResourceHeap::new();
    heap.add_image_buffer(ImageBuffer::new(IMAGE_BUFFER_ID, Size::new(32.0, 32.0)));
    heap.add_native_image(NativeImage::new(NATIVE_IMAGE_ID, Size::new(64.0, 64.0)));
    heap.add_font(font());
    heap.add_media_player(MediaPlayer::new(MEDIA_PLAYER_ID, Size::new(640.0, 480.0)));
    heap
}

fn rect() -> Rect {
    Rect::new(10.0, 20.0, 30.0, 40.0)
}

fn triangle() -> Path {
    PathBuilder::new()
        .move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .line_to(10.0, 10.0)
        .close()
        .build()
}

fn options() -> ImagePaintingOptions {
    ImagePaintingOptions::default().with_blend_mode(BlendMode::Multiply)
}

fn rounded() -> RoundedRect {
    RoundedRect::new(rect(), 4.0)
}

fn state() -> GraphicsState {
    GraphicsState::new()
        .with_fill_color(Color::GREEN)
        .with_alpha(0.5)
}

fn filter() -> Filter {
    Filter::new(vec![FilterFunction::Blur { std_deviation: 2.0 }], rect())
}

fn marker_style() -> DocumentMarkerLineStyle {
    DocumentMarkerLineStyle {
        mode: DocumentMarkerLineStyleMode::Spelling,
        should_use_dark_appearance: false,
    }
}

fn gradient() -> Gradient {
    Gradient::linear_simple(Point::ZERO, Point::new(10.0, 0.0), Color::RED, Color::BLUE)
}

fn focus_rects() -> Vec<Rect> {
    vec![rect(), Rect::new(0.0, 0.0, 5.0, 5.0)]
}

fn line() -> LineData {
    LineData {
        start: Point::new(0.0, 0.0),
        end: Point::new(10.0, 5.0),
    }
}

fn arc() -> ArcData {
    ArcData {
        center: Point::new(5.0, 5.0),
        radius: 5.0,
        start_angle: 0.0,
        end_angle: std::f32::consts::PI,
        clockwise: true,
    }
}

fn quad_curve() -> QuadCurveData {
    QuadCurveData {
        start: Point::new(0.0, 0.0),
        control: Point::new(5.0, 10.0),
        end: Point::new(10.0, 0.0),
    }
}

fn bezier_curve() -> BezierCurveData {
    BezierCurveData {
        start: Point::new(0.0, 0.0),
        control1: Point::new(3.0, 10.0),
        control2: Point::new(7.0, 10.0),
        end: Point::new(10.0, 0.0),
    }
}

const GLYPHS: [GlyphId; 2] = [10, 11];

fn advances() -> [GlyphAdvance; 2] {
    [Size::new(8.0, 0.0), Size::new(9.0, 0.0)]
}

/// One representative item of the given type
pub fn sample_item(item_type: ItemType) -> Item {
    let path = triangle();
    let options = options();
    let rounded = rounded();

    match item_type {
        ItemType::Save => Save.into(),
        ItemType::Restore => Restore.into(),
        ItemType::Translate => Translate::new(3.0, 4.0).into(),
        ItemType::Rotate => Rotate::new(0.5).into(),
        ItemType::Scale => Scale::new(Size::new(2.0, 3.0)).into(),
        ItemType::SetCTM => SetCTM::new(AffineTransform::translation(1.0, 2.0)).into(),
        ItemType::ConcatenateCTM => ConcatenateCTM::new(AffineTransform::scale(2.0, 2.0)).into(),
        ItemType::SetInlineFillColor => SetInlineFillColor::new(Color::RED).into(),
        ItemType::SetInlineStrokeColor => SetInlineStrokeColor::new(Color::BLUE).into(),
        ItemType::SetStrokeThickness => SetStrokeThickness::new(2.5).into(),
        ItemType::SetState => SetState::new(state()).into(),
        ItemType::SetLineCap => SetLineCap::new(LineCap::Round).into(),
        ItemType::SetLineDash => SetLineDash::new(smallvec![4.0, 2.0], 1.0).into(),
        ItemType::SetLineJoin => SetLineJoin::new(LineJoin::Bevel).into(),
        ItemType::SetMiterLimit => SetMiterLimit::new(10.0).into(),
        ItemType::ClearShadow => ClearShadow.into(),
        ItemType::Clip => Clip::new(rect()).into(),
        ItemType::ClipOut => ClipOut::new(rect()).into(),
        ItemType::ClipToImageBuffer => ClipToImageBuffer::new(IMAGE_BUFFER_ID, rect()).into(),
        ItemType::ClipOutToPath => ClipOutToPath::new(path).into(),
        ItemType::ClipPath => ClipPath::new(path, WindRule::EvenOdd).into(),
        ItemType::DrawFilteredImageBuffer => DrawFilteredImageBuffer::new(
            Some(IMAGE_BUFFER_ID),
            rect(),
            filter(),
        )
        .into(),
        ItemType::DrawGlyphs => DrawGlyphs::new(
            &font(),
            &GLYPHS,
            &advances(),
            Point::new(0.0, 20.0),
            FontSmoothingMode::Antialiased,
        )
        .into(),
        ItemType::DrawImageBuffer => {
            DrawImageBuffer::new(IMAGE_BUFFER_ID, rect(), Rect::new(0.0, 0.0, 32.0, 32.0), options)
                .into()
        }
        ItemType::DrawNativeImage => DrawNativeImage::new(
            NATIVE_IMAGE_ID,
            Size::new(64.0, 64.0),
            rect(),
            Rect::new(0.0, 0.0, 64.0, 64.0),
            options,
        )
        .into(),
        ItemType::DrawSystemImage => {
            DrawSystemImage::new(SystemImage::new("attachment-icon"), rect()).into()
        }
        ItemType::DrawPattern => DrawPattern::new(
            NATIVE_IMAGE_ID,
            rect(),
            Rect::new(0.0, 0.0, 8.0, 8.0),
            AffineTransform::IDENTITY,
            Point::new(1.0, 1.0),
            Size::new(2.0, 2.0),
            options,
        )
        .into(),
        ItemType::DrawRect => DrawRect::new(rect(), 1.0).into(),
        ItemType::DrawLine => DrawLine::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)).into(),
        ItemType::DrawLinesForText => DrawLinesForText::new(
            Point::new(10.0, 10.0),
            Size::new(2.0, 3.0),
            vec![10.0, 20.0],
            2.0,
            true,
            false,
            StrokeStyle::Dotted,
        )
        .into(),
        ItemType::DrawDotsForDocumentMarker => {
            DrawDotsForDocumentMarker::new(rect(), marker_style()).into()
        }
        ItemType::DrawEllipse => DrawEllipse::new(rect()).into(),
        ItemType::DrawPath => DrawPath::new(path).into(),
        ItemType::DrawFocusRingPath => DrawFocusRingPath::new(path, 2.0, 1.0, Color::BLUE).into(),
        ItemType::DrawFocusRingRects => {
            DrawFocusRingRects::new(focus_rects(), 2.0, 1.0, Color::BLUE).into()
        }
        ItemType::FillRect => FillRect::new(rect()).into(),
        ItemType::FillRectWithColor => FillRectWithColor::new(rect(), Color::RED).into(),
        ItemType::FillRectWithGradient => FillRectWithGradient::new(rect(), gradient()).into(),
        ItemType::FillCompositedRect => FillCompositedRect::new(
            rect(),
            Color::RED,
            CompositeOperator::Copy,
            BlendMode::Screen,
        )
        .into(),
        ItemType::FillRoundedRect => {
            FillRoundedRect::new(rounded, Color::RED, BlendMode::Normal).into()
        }
        ItemType::FillRectWithRoundedHole => {
            FillRectWithRoundedHole::new(Rect::new(0.0, 0.0, 100.0, 100.0), rounded, Color::BLACK)
                .into()
        }
        ItemType::FillLine => FillLine::new(line()).into(),
        ItemType::FillArc => FillArc::new(arc()).into(),
        ItemType::FillQuadCurve => FillQuadCurve::new(quad_curve()).into(),
        ItemType::FillBezierCurve => FillBezierCurve::new(bezier_curve()).into(),
        ItemType::FillPath => FillPath::new(path).into(),
        ItemType::FillEllipse => FillEllipse::new(rect()).into(),
        ItemType::PaintFrameForMedia => PaintFrameForMedia::new(MEDIA_PLAYER_ID, rect()).into(),
        ItemType::StrokeRect => StrokeRect::new(rect(), 2.0).into(),
        ItemType::StrokeLine => StrokeLine::new(line()).into(),
        ItemType::StrokeArc => StrokeArc::new(arc()).into(),
        ItemType::StrokeQuadCurve => StrokeQuadCurve::new(quad_curve()).into(),
        ItemType::StrokeBezierCurve => StrokeBezierCurve::new(bezier_curve()).into(),
        ItemType::StrokePath => StrokePath::new(path).into(),
        ItemType::StrokeEllipse => StrokeEllipse::new(rect()).into(),
        ItemType::ClearRect => ClearRect::new(rect()).into(),
        ItemType::BeginTransparencyLayer => BeginTransparencyLayer::new(0.75).into(),
        ItemType::EndTransparencyLayer => EndTransparencyLayer.into(),
        ItemType::ApplyStrokePattern => ApplyStrokePattern.into(),
        ItemType::ApplyFillPattern => ApplyFillPattern.into(),
        ItemType::ApplyDeviceScaleFactor => ApplyDeviceScaleFactor::new(2.0).into(),
    }
}

/// One sample item of every type, in declaration order
pub fn every_item() -> Vec<Item> {
    ItemType::ALL.into_iter().map(sample_item).collect()
}

/// The single surface call `sample_item(item_type)` makes when applied with
/// `sample_resources()`
pub fn expected_call(item_type: ItemType) -> SurfaceCall {
    match item_type {
        ItemType::Save => SurfaceCall::Save,
        ItemType::Restore => SurfaceCall::Restore,
        ItemType::Translate => SurfaceCall::Translate { x: 3.0, y: 4.0 },
        ItemType::Rotate => SurfaceCall::Rotate(0.5),
        ItemType::Scale => SurfaceCall::Scale(Size::new(2.0, 3.0)),
        ItemType::SetCTM => SurfaceCall::SetCTM(AffineTransform::translation(1.0, 2.0)),
        ItemType::ConcatenateCTM => SurfaceCall::ConcatCTM(AffineTransform::scale(2.0, 2.0)),
        ItemType::SetInlineFillColor => SurfaceCall::SetFillColor(Color::RED),
        ItemType::SetInlineStrokeColor => SurfaceCall::SetStrokeColor(Color::BLUE),
        ItemType::SetStrokeThickness => SurfaceCall::SetStrokeThickness(2.5),
        ItemType::SetState => SurfaceCall::UpdateState(state()),
        ItemType::SetLineCap => SurfaceCall::SetLineCap(LineCap::Round),
        ItemType::SetLineDash => SurfaceCall::SetLineDash {
            dash_array: vec![4.0, 2.0],
            dash_offset: 1.0,
        },
        ItemType::SetLineJoin => SurfaceCall::SetLineJoin(LineJoin::Bevel),
        ItemType::SetMiterLimit => SurfaceCall::SetMiterLimit(10.0),
        ItemType::ClearShadow => SurfaceCall::ClearShadow,
        ItemType::Clip => SurfaceCall::Clip(rect()),
        ItemType::ClipOut => SurfaceCall::ClipOut(rect()),
        ItemType::ClipToImageBuffer => SurfaceCall::ClipToImageBuffer {
            image_buffer: IMAGE_BUFFER_ID,
            destination_rect: rect(),
        },
        ItemType::ClipOutToPath => SurfaceCall::ClipOutToPath(triangle()),
        ItemType::ClipPath => SurfaceCall::ClipPath {
            path: triangle(),
            wind_rule: WindRule::EvenOdd,
        },
        ItemType::DrawFilteredImageBuffer => SurfaceCall::DrawFilteredImageBuffer {
            source_image: Some(IMAGE_BUFFER_ID),
            source_image_rect: rect(),
            filter: filter(),
        },
        ItemType::DrawGlyphs => SurfaceCall::DrawGlyphs {
            font: FONT_ID,
            glyphs: GLYPHS.to_vec(),
            advances: advances().to_vec(),
            local_anchor: Point::new(0.0, 20.0),
            smoothing_mode: FontSmoothingMode::Antialiased,
        },
        ItemType::DrawImageBuffer => SurfaceCall::DrawImageBuffer {
            image_buffer: IMAGE_BUFFER_ID,
            destination_rect: rect(),
            source_rect: Rect::new(0.0, 0.0, 32.0, 32.0),
            options: options(),
        },
        ItemType::DrawNativeImage => SurfaceCall::DrawNativeImage {
            image: NATIVE_IMAGE_ID,
            image_size: Size::new(64.0, 64.0),
            destination_rect: rect(),
            source_rect: Rect::new(0.0, 0.0, 64.0, 64.0),
            options: options(),
        },
        ItemType::DrawSystemImage => SurfaceCall::DrawSystemImage {
            system_image: SystemImage::new("attachment-icon"),
            destination_rect: rect(),
        },
        ItemType::DrawPattern => SurfaceCall::DrawPattern {
            image: NATIVE_IMAGE_ID,
            is_native_image: true,
            destination_rect: rect(),
            tile_rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            pattern_transform: AffineTransform::IDENTITY,
            phase: Point::new(1.0, 1.0),
            spacing: Size::new(2.0, 2.0),
            options: options(),
        },
        ItemType::DrawRect => SurfaceCall::DrawRect {
            rect: rect(),
            border_thickness: 1.0,
        },
        ItemType::DrawLine => SurfaceCall::DrawLine {
            point1: Point::new(0.0, 0.0),
            point2: Point::new(5.0, 5.0),
        },
        ItemType::DrawLinesForText => SurfaceCall::DrawLinesForText {
            point: Point::new(12.0, 13.0),
            thickness: 2.0,
            widths: vec![10.0, 20.0],
            printing: true,
            double_lines: false,
            style: StrokeStyle::Dotted,
        },
        ItemType::DrawDotsForDocumentMarker => SurfaceCall::DrawDotsForDocumentMarker {
            rect: rect(),
            style: marker_style(),
        },
        ItemType::DrawEllipse => SurfaceCall::DrawEllipse(rect()),
        ItemType::DrawPath => SurfaceCall::DrawPath(triangle()),
        ItemType::DrawFocusRingPath => SurfaceCall::DrawFocusRingPath {
            path: triangle(),
            width: 2.0,
            offset: 1.0,
            color: Color::BLUE,
        },
        ItemType::DrawFocusRingRects => SurfaceCall::DrawFocusRingRects {
            rects: focus_rects(),
            width: 2.0,
            offset: 1.0,
            color: Color::BLUE,
        },
        ItemType::FillRect => SurfaceCall::FillRect(rect()),
        ItemType::FillRectWithColor => SurfaceCall::FillRectWithColor {
            rect: rect(),
            color: Color::RED,
        },
        ItemType::FillRectWithGradient => SurfaceCall::FillRectWithGradient {
            rect: rect(),
            gradient: gradient(),
        },
        ItemType::FillCompositedRect => SurfaceCall::FillCompositedRect {
            rect: rect(),
            color: Color::RED,
            op: CompositeOperator::Copy,
            blend_mode: BlendMode::Screen,
        },
        ItemType::FillRoundedRect => SurfaceCall::FillRoundedRect {
            rect: rounded(),
            color: Color::RED,
            blend_mode: BlendMode::Normal,
        },
        ItemType::FillRectWithRoundedHole => SurfaceCall::FillRectWithRoundedHole {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            rounded_hole_rect: rounded(),
            color: Color::BLACK,
        },
        ItemType::FillLine => SurfaceCall::FillPath(Path::from_line(&line())),
        ItemType::FillArc => SurfaceCall::FillPath(Path::from_arc(&arc())),
        ItemType::FillQuadCurve => SurfaceCall::FillPath(Path::from_quad_curve(&quad_curve())),
        ItemType::FillBezierCurve => {
            SurfaceCall::FillPath(Path::from_bezier_curve(&bezier_curve()))
        }
        ItemType::FillPath => SurfaceCall::FillPath(triangle()),
        ItemType::FillEllipse => SurfaceCall::FillEllipse(rect()),
        ItemType::PaintFrameForMedia => SurfaceCall::PaintFrameForMedia {
            player: MEDIA_PLAYER_ID,
            destination: rect(),
        },
        ItemType::StrokeRect => SurfaceCall::StrokeRect {
            rect: rect(),
            line_width: 2.0,
        },
        ItemType::StrokeLine => SurfaceCall::StrokePath(Path::from_line(&line())),
        ItemType::StrokeArc => SurfaceCall::StrokePath(Path::from_arc(&arc())),
        ItemType::StrokeQuadCurve => SurfaceCall::StrokePath(Path::from_quad_curve(&quad_curve())),
        ItemType::StrokeBezierCurve => {
            SurfaceCall::StrokePath(Path::from_bezier_curve(&bezier_curve()))
        }
        ItemType::StrokePath => SurfaceCall::StrokePath(triangle()),
        ItemType::StrokeEllipse => SurfaceCall::StrokeEllipse(rect()),
        ItemType::ClearRect => SurfaceCall::ClearRect(rect()),
        ItemType::BeginTransparencyLayer => SurfaceCall::BeginTransparencyLayer(0.75),
        ItemType::EndTransparencyLayer => SurfaceCall::EndTransparencyLayer,
        ItemType::ApplyStrokePattern => SurfaceCall::ApplyStrokePattern,
        ItemType::ApplyFillPattern => SurfaceCall::ApplyFillPattern,
        ItemType::ApplyDeviceScaleFactor => SurfaceCall::ApplyDeviceScaleFactor(2.0),
    }
}
