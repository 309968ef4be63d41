//! Recorded drawing commands
//!
//! Every command has its own payload struct with private fields and
//! accessors. [`Item`] is the closed union stored in a display list and
//! [`ItemType`] is its fieldless tag.

mod clip;
mod draw;
mod fill;
mod layer;
mod state;
mod stroke;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use clip::{Clip, ClipOut, ClipOutToPath, ClipPath, ClipToImageBuffer};
pub use draw::{
    DrawDotsForDocumentMarker, DrawEllipse, DrawFilteredImageBuffer, DrawFocusRingPath,
    DrawFocusRingRects, DrawGlyphs, DrawImageBuffer, DrawLine, DrawLinesForText, DrawNativeImage,
    DrawPath, DrawPattern, DrawRect, DrawSystemImage, PaintFrameForMedia,
};
pub use fill::{
    FillArc, FillBezierCurve, FillCompositedRect, FillEllipse, FillLine, FillPath, FillQuadCurve,
    FillRect, FillRectWithColor, FillRectWithGradient, FillRectWithRoundedHole, FillRoundedRect,
};
pub use layer::{
    ApplyDeviceScaleFactor, ApplyFillPattern, ApplyStrokePattern, BeginTransparencyLayer,
    ClearRect, EndTransparencyLayer,
};
pub use state::{
    ClearShadow, ConcatenateCTM, Restore, Rotate, Save, Scale, SetCTM, SetInlineFillColor,
    SetInlineStrokeColor, SetLineCap, SetLineDash, SetLineJoin, SetMiterLimit, SetState,
    SetStrokeThickness, Translate,
};
pub use stroke::{
    StrokeArc, StrokeBezierCurve, StrokeEllipse, StrokeLine, StrokePath, StrokeQuadCurve,
    StrokeRect,
};

// ─────────────────────────────────────────────────────────────────────────────
// Item
// ─────────────────────────────────────────────────────────────────────────────

/// A single recorded drawing command
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Item {
    // State and transform
    Save(Save),
    Restore(Restore),
    Translate(Translate),
    Rotate(Rotate),
    Scale(Scale),
    SetCTM(SetCTM),
    ConcatenateCTM(ConcatenateCTM),
    SetInlineFillColor(SetInlineFillColor),
    SetInlineStrokeColor(SetInlineStrokeColor),
    SetStrokeThickness(SetStrokeThickness),
    SetState(SetState),
    SetLineCap(SetLineCap),
    SetLineDash(SetLineDash),
    SetLineJoin(SetLineJoin),
    SetMiterLimit(SetMiterLimit),
    ClearShadow(ClearShadow),

    // Clipping
    Clip(Clip),
    ClipOut(ClipOut),
    ClipToImageBuffer(ClipToImageBuffer),
    ClipOutToPath(ClipOutToPath),
    ClipPath(ClipPath),

    // Drawing
    DrawFilteredImageBuffer(DrawFilteredImageBuffer),
    DrawGlyphs(DrawGlyphs),
    DrawImageBuffer(DrawImageBuffer),
    DrawNativeImage(DrawNativeImage),
    DrawSystemImage(DrawSystemImage),
    DrawPattern(DrawPattern),
    DrawRect(DrawRect),
    DrawLine(DrawLine),
    DrawLinesForText(DrawLinesForText),
    DrawDotsForDocumentMarker(DrawDotsForDocumentMarker),
    DrawEllipse(DrawEllipse),
    DrawPath(DrawPath),
    DrawFocusRingPath(DrawFocusRingPath),
    DrawFocusRingRects(DrawFocusRingRects),

    // Filling
    FillRect(FillRect),
    FillRectWithColor(FillRectWithColor),
    FillRectWithGradient(FillRectWithGradient),
    FillCompositedRect(FillCompositedRect),
    FillRoundedRect(FillRoundedRect),
    FillRectWithRoundedHole(FillRectWithRoundedHole),
    FillLine(FillLine),
    FillArc(FillArc),
    FillQuadCurve(FillQuadCurve),
    FillBezierCurve(FillBezierCurve),
    FillPath(FillPath),
    FillEllipse(FillEllipse),

    // Media
    PaintFrameForMedia(PaintFrameForMedia),

    // Stroking
    StrokeRect(StrokeRect),
    StrokeLine(StrokeLine),
    StrokeArc(StrokeArc),
    StrokeQuadCurve(StrokeQuadCurve),
    StrokeBezierCurve(StrokeBezierCurve),
    StrokePath(StrokePath),
    StrokeEllipse(StrokeEllipse),

    // Layers
    ClearRect(ClearRect),
    BeginTransparencyLayer(BeginTransparencyLayer),
    EndTransparencyLayer(EndTransparencyLayer),
    ApplyStrokePattern(ApplyStrokePattern),
    ApplyFillPattern(ApplyFillPattern),
    ApplyDeviceScaleFactor(ApplyDeviceScaleFactor),
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Save(_) => ItemType::Save,
            Item::Restore(_) => ItemType::Restore,
            Item::Translate(_) => ItemType::Translate,
            Item::Rotate(_) => ItemType::Rotate,
            Item::Scale(_) => ItemType::Scale,
            Item::SetCTM(_) => ItemType::SetCTM,
            Item::ConcatenateCTM(_) => ItemType::ConcatenateCTM,
            Item::SetInlineFillColor(_) => ItemType::SetInlineFillColor,
            Item::SetInlineStrokeColor(_) => ItemType::SetInlineStrokeColor,
            Item::SetStrokeThickness(_) => ItemType::SetStrokeThickness,
            Item::SetState(_) => ItemType::SetState,
            Item::SetLineCap(_) => ItemType::SetLineCap,
            Item::SetLineDash(_) => ItemType::SetLineDash,
            Item::SetLineJoin(_) => ItemType::SetLineJoin,
            Item::SetMiterLimit(_) => ItemType::SetMiterLimit,
            Item::ClearShadow(_) => ItemType::ClearShadow,
            Item::Clip(_) => ItemType::Clip,
            Item::ClipOut(_) => ItemType::ClipOut,
            Item::ClipToImageBuffer(_) => ItemType::ClipToImageBuffer,
            Item::ClipOutToPath(_) => ItemType::ClipOutToPath,
            Item::ClipPath(_) => ItemType::ClipPath,
            Item::DrawFilteredImageBuffer(_) => ItemType::DrawFilteredImageBuffer,
            Item::DrawGlyphs(_) => ItemType::DrawGlyphs,
            Item::DrawImageBuffer(_) => ItemType::DrawImageBuffer,
            Item::DrawNativeImage(_) => ItemType::DrawNativeImage,
            Item::DrawSystemImage(_) => ItemType::DrawSystemImage,
            Item::DrawPattern(_) => ItemType::DrawPattern,
            Item::DrawRect(_) => ItemType::DrawRect,
            Item::DrawLine(_) => ItemType::DrawLine,
            Item::DrawLinesForText(_) => ItemType::DrawLinesForText,
            Item::DrawDotsForDocumentMarker(_) => ItemType::DrawDotsForDocumentMarker,
            Item::DrawEllipse(_) => ItemType::DrawEllipse,
            Item::DrawPath(_) => ItemType::DrawPath,
            Item::DrawFocusRingPath(_) => ItemType::DrawFocusRingPath,
            Item::DrawFocusRingRects(_) => ItemType::DrawFocusRingRects,
            Item::FillRect(_) => ItemType::FillRect,
            Item::FillRectWithColor(_) => ItemType::FillRectWithColor,
            Item::FillRectWithGradient(_) => ItemType::FillRectWithGradient,
            Item::FillCompositedRect(_) => ItemType::FillCompositedRect,
            Item::FillRoundedRect(_) => ItemType::FillRoundedRect,
            Item::FillRectWithRoundedHole(_) => ItemType::FillRectWithRoundedHole,
            Item::FillLine(_) => ItemType::FillLine,
            Item::FillArc(_) => ItemType::FillArc,
            Item::FillQuadCurve(_) => ItemType::FillQuadCurve,
            Item::FillBezierCurve(_) => ItemType::FillBezierCurve,
            Item::FillPath(_) => ItemType::FillPath,
            Item::FillEllipse(_) => ItemType::FillEllipse,
            Item::PaintFrameForMedia(_) => ItemType::PaintFrameForMedia,
            Item::StrokeRect(_) => ItemType::StrokeRect,
            Item::StrokeLine(_) => ItemType::StrokeLine,
            Item::StrokeArc(_) => ItemType::StrokeArc,
            Item::StrokeQuadCurve(_) => ItemType::StrokeQuadCurve,
            Item::StrokeBezierCurve(_) => ItemType::StrokeBezierCurve,
            Item::StrokePath(_) => ItemType::StrokePath,
            Item::StrokeEllipse(_) => ItemType::StrokeEllipse,
            Item::ClearRect(_) => ItemType::ClearRect,
            Item::BeginTransparencyLayer(_) => ItemType::BeginTransparencyLayer,
            Item::EndTransparencyLayer(_) => ItemType::EndTransparencyLayer,
            Item::ApplyStrokePattern(_) => ItemType::ApplyStrokePattern,
            Item::ApplyFillPattern(_) => ItemType::ApplyFillPattern,
            Item::ApplyDeviceScaleFactor(_) => ItemType::ApplyDeviceScaleFactor,
        }
    }

    pub fn name(&self) -> &'static str {
        self.item_type().name()
    }

    pub fn is_drawing_item(&self) -> bool {
        self.item_type().is_drawing_item()
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Item {
                fn from(item: $variant) -> Self {
                    Item::$variant(item)
                }
            }
        )*
    };
}

impl_from_payload!(
    Save,
    Restore,
    Translate,
    Rotate,
    Scale,
    SetCTM,
    ConcatenateCTM,
    SetInlineFillColor,
    SetInlineStrokeColor,
    SetStrokeThickness,
    SetState,
    SetLineCap,
    SetLineDash,
    SetLineJoin,
    SetMiterLimit,
    ClearShadow,
    Clip,
    ClipOut,
    ClipToImageBuffer,
    ClipOutToPath,
    ClipPath,
    DrawFilteredImageBuffer,
    DrawGlyphs,
    DrawImageBuffer,
    DrawNativeImage,
    DrawSystemImage,
    DrawPattern,
    DrawRect,
    DrawLine,
    DrawLinesForText,
    DrawDotsForDocumentMarker,
    DrawEllipse,
    DrawPath,
    DrawFocusRingPath,
    DrawFocusRingRects,
    FillRect,
    FillRectWithColor,
    FillRectWithGradient,
    FillCompositedRect,
    FillRoundedRect,
    FillRectWithRoundedHole,
    FillLine,
    FillArc,
    FillQuadCurve,
    FillBezierCurve,
    FillPath,
    FillEllipse,
    PaintFrameForMedia,
    StrokeRect,
    StrokeLine,
    StrokeArc,
    StrokeQuadCurve,
    StrokeBezierCurve,
    StrokePath,
    StrokeEllipse,
    ClearRect,
    BeginTransparencyLayer,
    EndTransparencyLayer,
    ApplyStrokePattern,
    ApplyFillPattern,
    ApplyDeviceScaleFactor,
);

// ─────────────────────────────────────────────────────────────────────────────
// ItemType
// ─────────────────────────────────────────────────────────────────────────────

/// Tag identifying the kind of an [`Item`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    Save,
    Restore,
    Translate,
    Rotate,
    Scale,
    SetCTM,
    ConcatenateCTM,
    SetInlineFillColor,
    SetInlineStrokeColor,
    SetStrokeThickness,
    SetState,
    SetLineCap,
    SetLineDash,
    SetLineJoin,
    SetMiterLimit,
    ClearShadow,
    Clip,
    ClipOut,
    ClipToImageBuffer,
    ClipOutToPath,
    ClipPath,
    DrawFilteredImageBuffer,
    DrawGlyphs,
    DrawImageBuffer,
    DrawNativeImage,
    DrawSystemImage,
    DrawPattern,
    DrawRect,
    DrawLine,
    DrawLinesForText,
    DrawDotsForDocumentMarker,
    DrawEllipse,
    DrawPath,
    DrawFocusRingPath,
    DrawFocusRingRects,
    FillRect,
    FillRectWithColor,
    FillRectWithGradient,
    FillCompositedRect,
    FillRoundedRect,
    FillRectWithRoundedHole,
    FillLine,
    FillArc,
    FillQuadCurve,
    FillBezierCurve,
    FillPath,
    FillEllipse,
    PaintFrameForMedia,
    StrokeRect,
    StrokeLine,
    StrokeArc,
    StrokeQuadCurve,
    StrokeBezierCurve,
    StrokePath,
    StrokeEllipse,
    ClearRect,
    BeginTransparencyLayer,
    EndTransparencyLayer,
    ApplyStrokePattern,
    ApplyFillPattern,
    ApplyDeviceScaleFactor,
}

impl ItemType {
    /// Every item type, in declaration order
    pub const ALL: [ItemType; 61] = [
        ItemType::Save,
        ItemType::Restore,
        ItemType::Translate,
        ItemType::Rotate,
        ItemType::Scale,
        ItemType::SetCTM,
        ItemType::ConcatenateCTM,
        ItemType::SetInlineFillColor,
        ItemType::SetInlineStrokeColor,
        ItemType::SetStrokeThickness,
        ItemType::SetState,
        ItemType::SetLineCap,
        ItemType::SetLineDash,
        ItemType::SetLineJoin,
        ItemType::SetMiterLimit,
        ItemType::ClearShadow,
        ItemType::Clip,
        ItemType::ClipOut,
        ItemType::ClipToImageBuffer,
        ItemType::ClipOutToPath,
        ItemType::ClipPath,
        ItemType::DrawFilteredImageBuffer,
        ItemType::DrawGlyphs,
        ItemType::DrawImageBuffer,
        ItemType::DrawNativeImage,
        ItemType::DrawSystemImage,
        ItemType::DrawPattern,
        ItemType::DrawRect,
        ItemType::DrawLine,
        ItemType::DrawLinesForText,
        ItemType::DrawDotsForDocumentMarker,
        ItemType::DrawEllipse,
        ItemType::DrawPath,
        ItemType::DrawFocusRingPath,
        ItemType::DrawFocusRingRects,
        ItemType::FillRect,
        ItemType::FillRectWithColor,
        ItemType::FillRectWithGradient,
        ItemType::FillCompositedRect,
        ItemType::FillRoundedRect,
        ItemType::FillRectWithRoundedHole,
        ItemType::FillLine,
        ItemType::FillArc,
        ItemType::FillQuadCurve,
        ItemType::FillBezierCurve,
        ItemType::FillPath,
        ItemType::FillEllipse,
        ItemType::PaintFrameForMedia,
        ItemType::StrokeRect,
        ItemType::StrokeLine,
        ItemType::StrokeArc,
        ItemType::StrokeQuadCurve,
        ItemType::StrokeBezierCurve,
        ItemType::StrokePath,
        ItemType::StrokeEllipse,
        ItemType::ClearRect,
        ItemType::BeginTransparencyLayer,
        ItemType::EndTransparencyLayer,
        ItemType::ApplyStrokePattern,
        ItemType::ApplyFillPattern,
        ItemType::ApplyDeviceScaleFactor,
    ];

    /// Name used in debug traces
    pub fn name(self) -> &'static str {
        match self {
            ItemType::Save => "save",
            ItemType::Restore => "restore",
            ItemType::Translate => "translate",
            ItemType::Rotate => "rotate",
            ItemType::Scale => "scale",
            ItemType::SetCTM => "set-ctm",
            ItemType::ConcatenateCTM => "concatenate-ctm",
            ItemType::SetInlineFillColor => "set-inline-fill-color",
            ItemType::SetInlineStrokeColor => "set-inline-stroke-color",
            ItemType::SetStrokeThickness => "set-stroke-thickness",
            ItemType::SetState => "set-state",
            ItemType::SetLineCap => "set-line-cap",
            ItemType::SetLineDash => "set-line-dash",
            ItemType::SetLineJoin => "set-line-join",
            ItemType::SetMiterLimit => "set-miter-limit",
            ItemType::ClearShadow => "clear-shadow",
            ItemType::Clip => "clip",
            ItemType::ClipOut => "clip-out",
            ItemType::ClipToImageBuffer => "clip-to-image-buffer",
            ItemType::ClipOutToPath => "clip-out-to-path",
            ItemType::ClipPath => "clip-path",
            ItemType::DrawFilteredImageBuffer => "draw-filtered-image-buffer",
            ItemType::DrawGlyphs => "draw-glyphs",
            ItemType::DrawImageBuffer => "draw-image-buffer",
            ItemType::DrawNativeImage => "draw-native-image",
            ItemType::DrawSystemImage => "draw-system-image",
            ItemType::DrawPattern => "draw-pattern",
            ItemType::DrawRect => "draw-rect",
            ItemType::DrawLine => "draw-line",
            ItemType::DrawLinesForText => "draw-lines-for-text",
            ItemType::DrawDotsForDocumentMarker => "draw-dots-for-document-marker",
            ItemType::DrawEllipse => "draw-ellipse",
            ItemType::DrawPath => "draw-path",
            ItemType::DrawFocusRingPath => "draw-focus-ring-path",
            ItemType::DrawFocusRingRects => "draw-focus-ring-rects",
            ItemType::FillRect => "fill-rect",
            ItemType::FillRectWithColor => "fill-rect-with-color",
            ItemType::FillRectWithGradient => "fill-rect-with-gradient",
            ItemType::FillCompositedRect => "fill-composited-rect",
            ItemType::FillRoundedRect => "fill-rounded-rect",
            ItemType::FillRectWithRoundedHole => "fill-rect-with-rounded-hole",
            ItemType::FillLine => "fill-line",
            ItemType::FillArc => "fill-arc",
            ItemType::FillQuadCurve => "fill-quad-curve",
            ItemType::FillBezierCurve => "fill-bezier-curve",
            ItemType::FillPath => "fill-path",
            ItemType::FillEllipse => "fill-ellipse",
            ItemType::PaintFrameForMedia => "paint-frame-for-media",
            ItemType::StrokeRect => "stroke-rect",
            ItemType::StrokeLine => "stroke-line",
            ItemType::StrokeArc => "stroke-arc",
            ItemType::StrokeQuadCurve => "stroke-quad-curve",
            ItemType::StrokeBezierCurve => "stroke-bezier-curve",
            ItemType::StrokePath => "stroke-path",
            ItemType::StrokeEllipse => "stroke-ellipse",
            ItemType::ClearRect => "clear-rect",
            ItemType::BeginTransparencyLayer => "begin-transparency-layer",
            ItemType::EndTransparencyLayer => "end-transparency-layer",
            ItemType::ApplyStrokePattern => "apply-stroke-pattern",
            ItemType::ApplyFillPattern => "apply-fill-pattern",
            ItemType::ApplyDeviceScaleFactor => "apply-device-scale-factor",
        }
    }

    /// Whether items of this type carry a resource identifier
    pub fn uses_resource(self) -> bool {
        matches!(
            self,
            ItemType::ClipToImageBuffer
                | ItemType::DrawFilteredImageBuffer
                | ItemType::DrawGlyphs
                | ItemType::DrawImageBuffer
                | ItemType::DrawNativeImage
                | ItemType::DrawPattern
                | ItemType::PaintFrameForMedia
        )
    }

    /// Whether the payload is fixed-size plain data with no owned buffers
    pub fn is_inline_item(self) -> bool {
        !matches!(
            self,
            ItemType::SetState
                | ItemType::SetLineDash
                | ItemType::ClipOutToPath
                | ItemType::ClipPath
                | ItemType::DrawFilteredImageBuffer
                | ItemType::DrawGlyphs
                | ItemType::DrawSystemImage
                | ItemType::DrawLinesForText
                | ItemType::DrawPath
                | ItemType::DrawFocusRingPath
                | ItemType::DrawFocusRingRects
                | ItemType::FillRectWithGradient
                | ItemType::FillPath
                | ItemType::StrokePath
        )
    }

    /// Whether applying this item can put pixels on the surface
    ///
    /// State, clip and layer bracketing items only change how later items
    /// draw.
    pub fn is_drawing_item(self) -> bool {
        !matches!(
            self,
            ItemType::Save
                | ItemType::Restore
                | ItemType::Translate
                | ItemType::Rotate
                | ItemType::Scale
                | ItemType::SetCTM
                | ItemType::ConcatenateCTM
                | ItemType::SetInlineFillColor
                | ItemType::SetInlineStrokeColor
                | ItemType::SetStrokeThickness
                | ItemType::SetState
                | ItemType::SetLineCap
                | ItemType::SetLineDash
                | ItemType::SetLineJoin
                | ItemType::SetMiterLimit
                | ItemType::ClearShadow
                | ItemType::Clip
                | ItemType::ClipOut
                | ItemType::ClipToImageBuffer
                | ItemType::ClipOutToPath
                | ItemType::ClipPath
                | ItemType::BeginTransparencyLayer
                | ItemType::EndTransparencyLayer
                | ItemType::ApplyStrokePattern
                | ItemType::ApplyFillPattern
                | ItemType::ApplyDeviceScaleFactor
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_all_item_types_are_distinct() {
        let types: FxHashSet<_> = ItemType::ALL.iter().copied().collect();
        assert_eq!(types.len(), ItemType::ALL.len());
        let names: FxHashSet<_> = ItemType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), ItemType::ALL.len());
    }

    #[test]
    fn test_names_are_kebab_case() {
        for item_type in ItemType::ALL {
            let name = item_type.name();
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{name}"
            );
        }
        assert_eq!(ItemType::SetCTM.name(), "set-ctm");
        assert_eq!(ItemType::DrawLinesForText.to_string(), "draw-lines-for-text");
    }

    #[test]
    fn test_resource_items_are_drawing_or_clip() {
        let resource_types: Vec<_> = ItemType::ALL
            .into_iter()
            .filter(|t| t.uses_resource())
            .collect();
        assert_eq!(resource_types.len(), 7);
        assert!(!ItemType::ClipToImageBuffer.is_drawing_item());
        assert!(ItemType::DrawGlyphs.is_drawing_item());
    }

    #[test]
    fn test_item_type_follows_payload() {
        let item = Item::from(Translate::new(1.0, 2.0));
        assert_eq!(item.item_type(), ItemType::Translate);
        assert_eq!(item.name(), "translate");
        assert!(!item.is_drawing_item());
        assert!(Item::from(ClearRect::new(tessel_core::Rect::ZERO)).is_drawing_item());
    }

    #[test]
    fn test_inline_items_own_no_buffers() {
        let out_of_line: Vec<_> = ItemType::ALL
            .into_iter()
            .filter(|t| !t.is_inline_item())
            .collect();
        assert_eq!(out_of_line.len(), 14);
        assert!(ItemType::Save.is_inline_item());
        assert!(ItemType::FillLine.is_inline_item());
        assert!(ItemType::DrawImageBuffer.is_inline_item());
        assert!(!ItemType::SetState.is_inline_item());
        assert!(!ItemType::DrawGlyphs.is_inline_item());
        assert!(!ItemType::StrokePath.is_inline_item());
    }
}
