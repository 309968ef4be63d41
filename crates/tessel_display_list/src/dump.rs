//! Debug traces of items

use std::fmt;

use crate::items::Item;
use crate::text_stream::{PropertySink, TextStream};

/// Item that can describe its payload as named properties
pub trait DumpProperties {
    /// Emit one property per stored field
    fn dump_properties(&self, sink: &mut dyn PropertySink);
}

impl Item {
    pub fn dump_properties(&self, sink: &mut dyn PropertySink) {
        match self {
            Item::Save(item) => item.dump_properties(sink),
            Item::Restore(item) => item.dump_properties(sink),
            Item::Translate(item) => item.dump_properties(sink),
            Item::Rotate(item) => item.dump_properties(sink),
            Item::Scale(item) => item.dump_properties(sink),
            Item::SetCTM(item) => item.dump_properties(sink),
            Item::ConcatenateCTM(item) => item.dump_properties(sink),
            Item::SetInlineFillColor(item) => item.dump_properties(sink),
            Item::SetInlineStrokeColor(item) => item.dump_properties(sink),
            Item::SetStrokeThickness(item) => item.dump_properties(sink),
            Item::SetState(item) => item.dump_properties(sink),
            Item::SetLineCap(item) => item.dump_properties(sink),
            Item::SetLineDash(item) => item.dump_properties(sink),
            Item::SetLineJoin(item) => item.dump_properties(sink),
            Item::SetMiterLimit(item) => item.dump_properties(sink),
            Item::ClearShadow(item) => item.dump_properties(sink),
            Item::Clip(item) => item.dump_properties(sink),
            Item::ClipOut(item) => item.dump_properties(sink),
            Item::ClipToImageBuffer(item) => item.dump_properties(sink),
            Item::ClipOutToPath(item) => item.dump_properties(sink),
            Item::ClipPath(item) => item.dump_properties(sink),
            Item::DrawFilteredImageBuffer(item) => item.dump_properties(sink),
            Item::DrawGlyphs(item) => item.dump_properties(sink),
            Item::DrawImageBuffer(item) => item.dump_properties(sink),
            Item::DrawNativeImage(item) => item.dump_properties(sink),
            Item::DrawSystemImage(item) => item.dump_properties(sink),
            Item::DrawPattern(item) => item.dump_properties(sink),
            Item::DrawRect(item) => item.dump_properties(sink),
            Item::DrawLine(item) => item.dump_properties(sink),
            Item::DrawLinesForText(item) => item.dump_properties(sink),
            Item::DrawDotsForDocumentMarker(item) => item.dump_properties(sink),
            Item::DrawEllipse(item) => item.dump_properties(sink),
            Item::DrawPath(item) => item.dump_properties(sink),
            Item::DrawFocusRingPath(item) => item.dump_properties(sink),
            Item::DrawFocusRingRects(item) => item.dump_properties(sink),
            Item::FillRect(item) => item.dump_properties(sink),
            Item::FillRectWithColor(item) => item.dump_properties(sink),
            Item::FillRectWithGradient(item) => item.dump_properties(sink),
            Item::FillCompositedRect(item) => item.dump_properties(sink),
            Item::FillRoundedRect(item) => item.dump_properties(sink),
            Item::FillRectWithRoundedHole(item) => item.dump_properties(sink),
            Item::FillLine(item) => item.dump_properties(sink),
            Item::FillArc(item) => item.dump_properties(sink),
            Item::FillQuadCurve(item) => item.dump_properties(sink),
            Item::FillBezierCurve(item) => item.dump_properties(sink),
            Item::FillPath(item) => item.dump_properties(sink),
            Item::FillEllipse(item) => item.dump_properties(sink),
            Item::PaintFrameForMedia(item) => item.dump_properties(sink),
            Item::StrokeRect(item) => item.dump_properties(sink),
            Item::StrokeLine(item) => item.dump_properties(sink),
            Item::StrokeArc(item) => item.dump_properties(sink),
            Item::StrokeQuadCurve(item) => item.dump_properties(sink),
            Item::StrokeBezierCurve(item) => item.dump_properties(sink),
            Item::StrokePath(item) => item.dump_properties(sink),
            Item::StrokeEllipse(item) => item.dump_properties(sink),
            Item::ClearRect(item) => item.dump_properties(sink),
            Item::BeginTransparencyLayer(item) => item.dump_properties(sink),
            Item::EndTransparencyLayer(item) => item.dump_properties(sink),
            Item::ApplyStrokePattern(item) => item.dump_properties(sink),
            Item::ApplyFillPattern(item) => item.dump_properties(sink),
            Item::ApplyDeviceScaleFactor(item) => item.dump_properties(sink),
        }
    }

    /// Write `(name` followed by the item's properties and `)`
    pub fn dump(&self, ts: &mut TextStream) {
        ts.begin_group(self.name());
        self.dump_properties(ts);
        ts.end_group();
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ts = TextStream::new();
        self.dump(&mut ts);
        f.write_str(ts.as_str())
    }
}
