mod common;

use std::fmt;

use common::{every_item, sample_item};
use tessel_display_list::{DisplayList, ItemType, PropertySink, TextStream};

/// Sink that only remembers property names
#[derive(Default)]
struct NameSink {
    names: Vec<String>,
}

impl PropertySink for NameSink {
    fn dump_property(&mut self, name: &str, _value: &dyn fmt::Display) {
        self.names.push(name.to_string());
    }
}

fn expected_property_count(item_type: ItemType) -> usize {
    use ItemType as T;
    match item_type {
        T::Save
        | T::Restore
        | T::ClearShadow
        | T::EndTransparencyLayer
        | T::ApplyStrokePattern
        | T::ApplyFillPattern => 0,
        T::Rotate
        | T::Scale
        | T::SetCTM
        | T::ConcatenateCTM
        | T::SetInlineFillColor
        | T::SetInlineStrokeColor
        | T::SetStrokeThickness
        | T::SetState
        | T::SetLineCap
        | T::SetLineJoin
        | T::SetMiterLimit
        | T::Clip
        | T::ClipOut
        | T::ClipOutToPath
        | T::DrawEllipse
        | T::DrawPath
        | T::FillRect
        | T::FillLine
        | T::FillArc
        | T::FillQuadCurve
        | T::FillBezierCurve
        | T::FillPath
        | T::FillEllipse
        | T::StrokeArc
        | T::StrokeQuadCurve
        | T::StrokeBezierCurve
        | T::StrokePath
        | T::StrokeEllipse
        | T::ClearRect
        | T::BeginTransparencyLayer
        | T::ApplyDeviceScaleFactor => 1,
        T::Translate
        | T::SetLineDash
        | T::ClipToImageBuffer
        | T::ClipPath
        | T::DrawSystemImage
        | T::DrawRect
        | T::DrawLine
        | T::FillRectWithColor
        | T::FillRectWithGradient
        | T::PaintFrameForMedia
        | T::StrokeRect
        | T::StrokeLine => 2,
        T::DrawFilteredImageBuffer
        | T::DrawDotsForDocumentMarker
        | T::FillRoundedRect
        | T::FillRectWithRoundedHole => 3,
        T::DrawImageBuffer
        | T::DrawFocusRingPath
        | T::DrawFocusRingRects
        | T::FillCompositedRect => 4,
        T::DrawNativeImage => 5,
        T::DrawGlyphs => 6,
        T::DrawPattern | T::DrawLinesForText => 7,
    }
}

#[test]
fn test_property_counts() {
    for item in every_item() {
        let mut sink = NameSink::default();
        item.dump_properties(&mut sink);
        assert_eq!(
            sink.names.len(),
            expected_property_count(item.item_type()),
            "{}: {:?}",
            item.name(),
            sink.names
        );
    }
}

#[test]
fn test_property_names_are_kebab_case() {
    for item in every_item() {
        let mut sink = NameSink::default();
        item.dump_properties(&mut sink);
        for name in sink.names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{}: {name}",
                item.name()
            );
        }
    }
}

#[test]
fn test_every_dump_opens_with_its_name() {
    for item in every_item() {
        let mut ts = TextStream::new();
        item.dump(&mut ts);
        let out = ts.into_string();
        assert!(out.starts_with(&format!("({}", item.name())), "{out}");
        assert!(out.ends_with(')'), "{out}");
    }
}

#[test]
fn test_translate_dump() {
    let item = sample_item(ItemType::Translate);
    assert_eq!(item.to_string(), "(translate\n  (x 3)\n  (y 4))");
}

#[test]
fn test_list_dump_nests_items() {
    let list: DisplayList = [ItemType::Save, ItemType::Clip, ItemType::Restore]
        .into_iter()
        .map(sample_item)
        .collect();
    let out = list.to_string();

    assert!(out.starts_with("(display-list"));
    assert!(out.contains("\n  (save)"));
    assert!(out.contains("\n  (clip\n    (rect "));
    assert!(out.contains("\n  (restore)"));
}
