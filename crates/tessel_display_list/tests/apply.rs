mod common;

use common::{every_item, expected_call, sample_item, sample_resources};
use tessel_display_list::testing::{CallLogSurface, SurfaceCall};
use tessel_display_list::{ApplyError, FilterResults, ItemType, ResourceHeap};

#[test]
fn test_every_item_makes_exactly_one_call() {
    let resources = sample_resources();
    for item in every_item() {
        let mut results = FilterResults::new();
        // End only reaches the surface from inside a layer
        let mut surface = CallLogSurface::new().with_transparency_layers(1);
        let resolved = item
            .apply_with_resources(&mut surface, &resources, &mut results)
            .unwrap();

        assert_eq!(
            surface.calls(),
            &[expected_call(item.item_type())],
            "{} forwarded the wrong call",
            item.name()
        );
        assert_eq!(resolved, item.item_type().uses_resource(), "{}", item.name());
    }
}

#[test]
fn test_resource_items_require_heap() {
    for item_type in ItemType::ALL.into_iter().filter(|t| t.uses_resource()) {
        let item = sample_item(item_type);
        let mut surface = CallLogSurface::new();
        assert_eq!(
            item.apply(&mut surface),
            Err(ApplyError::ResourceRequired(item_type))
        );
        assert!(surface.is_empty());
    }
}

#[test]
fn test_plain_items_apply_without_heap() {
    for item_type in ItemType::ALL.into_iter().filter(|t| !t.uses_resource()) {
        let mut surface = CallLogSurface::new().with_transparency_layers(1);
        sample_item(item_type).apply(&mut surface).unwrap();
        assert_eq!(surface.calls(), &[expected_call(item_type)], "{item_type}");
    }
}

#[test]
fn test_missing_resource_leaves_surface_untouched() {
    let empty = ResourceHeap::new();
    for item_type in ItemType::ALL.into_iter().filter(|t| t.uses_resource()) {
        let item = sample_item(item_type);
        let mut results = FilterResults::new();
        let mut surface = CallLogSurface::new();
        let result = item.apply_with_resources(&mut surface, &empty, &mut results);
        assert!(
            matches!(result, Err(ApplyError::MissingResource { item_type: t, .. }) if t == item_type),
            "{item_type}: {result:?}"
        );
        assert!(surface.is_empty());
    }
}

#[test]
fn test_filtered_draw_without_source_still_draws() {
    use tessel_core::Rect;
    use tessel_display_list::items::DrawFilteredImageBuffer;
    use tessel_display_list::{Filter, Item};

    let item = Item::from(DrawFilteredImageBuffer::new(
        None,
        Rect::new(0.0, 0.0, 4.0, 4.0),
        Filter::new(Vec::new(), Rect::new(0.0, 0.0, 4.0, 4.0)),
    ));
    let mut results = FilterResults::new();
    let mut surface = CallLogSurface::new();
    let resolved = item
        .apply_with_resources(&mut surface, &ResourceHeap::new(), &mut results)
        .unwrap();

    assert!(!resolved);
    assert_eq!(surface.len(), 1);
    assert!(results.is_empty());
}

#[test]
fn test_end_transparency_layer_outside_layer_is_skipped() {
    let item = sample_item(ItemType::EndTransparencyLayer);
    let mut surface = CallLogSurface::new();
    item.apply(&mut surface).unwrap();
    assert!(surface.is_empty());
}

#[test]
fn test_filtered_draw_caches_result() {
    let resources = sample_resources();
    let item = sample_item(ItemType::DrawFilteredImageBuffer);
    let mut results = FilterResults::new();
    let mut surface = CallLogSurface::new();
    item.apply_with_resources(&mut surface, &resources, &mut results)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results.result(common::IMAGE_BUFFER_ID).is_some());
}

#[test]
fn test_pattern_prefers_native_image() {
    let resources = sample_resources();
    let item = sample_item(ItemType::DrawPattern);
    let mut results = FilterResults::new();
    let mut surface = CallLogSurface::new();
    item.apply_with_resources(&mut surface, &resources, &mut results)
        .unwrap();

    assert!(matches!(
        surface.last_call(),
        Some(SurfaceCall::DrawPattern { is_native_image: true, image, .. }) if *image == common::NATIVE_IMAGE_ID
    ));
}
