mod common;

use std::thread;

use common::{every_item, sample_resources, FONT_ID, IMAGE_BUFFER_ID, NATIVE_IMAGE_ID};
use tessel_core::{AffineTransform, BlendMode, Color, Point, Rect, Size};
use tessel_display_list::testing::CallLogSurface;
use tessel_display_list::{
    DisplayList, DrawingSurface, FontSmoothingMode, GraphicsState,
    ImagePaintingOptions, ItemType, Recorder, ReplayConfig, Replayer, ResourceHeap,
};
use tessel_paint::{PathBuilder, RoundedRect, WindRule};

/// Draws a small scene touching state, clips, resources and layers
fn draw_scene(surface: &mut dyn DrawingSurface, resources: &ResourceHeap) {
    let triangle = PathBuilder::new()
        .move_to(0.0, 0.0)
        .line_to(20.0, 0.0)
        .line_to(10.0, 15.0)
        .close()
        .build();

    surface.save();
    surface.translate(5.0, 5.0);
    surface.set_fill_color(Color::RED);
    surface.update_state(&GraphicsState::new().with_stroke_thickness(3.0));
    surface.clip_path(&triangle, WindRule::NonZero);
    surface.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0));

    if let Some(buffer) = resources.image_buffer(IMAGE_BUFFER_ID) {
        surface.draw_image_buffer(
            buffer,
            Rect::new(0.0, 0.0, 16.0, 16.0),
            Rect::new(0.0, 0.0, 32.0, 32.0),
            ImagePaintingOptions::default(),
        );
    }
    if let Some(font) = resources.font(FONT_ID) {
        surface.draw_glyphs(
            font,
            &[1, 2, 3],
            &[Size::new(7.0, 0.0); 3],
            Point::new(0.0, 12.0),
            FontSmoothingMode::SubpixelAntialiased,
        );
    }
    if let Some(image) = resources.source_image(NATIVE_IMAGE_ID) {
        surface.draw_pattern(
            image,
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            &AffineTransform::IDENTITY,
            Point::ZERO,
            Size::ZERO,
            ImagePaintingOptions::default(),
        );
    }

    surface.begin_transparency_layer(0.5);
    surface.fill_rounded_rect(
        &RoundedRect::new(Rect::new(0.0, 0.0, 30.0, 30.0), 6.0),
        Color::BLUE,
        BlendMode::Normal,
    );
    surface.stroke_path(&triangle);
    surface.end_transparency_layer();
    surface.restore();
}

fn record_scene(resources: &ResourceHeap) -> DisplayList {
    let mut recorder = Recorder::new();
    draw_scene(&mut recorder, resources);
    recorder.into_display_list()
}

#[test]
fn test_replay_matches_direct_drawing() {
    let resources = sample_resources();

    let mut direct = CallLogSurface::new();
    draw_scene(&mut direct, &resources);

    let list = record_scene(&resources);
    let mut replayed = CallLogSurface::new();
    let summary = Replayer::new(&mut replayed, &resources)
        .replay(&list)
        .unwrap();

    assert_eq!(summary.items_applied, list.len());
    assert_eq!(summary.resources_resolved, 3);
    assert!(summary.is_balanced());
    assert_eq!(replayed.calls(), direct.calls());
}

#[test]
fn test_replay_on_another_thread() {
    let resources = sample_resources();
    let list = record_scene(&resources);
    let expected = list.len();

    let handle = thread::spawn(move || {
        let mut surface = CallLogSurface::new();
        let summary = Replayer::new(&mut surface, &resources)
            .with_config(ReplayConfig::testing())
            .replay(&list)
            .unwrap();
        (summary, surface.len())
    });

    let (summary, calls) = handle.join().unwrap();
    assert_eq!(summary.items_applied, expected);
    assert_eq!(calls, expected);
}

#[test]
fn test_replay_twice_gives_same_calls() {
    let resources = sample_resources();
    let list = record_scene(&resources);

    let mut first = CallLogSurface::new();
    Replayer::new(&mut first, &resources).replay(&list).unwrap();
    let mut second = CallLogSurface::new();
    Replayer::new(&mut second, &resources).replay(&list).unwrap();

    assert_eq!(first.calls(), second.calls());
}

#[test]
fn test_replay_exposes_filter_results() {
    let resources = sample_resources();
    let list: DisplayList = [ItemType::DrawFilteredImageBuffer]
        .into_iter()
        .map(common::sample_item)
        .collect();

    let mut surface = CallLogSurface::new();
    let mut replayer = Replayer::new(&mut surface, &resources);
    replayer.replay(&list).unwrap();
    assert!(replayer.filter_results().result(IMAGE_BUFFER_ID).is_some());
}

#[test]
fn test_json_round_trip_keeps_every_item() {
    let list: DisplayList = every_item().into_iter().collect();
    let json = serde_json::to_string(&list).unwrap();
    let parsed: DisplayList = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, list);
    assert_eq!(parsed.len(), ItemType::ALL.len());
}
