//! Unit tests for the scene store.

use bevy::prelude::*;

use crate::editor::skip::Skip;

use super::element::{ElementDefaults, ElementId, FontFamily};
use super::store::SceneStore;

fn store_with(contents: &[&str]) -> SceneStore {
    let mut store = SceneStore::default();
    for content in contents {
        store
            .add_element(content, &ElementDefaults::default())
            .unwrap();
    }
    store
}

#[test]
fn test_add_element_uses_defaults() {
    let mut store = SceneStore::default();
    let id = store
        .add_element("Hello", &ElementDefaults::default())
        .unwrap();

    assert_eq!(id, ElementId(1));
    let element = store.find_element(id).unwrap();
    assert_eq!(element.content, "Hello");
    assert_eq!(element.position, Vec2::new(150.0, 150.0));
    assert_eq!(element.font_size, 20.0);
    assert_eq!(element.font_family, FontFamily::Arial);
}

#[test]
fn test_add_element_keeps_untrimmed_content() {
    let mut store = SceneStore::default();
    let id = store
        .add_element("  padded ", &ElementDefaults::default())
        .unwrap();
    assert_eq!(store.find_element(id).unwrap().content, "  padded ");
}

#[test]
fn test_add_blank_content_is_skipped() {
    let mut store = SceneStore::default();
    for blank in ["", " ", "\t\n", "   ", "\u{FEFF}", " \u{FEFF}\u{3000}"] {
        assert_eq!(
            store.add_element(blank, &ElementDefaults::default()),
            Err(Skip::BlankContent)
        );
    }
    assert!(store.scene().is_empty());

    // No id was consumed by the skipped adds
    let id = store
        .add_element("\u{FEFF}text", &ElementDefaults::default())
        .unwrap();
    assert_eq!(id, ElementId(1));
    assert_eq!(store.find_element(id).unwrap().content, "\u{FEFF}text");
}

#[test]
fn test_add_element_custom_defaults() {
    let defaults = ElementDefaults {
        position: Vec2::new(10.0, -5.0),
        font_size: 48.0,
        font_family: FontFamily::Courier,
    };
    let mut store = SceneStore::default();
    let id = store.add_element("Custom", &defaults).unwrap();
    let element = store.find_element(id).unwrap();
    assert_eq!(element.position, Vec2::new(10.0, -5.0));
    assert_eq!(element.font_size, 48.0);
    assert_eq!(element.font_family, FontFamily::Courier);
}

#[test]
fn test_insertion_order_is_display_order() {
    let store = store_with(&["a", "b", "c"]);
    let contents: Vec<&str> = store
        .scene()
        .elements()
        .iter()
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[test]
fn test_move_element_only_changes_position() {
    let mut store = store_with(&["a", "b"]);
    let before = store.find_element(ElementId(2)).unwrap().clone();

    store
        .move_element(ElementId(2), Vec2::new(-40.0, 900.0))
        .unwrap();

    let after = store.find_element(ElementId(2)).unwrap();
    assert_eq!(after.position, Vec2::new(-40.0, 900.0));
    assert_eq!(after.content, before.content);
    assert_eq!(after.font_size, before.font_size);
    assert_eq!(after.font_family, before.font_family);
    // Untargeted element untouched
    assert_eq!(
        store.find_element(ElementId(1)).unwrap().position,
        Vec2::new(150.0, 150.0)
    );
}

#[test]
fn test_move_missing_element_leaves_scene_identical() {
    let mut store = store_with(&["a"]);
    let before = store.scene().clone();

    assert_eq!(
        store.move_element(ElementId(99), Vec2::new(1.0, 1.0)),
        Err(Skip::MissingElement(ElementId(99)))
    );
    assert_eq!(store.scene(), &before);
}

#[test]
fn test_set_font_size_and_family() {
    let mut store = store_with(&["a"]);
    store.set_font_size(ElementId(1), 32.0).unwrap();
    store
        .set_font_family(ElementId(1), FontFamily::TimesNewRoman)
        .unwrap();

    let element = store.find_element(ElementId(1)).unwrap();
    assert_eq!(element.font_size, 32.0);
    assert_eq!(element.font_family, FontFamily::TimesNewRoman);
    assert_eq!(element.position, Vec2::new(150.0, 150.0));
}

#[test]
fn test_font_size_is_not_clamped() {
    let mut store = store_with(&["a"]);
    store.set_font_size(ElementId(1), 0.0).unwrap();
    assert_eq!(store.find_element(ElementId(1)).unwrap().font_size, 0.0);
    store.set_font_size(ElementId(1), 10_000.0).unwrap();
    assert_eq!(store.find_element(ElementId(1)).unwrap().font_size, 10_000.0);
}

#[test]
fn test_restyle_missing_element_is_skipped() {
    let mut store = store_with(&["a"]);
    let before = store.scene().clone();
    assert_eq!(
        store.set_font_size(ElementId(5), 12.0),
        Err(Skip::MissingElement(ElementId(5)))
    );
    assert_eq!(
        store.set_font_family(ElementId(5), FontFamily::Courier),
        Err(Skip::MissingElement(ElementId(5)))
    );
    assert_eq!(store.scene(), &before);
}

#[test]
fn test_ids_not_reused_after_scene_restore() {
    let mut store = store_with(&["a", "b"]);
    // Simulate an undo back to the empty scene
    *store.scene_mut() = Default::default();

    let id = store
        .add_element("c", &ElementDefaults::default())
        .unwrap();
    assert_eq!(id, ElementId(3));
}
