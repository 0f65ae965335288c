//! Unit tests for the history module.

use bevy::prelude::*;

use crate::editor::scene::{ElementDefaults, Scene, SceneStore};

use super::scene_history::SceneHistory;
use super::systems::{history_shortcut, HistoryShortcut};

fn scene_with(contents: &[&str]) -> Scene {
    let mut store = SceneStore::default();
    for content in contents {
        store
            .add_element(content, &ElementDefaults::default())
            .unwrap();
    }
    store.scene().clone()
}

#[test]
fn test_scene_history_record() {
    let mut history = SceneHistory::default();
    assert!(!history.can_undo());

    history.record(Scene::default());
    assert!(history.can_undo());
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_undo_swaps_live_scene() {
    let mut history = SceneHistory::default();
    let mut live = scene_with(&["a"]);
    history.record(Scene::default());

    assert!(history.undo(&mut live));
    assert!(live.is_empty());
    assert_eq!(history.redo_count(), 1);

    assert!(history.redo(&mut live));
    assert_eq!(live, scene_with(&["a"]));
    assert_eq!(history.undo_count(), 1);
    assert_eq!(history.redo_count(), 0);
}

#[test]
fn test_undo_on_empty_leaves_scene() {
    let mut history = SceneHistory::default();
    let mut live = scene_with(&["a"]);
    assert!(!history.undo(&mut live));
    assert!(!history.redo(&mut live));
    assert_eq!(live, scene_with(&["a"]));
}

#[test]
fn test_record_clears_redo() {
    let mut history = SceneHistory::default();
    let mut live = scene_with(&["a", "b"]);
    history.record(Scene::default());
    history.record(scene_with(&["a"]));

    history.undo(&mut live);
    assert!(history.can_redo());

    history.record(live.clone());
    assert!(!history.can_redo());
}

#[test]
fn test_redo_returns_most_recent_undo_first() {
    let mut history = SceneHistory::default();
    let s0 = Scene::default();
    let s1 = scene_with(&["a"]);
    let s2 = scene_with(&["a", "b"]);
    let mut live = s2.clone();
    history.record(s0.clone());
    history.record(s1.clone());

    history.undo(&mut live);
    history.undo(&mut live);
    assert_eq!(live, s0);

    history.redo(&mut live);
    assert_eq!(live, s1);
    history.redo(&mut live);
    assert_eq!(live, s2);
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut history = SceneHistory::with_limit(Some(3));
    for i in 0..10 {
        let contents: Vec<String> = (0..i).map(|n| n.to_string()).collect();
        let refs: Vec<&str> = contents.iter().map(String::as_str).collect();
        history.record(scene_with(&refs));
    }
    assert_eq!(history.undo_count(), 3);

    // Oldest surviving entry is the seventh recorded scene
    let mut live = Scene::default();
    history.undo(&mut live);
    history.undo(&mut live);
    history.undo(&mut live);
    assert_eq!(live.len(), 7);
}

#[test]
fn test_lowering_limit_trims_existing_entries() {
    let mut history = SceneHistory::default();
    for _ in 0..5 {
        history.record(Scene::default());
    }
    history.set_limit(Some(2));
    assert_eq!(history.undo_count(), 2);
}

#[test]
fn test_zero_limit_means_unlimited() {
    let mut history = SceneHistory::with_limit(Some(0));
    assert_eq!(history.limit(), None);

    history.record(Scene::default());
    history.record(scene_with(&["a"]));
    assert_eq!(history.undo_count(), 2);

    let mut live = scene_with(&["a", "b"]);
    assert!(history.undo(&mut live));
    assert_eq!(live, scene_with(&["a"]));

    history.set_limit(Some(0));
    assert_eq!(history.limit(), None);
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_undo_shortcut() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ControlLeft);
    keyboard.press(KeyCode::KeyZ);
    assert_eq!(history_shortcut(&keyboard), Some(HistoryShortcut::Undo));
}

#[test]
fn test_redo_shortcuts() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ControlRight);
    keyboard.press(KeyCode::KeyY);
    assert_eq!(history_shortcut(&keyboard), Some(HistoryShortcut::Redo));

    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ControlLeft);
    keyboard.press(KeyCode::ShiftLeft);
    keyboard.press(KeyCode::KeyZ);
    assert_eq!(history_shortcut(&keyboard), Some(HistoryShortcut::Redo));
}

#[test]
fn test_z_without_ctrl_is_not_a_shortcut() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyZ);
    assert_eq!(history_shortcut(&keyboard), None);
}
