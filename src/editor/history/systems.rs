//! Bevy systems for handling undo/redo keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::super::session::CanvasSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryShortcut {
    Undo,
    Redo,
}

/// Ctrl+Z = undo, Ctrl+Y or Ctrl+Shift+Z = redo
pub fn history_shortcut(keyboard: &ButtonInput<KeyCode>) -> Option<HistoryShortcut> {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if !ctrl {
        return None;
    }
    if keyboard.just_pressed(KeyCode::KeyY) || (shift && keyboard.just_pressed(KeyCode::KeyZ)) {
        Some(HistoryShortcut::Redo)
    } else if keyboard.just_pressed(KeyCode::KeyZ) {
        Some(HistoryShortcut::Undo)
    } else {
        None
    }
}

/// System to handle undo/redo keyboard shortcuts
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<CanvasSession>,
    mut contexts: EguiContexts,
) {
    // Text fields keep their own undo
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    match history_shortcut(&keyboard) {
        Some(HistoryShortcut::Undo) => {
            session.undo();
        }
        Some(HistoryShortcut::Redo) => {
            session.redo();
        }
        None => {}
    }
}
