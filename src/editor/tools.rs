use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use super::session::CanvasSession;

/// Interaction mode selecting which input affordances are active.
///
/// The mode never mutates the scene; it is passed explicitly to the canvas
/// event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Move,
    Font,
}

impl EditorMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorMode::Add => "Add Text (A)",
            EditorMode::Move => "Move Text (M)",
            EditorMode::Font => "Change Font (F)",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            EditorMode::Add => "Add Text",
            EditorMode::Move => "Move Text",
            EditorMode::Font => "Change Font",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            EditorMode::Add => CursorIcon::System(SystemCursorIcon::Default),
            EditorMode::Move => CursorIcon::System(SystemCursorIcon::Move),
            EditorMode::Font => CursorIcon::System(SystemCursorIcon::Pointer),
        }
    }

    pub fn all() -> &'static [EditorMode] {
        &[EditorMode::Add, EditorMode::Move, EditorMode::Font]
    }

    /// Mode selected by a single-key shortcut
    pub fn from_shortcut(key: KeyCode) -> Option<EditorMode> {
        match key {
            KeyCode::KeyA => Some(EditorMode::Add),
            KeyCode::KeyM => Some(EditorMode::Move),
            KeyCode::KeyF => Some(EditorMode::Font),
            _ => None,
        }
    }
}

/// Currently selected mode; `None` until the user picks one
#[derive(Resource, Default)]
pub struct CurrentMode {
    pub mode: Option<EditorMode>,
}

pub fn handle_mode_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_mode: ResMut<CurrentMode>,
    mut session: ResMut<CanvasSession>,
    mut contexts: EguiContexts,
) {
    // Don't change modes if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        session.clear_selection();
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    let new_mode = keyboard
        .get_just_pressed()
        .find_map(|key| EditorMode::from_shortcut(*key));

    if let Some(mode) = new_mode
        && current_mode.mode != Some(mode)
    {
        info!("Switched to {} mode", mode.button_label());
        current_mode.mode = Some(mode);
    }
}

/// Leaving Move mode resolves any drag still in progress.
pub fn end_drag_outside_move_mode(
    current_mode: Res<CurrentMode>,
    mut session: ResMut<CanvasSession>,
) {
    if current_mode.mode != Some(EditorMode::Move) && session.is_dragging() {
        let _ = session.end_move();
    }
}

pub fn update_cursor_icon(
    current_mode: Res<CurrentMode>,
    mut window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let Ok((entity, _window)) = window_query.single_mut() else {
        return;
    };

    let icon = current_mode
        .mode
        .map(|mode| mode.cursor_icon())
        .unwrap_or(CursorIcon::System(SystemCursorIcon::Default));
    commands.entity(entity).insert(icon);
}
