//! Pointer events from the canvas view and how each mode interprets them.

use bevy::prelude::*;

use super::scene::ElementId;
use super::session::CanvasSession;
use super::skip::Skip;
use super::tools::{CurrentMode, EditorMode};

/// Pointer input already translated into canvas-local space
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed over the canvas, on top of `target` if any
    PointerDown { target: Option<ElementId> },
    /// Pointer moved to a canvas-local position
    PointerMove { position: Vec2 },
    /// Primary button released anywhere in the window
    PointerUp,
}

/// Apply one event under the given mode.
pub fn apply_canvas_event(
    session: &mut CanvasSession,
    mode: Option<EditorMode>,
    event: CanvasEvent,
) -> Result<(), Skip> {
    match event {
        CanvasEvent::PointerDown { target } => match (mode, target) {
            (Some(EditorMode::Move), Some(id)) => session.begin_move(mode, id),
            (Some(EditorMode::Font), Some(id)) => session.select(id),
            (Some(EditorMode::Move | EditorMode::Font), None) => {
                session.clear_selection();
                Ok(())
            }
            _ => Ok(()),
        },
        CanvasEvent::PointerMove { position } => session.update_move(position),
        CanvasEvent::PointerUp => session.end_move(),
    }
}

pub fn handle_canvas_events(
    mut events: MessageReader<CanvasEvent>,
    current_mode: Res<CurrentMode>,
    mut session: ResMut<CanvasSession>,
) {
    for event in events.read() {
        if let Err(skip) = apply_canvas_event(&mut session, current_mode.mode, *event) {
            // Moves and releases outside a gesture are routine
            if !matches!(skip, Skip::NotDragging) {
                debug!("Ignored {:?}: {}", event, skip);
            }
        }
    }
}

/// Window-wide release so a drag that ends off the canvas still resolves.
pub fn end_drag_on_release(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut session: ResMut<CanvasSession>,
) {
    if mouse_button.just_released(MouseButton::Left) && session.is_dragging() {
        let _ = session.end_move();
    }
}
