//! The canvas session: scene store, history, drag gesture and selection.
//!
//! Every committing edit follows the same order: copy the live scene, apply
//! the edit to the store, and record the copy only if the edit applied. Drag
//! gestures copy the scene when the gesture starts and record it once when the
//! gesture ends, so a whole drag undoes in one step.

use bevy::prelude::*;

use super::history::SceneHistory;
use super::scene::{ElementDefaults, ElementId, FontFamily, Scene, SceneStore, TextElement};
use super::skip::Skip;
use super::tools::EditorMode;

/// Drag gesture state
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: ElementId,
        /// Scene before the gesture started
        origin: Scene,
    },
}

#[derive(Resource, Default)]
pub struct CanvasSession {
    store: SceneStore,
    history: SceneHistory,
    drag: DragState,
    selected: Option<ElementId>,
    defaults: ElementDefaults,
}

impl CanvasSession {
    pub fn new(defaults: ElementDefaults, history_limit: Option<usize>) -> Self {
        Self {
            history: SceneHistory::with_limit(history_limit),
            defaults,
            ..Default::default()
        }
    }

    /// Apply new creation defaults and history limit from config
    pub fn configure(&mut self, defaults: ElementDefaults, history_limit: Option<usize>) {
        self.defaults = defaults;
        self.history.set_limit(history_limit);
    }

    pub fn scene(&self) -> &Scene {
        self.store.scene()
    }

    pub fn history(&self) -> &SceneHistory {
        &self.history
    }

    pub fn find_element(&self, id: ElementId) -> Option<&TextElement> {
        self.store.find_element(id)
    }

    pub fn add_text(&mut self, content: &str) -> Result<ElementId, Skip> {
        let snapshot = self.store.scene().clone();
        let id = self.store.add_element(content, &self.defaults)?;
        self.history.record(snapshot);
        debug!("Added text element {}", id);
        Ok(id)
    }

    /// Start dragging `id`. Only valid in Move mode and for an existing element.
    pub fn begin_move(&mut self, mode: Option<EditorMode>, id: ElementId) -> Result<(), Skip> {
        if mode != Some(EditorMode::Move) {
            return Err(Skip::NotMoveMode);
        }
        if self.store.find_element(id).is_none() {
            return Err(Skip::MissingElement(id));
        }

        // A gesture left open (e.g. release never delivered) is committed first
        let _ = self.end_move();

        self.drag = DragState::Dragging {
            id,
            origin: self.store.scene().clone(),
        };
        self.selected = Some(id);
        debug!("Started dragging {}", id);
        Ok(())
    }

    /// Move the dragged element to a canvas-local position. Not recorded.
    pub fn update_move(&mut self, position: Vec2) -> Result<(), Skip> {
        let DragState::Dragging { id, .. } = self.drag else {
            return Err(Skip::NotDragging);
        };
        self.store.move_element(id, position)
    }

    /// Finish the drag gesture and record it as one history entry.
    pub fn end_move(&mut self) -> Result<(), Skip> {
        let DragState::Dragging { id, origin } = std::mem::take(&mut self.drag) else {
            return Err(Skip::NotDragging);
        };
        self.history.record(origin);
        debug!("Finished dragging {}", id);
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    #[cfg(test)]
    pub fn dragged_id(&self) -> Option<ElementId> {
        match self.drag {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn set_font_size(&mut self, id: ElementId, size: f32) -> Result<(), Skip> {
        let snapshot = self.store.scene().clone();
        self.store.set_font_size(id, size)?;
        self.history.record(snapshot);
        debug!("Set font size of {} to {}", id, size);
        Ok(())
    }

    pub fn set_font_family(&mut self, id: ElementId, family: FontFamily) -> Result<(), Skip> {
        let snapshot = self.store.scene().clone();
        self.store.set_font_family(id, family)?;
        self.history.record(snapshot);
        debug!("Set font family of {} to {}", id, family.display_name());
        Ok(())
    }

    /// Restore the previous scene. No-op when there is nothing to undo.
    pub fn undo(&mut self) -> &Scene {
        let _ = self.end_move();
        if self.history.undo(self.store.scene_mut()) {
            debug!(
                "Undo ({} left, {} redoable)",
                self.history.undo_count(),
                self.history.redo_count()
            );
        }
        self.store.scene()
    }

    /// Restore the most recently undone scene. No-op when there is nothing to redo.
    pub fn redo(&mut self) -> &Scene {
        let _ = self.end_move();
        if self.history.redo(self.store.scene_mut()) {
            debug!(
                "Redo ({} undoable, {} left)",
                self.history.undo_count(),
                self.history.redo_count()
            );
        }
        self.store.scene()
    }

    /// The selected element, if it still exists in the live scene
    pub fn selected_element(&self) -> Option<&TextElement> {
        self.selected.and_then(|id| self.store.find_element(id))
    }

    pub fn select(&mut self, id: ElementId) -> Result<(), Skip> {
        if self.store.find_element(id).is_none() {
            return Err(Skip::MissingElement(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
