//! Undo and redo stacks of scene snapshots.

use crate::editor::scene::Scene;

/// Snapshot history for undo/redo
///
/// Every entry is an owned copy of a whole scene, so later edits to the live
/// scene can never reach back into a stored snapshot.
#[derive(Debug, Default)]
pub struct SceneHistory {
    /// Scenes to return to on undo (most recent last)
    undo_stack: Vec<Scene>,
    /// Scenes to return to on redo (most recent last)
    redo_stack: Vec<Scene>,
    /// Maximum undo depth, unlimited when `None`. Never `Some(0)`.
    limit: Option<usize>,
}

impl SceneHistory {
    pub fn with_limit(limit: Option<usize>) -> Self {
        let mut history = Self::default();
        history.set_limit(limit);
        history
    }

    /// A limit of zero would discard every entry, so it means unlimited.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.filter(|&n| n > 0);
        self.trim();
    }

    #[cfg(test)]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record the scene as it was before a committing edit
    pub fn record(&mut self, snapshot: Scene) {
        // Any new edit invalidates the redo branch
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        self.trim();
    }

    /// Step back one entry, swapping `live` with the restored snapshot.
    ///
    /// Returns false and leaves `live` alone when there is nothing to undo.
    pub fn undo(&mut self, live: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(live, previous);
        self.redo_stack.push(current);
        true
    }

    /// Step forward to the most recently undone scene.
    pub fn redo(&mut self, live: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(live, next);
        self.undo_stack.push(current);
        self.trim();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit
            && self.undo_stack.len() > limit
        {
            let excess = self.undo_stack.len() - limit;
            self.undo_stack.drain(..excess);
        }
    }
}
