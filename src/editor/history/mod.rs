//! Undo/Redo system for canvas edits.
//!
//! Every committing edit (adding text, finishing a drag, changing a font)
//! stores a copy of the scene as it was before the edit. Undo swaps the live
//! scene with the newest stored copy; redo swaps it back.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last edit
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone edit
//!
//! ## Module Structure
//!
//! - [`scene_history`] - SceneHistory with the undo and redo stacks
//! - [`systems`] - Bevy systems for keyboard shortcuts

mod scene_history;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use scene_history::SceneHistory;
pub use systems::handle_history_shortcuts;
