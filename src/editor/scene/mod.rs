//! Scene model: text elements, id allocation and the scene store.
//!
//! ## Module Structure
//!
//! - [`element`] - TextElement, ElementId, FontFamily and creation defaults
//! - [`ids`] - Monotonic session id counter
//! - [`store`] - Scene and SceneStore with the add/move/restyle mutations

mod element;
mod ids;
mod store;

#[cfg(test)]
mod tests;

pub use element::{ElementDefaults, ElementId, FontFamily, TextElement};
pub use store::{Scene, SceneStore};
