//! The authoritative scene and the mutations it accepts.

use bevy::prelude::*;

use crate::editor::skip::Skip;

use super::element::{ElementDefaults, ElementId, FontFamily, TextElement};
use super::ids::IdAllocator;

/// Ordered text elements. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<TextElement>,
}

impl Scene {
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&TextElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut TextElement, Skip> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Skip::MissingElement(id))
    }
}

/// Owns the live scene and the id counter.
#[derive(Debug, Default)]
pub struct SceneStore {
    scene: Scene,
    ids: IdAllocator,
}

impl SceneStore {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access for history restores. Edits go through the methods below.
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn find_element(&self, id: ElementId) -> Option<&TextElement> {
        self.scene.get(id)
    }

    /// Append a new element. Blank content is skipped without consuming an id.
    ///
    /// A byte order mark alone also counts as blank.
    pub fn add_element(
        &mut self,
        content: &str,
        defaults: &ElementDefaults,
    ) -> Result<ElementId, Skip> {
        if content
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .is_empty()
        {
            return Err(Skip::BlankContent);
        }

        let id = self.ids.allocate();
        self.scene.elements.push(TextElement {
            id,
            content: content.to_string(),
            position: defaults.position,
            font_size: defaults.font_size,
            font_family: defaults.font_family,
        });
        Ok(id)
    }

    pub fn move_element(&mut self, id: ElementId, position: Vec2) -> Result<(), Skip> {
        self.scene.get_mut(id)?.position = position;
        Ok(())
    }

    pub fn set_font_size(&mut self, id: ElementId, size: f32) -> Result<(), Skip> {
        self.scene.get_mut(id)?.font_size = size;
        Ok(())
    }

    pub fn set_font_family(&mut self, id: ElementId, family: FontFamily) -> Result<(), Skip> {
        self.scene.get_mut(id)?.font_family = family;
        Ok(())
    }
}
