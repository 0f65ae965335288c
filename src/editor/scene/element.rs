//! Text element types placed on the canvas.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Session-unique identifier of a text element.
///
/// Ids start at 1 and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Courier,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
}

impl FontFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Courier => "Courier",
            FontFamily::TimesNewRoman => "Times New Roman",
        }
    }

    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::Courier,
            FontFamily::TimesNewRoman,
        ]
    }

    pub fn is_monospace(&self) -> bool {
        matches!(self, FontFamily::Courier)
    }
}

/// One placed label.
///
/// `position` is the top-left anchor in canvas-local coordinates and is not
/// clamped to the canvas bounds. `font_size` is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub id: ElementId,
    pub content: String,
    pub position: Vec2,
    pub font_size: f32,
    pub font_family: FontFamily,
}

/// Position and font assigned to newly added elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDefaults {
    pub position: Vec2,
    pub font_size: f32,
    pub font_family: FontFamily,
}

impl Default for ElementDefaults {
    fn default() -> Self {
        use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_TEXT_X, DEFAULT_TEXT_Y};

        Self {
            position: Vec2::new(DEFAULT_TEXT_X, DEFAULT_TEXT_Y),
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::Arial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_family_display_names() {
        assert_eq!(FontFamily::Arial.display_name(), "Arial");
        assert_eq!(FontFamily::Courier.display_name(), "Courier");
        assert_eq!(FontFamily::TimesNewRoman.display_name(), "Times New Roman");
    }

    #[test]
    fn test_font_family_all_is_unique() {
        let all = FontFamily::all();
        assert_eq!(all.len(), 3);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_font_family_serializes_display_name() {
        let json = serde_json::to_string(&FontFamily::TimesNewRoman).unwrap();
        assert_eq!(json, "\"Times New Roman\"");
        let parsed: FontFamily = serde_json::from_str("\"Courier\"").unwrap();
        assert_eq!(parsed, FontFamily::Courier);
    }

    #[test]
    fn test_default_element_settings() {
        let defaults = ElementDefaults::default();
        assert_eq!(defaults.position, Vec2::new(150.0, 150.0));
        assert_eq!(defaults.font_size, 20.0);
        assert_eq!(defaults.font_family, FontFamily::Arial);
    }

    #[test]
    fn test_element_id_display() {
        assert_eq!(ElementId(7).to_string(), "#7");
    }
}
