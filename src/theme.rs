//! Centralized color theme for the application.
//!
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

/// Window background behind the egui panels
pub const WINDOW_BACKGROUND: Color = Color::srgb(0.16, 0.16, 0.18);

// ============================================================================
// Canvas Colors
// ============================================================================

pub const CANVAS_FILL: egui::Color32 = egui::Color32::WHITE;

pub const CANVAS_BORDER: egui::Color32 = egui::Color32::BLACK;

pub const LABEL_TEXT: egui::Color32 = egui::Color32::BLACK;

/// Outline around the selected label
pub const SELECTION_OUTLINE: egui::Color32 = egui::Color32::from_rgb(40, 120, 230);

/// Outline around the label under the pointer in Move mode
pub const HOVER_OUTLINE: egui::Color32 = egui::Color32::LIGHT_GRAY;

// ============================================================================
// Panel Colors
// ============================================================================

/// Fill of the bottom mode panel
pub const MODE_PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

pub const HINT_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;
