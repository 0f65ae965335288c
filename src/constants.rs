//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

/// Width of the drawing surface in canvas-local units
pub const CANVAS_WIDTH: f32 = 600.0;

/// Height of the drawing surface in canvas-local units
pub const CANVAS_HEIGHT: f32 = 400.0;

/// Position assigned to newly added text, relative to the canvas origin
pub const DEFAULT_TEXT_X: f32 = 150.0;
pub const DEFAULT_TEXT_Y: f32 = 150.0;

/// Font size assigned to newly added text
pub const DEFAULT_FONT_SIZE: f32 = 20.0;
