//! Renders the scene onto the bounded canvas and turns pointer input into
//! canvas-local [`CanvasEvent`]s.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FONT_SIZE};
use crate::editor::{CanvasEvent, CanvasSession, CurrentMode, EditorMode, TextElement};
use crate::theme;

/// Convert a window-space pointer position to canvas-local coordinates
pub fn to_canvas_local(pointer: egui::Pos2, canvas_origin: egui::Pos2) -> Vec2 {
    let local = pointer - canvas_origin;
    Vec2::new(local.x, local.y)
}

/// Font used to draw a label. Sizes egui cannot render fall back to the default.
pub fn label_font(element: &TextElement) -> egui::FontId {
    let size = if element.font_size.is_finite() && element.font_size > 0.0 {
        element.font_size
    } else {
        DEFAULT_FONT_SIZE
    };
    let family = if element.font_family.is_monospace() {
        egui::FontFamily::Monospace
    } else {
        egui::FontFamily::Proportional
    };
    egui::FontId::new(size, family)
}

pub fn canvas_ui(
    mut contexts: EguiContexts,
    session: Res<CanvasSession>,
    current_mode: Res<CurrentMode>,
    mut events: MessageWriter<CanvasEvent>,
) -> Result {
    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            let (response, painter) = ui.allocate_painter(
                egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT),
                egui::Sense::click_and_drag(),
            );
            // The painter clips to the canvas rect
            let canvas = response.rect;

            painter.rect_filled(canvas, 0.0, theme::CANVAS_FILL);
            painter.rect_stroke(
                canvas,
                0.0,
                egui::Stroke::new(1.0, theme::CANVAS_BORDER),
                egui::StrokeKind::Inside,
            );

            let hover = response.hover_pos();
            let selected = session.selected_element().map(|e| e.id);
            let mut hovered = None;

            // Later labels draw on top, so the last hit wins
            for element in session.scene().elements() {
                let anchor = canvas.min + egui::vec2(element.position.x, element.position.y);
                let text_rect = painter.text(
                    anchor,
                    egui::Align2::LEFT_TOP,
                    &element.content,
                    label_font(element),
                    theme::LABEL_TEXT,
                );

                if selected == Some(element.id) {
                    painter.rect_stroke(
                        text_rect.expand(2.0),
                        2.0,
                        egui::Stroke::new(1.0, theme::SELECTION_OUTLINE),
                        egui::StrokeKind::Outside,
                    );
                }

                if hover.is_some_and(|pos| text_rect.contains(pos)) {
                    hovered = Some((element.id, text_rect));
                }
            }

            if current_mode.mode == Some(EditorMode::Move)
                && !session.is_dragging()
                && let Some((_, rect)) = hovered
            {
                painter.rect_stroke(
                    rect.expand(2.0),
                    2.0,
                    egui::Stroke::new(1.0, theme::HOVER_OUTLINE),
                    egui::StrokeKind::Outside,
                );
            }

            let (pressed, released, latest) = ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.latest_pos(),
                )
            });

            if pressed && response.hovered() {
                events.write(CanvasEvent::PointerDown {
                    target: hovered.map(|(id, _)| id),
                });
            }

            if session.is_dragging()
                && let Some(pos) = latest
            {
                events.write(CanvasEvent::PointerMove {
                    position: to_canvas_local(pos, canvas.min),
                });
            }

            // Released anywhere in the window, not only over the canvas
            if released {
                events.write(CanvasEvent::PointerUp);
            }
        });
    });
    Ok(())
}
