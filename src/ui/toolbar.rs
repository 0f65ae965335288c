use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::{CanvasSession, CurrentMode, EditorMode};

/// Main toolbar: undo/redo and mode buttons
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_mode: ResMut<CurrentMode>,
    mut session: ResMut<CanvasSession>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let history = session.history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
                let (undo_count, redo_count) = (history.undo_count(), history.redo_count());

                let undo = ui
                    .add_enabled(can_undo, egui::Button::new("Undo"))
                    .on_hover_text(format!("Ctrl+Z ({} steps)", undo_count));
                if undo.clicked() {
                    session.undo();
                }

                let redo = ui
                    .add_enabled(can_redo, egui::Button::new("Redo"))
                    .on_hover_text(format!("Ctrl+Y ({} steps)", redo_count));
                if redo.clicked() {
                    session.redo();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                for mode in EditorMode::all() {
                    let selected = current_mode.mode == Some(*mode);

                    let button = egui::Button::new(
                        egui::RichText::new(mode.button_label()).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    let response = ui.add(button);
                    if response.clicked() {
                        info!("Switched to {} mode", mode.button_label());
                        current_mode.mode = Some(*mode);
                    }
                    response.on_hover_text(mode.display_name());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} labels", session.scene().len()))
                            .color(egui::Color32::GRAY),
                    );
                });
            });
        });
    Ok(())
}
