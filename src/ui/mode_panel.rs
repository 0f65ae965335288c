//! Bottom panel with the controls of the active mode.
//!
//! Add mode shows the new-text field. Font mode shows size and family
//! controls for the selected label.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::SetDefaultFontRequest;
use crate::editor::skip::Skip;
use crate::editor::{CanvasSession, CurrentMode, EditorMode, ElementId, FontFamily};
use crate::theme;

#[derive(Resource, Default)]
pub struct AddTextState {
    pub buffer: String,
    /// Focus the field on the next frame
    pub request_focus: bool,
}

#[derive(Resource, Default)]
pub struct FontPanelState {
    /// Size being scrubbed with the drag value, committed on release
    pub size_draft: Option<f32>,
}

/// Add the buffered text; the buffer is cleared only when text was added.
pub fn submit_text(session: &mut CanvasSession, buffer: &mut String) -> Result<ElementId, Skip> {
    let id = session.add_text(buffer)?;
    buffer.clear();
    Ok(id)
}

/// Log a skipped font edit the same way skipped adds are logged
fn font_edit_applied(result: Result<(), Skip>, property: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(skip) => {
            debug!("Font {} not changed: {}", property, skip);
            false
        }
    }
}

pub fn mode_panel_ui(
    mut contexts: EguiContexts,
    current_mode: Res<CurrentMode>,
    mut session: ResMut<CanvasSession>,
    mut add_state: ResMut<AddTextState>,
    mut font_state: ResMut<FontPanelState>,
    mut default_font_events: MessageWriter<SetDefaultFontRequest>,
) -> Result {
    let Some(mode) = current_mode.mode else {
        return Ok(());
    };

    egui::TopBottomPanel::bottom("mode_panel")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 10))
                .fill(theme::MODE_PANEL_FILL),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                match mode {
                    EditorMode::Add => add_text_controls(ui, &mut session, &mut add_state),
                    EditorMode::Move => {
                        ui.label(
                            egui::RichText::new("Drag a label to move it")
                                .color(theme::HINT_TEXT),
                        );
                    }
                    EditorMode::Font => font_controls(
                        ui,
                        &mut session,
                        &mut font_state,
                        &mut default_font_events,
                    ),
                }
            });
        });
    Ok(())
}

fn add_text_controls(ui: &mut egui::Ui, session: &mut CanvasSession, state: &mut AddTextState) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.buffer)
            .hint_text("Enter text")
            .desired_width(260.0),
    );
    if state.request_focus {
        response.request_focus();
        state.request_focus = false;
    }

    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("Submit Text").clicked() || enter {
        match submit_text(session, &mut state.buffer) {
            Ok(_) => state.request_focus = enter,
            Err(skip) => debug!("Text not added: {}", skip),
        }
    }
}

fn font_controls(
    ui: &mut egui::Ui,
    session: &mut CanvasSession,
    state: &mut FontPanelState,
    default_font_events: &mut MessageWriter<SetDefaultFontRequest>,
) {
    let Some(element) = session.selected_element() else {
        state.size_draft = None;
        ui.label(
            egui::RichText::new("Click a label to change its font")
                .color(theme::HINT_TEXT),
        );
        return;
    };
    let id = element.id;
    let current_size = element.font_size;
    let current_family = element.font_family;

    ui.label("Font Size:");
    let mut size = state.size_draft.unwrap_or(current_size);
    let response = ui.add(
        egui::DragValue::new(&mut size)
            .speed(0.5)
            .update_while_editing(false),
    );
    if response.dragged() {
        state.size_draft = Some(size);
    } else {
        state.size_draft = None;
        if (response.changed() || response.drag_stopped()) && size != current_size {
            font_edit_applied(session.set_font_size(id, size), "size");
        }
    }

    ui.add_space(12.0);

    ui.label("Font Family:");
    egui::ComboBox::from_id_salt("font_family")
        .selected_text(current_family.display_name())
        .width(150.0)
        .show_ui(ui, |ui| {
            for family in FontFamily::all() {
                let is_selected = current_family == *family;
                if ui
                    .selectable_label(is_selected, family.display_name())
                    .clicked()
                    && !is_selected
                {
                    font_edit_applied(session.set_font_family(id, *family), "family");
                }
            }
        });

    ui.add_space(12.0);

    if ui
        .button("Use as default")
        .on_hover_text("New text will use this font")
        .clicked()
        && let Some(element) = session.selected_element()
    {
        default_font_events.write(SetDefaultFontRequest {
            size: element.font_size,
            family: element.font_family,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_buffer_on_success() {
        let mut session = CanvasSession::default();
        let mut buffer = String::from("Hello");

        let id = submit_text(&mut session, &mut buffer).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(session.find_element(id).unwrap().content, "Hello");
    }

    #[test]
    fn test_submit_blank_keeps_buffer() {
        let mut session = CanvasSession::default();
        let mut buffer = String::from("   ");

        assert_eq!(
            submit_text(&mut session, &mut buffer),
            Err(Skip::BlankContent)
        );
        assert_eq!(buffer, "   ");
        assert!(session.scene().is_empty());
        assert_eq!(session.history().undo_count(), 0);
    }

    #[test]
    fn test_font_edit_on_removed_label_is_skipped() {
        let mut session = CanvasSession::default();
        let id = session.add_text("Hello").unwrap();
        session.undo();

        assert!(!font_edit_applied(session.set_font_size(id, 30.0), "size"));
        assert!(!font_edit_applied(
            session.set_font_family(id, FontFamily::Courier),
            "family"
        ));
        assert_eq!(session.history().undo_count(), 0);
        assert_eq!(session.history().redo_count(), 1);
    }

    #[test]
    fn test_font_edit_applied() {
        let mut session = CanvasSession::default();
        let id = session.add_text("Hello").unwrap();

        assert!(font_edit_applied(session.set_font_size(id, 30.0), "size"));
        assert_eq!(session.find_element(id).unwrap().font_size, 30.0);
        assert_eq!(session.history().undo_count(), 2);
    }

    #[test]
    fn test_font_panel_state_default() {
        assert!(FontPanelState::default().size_draft.is_none());
    }
}
