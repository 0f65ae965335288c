mod canvas_view;
mod dialogs;
mod mode_panel;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<mode_panel::AddTextState>()
            .init_resource::<mode_panel::FontPanelState>()
            // Top and bottom panels must claim space before the central canvas
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    mode_panel::mode_panel_ui,
                    canvas_view::canvas_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            );
    }
}
