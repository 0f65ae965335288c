mod camera;
pub mod history;
pub mod input;
pub mod scene;
pub mod session;
pub mod skip;
pub mod tools;

pub use input::CanvasEvent;
pub use scene::{ElementDefaults, ElementId, FontFamily, TextElement};
pub use session::CanvasSession;
pub use tools::{CurrentMode, EditorMode};

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};

/// Push creation defaults and the history limit from config into the session
fn sync_session_config(config: Res<AppConfig>, mut session: ResMut<CanvasSession>) {
    session.configure(config.element_defaults(), config.data.history_limit);
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasSession>()
            .init_resource::<tools::CurrentMode>()
            .add_message::<CanvasEvent>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    sync_session_config.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    sync_session_config.run_if(resource_changed::<AppConfig>),
                    tools::handle_mode_shortcuts,
                    tools::end_drag_outside_move_mode,
                    tools::update_cursor_icon.run_if(resource_changed::<CurrentMode>),
                    history::handle_history_shortcuts,
                    input::handle_canvas_events.run_if(on_message::<CanvasEvent>),
                    input::end_drag_on_release,
                )
                    .chain(),
            );
    }
}
