use bevy::prelude::*;

#[derive(Component)]
pub struct EditorCamera;

/// The canvas is drawn entirely by egui, which renders through this camera.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, EditorCamera));
}
