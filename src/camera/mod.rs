//! Camera controller
//!
//! Key presses mutate the `FlyCamera` resource in discrete steps; a sync
//! system converts that state into the camera transform once per frame.

use bevy::prelude::*;

pub mod fly_camera;

pub use fly_camera::{CameraCommand, FlyCamera};

/// Marker component for the main scene camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for the fly camera input and transform sync
pub struct FlyCameraPlugin;

impl Plugin for FlyCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlyCamera>().add_systems(
            Update,
            (handle_camera_keys, sync_camera_transform.after(handle_camera_keys)),
        );
    }
}

/// System to feed newly pressed keys to the camera state. Keys without a
/// binding fall through with no effect.
pub fn handle_camera_keys(input: Res<ButtonInput<KeyCode>>, mut camera: ResMut<FlyCamera>) {
    for key in input.get_just_pressed() {
        if let Some(command) = CameraCommand::from_key(*key) {
            camera.apply(command);
        }
    }
}

/// System to write the accumulated viewer state onto the camera entity
pub fn sync_camera_transform(
    camera: Res<FlyCamera>,
    mut transforms: Query<&mut Transform, With<MainCamera>>,
) {
    for mut transform in &mut transforms {
        transform.translation = camera.position;
        transform.rotation = camera.orientation();
    }
}
