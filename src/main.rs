use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin, WindowResolution};

#[cfg(feature = "dev_camera")]
use bevy::camera_controller::free_camera::{FreeCamera, FreeCameraPlugin};
#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod scene;
mod simulation;
mod visualization;

use bodies::registry::STAR_RADIUS;
use camera::{FlyCamera, FlyCameraPlugin, MainCamera};
use scene::ScenePlugin;
use simulation::SimulationPlugin;
use visualization::VisualizationPlugin;

const WINDOW_SIZE: u32 = 800;

#[cfg(feature = "dev_camera")]
#[derive(Component)]
struct DevCamera;

/// Setup camera and lighting
pub fn setup(mut commands: Commands) {
    // Night sides stay faintly visible instead of going fully black.
    commands.insert_resource(GlobalAmbientLight {
        brightness: 80.0,
        ..default()
    });

    let viewer = FlyCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 1.0,
            far: 1000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(viewer.position).with_rotation(viewer.orientation()),
    ));

    // The star is the only light source, sitting at the system center.
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 50_000_000.0,
            range: 400.0,
            radius: STAR_RADIUS,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Starlight"),
    ));
}

#[cfg(feature = "dev_camera")]
fn setup_dev_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 1.0,
            far: 1000.0,
            ..default()
        }),
        Camera {
            order: 2,
            is_active: false,
            ..default()
        },
        FreeCamera::default(),
        DevCamera,
    ));
}

#[cfg(feature = "dev_camera")]
fn toggle_dev_camera(
    input: Res<ButtonInput<KeyCode>>,
    mut main_camera: Query<&mut Camera, (With<MainCamera>, Without<DevCamera>)>,
    mut dev_camera: Query<&mut Camera, With<DevCamera>>,
) {
    if !input.just_pressed(KeyCode::F2) {
        return;
    }

    if let Ok(mut main) = main_camera.single_mut()
        && let Ok(mut dev) = dev_camera.single_mut()
    {
        let dev_active = dev.is_active;
        dev.is_active = !dev_active;
        main.is_active = dev_active;
    }
}

fn main() -> anyhow::Result<()> {
    // Rendering is meaningless without the body textures; refuse to start
    // the event loop if any are missing.
    scene::verify_default_assets()?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar system".to_string(),
            resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    #[cfg(feature = "dev_camera")]
    app.add_plugins(FreeCameraPlugin);

    app.add_plugins(SimulationPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(FlyCameraPlugin);
    app.add_systems(Startup, setup);

    #[cfg(feature = "dev_camera")]
    {
        app.add_systems(Startup, setup_dev_camera);
        app.add_systems(Update, toggle_dev_camera);
    }

    app.run();
    Ok(())
}
