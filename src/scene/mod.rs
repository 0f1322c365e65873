//! Scene composition
//!
//! This module spawns the body hierarchy once at startup and, each frame,
//! rewrites local transforms from the simulation state. World transforms
//! for the nested moon and ring fall out of Bevy's transform propagation
//! over the parent links.

use bevy::prelude::*;

pub mod spawn;
pub mod textures;
pub mod transforms;

pub use spawn::spawn_solar_system;
pub use textures::{texture_path, verify_default_assets};
pub use transforms::{
    update_orbital_frames, update_satellite_transforms, update_spin_rotations,
};

/// Plugin for scene construction and per-frame transform sync
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system).add_systems(
            Update,
            (
                update_orbital_frames,
                update_spin_rotations,
                update_satellite_transforms,
            ),
        );
    }
}
