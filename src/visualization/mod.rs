//! Visualization module
//!
//! This module owns the procedural geometry: the ring annulus rebuilt
//! every frame and the orbit guide polylines drawn with gizmos.

use bevy::prelude::*;

pub mod orbit_guides;
pub mod rings;

pub use orbit_guides::{GuideConfig, draw_orbit_guides, orbit_path_points};
pub use rings::{regenerate_ring_meshes, ring_mesh, ring_quads};

/// Plugin for procedural geometry systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuideConfig>()
            .add_systems(Update, (regenerate_ring_meshes, draw_orbit_guides));
    }
}
