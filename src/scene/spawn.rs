//! Startup construction of the scene hierarchy
//!
//! Every entity is spawned once here and lives for the process lifetime.
//! Each planet is an orbital frame whose children are the spinning sphere
//! and, where the body table says so, the moon and the ring. Nesting via
//! `ChildOf` is what makes the moon's position strictly relative to its
//! parent's frame rather than the system origin.

use bevy::prelude::*;

use crate::bodies::registry::{
    BACKDROP_RADIUS, MOON_ORBIT_RADIUS, MOON_ORBIT_RATE_DEG, MOON_RADIUS, MOON_SPIN_RATE_DEG,
    PLANETS, RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS, SPHERE_SECTORS, SPHERE_STACKS,
    STAR_RADIUS, STAR_SPIN_RATE_DEG, WOBBLE_AMPLITUDE,
};
use crate::bodies::{
    AxialSpin, AxialTilt, Backdrop, BodySurface, OrbitalMotion, Planet, PlanetRing, Satellite,
    Star, Wobble,
};
use crate::scene::textures::texture_path;
use crate::visualization::ring_mesh;

fn body_sphere(meshes: &mut Assets<Mesh>, radius: f32) -> Handle<Mesh> {
    meshes.add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))
}

/// System to build the whole system at startup: star, backdrop, planets
/// and their nested moon and ring.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    // The star ignores scene lighting entirely; it renders its texture at
    // full brightness with the same warm tint the orbit guides use.
    commands.spawn((
        Mesh3d(body_sphere(&mut meshes, STAR_RADIUS)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.9, 0.9),
            base_color_texture: Some(asset_server.load(texture_path("sun"))),
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Visible,
        AxialSpin::new(STAR_SPIN_RATE_DEG, 0.0),
        Star,
        Name::new("Sun"),
    ));

    // Inward-facing backdrop: culling off so the texture shows from inside
    commands.spawn((
        Mesh3d(body_sphere(&mut meshes, BACKDROP_RADIUS)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(texture_path("stars"))),
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::default(),
        Backdrop,
        Name::new("Backdrop"),
    ));

    for spec in &PLANETS {
        let mut frame = commands.spawn((
            Transform::default(),
            Visibility::default(),
            OrbitalMotion::inverse_square(spec.orbit_radius, spec.initial_orbit_deg),
            Planet,
            Name::new(spec.name),
        ));
        if spec.wobble {
            frame.insert(Wobble {
                amplitude: WOBBLE_AMPLITUDE,
            });
        }
        let frame = frame.id();

        commands.spawn((
            Mesh3d(body_sphere(&mut meshes, spec.body_radius)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(texture_path(spec.name))),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            })),
            Transform::default(),
            AxialSpin::new(spec.spin_rate_deg, spec.initial_spin_deg),
            AxialTilt(spec.tilt_deg),
            BodySurface,
            ChildOf(frame),
            Name::new(format!("{} surface", spec.name)),
        ));

        if spec.satellite {
            commands.spawn((
                Mesh3d(body_sphere(&mut meshes, MOON_RADIUS)),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(asset_server.load(texture_path("moon"))),
                    perceptual_roughness: 1.0,
                    metallic: 0.0,
                    ..default()
                })),
                Transform::default(),
                OrbitalMotion::fixed_rate(MOON_ORBIT_RADIUS, MOON_ORBIT_RATE_DEG, 0.0),
                AxialSpin::new(MOON_SPIN_RATE_DEG, 0.0),
                Satellite,
                ChildOf(frame),
                Name::new("Moon"),
            ));
        }

        if spec.rings {
            commands.spawn((
                Mesh3d(meshes.add(ring_mesh(RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(
                        asset_server.load(texture_path(&format!("{}_rings", spec.name))),
                    ),
                    perceptual_roughness: 1.0,
                    metallic: 0.0,
                    cull_mode: None,
                    double_sided: true,
                    ..default()
                })),
                Transform::from_rotation(ring_orientation(spec.tilt_deg)),
                PlanetRing {
                    inner_radius: RING_INNER_RADIUS,
                    outer_radius: RING_OUTER_RADIUS,
                    segments: RING_SEGMENTS,
                },
                ChildOf(frame),
                Name::new(format!("{} rings", spec.name)),
            ));
        }
    }
}

/// The ring plane is swung a quarter turn around the vertical and then
/// inclined by the owning body's tilt. It hangs off the orbital frame, not
/// the spinning sphere, so it does not rotate with the body's spin.
pub fn ring_orientation(tilt_deg: f32) -> Quat {
    Quat::from_rotation_y(std::f32::consts::FRAC_PI_2) * Quat::from_rotation_x(tilt_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_orientation_is_tilted() {
        let flat = ring_orientation(0.0);
        let tilted = ring_orientation(26.73);
        assert!(flat.angle_between(tilted) > 0.1);
    }

    #[test]
    fn test_ring_orientation_keeps_plane_through_origin() {
        // Rotation only; the ring must stay centered on its parent frame
        let rotation = ring_orientation(26.73);
        assert!((rotation.length() - 1.0).abs() < 1e-5);
    }
}
