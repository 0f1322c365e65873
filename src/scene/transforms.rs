//! Per-frame transform sync from simulation state
//!
//! These systems write each entity's local transform; Bevy's transform
//! propagation then derives world transforms along the parent links. They
//! run on the frame side, so they always observe whole-tick state.
//!
//! Composition order matters: the orbital frame carries the translation,
//! its child sphere carries tilt-then-spin, so a body orbits first and
//! then spins in place about its tilted axis.

use bevy::prelude::*;

use crate::bodies::{
    AxialSpin, AxialTilt, BodySurface, OrbitalMotion, Planet, Satellite, Star, Wobble,
};

/// Position on a circular orbit, with the optional vertical bobbing the
/// innermost planet shows
pub fn orbital_translation(angle: f32, radius: f32, wobble_amplitude: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * radius,
        wobble_amplitude * angle.cos(),
        angle.sin() * radius,
    )
}

/// Spin about the body's axis, optionally inclined by the ecliptic tilt.
/// The tilt is applied outside the spin so the body rotates about the
/// tilted axis rather than tilting the already-spun sphere.
pub fn spin_rotation(spin_angle: f32, tilt_deg: Option<f32>) -> Quat {
    let spin = Quat::from_rotation_y(spin_angle);
    match tilt_deg {
        Some(tilt) => Quat::from_rotation_z(tilt.to_radians()) * spin,
        None => spin,
    }
}

/// System to place each planet's orbital frame for the current state
pub fn update_orbital_frames(
    mut frames: Query<(&mut Transform, &OrbitalMotion, Option<&Wobble>), With<Planet>>,
) {
    for (mut transform, orbit, wobble) in &mut frames {
        let amplitude = wobble.map(|w| w.amplitude).unwrap_or(0.0);
        transform.translation = orbital_translation(orbit.angle, orbit.radius, amplitude);
    }
}

/// System to apply tilt-then-spin to the star and every planet sphere.
/// The moon is not a `BodySurface`; its rotation convention is inverted
/// and handled below.
pub fn update_spin_rotations(
    mut bodies: Query<
        (&mut Transform, &AxialSpin, Option<&AxialTilt>),
        Or<(With<Star>, With<BodySurface>)>,
    >,
) {
    for (mut transform, spin, tilt) in &mut bodies {
        transform.rotation = spin_rotation(spin.angle, tilt.map(|t| t.0));
    }
}

/// System to place the moon inside its parent planet's frame. Its orbit
/// offset is computed the same way as a planet's, but strictly relative
/// to the parent; the spin sign is inverted relative to the planets'
/// convention.
pub fn update_satellite_transforms(
    mut satellites: Query<(&mut Transform, &OrbitalMotion, &AxialSpin), With<Satellite>>,
) {
    for (mut transform, orbit, spin) in &mut satellites {
        transform.translation = orbital_translation(orbit.angle, orbit.radius, 0.0);
        transform.rotation = Quat::from_rotation_y(-spin.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::orbit_path_points;

    #[test]
    fn test_orbital_translation_at_cardinal_angles() {
        let at_zero = orbital_translation(0.0, 14.0, 0.0);
        assert!((at_zero - Vec3::new(14.0, 0.0, 0.0)).length() < 1e-4);

        let quarter = orbital_translation(std::f32::consts::FRAC_PI_2, 14.0, 0.0);
        assert!((quarter - Vec3::new(0.0, 0.0, 14.0)).length() < 1e-4);
    }

    #[test]
    fn test_wobble_peaks_at_angle_zero() {
        let translation = orbital_translation(0.0, 14.0, 2.5);
        assert_eq!(translation.y, 2.5);

        let half = orbital_translation(std::f32::consts::PI, 14.0, 2.5);
        assert!((half.y + 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_guides_trace_the_live_path() {
        // The guide sampler and the live translation must agree, wobble
        // included, or the guide lies about where the body flies.
        let segments = 100;
        let points = orbit_path_points(14.0, segments, 2.5);
        for (p, point) in points.iter().enumerate() {
            let angle = p as f32 / segments as f32 * std::f32::consts::TAU;
            let live = orbital_translation(angle, 14.0, 2.5);
            assert!((*point - live).length() < 1e-4);
        }
    }

    #[test]
    fn test_tilt_is_applied_outside_the_spin() {
        let spin_angle = 1.0_f32;
        let tilted = spin_rotation(spin_angle, Some(90.0));
        let expected =
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2) * Quat::from_rotation_y(spin_angle);
        assert!(tilted.angle_between(expected) < 1e-5);

        // The reversed order is a different rotation entirely
        let reversed =
            Quat::from_rotation_y(spin_angle) * Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(tilted.angle_between(reversed) > 0.1);
    }

    #[test]
    fn test_untilted_spin_is_about_the_vertical_axis() {
        let rotation = spin_rotation(0.5, None);
        assert!(rotation.angle_between(Quat::from_rotation_y(0.5)) < 1e-6);
    }
}
