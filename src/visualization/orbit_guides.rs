//! Orbit guide polylines
//!
//! Each planet's orbit can be traced as a closed gizmo linestrip. The
//! sampler mirrors the live orbital translation, wobble included, so the
//! guide follows the path the body actually flies.

use bevy::prelude::*;

use crate::bodies::{OrbitalMotion, Planet, Wobble};
use crate::simulation::SimulationToggles;

/// Orbit guide rendering configuration resource
#[derive(Resource)]
pub struct GuideConfig {
    /// Number of segments per orbit polyline
    pub segments: usize,
    /// Guide color, matching the emissive tint used for the star
    pub color: Color,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            segments: 100,
            color: Color::srgb(1.0, 0.9, 0.9),
        }
    }
}

/// Sample `segments + 1` points around an orbit. The first and last point
/// fall on angle 0 / 2π, closing the loop when drawn as a strip; the
/// vertical offset applies the same `amplitude * cos(angle)` bobbing the
/// live body gets (amplitude 0 for everything but the innermost planet).
pub fn orbit_path_points(radius: f32, segments: usize, wobble_amplitude: f32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments + 1);
    for p in 0..=segments {
        let angle = p as f32 / segments as f32 * std::f32::consts::TAU;
        points.push(Vec3::new(
            angle.cos() * radius,
            wobble_amplitude * angle.cos(),
            angle.sin() * radius,
        ));
    }
    points
}

/// System to draw one guide polyline per planet orbit while the guide
/// toggle is engaged
pub fn draw_orbit_guides(
    mut gizmos: Gizmos,
    toggles: Res<SimulationToggles>,
    config: Res<GuideConfig>,
    planets: Query<(&OrbitalMotion, Option<&Wobble>), With<Planet>>,
) {
    if !toggles.show_orbit_guides {
        return;
    }

    for (orbit, wobble) in &planets {
        let amplitude = wobble.map(|w| w.amplitude).unwrap_or(0.0);
        gizmos.linestrip(
            orbit_path_points(orbit.radius, config.segments, amplitude),
            config.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count() {
        assert_eq!(orbit_path_points(14.0, 100, 2.5).len(), 101);
    }

    #[test]
    fn test_wobbling_orbit_closes_including_wobble() {
        let points = orbit_path_points(14.0, 100, 2.5);
        let first = points[0];
        let last = points[100];
        // cos(0) and cos(2π) both put the bobbing offset at its peak
        assert_eq!(first.y, 2.5);
        assert!((last.y - 2.5).abs() < 1e-3);
        assert!((first.x - last.x).abs() < 1e-3);
        assert!((first.z - last.z).abs() < 1e-3);
    }

    #[test]
    fn test_flat_orbit_stays_in_plane() {
        for point in orbit_path_points(32.0, 100, 0.0) {
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn test_points_lie_on_orbit_radius() {
        for point in orbit_path_points(40.0, 100, 0.0) {
            let planar = Vec3::new(point.x, 0.0, point.z);
            assert!((planar.length() - 40.0).abs() < 1e-3);
        }
    }
}
