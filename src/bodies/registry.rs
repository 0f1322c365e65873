//! Authored orbital and physical parameters for every body in the scene
//!
//! All values are fixed at authoring time; the simulation only ever mutates
//! the angle fields derived from them. Capability flags select the extra
//! composition behavior (wobble, moon, rings) instead of scattering name
//! comparisons through the scene code.

/// Radius of the central star's sphere
pub const STAR_RADIUS: f32 = 10.0;

/// Star self-rotation, degrees per tick
pub const STAR_SPIN_RATE_DEG: f32 = 2.0;

/// Radius of the inward-facing star backdrop sphere
pub const BACKDROP_RADIUS: f32 = 500.0;

/// Moon orbit radius around its parent planet
pub const MOON_ORBIT_RADIUS: f32 = 3.5;

/// Moon sphere radius
pub const MOON_RADIUS: f32 = 0.25;

/// Moon orbital advance, degrees per tick
pub const MOON_ORBIT_RATE_DEG: f32 = 1.0;

/// Moon self-rotation, degrees per tick
pub const MOON_SPIN_RATE_DEG: f32 = 45.0;

/// Vertical bobbing amplitude for the innermost planet
pub const WOBBLE_AMPLITUDE: f32 = 2.5;

/// Ring annulus bounds and sampling density
pub const RING_INNER_RADIUS: f32 = 9.0;
pub const RING_OUTER_RADIUS: f32 = 11.0;
pub const RING_SEGMENTS: usize = 40;

/// Longitude/latitude tessellation used for every body sphere
pub const SPHERE_SECTORS: u32 = 25;
pub const SPHERE_STACKS: u32 = 25;

/// Authored parameters for one orbiting planet
pub struct BodySpec {
    /// Identifier, also selects the body's texture
    pub name: &'static str,
    /// Distance from the system's center
    pub orbit_radius: f32,
    /// Sphere radius for rendering
    pub body_radius: f32,
    /// Self-rotation, degrees per tick
    pub spin_rate_deg: f32,
    /// Spin-axis inclination relative to the orbital plane, degrees
    pub tilt_deg: f32,
    /// Starting position along the orbit, degrees
    pub initial_orbit_deg: f32,
    /// Starting self-rotation, degrees
    pub initial_spin_deg: f32,
    /// Body bobs vertically along its orbit
    pub wobble: bool,
    /// Body owns the moon
    pub satellite: bool,
    /// Body owns the ring system
    pub rings: bool,
}

/// The eight planets, ordered innermost first. This is also the fixed
/// authoring order the scene is composed in.
pub const PLANETS: [BodySpec; 8] = [
    BodySpec {
        name: "mercury",
        orbit_radius: 14.0,
        body_radius: 0.4,
        spin_rate_deg: 3.0,
        tilt_deg: 0.5,
        initial_orbit_deg: 20.0,
        initial_spin_deg: 140.0,
        wobble: true,
        satellite: false,
        rings: false,
    },
    BodySpec {
        name: "venus",
        orbit_radius: 25.0,
        body_radius: 0.95,
        spin_rate_deg: 2.0,
        tilt_deg: 177.4,
        initial_orbit_deg: 135.0,
        initial_spin_deg: 30.0,
        wobble: false,
        satellite: false,
        rings: false,
    },
    BodySpec {
        name: "earth",
        orbit_radius: 32.0,
        body_radius: 1.0,
        spin_rate_deg: 15.0,
        tilt_deg: 23.45,
        initial_orbit_deg: 250.0,
        initial_spin_deg: 310.0,
        wobble: false,
        satellite: true,
        rings: false,
    },
    BodySpec {
        name: "mars",
        orbit_radius: 40.0,
        body_radius: 0.53,
        spin_rate_deg: 16.0,
        tilt_deg: 25.19,
        initial_orbit_deg: 75.0,
        initial_spin_deg: 200.0,
        wobble: false,
        satellite: false,
        rings: false,
    },
    BodySpec {
        name: "jupiter",
        orbit_radius: 70.0,
        body_radius: 5.0,
        spin_rate_deg: 22.0,
        tilt_deg: 3.12,
        initial_orbit_deg: 310.0,
        initial_spin_deg: 80.0,
        wobble: false,
        satellite: false,
        rings: false,
    },
    BodySpec {
        name: "saturn",
        orbit_radius: 105.0,
        body_radius: 4.5,
        spin_rate_deg: 21.0,
        tilt_deg: 26.73,
        initial_orbit_deg: 180.0,
        initial_spin_deg: 260.0,
        wobble: false,
        satellite: false,
        rings: true,
    },
    BodySpec {
        name: "uranus",
        orbit_radius: 130.0,
        body_radius: 2.8,
        spin_rate_deg: 18.0,
        tilt_deg: 97.86,
        initial_orbit_deg: 40.0,
        initial_spin_deg: 15.0,
        wobble: false,
        satellite: false,
        rings: false,
    },
    BodySpec {
        name: "neptune",
        orbit_radius: 160.0,
        body_radius: 2.7,
        spin_rate_deg: 17.0,
        tilt_deg: 29.56,
        initial_orbit_deg: 300.0,
        initial_spin_deg: 225.0,
        wobble: false,
        satellite: false,
        rings: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_count() {
        assert_eq!(PLANETS.len(), 8);
    }

    #[test]
    fn test_exactly_one_body_per_capability() {
        assert_eq!(PLANETS.iter().filter(|p| p.wobble).count(), 1);
        assert_eq!(PLANETS.iter().filter(|p| p.satellite).count(), 1);
        assert_eq!(PLANETS.iter().filter(|p| p.rings).count(), 1);
    }

    #[test]
    fn test_wobble_is_the_innermost_planet() {
        let innermost = PLANETS
            .iter()
            .min_by(|a, b| a.orbit_radius.total_cmp(&b.orbit_radius))
            .unwrap();
        assert!(innermost.wobble);
        assert_eq!(innermost.name, "mercury");
    }

    #[test]
    fn test_orbits_ordered_and_positive() {
        let mut previous = 0.0;
        for planet in &PLANETS {
            assert!(planet.orbit_radius > previous);
            assert!(planet.body_radius > 0.0);
            assert!(planet.spin_rate_deg > 0.0);
            previous = planet.orbit_radius;
        }
    }

    #[test]
    fn test_ring_bounds_are_distinct() {
        assert!(RING_INNER_RADIUS < RING_OUTER_RADIUS);
        assert!(RING_SEGMENTS >= 3);
    }
}
