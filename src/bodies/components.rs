//! Body components for the Bevy ECS scene

use bevy::prelude::*;

/// Component marker for the central star entity
#[derive(Component)]
pub struct Star;

/// Component marker for a planet's orbital frame entity
///
/// The frame carries only the orbital translation; the spinning sphere,
/// the moon and the ring are children of this entity.
#[derive(Component)]
pub struct Planet;

/// Component marker for the moon entity, nested under its parent planet
#[derive(Component)]
pub struct Satellite;

/// Component marker for the static star backdrop sphere
#[derive(Component)]
pub struct Backdrop;

/// Component marker for a body's drawable sphere, which carries the
/// tilt and spin rotations but no translation of its own
#[derive(Component)]
pub struct BodySurface;

/// Component describing a planet's ring geometry
#[derive(Component, Copy, Clone, Debug)]
pub struct PlanetRing {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: usize,
}

/// Component tracking a body's progress along its circular orbit
///
/// `angle` is in radians and grows without bound; the renderer only ever
/// feeds it through `sin`/`cos`, so no wrapping is needed. `rate_deg` is
/// fixed at construction.
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitalMotion {
    /// Distance from the parent frame's origin
    pub radius: f32,
    /// Current angle around the parent, radians
    pub angle: f32,
    /// Advance per tick, degrees
    pub rate_deg: f32,
}

impl OrbitalMotion {
    /// Orbit whose speed falls off with the square of its radius, so
    /// closer bodies visibly move faster. A stylized heuristic, not
    /// Kepler's law.
    pub fn inverse_square(radius: f32, initial_deg: f32) -> Self {
        Self {
            radius,
            angle: initial_deg.to_radians(),
            rate_deg: 100.0 / (radius * radius),
        }
    }

    /// Orbit advancing by a fixed number of degrees per tick
    pub fn fixed_rate(radius: f32, rate_deg: f32, initial_deg: f32) -> Self {
        Self {
            radius,
            angle: initial_deg.to_radians(),
            rate_deg,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.angle += self.rate_deg.to_radians();
    }
}

/// Component tracking a body's rotation about its own axis
#[derive(Component, Copy, Clone, Debug)]
pub struct AxialSpin {
    /// Current rotation angle, radians
    pub angle: f32,
    /// Advance per tick, degrees
    pub rate_deg: f32,
}

impl AxialSpin {
    pub fn new(rate_deg: f32, initial_deg: f32) -> Self {
        Self {
            angle: initial_deg.to_radians(),
            rate_deg,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.angle += self.rate_deg.to_radians();
    }
}

/// Component storing the inclination of a body's spin axis relative to
/// the orbital plane, in degrees
#[derive(Component, Copy, Clone, Debug)]
pub struct AxialTilt(pub f32);

/// Component for the vertical bobbing the innermost planet shows along
/// its orbit: offset `amplitude * cos(orbit angle)`
#[derive(Component, Copy, Clone, Debug)]
pub struct Wobble {
    pub amplitude: f32,
}
