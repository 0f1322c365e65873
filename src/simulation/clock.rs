//! Fixed-tick advancement of orbital and rotational state
//!
//! Both systems run on the 16 ms fixed schedule. They only ever mutate the
//! angle fields of `OrbitalMotion` and `AxialSpin`; the scene composer
//! reads those on the frame side, after the tick has fully completed.

use bevy::prelude::*;

use crate::bodies::{AxialSpin, OrbitalMotion};
use crate::simulation::SimulationToggles;

/// System to advance every orbit by its per-tick rate, unless the orbit
/// lock is engaged, in which case every body holds for this tick.
pub fn advance_orbits(
    toggles: Res<SimulationToggles>,
    mut orbits: Query<&mut OrbitalMotion>,
) {
    if toggles.orbit_locked {
        return;
    }
    for mut orbit in &mut orbits {
        orbit.step();
    }
}

/// System to advance every axial spin by its per-tick rate, unless the
/// spin lock is engaged.
pub fn advance_spins(toggles: Res<SimulationToggles>, mut spins: Query<&mut AxialSpin>) {
    if toggles.spin_locked {
        return;
    }
    for mut spin in &mut spins {
        spin.step();
    }
}
