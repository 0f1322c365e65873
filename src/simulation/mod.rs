//! Simulation clock
//!
//! This module advances orbital and rotational state on a fixed 16 ms
//! schedule and owns the global lock toggles. The fixed-timestep
//! accumulator delays steps under load rather than dropping them, so the
//! effective rate is best-effort 60 Hz, not a hard real-time guarantee.

use bevy::prelude::*;
use std::time::Duration;

pub mod clock;
pub mod toggles;

pub use clock::{advance_orbits, advance_spins};
pub use toggles::{SimulationToggles, handle_toggle_keys};

/// Interval between simulation ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Plugin for the fixed-tick simulation and its lock toggles
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationToggles>()
            .insert_resource(Time::<Fixed>::from_duration(TICK_INTERVAL))
            .add_systems(FixedUpdate, (advance_orbits, advance_spins))
            .add_systems(Update, handle_toggle_keys);
    }
}
