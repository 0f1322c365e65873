//! Global simulation toggles and their keyboard bindings

use bevy::prelude::*;

/// Process-wide toggles gating the clock and the orbit guides
///
/// All start disengaged and are only ever flipped by key input.
#[derive(Resource, Default)]
pub struct SimulationToggles {
    /// Freeze every body's orbital advance
    pub orbit_locked: bool,
    /// Freeze every body's axial spin
    pub spin_locked: bool,
    /// Draw the orbit guide polylines
    pub show_orbit_guides: bool,
}

impl SimulationToggles {
    pub fn toggle_orbit_lock(&mut self) {
        self.orbit_locked = !self.orbit_locked;
    }

    pub fn toggle_spin_lock(&mut self) {
        self.spin_locked = !self.spin_locked;
    }

    pub fn toggle_orbit_guides(&mut self) {
        self.show_orbit_guides = !self.show_orbit_guides;
    }
}

/// System to flip the toggles on their bound keys: 1 orbit lock,
/// 2 spin lock, 3 orbit guides. Every other key is left to the camera.
pub fn handle_toggle_keys(
    input: Res<ButtonInput<KeyCode>>,
    mut toggles: ResMut<SimulationToggles>,
) {
    if input.just_pressed(KeyCode::Digit1) {
        toggles.toggle_orbit_lock();
        info!("Orbit lock: {}", toggles.orbit_locked);
    }
    if input.just_pressed(KeyCode::Digit2) {
        toggles.toggle_spin_lock();
        info!("Spin lock: {}", toggles.spin_locked);
    }
    if input.just_pressed(KeyCode::Digit3) {
        toggles.toggle_orbit_guides();
        info!("Orbit guides: {}", toggles.show_orbit_guides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_start_disengaged() {
        let toggles = SimulationToggles::default();
        assert!(!toggles.orbit_locked);
        assert!(!toggles.spin_locked);
        assert!(!toggles.show_orbit_guides);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut toggles = SimulationToggles::default();

        toggles.toggle_orbit_lock();
        assert!(toggles.orbit_locked);
        toggles.toggle_orbit_lock();
        assert!(!toggles.orbit_locked);

        toggles.toggle_spin_lock();
        toggles.toggle_spin_lock();
        assert!(!toggles.spin_locked);

        toggles.toggle_orbit_guides();
        toggles.toggle_orbit_guides();
        assert!(!toggles.show_orbit_guides);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut toggles = SimulationToggles::default();
        toggles.toggle_spin_lock();
        assert!(!toggles.orbit_locked);
        assert!(!toggles.show_orbit_guides);
    }
}
