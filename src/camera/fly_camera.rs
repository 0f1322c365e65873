//! Free-form fly camera driven by discrete key commands
//!
//! Position and orientation are independent fields, and the orientation is
//! recomposed from its three angles every frame. Accumulating the steps
//! into a single shared matrix would let translation and rotation error
//! compound over time; keeping the state separate rules that out.

use bevy::prelude::*;

/// One translation step, world units
const MOVE_STEP: f32 = 1.0;
/// One rotation step, degrees
const TURN_STEP_DEG: f32 = 5.0;
/// Starting viewer offset from the system center
const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 40.0);

/// A single discrete camera input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
}

impl CameraCommand {
    /// Map a key to its camera command. Keys with no binding yield `None`
    /// and have no effect anywhere.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::MoveForward),
            KeyCode::KeyS => Some(Self::MoveBack),
            KeyCode::KeyA => Some(Self::MoveLeft),
            KeyCode::KeyD => Some(Self::MoveRight),
            KeyCode::KeyR => Some(Self::MoveUp),
            KeyCode::KeyF => Some(Self::MoveDown),
            KeyCode::KeyZ => Some(Self::YawLeft),
            KeyCode::KeyX => Some(Self::YawRight),
            KeyCode::KeyQ => Some(Self::RollLeft),
            KeyCode::KeyE => Some(Self::RollRight),
            KeyCode::KeyC => Some(Self::PitchDown),
            KeyCode::KeyV => Some(Self::PitchUp),
            _ => None,
        }
    }
}

/// Accumulated viewer state, persisted across frames and never reset
/// after startup
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Rotation about the vertical axis, radians
    pub yaw: f32,
    /// Rotation about the lateral axis, radians
    pub pitch: f32,
    /// Rotation about the view axis, radians
    pub roll: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl FlyCamera {
    /// Orientation recomposed from the three angles
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
            * Quat::from_rotation_x(self.pitch)
            * Quat::from_rotation_z(self.roll)
    }

    /// Apply one discrete command. Translations move one unit in the
    /// camera's current orientation frame; rotations turn five degrees
    /// about their axis.
    pub fn apply(&mut self, command: CameraCommand) {
        let turn = TURN_STEP_DEG.to_radians();
        let orientation = self.orientation();
        match command {
            CameraCommand::MoveForward => self.position += orientation * (Vec3::NEG_Z * MOVE_STEP),
            CameraCommand::MoveBack => self.position += orientation * (Vec3::Z * MOVE_STEP),
            CameraCommand::MoveLeft => self.position += orientation * (Vec3::NEG_X * MOVE_STEP),
            CameraCommand::MoveRight => self.position += orientation * (Vec3::X * MOVE_STEP),
            CameraCommand::MoveUp => self.position += orientation * (Vec3::Y * MOVE_STEP),
            CameraCommand::MoveDown => self.position += orientation * (Vec3::NEG_Y * MOVE_STEP),
            CameraCommand::YawLeft => self.yaw += turn,
            CameraCommand::YawRight => self.yaw -= turn,
            CameraCommand::PitchUp => self.pitch += turn,
            CameraCommand::PitchDown => self.pitch -= turn,
            CameraCommand::RollLeft => self.roll += turn,
            CameraCommand::RollRight => self.roll -= turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let camera = FlyCamera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 40.0));
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.roll, 0.0);
    }

    #[test]
    fn test_forward_then_back_restores_translation() {
        let mut camera = FlyCamera::default();
        let before = camera.position;
        camera.apply(CameraCommand::MoveForward);
        assert_ne!(camera.position, before);
        camera.apply(CameraCommand::MoveBack);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_vertical_and_lateral_inverse_pairs() {
        let mut camera = FlyCamera::default();
        let before = camera.position;
        camera.apply(CameraCommand::MoveLeft);
        camera.apply(CameraCommand::MoveRight);
        camera.apply(CameraCommand::MoveUp);
        camera.apply(CameraCommand::MoveDown);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_forward_moves_along_the_view_axis() {
        let mut camera = FlyCamera::default();
        camera.apply(CameraCommand::MoveForward);
        // Default orientation looks down -Z
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 39.0));

        // After a quarter yaw the same command moves along the new axis
        let mut camera = FlyCamera::default();
        for _ in 0..18 {
            camera.apply(CameraCommand::YawLeft);
        }
        camera.apply(CameraCommand::MoveForward);
        assert!((camera.position.x + 1.0).abs() < 1e-4);
        assert!((camera.position.z - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_steps_are_five_degrees() {
        let mut camera = FlyCamera::default();
        camera.apply(CameraCommand::YawLeft);
        assert!((camera.yaw - 5.0_f32.to_radians()).abs() < 1e-6);
        camera.apply(CameraCommand::YawRight);
        assert!(camera.yaw.abs() < 1e-6);
    }

    #[test]
    fn test_orientation_does_not_drift_under_repeated_input() {
        let mut camera = FlyCamera::default();
        for _ in 0..720 {
            camera.apply(CameraCommand::YawLeft);
            camera.apply(CameraCommand::YawRight);
        }
        // Recomposing from angles keeps the orientation exactly normalized
        assert!((camera.orientation().length() - 1.0).abs() < 1e-6);
        assert!(camera.orientation().angle_between(Quat::IDENTITY) < 1e-3);
    }

    #[test]
    fn test_unbound_keys_map_to_none() {
        assert_eq!(CameraCommand::from_key(KeyCode::KeyP), None);
        assert_eq!(CameraCommand::from_key(KeyCode::Space), None);
        assert_eq!(CameraCommand::from_key(KeyCode::Digit1), None);
    }

    #[test]
    fn test_unrecognized_input_changes_nothing() {
        let mut camera = FlyCamera::default();
        let before = camera.clone();
        if let Some(command) = CameraCommand::from_key(KeyCode::Escape) {
            camera.apply(command);
        }
        assert_eq!(camera, before);
    }
}
