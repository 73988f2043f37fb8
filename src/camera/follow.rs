//! Follow-camera targets derived from the character transform.

use glam::Vec3;

use crate::options::CameraOptions;
use crate::scene::Transform;

/// Point the camera looks at: the character's feet raised to eye height.
#[must_use]
pub fn look_point(character: &Transform, options: &CameraOptions) -> Vec3 {
    character.position + Vec3::Y * options.eye_height
}

/// Ideal "behind and above" eye position.
#[must_use]
pub fn follow_eye(character: &Transform, options: &CameraOptions) -> Vec3 {
    character.position - character.forward() * options.follow_distance
        + Vec3::Y * options.follow_height
}

/// Canonical orbit direction behind the character with an upward bias.
#[must_use]
pub fn behind_direction(character: &Transform, options: &CameraOptions) -> Vec3 {
    (-character.forward() + Vec3::Y * options.recenter_lift).normalize_or(Vec3::Y)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn eye_sits_behind_and_above() {
        let opts = CameraOptions::default();
        let t = Transform::new(Vec3::new(1.0, 0.0, 1.0), 0.0);
        assert!((follow_eye(&t, &opts) - Vec3::new(1.0, 5.0, -14.0)).length() < 1e-5);
        assert!((look_point(&t, &opts) - Vec3::new(1.0, 1.5, 1.0)).length() < 1e-6);
    }

    #[test]
    fn behind_direction_turns_with_heading() {
        let opts = CameraOptions::default();
        let t = Transform::new(Vec3::ZERO, FRAC_PI_2);
        let dir = behind_direction(&t, &opts);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x < -0.9);
        assert!(dir.y > 0.0);
        assert!(dir.z.abs() < 1e-6);
    }
}
