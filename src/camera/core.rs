use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the authored default pose.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::from(options.default_eye),
            target: Vec3::from(options.default_look_at),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// Update the aspect ratio after a resize. Zero-sized viewports are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// View matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_comes_from_options() {
        let cam = Camera::from_options(&CameraOptions::default());
        assert_eq!(cam.eye, Vec3::new(-5.0, 3.0, 10.0));
        assert_eq!(cam.target, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(cam.fovy, 60.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = Camera::from_options(&CameraOptions::default());
        let clip = cam.build_matrix() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn resize_ignores_empty_viewport() {
        let mut cam = Camera::from_options(&CameraOptions::default());
        cam.resize(800, 400);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(0, 400);
        assert_eq!(cam.aspect, 2.0);
    }
}
