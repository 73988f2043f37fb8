//! Spherical orbit state around a pivot.
//!
//! Azimuth is measured about +Y starting from +Z; polar is measured from
//! straight up. Direction from pivot to eye is
//! `(sin p · sin a, cos p, sin p · cos a)`.

use glam::{Vec2, Vec3};

use crate::options::OrbitLimits;

/// Eye placement relative to a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Point the camera looks at and orbits around.
    pub pivot: Vec3,
    /// Angle about +Y in radians.
    pub azimuth: f32,
    /// Angle from +Y in radians.
    pub polar: f32,
    /// Eye distance from the pivot.
    pub distance: f32,
}

impl OrbitState {
    /// Orbit that reproduces `eye` looking at `pivot`.
    #[must_use]
    pub fn from_eye(eye: Vec3, pivot: Vec3) -> Self {
        let offset = eye - pivot;
        let distance = offset.length();
        let mut orbit = Self {
            pivot,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance,
        };
        if distance > f32::EPSILON {
            orbit.set_direction(offset / distance);
        }
        orbit
    }

    /// Unit vector from the pivot toward the eye.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    /// Point the orbit along `direction`, keeping the distance.
    pub fn set_direction(&mut self, direction: Vec3) {
        let dir = direction.normalize_or(Vec3::Z);
        self.polar = dir.y.clamp(-1.0, 1.0).acos();
        self.azimuth = dir.x.atan2(dir.z);
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.pivot + self.direction() * self.distance
    }

    /// Keep polar angle and distance inside `limits`.
    pub fn clamp(&mut self, limits: &OrbitLimits) {
        let (min_polar, max_polar) = limits.polar_range();
        self.polar = self.polar.clamp(min_polar, max_polar);
        self.distance = self
            .distance
            .clamp(limits.min_distance, limits.max_distance);
    }

    /// Orbit by a drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, speed: f32, limits: &OrbitLimits) {
        self.azimuth -= delta.x * speed;
        self.polar -= delta.y * speed;
        self.clamp(limits);
    }

    /// Slide the pivot in the view plane by a drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2, speed: f32) {
        let forward = -self.direction();
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        self.pivot += right * (-delta.x * speed) + up * (delta.y * speed);
    }

    /// Scale the distance; positive `delta` moves closer.
    pub fn zoom(&mut self, delta: f32, speed: f32, limits: &OrbitLimits) {
        self.distance *= 1.0 - delta * speed;
        self.clamp(limits);
    }
}
