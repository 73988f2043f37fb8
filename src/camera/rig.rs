//! The camera rig: one update per frame over the four camera modes.

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::follow::{behind_direction, follow_eye, look_point};
use super::mode::CameraMode;
use super::orbit::OrbitState;
use crate::options::{CameraOptions, OrbitLimits};
use crate::scene::{NodeId, SceneGraph, Transform};

/// Camera controller blending free orbit, locked follow, and hybrid
/// follow-with-orbit.
///
/// The rig only ever *reads* the character through a [`NodeId`] handle; a
/// missing or despawned target makes follow updates a no-op.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    options: CameraOptions,
    mode: CameraMode,
    orbit: OrbitState,
    target: Option<NodeId>,
    /// Last user-chosen orbit direction; `None` means "behind the
    /// character".
    preferred_offset: Option<Vec3>,
    /// Seconds of accumulated `dt`.
    clock: f64,
    last_user_input: f64,
    recentering: bool,
    reset_pending: bool,
}

impl CameraRig {
    /// Rig at the default pose in the mode given by the option toggles.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let camera = Camera::from_options(&options);
        let mut rig = Self {
            orbit: OrbitState::from_eye(camera.eye, camera.target),
            camera,
            mode: CameraMode::Disabled,
            target: None,
            preferred_offset: None,
            clock: 0.0,
            last_user_input: 0.0,
            recentering: false,
            reset_pending: false,
            options: CameraOptions {
                orbit_enabled: false,
                follow_enabled: false,
                ..options.clone()
            },
        };
        rig.set_orbit_enabled(options.orbit_enabled);
        rig.set_follow_enabled(options.follow_enabled);
        rig.set_auto_reset_delay(options.auto_reset_delay);
        rig
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Current options (toggles reflect the live mode).
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Orbit state used in OrbitOnly and Hybrid.
    #[must_use]
    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    /// Followed node, if any.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Remembered hybrid orbit direction (`None` = behind the character).
    #[must_use]
    pub fn preferred_offset(&self) -> Option<Vec3> {
        self.preferred_offset
    }

    /// Seconds since the last user orbit input.
    #[must_use]
    pub fn idle_time(&self) -> f32 {
        (self.clock - self.last_user_input) as f32
    }

    /// Replace all options, routing the toggles through their setters.
    pub fn set_options(&mut self, options: CameraOptions) {
        let orbit_enabled = options.orbit_enabled;
        let follow_enabled = options.follow_enabled;
        self.options = CameraOptions {
            orbit_enabled: self.options.orbit_enabled,
            follow_enabled: self.options.follow_enabled,
            ..options
        };
        self.options.auto_reset_delay =
            CameraOptions::clamp_auto_reset(self.options.auto_reset_delay);
        self.camera.fovy = self.options.fovy;
        self.camera.znear = self.options.znear;
        self.camera.zfar = self.options.zfar;
        self.set_orbit_enabled(orbit_enabled);
        self.set_follow_enabled(follow_enabled);
        if self.mode.orbits() {
            let limits = self.limits();
            self.orbit.clamp(&limits);
            self.place_from_orbit();
        } else if self.mode == CameraMode::Disabled {
            self.apply_default_pose();
        }
    }

    /// Follow a node, or nothing. Changing the target forgets the hybrid
    /// preferred direction and restarts the idle timer.
    pub fn set_target(&mut self, target: Option<NodeId>) {
        if self.target == target {
            return;
        }
        self.target = target;
        self.preferred_offset = None;
        self.last_user_input = self.clock;
        self.recentering = false;
    }

    /// Enable or disable user orbit. Idempotent.
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.options.orbit_enabled = enabled;
        self.transition();
    }

    /// Enable or disable following. Idempotent.
    pub fn set_follow_enabled(&mut self, enabled: bool) {
        self.options.follow_enabled = enabled;
        self.transition();
    }

    /// Set the hybrid idle timeout, clamped to the supported range.
    pub fn set_auto_reset_delay(&mut self, seconds: f32) {
        self.options.auto_reset_delay = CameraOptions::clamp_auto_reset(seconds);
    }

    /// Return to the authored default pose. Overrides the mode for the
    /// next update.
    pub fn reset_position(&mut self) {
        self.apply_default_pose();
        self.orbit = OrbitState::from_eye(self.camera.eye, self.camera.target);
        self.preferred_offset = None;
        self.last_user_input = self.clock;
        self.recentering = false;
        self.reset_pending = true;
    }

    /// Orbit by a mouse drag. Ignored unless orbit is enabled.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.mode.orbits() {
            return;
        }
        let limits = self.limits();
        self.orbit.rotate(delta, self.options.rotate_speed, &limits);
        self.user_moved();
    }

    /// Pan the pivot by a mouse drag. Ignored unless orbit is enabled.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.mode.orbits() {
            return;
        }
        self.orbit.pan(delta, self.options.pan_speed);
        self.user_moved();
    }

    /// Zoom by a scroll amount. Ignored unless orbit is enabled.
    pub fn zoom(&mut self, delta: f32) {
        if !self.mode.orbits() {
            return;
        }
        let limits = self.limits();
        self.orbit.zoom(delta, self.options.zoom_speed, &limits);
        self.user_moved();
    }

    /// Update the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Advance the rig by `dt` seconds, reading the target from `scene`.
    pub fn update(&mut self, dt: f32, scene: &SceneGraph) {
        let dt = dt.max(0.0);
        self.clock += f64::from(dt);

        if self.reset_pending {
            self.reset_pending = false;
            self.apply_default_pose();
            return;
        }

        match self.mode {
            CameraMode::Disabled => self.apply_default_pose(),
            CameraMode::OrbitOnly => self.place_from_orbit(),
            CameraMode::FollowOnly => {
                if let Some(character) = self.target_transform(scene) {
                    self.follow(&character);
                }
            }
            CameraMode::Hybrid => {
                if let Some(character) = self.target_transform(scene) {
                    self.hybrid(&character, dt);
                }
            }
        }
    }

    fn target_transform(&self, scene: &SceneGraph) -> Option<Transform> {
        self.target.and_then(|id| scene.transform(id)).copied()
    }

    fn limits(&self) -> OrbitLimits {
        if self.mode == CameraMode::Hybrid {
            self.options.follow_limits
        } else {
            self.options.free_limits
        }
    }

    fn transition(&mut self) {
        let next =
            CameraMode::from_toggles(self.options.orbit_enabled, self.options.follow_enabled);
        let previous = self.mode;
        if next == previous {
            return;
        }
        self.mode = next;
        log::debug!("camera mode: {previous} -> {next}");

        match next {
            CameraMode::Disabled => self.apply_default_pose(),
            CameraMode::FollowOnly => {}
            CameraMode::OrbitOnly | CameraMode::Hybrid => {
                if !previous.orbits() {
                    // Pivot on whatever the camera is looking at right now.
                    self.orbit = OrbitState::from_eye(self.camera.eye, self.camera.target);
                }
                let limits = self.limits();
                self.orbit.clamp(&limits);
                if next == CameraMode::Hybrid {
                    self.user_moved();
                }
                self.place_from_orbit();
            }
        }
    }

    fn user_moved(&mut self) {
        self.last_user_input = self.clock;
        self.preferred_offset = Some(self.orbit.direction());
        self.recentering = false;
        self.place_from_orbit();
    }

    fn apply_default_pose(&mut self) {
        self.camera.eye = Vec3::from(self.options.default_eye);
        self.camera.target = Vec3::from(self.options.default_look_at);
        self.camera.up = Vec3::Y;
    }

    fn place_from_orbit(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = self.orbit.pivot;
        self.camera.up = Vec3::Y;
    }

    fn follow(&mut self, character: &Transform) {
        let smoothing = self.options.follow_smoothing;
        let eye = follow_eye(character, &self.options);
        let look = look_point(character, &self.options);
        self.camera.eye = self.camera.eye.lerp(eye, smoothing);
        self.camera.target = self.camera.target.lerp(look, smoothing);
        self.camera.up = Vec3::Y;
    }

    fn hybrid(&mut self, character: &Transform, dt: f32) {
        let look = look_point(character, &self.options);
        self.orbit.pivot = self.orbit.pivot.lerp(look, self.options.follow_smoothing);

        if self.idle_time() > self.options.auto_reset_delay {
            if !self.recentering {
                self.recentering = true;
                log::debug!("camera idle, recentering behind character");
            }
            // Ease from wherever the camera is now, even when no
            // preferred direction is recorded.
            let behind = behind_direction(character, &self.options);
            let current = self.orbit.direction();
            let t = (dt * self.options.recenter_rate).min(1.0);
            let next = current.lerp(behind, t).normalize_or(behind);
            self.preferred_offset = Some(next);
            self.orbit.set_direction(next);
        }

        self.place_from_orbit();
    }
}
