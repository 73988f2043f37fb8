use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Allowed orbit range around the pivot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitLimits {
    /// Smallest polar angle from straight up, in degrees.
    pub min_polar_deg: f32,
    /// Largest polar angle from straight up, in degrees.
    pub max_polar_deg: f32,
    /// Closest allowed eye distance.
    pub min_distance: f32,
    /// Farthest allowed eye distance.
    pub max_distance: f32,
}

impl OrbitLimits {
    /// Limits for free orbiting around a fixed point.
    pub const FREE: Self = Self {
        min_polar_deg: 25.0,
        max_polar_deg: 85.0,
        min_distance: 10.0,
        max_distance: 100.0,
    };

    /// Tighter limits used while orbiting a followed character.
    pub const FOLLOW: Self = Self {
        min_polar_deg: 10.0,
        max_polar_deg: 80.0,
        min_distance: 5.0,
        max_distance: 30.0,
    };

    /// Polar range in radians.
    #[must_use]
    pub fn polar_range(&self) -> (f32, f32) {
        (self.min_polar_deg.to_radians(), self.max_polar_deg.to_radians())
    }
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self::FREE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Controls", inline)]
#[serde(default)]
/// Camera rig toggles, projection, and follow/orbit tuning.
pub struct CameraOptions {
    /// Whether the user can orbit the camera.
    #[schemars(title = "Enable Controls")]
    pub orbit_enabled: bool,
    /// Whether the camera tracks the character.
    #[schemars(title = "Follow Camera")]
    pub follow_enabled: bool,
    /// Idle seconds before the hybrid camera swings back behind the
    /// character.
    #[schemars(title = "Auto Reset (s)", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub auto_reset_delay: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit sensitivity in radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity in world units per pixel of drag.
    #[schemars(title = "Pan Speed", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub pan_speed: f32,
    /// Fraction of the distance removed per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Authored default eye position.
    #[schemars(skip)]
    pub default_eye: [f32; 3],
    /// Authored default look-at point.
    #[schemars(skip)]
    pub default_look_at: [f32; 3],
    /// Orbit limits when not following.
    #[schemars(skip)]
    pub free_limits: OrbitLimits,
    /// Orbit limits in hybrid mode.
    #[schemars(skip)]
    pub follow_limits: OrbitLimits,
    /// Height of the follow eye above the character.
    #[schemars(skip)]
    pub follow_height: f32,
    /// Distance of the follow eye behind the character.
    #[schemars(skip)]
    pub follow_distance: f32,
    /// Height of the look-at point above the character's feet.
    #[schemars(skip)]
    pub eye_height: f32,
    /// Per-frame lerp factor toward the follow targets.
    #[schemars(skip)]
    pub follow_smoothing: f32,
    /// Rate (1/s) at which the preferred direction swings back.
    #[schemars(skip)]
    pub recenter_rate: f32,
    /// Upward bias of the recentered direction.
    #[schemars(skip)]
    pub recenter_lift: f32,
}

impl CameraOptions {
    /// Valid range of [`auto_reset_delay`](Self::auto_reset_delay).
    pub const AUTO_RESET_RANGE: (f32, f32) = (1.0, 10.0);

    /// Clamp an auto-reset delay into the supported range.
    #[must_use]
    pub fn clamp_auto_reset(seconds: f32) -> f32 {
        let (lo, hi) = Self::AUTO_RESET_RANGE;
        if seconds.is_nan() {
            return lo;
        }
        seconds.clamp(lo, hi)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            orbit_enabled: false,
            follow_enabled: false,
            auto_reset_delay: 5.0,
            fovy: 60.0,
            znear: 1.0,
            zfar: 1000.0,
            rotate_speed: 0.005,
            pan_speed: 0.02,
            zoom_speed: 0.1,
            default_eye: [-5.0, 3.0, 10.0],
            default_look_at: [0.0, 2.0, 0.0],
            free_limits: OrbitLimits::FREE,
            follow_limits: OrbitLimits::FOLLOW,
            follow_height: 5.0,
            follow_distance: 15.0,
            eye_height: 1.5,
            follow_smoothing: 0.05,
            recenter_rate: 0.5,
            recenter_lift: 0.3,
        }
    }
}
