use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Locomotion", inline)]
#[serde(default)]
/// Character movement, jump, and turning parameters.
pub struct LocomotionOptions {
    /// Walking speed in units per second.
    #[schemars(title = "Walk Speed", range(min = 1.0, max = 15.0), extend("step" = 0.5))]
    pub base_speed: f32,
    /// Speed multiplier applied while sprinting.
    #[schemars(title = "Sprint Multiplier", range(min = 1.0, max = 3.0), extend("step" = 0.1))]
    pub sprint_multiplier: f32,
    /// Downward acceleration in units/s².
    #[schemars(skip)]
    pub gravity: f32,
    /// Desired jump apex height; launch speed is derived from it.
    #[schemars(title = "Jump Height", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub jump_height: f32,
    /// Seconds after landing during which a new jump is refused.
    #[schemars(skip)]
    pub jump_cooldown: f32,
    /// Gain from heading error (rad) to desired turn rate (rad/s).
    #[schemars(skip)]
    pub turn_gain: f32,
    /// Upper bound on the turn rate in rad/s.
    #[schemars(skip)]
    pub max_turn_rate: f32,
    /// Per-frame lerp factor pulling the turn rate toward its target.
    #[schemars(skip)]
    pub turn_smoothing: f32,
    /// Per-frame lerp factor decaying the turn rate when standing still.
    #[schemars(skip)]
    pub turn_decay: f32,
}

impl LocomotionOptions {
    /// Initial vertical speed that reaches `jump_height` under `gravity`.
    #[must_use]
    pub fn launch_velocity(&self) -> f32 {
        (2.0 * self.gravity * self.jump_height).sqrt()
    }
}

impl Default for LocomotionOptions {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            sprint_multiplier: 1.8,
            gravity: 30.0,
            jump_height: 2.0,
            jump_cooldown: 0.2,
            turn_gain: 20.0,
            max_turn_rate: 20.0,
            turn_smoothing: 0.5,
            turn_decay: 0.1,
        }
    }
}
