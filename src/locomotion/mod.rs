//! Character locomotion: keyboard flags in, position / heading / vertical
//! motion out.
//!
//! The step is deterministic and frame-rate independent: every timer and
//! integrator is driven by the caller's `dt`, never by frame counts.

pub mod heading;

use std::fmt;

use glam::Vec3;

use self::heading::{heading_of, lerp, shortest_turn, wrap_angle};
use crate::input::{InputState, LocomotionAction};
use crate::options::LocomotionOptions;
use crate::scene::Transform;

/// Height of the (flat) ground plane.
pub const GROUND_HEIGHT: f32 = 0.0;

/// Discrete movement state that drives animation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionLabel {
    /// Standing still on the ground.
    #[default]
    Idle,
    /// Moving at base speed.
    Walking,
    /// Moving while sprinting.
    Running,
    /// In the air.
    Jumping,
}

impl LocomotionLabel {
    /// Lower-case name for logs and UI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walking",
            Self::Running => "running",
            Self::Jumping => "jumping",
        }
    }
}

impl fmt::Display for LocomotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinematic state of the character.
///
/// Invariant: when `is_airborne` is false the character rests on the ground
/// (`position.y == GROUND_HEIGHT`) with zero vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionState {
    /// World-space position (feet).
    pub position: Vec3,
    /// Heading about +Y in `(−π, π]`; `0` faces +Z.
    pub yaw: f32,
    /// Vertical speed in units per second (positive = up).
    pub vertical_velocity: f32,
    /// Whether the character is mid-jump.
    pub is_airborne: bool,
    /// Seconds until another jump is allowed (never negative).
    pub jump_cooldown: f32,
    /// Smoothed turn rate in radians per second.
    pub turn_rate: f32,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::at(Transform::default())
    }
}

impl LocomotionState {
    /// Grounded state at the given transform.
    #[must_use]
    pub fn at(transform: Transform) -> Self {
        Self {
            position: Vec3::new(
                transform.position.x,
                GROUND_HEIGHT,
                transform.position.z,
            ),
            yaw: wrap_angle(transform.heading),
            vertical_velocity: 0.0,
            is_airborne: false,
            jump_cooldown: 0.0,
            turn_rate: 0.0,
        }
    }

    /// Scene-graph transform for the current state.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.yaw)
    }

    /// Whether a jump would be accepted right now.
    #[must_use]
    pub fn can_jump(&self) -> bool {
        !self.is_airborne && self.jump_cooldown == 0.0
    }

    /// Launch a jump if allowed. Returns `true` on launch.
    pub fn try_jump(&mut self, params: &LocomotionOptions) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.is_airborne = true;
        self.vertical_velocity = params.launch_velocity();
        true
    }

    /// Advance one frame using an input snapshot and return the label.
    pub fn advance(
        &mut self,
        input: &InputState,
        params: &LocomotionOptions,
        dt: f32,
    ) -> LocomotionLabel {
        let dt = dt.max(0.0);
        self.jump_cooldown = (self.jump_cooldown - dt).max(0.0);
        self.integrate_vertical(params, dt);

        let direction = input.move_direction();
        let moving = direction != Vec3::ZERO;
        if moving {
            let speed = if input.sprint {
                params.base_speed * params.sprint_multiplier
            } else {
                params.base_speed
            };
            self.position += direction * speed * dt;
            self.turn_toward(heading_of(direction.x, direction.z), params, dt);
        } else {
            self.turn_rate = lerp(self.turn_rate, 0.0, params.turn_decay);
        }

        if self.is_airborne {
            LocomotionLabel::Jumping
        } else if moving && input.sprint {
            LocomotionLabel::Running
        } else if moving {
            LocomotionLabel::Walking
        } else {
            LocomotionLabel::Idle
        }
    }

    /// Ballistic integration; landing clears the airborne flag and starts
    /// the jump cooldown.
    fn integrate_vertical(&mut self, params: &LocomotionOptions, dt: f32) {
        if !self.is_airborne {
            self.position.y = GROUND_HEIGHT;
            self.vertical_velocity = 0.0;
            return;
        }

        self.vertical_velocity -= params.gravity * dt;
        self.position.y += self.vertical_velocity * dt;

        if self.position.y <= GROUND_HEIGHT && self.vertical_velocity < 0.0 {
            self.position.y = GROUND_HEIGHT;
            self.vertical_velocity = 0.0;
            self.is_airborne = false;
            self.jump_cooldown = params.jump_cooldown;
        }
    }

    /// Critically damped turn toward `target` along the shortest arc.
    ///
    /// The step never exceeds the remaining error, so the heading cannot
    /// overshoot and oscillate at large `dt`.
    fn turn_toward(
        &mut self,
        target: f32,
        params: &LocomotionOptions,
        dt: f32,
    ) {
        let diff = shortest_turn(self.yaw, target);
        self.turn_rate = lerp(
            self.turn_rate,
            diff.abs() * params.turn_gain,
            params.turn_smoothing,
        );
        let step = (self.turn_rate * dt)
            .min(params.max_turn_rate * dt)
            .min(diff.abs());
        self.yaw = wrap_angle(self.yaw + diff.signum() * step);
    }
}

/// Owns the character's input flags and kinematic state.
///
/// ```
/// # use strider::input::LocomotionAction;
/// # use strider::locomotion::{LocomotionController, LocomotionLabel};
/// # use strider::options::LocomotionOptions;
/// let mut controller = LocomotionController::new(LocomotionOptions::default());
/// let _ = controller.set_input(LocomotionAction::Forward, true);
/// assert_eq!(controller.update(1.0 / 60.0), LocomotionLabel::Walking);
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController {
    state: LocomotionState,
    input: InputState,
    params: LocomotionOptions,
    label: LocomotionLabel,
}

impl LocomotionController {
    /// Controller at the origin facing +Z.
    #[must_use]
    pub fn new(params: LocomotionOptions) -> Self {
        Self {
            state: LocomotionState::default(),
            input: InputState::default(),
            params,
            label: LocomotionLabel::Idle,
        }
    }

    /// Current kinematic state.
    #[must_use]
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Current held-key flags.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Label produced by the last [`update`](Self::update).
    #[must_use]
    pub fn label(&self) -> LocomotionLabel {
        self.label
    }

    /// Tuning parameters.
    #[must_use]
    pub fn params(&self) -> &LocomotionOptions {
        &self.params
    }

    /// Replace tuning parameters (takes effect next frame).
    pub fn set_params(&mut self, params: LocomotionOptions) {
        self.params = params;
    }

    /// Place the character at `transform`, grounded and at rest.
    pub fn teleport(&mut self, transform: Transform) {
        self.state = LocomotionState::at(transform);
    }

    /// Scene-graph transform for the current state.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    /// Record a key edge.
    ///
    /// A jump only launches on a not-pressed → pressed transition while
    /// grounded with no cooldown pending. Returns `true` when a jump was
    /// launched.
    pub fn set_input(&mut self, action: LocomotionAction, pressed: bool) -> bool {
        let rising = self.input.set(action, pressed);
        if action == LocomotionAction::Jump && rising {
            return self.state.try_jump(&self.params);
        }
        false
    }

    /// Release every key (e.g. when the character is detached).
    pub fn release_all(&mut self) {
        self.input.reset();
    }

    /// Advance one frame and return the locomotion label.
    pub fn update(&mut self, dt: f32) -> LocomotionLabel {
        let input = self.input;
        let label = self.state.advance(&input, &self.params, dt);
        if label != self.label {
            log::debug!("locomotion {} -> {}", self.label, label);
        }
        self.label = label;
        label
    }
}
