use serde::{Deserialize, Serialize};

use super::state::LocomotionAction;

/// Demo-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// KeyF = "toggle_follow"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Hold to walk forward (−Z).
    MoveForward,
    /// Hold to walk backward (+Z).
    MoveBackward,
    /// Hold to strafe left (−X).
    MoveLeft,
    /// Hold to strafe right (+X).
    MoveRight,
    /// Hold to run.
    Sprint,
    /// Press to jump.
    Jump,
    /// Snap the camera back to its default pose.
    ResetCamera,
    /// Toggle user orbit controls.
    ToggleOrbit,
    /// Toggle character following.
    ToggleFollow,
}

impl KeyAction {
    /// The held-key locomotion flag this action drives, if any.
    #[must_use]
    pub fn locomotion(self) -> Option<LocomotionAction> {
        match self {
            Self::MoveForward => Some(LocomotionAction::Forward),
            Self::MoveBackward => Some(LocomotionAction::Backward),
            Self::MoveLeft => Some(LocomotionAction::Left),
            Self::MoveRight => Some(LocomotionAction::Right),
            Self::Sprint => Some(LocomotionAction::Sprint),
            Self::Jump => Some(LocomotionAction::Jump),
            Self::ResetCamera | Self::ToggleOrbit | Self::ToggleFollow => None,
        }
    }
}
