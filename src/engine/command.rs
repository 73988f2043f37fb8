//! The demo's complete interactive vocabulary.
//!
//! Every user-facing operation is represented as a `DemoCommand`, whether
//! it came from a key press, a mouse gesture, a UI button, or code.
//! Consumers construct commands and pass them to
//! [`CharacterDemo::execute`](super::CharacterDemo::execute).

use glam::Vec2;

use crate::input::LocomotionAction;

/// A discrete or parameterized operation the demo can perform.
///
/// The demo never cares *how* a command was triggered; every source looks
/// identical:
///
/// ```ignore
/// demo.execute(DemoCommand::SetFollowEnabled { enabled: true });
/// demo.execute(DemoCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DemoCommand {
    // ── Character ───────────────────────────────────────────────────
    /// Press or release a held locomotion key.
    SetInput {
        /// Which logical key.
        action: LocomotionAction,
        /// `true` for press.
        pressed: bool,
    },

    /// Release every held locomotion key (e.g. on window focus loss).
    ReleaseInput,

    // ── Camera ──────────────────────────────────────────────────────
    /// Enable or disable user orbit controls.
    SetOrbitEnabled {
        /// New toggle value.
        enabled: bool,
    },

    /// Enable or disable character following.
    SetFollowEnabled {
        /// New toggle value.
        enabled: bool,
    },

    /// Flip the orbit toggle.
    ToggleOrbit,

    /// Flip the follow toggle.
    ToggleFollow,

    /// Set the hybrid idle timeout (clamped to 1–10 s).
    SetAutoResetDelay {
        /// Seconds without orbit input before recentering.
        seconds: f32,
    },

    /// Return the camera to its authored default pose.
    ResetCamera,

    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the orbit pivot by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Animation ───────────────────────────────────────────────────
    /// Play a one-shot emote, then restore the resting clip.
    PlayEmote {
        /// Clip name (e.g. `"Wave"`).
        clip: String,
    },

    /// Switch the resting clip to a named base state.
    PlayState {
        /// Clip name (e.g. `"Dance"`).
        clip: String,
    },
}
