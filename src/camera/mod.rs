//! Camera system: a perspective camera driven by a rig that blends free
//! orbit, character following, and a hybrid of the two.

/// Core camera struct and matrix helpers.
pub mod core;
/// Follow-camera target points.
pub mod follow;
/// The camera mode state machine.
pub mod mode;
/// Spherical orbit around a pivot.
pub mod orbit;
/// The per-frame camera rig.
pub mod rig;

pub use self::core::Camera;
pub use mode::CameraMode;
pub use orbit::OrbitState;
pub use rig::CameraRig;
