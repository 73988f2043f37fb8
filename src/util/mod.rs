//! Shared utilities.

/// Frame delta measurement and FPS smoothing.
pub mod frame_timing;
