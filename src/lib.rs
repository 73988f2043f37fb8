// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person character locomotion with a blended camera rig.
//!
//! Strider moves a single character from held keys (walk, sprint, jump,
//! smooth turning), picks animation clips from its movement state, and
//! drives a camera that can sit still, orbit, follow, or do both at once
//! with an idle auto-recenter.
//!
//! # Key entry points
//!
//! - [`CharacterDemo`] - the per-frame facade tying everything together
//! - [`locomotion::LocomotionController`] - movement, jumping, turning
//! - [`animation::AnimationStateSelector`] - label → clip crossfades
//! - [`camera::CameraRig`] - the four camera modes
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame order
//!
//! locomotion step → scene write-back → animation selection → animator
//! advance → camera rig. The core never blocks and every timer is driven by
//! the caller's `dt`.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod locomotion;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::command::DemoCommand;
pub use engine::{CharacterDemo, FrameReport};
pub use error::StriderError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
