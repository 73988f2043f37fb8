//! Clip selection and playback.
//!
//! [`AnimationStateSelector`] turns locomotion labels and UI requests into
//! crossfades on any [`Animator`]; [`ClipMixer`] is the reference animator
//! used by the demo and the viewer.

pub mod animator;
pub mod mixer;
pub mod selector;

pub use animator::{AnimationRequest, Animator, AnimatorEvent, PlaybackId};
pub use mixer::{ClipLibrary, ClipMixer, LoopMode, EMOTE_CLIPS, STATE_CLIPS};
pub use selector::{clip_for, AnimationStateSelector};
