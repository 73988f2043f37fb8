//! The clip-playback capability consumed by the selector.

/// Identity of one playback started through [`Animator::crossfade_to`].
///
/// Completion events carry it back so a listener can tell *which* request
/// finished instead of reacting to every completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackId(u64);

impl PlaybackId {
    /// Wrap a raw id. Animators hand these out monotonically.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric id.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Notifications raised by an animator while it advances.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorEvent {
    /// A play-once clip reached its end.
    Finished {
        /// Which playback finished.
        playback: PlaybackId,
        /// Name of the clip.
        clip: String,
    },
}

/// A crossfade that was handed to the animator.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// Clip name.
    pub clip: String,
    /// Blend duration in seconds.
    pub duration: f32,
}

/// Clip playback and blending.
///
/// Implementations own the clip library and mixer; the demo only asks for
/// blended transitions and drains completion events each frame.
pub trait Animator {
    /// Whether a clip with this name exists.
    fn has_clip(&self, clip: &str) -> bool;

    /// Restart `clip` and blend it in over `duration` seconds while the
    /// current clip blends out. Returns `None` if the clip is unknown.
    fn crossfade_to(&mut self, clip: &str, duration: f32) -> Option<PlaybackId>;

    /// Advance playback by `dt` and return the events raised meanwhile.
    fn advance(&mut self, dt: f32) -> Vec<AnimatorEvent>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{AnimationRequest, Animator, AnimatorEvent, PlaybackId};

    /// Animator that records every crossfade and finishes one-shots on
    /// demand.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingAnimator {
        pub(crate) requests: Vec<AnimationRequest>,
        pub(crate) missing: Vec<String>,
        pub(crate) queued: Vec<AnimatorEvent>,
        pub(crate) next: u64,
        pub(crate) last: Option<(PlaybackId, String)>,
    }

    impl RecordingAnimator {
        /// Queue a `Finished` event for the most recent playback.
        pub(crate) fn finish_current(&mut self) -> PlaybackId {
            let (playback, clip) =
                self.last.clone().unwrap_or((PlaybackId::new(u64::MAX), String::new()));
            self.queued.push(AnimatorEvent::Finished { playback, clip });
            playback
        }

        pub(crate) fn clips(&self) -> Vec<&str> {
            self.requests.iter().map(|r| r.clip.as_str()).collect()
        }
    }

    impl Animator for RecordingAnimator {
        fn has_clip(&self, clip: &str) -> bool {
            !self.missing.iter().any(|m| m == clip)
        }

        fn crossfade_to(
            &mut self,
            clip: &str,
            duration: f32,
        ) -> Option<PlaybackId> {
            if !self.has_clip(clip) {
                return None;
            }
            self.next += 1;
            let id = PlaybackId::new(self.next);
            self.requests.push(AnimationRequest {
                clip: clip.to_owned(),
                duration,
            });
            self.last = Some((id, clip.to_owned()));
            Some(id)
        }

        fn advance(&mut self, _dt: f32) -> Vec<AnimatorEvent> {
            std::mem::take(&mut self.queued)
        }
    }
}
