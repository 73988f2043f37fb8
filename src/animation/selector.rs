//! Edge-triggered mapping from locomotion labels to clip crossfades, with
//! one-shot emotes layered on top.

use super::animator::{AnimationRequest, Animator, AnimatorEvent, PlaybackId};
use crate::locomotion::LocomotionLabel;
use crate::options::AnimationOptions;

/// Clip played for a locomotion label.
#[must_use]
pub fn clip_for(label: LocomotionLabel) -> &'static str {
    match label {
        LocomotionLabel::Idle => "Idle",
        LocomotionLabel::Walking => "Walking",
        LocomotionLabel::Running => "Running",
        LocomotionLabel::Jumping => "Jump",
    }
}

/// Chooses which clip the animator should blend to.
///
/// A crossfade is only issued when the label differs from the last one
/// that actually reached the animator. Emotes remember the playback they
/// started and, when *that* playback finishes, blend back to the clip the
/// emote interrupted.
#[derive(Debug, Clone, Default)]
pub struct AnimationStateSelector {
    options: AnimationOptions,
    last_label: Option<LocomotionLabel>,
    resting_clip: Option<String>,
    pending_emote: Option<PlaybackId>,
}

impl AnimationStateSelector {
    /// Selector that has not emitted anything yet.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the fade durations.
    pub fn set_options(&mut self, options: AnimationOptions) {
        self.options = options;
    }

    /// Current fade durations.
    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Label of the last locomotion crossfade issued.
    #[must_use]
    pub fn last_label(&self) -> Option<LocomotionLabel> {
        self.last_label
    }

    /// Clip an emote returns to when it finishes.
    #[must_use]
    pub fn resting_clip(&self) -> Option<&str> {
        self.resting_clip.as_deref()
    }

    /// Playback of the emote currently in flight, if any.
    #[must_use]
    pub fn pending_emote(&self) -> Option<PlaybackId> {
        self.pending_emote
    }

    /// Forget everything emitted so far (e.g. the character was replaced).
    pub fn reset(&mut self) {
        self.last_label = None;
        self.resting_clip = None;
        self.pending_emote = None;
    }

    /// Crossfade to the clip for `label` if it changed since the last
    /// issued crossfade.
    ///
    /// A missing clip is skipped without recording the label, so the next
    /// frame tries again. A locomotion change cancels any emote in flight.
    pub fn select(
        &mut self,
        label: LocomotionLabel,
        animator: &mut dyn Animator,
    ) -> Option<AnimationRequest> {
        if self.last_label == Some(label) {
            return None;
        }
        let clip = clip_for(label);
        let duration = if label == LocomotionLabel::Jumping {
            self.options.jump_fade
        } else {
            self.options.locomotion_fade
        };

        if animator.crossfade_to(clip, duration).is_none() {
            log::debug!("no clip for {label}, skipping crossfade");
            return None;
        }
        log::debug!("animation: {clip} ({duration:.2}s)");
        self.last_label = Some(label);
        self.resting_clip = Some(clip.to_owned());
        self.pending_emote = None;
        Some(AnimationRequest {
            clip: clip.to_owned(),
            duration,
        })
    }

    /// Start a one-shot emote. Returns its playback id, or `None` if the
    /// animator has no such clip.
    pub fn play_emote(
        &mut self,
        clip: &str,
        animator: &mut dyn Animator,
    ) -> Option<PlaybackId> {
        let Some(playback) = animator.crossfade_to(clip, self.options.emote_fade)
        else {
            log::warn!("unknown emote clip {clip:?}");
            return None;
        };
        self.pending_emote = Some(playback);
        Some(playback)
    }

    /// Switch to a base state clip picked from the UI. It becomes the clip
    /// emotes return to.
    pub fn play_state(&mut self, clip: &str, animator: &mut dyn Animator) -> bool {
        if animator.crossfade_to(clip, self.options.state_fade).is_none() {
            log::warn!("unknown state clip {clip:?}");
            return false;
        }
        self.resting_clip = Some(clip.to_owned());
        self.pending_emote = None;
        true
    }

    /// React to an animator event. Returns the restoring crossfade when the
    /// pending emote finished.
    pub fn on_animator_event(
        &mut self,
        event: &AnimatorEvent,
        animator: &mut dyn Animator,
    ) -> Option<AnimationRequest> {
        let AnimatorEvent::Finished { playback, .. } = event;
        if self.pending_emote != Some(*playback) {
            return None;
        }
        self.pending_emote = None;

        let clip = self.resting_clip.clone()?;
        let duration = self.options.emote_fade;
        let _ = animator.crossfade_to(&clip, duration)?;
        Some(AnimationRequest { clip, duration })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::animator::testing::RecordingAnimator;

    fn selector() -> AnimationStateSelector {
        AnimationStateSelector::new(AnimationOptions::default())
    }

    #[test]
    fn emits_only_on_label_change() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();

        assert!(sel.select(LocomotionLabel::Idle, &mut anim).is_some());
        assert!(sel.select(LocomotionLabel::Idle, &mut anim).is_none());
        let walk = sel.select(LocomotionLabel::Walking, &mut anim).unwrap();
        assert_eq!(walk.clip, "Walking");
        assert!((walk.duration - 0.2).abs() < 1e-6);
        assert!(sel.select(LocomotionLabel::Walking, &mut anim).is_none());

        assert_eq!(anim.clips(), vec!["Idle", "Walking"]);
    }

    #[test]
    fn jump_uses_short_fade() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();
        let jump = sel.select(LocomotionLabel::Jumping, &mut anim).unwrap();
        assert_eq!(jump.clip, "Jump");
        assert!((jump.duration - 0.1).abs() < 1e-6);
    }

    #[test]
    fn missing_clip_is_retried_later() {
        let mut sel = selector();
        let mut anim = RecordingAnimator {
            missing: vec!["Running".into()],
            ..RecordingAnimator::default()
        };
        assert!(sel.select(LocomotionLabel::Running, &mut anim).is_none());
        assert_eq!(sel.last_label(), None);

        anim.missing.clear();
        assert!(sel.select(LocomotionLabel::Running, &mut anim).is_some());
        assert_eq!(sel.last_label(), Some(LocomotionLabel::Running));
    }

    #[test]
    fn emote_returns_to_interrupted_clip() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();
        let _ = sel.select(LocomotionLabel::Walking, &mut anim);

        let id = sel.play_emote("Wave", &mut anim).unwrap();
        assert_eq!(sel.pending_emote(), Some(id));
        let _ = anim.finish_current();

        let events = anim.advance(0.016);
        let restore = sel.on_animator_event(&events[0], &mut anim).unwrap();
        assert_eq!(restore.clip, "Walking");
        assert!((restore.duration - 0.2).abs() < 1e-6);
        assert_eq!(sel.pending_emote(), None);
        assert_eq!(anim.clips(), vec!["Walking", "Wave", "Walking"]);
    }

    #[test]
    fn unrelated_completion_is_ignored() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();
        let _ = sel.select(LocomotionLabel::Idle, &mut anim);
        let _ = sel.play_emote("Yes", &mut anim);

        let stray = AnimatorEvent::Finished {
            playback: PlaybackId::new(999),
            clip: "Death".into(),
        };
        assert!(sel.on_animator_event(&stray, &mut anim).is_none());
        assert!(sel.pending_emote().is_some());
    }

    #[test]
    fn locomotion_change_cancels_emote() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();
        let _ = sel.select(LocomotionLabel::Idle, &mut anim);
        let _ = sel.play_emote("Punch", &mut anim);
        let punch = anim.finish_current();

        let _ = sel.select(LocomotionLabel::Running, &mut anim);
        let event = AnimatorEvent::Finished {
            playback: punch,
            clip: "Punch".into(),
        };
        assert!(sel.on_animator_event(&event, &mut anim).is_none());
        assert_eq!(anim.clips(), vec!["Idle", "Punch", "Running"]);
    }

    #[test]
    fn state_clip_becomes_restore_target() {
        let mut sel = selector();
        let mut anim = RecordingAnimator::default();
        let _ = sel.select(LocomotionLabel::Idle, &mut anim);
        assert!(sel.play_state("Dance", &mut anim));
        assert_eq!(sel.resting_clip(), Some("Dance"));
        assert!((anim.requests[1].duration - 0.5).abs() < 1e-6);

        let _ = sel.play_emote("ThumbsUp", &mut anim);
        let _ = anim.finish_current();
        let events = anim.advance(0.0);
        let restore = sel.on_animator_event(&events[0], &mut anim).unwrap();
        assert_eq!(restore.clip, "Dance");
    }

    #[test]
    fn unknown_emote_is_rejected() {
        let mut sel = selector();
        let mut anim = RecordingAnimator {
            missing: vec!["Moonwalk".into()],
            ..RecordingAnimator::default()
        };
        assert!(sel.play_emote("Moonwalk", &mut anim).is_none());
        assert!(!sel.play_state("Moonwalk", &mut anim));
        assert!(anim.requests.is_empty());
    }
}
