//! Reference [`Animator`]: a named clip library plus a linear crossfade
//! mixer.
//!
//! Clips carry only a duration and loop mode; sampling skeletal poses is
//! the renderer's business. The mixer tracks per-playback time and blend
//! weight so the demo can report what is playing and raise completion
//! events for play-once clips.

use rustc_hash::FxHashMap;

use super::animator::{Animator, AnimatorEvent, PlaybackId};

/// How a clip behaves when it reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Wrap around forever.
    Repeat,
    /// Hold the last frame and raise [`AnimatorEvent::Finished`] once.
    Once,
}

/// Static description of a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    /// Clip length in seconds.
    pub duration: f32,
    /// End-of-clip behavior.
    pub loop_mode: LoopMode,
}

/// Named clips available to a [`ClipMixer`].
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: FxHashMap<String, ClipSpec>,
}

/// Base states offered by the demo UI. The first four loop.
pub const STATE_CLIPS: [&str; 7] = [
    "Idle", "Walking", "Running", "Dance", "Death", "Sitting", "Standing",
];

/// One-shot emotes offered by the demo UI.
pub const EMOTE_CLIPS: [&str; 6] =
    ["Jump", "Yes", "No", "Wave", "Punch", "ThumbsUp"];

impl ClipLibrary {
    /// Empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_clip(
        mut self,
        name: impl Into<String>,
        duration: f32,
        loop_mode: LoopMode,
    ) -> Self {
        self.insert(name, duration, loop_mode);
        self
    }

    /// Register (or replace) a clip.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        duration: f32,
        loop_mode: LoopMode,
    ) {
        let _ = self.clips.insert(
            name.into(),
            ClipSpec {
                duration: duration.max(f32::EPSILON),
                loop_mode,
            },
        );
    }

    /// Look up a clip.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClipSpec> {
        self.clips.get(name)
    }

    /// Number of clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// The humanoid demo rig's clip set with nominal lengths.
    ///
    /// Asset import replaces these with measured durations via
    /// [`insert`](Self::insert).
    #[must_use]
    pub fn robot_expressive() -> Self {
        const STATE_LENGTHS: [f32; 7] = [4.0, 1.0, 0.7, 2.5, 1.5, 1.2, 1.2];
        const EMOTE_LENGTHS: [f32; 6] = [0.8, 1.2, 1.2, 1.6, 0.7, 1.4];

        let mut library = Self::new();
        for (i, (name, len)) in STATE_CLIPS.iter().zip(STATE_LENGTHS).enumerate()
        {
            let mode = if i < 4 { LoopMode::Repeat } else { LoopMode::Once };
            library.insert(*name, len, mode);
        }
        for (name, len) in EMOTE_CLIPS.iter().zip(EMOTE_LENGTHS) {
            library.insert(*name, len, LoopMode::Once);
        }
        library
    }
}

/// A clip currently contributing to the blend.
#[derive(Debug, Clone)]
struct Action {
    playback: PlaybackId,
    clip: String,
    spec: ClipSpec,
    time: f32,
    weight: f32,
    /// Weight change per second; positive fades in, negative fades out.
    fade_rate: f32,
    finished: bool,
}

/// Linear crossfade mixer over a [`ClipLibrary`].
#[derive(Debug, Clone)]
pub struct ClipMixer {
    library: ClipLibrary,
    actions: Vec<Action>,
    next_playback: u64,
    active: Option<PlaybackId>,
}

impl ClipMixer {
    /// Mixer with nothing playing.
    #[must_use]
    pub fn new(library: ClipLibrary) -> Self {
        Self {
            library,
            actions: Vec::new(),
            next_playback: 0,
            active: None,
        }
    }

    /// The clip library.
    #[must_use]
    pub fn library(&self) -> &ClipLibrary {
        &self.library
    }

    /// Name of the clip most recently crossfaded to.
    #[must_use]
    pub fn active_clip(&self) -> Option<&str> {
        let active = self.active?;
        self.actions
            .iter()
            .find(|a| a.playback == active)
            .map(|a| a.clip.as_str())
    }

    /// Current blend weight of a clip (0 when not playing).
    #[must_use]
    pub fn weight(&self, clip: &str) -> f32 {
        self.actions
            .iter()
            .filter(|a| a.clip == clip)
            .map(|a| a.weight)
            .sum()
    }

    /// Number of clips contributing to the blend.
    #[must_use]
    pub fn playing_count(&self) -> usize {
        self.actions.len()
    }
}

impl Animator for ClipMixer {
    fn has_clip(&self, clip: &str) -> bool {
        self.library.get(clip).is_some()
    }

    fn crossfade_to(&mut self, clip: &str, duration: f32) -> Option<PlaybackId> {
        let spec = *self.library.get(clip)?;

        // Restarting a clip replaces its previous playback.
        self.actions.retain(|a| a.clip != clip);

        let instant = duration <= 0.0;
        if instant {
            self.actions.clear();
        } else {
            for action in &mut self.actions {
                action.fade_rate = -1.0 / duration;
            }
        }

        self.next_playback += 1;
        let playback = PlaybackId::new(self.next_playback);
        self.actions.push(Action {
            playback,
            clip: clip.to_owned(),
            spec,
            time: 0.0,
            weight: if instant { 1.0 } else { 0.0 },
            fade_rate: if instant { 0.0 } else { 1.0 / duration },
            finished: false,
        });
        self.active = Some(playback);
        Some(playback)
    }

    fn advance(&mut self, dt: f32) -> Vec<AnimatorEvent> {
        let dt = dt.max(0.0);
        let mut events = Vec::new();

        for action in &mut self.actions {
            if action.fade_rate != 0.0 {
                action.weight =
                    (action.weight + action.fade_rate * dt).clamp(0.0, 1.0);
                if action.weight == 0.0 || action.weight == 1.0 {
                    action.fade_rate = 0.0;
                }
            }

            if action.finished {
                continue;
            }
            action.time += dt;
            match action.spec.loop_mode {
                LoopMode::Repeat => {
                    action.time %= action.spec.duration;
                }
                LoopMode::Once => {
                    if action.time >= action.spec.duration {
                        action.time = action.spec.duration;
                        action.finished = true;
                        events.push(AnimatorEvent::Finished {
                            playback: action.playback,
                            clip: action.clip.clone(),
                        });
                    }
                }
            }
        }

        let active = self.active;
        self.actions
            .retain(|a| a.weight > 0.0 || Some(a.playback) == active);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixer() -> ClipMixer {
        ClipMixer::new(ClipLibrary::robot_expressive())
    }

    #[test]
    fn library_has_states_and_emotes() {
        let lib = ClipLibrary::robot_expressive();
        assert_eq!(lib.len(), 13);
        assert_eq!(lib.get("Walking").unwrap().loop_mode, LoopMode::Repeat);
        assert_eq!(lib.get("Death").unwrap().loop_mode, LoopMode::Once);
        assert_eq!(lib.get("Wave").unwrap().loop_mode, LoopMode::Once);
    }

    #[test]
    fn unknown_clip_is_refused() {
        let mut m = mixer();
        assert!(m.crossfade_to("Moonwalk", 0.2).is_none());
        assert_eq!(m.playing_count(), 0);
    }

    #[test]
    fn crossfade_blends_weights_linearly() {
        let mut m = mixer();
        let _ = m.crossfade_to("Idle", 0.0);
        assert_eq!(m.weight("Idle"), 1.0);

        let _ = m.crossfade_to("Walking", 0.2);
        let _ = m.advance(0.1);
        assert!((m.weight("Idle") - 0.5).abs() < 1e-5);
        assert!((m.weight("Walking") - 0.5).abs() < 1e-5);

        let _ = m.advance(0.2);
        assert_eq!(m.weight("Walking"), 1.0);
        assert_eq!(m.weight("Idle"), 0.0);
        assert_eq!(m.playing_count(), 1);
        assert_eq!(m.active_clip(), Some("Walking"));
    }

    #[test]
    fn once_clips_finish_exactly_once() {
        let mut m = mixer();
        let id = m.crossfade_to("Wave", 0.2).unwrap();
        let mut finished = Vec::new();
        for _ in 0..300 {
            finished.extend(m.advance(0.016));
        }
        assert_eq!(
            finished,
            vec![AnimatorEvent::Finished {
                playback: id,
                clip: "Wave".into()
            }]
        );
    }

    #[test]
    fn looping_clips_never_finish() {
        let mut m = mixer();
        let _ = m.crossfade_to("Running", 0.1);
        for _ in 0..500 {
            assert!(m.advance(0.016).is_empty());
        }
    }

    #[test]
    fn restarting_a_clip_issues_a_new_playback() {
        let mut m = mixer();
        let first = m.crossfade_to("Yes", 0.1).unwrap();
        let second = m.crossfade_to("Yes", 0.1).unwrap();
        assert_ne!(first, second);
        assert_eq!(m.playing_count(), 1);
    }
}
