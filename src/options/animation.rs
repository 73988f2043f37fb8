use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Crossfade durations (seconds) for the different clip transitions.
pub struct AnimationOptions {
    /// Fade between locomotion clips (idle / walk / run).
    #[schemars(title = "Locomotion Fade", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub locomotion_fade: f32,
    /// Fade into the jump clip.
    #[schemars(title = "Jump Fade", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub jump_fade: f32,
    /// Fade into and back out of an emote.
    #[schemars(skip)]
    pub emote_fade: f32,
    /// Fade used when a base state is picked from the UI.
    #[schemars(skip)]
    pub state_fade: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            locomotion_fade: 0.2,
            jump_fade: 0.1,
            emote_fade: 0.2,
            state_fade: 0.5,
        }
    }
}
