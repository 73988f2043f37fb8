//! Command dispatch and raw input for [`CharacterDemo`].

use super::command::DemoCommand;
use super::CharacterDemo;
use crate::animation::Animator;
use crate::input::InputEvent;

impl<A: Animator> CharacterDemo<A> {
    /// Execute a single command.
    pub fn execute(&mut self, command: DemoCommand) {
        match command {
            DemoCommand::SetInput { action, pressed } => {
                if self.controller.set_input(action, pressed) {
                    log::debug!("jump launched");
                }
            }
            DemoCommand::ReleaseInput => {
                self.controller.release_all();
                self.input_processor.release_all();
            }
            DemoCommand::SetOrbitEnabled { enabled } => {
                self.set_orbit_enabled(enabled);
            }
            DemoCommand::SetFollowEnabled { enabled } => {
                self.set_follow_enabled(enabled);
            }
            DemoCommand::ToggleOrbit => {
                self.set_orbit_enabled(!self.options.camera.orbit_enabled);
            }
            DemoCommand::ToggleFollow => {
                self.set_follow_enabled(!self.options.camera.follow_enabled);
            }
            DemoCommand::SetAutoResetDelay { seconds } => {
                self.rig.set_auto_reset_delay(seconds);
                self.sync_camera_options();
            }
            DemoCommand::ResetCamera => self.rig.reset_position(),
            DemoCommand::RotateCamera { delta } => self.rig.rotate(delta),
            DemoCommand::PanCamera { delta } => self.rig.pan(delta),
            DemoCommand::Zoom { delta } => self.rig.zoom(delta),
            DemoCommand::PlayEmote { clip } => {
                if self.character.is_none() {
                    log::warn!("emote {clip:?} ignored: no character");
                    return;
                }
                let _ = self.selector.play_emote(&clip, &mut self.animator);
            }
            DemoCommand::PlayState { clip } => {
                if self.character.is_none() {
                    log::warn!("state {clip:?} ignored: no character");
                    return;
                }
                let _ = self.selector.play_state(&clip, &mut self.animator);
            }
        }
    }

    /// Process a platform-agnostic input event through the key bindings.
    ///
    /// Returns `true` if the event produced a command.
    ///
    /// ```
    /// use strider::input::InputEvent;
    /// use strider::CharacterDemo;
    /// use strider::options::Options;
    ///
    /// let mut demo = CharacterDemo::with_robot(Options::default());
    /// assert!(demo.handle_input(InputEvent::Key {
    ///     code: "KeyO".into(),
    ///     pressed: true,
    /// }));
    /// assert!(demo.options().camera.orbit_enabled);
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let Some(command) = self
            .input_processor
            .handle_event(event, &self.options.keybindings)
        else {
            return false;
        };
        self.execute(command);
        true
    }

    /// Enable or disable user orbit controls.
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.rig.set_orbit_enabled(enabled);
        self.sync_camera_options();
    }

    /// Enable or disable character following.
    pub fn set_follow_enabled(&mut self, enabled: bool) {
        self.rig.set_follow_enabled(enabled);
        self.sync_camera_options();
    }
}
