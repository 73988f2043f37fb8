//! Options methods for [`CharacterDemo`].

use std::path::Path;

use super::CharacterDemo;
use crate::animation::Animator;
use crate::options::Options;

impl<A: Animator> CharacterDemo<A> {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the controller, selector, and rig.
    pub fn apply_options(&mut self) {
        self.controller.set_params(self.options.locomotion.clone());
        self.selector.set_options(self.options.animation.clone());
        self.rig.set_options(self.options.camera.clone());
        self.sync_camera_options();
    }

    /// Set one option by `section` and `field` name from a JSON value.
    ///
    /// This is the path UI panels use. Returns `false` (and logs) when the
    /// field is unknown or the value has the wrong type.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> bool {
        match self.options.with_field(section, field, value) {
            Ok(updated) => {
                self.set_options(updated);
                true
            }
            Err(e) => {
                log::warn!("Rejected option {section}.{field}: {e}");
                false
            }
        }
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::camera::CameraMode;
    use crate::options::Options;
    use crate::CharacterDemo;

    #[test]
    fn set_option_reaches_subsystems() {
        let mut demo = CharacterDemo::with_robot(Options::default());
        assert!(demo.set_option("locomotion", "base_speed", json!(8.0)));
        assert_eq!(demo.controller().params().base_speed, 8.0);

        assert!(demo.set_option("camera", "follow_enabled", json!(true)));
        assert_eq!(demo.rig().mode(), CameraMode::FollowOnly);

        assert!(demo.set_option("animation", "jump_fade", json!(0.3)));
        assert_eq!(demo.selector().options().jump_fade, 0.3);
    }

    #[test]
    fn set_option_rejects_bad_input() {
        let mut demo = CharacterDemo::with_robot(Options::default());
        assert!(!demo.set_option("camera", "warp_drive", json!(true)));
        assert!(!demo.set_option("camera", "orbit_enabled", json!("yes")));
        assert_eq!(demo.options(), &Options::default());
    }

    #[test]
    fn out_of_range_delay_is_clamped() {
        let mut demo = CharacterDemo::with_robot(Options::default());
        assert!(demo.set_option("camera", "auto_reset_delay", json!(0.0)));
        assert_eq!(demo.options().camera.auto_reset_delay, 1.0);
    }

    #[test]
    fn presets_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("strider-engine-presets-{}", std::process::id()));
        let mut demo = CharacterDemo::with_robot(Options::default());
        assert!(demo.set_option("camera", "orbit_enabled", json!(true)));
        assert!(demo.save_preset("orbit", &dir));
        assert_eq!(demo.active_preset(), Some("orbit"));

        let mut fresh = CharacterDemo::with_robot(Options::default());
        assert!(fresh.load_preset("orbit", &dir));
        assert_eq!(fresh.rig().mode(), CameraMode::OrbitOnly);
        assert!(!fresh.load_preset("missing", &dir));
        assert_eq!(fresh.active_preset(), Some("orbit"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
