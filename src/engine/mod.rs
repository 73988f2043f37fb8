//! The demo facade: owns the scene, the character controller, animation
//! selection, the animator, and the camera rig, and runs them in a fixed
//! order once per frame.

pub mod command;
mod input;
mod options;

use glam::Vec3;

use self::command::DemoCommand;
use crate::animation::{
    AnimationRequest, AnimationStateSelector, Animator, ClipLibrary, ClipMixer,
};
use crate::camera::{Camera, CameraMode, CameraRig};
use crate::input::InputProcessor;
use crate::locomotion::{LocomotionController, LocomotionLabel};
use crate::options::Options;
use crate::scene::{NodeId, SceneGraph, Transform};
use crate::util::frame_timing::FrameTiming;

/// What happened during one [`CharacterDemo::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Locomotion label after the step.
    pub label: LocomotionLabel,
    /// Crossfades issued this frame, in order.
    pub animation: Vec<AnimationRequest>,
    /// Camera mode during the frame.
    pub camera_mode: CameraMode,
    /// Character transform after the step, if one is spawned.
    pub character: Option<Transform>,
}

/// A single controllable character with a camera rig.
///
/// Per frame: locomotion step, scene write-back, animation selection,
/// animator advance (feeding completion events back to the selector), then
/// the camera rig reads the updated transform.
///
/// ```
/// use strider::{CharacterDemo, DemoCommand};
/// use strider::input::LocomotionAction;
/// use strider::options::Options;
///
/// let mut demo = CharacterDemo::with_robot(Options::default());
/// let _ = demo.spawn_character("robot", Default::default());
/// demo.execute(DemoCommand::SetInput {
///     action: LocomotionAction::Forward,
///     pressed: true,
/// });
/// let report = demo.update(1.0 / 60.0);
/// assert_eq!(report.label.as_str(), "walking");
/// ```
pub struct CharacterDemo<A: Animator> {
    scene: SceneGraph,
    character: Option<NodeId>,
    controller: LocomotionController,
    selector: AnimationStateSelector,
    animator: A,
    rig: CameraRig,
    options: Options,
    input_processor: InputProcessor,
    active_preset: Option<String>,
    /// Frame timing for the presenter (FPS readout).
    pub frame_timing: FrameTiming,
}

impl CharacterDemo<ClipMixer> {
    /// Demo driving the reference mixer with the humanoid clip set.
    #[must_use]
    pub fn with_robot(options: Options) -> Self {
        Self::new(ClipMixer::new(ClipLibrary::robot_expressive()), options)
    }
}

impl<A: Animator> CharacterDemo<A> {
    /// Empty scene, no character, subsystems configured from `options`.
    pub fn new(animator: A, options: Options) -> Self {
        let mut demo = Self {
            scene: SceneGraph::new(),
            character: None,
            controller: LocomotionController::new(options.locomotion.clone()),
            selector: AnimationStateSelector::new(options.animation.clone()),
            animator,
            rig: CameraRig::new(options.camera.clone()),
            options,
            input_processor: InputProcessor::new(),
            active_preset: None,
            frame_timing: FrameTiming::new(),
        };
        demo.sync_camera_options();
        demo
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The scene graph.
    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Handle of the controlled character.
    #[must_use]
    pub fn character(&self) -> Option<NodeId> {
        self.character
    }

    /// Character transform, if spawned.
    #[must_use]
    pub fn character_transform(&self) -> Option<Transform> {
        self.character
            .and_then(|id| self.scene.transform(id))
            .copied()
    }

    /// Locomotion controller.
    #[must_use]
    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    /// Animation selector.
    #[must_use]
    pub fn selector(&self) -> &AnimationStateSelector {
        &self.selector
    }

    /// The animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the preset last loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    // ── Scene ───────────────────────────────────────────────────────

    /// Place a character in the scene and make it the controlled one.
    ///
    /// An existing character is despawned first. The controller is
    /// teleported to `transform` with all keys released, and the camera
    /// retargets to the new node.
    pub fn spawn_character(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
    ) -> NodeId {
        let _ = self.despawn_character();
        let name = name.into();
        self.controller.teleport(transform);
        self.controller.release_all();
        let grounded = self.controller.transform();
        let id = self.scene.insert(name.clone(), grounded);
        self.character = Some(id);
        self.selector.reset();
        self.rig.set_target(Some(id));
        log::info!("spawned character '{name}' at {}", grounded.position);
        id
    }

    /// Remove the controlled character. Returns `false` if there was none.
    pub fn despawn_character(&mut self) -> bool {
        let Some(id) = self.character.take() else {
            return false;
        };
        let _ = self.scene.remove(id);
        self.controller.release_all();
        self.selector.reset();
        self.rig.set_target(None);
        log::info!("despawned character {}", id.raw());
        true
    }

    /// Notify the camera of a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Run one frame.
    pub fn update(&mut self, dt: f32) -> FrameReport {
        let dt = dt.max(0.0);
        let mut animation = Vec::new();

        let label = match self.character {
            Some(id) => {
                let label = self.controller.update(dt);
                let _ = self.scene.set_transform(id, self.controller.transform());
                animation.extend(self.selector.select(label, &mut self.animator));
                label
            }
            None => self.controller.label(),
        };

        for event in self.animator.advance(dt) {
            animation.extend(self.selector.on_animator_event(&event, &mut self.animator));
        }

        self.rig.update(dt, &self.scene);

        FrameReport {
            label,
            animation,
            camera_mode: self.rig.mode(),
            character: self.character_transform(),
        }
    }

    /// Eye position, for presenters that only need a point.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.rig.camera().eye
    }

    /// Keep the stored camera options in step with what the rig accepted.
    fn sync_camera_options(&mut self) {
        let camera = self.rig.options();
        self.options.camera.orbit_enabled = camera.orbit_enabled;
        self.options.camera.follow_enabled = camera.follow_enabled;
        self.options.camera.auto_reset_delay = camera.auto_reset_delay;
    }

    /// Execute a batch of commands in order.
    pub fn execute_all(&mut self, commands: impl IntoIterator<Item = DemoCommand>) {
        for command in commands {
            self.execute(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::animator::testing::RecordingAnimator;
    use crate::input::LocomotionAction;

    const DT: f32 = 1.0 / 60.0;

    fn demo() -> CharacterDemo<RecordingAnimator> {
        CharacterDemo::new(RecordingAnimator::default(), Options::default())
    }

    fn press(demo: &mut CharacterDemo<RecordingAnimator>, action: LocomotionAction) {
        demo.execute(DemoCommand::SetInput {
            action,
            pressed: true,
        });
    }

    #[test]
    fn scene_tracks_controller() {
        let mut demo = demo();
        let id = demo.spawn_character("robot", Transform::default());
        press(&mut demo, LocomotionAction::Right);
        for _ in 0..60 {
            let _ = demo.update(DT);
        }
        let t = demo.scene().transform(id).copied().unwrap();
        assert!((t.position.x - 5.0).abs() < 1e-3);
        assert_eq!(t, demo.controller().transform());
    }

    #[test]
    fn walking_issues_one_crossfade() {
        let mut demo = demo();
        let _ = demo.spawn_character("robot", Transform::default());
        let first = demo.update(DT);
        assert_eq!(first.animation.len(), 1);
        assert_eq!(first.animation[0].clip, "Idle");

        press(&mut demo, LocomotionAction::Forward);
        let mut issued = 0;
        for _ in 0..120 {
            issued += demo.update(DT).animation.len();
        }
        assert_eq!(issued, 1);
        assert_eq!(demo.animator().clips(), vec!["Idle", "Walking"]);
    }

    #[test]
    fn jump_cycle_reports_labels() {
        let mut demo = demo();
        let _ = demo.spawn_character("robot", Transform::default());
        let _ = demo.update(DT);
        press(&mut demo, LocomotionAction::Jump);

        let report = demo.update(DT);
        assert_eq!(report.label, LocomotionLabel::Jumping);
        assert_eq!(report.animation[0].clip, "Jump");

        let mut landed = false;
        for _ in 0..120 {
            if demo.update(DT).label == LocomotionLabel::Idle {
                landed = true;
                break;
            }
        }
        assert!(landed);
    }

    #[test]
    fn emote_restores_locomotion_clip() {
        let mut demo = demo();
        let _ = demo.spawn_character("robot", Transform::default());
        let _ = demo.update(DT);
        demo.execute(DemoCommand::PlayEmote {
            clip: "Wave".into(),
        });
        let _ = demo.animator.finish_current();
        let report = demo.update(DT);
        assert_eq!(report.animation.len(), 1);
        assert_eq!(report.animation[0].clip, "Idle");
        assert_eq!(demo.animator().clips(), vec!["Idle", "Wave", "Idle"]);
    }

    #[test]
    fn emote_without_character_is_ignored() {
        let mut demo = demo();
        demo.execute(DemoCommand::PlayEmote {
            clip: "Wave".into(),
        });
        assert!(demo.animator().requests.is_empty());
    }

    #[test]
    fn follow_camera_tracks_spawned_character() {
        let mut demo = demo();
        let _ = demo.spawn_character("robot", Transform::default());
        demo.execute(DemoCommand::SetFollowEnabled { enabled: true });
        for _ in 0..600 {
            let _ = demo.update(DT);
        }
        assert_eq!(demo.rig().mode(), CameraMode::FollowOnly);
        assert!((demo.eye() - Vec3::new(0.0, 5.0, -15.0)).length() < 1e-3);
    }

    #[test]
    fn despawn_leaves_camera_in_place() {
        let mut demo = demo();
        let _ = demo.spawn_character("robot", Transform::default());
        demo.execute(DemoCommand::SetFollowEnabled { enabled: true });
        let _ = demo.update(DT);
        assert!(demo.despawn_character());
        assert!(!demo.despawn_character());
        let eye = demo.eye();
        let report = demo.update(DT);
        assert_eq!(report.character, None);
        assert_eq!(demo.eye(), eye);
    }

    #[test]
    fn respawn_starts_grounded_and_idle() {
        let mut demo = demo();
        let _ = demo.spawn_character("a", Transform::default());
        press(&mut demo, LocomotionAction::Jump);
        let _ = demo.update(DT);
        let second = demo.spawn_character(
            "b",
            Transform::new(Vec3::new(3.0, 7.0, 0.0), 0.0),
        );
        assert_eq!(demo.scene().len(), 1);
        assert_eq!(demo.character(), Some(second));
        assert_eq!(demo.rig().target(), Some(second));
        let t = demo.character_transform().unwrap();
        assert_eq!(t.position, Vec3::new(3.0, 0.0, 0.0));
        assert!(!demo.controller().state().is_airborne);
    }
}
