use glam::Vec3;

/// Logical character actions driven by held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionAction {
    /// Move toward −Z.
    Forward,
    /// Move toward +Z.
    Backward,
    /// Move toward −X.
    Left,
    /// Move toward +X.
    Right,
    /// Multiply speed while held.
    Sprint,
    /// Launch a jump on the rising edge.
    Jump,
}

/// Held-key flags for the character.
///
/// Event handlers write into it between frames; the locomotion step only
/// ever reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputState {
    /// Forward key held.
    pub forward: bool,
    /// Backward key held.
    pub backward: bool,
    /// Left key held.
    pub left: bool,
    /// Right key held.
    pub right: bool,
    /// Sprint key held.
    pub sprint: bool,
    /// Jump key held.
    pub jump_requested: bool,
}

impl InputState {
    /// Record a press or release.
    ///
    /// Returns `true` only for a not-pressed → pressed transition, so key
    /// auto-repeat never looks like a fresh press.
    pub fn set(&mut self, action: LocomotionAction, pressed: bool) -> bool {
        let flag = self.flag_mut(action);
        let rising = pressed && !*flag;
        *flag = pressed;
        rising
    }

    /// Current value of one flag.
    #[must_use]
    pub fn get(&self, action: LocomotionAction) -> bool {
        match action {
            LocomotionAction::Forward => self.forward,
            LocomotionAction::Backward => self.backward,
            LocomotionAction::Left => self.left,
            LocomotionAction::Right => self.right,
            LocomotionAction::Sprint => self.sprint,
            LocomotionAction::Jump => self.jump_requested,
        }
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Unit planar direction from the four movement flags, or zero.
    ///
    /// Opposing keys cancel. Diagonals are normalized so they are not
    /// faster than a single axis.
    #[must_use]
    pub fn move_direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }

    fn flag_mut(&mut self, action: LocomotionAction) -> &mut bool {
        match action {
            LocomotionAction::Forward => &mut self.forward,
            LocomotionAction::Backward => &mut self.backward,
            LocomotionAction::Left => &mut self.left,
            LocomotionAction::Right => &mut self.right,
            LocomotionAction::Sprint => &mut self.sprint,
            LocomotionAction::Jump => &mut self.jump_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_rising_edges_only() {
        let mut input = InputState::default();
        assert!(input.set(LocomotionAction::Jump, true));
        assert!(!input.set(LocomotionAction::Jump, true));
        assert!(!input.set(LocomotionAction::Jump, false));
        assert!(input.set(LocomotionAction::Jump, true));
    }

    #[test]
    fn diagonal_direction_is_unit_length() {
        let mut input = InputState::default();
        let _ = input.set(LocomotionAction::Forward, true);
        let _ = input.set(LocomotionAction::Right, true);
        let dir = input.move_direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.z < 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut input = InputState::default();
        let _ = input.set(LocomotionAction::Left, true);
        let _ = input.set(LocomotionAction::Right, true);
        assert_eq!(input.move_direction(), Vec3::ZERO);
    }

    #[test]
    fn reset_clears_everything() {
        let mut input = InputState::default();
        let _ = input.set(LocomotionAction::Sprint, true);
        let _ = input.set(LocomotionAction::Backward, true);
        input.reset();
        assert_eq!(input, InputState::default());
        assert!(!input.get(LocomotionAction::Sprint));
    }
}
