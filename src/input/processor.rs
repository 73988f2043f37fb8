//! Converts raw platform events into demo commands.
//!
//! The `InputProcessor` owns all transient pointer state (cursor tracking,
//! pressed buttons, modifier keys). It is the only thing that sits between
//! raw window events and the demo's
//! [`execute`](crate::CharacterDemo::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::engine::command::DemoCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`DemoCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) =
///     input_processor.handle_event(event, &demo.options().keybindings)
/// {
///     demo.execute(cmd);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last cursor position, `None` until the first move.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    left_pressed: bool,
    /// Whether the secondary mouse button is currently held.
    right_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a new processor with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Forget held buttons and modifiers (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.left_pressed = false;
        self.right_pressed = false;
        self.shift_pressed = false;
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Unbound keys produce nothing.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        bindings: &KeybindingOptions,
    ) -> Option<DemoCommand> {
        match event {
            InputEvent::Key { code, pressed } => {
                Self::handle_key(&code, pressed, bindings)
            }
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.left_pressed = pressed,
                    MouseButton::Right => self.right_pressed = pressed,
                    MouseButton::Middle => {}
                }
                None
            }
            InputEvent::Scroll { delta } => Some(DemoCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Held keys map to locomotion flags. Everything else fires on press
    /// only.
    fn handle_key(
        code: &str,
        pressed: bool,
        bindings: &KeybindingOptions,
    ) -> Option<DemoCommand> {
        let action = bindings.lookup(code)?;
        if let Some(locomotion) = action.locomotion() {
            return Some(DemoCommand::SetInput {
                action: locomotion,
                pressed,
            });
        }
        if !pressed {
            return None;
        }
        match action {
            KeyAction::ResetCamera => Some(DemoCommand::ResetCamera),
            KeyAction::ToggleOrbit => Some(DemoCommand::ToggleOrbit),
            KeyAction::ToggleFollow => Some(DemoCommand::ToggleFollow),
            _ => None,
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<DemoCommand> {
        let current = Vec2::new(x, y);
        let delta = self.last_cursor.map_or(Vec2::ZERO, |last| current - last);
        self.last_cursor = Some(current);

        if delta == Vec2::ZERO {
            return None;
        }
        if self.right_pressed || (self.left_pressed && self.shift_pressed) {
            return Some(DemoCommand::PanCamera { delta });
        }
        if self.left_pressed {
            return Some(DemoCommand::RotateCamera { delta });
        }
        None
    }
}
