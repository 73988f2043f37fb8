//! Input handling: event types, held-key state, and the input processor
//! that converts raw window events into demo commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into demo commands.
pub mod processor;
/// Held-key flags consumed by the locomotion step.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use state::{InputState, LocomotionAction};
