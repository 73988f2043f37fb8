//! Standalone demo window backed by winit.
//!
//! The window hosts the input loop and frame clock; drawing is left to an
//! embedding renderer. The title bar shows the locomotion label, camera
//! mode, and FPS.
//!
//! ```no_run
//! # use strider::Viewer;
//! Viewer::builder()
//!     .with_title("Strider")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    animation::ClipMixer, error::StriderError, options::Options,
    scene::Transform, CharacterDemo, DemoCommand, InputEvent, MouseButton,
};

/// How often the title bar readout refreshes.
const TITLE_INTERVAL: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    character: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Strider", default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Strider".into(),
            character: "RobotExpressive".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Name of the spawned character node.
    #[must_use]
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.character = name.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
            character: self.character,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving one character demo.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
    character: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), StriderError> {
        let event_loop =
            EventLoop::new().map_err(|e| StriderError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            demo: None,
            options: self.options,
            title: self.title,
            character: self.character,
            last_title: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| StriderError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    demo: Option<CharacterDemo<ClipMixer>>,
    options: Option<Options>,
    title: String,
    character: String,
    last_title: Instant,
}

impl ViewerApp {
    fn forward(&mut self, event: InputEvent) {
        if let Some(demo) = &mut self.demo {
            let _ = demo.handle_input(event);
        }
    }

    fn frame(&mut self) {
        let (Some(window), Some(demo)) = (&self.window, &mut self.demo) else {
            return;
        };
        let dt = demo.frame_timing.tick();
        let report = demo.update(dt);

        let now = Instant::now();
        if now.duration_since(self.last_title) >= TITLE_INTERVAL {
            window.set_title(&format!(
                "{} | {} | camera: {} | {:.0} fps",
                self.title,
                report.label,
                report.camera_mode,
                demo.frame_timing.fps()
            ));
            self.last_title = now;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut demo =
            CharacterDemo::with_robot(self.options.take().unwrap_or_default());
        let _ = demo.spawn_character(self.character.clone(), Transform::default());
        let inner = window.inner_size();
        demo.resize(inner.width, inner.height);

        window.request_redraw();
        self.window = Some(window);
        self.demo = Some(demo);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and demo must be initialised.
        if self.window.is_none() || self.demo.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(demo) = &mut self.demo {
                    demo.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => {
                if let Some(demo) = &mut self.demo {
                    demo.execute(DemoCommand::ReleaseInput);
                }
            }

            WindowEvent::RedrawRequested => self.frame(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward(InputEvent::Scroll { delta });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Held keys are level state; OS auto-repeat adds nothing.
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.forward(InputEvent::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                });
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
