use web_time::{Duration, Instant};

/// Longest frame delta handed to the simulation. Anything longer (debugger
/// pause, minimized window) is treated as a single slow frame.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame delta measurement with a smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames measured so far
    frames: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Measure the time since the previous call and return it in seconds,
    /// clamped to [`MAX_FRAME_DELTA`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Feed an externally measured frame duration. Returns the clamped
    /// delta in seconds.
    pub fn record(&mut self, elapsed: Duration) -> f32 {
        self.frames += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames measured.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
