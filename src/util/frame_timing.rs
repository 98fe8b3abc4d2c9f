use web_time::{Duration, Instant};

/// Measures the time step between frames, with FPS smoothing for display.
pub struct FrameClock {
    /// Longest step handed out, in seconds.
    max_step: f32,
    /// Last tick timestamp.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose steps never exceed `max_step` seconds.
    ///
    /// A stalled frame (window drag, debugger pause) would otherwise turn
    /// into one enormous orbit step.
    #[must_use]
    pub fn new(max_step: f32) -> Self {
        Self::starting_at(Instant::now(), max_step)
    }

    /// Create a clock whose first step is measured from `start`.
    #[must_use]
    pub fn starting_at(start: Instant, max_step: f32) -> Self {
        Self {
            max_step: max_step.max(0.0),
            last_tick: start,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Advance to now and return the elapsed step in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return the elapsed step in seconds.
    ///
    /// A `now` earlier than the previous tick yields a zero step.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.last_tick)
            .unwrap_or(Duration::ZERO);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_step)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Longest step this clock hands out.
    #[must_use]
    pub fn max_step(&self) -> f32 {
        self.max_step
    }
}
