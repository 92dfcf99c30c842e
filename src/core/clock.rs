use std::time::Instant;

/// Longest frame delta handed to the simulation; longer stalls (window drags,
/// breakpoints) are treated as one slow frame
pub const MAX_DELTA: f32 = 0.1;

/// How often the frame rate is reported, in seconds
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick, capped at [`MAX_DELTA`]
    pub delta: f32,
}

/// Frame clock - tracks delta time and a rolling frame rate
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    window_frames: u32,
    window_elapsed: f32,
    fps: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            window_frames: 0,
            window_elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Advance the clock and return this frame's timing
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(raw)
    }

    fn advance(&mut self, raw: f32) -> FrameTime {
        self.window_frames += 1;
        self.window_elapsed += raw;
        if self.window_elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.window_frames as f32 / self.window_elapsed;
            log::debug!("FPS: {:.1}", self.fps);
            self.window_frames = 0;
            self.window_elapsed = 0.0;
        }

        FrameTime {
            delta: raw.min(MAX_DELTA),
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
