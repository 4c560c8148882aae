use std::time::{Duration, Instant};

/// Frame metadata - frame number plus wall-clock timing
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub now: Instant,
    pub delta: Duration,
}

impl FrameInfo {
    pub fn new(number: u64, now: Instant, delta: Duration) -> Self {
        Self { number, now, delta }
    }
}

/// Infinite iterator that stamps each frame with the current time
/// Use this in a loop: `for frame in clock { ... }`
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_number: 0,
            start_time: start,
            last_frame_time: start,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Stamp a frame at an explicit time
    pub fn frame_at(&mut self, now: Instant) -> FrameInfo {
        let delta = now.saturating_duration_since(self.last_frame_time);
        let info = FrameInfo::new(self.frame_number, now, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        Some(self.frame_at(Instant::now()))
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    frames: u32,
    elapsed: Duration,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Count one frame; returns the average FPS each time the interval fills up
    pub fn record(&mut self, delta: Duration) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }
}
