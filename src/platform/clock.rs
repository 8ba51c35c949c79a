//! Frame pacing

use std::time::{Duration, Instant};

/// Paces the frame loop
pub trait FrameClock {
    /// Block until the current frame's time slot is used up
    fn regulate(&mut self);

    /// Recently achieved frame rate, if the clock tracks one
    fn measured_fps(&self) -> Option<f32> {
        None
    }
}

/// Sleeps off whatever is left of each frame's budget
///
/// A frame that overruns is not caught up; the next one simply starts late.
#[derive(Debug, Clone)]
pub struct SleepClock {
    frame: Duration,
    last: Option<Instant>,
    // FPS tracking
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
}

impl SleepClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last: None,
            frame_times: [None; 60],
            frame_index: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for SleepClock {
    fn regulate(&mut self) {
        if let Some(last) = self.last {
            let spent = last.elapsed();
            if spent < self.frame {
                std::thread::sleep(self.frame - spent);
            }
        }
        let now = Instant::now();
        self.last = Some(now);

        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % 60;
    }

    /// Average rate over the last 60 frames
    fn measured_fps(&self) -> Option<f32> {
        let newest_idx = (self.frame_index + 59) % 60;
        let oldest = self.frame_times[self.frame_index]?;
        let newest = self.frame_times[newest_idx]?;
        let elapsed = newest.duration_since(oldest).as_secs_f32();
        (elapsed > 0.0).then(|| 59.0 / elapsed)
    }
}
