//! Pointer signal sources
//!
//! A signal source is polled once per frame, blocking until it has an answer:
//! a pointer position, no pointer, or a request to stop.

use std::collections::VecDeque;

use glam::Vec2;

use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::to_play_area;

/// Outcome of polling the signal source for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Pointer seen at this play-area position
    Point(Vec2),
    /// No hand this frame
    Absent,
    /// Player asked to quit
    Terminate,
}

impl Signal {
    pub fn pointer(&self) -> Option<Vec2> {
        match self {
            Signal::Point(p) => Some(*p),
            Signal::Absent | Signal::Terminate => None,
        }
    }
}

/// Per-frame pointer provider
///
/// An `Err` from `poll` means the source is gone for good.
pub trait SignalSource {
    fn poll(&mut self) -> Result<Signal>;

    /// Free the underlying device. Called once when the loop exits.
    fn release(&mut self) {}
}

/// How a `ScriptedSignal` ends once its frames run out
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEnd {
    Terminate,
    Fail(String),
}

/// Replays a fixed list of pointer samples
#[derive(Debug, Clone)]
pub struct ScriptedSignal {
    frames: VecDeque<Option<Vec2>>,
    end: ScriptEnd,
    released: bool,
}

impl ScriptedSignal {
    pub fn new(frames: impl IntoIterator<Item = Option<Vec2>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            end: ScriptEnd::Terminate,
            released: false,
        }
    }

    /// Fail with `SignalLost` instead of terminating cleanly
    pub fn then_fail(mut self, reason: impl Into<String>) -> Self {
        self.end = ScriptEnd::Fail(reason.into());
        self
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl SignalSource for ScriptedSignal {
    fn poll(&mut self) -> Result<Signal> {
        match self.frames.pop_front() {
            Some(Some(p)) => Ok(Signal::Point(p)),
            Some(None) => Ok(Signal::Absent),
            None => match &self.end {
                ScriptEnd::Terminate => Ok(Signal::Terminate),
                ScriptEnd::Fail(reason) => Err(GameError::SignalLost(reason.clone())),
            },
        }
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Synthetic hand that sweeps back and forth across the play area
///
/// Produces normalized landmark coordinates like a tracker would, drops the
/// hand for a few frames every so often, and terminates after `frames`
/// frames (`None` runs forever).
#[derive(Debug, Clone)]
pub struct SweepSignal {
    width: f32,
    height: f32,
    mirror: bool,
    frame: u64,
    limit: Option<u64>,
    /// Hand is lost for `dropout_len` frames out of every `dropout_every`
    dropout_every: u64,
    dropout_len: u64,
}

impl SweepSignal {
    pub fn new(settings: &Settings, limit: Option<u64>) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            mirror: settings.mirror_input,
            frame: 0,
            limit,
            dropout_every: 90,
            dropout_len: 6,
        }
    }

    /// Normalized hand position for a frame
    fn landmark(&self, frame: u64) -> Vec2 {
        let t = frame as f32 / 60.0;
        Vec2::new(
            0.5 + 0.4 * (t * 2.3).sin(),
            0.45 + 0.3 * (t * 3.1).sin() * (t * 0.7).cos(),
        )
    }
}

impl SignalSource for SweepSignal {
    fn poll(&mut self) -> Result<Signal> {
        if self.limit.is_some_and(|limit| self.frame >= limit) {
            return Ok(Signal::Terminate);
        }
        let frame = self.frame;
        self.frame += 1;

        if frame % self.dropout_every >= self.dropout_every - self.dropout_len {
            return Ok(Signal::Absent);
        }
        let landmark = self.landmark(frame);
        Ok(Signal::Point(to_play_area(
            landmark,
            self.width,
            self.height,
            self.mirror,
        )))
    }

    fn release(&mut self) {
        log::debug!("Sweep signal released after {} frames", self.frame);
    }
}
