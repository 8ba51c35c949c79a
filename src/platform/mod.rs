//! Platform abstraction layer
//!
//! Collaborators the frame loop drives but does not implement:
//! - Pointer signal (one hand position per frame, or none)
//! - Frame pacing

pub mod clock;
pub mod signal;

pub use clock::{FrameClock, SleepClock};
pub use signal::{ScriptedSignal, Signal, SignalSource, SweepSignal};
