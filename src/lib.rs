//! Fruit Slicer - a motion-controlled slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fruit physics, trail, slicing, score)
//! - `render`: Draw-command emission for the renderer collaborator
//! - `audio`: Fire-and-forget sound effects
//! - `platform`: Pointer signal source and frame pacing
//! - `game`: Per-frame orchestrator tying it all together

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use game::{Game, SessionSummary};
pub use settings::{AssetManifest, Settings};

/// Reference tuning constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Frames per second the loop paces itself to
    pub const TARGET_FPS: u32 = 60;

    /// Pointer positions kept in the slicing trail
    pub const TRAIL_CAPACITY: usize = 8;

    /// Fruit defaults
    pub const FRUIT_RADIUS: f32 = 35.0;
    /// Downward acceleration, pixels/frame²
    pub const FRUIT_GRAVITY: f32 = 0.35;
    /// Chance per frame of a new fruit
    pub const SPAWN_PROBABILITY: f64 = 0.05;
    /// Keep spawns this far from the side edges
    pub const SPAWN_INSET: f32 = 100.0;
    pub const FRUIT_MAX_SIDE_SPEED: f32 = 2.0;
    pub const FRUIT_MIN_LAUNCH_SPEED: f32 = 15.0;
    pub const FRUIT_MAX_LAUNCH_SPEED: f32 = 19.0;
    /// Fruit are dropped once this far below the bottom edge
    pub const MISS_MARGIN: f32 = 50.0;

    /// Particle defaults
    pub const BURST_SIZE: usize = 12;
    pub const PARTICLE_MAX_LIFE: f32 = 255.0;
    pub const PARTICLE_DECAY: f32 = 15.0;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;
    pub const PARTICLE_SIZE: f32 = 6.0;
}

/// Convert a normalized `[0, 1]` landmark coordinate to play-area pixels.
///
/// Coordinates are truncated to whole pixels. With `mirror` set the x axis is
/// flipped so a front-facing camera behaves like a mirror.
#[inline]
pub fn to_play_area(normalized: glam::Vec2, width: f32, height: f32, mirror: bool) -> glam::Vec2 {
    let x = if mirror { 1.0 - normalized.x } else { normalized.x };
    glam::Vec2::new((x * width).trunc(), (normalized.y * height).trunc())
}
