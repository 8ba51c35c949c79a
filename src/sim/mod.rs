//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, velocities in pixels per frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{apply_slices, blade_hits, find_slices, spawn_burst};
pub use geometry::point_segment_distance;
pub use spawn::{launch_fruit, spawn_trial};
pub use state::{Fruit, FruitKind, GameEvent, GameState, Particle, SessionStats};
pub use tick::{TickInput, tick};
pub use trail::Trail;
