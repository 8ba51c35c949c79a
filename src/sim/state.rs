//! Game state and core simulation types
//!
//! Velocities are in pixels per frame; the y axis grows downward.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::trail::Trail;

/// Visual and sound category of a fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Banana,
}

impl FruitKind {
    pub const ALL: [FruitKind; 2] = [FruitKind::Apple, FruitKind::Banana];

    /// Color of the juice burst when sliced
    pub fn particle_color(&self) -> [u8; 3] {
        match self {
            FruitKind::Apple => [255, 0, 0],
            FruitKind::Banana => [255, 255, 0],
        }
    }

    /// Sprite edge length in pixels
    pub fn sprite_size(&self) -> f32 {
        match self {
            FruitKind::Apple => 70.0,
            FruitKind::Banana => 80.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
        }
    }
}

/// A fruit launched from the bottom of the play area
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Added to `vel.y` every frame
    pub gravity: f32,
    pub radius: f32,
}

impl Fruit {
    /// Advance one frame: move, then accelerate downward
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
    }

    /// Top-left corner for drawing the sprite centered on the fruit
    pub fn draw_origin(&self) -> Vec2 {
        self.pos - Vec2::splat(self.radius)
    }

    /// Whether the fruit has dropped below `miss_line`
    pub fn is_missed(&self, miss_line: f32) -> bool {
        self.pos.y > miss_line
    }
}

/// Juice debris from a sliced fruit
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [u8; 3],
    /// Remaining life, doubles as the draw alpha
    pub life: f32,
    /// Life lost per frame
    pub decay: f32,
}

impl Particle {
    /// Advance one frame. No gravity on debris.
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Draw opacity, fading linearly with life
    pub fn alpha(&self) -> u8 {
        self.life.clamp(0.0, 255.0) as u8
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    FruitSpawned { id: u32, kind: FruitKind },
    FruitSliced { id: u32, kind: FruitKind, pos: Vec2 },
    FruitMissed { id: u32, kind: FruitKind },
}

/// Running counters for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub spawned: u32,
    pub sliced: u32,
    pub missed: u32,
}

/// Complete game state, mutated only by `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG started from
    pub seed: u64,
    pub rng: Pcg32,
    /// One point per slice
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Recent pointer positions
    pub trail: Trail,
    /// Live fruit
    pub fruits: Vec<Fruit>,
    /// Live particles (visual only)
    pub particles: Vec<Particle>,
    pub stats: SessionStats,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an empty session with the given seed and trail capacity
    pub fn new(seed: u64, trail_capacity: usize) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            trail: Trail::new(trail_capacity),
            fruits: Vec::new(),
            particles: Vec::new(),
            stats: SessionStats::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (wraps after `u32::MAX`)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
