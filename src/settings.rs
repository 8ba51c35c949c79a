//! Game settings
//!
//! Handed to the game at startup. Every field has a reference default, so a
//! JSON config file only needs the values it wants to change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::FruitKind;

/// Files the renderer and audio collaborators load before the first frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Sound played on every slice
    pub slice_sound: PathBuf,
    /// Apple sprite
    pub apple_sprite: PathBuf,
    /// Banana sprite
    pub banana_sprite: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            slice_sound: PathBuf::from("swish.mp3"),
            apple_sprite: PathBuf::from("apple.png"),
            banana_sprite: PathBuf::from("banana.png"),
        }
    }
}

impl AssetManifest {
    /// Sprite path for a fruit category
    pub fn sprite(&self, kind: FruitKind) -> &Path {
        match kind {
            FruitKind::Apple => self.apple_sprite.as_path(),
            FruitKind::Banana => self.banana_sprite.as_path(),
        }
    }

    fn paths(&self) -> [&Path; 3] {
        [
            self.slice_sound.as_path(),
            self.apple_sprite.as_path(),
            self.banana_sprite.as_path(),
        ]
    }

    /// Check every asset exists under `root`
    pub fn verify(&self, root: &Path) -> Result<()> {
        for path in self.paths() {
            let full = root.join(path);
            if !full.is_file() {
                return Err(GameError::AssetMissing { path: full });
            }
        }
        log::info!("All {} assets present under {}", self.paths().len(), root.display());
        Ok(())
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    pub width: f32,
    pub height: f32,
    /// Frame rate the loop paces itself to
    pub target_fps: u32,

    // === Trail ===
    pub trail_capacity: usize,

    // === Particles ===
    /// Particles spawned per slice
    pub burst_size: usize,
    /// Starting life (also the full-opacity alpha)
    pub particle_life: f32,
    /// Life lost per frame
    pub particle_decay: f32,
    /// Per-axis speed bound for burst particles
    pub particle_speed: f32,

    // === Fruit ===
    pub spawn_probability: f64,
    pub gravity: f32,
    /// Horizontal launch speed is drawn from `[-max_side_speed, max_side_speed]`
    pub max_side_speed: f32,
    /// Upward launch speed is drawn from `[min_launch_speed, max_launch_speed]`
    pub min_launch_speed: f32,
    pub max_launch_speed: f32,
    /// Horizontal distance from each side edge spawns stay inside
    pub spawn_inset: f32,
    pub fruit_radius: f32,
    /// Fruit more than this far below the bottom edge count as missed
    pub miss_margin: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,

    // === Signal ===
    /// Mirror normalized pointer input horizontally (selfie camera)
    pub mirror_input: bool,

    pub assets: AssetManifest,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            target_fps: TARGET_FPS,

            trail_capacity: TRAIL_CAPACITY,

            burst_size: BURST_SIZE,
            particle_life: PARTICLE_MAX_LIFE,
            particle_decay: PARTICLE_DECAY,
            particle_speed: PARTICLE_MAX_SPEED,

            spawn_probability: SPAWN_PROBABILITY,
            gravity: FRUIT_GRAVITY,
            max_side_speed: FRUIT_MAX_SIDE_SPEED,
            min_launch_speed: FRUIT_MIN_LAUNCH_SPEED,
            max_launch_speed: FRUIT_MAX_LAUNCH_SPEED,
            spawn_inset: SPAWN_INSET,
            fruit_radius: FRUIT_RADIUS,
            miss_margin: MISS_MARGIN,

            master_volume: 0.8,
            muted: false,

            mirror_input: true,

            assets: AssetManifest::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings without validating them
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(GameError::InvalidConfig(msg));

        if !(self.width > 0.0 && self.height > 0.0) {
            return fail(format!("play area {}x{} must be positive", self.width, self.height));
        }
        if self.target_fps == 0 {
            return fail("target_fps must be at least 1".into());
        }
        if self.trail_capacity < 2 {
            return fail(format!(
                "trail_capacity {} cannot form a segment",
                self.trail_capacity
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return fail(format!(
                "spawn_probability {} outside [0, 1]",
                self.spawn_probability
            ));
        }
        if self.particle_decay <= 0.0 || self.particle_life <= 0.0 {
            return fail("particle_life and particle_decay must be positive".into());
        }
        if self.particle_speed < 0.0 || self.max_side_speed < 0.0 {
            return fail("speed bounds must not be negative".into());
        }
        if self.min_launch_speed > self.max_launch_speed {
            return fail(format!(
                "launch speed range {}..{} is inverted",
                self.min_launch_speed, self.max_launch_speed
            ));
        }
        if self.spawn_inset < 0.0 || self.width - 2.0 * self.spawn_inset < 0.0 {
            return fail(format!(
                "spawn_inset {} leaves no room in width {}",
                self.spawn_inset, self.width
            ));
        }
        if self.gravity <= 0.0 {
            return fail(format!(
                "gravity {} must be positive or fruit never fall back",
                self.gravity
            ));
        }
        if self.miss_margin < 0.0 {
            return fail(format!("miss_margin {} must not be negative", self.miss_margin));
        }
        if self.fruit_radius <= 0.0 {
            return fail("fruit_radius must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return fail(format!("master_volume {} outside [0, 1]", self.master_volume));
        }
        Ok(())
    }

    /// Y coordinate below which fruit count as missed
    pub fn miss_line(&self) -> f32 {
        self.height + self.miss_margin
    }
}
