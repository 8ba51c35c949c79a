//! Slice detection and resolution
//!
//! Hits are found against a read-only view of the fruit list, then applied in
//! a second pass so the list is never mutated while it is being scanned.

use glam::Vec2;
use rand::Rng;

use super::geometry::point_segment_distance;
use super::state::{Fruit, GameEvent, GameState, Particle};
use crate::settings::Settings;

/// Whether the blade segment passes within the fruit's radius
#[inline]
pub fn blade_hits(fruit: &Fruit, segment: (Vec2, Vec2)) -> bool {
    point_segment_distance(fruit.pos, segment.0, segment.1) < fruit.radius
}

/// IDs of every fruit the blade segment cuts, in list order
pub fn find_slices(fruits: &[Fruit], segment: (Vec2, Vec2)) -> Vec<u32> {
    fruits
        .iter()
        .filter(|fruit| blade_hits(fruit, segment))
        .map(|fruit| fruit.id)
        .collect()
}

/// Remove sliced fruit, burst them into particles and score them
///
/// Each ID is scored at most once, even if it appears twice in `hits`.
pub fn apply_slices(
    state: &mut GameState,
    hits: &[u32],
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) {
    for &id in hits {
        let Some(index) = state.fruits.iter().position(|f| f.id == id) else {
            continue;
        };
        let fruit = state.fruits.swap_remove(index);

        spawn_burst(state, fruit.pos, fruit.kind.particle_color(), settings);
        state.score += 1;
        state.stats.sliced += 1;

        log::debug!(
            "Sliced {} #{} at ({:.0}, {:.0}), score {}",
            fruit.kind.as_str(),
            fruit.id,
            fruit.pos.x,
            fruit.pos.y,
            state.score
        );
        events.push(GameEvent::FruitSliced {
            id: fruit.id,
            kind: fruit.kind,
            pos: fruit.pos,
        });
    }
}

/// Spawn a burst of debris particles at `pos`
pub fn spawn_burst(state: &mut GameState, pos: Vec2, color: [u8; 3], settings: &Settings) {
    let speed = settings.particle_speed;
    state.particles.reserve(settings.burst_size);
    for _ in 0..settings.burst_size {
        let vel = Vec2::new(
            state.rng.random_range(-speed..=speed),
            state.rng.random_range(-speed..=speed),
        );
        state.particles.push(Particle {
            pos,
            vel,
            color,
            life: settings.particle_life,
            decay: settings.particle_decay,
        });
    }
}
