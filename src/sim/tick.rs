//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Rendering, audio and pacing are
//! the orchestrator's job; this only mutates `GameState` and reports events.

use glam::Vec2;

use super::collision::{apply_slices, find_slices};
use super::spawn::spawn_trial;
use super::state::{GameEvent, GameState};
use crate::settings::Settings;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in play-area pixels, `None` when the hand was not seen
    pub pointer: Option<Vec2>,
}

impl TickInput {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
        }
    }
}

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // A missing pointer leaves the trail untouched
    if let Some(point) = input.pointer {
        state.trail.push(point);
    }

    events.extend(spawn_trial(state, settings));

    for fruit in &mut state.fruits {
        fruit.update();
    }

    // Only a fresh pointer sample slices; a stale trail is just decoration
    let segment = input.pointer.and(state.trail.active_segment());
    if let Some(segment) = segment {
        let hits = find_slices(&state.fruits, segment);
        apply_slices(state, &hits, settings, &mut events);
    }

    let miss_line = settings.miss_line();
    let GameState { fruits, stats, .. } = &mut *state;
    fruits.retain(|fruit| {
        if fruit.is_missed(miss_line) {
            log::debug!("Missed {} #{}", fruit.kind.as_str(), fruit.id);
            stats.missed += 1;
            events.push(GameEvent::FruitMissed {
                id: fruit.id,
                kind: fruit.kind,
            });
            false
        } else {
            true
        }
    });

    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());

    events
}
