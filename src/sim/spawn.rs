//! Fruit spawner
//!
//! One Bernoulli trial per frame. A successful trial launches a fruit from
//! the bottom edge on an arc that peaks inside the play area.

use glam::Vec2;
use rand::Rng;

use super::state::{Fruit, FruitKind, GameEvent, GameState};
use crate::settings::Settings;

/// Roll the per-frame spawn chance, launching a fruit on success
pub fn spawn_trial(state: &mut GameState, settings: &Settings) -> Option<GameEvent> {
    if !state.rng.random_bool(settings.spawn_probability) {
        return None;
    }

    let fruit = launch_fruit(state, settings);
    let event = GameEvent::FruitSpawned {
        id: fruit.id,
        kind: fruit.kind,
    };
    log::debug!(
        "Spawned {} #{} at x={:.0} vel=({:.2}, {:.2})",
        fruit.kind.as_str(),
        fruit.id,
        fruit.pos.x,
        fruit.vel.x,
        fruit.vel.y
    );
    state.fruits.push(fruit);
    state.stats.spawned += 1;
    Some(event)
}

/// Build a fruit at a random spot along the bottom edge
pub fn launch_fruit(state: &mut GameState, settings: &Settings) -> Fruit {
    let rng = &mut state.rng;
    let kind = FruitKind::ALL[rng.random_range(0..FruitKind::ALL.len())];
    let x = rng.random_range(settings.spawn_inset..=settings.width - settings.spawn_inset);
    let vx = rng.random_range(-settings.max_side_speed..=settings.max_side_speed);
    let vy = -rng.random_range(settings.min_launch_speed..=settings.max_launch_speed);

    Fruit {
        id: state.next_entity_id(),
        kind,
        pos: Vec2::new(x, settings.height),
        vel: Vec2::new(vx, vy),
        gravity: settings.gravity,
        radius: settings.fruit_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_stays_inside_inset() {
        let settings = Settings::default();
        let mut state = GameState::new(3, settings.trail_capacity);
        for _ in 0..200 {
            let fruit = launch_fruit(&mut state, &settings);
            assert!(fruit.pos.x >= 100.0 && fruit.pos.x <= 700.0);
            assert_eq!(fruit.pos.y, 600.0);
            assert!(fruit.vel.x.abs() <= 2.0);
            assert!(fruit.vel.y <= -15.0 && fruit.vel.y >= -19.0);
            assert_eq!(fruit.radius, 35.0);
        }
    }

    #[test]
    fn test_certain_spawn_every_frame() {
        let settings = Settings {
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(11, settings.trail_capacity);
        for _ in 0..10 {
            let event = spawn_trial(&mut state, &settings);
            let fruit = state.fruits.last().unwrap();
            assert_eq!(
                event,
                Some(GameEvent::FruitSpawned {
                    id: fruit.id,
                    kind: fruit.kind
                })
            );
        }
        assert_eq!(state.fruits.len(), 10);
        assert_eq!(state.stats.spawned, 10);
    }

    #[test]
    fn test_zero_probability_never_spawns() {
        let settings = Settings {
            spawn_probability: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(11, settings.trail_capacity);
        for _ in 0..100 {
            assert!(spawn_trial(&mut state, &settings).is_none());
        }
        assert!(state.fruits.is_empty());
    }

    #[test]
    fn test_fruit_arcs_back_below_the_play_area() {
        let settings = Settings::default();
        let mut state = GameState::new(5, settings.trail_capacity);
        let mut fruit = launch_fruit(&mut state, &settings);
        let mut peak = fruit.pos.y;
        let mut frames = 0;
        while !fruit.is_missed(settings.miss_line()) {
            fruit.update();
            peak = peak.min(fruit.pos.y);
            frames += 1;
            assert!(frames < 1000, "fruit never came back down");
        }
        assert!(peak > 0.0 && peak < settings.height);
    }
}
