//! Draw-command generation
//!
//! The game never touches pixels. Each frame it builds a list of
//! `DrawCommand`s, back to front, and hands them to a `Renderer`.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{FruitKind, GameState, Trail};

/// Blade trail color
pub const TRAIL_COLOR: [u8; 3] = [255, 0, 0];
/// Width of the oldest trail segment; each newer segment is 1px wider
pub const TRAIL_BASE_WIDTH: f32 = 3.0;

/// Score panel placement
pub const SCORE_PANEL_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const SCORE_PANEL_SIZE: Vec2 = Vec2::new(160.0, 50.0);
pub const SCORE_PANEL_COLOR: [u8; 4] = [0, 0, 0, 180];
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(20.0, 15.0);
pub const SCORE_TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Camera image scaled to the play area
    Background { size: Vec2 },
    /// Fruit sprite with its top-left corner at `pos`
    Sprite { kind: FruitKind, pos: Vec2, size: f32 },
    /// Line segment
    Line {
        from: Vec2,
        to: Vec2,
        color: [u8; 3],
        width: f32,
    },
    /// Filled rectangle, RGBA
    Rect { pos: Vec2, size: Vec2, color: [u8; 4] },
    /// Text label with its top-left corner at `pos`
    Text {
        pos: Vec2,
        text: String,
        color: [u8; 3],
    },
}

/// Renderer collaborator
pub trait Renderer {
    /// Draw one command onto the back buffer
    fn draw(&mut self, command: &DrawCommand);

    /// Show the finished frame
    fn present(&mut self);
}

/// Build the commands for one frame, back to front
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands =
        Vec::with_capacity(3 + state.fruits.len() + state.trail.len() + state.particles.len());

    commands.push(DrawCommand::Background {
        size: Vec2::new(settings.width, settings.height),
    });

    for fruit in &state.fruits {
        commands.push(DrawCommand::Sprite {
            kind: fruit.kind,
            pos: fruit.draw_origin(),
            size: fruit.kind.sprite_size(),
        });
    }

    commands.extend(trail_lines(&state.trail));

    let size = Vec2::splat(crate::consts::PARTICLE_SIZE);
    for particle in state.particles.iter().filter(|p| p.is_alive()) {
        let [r, g, b] = particle.color;
        commands.push(DrawCommand::Rect {
            pos: particle.pos,
            size,
            color: [r, g, b, particle.alpha()],
        });
    }

    commands.extend(score_overlay(state.score));

    commands
}

/// Trail as connected lines, thinnest at the oldest end
pub fn trail_lines(trail: &Trail) -> impl Iterator<Item = DrawCommand> + '_ {
    trail
        .segments()
        .enumerate()
        .map(|(i, (from, to))| DrawCommand::Line {
            from,
            to,
            color: TRAIL_COLOR,
            width: TRAIL_BASE_WIDTH + i as f32,
        })
}

/// Translucent panel with the score label on top
pub fn score_overlay(score: u64) -> [DrawCommand; 2] {
    [
        DrawCommand::Rect {
            pos: SCORE_PANEL_POS,
            size: SCORE_PANEL_SIZE,
            color: SCORE_PANEL_COLOR,
        },
        DrawCommand::Text {
            pos: SCORE_TEXT_POS,
            text: format!("SCORE: {score}"),
            color: SCORE_TEXT_COLOR,
        },
    ]
}
