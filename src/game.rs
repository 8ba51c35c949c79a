//! Frame orchestrator
//!
//! Owns the game state and drives one frame per signal sample:
//! poll signal -> tick simulation -> play sounds -> draw -> pace.

use serde::Serialize;

use crate::audio::{Audio, SoundEffect};
use crate::error::Result;
use crate::platform::{FrameClock, Signal, SignalSource};
use crate::render::{Renderer, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SessionStats, TickInput, tick};

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub score: u64,
    pub stats: SessionStats,
    /// Frame rate the clock measured near the end of the session
    pub fps: Option<f32>,
}

/// A running game session and its collaborators
pub struct Game<S, R, A, C> {
    settings: Settings,
    state: GameState,
    signal: S,
    renderer: R,
    audio: A,
    clock: C,
}

impl<S, R, A, C> Game<S, R, A, C>
where
    S: SignalSource,
    R: Renderer,
    A: Audio,
    C: FrameClock,
{
    /// Validate settings and set up a fresh session
    pub fn new(
        settings: Settings,
        seed: u64,
        signal: S,
        renderer: R,
        audio: A,
        clock: C,
    ) -> Result<Self> {
        settings.validate()?;
        let state = GameState::new(seed, settings.trail_capacity);
        Ok(Self {
            settings,
            state,
            signal,
            renderer,
            audio,
            clock,
        })
    }

    /// Run frames until the signal source says stop or fails
    ///
    /// The signal source is released on both exits.
    pub fn run(&mut self) -> Result<SessionSummary> {
        log::info!(
            "Session started (seed {}, {}x{} @ {} fps)",
            self.state.seed,
            self.settings.width,
            self.settings.height,
            self.settings.target_fps
        );

        let outcome = loop {
            match self.signal.poll() {
                Ok(Signal::Terminate) => break Ok(self.summary()),
                Ok(signal) => self.frame(signal),
                Err(err) => break Err(err),
            }
        };
        self.signal.release();

        match &outcome {
            Ok(summary) => log::info!(
                "Session ended after {} frames: score {} ({} spawned, {} missed)",
                summary.frames,
                summary.score,
                summary.stats.spawned,
                summary.stats.missed
            ),
            Err(err) => log::error!("Session aborted after {} frames: {err}", self.state.time_ticks),
        }
        outcome
    }

    /// Advance, sound, draw and pace a single frame
    pub fn frame(&mut self, signal: Signal) {
        let input = TickInput {
            pointer: signal.pointer(),
        };
        let events = tick(&mut self.state, &input, &self.settings);
        self.play_sounds(&events);

        for command in build_frame(&self.state, &self.settings) {
            self.renderer.draw(&command);
        }
        self.renderer.present();

        self.clock.regulate();

        let fps_window = u64::from(self.settings.target_fps);
        if self.state.time_ticks % fps_window == 0 {
            if let Some(fps) = self.clock.measured_fps() {
                log::debug!("frame {}: {:.1} fps", self.state.time_ticks, fps);
            }
        }
    }

    fn play_sounds(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.audio.play(effect);
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.state.time_ticks,
            score: self.state.score,
            stats: self.state.stats,
            fps: self.clock.measured_fps(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for setting up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;
    use crate::platform::ScriptedSignal;
    use crate::render::DrawCommand;
    use crate::sim::{Fruit, FruitKind};
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Vec<DrawCommand>>,
        pending: Vec<DrawCommand>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, command: &DrawCommand) {
            self.pending.push(command.clone());
        }

        fn present(&mut self) {
            self.frames.push(std::mem::take(&mut self.pending));
        }
    }

    #[derive(Default)]
    struct RecordingAudio(Vec<SoundEffect>);

    impl Audio for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[derive(Default)]
    struct CountingClock(u32);

    impl FrameClock for CountingClock {
        fn regulate(&mut self) {
            self.0 += 1;
        }

        fn measured_fps(&self) -> Option<f32> {
            (self.0 > 0).then_some(60.0)
        }
    }

    type TestGame = Game<ScriptedSignal, RecordingRenderer, RecordingAudio, CountingClock>;

    fn game(signal: ScriptedSignal) -> TestGame {
        let settings = Settings {
            spawn_probability: 0.0,
            ..Default::default()
        };
        Game::new(
            settings,
            1,
            signal,
            RecordingRenderer::default(),
            RecordingAudio::default(),
            CountingClock::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_swipe_slices_plays_sound_and_draws_score() {
        let signal = ScriptedSignal::new([
            Some(Vec2::new(100.0, 300.0)),
            Some(Vec2::new(400.0, 300.0)),
        ]);
        let mut game = game(signal);
        game.state_mut().fruits.push(Fruit {
            id: 99,
            kind: FruitKind::Apple,
            pos: Vec2::new(250.0, 300.0),
            vel: Vec2::ZERO,
            gravity: 0.0,
            radius: 35.0,
        });

        let summary = game.run().unwrap();

        assert_eq!(summary.frames, 2);
        assert_eq!(summary.score, 1);
        assert_eq!(summary.stats.sliced, 1);
        assert_eq!(game.audio().0, vec![SoundEffect::Slice]);
        assert_eq!(game.state().particles.len(), 12);
        assert!(game.signal().is_released());
        assert_eq!(game.clock.0, 2);
        assert_eq!(summary.fps, Some(60.0));

        let frames = &game.renderer().frames;
        assert_eq!(frames.len(), 2);
        // First frame still shows the fruit, second shows the blade and burst
        assert!(frames[0].iter().any(|c| matches!(c, DrawCommand::Sprite { .. })));
        assert!(!frames[1].iter().any(|c| matches!(c, DrawCommand::Sprite { .. })));
        assert!(frames[1].iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(matches!(
            frames[1].last(),
            Some(DrawCommand::Text { text, .. }) if text == "SCORE: 1"
        ));
    }

    #[test]
    fn test_signal_failure_is_fatal_and_releases() {
        let signal = ScriptedSignal::new([None, Some(Vec2::new(10.0, 10.0))]).then_fail("no frames");
        let mut game = game(signal);

        let err = game.run().unwrap_err();

        assert!(matches!(err, GameError::SignalLost(_)));
        assert!(game.signal().is_released());
        assert_eq!(game.renderer().frames.len(), 2);
    }

    #[test]
    fn test_terminate_before_first_frame() {
        let mut game = game(ScriptedSignal::new([]));
        let summary = game.run().unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.fps, None);
        assert!(game.renderer().frames.is_empty());
        assert!(game.signal().is_released());
    }

    #[test]
    fn test_summary_encodes_as_json() {
        let mut game = game(ScriptedSignal::new([None]));
        let summary = game.run().unwrap();
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["frames"], 1);
        assert_eq!(json["stats"]["sliced"], 0);
        assert_eq!(json["fps"], 60.0);
    }

    #[test]
    fn test_invalid_settings_abort_before_loop() {
        let settings = Settings {
            trail_capacity: 0,
            ..Default::default()
        };
        let result: Result<TestGame> = Game::new(
            settings,
            1,
            ScriptedSignal::new([]),
            RecordingRenderer::default(),
            RecordingAudio::default(),
            CountingClock::default(),
        );
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_absent_frames_keep_trail_visible() {
        let signal = ScriptedSignal::new([
            Some(Vec2::new(100.0, 100.0)),
            Some(Vec2::new(200.0, 100.0)),
            None,
        ]);
        let mut game = game(signal);
        game.run().unwrap();

        let last = game.renderer().frames.last().unwrap();
        assert_eq!(
            last.iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
                .count(),
            1
        );
        assert_eq!(game.state().trail.len(), 2);
    }
}
