//! Fruit Slicer entry point
//!
//! Runs the game headless: a synthetic hand sweeps across the play area,
//! draw commands and sounds are logged instead of shown and played.

use std::path::PathBuf;

use clap::Parser;

use fruit_slicer::audio::LogAudio;
use fruit_slicer::platform::{SleepClock, SweepSignal};
use fruit_slicer::render::{DrawCommand, Renderer};
use fruit_slicer::{AssetManifest, Game, Result, Settings};

/// Renderer that counts commands and logs a frame digest now and then
struct LogRenderer {
    assets: AssetManifest,
    frame: u64,
    commands: usize,
    sprites: usize,
    score_label: String,
}

impl LogRenderer {
    fn new(assets: AssetManifest) -> Self {
        Self {
            assets,
            frame: 0,
            commands: 0,
            sprites: 0,
            score_label: String::new(),
        }
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands += 1;
        match command {
            DrawCommand::Sprite { kind, pos, .. } => {
                self.sprites += 1;
                log::trace!(
                    "sprite {} at ({:.0}, {:.0})",
                    self.assets.sprite(*kind).display(),
                    pos.x,
                    pos.y
                );
            }
            DrawCommand::Text { text, .. } => self.score_label.clone_from(text),
            _ => {}
        }
    }

    fn present(&mut self) {
        if self.frame % 60 == 0 {
            log::debug!(
                "frame {}: {} commands, {} fruit on screen, {}",
                self.frame,
                self.commands,
                self.sprites,
                self.score_label
            );
        }
        self.frame += 1;
        self.commands = 0;
        self.sprites = 0;
    }
}

#[derive(Debug, Parser)]
#[command(name = "fruit-slicer", about = "Headless fruit slicing session")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to play before stopping (default: 30 seconds worth)
    #[arg(long)]
    frames: Option<u64>,

    /// RNG seed (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to check for the sound and sprite files
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the session summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn run(args: Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(root) = &args.assets {
        settings.assets.verify(root)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let frames = args.frames.or(Some(settings.target_fps as u64 * 30));

    let mut audio = LogAudio::new(settings.assets.clone());
    audio.set_master_volume(settings.master_volume);
    audio.set_muted(settings.muted);

    let signal = SweepSignal::new(&settings, frames);
    let clock = SleepClock::new(settings.target_fps);
    let renderer = LogRenderer::new(settings.assets.clone());
    let mut game = Game::new(settings, seed, signal, renderer, audio, clock)?;

    let summary = game.run()?;
    if args.json {
        match serde_json::to_string(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("Could not encode summary: {err}"),
        }
    } else {
        let fps = summary
            .fps
            .map(|fps| format!(", {fps:.1} fps"))
            .unwrap_or_default();
        println!(
            "Score: {} ({} sliced, {} missed, {} frames{fps})",
            summary.score, summary.stats.sliced, summary.stats.missed, summary.frames
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Fruit Slicer (headless) starting...");

    if let Err(err) = run(args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
