#![allow(dead_code)]

use std::io;

use red_lost::surface::{AudioCues, Cue, Shell, SpriteId, Surface, TextStyle};

/// Everything drawn during a tick, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Image(SpriteId, f64, f64),
    Text(String, f64, f64),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub draws: Vec<Draw>,
}

impl RecordingSurface {
    pub fn sprites(&self) -> Vec<SpriteId> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Image(id, _, _) => Some(*id),
                Draw::Text(..) => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Text(t, _, _) => Some(t.clone()),
                Draw::Image(..) => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()> {
        self.draws.push(Draw::Image(sprite, x, y));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, _style: TextStyle) -> io::Result<()> {
        self.draws.push(Draw::Text(text.to_string(), x, y));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<Cue>,
    pub stopped: Vec<Cue>,
}

impl AudioCues for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }

    fn stop(&mut self, cue: Cue) {
        self.stopped.push(cue);
    }
}

#[derive(Default)]
pub struct RecordingShell {
    pub game_overs: Vec<u64>,
}

impl Shell for RecordingShell {
    fn on_game_over(&mut self, score: u64) {
        self.game_overs.push(score);
    }
}

/// Fakes for one engine; `host()` lends them out for a single tick.
#[derive(Default)]
pub struct Harness {
    pub surface: RecordingSurface,
    pub audio: RecordingAudio,
    pub shell: RecordingShell,
}

impl Harness {
    pub fn host(&mut self) -> red_lost::surface::Host<'_> {
        self.surface.draws.clear();
        red_lost::surface::Host::new(&mut self.surface, &mut self.audio, &mut self.shell)
    }
}
