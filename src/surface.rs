//! Seams between the game core and whatever hosts it.
//!
//! The core never touches pixels, speakers or screens directly. It draws
//! through a [`Surface`], fires [`Cue`]s at an [`AudioCues`] sink and tells
//! the [`Shell`] when a session ends. A [`Host`] bundles the three so the
//! engine receives one explicit context per call instead of reaching for
//! globals.

use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Enemy,
    Player,
    /// Player facing left.
    PlayerFlipped,
    Arrow,
    Bow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Score and lives readout drawn over the playfield.
    Hud,
}

pub trait Surface {
    fn draw_image(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Background loop, started with the session.
    Music,
    /// An enemy reached the player.
    Growl,
    Shoot,
    BowCaught,
    /// Game over.
    Howl,
}

/// Fire-and-forget audio triggers. Implementations own any playback state.
pub trait AudioCues {
    fn play(&mut self, cue: Cue);
    fn stop(&mut self, cue: Cue);
}

pub trait Shell {
    fn on_game_over(&mut self, score: u64);
}

pub struct Host<'a> {
    pub surface: &'a mut dyn Surface,
    pub audio: &'a mut dyn AudioCues,
    pub shell: &'a mut dyn Shell,
}

impl<'a> Host<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        audio: &'a mut dyn AudioCues,
        shell: &'a mut dyn Shell,
    ) -> Self {
        Self {
            surface,
            audio,
            shell,
        }
    }
}
