/// Playfield geometry and tuning constants.
///
/// Everything is in pixels (positions) or pixels-per-millisecond (speeds).
/// The defaults describe the classic 899×512 board; a JSON file may
/// override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ────────────────────────────────────────────────────────────
    pub width: f64,
    pub height: f64,
    pub lane_width: f64,

    // ── Sprite sizes ─────────────────────────────────────────────────────────
    pub enemy_height: f64,
    pub arrow_height: f64,
    pub bow_height: f64,
    pub player_width: f64,
    pub player_height: f64,
    /// Gap between the player's feet and the bottom of the playfield.
    pub player_margin: f64,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub max_enemies: usize,
    /// Per-enemy speed is drawn from `[enemy_speed_min, enemy_speed_max)`.
    pub enemy_speed_min: f64,
    pub enemy_speed_max: f64,

    // ── Weapon & pickup ──────────────────────────────────────────────────────
    /// `false` plays the dodge-only variant: no bow ever drops.
    pub bow_enabled: bool,
    pub arrow_speed: f64,
    /// Arrows start this many pixels above the top of the player sprite
    /// measured from the floor, ignoring `player_margin`.
    pub arrow_launch_offset: f64,
    pub bow_speed: f64,
    pub bow_score_threshold: u64,

    // ── Session ──────────────────────────────────────────────────────────────
    pub kill_bonus: u64,
    pub initial_lives: u32,
    pub starting_lane: usize,
    /// Upper bound on a single tick's elapsed time (see `FrameClock`).
    pub max_frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 899.0,
            height: 512.0,
            lane_width: 78.0,
            enemy_height: 87.0,
            arrow_height: 78.0,
            bow_height: 115.0,
            player_width: 78.0,
            player_height: 153.0,
            player_margin: 10.0,
            max_enemies: 3,
            enemy_speed_min: 0.25,
            enemy_speed_max: 0.75,
            bow_enabled: true,
            arrow_speed: 0.5,
            arrow_launch_offset: 100.0,
            bow_speed: 0.5,
            bow_score_threshold: 3000,
            kill_bonus: 100,
            initial_lives: 3,
            starting_lane: 2,
            max_frame_ms: 250,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of lanes an enemy can occupy while staying fully on screen.
    pub fn lane_count(&self) -> usize {
        (self.width / self.lane_width).floor() as usize
    }

    /// Rightmost lane the player can step into.
    pub fn max_player_lane(&self) -> usize {
        ((self.width - self.player_width) / self.lane_width).floor() as usize
    }

    pub fn lane_x(&self, lane: usize) -> f64 {
        lane as f64 * self.lane_width
    }

    /// Top edge of the player sprite.
    pub fn player_y(&self) -> f64 {
        self.height - self.player_height - self.player_margin
    }

    /// An enemy or bow whose bottom edge reaches this line is level with the player.
    pub fn trigger_line(&self) -> f64 {
        self.player_y()
    }

    pub fn arrow_start_y(&self) -> f64 {
        self.height - self.player_height - self.arrow_launch_offset
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f64); 9] = [
            ("width", self.width),
            ("height", self.height),
            ("lane_width", self.lane_width),
            ("enemy_height", self.enemy_height),
            ("bow_height", self.bow_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("arrow_speed", self.arrow_speed),
            ("bow_speed", self.bow_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.max_enemies == 0 {
            return Err(ConfigError::NonPositive {
                field: "max_enemies",
            });
        }
        if self.max_frame_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "max_frame_ms",
            });
        }
        if !(self.enemy_speed_min > 0.0 && self.enemy_speed_min < self.enemy_speed_max) {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }
        if self.player_width > self.width || self.player_y() < 0.0 {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.width,
                player_width: self.player_width,
            });
        }
        let lanes = self.lane_count();
        if lanes <= self.max_enemies {
            return Err(ConfigError::TooFewLanes {
                lanes,
                max_enemies: self.max_enemies,
            });
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }
}
