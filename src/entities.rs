/// Game entities: the player, the wolves coming down the lanes, the arrow
/// Red fires and the bow that enables it.
///
/// Every entity moves only through its own `update`; rendering never
/// mutates.

use std::io;

use rand::Rng;

use crate::config::GameConfig;
use crate::surface::{SpriteId, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

pub trait Entity {
    fn position(&self) -> Position;
    fn sprite(&self) -> SpriteId;

    /// Advance by `elapsed_ms` milliseconds.
    fn update(&mut self, elapsed_ms: u64);

    fn render(&self, surface: &mut dyn Surface) -> io::Result<()> {
        let pos = self.position();
        surface.draw_image(self.sprite(), pos.x, pos.y)
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub lane: usize,
    pub pos: Position,
    /// Sampled once at spawn; never changes afterwards.
    speed: f64,
    height: f64,
}

impl Enemy {
    /// A new enemy just above the playfield in `lane`, with a random speed.
    pub fn spawn(lane: usize, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let speed = rng.gen_range(config.enemy_speed_min..config.enemy_speed_max);
        Self::with_speed(lane, speed, config)
    }

    pub fn with_speed(lane: usize, speed: f64, config: &GameConfig) -> Self {
        Self {
            lane,
            pos: Position {
                x: config.lane_x(lane),
                y: -config.enemy_height,
            },
            speed,
            height: config.enemy_height,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.height
    }
}

impl Entity for Enemy {
    fn position(&self) -> Position {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Enemy
    }

    fn update(&mut self, elapsed_ms: u64) {
        self.pos.y += elapsed_ms as f64 * self.speed;
    }
}

// ── Arrow ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub lane: usize,
    pub pos: Position,
    speed: f64,
}

impl Arrow {
    /// Nocked in `lane` just above the player.
    pub fn fire(lane: usize, config: &GameConfig) -> Self {
        Self {
            lane,
            pos: Position {
                x: config.lane_x(lane),
                y: config.arrow_start_y(),
            },
            speed: config.arrow_speed,
        }
    }

    /// The arrow has flown off the top of the playfield.
    pub fn is_spent(&self) -> bool {
        self.pos.y <= 0.0
    }
}

impl Entity for Arrow {
    fn position(&self) -> Position {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Arrow
    }

    fn update(&mut self, elapsed_ms: u64) {
        self.pos.y -= elapsed_ms as f64 * self.speed;
    }
}

// ── Bow ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bow {
    pub lane: usize,
    pub pos: Position,
    speed: f64,
    height: f64,
}

impl Bow {
    pub fn drop_in(lane: usize, config: &GameConfig) -> Self {
        Self {
            lane,
            pos: Position {
                x: config.lane_x(lane),
                y: -config.bow_height,
            },
            speed: config.bow_speed,
            height: config.bow_height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.height
    }
}

impl Entity for Bow {
    fn position(&self) -> Position {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Bow
    }

    fn update(&mut self, elapsed_ms: u64) {
        self.pos.y += elapsed_ms as f64 * self.speed;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub facing: Facing,
    pub has_bow: bool,
    lane: usize,
    y: f64,
    lane_width: f64,
    max_lane: usize,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let max_lane = config.max_player_lane();
        Self {
            facing: Facing::Right,
            has_bow: false,
            lane: config.starting_lane.min(max_lane),
            y: config.player_y(),
            lane_width: config.lane_width,
            max_lane,
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Step one lane left. Returns `false` when already at the left edge.
    pub fn move_left(&mut self) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        self.facing = Facing::Left;
        true
    }

    /// Step one lane right. Returns `false` when already at the right edge.
    pub fn move_right(&mut self) -> bool {
        if self.lane >= self.max_lane {
            return false;
        }
        self.lane += 1;
        self.facing = Facing::Right;
        true
    }
}

impl Entity for Player {
    fn position(&self) -> Position {
        Position {
            x: self.lane as f64 * self.lane_width,
            y: self.y,
        }
    }

    fn sprite(&self) -> SpriteId {
        match self.facing {
            Facing::Left => SpriteId::PlayerFlipped,
            Facing::Right => SpriteId::Player,
        }
    }

    /// The player only moves on input.
    fn update(&mut self, _elapsed_ms: u64) {}
}
