/// The game loop.
///
/// `Engine` exclusively owns every entity and the score for one session.
/// The host calls [`Engine::tick`] once per frame with the elapsed time and
/// schedules the next tick only while the outcome says the game is still
/// running. Input is applied between ticks via [`Engine::handle_input`].
/// All randomness arrives through an injected RNG so a seeded generator
/// reproduces a session exactly.

use std::io;

use rand::Rng;

use crate::collision::{self, BowFate};
use crate::config::GameConfig;
use crate::entities::{Arrow, Bow, Enemy, Entity, Player};
use crate::error::ConfigError;
use crate::score::ScoreKeeper;
use crate::spawner::Spawner;
use crate::surface::{AudioCues, Cue, Host, SpriteId, Surface, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal. Only [`Engine::restart`] leaves it.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Fire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The player was hit; the board was cleared for another try.
    LifeLost { lives_left: u32 },
    GameOver { score: u64 },
    /// The session had already ended; nothing happened.
    Stopped,
}

impl TickOutcome {
    /// Whether the host should schedule another tick.
    pub fn keep_running(&self) -> bool {
        matches!(self, Self::Continue | Self::LifeLost { .. })
    }
}

pub struct Engine {
    config: GameConfig,
    spawner: Spawner,
    player: Player,
    enemies: Vec<Enemy>,
    /// Single slot: firing again replaces the arrow in flight.
    arrow: Option<Arrow>,
    /// Single slot: at most one bow falls at a time.
    bow: Option<Bow>,
    score: ScoreKeeper,
    status: GameStatus,
}

impl Engine {
    /// Build a session with a full board. Invalid configuration is fatal.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = Spawner::new(&config)?;
        Ok(Self::fresh(config, spawner, rng))
    }

    /// Build a session around a hand-placed board, e.g. a scripted scenario.
    /// Each enemy must sit in its own lane; the spawner fills any shortfall
    /// on the first tick.
    pub fn with_enemies(config: GameConfig, enemies: Vec<Enemy>) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = Spawner::new(&config)?;
        for (i, enemy) in enemies.iter().enumerate() {
            if enemies[i + 1..].iter().any(|other| other.lane == enemy.lane) {
                return Err(ConfigError::SharedLane { lane: enemy.lane });
            }
        }
        Ok(Self::assemble(config, spawner, enemies))
    }

    fn fresh(config: GameConfig, spawner: Spawner, rng: &mut impl Rng) -> Self {
        let mut enemies = Vec::with_capacity(spawner.max_enemies());
        spawner.top_up(&mut enemies, &config, rng);
        Self::assemble(config, spawner, enemies)
    }

    fn assemble(config: GameConfig, spawner: Spawner, enemies: Vec<Enemy>) -> Self {
        Self {
            player: Player::new(&config),
            score: ScoreKeeper::new(config.initial_lives),
            enemies,
            arrow: None,
            bow: None,
            status: GameStatus::Running,
            spawner,
            config,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn lives(&self) -> u32 {
        self.score.lives()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn arrow(&self) -> Option<&Arrow> {
        self.arrow.as_ref()
    }

    pub fn bow(&self) -> Option<&Bow> {
        self.bow.as_ref()
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    pub fn start(&mut self, audio: &mut dyn AudioCues) {
        log::info!(
            "session started: {} lanes, {} lives, bow {}",
            self.spawner.lane_count(),
            self.score.lives(),
            if self.config.bow_enabled { "enabled" } else { "disabled" }
        );
        audio.play(Cue::Music);
    }

    /// Throw the current session away and begin again from the same config.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        log::info!("session restarted (previous score {})", self.score.score());
        *self = Self::fresh(self.config.clone(), self.spawner.clone(), rng);
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: InputEvent, audio: &mut dyn AudioCues) {
        if self.status != GameStatus::Running {
            return;
        }
        match event {
            InputEvent::MoveLeft => {
                self.player.move_left();
            }
            InputEvent::MoveRight => {
                self.player.move_right();
            }
            InputEvent::Fire => {
                if self.player.has_bow {
                    log::debug!("arrow fired in lane {}", self.player.lane());
                    self.arrow = Some(Arrow::fire(self.player.lane(), &self.config));
                    audio.play(Cue::Shoot);
                }
            }
        }
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    pub fn tick(
        &mut self,
        elapsed_ms: u64,
        rng: &mut impl Rng,
        host: &mut Host<'_>,
    ) -> io::Result<TickOutcome> {
        if self.status == GameStatus::GameOver {
            return Ok(TickOutcome::Stopped);
        }

        self.score.add_elapsed(elapsed_ms);

        for enemy in &mut self.enemies {
            enemy.update(elapsed_ms);
        }
        if let Some(arrow) = &mut self.arrow {
            arrow.update(elapsed_ms);
        }
        if let Some(bow) = &mut self.bow {
            bow.update(elapsed_ms);
        }

        self.render(host.surface)?;

        self.resolve_bow(host.audio);
        self.resolve_arrow();
        let config = &self.config;
        self.enemies.retain(|e| !collision::off_screen(e, config));
        self.spawner.top_up(&mut self.enemies, &self.config, rng);
        self.maybe_drop_bow(rng);

        if collision::player_hit(&self.player, &self.enemies, &self.config) {
            host.audio.play(Cue::Growl);
            let lives_left = self.score.lose_life();
            if self.score.is_exhausted() {
                let score = self.score.score();
                log::info!("game over with score {}", score);
                self.status = GameStatus::GameOver;
                host.audio.stop(Cue::Music);
                host.audio.play(Cue::Howl);
                host.shell.on_game_over(score);
                return Ok(TickOutcome::GameOver { score });
            }
            log::info!("life lost, {} remaining", lives_left);
            self.enemies.clear();
            self.draw_hud(host.surface)?;
            return Ok(TickOutcome::LifeLost { lives_left });
        }

        self.draw_hud(host.surface)?;
        Ok(TickOutcome::Continue)
    }

    /// Draw order keeps the player above the bow and the enemies.
    fn render(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.draw_image(SpriteId::Background, 0.0, 0.0)?;
        if let Some(bow) = &self.bow {
            bow.render(surface)?;
        }
        for enemy in &self.enemies {
            enemy.render(surface)?;
        }
        self.player.render(surface)?;
        if let Some(arrow) = &self.arrow {
            arrow.render(surface)?;
        }
        Ok(())
    }

    fn draw_hud(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.draw_text(&self.score.score().to_string(), 5.0, 30.0, TextStyle::Hud)?;
        surface.draw_text(
            &format!("Lives {}", self.score.lives()),
            self.config.width - 100.0,
            30.0,
            TextStyle::Hud,
        )
    }

    fn resolve_bow(&mut self, audio: &mut dyn AudioCues) {
        let Some(bow) = &self.bow else {
            return;
        };
        match collision::bow_fate(bow, &self.player, &self.config) {
            BowFate::Falling => {}
            BowFate::Caught => {
                log::info!("bow caught in lane {}", bow.lane);
                self.bow = None;
                self.player.has_bow = true;
                audio.play(Cue::BowCaught);
            }
            BowFate::Lost => {
                log::debug!("bow fell off the board in lane {}", bow.lane);
                self.bow = None;
            }
        }
    }

    fn resolve_arrow(&mut self) {
        let Some(arrow) = &self.arrow else {
            return;
        };
        // A strike at the top edge still counts before the arrow is spent.
        if let Some(idx) = collision::arrow_strike(arrow, &self.enemies) {
            let enemy = self.enemies.swap_remove(idx);
            log::debug!("enemy killed in lane {}", enemy.lane);
            self.arrow = None;
            self.score.add_bonus(self.config.kill_bonus);
        } else if arrow.is_spent() {
            log::debug!("arrow left the board in lane {}", arrow.lane);
            self.arrow = None;
        }
    }

    fn maybe_drop_bow(&mut self, rng: &mut impl Rng) {
        if !self.config.bow_enabled || self.bow.is_some() || self.player.has_bow {
            return;
        }
        if self.score.score() >= self.config.bow_score_threshold {
            let lane = self.spawner.random_lane(rng);
            log::info!("bow dropped in lane {}", lane);
            self.bow = Some(Bow::drop_in(lane, &self.config));
        }
    }
}
