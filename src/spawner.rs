/// Keeps the board stocked with a fixed number of enemies, one per lane.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Enemy;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Spawner {
    max_enemies: usize,
    lane_count: usize,
}

impl Spawner {
    /// Fails when there are not strictly more lanes than enemies, since the
    /// free-lane search would otherwise never terminate.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let lane_count = config.lane_count();
        if lane_count <= config.max_enemies {
            return Err(ConfigError::TooFewLanes {
                lanes: lane_count,
                max_enemies: config.max_enemies,
            });
        }
        Ok(Self {
            max_enemies: config.max_enemies,
            lane_count,
        })
    }

    pub fn max_enemies(&self) -> usize {
        self.max_enemies
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn random_lane(&self, rng: &mut impl Rng) -> usize {
        rng.gen_range(0..self.lane_count)
    }

    /// Spawn enemies into random free lanes until there are `max_enemies`.
    /// Returns how many were added.
    pub fn top_up(&self, enemies: &mut Vec<Enemy>, config: &GameConfig, rng: &mut impl Rng) -> usize {
        let mut spawned = 0;
        while enemies.len() < self.max_enemies {
            let lane = loop {
                let candidate = self.random_lane(rng);
                if !enemies.iter().any(|e| e.lane == candidate) {
                    break candidate;
                }
            };
            let enemy = Enemy::spawn(lane, config, rng);
            log::debug!("enemy spawned in lane {} at speed {:.3}", lane, enemy.speed());
            enemies.push(enemy);
            spawned += 1;
        }
        spawned
    }
}
