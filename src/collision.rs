/// Lane-based hit tests.
///
/// Two things collide when they share a lane and a vertical threshold has
/// been crossed. Horizontal overlap between neighbouring lanes is never
/// considered.

use crate::config::GameConfig;
use crate::entities::{Arrow, Bow, Enemy, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BowFate {
    Falling,
    Caught,
    /// Fell past the bottom of the playfield.
    Lost,
}

/// An enemy in the player's lane has reached the trigger line.
pub fn player_hit(player: &Player, enemies: &[Enemy], config: &GameConfig) -> bool {
    let trigger = config.trigger_line();
    enemies
        .iter()
        .any(|e| e.lane == player.lane() && e.bottom() >= trigger)
}

/// Index of the enemy the arrow strikes, if any.
pub fn arrow_strike(arrow: &Arrow, enemies: &[Enemy]) -> Option<usize> {
    enemies
        .iter()
        .position(|e| e.lane == arrow.lane && arrow.pos.y <= e.bottom())
}

pub fn bow_fate(bow: &Bow, player: &Player, config: &GameConfig) -> BowFate {
    if bow.lane == player.lane() && bow.bottom() >= config.trigger_line() {
        BowFate::Caught
    } else if bow.pos.y > config.height {
        BowFate::Lost
    } else {
        BowFate::Falling
    }
}

/// The enemy has scrolled completely past the bottom edge.
pub fn off_screen(enemy: &Enemy, config: &GameConfig) -> bool {
    enemy.pos.y > config.height
}
