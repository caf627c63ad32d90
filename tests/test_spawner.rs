use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use red_lost::config::GameConfig;
use red_lost::entities::Enemy;
use red_lost::error::ConfigError;
use red_lost::spawner::Spawner;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn distinct_lanes(enemies: &[Enemy]) -> bool {
    let lanes: HashSet<usize> = enemies.iter().map(|e| e.lane).collect();
    lanes.len() == enemies.len()
}

#[test]
fn default_board_has_eleven_lanes() {
    let spawner = Spawner::new(&GameConfig::default()).unwrap();
    assert_eq!(spawner.lane_count(), 11);
    assert_eq!(spawner.max_enemies(), 3);
}

#[test]
fn top_up_fills_empty_board() {
    let cfg = GameConfig::default();
    let spawner = Spawner::new(&cfg).unwrap();
    let mut enemies = Vec::new();
    let added = spawner.top_up(&mut enemies, &cfg, &mut seeded_rng());
    assert_eq!(added, 3);
    assert_eq!(enemies.len(), 3);
    assert!(distinct_lanes(&enemies));
    for e in &enemies {
        assert!(e.lane < 11);
        assert_eq!(e.pos.y, -cfg.enemy_height);
    }
}

#[test]
fn top_up_only_adds_the_shortfall() {
    let cfg = GameConfig::default();
    let spawner = Spawner::new(&cfg).unwrap();
    let mut enemies = vec![Enemy::with_speed(4, 0.3, &cfg)];
    let added = spawner.top_up(&mut enemies, &cfg, &mut seeded_rng());
    assert_eq!(added, 2);
    assert_eq!(enemies[0].lane, 4);
    assert!(distinct_lanes(&enemies));
}

#[test]
fn top_up_on_full_board_is_noop() {
    let cfg = GameConfig::default();
    let spawner = Spawner::new(&cfg).unwrap();
    let mut enemies = vec![
        Enemy::with_speed(0, 0.3, &cfg),
        Enemy::with_speed(1, 0.3, &cfg),
        Enemy::with_speed(2, 0.3, &cfg),
    ];
    let before = enemies.clone();
    assert_eq!(spawner.top_up(&mut enemies, &cfg, &mut seeded_rng()), 0);
    assert_eq!(enemies, before);
}

#[test]
fn top_up_never_shares_lanes_over_many_rounds() {
    let cfg = GameConfig::default();
    let spawner = Spawner::new(&cfg).unwrap();
    let mut rng = seeded_rng();
    let mut enemies = Vec::new();
    for round in 0..500 {
        spawner.top_up(&mut enemies, &cfg, &mut rng);
        assert_eq!(enemies.len(), 3);
        assert!(distinct_lanes(&enemies));
        // Knock one out so the next round has to pick a lane again.
        enemies.remove(round % 3);
    }
}

#[test]
fn tight_board_still_terminates() {
    // Four lanes, three enemies: only one free lane at each step.
    let cfg = GameConfig {
        width: 4.0 * 78.0,
        ..GameConfig::default()
    };
    let spawner = Spawner::new(&cfg).unwrap();
    let mut enemies = Vec::new();
    spawner.top_up(&mut enemies, &cfg, &mut seeded_rng());
    assert_eq!(enemies.len(), 3);
    assert!(distinct_lanes(&enemies));
}

#[test]
fn lanes_not_exceeding_enemy_count_is_fatal() {
    let cfg = GameConfig {
        width: 3.0 * 78.0,
        ..GameConfig::default()
    };
    match Spawner::new(&cfg) {
        Err(ConfigError::TooFewLanes { lanes, max_enemies }) => {
            assert_eq!(lanes, 3);
            assert_eq!(max_enemies, 3);
        }
        other => panic!("expected TooFewLanes, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn random_lane_is_in_range() {
    let spawner = Spawner::new(&GameConfig::default()).unwrap();
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        assert!(spawner.random_lane(&mut rng) < 11);
    }
}
