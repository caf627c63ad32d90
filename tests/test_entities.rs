mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;

use red_lost::config::GameConfig;
use red_lost::entities::*;
use red_lost::surface::SpriteId;

use common::{Draw, RecordingSurface};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_spawns_above_playfield_in_its_lane() {
    let cfg = GameConfig::default();
    let e = Enemy::spawn(4, &cfg, &mut seeded_rng());
    assert_eq!(e.lane, 4);
    assert_eq!(e.pos.x, 4.0 * 78.0);
    assert_eq!(e.pos.y, -87.0);
    assert_eq!(e.bottom(), 0.0);
}

#[test]
fn enemy_speed_sampled_within_range() {
    let cfg = GameConfig::default();
    let mut rng = seeded_rng();
    for lane in 0..200 {
        let e = Enemy::spawn(lane % 11, &cfg, &mut rng);
        assert!(e.speed() >= 0.25 && e.speed() < 0.75, "speed {}", e.speed());
    }
}

#[test]
fn enemy_update_moves_down_by_elapsed_times_speed() {
    let cfg = GameConfig::default();
    let mut e = Enemy::spawn(1, &cfg, &mut seeded_rng());
    let speed = e.speed();
    let y0 = e.pos.y;
    for dt in [0u64, 16, 17, 250, 3] {
        let before = e.pos.y;
        e.update(dt);
        assert_eq!(e.pos.y, before + dt as f64 * speed);
        assert_eq!(e.speed(), speed);
    }
    assert!(e.pos.y > y0);
}

#[test]
fn enemy_at_half_speed_covers_500_pixels_in_a_second() {
    let cfg = GameConfig::default();
    let mut e = Enemy::with_speed(0, 0.5, &cfg);
    let y0 = e.pos.y;
    for _ in 0..40 {
        e.update(25);
    }
    assert!((e.pos.y - (y0 + 500.0)).abs() < 1e-9);
}

#[test]
fn enemy_zero_elapsed_is_noop() {
    let cfg = GameConfig::default();
    let mut e = Enemy::with_speed(3, 0.4, &cfg);
    let before = e.clone();
    e.update(0);
    assert_eq!(e, before);
}

// ── Arrow & bow ───────────────────────────────────────────────────────────────

#[test]
fn arrow_starts_above_player_and_flies_up() {
    let cfg = GameConfig::default();
    let mut a = Arrow::fire(2, &cfg);
    assert_eq!(a.pos.x, 156.0);
    assert_eq!(a.pos.y, 259.0);
    a.update(100);
    assert_eq!(a.pos.y, 209.0);
    assert!(!a.is_spent());
}

#[test]
fn arrow_is_spent_at_top_edge() {
    let cfg = GameConfig::default();
    let mut a = Arrow::fire(0, &cfg);
    a.update(518); // 259 / 0.5
    assert!(a.is_spent());
}

#[test]
fn bow_falls_at_fixed_speed() {
    let cfg = GameConfig::default();
    let mut b = Bow::drop_in(5, &cfg);
    assert_eq!(b.pos.y, -115.0);
    assert_eq!(b.bottom(), 0.0);
    b.update(200);
    assert_eq!(b.pos.y, -15.0);
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_in_lane_two_facing_right() {
    let cfg = GameConfig::default();
    let p = Player::new(&cfg);
    assert_eq!(p.lane(), 2);
    assert_eq!(p.position(), Position { x: 156.0, y: 349.0 });
    assert_eq!(p.sprite(), SpriteId::Player);
    assert!(!p.has_bow);
}

#[test]
fn player_moves_one_lane_and_flips() {
    let cfg = GameConfig::default();
    let mut p = Player::new(&cfg);
    assert!(p.move_left());
    assert_eq!(p.lane(), 1);
    assert_eq!(p.position().x, 78.0);
    assert_eq!(p.sprite(), SpriteId::PlayerFlipped);
    assert!(p.move_right());
    assert_eq!(p.lane(), 2);
    assert_eq!(p.sprite(), SpriteId::Player);
}

#[test]
fn player_clamped_at_left_edge() {
    let cfg = GameConfig::default();
    let mut p = Player::new(&cfg);
    for _ in 0..10 {
        p.move_left();
    }
    assert_eq!(p.lane(), 0);
    assert!(!p.move_left());
    assert_eq!(p.position().x, 0.0);
}

#[test]
fn player_clamped_at_right_edge() {
    let cfg = GameConfig::default();
    let mut p = Player::new(&cfg);
    for _ in 0..50 {
        p.move_right();
    }
    let x = p.position().x;
    assert!(x <= cfg.width - cfg.player_width);
    assert_eq!(p.lane(), cfg.max_player_lane());
    assert!(!p.move_right());
}

#[test]
fn player_stays_in_bounds_for_any_move_sequence() {
    use rand::Rng;
    let cfg = GameConfig::default();
    let mut p = Player::new(&cfg);
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        if rng.gen_bool(0.5) {
            p.move_left();
        } else {
            p.move_right();
        }
        let x = p.position().x;
        assert!(x >= 0.0 && x <= cfg.width - cfg.player_width, "x = {}", x);
    }
}

#[test]
fn player_update_does_not_move() {
    let cfg = GameConfig::default();
    let mut p = Player::new(&cfg);
    let before = p.position();
    p.update(1000);
    assert_eq!(p.position(), before);
}

#[test]
fn render_draws_sprite_at_position() {
    let cfg = GameConfig::default();
    let e = Enemy::with_speed(3, 0.5, &cfg);
    let mut surface = RecordingSurface::default();
    e.render(&mut surface).unwrap();
    assert_eq!(surface.draws, vec![Draw::Image(SpriteId::Enemy, 234.0, -87.0)]);
}
