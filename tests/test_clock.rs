use std::thread;
use std::time::Duration;

use red_lost::clock::FrameClock;

#[test]
fn elapsed_tracks_wall_time() {
    let mut clock = FrameClock::new(10_000);
    thread::sleep(Duration::from_millis(20));
    let ms = clock.elapsed_ms();
    assert!(ms >= 20, "elapsed {}", ms);
}

#[test]
fn long_stall_is_clamped() {
    let mut clock = FrameClock::new(5);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(clock.elapsed_ms(), 5);
}

#[test]
fn reset_discards_time_already_passed() {
    let mut clock = FrameClock::new(10_000);
    thread::sleep(Duration::from_millis(30));
    clock.reset();
    assert!(clock.elapsed_ms() < 30);
}
