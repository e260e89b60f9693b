use desktop_pet::pet::model::{Direction, Mode, WINDOW_WIDTH};
use desktop_pet::pet::{BehaviorEngine, PetEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mock_host::{HostCall, MockHost};

const FRAME_MS: u64 = 16;

fn engine(x: i32, seed: u64) -> BehaviorEngine<MockHost, StdRng> {
    let host = MockHost::new(1920, 1040, (x, 700));
    BehaviorEngine::start_with_rng(host, StdRng::seed_from_u64(seed), 0).unwrap()
}

#[test]
fn startup_without_screen_geometry_is_fatal() {
    let mut host = MockHost::new(1920, 1040, (0, 0));
    host.screen = None;
    let err = BehaviorEngine::start_with_rng(host, StdRng::seed_from_u64(0), 0)
        .err()
        .expect("engine must not start");
    assert!(err.to_string().contains("screen geometry"));
}

#[test]
fn starts_walking_forward_from_host_position() {
    let engine = engine(300, 0);
    assert_eq!(engine.mode(), Mode::Walking);
    assert_eq!(engine.state().direction, Direction::Forward);
    assert_eq!(engine.position().x, 300.0);
    assert_eq!(engine.position().y, 700.0);
    assert_eq!(engine.state().ground_line, 955.0);
}

#[test]
fn one_tick_advances_by_walk_speed_and_lands_on_ground() {
    let mut engine = engine(1700, 0);
    engine.step(FRAME_MS);
    assert_eq!(engine.position().x, 1702.0);
    assert_eq!(engine.position().y, 955.0);
    assert_eq!(engine.host().calls, vec![HostCall::Move(1702, 955)]);
}

#[test]
fn right_edge_flips_direction_and_clamps() {
    let mut engine = engine(1840, 0);
    engine.step(FRAME_MS);
    assert_eq!(engine.state().direction, Direction::Backward);
    assert_eq!(engine.position().x, 1840.0);
    assert_eq!(engine.labels().direction, "left");

    engine.step(2 * FRAME_MS);
    assert_eq!(engine.position().x, 1838.0);
}

#[test]
fn left_edge_clamps_to_zero() {
    let mut engine = engine(-10, 0);
    engine.step(FRAME_MS);
    assert_eq!(engine.position().x, 0.0);
    assert_eq!(engine.state().direction, Direction::Forward);
}

#[test]
fn edge_turn_postpones_spontaneous_flips() {
    let mut engine = engine(1840, 0);
    engine.step(7_000);
    assert_eq!(engine.state().direction_change_deadline_ms, 12_000);
}

#[test]
fn no_spontaneous_flip_before_minimum_walk_time() {
    let mut engine = engine(100, 9);
    let mut now = 0;
    while now + FRAME_MS <= 5_000 {
        now += FRAME_MS;
        engine.step(now);
        assert_eq!(engine.state().direction, Direction::Forward);
    }
}

#[test]
fn walking_feet_stay_on_ground_and_inside_screen() {
    for seed in 0..8 {
        let mut engine = engine(900, seed);
        let max_x = (1920 - WINDOW_WIDTH) as f64;
        let mut now = 0;
        for _ in 0..20_000 {
            now += FRAME_MS;
            engine.step(now);
            let mode = engine.mode();
            if mode == Mode::Walking {
                assert_eq!(engine.position().y, engine.state().ground_line);
            }
            if mode.is_idle() {
                engine.handle_event(PetEvent::AnimationCycleComplete { mode }, now);
            }
            let x = engine.position().x;
            assert!((0.0..=max_x).contains(&x), "x={x} out of bounds");
        }
    }
}

#[test]
fn position_updates_are_throttled_to_interval() {
    let mut engine = engine(500, 0);
    for tick in 1..=100 {
        engine.step(tick * 4);
    }
    let moves = engine.host().moves();
    // 400ms of 4ms frames; one update per 24ms.
    assert_eq!(moves.len(), 17);
}
