//! End-to-end session tests: simulate, terminate, export, read back.

use std::f32::consts::TAU;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::Vec2;
use proptest::prelude::*;

use pong_circle::sim::{ContactOutcome, GameState, RotateDirection, SessionPhase, TickInput, tick};
use pong_circle::ui::{FrameClock, HeadlessFrontend, SteppedClock, run_session};
use pong_circle::{Player, Settings, polar_to_cartesian, results};

fn temp_csv(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "pong_circle_it_{}_{}.csv",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_export_scenario_row() {
    let settings = Settings::default();
    let t0 = Instant::now();
    let mut state = GameState::with_heading(&settings, 0.0, t0);
    state.stats.hits = 3;
    state.stats.fastest_speed = 4.1573;

    let path = temp_csv("scenario");
    let record = state
        .finalize_and_export(&Player::new("Ava", "9"), &path, t0 + Duration::from_millis(12_800))
        .unwrap();

    assert_eq!(record.age, "9");
    assert_eq!(record.name, "Ava");
    assert_eq!(record.hits, 3);
    assert_eq!(record.fastest_speed, 4.16);
    assert_eq!(record.elapsed_seconds, 12);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "9,Ava,3,4.16,12\r\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_sessions_accumulate_rows() {
    let settings = Settings::default();
    let path = temp_csv("accumulate");

    for (i, name) in ["Ava", "Bo", "Cy"].iter().enumerate() {
        let mut clock = SteppedClock::new(Instant::now(), settings.frame_duration());
        let state = GameState::new(&settings, i as u64, clock.now());
        let mut frontend = HeadlessFrontend::new(90);
        let state = run_session(state, &mut frontend, &mut clock).unwrap();
        state
            .finalize_and_export(&Player::new(*name, "10"), &path, clock.now())
            .unwrap();
    }

    let records = results::load_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].name, "Cy");
    // 90 frames at 60 Hz
    assert!(records.iter().all(|r| r.elapsed_seconds == 1));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_five_consecutive_hits_via_tick() {
    let settings = Settings::default();
    let t0 = Instant::now();
    let mut state = GameState::with_heading(&settings, 0.0, t0);

    // Park the ball on the wall under the paddle; every frame resolves a hit
    state.ball.pos = state.arena.center + Vec2::new(190.0, 0.0);
    state.ball.vel = Vec2::ZERO;
    for frame in 1..=5 {
        tick(&mut state, &TickInput::default(), t0 + Duration::from_millis(frame * 16));
    }

    let snap = state.snapshot();
    assert_eq!(snap.hits, 5);
    assert!((snap.fastest_speed - 3.0 * 1.05_f32.powi(5)).abs() < 1e-4);
    assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-3);
}

#[test]
fn test_quit_then_export_once() {
    let settings = Settings::default();
    let t0 = Instant::now();
    let mut state = GameState::new(&settings, 5, t0);
    tick(&mut state, &TickInput::default(), t0);
    tick(
        &mut state,
        &TickInput {
            rotation: RotateDirection::Hold,
            quit: true,
        },
        t0 + Duration::from_secs(2),
    );
    assert_eq!(state.phase, SessionPhase::Terminated);

    let record = state.finalize(&Player::new("Ava", "9"), t0 + Duration::from_secs(2));
    assert_eq!(record.elapsed_seconds, 2);
}

proptest! {
    #[test]
    fn prop_free_flight_is_untouched(
        r in 0.0f32..189.5,
        theta in 0.0f32..TAU,
        heading in 0.0f32..TAU,
        paddle in -10.0f32..10.0,
    ) {
        let settings = Settings::default();
        let mut state = GameState::with_heading(&settings, heading, Instant::now());
        state.ball.pos = polar_to_cartesian(state.arena.center, r, theta);
        state.paddle.angle = paddle;
        let before = state.ball.clone();

        prop_assert_eq!(state.check_boundary_and_reflect(), ContactOutcome::None);
        prop_assert_eq!(state.ball, before);
        prop_assert_eq!(state.stats.hits, 0);
    }

    #[test]
    fn prop_contact_keeps_speed_invariant(
        theta in 0.0f32..TAU,
        paddle in 0.0f32..TAU,
    ) {
        let settings = Settings::default();
        let mut state = GameState::with_heading(&settings, theta, Instant::now());
        state.ball.pos = polar_to_cartesian(state.arena.center, 195.0, theta);
        state.paddle.angle = paddle;
        let speed_before = state.ball.speed;

        let outcome = state.check_boundary_and_reflect();
        prop_assert_ne!(outcome, ContactOutcome::None);
        prop_assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-3);
        match outcome {
            ContactOutcome::PaddleHit => prop_assert!(state.ball.speed > speed_before),
            _ => prop_assert_eq!(state.ball.speed, speed_before),
        }
    }
}
