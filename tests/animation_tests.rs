// Host-side tests for the tween and the sphere bobbing driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;
use constants::*;
use std::f64::consts::FRAC_PI_2;
use tween::*;

#[test]
fn bob_target_hits_known_points() {
    assert!((bob_target(0.0) - 0.3).abs() < 1e-6);
    assert!((bob_target(FRAC_PI_2) - 3.3).abs() < 1e-5);
    assert!((bob_target(-FRAC_PI_2) - 3.3).abs() < 1e-5);
}

#[test]
fn bob_target_stays_in_range() {
    let lo = BOB_BASE;
    let hi = BOB_BASE + BOB_AMPLITUDE;
    let mut t = -50.0_f64;
    while t < 50.0 {
        let y = bob_target(t);
        assert!(y >= lo - 1e-6 && y <= hi + 1e-6, "target {} at t={}", y, t);
        t += 0.037;
    }
}

#[test]
fn ease_endpoints_and_symmetry() {
    let ease = Ease::QuadInOut;
    assert_eq!(ease.apply(0.0), 0.0);
    assert_eq!(ease.apply(1.0), 1.0);
    assert_eq!(ease.apply(-1.0), 0.0);
    assert_eq!(ease.apply(2.0), 1.0);
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
    for i in 0..=20 {
        let p = i as f32 / 20.0;
        let a = ease.apply(p);
        let b = ease.apply(1.0 - p);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
    // slow start, slow finish
    assert!(ease.apply(0.1) < 0.1);
    assert!(ease.apply(0.9) > 0.9);
}

#[test]
fn tween_moves_monotonically_to_target() {
    let mut tw = Tween::at_rest(0.0, Ease::QuadInOut);
    tw.retarget(1.0, 2.0, 0.1);
    assert_eq!(tw.sample(1.0), 0.0);
    let mut prev = 0.0;
    for i in 1..=10 {
        let v = tw.sample(1.0 + i as f64 * 0.01);
        assert!(v >= prev);
        prev = v;
    }
    assert!((tw.sample(1.1) - 2.0).abs() < 1e-5);
    assert_eq!(tw.sample(5.0), 2.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut tw = Tween::at_rest(0.0, Ease::QuadInOut);
    tw.retarget(0.0, 1.0, 1.0);
    let mid = tw.sample(0.5);
    assert!((mid - 0.5).abs() < 1e-6);
    // Last target wins; no jump at the moment of retargeting.
    tw.retarget(0.5, -1.0, 1.0);
    assert!((tw.sample(0.5) - mid).abs() < 1e-6);
    assert!((tw.sample(1.5) + 1.0).abs() < 1e-6);
}

#[test]
fn progress_stays_precise_after_long_uptime() {
    // A day of uptime; an f32 clock would quantize to ~8ms here.
    let start = 86_400.0_f64;
    let mut tw = Tween::at_rest(0.0, Ease::QuadInOut);
    tw.retarget(start, 1.0, 0.1);
    assert!((tw.sample(start + 0.05) - 0.5).abs() < 1e-3);
    assert!((tw.sample(start + 0.025) - 0.125).abs() < 1e-3);
    assert!(tw.sample(start + 0.001) < tw.sample(start + 0.002));
}

#[test]
fn zero_duration_snaps() {
    let mut tw = Tween::at_rest(3.0, Ease::QuadInOut);
    assert_eq!(tw.sample(0.0), 3.0);
    tw.retarget(1.0, 7.0, 0.0);
    assert_eq!(tw.sample(1.0), 7.0);
}

#[test]
fn bobber_follows_target_smoothly() {
    let mut bob = Bobber::new(0.0);
    let dt = 1.0 / 60.0;
    let mut t = 0.0_f64;
    let mut prev = bob.step(t);
    assert_eq!(prev, 0.0);
    let max_jump = 0.5;
    for _ in 0..600 {
        t += dt;
        let y = bob.step(t);
        assert!((y - prev).abs() < max_jump, "jump {} -> {} at t={}", prev, y, t);
        assert!(y >= 0.0 && y <= BOB_BASE + BOB_AMPLITUDE + 1e-4);
        prev = y;
    }
    // Once a full tween duration passes, the next step starts from the
    // previous target.
    let settled = bob.step(t + BOB_TWEEN_SEC as f64);
    assert!((settled - bob_target(t)).abs() < 1e-4);
}

#[test]
fn bobber_eases_halfway_late_in_a_long_session() {
    let mut bob = Bobber::new(0.0);
    let step = BOB_TWEEN_SEC as f64;
    let mut t = 200_000.0_f64;
    for _ in 0..30 {
        bob.step(t);
        t += step;
    }
    let from = bob.step(t);
    let half = bob.step(t + step / 2.0);
    let expected = from + (bob_target(t) - from) * 0.5;
    assert!((half - expected).abs() < 1e-3, "{} vs {}", half, expected);
}
