// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_sane() {
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bob_range_stays_above_grid_and_below_label() {
    assert!(BOB_BASE >= SPHERE_RADIUS);
    assert!(BOB_BASE + BOB_AMPLITUDE < LABEL_Y);
    assert!(BOB_TWEEN_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_settings_are_reasonable() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(LABEL_RASTER_PX > 0);
    assert!(!LABEL_TEXT.is_empty());
    assert!(CANVAS_SELECTOR.starts_with("canvas"));
    for c in SPHERE_COLOR.iter().chain(LABEL_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}
