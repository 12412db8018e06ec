// Host-side tests for the cover-fit calculator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fit {
    include!("../src/core/fit.rs");
}

use fit::*;

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn equal_aspect_is_identity() {
    for (w, h) in [(1.0, 1.0), (1920.0, 1080.0), (300.0, 1200.0)] {
        let fit = compute_fit(w, h, w, h).unwrap();
        assert_eq!(fit, BackgroundFit::IDENTITY);
    }
    // Same ratio at different scales takes the else branch too.
    let fit = compute_fit(800.0, 600.0, 400.0, 300.0).unwrap();
    assert!(approx(fit.repeat.x, 1.0) && approx(fit.repeat.y, 1.0));
    assert!(approx(fit.offset.x, 0.0) && approx(fit.offset.y, 0.0));
}

#[test]
fn wide_image_in_narrow_viewport_crops_horizontally() {
    let fit = compute_fit(1600.0, 900.0, 400.0, 900.0).unwrap();
    assert!(approx(fit.repeat.x, 0.25), "repeat.x = {}", fit.repeat.x);
    assert!(approx(fit.offset.x, 0.375), "offset.x = {}", fit.offset.x);
    assert_eq!(fit.repeat.y, 1.0);
    assert_eq!(fit.offset.y, 0.0);
}

#[test]
fn tall_image_in_wide_viewport_crops_vertically() {
    let fit = compute_fit(900.0, 1600.0, 1600.0, 900.0).unwrap();
    let factor = (900.0_f32 / 1600.0) / (1600.0 / 900.0);
    assert_eq!(fit.repeat.x, 1.0);
    assert_eq!(fit.offset.x, 0.0);
    assert!(approx(fit.repeat.y, factor));
    assert!((fit.repeat.y - 0.316).abs() < 1e-3);
    assert!((fit.offset.y - 0.342).abs() < 1e-3);
}

#[test]
fn repeat_and_offset_stay_in_range_with_one_full_axis() {
    let sides = [1.0_f32, 3.0, 17.0, 240.0, 900.0, 1600.0, 4096.0];
    for &iw in &sides {
        for &ih in &sides {
            for &vw in &sides {
                for &vh in &sides {
                    let fit = compute_fit(iw, ih, vw, vh).unwrap();
                    for r in [fit.repeat.x, fit.repeat.y] {
                        assert!(r > 0.0 && r <= 1.0, "repeat {} for {iw}x{ih} in {vw}x{vh}", r);
                    }
                    for o in [fit.offset.x, fit.offset.y] {
                        assert!((0.0..0.5).contains(&o), "offset {} for {iw}x{ih} in {vw}x{vh}", o);
                    }
                    assert!(fit.repeat.x == 1.0 || fit.repeat.y == 1.0);
                    // The cropped window stays centered.
                    assert!(approx(fit.offset.x * 2.0 + fit.repeat.x, 1.0));
                    assert!(approx(fit.offset.y * 2.0 + fit.repeat.y, 1.0));
                }
            }
        }
    }
}

#[test]
fn fit_is_pure() {
    let a = compute_fit(1234.0, 567.0, 890.0, 1011.0).unwrap();
    let b = compute_fit(1234.0, 567.0, 890.0, 1011.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_sizes_are_rejected() {
    assert!(matches!(
        compute_fit(0.0, 900.0, 400.0, 900.0),
        Err(FitError::InvalidImage { .. })
    ));
    assert!(matches!(
        compute_fit(1600.0, f32::NAN, 400.0, 900.0),
        Err(FitError::InvalidImage { .. })
    ));
    assert!(matches!(
        compute_fit(1600.0, 900.0, 400.0, 0.0),
        Err(FitError::InvalidViewport { .. })
    ));
    assert!(matches!(
        compute_fit(1600.0, 900.0, -1.0, 900.0),
        Err(FitError::InvalidViewport { .. })
    ));
    assert!(ViewportSize::new(0.0, 100.0).is_none());
    assert!(ImageSize::new(10.0, f32::INFINITY).is_none());
}

#[test]
fn cover_matches_compute_fit() {
    let image = ImageSize::new(1600.0, 900.0).unwrap();
    let viewport = ViewportSize::new(1280.0, 720.0).unwrap();
    assert_eq!(
        BackgroundFit::cover(image, viewport),
        compute_fit(1600.0, 900.0, 1280.0, 720.0).unwrap()
    );
    assert_eq!(BackgroundFit::default(), BackgroundFit::IDENTITY);
}

#[test]
fn scrollbar_width_is_subtracted_only_when_present() {
    assert_eq!(scrollbar_adjusted_width(1280.0, 1265.0), 1265.0);
    assert_eq!(scrollbar_adjusted_width(1280.0, 1280.0), 1280.0);
    // Unknown client width: keep the raw window width.
    assert_eq!(scrollbar_adjusted_width(1280.0, 0.0), 1280.0);
    assert_eq!(scrollbar_adjusted_width(1280.0, 1300.0), 1280.0);
}

#[test]
fn refit_keeps_previous_fit_until_both_sizes_are_known() {
    let image = ImageSize::new(1600.0, 900.0);
    let viewport = ViewportSize::new(900.0, 900.0);
    // Image loaded before any usable viewport: the seeded identity stands.
    assert_eq!(
        refit(BackgroundFit::IDENTITY, image, None),
        BackgroundFit::IDENTITY
    );
    assert_eq!(
        refit(BackgroundFit::IDENTITY, None, viewport),
        BackgroundFit::IDENTITY
    );

    let fitted = refit(BackgroundFit::IDENTITY, image, viewport);
    assert_eq!(
        fitted,
        BackgroundFit::cover(image.unwrap(), viewport.unwrap())
    );
    // A later empty viewport (minimized window) leaves the last fit in place.
    assert_eq!(refit(fitted, image, ViewportSize::new(0.0, 0.0)), fitted);
}

#[test]
fn clamp_extent_leaves_small_sizes_alone() {
    assert_eq!(clamp_extent(1920, 1080, 8192), (1920, 1080));
    assert_eq!(clamp_extent(8192, 8192, 8192), (8192, 8192));
}

#[test]
fn clamp_extent_scales_the_longest_side_down() {
    assert_eq!(clamp_extent(16384, 4096, 8192), (8192, 2048));
    assert_eq!(clamp_extent(3000, 12000, 6000), (1500, 6000));
    let (w, h) = clamp_extent(10_000, 7_000, 4096);
    assert!(w <= 4096 && h <= 4096);
    assert!((w as f32 / h as f32 - 10.0 / 7.0).abs() < 1e-3);
}

#[test]
fn clamp_extent_never_returns_zero() {
    assert_eq!(clamp_extent(100_000, 1, 8192), (8192, 1));
    let (w, h) = clamp_extent(20, 20, 0);
    assert_eq!((w, h), (1, 1));
}
