use super::constants::{BOB_AMPLITUDE, BOB_BASE, BOB_TWEEN_SEC};
use super::tween::{Ease, Tween};

/// Height the sphere heads toward at `elapsed_sec`; always within
/// `[BOB_BASE, BOB_BASE + BOB_AMPLITUDE]`.
#[inline]
pub fn bob_target(elapsed_sec: f64) -> f32 {
    elapsed_sec.sin().abs() as f32 * BOB_AMPLITUDE + BOB_BASE
}

/// Drives the sphere's vertical coordinate.
///
/// Every step re-issues a short eased tween toward the current target; the
/// tween keeps the motion smooth when frames arrive unevenly.
#[derive(Debug, Clone)]
pub struct Bobber {
    tween: Tween,
}

impl Bobber {
    pub fn new(initial_y: f32) -> Self {
        Self {
            tween: Tween::at_rest(initial_y, Ease::QuadInOut),
        }
    }

    /// Retargets toward `bob_target(elapsed_sec)` and returns the new height.
    pub fn step(&mut self, elapsed_sec: f64) -> f32 {
        self.tween
            .retarget(elapsed_sec, bob_target(elapsed_sec), BOB_TWEEN_SEC);
        self.tween.sample(elapsed_sec)
    }
}
