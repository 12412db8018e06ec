/// Easing curves over normalized progress `p ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic in/out ("power2.inOut").
    QuadInOut,
}

impl Ease {
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::QuadInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    let q = 1.0 - p;
                    1.0 - 2.0 * q * q
                }
            }
        }
    }
}

/// Time-based interpolation of a scalar toward a target.
///
/// Only one animation is ever in flight: `retarget` replaces it, starting
/// from wherever the previous one currently is (last target wins).
/// Timestamps are `f64` seconds; only the offset from the start is narrowed,
/// so progress stays precise on long-lived pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_sec: f64,
    duration_sec: f32,
    ease: Ease,
}

impl Tween {
    /// A settled tween resting at `value`.
    pub fn at_rest(value: f32, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            start_sec: 0.0,
            duration_sec: 0.0,
            ease,
        }
    }

    /// Value at time `now_sec`; holds the target once the duration has elapsed.
    pub fn sample(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let p = (now_sec - self.start_sec) as f32 / self.duration_sec;
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    /// Restart toward `to` from the value sampled at `now_sec`.
    pub fn retarget(&mut self, now_sec: f64, to: f32, duration_sec: f32) {
        self.from = self.sample(now_sec);
        self.to = to;
        self.start_sec = now_sec;
        self.duration_sec = duration_sec.max(0.0);
    }
}
