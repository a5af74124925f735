// File: crates/chart-core/src/animator.rs
// Summary: Reveal-animation progress as seen by renderers.

/// Current horizontal/vertical reveal phases. The host advances these between
/// frames; renderers only read them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    pub phase_x: f64,
    /// May exceed 1 during overshoot easing.
    pub phase_y: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::finished()
    }
}

impl Animator {
    pub const fn new(phase_x: f64, phase_y: f64) -> Self {
        Self { phase_x, phase_y }
    }

    /// Fully revealed.
    pub const fn finished() -> Self {
        Self { phase_x: 1.0, phase_y: 1.0 }
    }

    /// Horizontal phase limited to `[0, 1]`; NaN counts as not started.
    pub fn clamped_phase_x(&self) -> f64 {
        if self.phase_x.is_nan() { 0.0 } else { self.phase_x.clamp(0.0, 1.0) }
    }
}
