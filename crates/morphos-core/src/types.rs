use crate::constants::{JITTER_THRESHOLD, SHOCKWAVE_DECAY, SHOCKWAVE_MAX};

/// Particle index into the position/velocity buffers.
pub type ParticleIndex = u32;

/// Decaying impulse scalar, fed by strong bass and pointer acquisitions.
///
/// Always in `[0, SHOCKWAVE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shockwave(f32);

impl Shockwave {
    pub fn new(value: f32) -> Self {
        Self(sanitize(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Apply one frame of multiplicative decay.
    pub fn decay(&mut self) {
        self.0 *= SHOCKWAVE_DECAY;
    }

    /// Add energy, capped at SHOCKWAVE_MAX.
    pub fn inject(&mut self, amount: f32) {
        self.0 = sanitize(self.0 + amount.max(0.0));
    }

    /// Whether the impulse is strong enough to jitter particles.
    pub fn is_jittering(self) -> bool {
        self.0 > JITTER_THRESHOLD
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, SHOCKWAVE_MAX)
    } else {
        0.0
    }
}
