//! Stateless per-particle PRNG.
//!
//! Pure function: `particle_hash(index, frame, salt) -> u32`. No state is
//! threaded through the integrator, so a frame is reproducible from its
//! inputs alone.

use glam::Vec3;

/// Salts separating independent random streams for the same particle/frame.
pub(crate) const SALT_JITTER: u32 = 0x1;
pub(crate) const SALT_SCAN: u32 = 0x2;

/// Hash a particle index, frame counter and stream salt into a pseudo-random u32.
pub(crate) fn particle_hash(index: u32, frame: u32, salt: u32) -> u32 {
    let mut state = index
        .wrapping_mul(0x9E3779B9)
        .wrapping_add(frame.wrapping_mul(0x2545F491))
        .wrapping_add(salt.wrapping_mul(0x6C62272E));

    // PCG-style mixing rounds
    state = state ^ (state >> 16);
    state = state.wrapping_mul(0x45D9F3B);
    state = state ^ (state >> 16);
    state = state.wrapping_mul(0x45D9F3B);
    state = state ^ (state >> 16);

    state
}

/// Convert a hash value to a float in [0, 1).
pub(crate) fn hash_to_float(hash: u32) -> f32 {
    (hash >> 8) as f32 / 16_777_216.0 // 2^24
}

/// Vector with each component uniform in [-1, 1).
pub(crate) fn signed_unit_cube(index: u32, frame: u32, salt: u32) -> Vec3 {
    let h = particle_hash(index, frame, salt);
    let a = hash_to_float(h);
    let b = hash_to_float(particle_hash(h, frame, salt ^ 0xA5A5));
    let c = hash_to_float(particle_hash(h ^ 0x5A5A_5A5A, frame, salt));
    Vec3::new(a, b, c) * 2.0 - Vec3::ONE
}
