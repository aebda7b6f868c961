//! Per-particle force accumulation and explicit integration, fused with the
//! spatial grid rebuild.

use glam::Vec3;
use morphos_core::constants::{
    JITTER_SCALE, POINTER_FALLOFF, POINTER_RADIUS_SQ, POINTER_STRENGTH, SCAN_BAND_HALF_WIDTH,
    SCAN_JITTER,
};
use morphos_shapes::ShapeField;

use crate::grid::SpatialHashGrid;
use crate::particles::ParticleBuffer;
use crate::rng::{signed_unit_cube, SALT_JITTER, SALT_SCAN};

/// Planar distance below which the pointer force is skipped (no direction).
const MIN_POINTER_DISTANCE: f32 = 1e-6;

/// Frame-constant inputs to the integrator.
#[derive(Debug, Clone, Copy)]
pub struct ForceContext {
    /// Multiplier applied to every target position.
    pub effective_scale: f32,
    /// Interaction point on the z=0 plane; None disables pointer repulsion.
    pub pointer: Option<Vec3>,
    /// Shockwave level, already gated by the jitter threshold (0 = none).
    pub jitter: f32,
    /// Height of the cosmetic scan band in unscaled target space.
    pub scan_band: Option<f32>,
    pub stiffness: f32,
    pub damping: f32,
    /// Frame counter seeding the per-particle PRNG.
    pub frame: u32,
}

/// `(target·scale - position)·k`
pub fn spring_force(target: Vec3, scale: f32, position: Vec3, stiffness: f32) -> Vec3 {
    (target * scale - position) * stiffness
}

/// Planar repulsion away from the interaction point.
///
/// Zero outside `d² < 150` and when the particle sits exactly on the point.
pub fn pointer_force(position: Vec3, point: Vec3) -> Vec3 {
    let dx = position.x - point.x;
    let dy = position.y - point.y;
    let d_sq = dx * dx + dy * dy;
    if !(d_sq < POINTER_RADIUS_SQ) {
        return Vec3::ZERO;
    }
    let d = d_sq.sqrt();
    if d < MIN_POINTER_DISTANCE {
        return Vec3::ZERO;
    }
    let magnitude = POINTER_STRENGTH * ((POINTER_FALLOFF - d) / POINTER_FALLOFF).max(0.0);
    Vec3::new(dx / d, dy / d, 0.0) * magnitude
}

/// Uniform per-axis impulse scaled by the shockwave level.
pub fn jitter_impulse(index: u32, frame: u32, shockwave: f32) -> Vec3 {
    if shockwave <= 0.0 {
        return Vec3::ZERO;
    }
    signed_unit_cube(index, frame, SALT_JITTER) * (shockwave * JITTER_SCALE)
}

/// Target noise for targets near the moving scan band.
pub fn scan_offset(target: Vec3, band_y: f32, index: u32, frame: u32) -> Vec3 {
    if (target.y - band_y).abs() < SCAN_BAND_HALF_WIDTH {
        signed_unit_cube(index, frame, SALT_SCAN) * SCAN_JITTER
    } else {
        Vec3::ZERO
    }
}

/// Accumulate force, apply drag, then advance position by one unit step.
pub fn integrate_particle(position: &mut Vec3, velocity: &mut Vec3, force: Vec3, damping: f32) {
    *velocity = (*velocity + force) * damping;
    *position += *velocity;
}

/// Advance every particle one frame and rebuild the grid in the same pass.
///
/// The grid is cleared first. Returns the number of particles that landed
/// inside the grid domain.
pub fn integrate(
    particles: &mut ParticleBuffer,
    field: &ShapeField,
    ctx: &ForceContext,
    grid: &mut SpatialHashGrid,
) -> usize {
    grid.clear();
    let (positions, velocities) = particles.split_mut();

    for (i, ((position, velocity), &target)) in positions
        .iter_mut()
        .zip(velocities.iter_mut())
        .zip(field.points())
        .enumerate()
    {
        let index = i as u32;

        let target = match ctx.scan_band {
            Some(band_y) => target + scan_offset(target, band_y, index, ctx.frame),
            None => target,
        };

        let mut force = spring_force(target, ctx.effective_scale, *position, ctx.stiffness);
        if let Some(point) = ctx.pointer {
            force += pointer_force(*position, point);
        }
        force += jitter_impulse(index, ctx.frame, ctx.jitter);

        integrate_particle(position, velocity, force, ctx.damping);
        grid.insert(index, *position);
    }

    grid.inserted()
}
