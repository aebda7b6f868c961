//! Sphere-like shapes: faceted globe, ringed planet, spiral galaxy.

use glam::{Quat, Vec3};
use morphos_core::constants::SPHERE_BASE_RADIUS;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::sampling::{in_ball, symmetric};

/// Radius added on the globe's grid lines.
const GLOBE_RIDGE: f32 = 0.3;

/// Angular frequency of the globe's grid-line pattern.
const GLOBE_GRID_FREQ: f32 = 10.0;

const PLANET_RADIUS: f32 = 6.0;
/// Share of particles forming the planet body; the rest form the ring.
const PLANET_FRACTION: f32 = 0.4;
const RING_INNER: f32 = 9.0;
const RING_OUTER: f32 = 15.0;
const RING_THICKNESS: f32 = 0.15;
/// Ring tilt about the X axis, in radians.
const RING_TILT: f32 = 0.45;

const GALAXY_ARMS: u32 = 3;
const GALAXY_RADIUS: f32 = 15.0;
/// Angle swept by each arm from core to rim.
const GALAXY_TWIST: f32 = 5.0;
const GALAXY_ARM_SPREAD: f32 = 2.0;
const GALAXY_DISK_THICKNESS: f32 = 2.0;

/// Fibonacci-spiral globe with raised grid lines.
///
/// `phi = acos(-1 + 2i/N)`, `theta = sqrt(N·π)·phi`; radius is raised where
/// either `floor(phi·10)` or `floor(theta·10)` is even.
pub fn earth<R: Rng + ?Sized>(count: usize, _rng: &mut R) -> Vec<Vec3> {
    let n = count as f32;
    let spiral = (n * PI).sqrt();

    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).clamp(-1.0, 1.0).acos();
            let theta = spiral * phi;

            let lat_band = (phi * GLOBE_GRID_FREQ).floor() as i64;
            let lon_band = (theta * GLOBE_GRID_FREQ).floor() as i64;
            let on_grid_line = lat_band.rem_euclid(2) == 0 || lon_band.rem_euclid(2) == 0;
            let r = if on_grid_line {
                SPHERE_BASE_RADIUS + GLOBE_RIDGE
            } else {
                SPHERE_BASE_RADIUS
            };

            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.cos(),
                r * phi.sin() * theta.sin(),
            )
        })
        .collect()
}

/// Solid planet (first 40% of indices) plus a tilted flat ring.
pub fn saturn<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let planet_count = (count as f32 * PLANET_FRACTION) as usize;
    let tilt = Quat::from_rotation_x(RING_TILT);

    (0..count)
        .map(|i| {
            if i < planet_count {
                in_ball(rng, PLANET_RADIUS)
            } else {
                let radius = rng.gen_range(RING_INNER..RING_OUTER);
                let angle = rng.gen_range(0.0..TAU);
                let flat = Vec3::new(
                    radius * angle.cos(),
                    symmetric(rng, RING_THICKNESS),
                    radius * angle.sin(),
                );
                tilt * flat
            }
        })
        .collect()
}

/// Spiral arms: radius grows with `t`, the disk thins and arms widen toward the rim.
pub fn galaxy<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let arm_step = TAU / GALAXY_ARMS as f32;

    (0..count)
        .map(|_| {
            let t: f32 = rng.gen();
            let arm = rng.gen_range(0..GALAXY_ARMS);
            let angle = t * GALAXY_TWIST + arm as f32 * arm_step;
            let radius = t * GALAXY_RADIUS;
            let spread = GALAXY_ARM_SPREAD * t;

            Vec3::new(
                angle.cos() * radius + symmetric(rng, spread),
                symmetric(rng, GALAXY_DISK_THICKNESS * (1.0 - t)),
                angle.sin() * radius + symmetric(rng, spread),
            )
        })
        .collect()
}
