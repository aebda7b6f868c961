//! Parametric and lattice shapes: double helix, nested cube shells, Möbius strip.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::sampling::symmetric;

const HELIX_RADIUS: f32 = 4.0;
const HELIX_HEIGHT: f32 = 24.0;
/// Radians of twist per unit height.
const HELIX_TWIST: f32 = 0.5;
/// Share of particles on the two strands; the rest form rungs.
const HELIX_STRAND_FRACTION: f32 = 0.8;
const HELIX_RUNG_SPACING: f32 = 1.2;
const HELIX_STRAND_JITTER: f32 = 0.2;

/// (half-size, selection weight) for each nested shell, inner to outer.
const CUBE_SHELLS: [(f32, f32); 3] = [(4.0, 0.2), (7.0, 0.3), (10.0, 0.5)];

const MOBIUS_RADIUS: f32 = 9.0;
const MOBIUS_HALF_WIDTH: f32 = 3.0;

fn strand_point(height: f32, phase: f32) -> Vec3 {
    let theta = height * HELIX_TWIST + phase;
    Vec3::new(HELIX_RADIUS * theta.cos(), height, HELIX_RADIUS * theta.sin())
}

/// Two opposite-phase helices plus rungs at quantized heights.
pub fn dna<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let strand_count = (count as f32 * HELIX_STRAND_FRACTION) as usize;
    let half = HELIX_HEIGHT * 0.5;

    (0..count)
        .map(|i| {
            if i < strand_count {
                let height = rng.gen_range(-half..half);
                let phase = if i % 2 == 0 { 0.0 } else { PI };
                let jitter = Vec3::new(
                    symmetric(rng, HELIX_STRAND_JITTER),
                    symmetric(rng, HELIX_STRAND_JITTER),
                    symmetric(rng, HELIX_STRAND_JITTER),
                );
                strand_point(height, phase) + jitter
            } else {
                let raw = rng.gen_range(-half..half);
                let height = ((raw / HELIX_RUNG_SPACING).round() * HELIX_RUNG_SPACING)
                    .clamp(-half, half);
                let s: f32 = rng.gen();
                strand_point(height, 0.0).lerp(strand_point(height, PI), s)
            }
        })
        .collect()
}

/// Hollow nested cube shells: one random axis pinned to a face.
pub fn cube<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let pick: f32 = rng.gen();
            let mut acc = 0.0;
            let mut half = CUBE_SHELLS[CUBE_SHELLS.len() - 1].0;
            for &(size, weight) in &CUBE_SHELLS {
                acc += weight;
                if pick < acc {
                    half = size;
                    break;
                }
            }

            let mut p = Vec3::new(
                symmetric(rng, half),
                symmetric(rng, half),
                symmetric(rng, half),
            );
            let face = if rng.gen::<bool>() { half } else { -half };
            match rng.gen_range(0..3) {
                0 => p.x = face,
                1 => p.y = face,
                _ => p.z = face,
            }
            p
        })
        .collect()
}

/// Standard Möbius parametrization with the `u/2` half-twist.
pub fn mobius<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen_range(0.0..TAU);
            let v = symmetric(rng, MOBIUS_HALF_WIDTH);
            let half = u * 0.5;
            let r = MOBIUS_RADIUS + v * half.cos();
            Vec3::new(r * u.cos(), r * u.sin(), v * half.sin())
        })
        .collect()
}
