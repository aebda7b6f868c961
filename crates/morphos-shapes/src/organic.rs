//! Curved figurative shapes: heart, flower, seated statue.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::sampling::{in_ball, symmetric};

const HEART_SCALE: f32 = 0.6;
/// Vertical shift that centres the heart curve on the origin.
const HEART_Y_SHIFT: f32 = 6.0;
/// Lowest point of the raw curve is at y = -17.
const HEART_TIP_DEPTH: f32 = 17.0;
const HEART_THICKNESS: f32 = 4.0;
const HEART_MIN_TAPER: f32 = 0.15;

const FLOWER_PETALS: f32 = 6.0;
const FLOWER_PETAL_DEPTH: f32 = 3.0;
const FLOWER_BASE_RADIUS: f32 = 6.0;
const FLOWER_FLATTEN: f32 = 0.5;
const FLOWER_JITTER: f32 = 0.4;

/// One sphere of the statue composite.
struct BodyPart {
    center: Vec3,
    radius: f32,
    weight: f32,
}

/// Weights sum to 1.0; rounding leftovers go to the base ring.
const STATUE_PARTS: [BodyPart; 6] = [
    // torso
    BodyPart { center: Vec3::new(0.0, 0.0, 0.0), radius: 5.0, weight: 0.35 },
    // head
    BodyPart { center: Vec3::new(0.0, 7.0, 0.0), radius: 3.0, weight: 0.13 },
    BodyPart { center: Vec3::new(-5.5, 0.5, 1.0), radius: 1.8, weight: 0.09 },
    BodyPart { center: Vec3::new(5.5, 0.5, 1.0), radius: 1.8, weight: 0.09 },
    // crossed legs
    BodyPart { center: Vec3::new(0.0, -6.0, 1.0), radius: 6.0, weight: 0.32 },
    // topknot
    BodyPart { center: Vec3::new(0.0, 10.5, 0.0), radius: 1.2, weight: 0.02 },
];

const STATUE_RING_RADIUS: f32 = 11.0;
const STATUE_RING_Y: f32 = -9.0;

/// Classic parametric heart in the XY plane with a tapered Z thickness.
pub fn heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let t = rng.gen_range(0.0..TAU);
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();

            let taper = (1.0 - y.abs() / HEART_TIP_DEPTH).max(HEART_MIN_TAPER);
            let z = symmetric(rng, HEART_THICKNESS * taper);

            Vec3::new(x, y + HEART_Y_SHIFT, z) * HEART_SCALE
        })
        .collect()
}

/// Rose-curve petals `r = cos(6u)·3 + 6` swept over a quarter polar angle.
pub fn flower<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen_range(0.0..TAU);
            let v = rng.gen_range(0.0..FRAC_PI_2);
            let r = (FLOWER_PETALS * u).cos() * FLOWER_PETAL_DEPTH + FLOWER_BASE_RADIUS;

            Vec3::new(
                r * v.sin() * u.cos(),
                r * v.cos() * FLOWER_FLATTEN + symmetric(rng, FLOWER_JITTER),
                r * v.sin() * u.sin(),
            )
        })
        .collect()
}

/// Seated figure built from weighted spheres.
pub fn buddha<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);

    for part in &STATUE_PARTS {
        let budget = (count as f32 * part.weight) as usize;
        let budget = budget.min(count - points.len());
        for _ in 0..budget {
            points.push(part.center + in_ball(rng, part.radius));
        }
    }

    while points.len() < count {
        let angle = rng.gen_range(0.0..TAU);
        points.push(Vec3::new(
            STATUE_RING_RADIUS * angle.cos(),
            STATUE_RING_Y,
            STATUE_RING_RADIUS * angle.sin(),
        ));
    }

    points
}
