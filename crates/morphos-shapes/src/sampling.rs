//! Random sampling primitives shared by the shape generators.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform unit direction: inverse-cosine latitude, uniform longitude.
pub(crate) fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let theta = rng.gen_range(0.0..TAU);
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

/// Uniform point inside a ball of the given radius.
pub(crate) fn in_ball<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    // Cube root for uniform volume distribution
    let r = radius * rng.gen::<f32>().cbrt();
    unit_direction(rng) * r
}

/// Symmetric uniform value in `[-half, half)`.
pub(crate) fn symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    (rng.gen::<f32>() * 2.0 - 1.0) * half
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_unit_direction_is_unit() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..500 {
            let d = unit_direction(&mut rng);
            assert!((d.length() - 1.0).abs() < 1e-4, "got {}", d.length());
        }
    }

    #[test]
    fn test_in_ball_bounds() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..500 {
            assert!(in_ball(&mut rng, 3.0).length() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_symmetric_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let v = symmetric(&mut rng, 2.0);
            assert!((-2.0..2.0).contains(&v));
        }
    }
}
