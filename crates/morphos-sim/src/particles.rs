use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Position and velocity storage for N fungible particles.
///
/// Length is fixed at construction; particles are never created or destroyed.
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl ParticleBuffer {
    /// All particles at `origin`, at rest.
    pub fn at(count: usize, origin: Vec3) -> Self {
        Self {
            positions: vec![origin; count],
            velocities: vec![Vec3::ZERO; count],
        }
    }

    /// Particles scattered uniformly in a cube of half-size `spread`, at rest.
    pub fn scattered(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                if spread > 0.0 {
                    Vec3::new(
                        rng.gen_range(-spread..spread),
                        rng.gen_range(-spread..spread),
                        rng.gen_range(-spread..spread),
                    )
                } else {
                    Vec3::ZERO
                }
            })
            .collect();
        Self {
            positions,
            velocities: vec![Vec3::ZERO; count],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Split borrow for the integrator's write phase.
    pub(crate) fn split_mut(&mut self) -> (&mut [Vec3], &mut [Vec3]) {
        (&mut self.positions, &mut self.velocities)
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Flat `[x0, y0, z0, x1, ...]` view over the positions, no copy.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Move every particle to `position` and zero its velocity.
    pub fn reset(&mut self, position: Vec3) {
        self.positions.fill(position);
        self.velocities.fill(Vec3::ZERO);
    }
}
