use glam::Vec3;

use crate::grid::SpatialHashGrid;

/// Collision resolver settings.
#[derive(Debug, Clone, Copy)]
pub struct CollisionParams {
    pub radius: f32,
    pub softening: f32,
    pub max_visits: usize,
}

/// Push overlapping same-cell pairs apart. Positions only; velocities are untouched.
///
/// Each particle checks at most `max_visits` entries of its own cell's list.
/// The correction `(radius - d)·softening` is split evenly between the pair.
/// Coincident pairs are skipped. Returns the number of corrections applied.
pub fn resolve_collisions(
    positions: &mut [Vec3],
    grid: &SpatialHashGrid,
    params: &CollisionParams,
) -> usize {
    let radius_sq = params.radius * params.radius;
    let mut corrections = 0;

    for i in 0..positions.len() {
        let query = positions[i];
        grid.for_each_neighbor(query, params.max_visits, |j| {
            let j = j as usize;
            if j == i || j >= positions.len() {
                return;
            }
            let delta = positions[i] - positions[j];
            let d_sq = delta.length_squared();
            if !(d_sq > 0.0 && d_sq < radius_sq) {
                return;
            }
            let d = d_sq.sqrt();
            let normal = delta / d;
            let correction = normal * ((params.radius - d) * 0.5 * params.softening);
            positions[i] += correction;
            positions[j] -= correction;
            corrections += 1;
        });
    }

    corrections
}
