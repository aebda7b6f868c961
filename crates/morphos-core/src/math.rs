use glam::{Vec2, Vec3};

/// Squared length below which a vector is treated as degenerate.
const DEGENERATE_LEN_SQ: f32 = 1e-12;

/// A pointer ray in world space, produced externally by camera unprojection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Intersection with the z=0 interaction plane.
    ///
    /// Returns None for rays parallel to the plane, rays pointing away from it,
    /// or non-finite inputs.
    pub fn intersect_z_plane(&self) -> Option<Vec3> {
        if !self.origin.is_finite() || !self.direction.is_finite() {
            return None;
        }
        if self.direction.z.abs() < 1e-6 {
            return None;
        }
        let t = -self.origin.z / self.direction.z;
        if t < 0.0 {
            return None;
        }
        let mut point = self.origin + self.direction * t;
        point.z = 0.0;
        Some(point)
    }

    /// Ray–sphere hit test against a sphere centered at the origin.
    ///
    /// Uses the discriminant of `|o + t·d|² = r²` with a normalized direction,
    /// i.e. `b² - 4c > 0`. Degenerate directions count as a miss.
    pub fn hits_origin_sphere(&self, radius: f32) -> bool {
        let Some(dir) = normalize_or_none(self.direction) else {
            return false;
        };
        if !self.origin.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return false;
        }
        let b = 2.0 * dir.dot(self.origin);
        let c = self.origin.dot(self.origin) - radius * radius;
        b * b - 4.0 * c > 0.0
    }
}

/// Normalize a vector, returning None when it is zero-length or non-finite.
pub fn normalize_or_none(v: Vec3) -> Option<Vec3> {
    let len_sq = v.length_squared();
    if !len_sq.is_finite() || len_sq < DEGENERATE_LEN_SQ {
        return None;
    }
    Some(v / len_sq.sqrt())
}

/// Exponential smoothing step: move `current` toward `target` by `factor`.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// 2D variant of [`approach`].
pub fn approach_vec2(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}
