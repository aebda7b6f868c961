//! Procedural target-shape library.
//!
//! Every generator is a pure function of the particle count and an RNG. A
//! [`ShapeLibrary`] runs each requested generator once at startup and keeps the
//! resulting fields immutable for the rest of the process.

pub mod celestial;
pub mod geometric;
pub mod organic;
mod sampling;

use std::time::Instant;

use glam::Vec3;
use morphos_core::shape::{ShapeKind, ALL_SHAPES};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio multiplier used to decorrelate per-shape seeds.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Immutable per-particle target positions for one shape.
#[derive(Debug, Clone)]
pub struct ShapeField {
    kind: ShapeKind,
    points: Box<[Vec3]>,
}

impl ShapeField {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }
}

/// Run the generator for `kind`. Always returns exactly `count` points.
pub fn generate<R: Rng + ?Sized>(kind: ShapeKind, count: usize, rng: &mut R) -> ShapeField {
    let points = match kind {
        ShapeKind::Earth => celestial::earth(count, rng),
        ShapeKind::Heart => organic::heart(count, rng),
        ShapeKind::Flower => organic::flower(count, rng),
        ShapeKind::Saturn => celestial::saturn(count, rng),
        ShapeKind::Buddha => organic::buddha(count, rng),
        ShapeKind::Galaxy => celestial::galaxy(count, rng),
        ShapeKind::Dna => geometric::dna(count, rng),
        ShapeKind::Cube => geometric::cube(count, rng),
        ShapeKind::Mobius => geometric::mobius(count, rng),
    };
    debug_assert_eq!(points.len(), count);
    ShapeField {
        kind,
        points: points.into_boxed_slice(),
    }
}

/// Seed for one shape's private RNG stream.
fn shape_seed(seed: u64, kind: ShapeKind) -> u64 {
    seed ^ (kind.index() as u64 + 1).wrapping_mul(SEED_SPREAD)
}

/// All pre-generated shape fields, indexed by [`ShapeKind`].
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    fields: [Option<ShapeField>; ALL_SHAPES.len()],
    particle_count: usize,
}

impl ShapeLibrary {
    /// Generate every listed shape once. Duplicates in `shapes` are ignored.
    pub fn generate(shapes: &[ShapeKind], particle_count: usize, seed: u64) -> Self {
        let start = Instant::now();
        let mut fields: [Option<ShapeField>; ALL_SHAPES.len()] = Default::default();

        for &kind in shapes {
            let slot = &mut fields[kind.index()];
            if slot.is_some() {
                continue;
            }
            let shape_start = Instant::now();
            let mut rng = SmallRng::seed_from_u64(shape_seed(seed, kind));
            *slot = Some(generate(kind, particle_count, &mut rng));
            log::debug!(
                "Generated shape '{}' ({} points) in {:.2}ms",
                kind,
                particle_count,
                shape_start.elapsed().as_secs_f64() * 1000.0
            );
        }

        let library = Self {
            fields,
            particle_count,
        };
        log::info!(
            "Shape library ready: {} shapes x {} particles in {:.2}ms",
            library.kinds().count(),
            particle_count,
            start.elapsed().as_secs_f64() * 1000.0
        );
        library
    }

    pub fn get(&self, kind: ShapeKind) -> Option<&ShapeField> {
        self.fields[kind.index()].as_ref()
    }

    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.fields[kind.index()].is_some()
    }

    /// Generated shapes in enum order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        ALL_SHAPES.iter().copied().filter(|&k| self.contains(k))
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }
}
