//! Uniform spatial hash over a fixed 60³ domain, stored as head/next index arrays.

use glam::Vec3;
use morphos_core::constants::{CELL_SIZE, EMPTY_SLOT, GRID_CELLS, GRID_DIM, GRID_OFFSET};
use morphos_core::types::ParticleIndex;

/// Per-cell singly linked lists of particle indices.
///
/// `head[cell]` is the most recently inserted particle in that cell,
/// `next[particle]` the one inserted before it. Both use [`EMPTY_SLOT`] as
/// the terminator. Rebuilt from scratch every frame.
#[derive(Debug, Clone)]
pub struct SpatialHashGrid {
    head: Vec<u32>,
    next: Vec<u32>,
    inserted: usize,
}

impl SpatialHashGrid {
    /// Allocate for `particle_count` particles. No per-frame allocation after this.
    pub fn new(particle_count: usize) -> Self {
        Self {
            head: vec![EMPTY_SLOT; GRID_CELLS],
            next: vec![EMPTY_SLOT; particle_count],
            inserted: 0,
        }
    }

    /// Cell coordinates for a world position, or None outside the domain.
    pub fn cell_coords(position: Vec3) -> Option<[u32; 3]> {
        let scaled = (position + Vec3::splat(GRID_OFFSET)) / CELL_SIZE;
        if !scaled.is_finite() {
            return None;
        }
        let c = scaled.floor();
        let dim = GRID_DIM as f32;
        if c.cmplt(Vec3::ZERO).any() || c.cmpge(Vec3::splat(dim)).any() {
            return None;
        }
        Some([c.x as u32, c.y as u32, c.z as u32])
    }

    /// Flat cell index for a world position, or None outside the domain.
    pub fn cell_index(position: Vec3) -> Option<usize> {
        Self::cell_coords(position).map(|[x, y, z]| {
            x as usize + y as usize * GRID_DIM as usize + z as usize * (GRID_DIM * GRID_DIM) as usize
        })
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.head.fill(EMPTY_SLOT);
        self.inserted = 0;
    }

    /// Prepend `index` to its cell's list. Returns false (and skips the
    /// particle) when the position is outside the domain.
    pub fn insert(&mut self, index: ParticleIndex, position: Vec3) -> bool {
        let Some(cell) = Self::cell_index(position) else {
            return false;
        };
        let Some(slot) = self.next.get_mut(index as usize) else {
            return false;
        };
        *slot = self.head[cell];
        self.head[cell] = index;
        self.inserted += 1;
        true
    }

    /// Visit at most `max_visits` particles in the cell containing `position`.
    pub fn for_each_neighbor<F>(&self, position: Vec3, max_visits: usize, mut visit: F)
    where
        F: FnMut(ParticleIndex),
    {
        let Some(cell) = Self::cell_index(position) else {
            return;
        };
        let mut current = self.head[cell];
        let mut visits = 0;
        while current != EMPTY_SLOT && visits < max_visits {
            visit(current);
            visits += 1;
            current = self.next[current as usize];
        }
    }

    /// Every particle in one cell, without the visit cap.
    pub fn cell_members(&self, cell: usize) -> CellIter<'_> {
        CellIter {
            grid: self,
            current: self.head.get(cell).copied().unwrap_or(EMPTY_SLOT),
        }
    }

    /// Particles inserted since the last `clear`.
    pub fn inserted(&self) -> usize {
        self.inserted
    }
}

/// Uncapped walk over one cell's linked list.
pub struct CellIter<'a> {
    grid: &'a SpatialHashGrid,
    current: u32,
}

impl Iterator for CellIter<'_> {
    type Item = ParticleIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == EMPTY_SLOT {
            return None;
        }
        let index = self.current;
        self.current = self.grid.next[index as usize];
        Some(index)
    }
}
