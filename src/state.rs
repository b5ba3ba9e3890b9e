//! Core lattice structure and index helpers.

use crate::automaton::neighborhood::{Offset, NEIGHBOR_COUNT};
use crate::automaton::rule::Rule;

/// A fixed-size 3D lattice of binary cells.
///
/// Cells are stored densely in two equally sized buffers: `cells` holds the
/// current generation and `next` is scratch space for stepping. Neither is
/// reachable from outside the crate; all access goes through accessors.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) depth: i32,
    pub(crate) cells: Vec<u8>, // 0 = dead, 1 = alive
    pub(crate) next: Vec<u8>,
    pub(crate) generation: u64,
    pub(crate) live_count: usize,
    pub(crate) neighbors: [Offset; NEIGHBOR_COUNT],
    pub(crate) rule: Rule,
}

impl Lattice {
    /// Linear index of a coordinate; callers check [`Lattice::in_bounds`] first.
    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32, z: i32) -> usize {
        z as usize * self.height as usize * self.width as usize
            + y as usize * self.width as usize
            + x as usize
    }

    /// Linear index of a coordinate, or `None` outside the lattice.
    pub fn index_of(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        self.in_bounds(x, y, z).then(|| self.index(x, y, z))
    }

    /// Check if coordinates are within lattice bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    /// Coordinates of the cell at a linear z, y, x index. Returns `None` past
    /// the end of the lattice.
    pub fn coords_of(&self, index: usize) -> Option<[i32; 3]> {
        (index < self.cells.len()).then(|| self.coords_unchecked(index))
    }

    #[inline]
    pub(crate) fn coords_unchecked(&self, index: usize) -> [i32; 3] {
        let width = self.width as usize;
        let plane = width * self.height as usize;
        [
            (index % width) as i32,
            (index % plane / width) as i32,
            (index / plane) as i32,
        ]
    }

    /// Dimensions as `[sx, sy, sz]`.
    pub fn size(&self) -> [i32; 3] {
        [self.width, self.height, self.depth]
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells, kept in sync by every mutating operation.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Replace the birth/survival rule. Cell state and generation are kept.
    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }
}
