//! Moore neighborhood (26 neighbors) with an absorbing border.
//!
//! Neighbors outside the lattice count as dead. There is no wraparound.

use crate::state::Lattice;

/// Number of cells adjacent to a cell in 3D, diagonals included.
pub const NEIGHBOR_COUNT: usize = 26;

/// Relative position of a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

/// All 26 offsets in `{-1, 0, 1}^3` except the origin, in dz, dy, dx order.
pub fn moore_offsets() -> [Offset; NEIGHBOR_COUNT] {
    let mut offsets = [Offset { dx: 0, dy: 0, dz: 0 }; NEIGHBOR_COUNT];
    let mut i = 0;

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                offsets[i] = Offset { dx, dy, dz };
                i += 1;
            }
        }
    }

    offsets
}

impl Lattice {
    /// Count alive neighbors of `(x, y, z)`. Always in `0..=26`.
    pub fn count_live_neighbors(&self, x: i32, y: i32, z: i32) -> u8 {
        self.neighbors
            .iter()
            .filter(|o| {
                match (x.checked_add(o.dx), y.checked_add(o.dy), z.checked_add(o.dz)) {
                    (Some(nx), Some(ny), Some(nz)) => self.get(nx, ny, nz),
                    _ => false,
                }
            })
            .count() as u8
    }
}
