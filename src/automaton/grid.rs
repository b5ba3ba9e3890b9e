//! Lattice construction and cell access.

use log::debug;
use rand::Rng;

use super::neighborhood::moore_offsets;
use super::rule::Rule;
use crate::error::{LatticeError, Result};
use crate::state::Lattice;

impl Lattice {
    /// Create an all-dead lattice with the default rule.
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self> {
        Self::with_rule(width, height, depth, Rule::default())
    }

    /// Create an all-dead lattice with the given rule.
    pub fn with_rule(width: i32, height: i32, depth: i32, rule: Rule) -> Result<Self> {
        let size = volume_of(width, height, depth)?;
        debug!("creating {width}x{height}x{depth} lattice ({size} cells), rule {rule}");

        Ok(Self {
            width,
            height,
            depth,
            cells: zeroed(size, [width, height, depth])?,
            next: zeroed(size, [width, height, depth])?,
            generation: 0,
            live_count: 0,
            neighbors: moore_offsets(),
            rule,
        })
    }

    /// Read a cell. Out-of-range coordinates read as dead.
    pub fn get(&self, x: i32, y: i32, z: i32) -> bool {
        self.in_bounds(x, y, z) && self.cells[self.index(x, y, z)] != 0
    }

    /// Write a cell. Out-of-range coordinates are silently ignored.
    pub fn set(&mut self, x: i32, y: i32, z: i32, alive: bool) {
        if !self.in_bounds(x, y, z) {
            return;
        }

        let idx = self.index(x, y, z);
        let was_alive = self.cells[idx] != 0;
        self.cells[idx] = u8::from(alive);

        match (was_alive, alive) {
            (false, true) => self.live_count += 1,
            (true, false) => self.live_count -= 1,
            _ => {}
        }
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.generation = 0;
        self.live_count = 0;
    }

    /// Fill the lattice at random using the thread-local RNG.
    ///
    /// Each cell is independently alive with probability `density`.
    pub fn randomize(&mut self, density: f64) -> Result<()> {
        self.randomize_with(&mut rand::rng(), density)
    }

    /// Like [`Lattice::randomize`], drawing from the given RNG.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<()> {
        check_density(density)?;

        let mut count = 0;
        for cell in &mut self.cells {
            let alive = rng.random_bool(density);
            *cell = u8::from(alive);
            count += usize::from(alive);
        }

        self.generation = 0;
        self.live_count = count;
        debug!("randomized at density {density}: {count} live cells");
        Ok(())
    }

    /// Replace this lattice with an empty one of a new size, keeping the rule.
    ///
    /// On error the current lattice is left as it was.
    pub fn resize(&mut self, width: i32, height: i32, depth: i32) -> Result<()> {
        *self = Self::with_rule(width, height, depth, self.rule)?;
        Ok(())
    }

    /// Live cell coordinates in z, y, x order.
    pub fn live_cells(&self) -> impl Iterator<Item = [i32; 3]> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != 0)
            .map(move |(idx, _)| self.coords_unchecked(idx))
    }

    /// Move a live cell to another position.
    ///
    /// Returns false and changes nothing if `from` is not alive or `to` is
    /// outside the lattice. A dead `from` never brings `to` to life, so this
    /// is not the same as clearing one cell and setting another.
    pub fn move_cell(&mut self, from: [i32; 3], to: [i32; 3]) -> bool {
        let [fx, fy, fz] = from;
        let [tx, ty, tz] = to;
        if !self.get(fx, fy, fz) || !self.in_bounds(tx, ty, tz) {
            return false;
        }

        self.set(fx, fy, fz, false);
        self.set(tx, ty, tz, true);
        true
    }
}

/// Validate dimensions and compute the cell count.
fn volume_of(width: i32, height: i32, depth: i32) -> Result<usize> {
    if width <= 0 || height <= 0 || depth <= 0 {
        return Err(LatticeError::Config(format!(
            "lattice dimensions must be positive, got {width}x{height}x{depth}"
        )));
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|plane| plane.checked_mul(depth as usize))
        .ok_or_else(|| {
            LatticeError::Config(format!(
                "lattice of {width}x{height}x{depth} cells is too large"
            ))
        })
}

/// Allocate a dead cell buffer, reporting allocation failure as a
/// configuration error.
fn zeroed(size: usize, [width, height, depth]: [i32; 3]) -> Result<Vec<u8>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).map_err(|err| {
        LatticeError::Config(format!(
            "cannot allocate a {width}x{height}x{depth} lattice: {err}"
        ))
    })?;
    cells.resize(size, 0);
    Ok(cells)
}

pub(crate) fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LatticeError::Config(format!(
            "density {density} is outside 0..=1"
        )))
    }
}
