//! Engine configuration.
//!
//! A host can describe the starting lattice as JSON, e.g.
//! `{"size": [32, 32, 32], "rule": "B5/S4,5", "density": 0.15, "randomize": true}`.
//! Every field is optional.

use serde::{Deserialize, Serialize};

use crate::automaton::grid::check_density;
use crate::automaton::rule::Rule;
use crate::error::{LatticeError, Result};
use crate::state::Lattice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatticeConfig {
    /// Lattice dimensions `[sx, sy, sz]`.
    pub size: [i32; 3],
    /// Rule in `B/S` notation.
    pub rule: Rule,
    /// Probability of a cell starting alive when `randomize` is set.
    pub density: f64,
    /// Seed the lattice at random instead of starting empty.
    pub randomize: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            size: [20, 20, 20],
            rule: Rule::default(),
            density: 0.2,
            randomize: false,
        }
    }
}

impl LatticeConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| LatticeError::Config(err.to_string()))
    }

    /// Validate the configuration and build the starting lattice.
    pub fn build(&self) -> Result<Lattice> {
        check_density(self.density)?;

        let [width, height, depth] = self.size;
        let mut lattice = Lattice::with_rule(width, height, depth, self.rule)?;
        if self.randomize {
            lattice.randomize(self.density)?;
        }
        Ok(lattice)
    }
}
