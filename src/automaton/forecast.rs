//! Preview of the next generation, per cell.
//!
//! Used by views to colour cells by what is about to happen to them. The
//! lattice is only read; z-slices are classified in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::state::Lattice;

/// What happens to a cell on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fate {
    Survive,
    Die,
    Born,
}

/// Cells grouped by fate, each list in z, y, x order.
///
/// Dead cells that stay dead are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub survive: Vec<[i32; 3]>,
    pub die: Vec<[i32; 3]>,
    pub born: Vec<[i32; 3]>,
}

impl Forecast {
    /// Cells alive after the next step.
    pub fn next_live(&self) -> impl Iterator<Item = [i32; 3]> + '_ {
        self.survive.iter().chain(&self.born).copied()
    }
}

impl Lattice {
    /// Fate of a single cell, or `None` for a dead cell that stays dead or an
    /// out-of-range coordinate.
    pub fn fate_of(&self, x: i32, y: i32, z: i32) -> Option<Fate> {
        if !self.in_bounds(x, y, z) {
            return None;
        }

        let neighbors = self.count_live_neighbors(x, y, z);
        if self.get(x, y, z) {
            Some(if self.rule.survives_on(neighbors) {
                Fate::Survive
            } else {
                Fate::Die
            })
        } else {
            self.rule.births_on(neighbors).then_some(Fate::Born)
        }
    }
}

/// Classify every cell of the lattice by its fate on the next step.
pub fn forecast(lattice: &Lattice) -> Forecast {
    let [width, height, depth] = lattice.size();

    let fates: Vec<([i32; 3], Fate)> = (0..depth)
        .into_par_iter()
        .flat_map_iter(move |z| {
            (0..height)
                .flat_map(move |y| (0..width).map(move |x| [x, y, z]))
                .filter_map(move |[x, y, z]| {
                    lattice.fate_of(x, y, z).map(|fate| ([x, y, z], fate))
                })
        })
        .collect();

    let mut forecast = Forecast::default();
    for (cell, fate) in fates {
        match fate {
            Fate::Survive => forecast.survive.push(cell),
            Fate::Die => forecast.die.push(cell),
            Fate::Born => forecast.born.push(cell),
        }
    }
    forecast
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fates_of_small_pattern() {
        let mut lattice = Lattice::new(5, 5, 5).unwrap();
        for (x, y, z) in [(1, 2, 2), (3, 2, 2), (2, 1, 2), (2, 3, 2), (2, 2, 1), (2, 2, 3)] {
            lattice.set(x, y, z, true);
        }

        assert_eq!(lattice.fate_of(2, 2, 2), Some(Fate::Born));
        assert_eq!(lattice.fate_of(1, 2, 2), Some(Fate::Die));
        assert_eq!(lattice.fate_of(0, 0, 0), None);
        assert_eq!(lattice.fate_of(-1, 0, 0), None);

        let forecast = forecast(&lattice);
        assert_eq!(forecast.born, vec![[2, 2, 2]]);
        assert_eq!(forecast.die.len(), 6);
        assert!(forecast.survive.is_empty());
    }

    #[test]
    fn test_forecast_matches_step() {
        let mut lattice = Lattice::new(10, 9, 8).unwrap();
        lattice.randomize(0.3).unwrap();

        let forecast = forecast(&lattice);
        let predicted: HashSet<_> = forecast.next_live().collect();
        let dying: HashSet<_> = forecast.die.iter().copied().collect();
        assert_eq!(forecast.survive.len() + forecast.die.len(), lattice.live_count());

        lattice.step();
        let actual: HashSet<_> = lattice.live_cells().collect();
        assert_eq!(predicted, actual);
        assert!(dying.is_disjoint(&actual));
    }

    #[test]
    fn test_forecast_order() {
        let mut lattice = Lattice::new(4, 4, 4).unwrap();
        lattice.randomize(1.0).unwrap();

        let forecast = forecast(&lattice);
        let all: Vec<_> = forecast.survive.iter().chain(&forecast.die).copied().collect();
        assert_eq!(all.len(), 64);

        let mut sorted = forecast.die.clone();
        sorted.sort_by_key(|&[x, y, z]| (z, y, x));
        assert_eq!(sorted, forecast.die);
    }

    #[test]
    fn test_forecast_does_not_mutate() {
        let mut lattice = Lattice::new(6, 6, 6).unwrap();
        lattice.randomize(0.4).unwrap();
        let before: Vec<_> = lattice.live_cells().collect();

        let _ = forecast(&lattice);
        assert_eq!(lattice.live_cells().collect::<Vec<_>>(), before);
        assert_eq!(lattice.generation(), 0);
    }

    #[test]
    fn test_forecast_serializes() {
        let mut lattice = Lattice::new(3, 3, 3).unwrap();
        lattice.set(1, 1, 1, true);

        let json = serde_json::to_string(&forecast(&lattice)).unwrap();
        assert_eq!(json, r#"{"survive":[],"die":[[1,1,1]],"born":[]}"#);
    }
}
