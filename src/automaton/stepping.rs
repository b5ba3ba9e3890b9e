//! Cellular automaton stepping with the lattice's birth/survival rule.

use log::trace;

use crate::state::Lattice;

/// Step the automaton forward by one generation.
///
/// Every cell's next state is computed from the current buffer only and
/// written to the scratch buffer; the two buffers are swapped once the whole
/// sweep is done. The live count is accumulated in the same sweep.
pub fn step_automaton(lattice: &mut Lattice) {
    let mut next = std::mem::take(&mut lattice.next);
    let mut live = 0;
    let mut idx = 0;

    for z in 0..lattice.depth {
        for y in 0..lattice.height {
            for x in 0..lattice.width {
                let neighbors = lattice.count_live_neighbors(x, y, z);
                let alive = lattice
                    .rule
                    .next_state(lattice.cells[idx] != 0, neighbors);

                next[idx] = u8::from(alive);
                live += usize::from(alive);
                idx += 1;
            }
        }
    }

    lattice.next = std::mem::replace(&mut lattice.cells, next);
    lattice.live_count = live;
    lattice.generation += 1;
    trace!(
        "generation {} has {} live cells",
        lattice.generation,
        lattice.live_count
    );
}

impl Lattice {
    /// Advance one generation.
    pub fn step(&mut self) {
        step_automaton(self);
    }

    /// Advance `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            step_automaton(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::neighborhood::moore_offsets;
    use crate::automaton::rule::{Rule, MAX_NEIGHBORS};

    fn population(lattice: &Lattice) -> usize {
        lattice.cells.iter().filter(|&&c| c == 1).count()
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut lattice = Lattice::new(3, 3, 3).unwrap();
        lattice.set(1, 1, 1, true);

        step_automaton(&mut lattice);

        assert_eq!(lattice.generation(), 1);
        assert_eq!(lattice.live_count(), 0);
        assert_eq!(population(&lattice), 0);
    }

    #[test]
    fn test_six_face_neighbors_give_birth() {
        let mut lattice = Lattice::new(5, 5, 5).unwrap();
        for (x, y, z) in [(1, 2, 2), (3, 2, 2), (2, 1, 2), (2, 3, 2), (2, 2, 1), (2, 2, 3)] {
            lattice.set(x, y, z, true);
        }
        assert_eq!(lattice.count_live_neighbors(2, 2, 2), 6);

        step_automaton(&mut lattice);

        assert!(lattice.get(2, 2, 2));
        assert_eq!(lattice.live_count(), population(&lattice));
    }

    #[test]
    fn test_every_neighbor_count_against_rule() {
        // Center cell of a 5x5x5 lattice with exactly `n` live neighbors
        let offsets = moore_offsets();
        for rule in [Rule::default(), Rule::new(&[0, 13, 26], &[1, 2, 25]).unwrap()] {
            for alive in [false, true] {
                for n in 0..=MAX_NEIGHBORS {
                    let mut lattice = Lattice::with_rule(5, 5, 5, rule).unwrap();
                    lattice.set(2, 2, 2, alive);
                    for o in &offsets[..n as usize] {
                        lattice.set(2 + o.dx, 2 + o.dy, 2 + o.dz, true);
                    }
                    assert_eq!(lattice.count_live_neighbors(2, 2, 2), n);

                    lattice.step();

                    let expected = if alive {
                        rule.survive().contains(&n)
                    } else {
                        rule.birth().contains(&n)
                    };
                    assert_eq!(
                        lattice.get(2, 2, 2),
                        expected,
                        "rule {rule}, alive {alive}, {n} neighbors"
                    );
                }
            }
        }
    }

    #[test]
    fn test_simultaneous_update() {
        // Under B1/S1 a sequential in-place sweep would cascade along the row
        let rule = Rule::new(&[1], &[1]).unwrap();
        let mut lattice = Lattice::with_rule(6, 1, 1, rule).unwrap();
        lattice.set(0, 0, 0, true);

        lattice.step();

        let cells: Vec<_> = lattice.live_cells().collect();
        assert_eq!(cells, vec![[1, 0, 0]]);
    }

    #[test]
    fn test_buffers_are_reused() {
        let mut lattice = Lattice::new(4, 4, 4).unwrap();
        lattice.randomize(0.5).unwrap();
        let before = (lattice.cells.as_ptr(), lattice.next.as_ptr());

        lattice.step();
        assert_eq!((lattice.next.as_ptr(), lattice.cells.as_ptr()), before);

        lattice.step();
        assert_eq!((lattice.cells.as_ptr(), lattice.next.as_ptr()), before);
        assert_eq!(lattice.next.len(), lattice.volume());
    }

    #[test]
    fn test_generation_increments() {
        let mut lattice = Lattice::new(4, 4, 4).unwrap();

        assert_eq!(lattice.generation(), 0);
        lattice.step();
        assert_eq!(lattice.generation(), 1);
        lattice.steps(3);
        assert_eq!(lattice.generation(), 4);
    }

    #[test]
    fn test_live_count_tracks_random_runs() {
        let mut lattice = Lattice::new(12, 12, 12).unwrap();
        lattice.randomize(0.25).unwrap();

        for _ in 0..5 {
            lattice.step();
            assert_eq!(lattice.live_count(), population(&lattice));
        }
    }

    #[test]
    fn test_empty_lattice_stays_empty() {
        let mut lattice = Lattice::new(4, 4, 4).unwrap();

        lattice.step();
        assert!(lattice.cells.iter().all(|&c| c == 0));
        assert_eq!(lattice.generation(), 1);
    }
}
