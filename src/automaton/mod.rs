//! Core automaton logic and lattice operations.
//!
//! This module contains the logic for reading and writing cells, stepping the
//! automaton, previewing the next generation, and converting lattices to and
//! from sparse payloads. The FFI layer in `ffi/` calls into it.

pub mod codec;
pub mod forecast;
pub mod grid;
pub mod neighborhood;
pub mod rule;
pub mod stepping;

pub use codec::{
    decode, encode, from_json, paste_live_cells, to_json, to_json_pretty, Payload, RulePayload,
};
pub use forecast::{forecast, Fate, Forecast};
pub use neighborhood::{moore_offsets, Offset, NEIGHBOR_COUNT};
pub use rule::{Rule, MAX_NEIGHBORS};
pub use stepping::step_automaton;
