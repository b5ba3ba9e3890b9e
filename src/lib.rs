//! Voxel Life - 3D Game of Life engine
//!
//! A fixed-size lattice of binary cells advanced one generation at a time
//! under a birth/survival rule (B6/S5,6 by default), with a Moore
//! neighborhood of 26 cells and a dead border. Lattices convert to and from
//! a sparse JSON payload listing the live cells.
//!
//! The engine is usable directly from Rust, and the `ffi` module exports a
//! C ABI for hosts such as renderers driven from LuaJIT.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
mod state;


pub use automaton::{Fate, Forecast, Payload, Rule};
pub use config::LatticeConfig;
pub use error::{LatticeError, Result};
pub use state::Lattice;
