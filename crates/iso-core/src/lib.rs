//! iso-core: procedural isometric dungeon layouts
//!
//! Generates a tile-based dungeon on a bounded 2D grid: a reserved central
//! region plus non-overlapping rooms of randomized shape, classified per tile
//! from cell adjacency and composed into ordered full-map layers.
//!
//! This crate contains all generation logic with no I/O dependencies.
//! It is designed to be pure and testable; rendering is a consumer concern.

pub mod level;

mod consts;
mod rng;

pub use consts::*;
pub use rng::LevelRng;
