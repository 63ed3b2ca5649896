//! Tile floor pattern planning: costs and operation lists for changing patterns
//!
//! Each floor holds named patterns of black and white tiles plus a price for
//! flipping a tile and for swapping two adjacent tiles. The library estimates
//! the minimum cost of changing one pattern into another and generates a
//! concrete ordered list of flips and swaps that performs the change.

#![forbid(unsafe_code)]

/// Cost estimation and instruction generation
pub mod algorithm;
/// Floors, patterns, and catalog loading
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Tile colors and rectangular grids
pub mod spatial;

pub use algorithm::{Instruction, Position, generate_instructions, minimum_cost_between};
pub use io::error::{FloorError, Result};
pub use spatial::{Grid, TileColor, count_differences};
