//! Tile grids and tile colors
//!
//! This module contains the pattern data model:
//! - Two-valued tile colors and their catalog encoding
//! - Rectangular grids with positional access and difference counting

/// Rectangular tile grids and difference counting
pub mod grid;
/// Tile colors and character encoding
pub mod tiles;

pub use grid::{Grid, count_differences};
pub use tiles::TileColor;
