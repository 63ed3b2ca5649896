//! Rectangular tile grids with positional access and difference counting
//!
//! A grid is always non-empty and rectangular: construction rejects ragged or
//! empty input, and the backing 2-D array cannot represent anything else.
//! Grids published by the catalog are shared immutably; transformations work
//! on an owned clone.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{FloorError, Result, invalid_grid};
use crate::spatial::tiles::{TileColor, parse_tiles};

/// A rectangular pattern of two-valued tiles, indexed `(row, col)` from zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<TileColor>,
}

impl Grid {
    /// Build a grid from row-major rows of colors
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty, or any
    /// row length differs from the first
    pub fn from_rows(rows: Vec<Vec<TileColor>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(invalid_grid(&"grid must have at least one row and one column"));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(invalid_grid(&format!(
                "row {} has {} tiles, expected {col_count}",
                index + 1,
                row.len()
            )));
        }

        let flat: Vec<TileColor> = rows.into_iter().flatten().collect();
        Self::from_flat(row_count, col_count, flat)
    }

    /// Parse row-major catalog text into a `rows` x `cols` grid
    ///
    /// Whitespace (including line breaks between rows) is ignored, so both
    /// `"NBBN"` and `"NB\nBN"` describe the same 2x2 grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, the text contains a character
    /// other than `N`/`B`, or the tile count differs from `rows * cols`
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_grid(&format!(
                "dimensions {rows}x{cols} must both be non-zero"
            )));
        }

        let tiles = parse_tiles(text)?;
        let expected = rows.saturating_mul(cols);
        if tiles.len() != expected {
            return Err(invalid_grid(&format!(
                "expected {expected} tiles for a {rows}x{cols} grid, found {}",
                tiles.len()
            )));
        }

        Self::from_flat(rows, cols, tiles)
    }

    /// A grid with every tile set to `color`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(rows: usize, cols: usize, color: TileColor) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_grid(&format!(
                "dimensions {rows}x{cols} must both be non-zero"
            )));
        }
        Ok(Self {
            tiles: Array2::from_elem((rows, cols), color),
        })
    }

    fn from_flat(rows: usize, cols: usize, flat: Vec<TileColor>) -> Result<Self> {
        let tiles =
            Array2::from_shape_vec((rows, cols), flat).map_err(|e| invalid_grid(&e))?;
        Ok(Self { tiles })
    }

    /// Grid dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.tiles.dim()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Color at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<TileColor> {
        self.tiles.get((row, col)).copied()
    }

    /// Color at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if `row >= rows` or `col >= cols`
    pub fn at(&self, row: usize, col: usize) -> Result<TileColor> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Toggle the tile at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell does not exist
    pub fn flip(&mut self, row: usize, col: usize) -> Result<()> {
        let error = self.out_of_bounds(row, col);
        let tile = self.tiles.get_mut((row, col)).ok_or(error)?;
        *tile = tile.flipped();
        Ok(())
    }

    /// Exchange two orthogonally adjacent tiles
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if either cell does not exist, or
    /// `NotAdjacent` if the cells are not horizontal or vertical neighbours
    pub fn swap(&mut self, first: (usize, usize), second: (usize, usize)) -> Result<()> {
        if first.0.abs_diff(second.0) + first.1.abs_diff(second.1) != 1 {
            return Err(FloorError::NotAdjacent { first, second });
        }

        let a = self.at(first.0, first.1)?;
        let b = self.at(second.0, second.1)?;
        if let Some(tile) = self.tiles.get_mut(first) {
            *tile = b;
        }
        if let Some(tile) = self.tiles.get_mut(second) {
            *tile = a;
        }
        Ok(())
    }

    /// Fail with `DimensionMismatch` unless both grids share dimensions
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` carrying both shapes
    pub fn ensure_same_dimensions(&self, other: &Self) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(FloorError::DimensionMismatch {
                source_dimensions: self.dimensions(),
                destination_dimensions: other.dimensions(),
            })
        }
    }

    /// Number of positions where the two grids' colors differ
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the grids differ in shape
    pub fn count_differences(&self, other: &Self) -> Result<usize> {
        self.ensure_same_dimensions(other)?;
        Ok(self
            .tiles
            .iter()
            .zip(other.tiles.iter())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Positions `(row, col)` where the grids differ, in row-major order
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the grids differ in shape
    pub fn differing_cells(&self, other: &Self) -> Result<Vec<(usize, usize)>> {
        self.ensure_same_dimensions(other)?;
        Ok(self
            .tiles
            .indexed_iter()
            .zip(other.tiles.iter())
            .filter(|((_, a), b)| a != b)
            .map(|((position, _), _)| position)
            .collect())
    }

    /// Copy of the tiles as row-major rows
    pub fn to_rows(&self) -> Vec<Vec<TileColor>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> FloorError {
        FloorError::CellOutOfBounds {
            row,
            col,
            dimensions: (self.tiles.nrows(), self.tiles.ncols()),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.tiles.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

/// Number of positions where two same-shaped grids differ
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn count_differences(a: &Grid, b: &Grid) -> Result<usize> {
    a.count_differences(b)
}
