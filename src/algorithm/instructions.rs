//! Greedy instruction generation for turning one pattern into another
//!
//! Cells are visited in row-major order on a private working copy of the
//! source. Each mismatch is resolved immediately, preferring a swap with the
//! right neighbour, then with the neighbour below, and falling back to a flip.
//! Later cells are compared against the already-mutated copy, so earlier
//! choices shape later ones. After the scan the working copy equals the
//! destination.

use std::fmt;

use tracing::{debug, trace};

use crate::io::error::Result;
use crate::spatial::Grid;

/// Human-facing cell address, 1-indexed in both row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Address of the 0-indexed cell `(row, col)`
    pub const fn from_zero_based(row: usize, col: usize) -> Self {
        Self {
            row: row + 1,
            col: col + 1,
        }
    }

    /// Address from 1-indexed coordinates, `None` if either is zero
    pub const fn one_based(row: usize, col: usize) -> Option<Self> {
        if row == 0 || col == 0 {
            None
        } else {
            Some(Self { row, col })
        }
    }

    /// 1-indexed row
    pub const fn row(self) -> usize {
        self.row
    }

    /// 1-indexed column
    pub const fn col(self) -> usize {
        self.col
    }

    /// 0-indexed `(row, col)` for grid access
    pub const fn to_zero_based(self) -> (usize, usize) {
        (self.row - 1, self.col - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One operation applied to a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Exchange two adjacent tiles
    Swap {
        /// Cell being resolved
        first: Position,
        /// Right or lower neighbour it is exchanged with
        second: Position,
    },
    /// Toggle one tile
    Flip {
        /// Cell being toggled
        at: Position,
    },
}

impl Instruction {
    /// Perform this operation on `grid`
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if an addressed cell is outside the grid,
    /// or `NotAdjacent` for a swap between non-neighbouring cells
    pub fn apply(&self, grid: &mut Grid) -> Result<()> {
        match *self {
            Self::Swap { first, second } => {
                grid.swap(first.to_zero_based(), second.to_zero_based())
            }
            Self::Flip { at } => {
                let (row, col) = at.to_zero_based();
                grid.flip(row, col)
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { first, second } => write!(f, "Swap tiles at {first} and {second}"),
            Self::Flip { at } => write!(f, "Flip tile at {at}"),
        }
    }
}

/// Produce the ordered operations that turn `source` into `destination`
///
/// Neither input is modified.
///
/// # Errors
///
/// Returns `DimensionMismatch` before scanning if the grids differ in shape
pub fn generate_instructions(source: &Grid, destination: &Grid) -> Result<Vec<Instruction>> {
    source.ensure_same_dimensions(destination)?;

    let mut working = source.clone();
    let (rows, cols) = working.dimensions();
    let mut instructions = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            if working.at(row, col)? == destination.at(row, col)? {
                continue;
            }

            let instruction = resolve_cell(&working, destination, row, col);
            instruction.apply(&mut working)?;
            trace!(%instruction, "emitted instruction");
            instructions.push(instruction);
        }
    }

    debug!(
        rows,
        cols,
        count = instructions.len(),
        "generated transformation plan"
    );
    Ok(instructions)
}

/// Apply `instructions` in order to a copy of `source`
///
/// # Errors
///
/// Propagates the first failing instruction's error
pub fn replay(source: &Grid, instructions: &[Instruction]) -> Result<Grid> {
    let mut grid = source.clone();
    for instruction in instructions {
        instruction.apply(&mut grid)?;
    }
    Ok(grid)
}

// Choose the operation for a mismatched cell; the neighbour must contrast
// with the cell in both the working copy and the destination for a swap
fn resolve_cell(working: &Grid, destination: &Grid, row: usize, col: usize) -> Instruction {
    let here = Position::from_zero_based(row, col);
    let candidates = [(row, col + 1), (row + 1, col)];

    candidates
        .into_iter()
        .find(|&neighbour| {
            contrasts(working, (row, col), neighbour) && contrasts(destination, (row, col), neighbour)
        })
        .map_or(Instruction::Flip { at: here }, |(n_row, n_col)| {
            Instruction::Swap {
                first: here,
                second: Position::from_zero_based(n_row, n_col),
            }
        })
}

// False when the neighbour lies outside the grid
fn contrasts(grid: &Grid, cell: (usize, usize), neighbour: (usize, usize)) -> bool {
    match (grid.get(cell.0, cell.1), grid.get(neighbour.0, neighbour.1)) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}
