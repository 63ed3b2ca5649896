//! Floors, their named patterns, and name resolution
//!
//! Lookups scan in insertion order and return the first match, so a
//! duplicated floor name or pattern code resolves to its earliest entry.

use crate::algorithm::cost::{FloorCosts, minimum_cost_between};
use crate::algorithm::instructions::{Instruction, generate_instructions};
use crate::io::error::{FloorError, Result, invalid_catalog};
use crate::spatial::Grid;

/// A named tile pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    code: String,
    grid: Grid,
}

impl Pattern {
    /// Create a pattern from its code and grid
    pub fn new(code: impl Into<String>, grid: Grid) -> Self {
        Self {
            code: code.into(),
            grid,
        }
    }

    /// Pattern code, unique within its floor by convention
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Tile layout
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// A tiled floor: fixed dimensions, operation prices, and its patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    name: String,
    dimensions: (usize, usize),
    costs: FloorCosts,
    patterns: Vec<Pattern>,
}

impl Floor {
    /// Create a floor with no patterns
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if either dimension is zero
    pub fn new(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
        costs: FloorCosts,
    ) -> Result<Self> {
        let name = name.into();
        if rows == 0 || cols == 0 {
            return Err(invalid_catalog(&format!(
                "floor '{name}' has dimensions {rows}x{cols}; both must be non-zero"
            )));
        }

        Ok(Self {
            name,
            dimensions: (rows, cols),
            costs,
            patterns: Vec::new(),
        })
    }

    /// Append a pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the pattern's grid does not match the
    /// floor's dimensions
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<()> {
        if pattern.grid.dimensions() != self.dimensions {
            let (rows, cols) = pattern.grid.dimensions();
            return Err(invalid_catalog(&format!(
                "pattern '{}' is {rows}x{cols} but floor '{}' is {}x{}",
                pattern.code, self.name, self.dimensions.0, self.dimensions.1
            )));
        }
        self.patterns.push(pattern);
        Ok(())
    }

    /// Floor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floor dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Flip and swap prices
    pub const fn costs(&self) -> &FloorCosts {
        &self.costs
    }

    /// Patterns in insertion order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Grid of the first pattern with `code`
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` if no pattern has that code
    pub fn pattern(&self, code: &str) -> Result<&Grid> {
        self.find(code).ok_or_else(|| FloorError::PatternNotFound {
            floor: self.name.clone(),
            code: code.to_string(),
        })
    }

    /// Grids for an origin and destination code
    ///
    /// # Errors
    ///
    /// Returns `PatternPairNotFound` if either code is unknown
    pub fn pattern_pair(&self, origin: &str, destination: &str) -> Result<(&Grid, &Grid)> {
        match (self.find(origin), self.find(destination)) {
            (Some(source), Some(target)) => Ok((source, target)),
            _ => Err(FloorError::PatternPairNotFound {
                floor: self.name.clone(),
                origin: origin.to_string(),
                destination: destination.to_string(),
            }),
        }
    }

    /// Estimated minimum cost of changing pattern `origin` into `destination`
    ///
    /// # Errors
    ///
    /// Returns `PatternPairNotFound` before any computation if either code is
    /// unknown, or `DimensionMismatch` if the grids differ in shape
    pub fn minimum_cost(&self, origin: &str, destination: &str) -> Result<u64> {
        let (source, target) = self.pattern_pair(origin, destination)?;
        minimum_cost_between(&self.costs, source, target)
    }

    /// Instructions for changing pattern `origin` into `destination`
    ///
    /// # Errors
    ///
    /// Returns `PatternPairNotFound` before any computation if either code is
    /// unknown, or `DimensionMismatch` if the grids differ in shape
    pub fn instructions(&self, origin: &str, destination: &str) -> Result<Vec<Instruction>> {
        let (source, target) = self.pattern_pair(origin, destination)?;
        generate_instructions(source, target)
    }

    fn find(&self, code: &str) -> Option<&Grid> {
        self.patterns
            .iter()
            .find(|pattern| pattern.code == code)
            .map(Pattern::grid)
    }
}

/// All floors known to the program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    floors: Vec<Floor>,
}

impl Catalog {
    /// Create an empty catalog
    pub const fn new() -> Self {
        Self { floors: Vec::new() }
    }

    /// Append a floor
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.push(floor);
    }

    /// Floors in insertion order
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Number of floors
    pub const fn len(&self) -> usize {
        self.floors.len()
    }

    /// Whether the catalog holds no floors
    pub const fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// First floor called `name`
    ///
    /// # Errors
    ///
    /// Returns `FloorNotFound` if no floor has that name
    pub fn floor(&self, name: &str) -> Result<&Floor> {
        self.floors
            .iter()
            .find(|floor| floor.name == name)
            .ok_or_else(|| FloorError::FloorNotFound {
                name: name.to_string(),
            })
    }

    /// Grid for `code` on floor `floor_name`
    ///
    /// # Errors
    ///
    /// Returns `FloorNotFound` or `PatternNotFound`
    pub fn resolve_pattern(&self, floor_name: &str, code: &str) -> Result<&Grid> {
        self.floor(floor_name)?.pattern(code)
    }
}
