//! Error types for grid, catalog, and command operations

use std::path::PathBuf;

/// Main error type for all floor operations
#[derive(Debug, thiserror::Error)]
pub enum FloorError {
    /// Source and destination grids differ in row or column count
    ///
    /// Raised before any difference counting or scanning begins, so no
    /// partial cost or instruction list is ever produced.
    #[error(
        "Pattern dimensions differ: source is {}x{}, destination is {}x{}",
        .source_dimensions.0,
        .source_dimensions.1,
        .destination_dimensions.0,
        .destination_dimensions.1
    )]
    DimensionMismatch {
        /// Source grid dimensions (rows, cols)
        source_dimensions: (usize, usize),
        /// Destination grid dimensions (rows, cols)
        destination_dimensions: (usize, usize),
    },

    /// Cell coordinates outside the grid (0-indexed)
    #[error(
        "Cell ({row},{col}) is out of bounds for a {}x{} grid",
        .dimensions.0,
        .dimensions.1
    )]
    CellOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Swap requested between cells that are not orthogonal neighbours
    #[error("Cells ({},{}) and ({},{}) are not adjacent", .first.0, .first.1, .second.0, .second.1)]
    NotAdjacent {
        /// First cell (0-indexed)
        first: (usize, usize),
        /// Second cell (0-indexed)
        second: (usize, usize),
    },

    /// Tile data cannot form a rectangular, non-empty grid
    #[error("Invalid grid: {reason}")]
    InvalidGrid {
        /// Description of what's wrong with the tile data
        reason: String,
    },

    /// No floor with the requested name exists in the catalog
    #[error("The floor '{name}' was not found")]
    FloorNotFound {
        /// Requested floor name
        name: String,
    },

    /// No pattern with the requested code exists on the floor
    #[error("Pattern '{code}' was not found on floor '{floor}'")]
    PatternNotFound {
        /// Floor that was searched
        floor: String,
        /// Requested pattern code
        code: String,
    },

    /// Origin or destination pattern of a transformation request is missing
    #[error("Origin or destination pattern not found ('{origin}' -> '{destination}' on floor '{floor}')")]
    PatternPairNotFound {
        /// Floor that was searched
        floor: String,
        /// Requested origin code
        origin: String,
        /// Requested destination code
        destination: String,
    },

    /// Catalog document is well formed but describes an impossible floor
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog {
        /// Description of the inconsistency
        reason: String,
    },

    /// Catalog document could not be decoded
    #[error("Failed to parse catalog '{}': {source}", .path.display())]
    CatalogParse {
        /// Path of the catalog document
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl FloorError {
    /// Whether this error is a lookup failure reported by the catalog
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FloorNotFound { .. }
                | Self::PatternNotFound { .. }
                | Self::PatternPairNotFound { .. }
        )
    }
}

/// Convenience type alias for floor results
pub type Result<T> = std::result::Result<T, FloorError>;

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> FloorError {
    FloorError::InvalidGrid {
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> FloorError {
    FloorError::InvalidCatalog {
        reason: reason.to_string(),
    }
}
