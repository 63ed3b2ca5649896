//! Catalog documents on disk
//!
//! A catalog is a JSON document listing floors. Each floor carries its
//! dimensions, its flip and swap prices, and its patterns as row-major tile
//! text:
//!
//! ```json
//! {
//!   "floors": [
//!     {
//!       "name": "lobby",
//!       "rows": 2,
//!       "cols": 2,
//!       "flip_cost": 5,
//!       "swap_cost": 3,
//!       "patterns": [
//!         { "code": "cod11", "tiles": "BBNN" },
//!         { "code": "cod12", "tiles": "NBBN" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::algorithm::cost::FloorCosts;
use crate::catalog::floor::{Catalog, Floor, Pattern};
use crate::io::error::{FloorError, Result, invalid_catalog};
use crate::spatial::Grid;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    floors: Vec<FloorRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FloorRecord {
    name: String,
    rows: usize,
    cols: usize,
    flip_cost: u64,
    swap_cost: u64,
    #[serde(default)]
    patterns: Vec<PatternRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternRecord {
    code: String,
    tiles: String,
}

/// Read and validate a catalog file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, `CatalogParse` if it is
/// not a valid catalog document, or `InvalidCatalog`/`InvalidGrid` if a floor
/// or pattern is inconsistent
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|e| FloorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;

    let catalog = decode(&text, path)?;
    info!(
        path = %path.display(),
        floors = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Validate a catalog document held in memory
///
/// # Errors
///
/// Returns `CatalogParse` if the text is not a valid catalog document, or
/// `InvalidCatalog`/`InvalidGrid` if a floor or pattern is inconsistent
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    decode(text, &PathBuf::from("<inline>"))
}

fn decode(text: &str, path: &Path) -> Result<Catalog> {
    let document: CatalogDocument =
        serde_json::from_str(text).map_err(|e| FloorError::CatalogParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut catalog = Catalog::new();
    for record in document.floors {
        catalog.add_floor(build_floor(record)?);
    }
    Ok(catalog)
}

fn build_floor(record: FloorRecord) -> Result<Floor> {
    let costs = FloorCosts::new(record.flip_cost, record.swap_cost);
    let mut floor = Floor::new(record.name, record.rows, record.cols, costs)?;

    for pattern in record.patterns {
        let grid = Grid::parse(&pattern.tiles, record.rows, record.cols).map_err(|e| {
            invalid_catalog(&format!(
                "pattern '{}' on floor '{}': {e}",
                pattern.code,
                floor.name()
            ))
        })?;
        floor.add_pattern(Pattern::new(pattern.code, grid))?;
    }

    debug!(
        floor = floor.name(),
        patterns = floor.patterns().len(),
        "loaded floor"
    );
    Ok(floor)
}
