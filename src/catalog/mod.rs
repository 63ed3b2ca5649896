//! Floor catalog: named floors, their patterns, and loading from disk

/// Floors, patterns, and name resolution
pub mod floor;
/// Catalog document decoding
pub mod loader;
/// Pairwise cost and plan summaries per floor
pub mod report;

pub use floor::{Catalog, Floor, Pattern};
pub use loader::{load_catalog, parse_catalog};
pub use report::{PairSummary, floor_report};
