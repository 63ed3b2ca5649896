//! Runtime configuration defaults

// Catalog location
/// Catalog file used when neither the flag nor the environment names one
pub const DEFAULT_CATALOG_PATH: &str = "floors.json";
/// Environment variable that overrides the default catalog path
pub const CATALOG_ENV_VAR: &str = "TILEFLOOR_CATALOG";

// Logging
/// Log filter applied when `RUST_LOG` is unset and no `-v` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filters selected by one, two, and three or more `-v` flags
pub const VERBOSE_LOG_FILTERS: [&str; 3] = ["info", "debug", "trace"];

// Progress bar display settings
/// Floors with fewer ordered pattern pairs than this report without a bar
pub const MIN_PAIRS_FOR_PROGRESS: usize = 2;
/// Progress bar layout
pub const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} pairs";

/// Log filter for a `-v` count, `None` when no flag was given
pub fn verbose_log_filter(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        n => VERBOSE_LOG_FILTERS
            .get(usize::from(n) - 1)
            .or_else(|| VERBOSE_LOG_FILTERS.last())
            .copied(),
    }
}
