//! Command-line driver, configuration, errors, and text output

/// Command-line parsing and command dispatch
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and the crate `Result` alias
pub mod error;
/// Text rendering of floors, patterns, and plans
pub mod presentation;
/// Progress display for floor reports
pub mod progress;
