//! Error surface for the crate.
//!
//! Resolver functions never fail; only document lookups, configuration
//! loading and logging sinks produce errors.

mod types;

pub use types::{Result, ThemeError};
