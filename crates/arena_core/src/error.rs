//! Error types for the combat core.

use thiserror::Error;

/// Result type alias using [`ArenaError`].
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Top-level error type for the combat engine.
///
/// The simulation loop itself never fails in the steady state; these errors
/// cover data integrity at the edges (roster assembly, catalog loading).
#[derive(Debug, Error)]
pub enum ArenaError {
    /// A unit descriptor named a template that is not in the catalog.
    ///
    /// Non-fatal: the roster builder drops the entry and the battle
    /// proceeds with the remaining units.
    #[error("unit template not found in catalog: {name}")]
    TemplateNotFound {
        /// Name the descriptor asked for.
        name: String,
    },

    /// Catalog data file parsing error.
    #[error("failed to parse catalog file '{path}': {message}")]
    CatalogParse {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },
}
