//! Boundary errors

use thiserror::Error;

use crate::types::GridId;

/// Result type for scripting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported across the host scripting boundary
///
/// Script routines add nothing to these: a failing primitive propagates
/// unmodified to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("setting not found: {0}")]
    SettingNotFound(String),

    #[error("resource unit grid variable not found: {variable}")]
    GridNotFound { variable: String },

    #[error("species not found: {0}")]
    SpeciesNotFound(String),

    #[error("unknown grid handle: {0}")]
    UnknownGrid(GridId),

    #[error("grids not spatially compatible: {target} vs {operand}")]
    IncompatibleGrids { target: GridId, operand: GridId },

    #[error("invalid expression `{expression}`: {message}")]
    Expression {
        expression: String,
        message: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
