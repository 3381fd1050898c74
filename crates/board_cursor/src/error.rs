//! Cursor controller errors

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while setting up a cursor controller
///
/// Once built, the controller's operations are total and never fail.
#[derive(Error, Debug)]
pub enum CursorError {
    /// No board geometry was supplied; the controller cannot map pointers to cells
    #[error("Board geometry is required to build a cursor controller")]
    MissingGeometry,

    /// No event publisher was supplied
    #[error("Event publisher is required to build a cursor controller")]
    MissingPublisher,

    /// No highlight sink was supplied
    #[error("Highlight sink is required to build a cursor controller")]
    MissingHighlightSink,

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for cursor setup
pub type CursorResult<T> = Result<T, CursorError>;
