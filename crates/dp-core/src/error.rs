//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `DpError` as one variant
//! via `#[from]` where they can surface configuration problems.

use thiserror::Error;

/// The top-level error type for `dp-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DpError {
    /// Invalid table configuration.  Always fatal at construction; no
    /// partial state is created.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dp-core`.
pub type DpResult<T> = Result<T, DpError>;
