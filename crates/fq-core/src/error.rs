//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FqError` via `From` impls, or keep them separate and wrap `FqError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `fq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FqError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fq-*` crates.
pub type FqResult<T> = Result<T, FqError>;
