//! Error types for traversal and decorator configuration

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tree::GlyphRole;

/// Fatal errors that abort a traversal.
///
/// Events already delivered to listeners before the abort are not retracted.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// A listener returned an error during dispatch.
    #[error("listener failed at '{path}': {source}")]
    Listener {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The cancellation token was triggered.
    #[error("traversal cancelled at '{path}'")]
    Cancelled { path: PathBuf },
}

/// A directory whose children could not be listed.
///
/// Recoverable: the directory is still visited (its event carries the
/// `listing_failed` mark), it is treated as childless, and traversal
/// continues with its siblings. Collected in the walk report.
#[derive(Debug, Error)]
#[error("cannot list '{path}': {error}")]
pub struct ListingFailure {
    pub path: PathBuf,
    #[source]
    pub error: io::Error,
}

/// Rejected decorator configurations, detected at construction.
#[derive(Debug, Error)]
pub enum DecoratorError {
    /// Two roles render as the same glyph, which would make prefixes
    /// ambiguous to interpret.
    #[error("glyph for {second:?} duplicates {first:?} ({glyph:?})")]
    DuplicateGlyph {
        first: GlyphRole,
        second: GlyphRole,
        glyph: String,
    },
}
