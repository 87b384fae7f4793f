//! Error types for the cookie engine.

use thiserror::Error;

use crate::batch::BatchKind;
use crate::cookie::Cookie;

/// Convenience type alias for Results using [`CookieError`].
pub type Result<T, E = CookieError> = std::result::Result<T, E>;

/// Errors surfaced by the engine and the line codec.
///
/// Failing to match a line is never an error; every phase has a default
/// cookie for that.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CookieError {
    /// A declared pattern did not compile. No batch from the failed build
    /// is kept, so the engine stays uninitialized.
    #[error("{batch} batch: pattern for {cookie} does not compile: {pattern:?}")]
    PatternCompile {
        /// Batch that was being built.
        batch: BatchKind,
        /// Cookie the broken pattern was declared for.
        cookie: Cookie,
        /// The pattern text as declared.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// I/O error while reading server lines.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A server line exceeded the codec's limit.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Bytes buffered without a terminator.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}

impl CookieError {
    /// Returns true if this error came from building the pattern table.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::PatternCompile { .. })
    }
}
