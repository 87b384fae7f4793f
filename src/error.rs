//! Errors raised while running a classification session.

use std::path::PathBuf;

use fibs_cookie::CookieError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Table build failure, oversized line or read error from the codec.
    #[error(transparent)]
    Cookie(#[from] CookieError),

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the echo, the summary or the login command failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
