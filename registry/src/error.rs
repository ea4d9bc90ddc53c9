//! Resolver error types.

use thiserror::Error;

/// Errors a resolver can return.
///
/// The executor propagates these unmodified; a single failing resolver
/// aborts the whole query.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The backing store failed.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// An argument was missing or had the wrong shape.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ResolveError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
