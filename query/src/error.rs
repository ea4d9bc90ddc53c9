//! Execution error types.

use graft_registry::ResolveError;
use thiserror::Error;

/// Result type for execution.
pub type ExecResult<T> = Result<T, ExecError>;

/// Errors that can occur during selection execution.
///
/// There is no per-field error isolation: the first failure aborts the
/// whole query with no partial result.
#[derive(Debug, Error)]
pub enum ExecError {
    /// A resolver call failed; the source error is propagated unmodified.
    #[error("resolver error: {0}")]
    Resolver(#[from] ResolveError),
}
