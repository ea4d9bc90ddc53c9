//! Session error types.

use thiserror::Error;

/// Errors surfaced by the query pipeline.
///
/// Every stage fails the whole query; nothing is retried or recovered
/// locally, and there is no partial-success mode.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Lexical error.
    #[error("lex error: {0}")]
    Lex(#[from] graft_parser::LexError),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(#[from] graft_parser::ParseError),

    /// Execution error.
    #[error("execution error: {0}")]
    Exec(#[from] graft_query::ExecError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
