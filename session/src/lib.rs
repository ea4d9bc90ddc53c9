//! Graft Session
//!
//! The one-call pipeline facade: tokenize, parse, and execute a query
//! string against a shared registry and a root context value.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::Session;
