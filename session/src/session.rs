//! Session manager.

use graft_core::{Value, ValueMap};
use graft_parser::{Lexer, Parser};
use graft_query::{Executor, QueryResponse};
use graft_registry::Registry;

use crate::SessionResult;

/// A query session over a shared registry.
///
/// Holds the root context value that top-level resolvers see as their
/// parent. The registry is read-only for the session's lifetime; sessions
/// are cheap and independent.
pub struct Session<'r> {
    /// The registry (shared).
    registry: &'r Registry,
    /// Parent value for top-level fields.
    root: Value,
}

impl<'r> Session<'r> {
    /// Create a session with an empty root context.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            root: Value::Object(ValueMap::new()),
        }
    }

    /// Create a session with an explicit root context value.
    pub fn with_root(registry: &'r Registry, root: Value) -> Self {
        Self { registry, root }
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Get the root context value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Run the full pipeline on a query string: tokenize, parse, execute.
    ///
    /// Returns the result tree wrapped in the `{"data": …}` envelope, or
    /// the first error any stage produced.
    pub fn execute(&self, input: &str) -> SessionResult<QueryResponse> {
        let tokens = Lexer::new(input).tokenize()?;
        let selection = Parser::new(tokens).parse_document()?;
        tracing::debug!(fields = selection.len(), "query parsed");

        let executor = Executor::new(self.registry);
        let data = executor.execute(&selection, Registry::ROOT_TYPE, &self.root)?;
        Ok(QueryResponse::new(data))
    }
}
