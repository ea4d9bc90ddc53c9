//! Query response envelope.

use graft_core::ValueMap;
use serde::Serialize;

/// A completed query result, wrapped for encoding as `{"data": <result>}`.
///
/// Rendering beyond `Serialize` is the caller's concern; the engine never
/// commits to a transport format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub data: ValueMap,
}

impl QueryResponse {
    /// Wrap an executed selection result.
    pub fn new(data: ValueMap) -> Self {
        Self { data }
    }
}
