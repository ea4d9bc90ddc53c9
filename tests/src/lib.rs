//! Integration test support for the graft query engine.
//!
//! Provides the blog fixture: an in-memory store of users and posts plus a
//! registry whose schema graph is intentionally cyclic (User.posts →
//! Post.author → User).


pub use fixture::*;
