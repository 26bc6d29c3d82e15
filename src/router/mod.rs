//! Request routing.
//!
//! Maps request paths to handlers using a segment trie with
//! longest-registered-prefix matching: a lookup for `/a/b/c` resolves to the
//! handler of the deepest registered ancestor path (`/a/b/c`, else `/a/b`,
//! else `/a`). Matching is case-sensitive and purely static — no wildcards,
//! no `{id}` placeholders.
//!
//! The routing layer is organized into:
//!
//! - **`handler`**: the [`Handler`] capability that routes and the fallback
//!   are expressed in
//! - **`path`**: splitting of request paths into normalized segments
//! - **`trie`**: the segment trie that stores registered routes
//! - **`dispatch`**: the [`Router`] consulted on every inbound request
//!
//! # Usage contract
//!
//! Register all routes before the listener starts accepting traffic, then
//! share the router immutably (`Arc<Router>`) across connection tasks.
//! Lookups never mutate the trie, so concurrent dispatch needs no locking.

pub mod dispatch;
pub mod handler;
pub mod path;
pub mod trie;

pub use dispatch::Router;
pub use handler::{Handler, HandlerRef};
pub use trie::PathTrie;
