//! Waypoint - Trie-routed embedded HTTP server
//!
//! Core library: a segment-trie router with longest-prefix matching and the
//! HTTP/1.1 engine that dispatches through it.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
