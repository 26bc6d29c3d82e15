//! HTTP protocol implementation.
//!
//! An HTTP/1.1 server layer with keep-alive support, organized into:
//!
//! - **`connection`**: per-connection request-response state machine; hands
//!   each parsed request to the router
//! - **`parser`**: parses requests from byte buffers, splitting path and
//!   query from the request target
//! - **`request`**: the request model handlers consume
//! - **`response`**: the mutable response model handlers fill in
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection state machine
//!
//! ```text
//! Reading → Processing → Writing ─┬─ keep-alive → Reading
//!                                 └─ close → Closed
//! ```
//!
//! Processing is where routing happens: the connection builds an empty
//! 200 OK response, lets the router's resolved handler mutate it, and turns
//! a handler error into a 500 before writing.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
