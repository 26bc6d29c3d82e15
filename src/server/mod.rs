//! Server bootstrap: the TCP accept loop that owns the sockets and hands
//! each connection a shared reference to the router.

pub mod listener;
