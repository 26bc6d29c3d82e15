use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;

/// A request processor that can be registered as a route.
///
/// Handlers receive the parsed request and a mutable response to fill in;
/// the router never inspects either beyond invoking `handle`. An `Err` from
/// a handler is passed through the router untouched — the connection layer
/// decides how to turn it into an error response.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request, response: &mut Response) -> anyhow::Result<()>;
}

/// Shared reference to a handler.
///
/// Routes are registered once at startup and then served from many
/// connection tasks, so handlers live behind an `Arc`.
pub type HandlerRef = Arc<dyn Handler>;

/// Plain functions and closures with the right signature are handlers.
impl<F> Handler for F
where
    F: Fn(&Request, &mut Response) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, request: &Request, response: &mut Response) -> anyhow::Result<()> {
        self(request, response)
    }
}
