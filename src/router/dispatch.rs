use tracing::debug;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::router::handler::{Handler, HandlerRef};
use crate::router::trie::PathTrie;

/// Per-request dispatcher over a [`PathTrie`].
///
/// The owning server registers routes at startup with
/// [`route`](Router::route) and then calls [`handle`](Router::handle) for
/// every inbound request; paths that match no registered route fall through
/// to the default handler supplied at construction. Registration is not
/// synchronized — finish wiring routes before serving begins, then share
/// the router as `Arc<Router>`.
pub struct Router {
    trie: PathTrie,
    default_handler: HandlerRef,
}

impl Router {
    /// Creates a router that falls back to `default_handler` whenever no
    /// registered route matches the request path.
    pub fn new(default_handler: HandlerRef) -> Self {
        Self {
            trie: PathTrie::new(),
            default_handler,
        }
    }

    /// Registers `handler` for `path`.
    ///
    /// Accepts an optional handler so callers can wire conditional routes
    /// without branching; passing `None` silently skips the registration.
    /// Re-registering a path replaces its handler.
    pub fn route(&mut self, path: &str, handler: impl Into<Option<HandlerRef>>) -> &mut Self {
        if let Some(handler) = handler.into() {
            self.trie.add(path, handler);
        }
        self
    }

    /// Dispatches one request: resolves the request path against the trie
    /// and invokes the matching handler, or the default handler when nothing
    /// matches.
    ///
    /// Handler errors are returned untouched; converting them into an error
    /// response and logging them is the connection layer's responsibility.
    pub fn handle(&self, request: &Request, response: &mut Response) -> anyhow::Result<()> {
        match self.trie.match_path(&request.path) {
            Some(handler) => {
                debug!(path = %request.path, "Dispatching to registered route");
                handler.handle(request, response)
            }
            None => {
                debug!(path = %request.path, "No route matched, using default handler");
                self.default_handler.handle(request, response)
            }
        }
    }
}

/// A router is itself a handler, so routers can be nested or handed to any
/// code that expects a [`Handler`].
impl Handler for Router {
    fn handle(&self, request: &Request, response: &mut Response) -> anyhow::Result<()> {
        Router::handle(self, request, response)
    }
}
