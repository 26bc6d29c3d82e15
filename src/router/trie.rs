use std::collections::HashMap;

use crate::router::handler::HandlerRef;
use crate::router::path::split_segments;

/// One path-segment position in the trie.
///
/// Each node exclusively owns its children, so the whole structure is a
/// plain recursive-ownership tree with no back-references. A node is
/// terminal — some registered route ends exactly there — iff `handler` is
/// `Some`, which makes "non-terminal nodes carry no handler" hold by
/// construction.
struct Node {
    children: HashMap<String, Node>,
    handler: Option<HandlerRef>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            handler: None,
        }
    }
}

/// Prefix tree over path segments, mapping registered routes to handlers.
///
/// Built once during startup via [`add`](PathTrie::add), then read-only for
/// the trie's lifetime — there is no route removal, and
/// [`match_path`](PathTrie::match_path) never mutates, so a fully built trie
/// can serve lookups from many tasks concurrently without locking.
pub struct PathTrie {
    root: Node,
}

impl PathTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Registers `handler` at `path`, creating intermediate nodes as needed.
    ///
    /// The path is normalized into non-empty segments first, so separator
    /// noise (`/a/b`, `/a/b/`, `/a//b`) registers the same route. An empty
    /// segment sequence (`""` or `"/"`) registers the root itself, enabling
    /// explicit server-root routing. Re-registering a path replaces the
    /// previous handler; last write wins.
    pub fn add(&mut self, path: &str, handler: HandlerRef) {
        let mut node = &mut self.root;
        for segment in split_segments(path) {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(Node::new);
        }
        node.handler = Some(handler);
    }

    /// Looks up the handler for `path` using longest-registered-prefix
    /// matching.
    ///
    /// Walks the trie segment by segment, remembering the handler of the
    /// deepest terminal node visited; the walk stops at the first segment
    /// with no child. With `/user` and `/user/profile` registered, a lookup
    /// for `/user/profile/extra` returns the `/user/profile` handler and a
    /// lookup for `/user/other` falls back to the `/user` handler.
    ///
    /// Returns `None` when no terminal node lies on the walked path. Paths
    /// with no segments only match if the root was explicitly registered.
    pub fn match_path(&self, path: &str) -> Option<&HandlerRef> {
        let mut matched = self.root.handler.as_ref();
        let mut node = &self.root;
        for segment in split_segments(path) {
            match node.children.get(segment) {
                Some(child) => {
                    if child.handler.is_some() {
                        matched = child.handler.as_ref();
                    }
                    node = child;
                }
                None => break,
            }
        }
        matched
    }
}

impl Default for PathTrie {
    fn default() -> Self {
        Self::new()
    }
}
