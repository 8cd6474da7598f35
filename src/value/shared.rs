//! Process-wide nodes for the three immutable values constructed most often.
//!
//! Identity of these nodes is only ever used as a fast path. Two `null` handles are not
//! guaranteed to share a node.

use std::sync::{Arc, LazyLock};

use super::node::Node;

static NULL: LazyLock<Arc<Node>> = LazyLock::new(|| Arc::new(Node::Null));
static TRUE: LazyLock<Arc<Node>> = LazyLock::new(|| Arc::new(Node::Boolean(true)));
static FALSE: LazyLock<Arc<Node>> = LazyLock::new(|| Arc::new(Node::Boolean(false)));

#[inline]
pub(crate) fn null() -> Arc<Node> {
    Arc::clone(&NULL)
}

#[inline]
pub(crate) fn boolean(val: bool) -> Arc<Node> {
    if val {
        Arc::clone(&TRUE)
    } else {
        Arc::clone(&FALSE)
    }
}
