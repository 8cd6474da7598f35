use std::collections::BTreeMap;

use faststr::FastStr;
use parking_lot::RwLock;

use super::{handle::Json, value_trait::JsonType};

/// The backing storage of one JSON value.
///
/// The variant is fixed when the node is created. Scalars are immutable, so every
/// "assignment" of a scalar allocates a new node (or borrows a shared one). Arrays and
/// objects keep their payload behind a lock, since every handle aliasing the node may
/// mutate it.
pub(crate) enum Node {
    Null,
    Boolean(bool),
    Integer(i32),
    Number(f64),
    String(FastStr),
    Array(RwLock<Vec<Json>>),
    Object(RwLock<BTreeMap<FastStr, Json>>),
}

impl Node {
    #[inline]
    pub(crate) fn get_type(&self) -> JsonType {
        match self {
            Node::Null => JsonType::Null,
            Node::Boolean(_) => JsonType::Boolean,
            Node::Integer(_) => JsonType::Integer,
            Node::Number(_) => JsonType::Number,
            Node::String(_) => JsonType::String,
            Node::Array(_) => JsonType::Array,
            Node::Object(_) => JsonType::Object,
        }
    }

    #[inline]
    pub(crate) fn new_array(items: Vec<Json>) -> Self {
        Node::Array(RwLock::new(items))
    }

    #[inline]
    pub(crate) fn new_object(members: BTreeMap<FastStr, Json>) -> Self {
        Node::Object(RwLock::new(members))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_node_type() {
        assert_eq!(Node::Null.get_type(), JsonType::Null);
        assert_eq!(Node::Boolean(false).get_type(), JsonType::Boolean);
        assert_eq!(Node::Integer(1).get_type(), JsonType::Integer);
        assert_eq!(Node::Number(1.0).get_type(), JsonType::Number);
        assert_eq!(Node::String("a".into()).get_type(), JsonType::String);
        assert_eq!(Node::new_array(Vec::new()).get_type(), JsonType::Array);
        assert_eq!(
            Node::new_object(BTreeMap::new()).get_type(),
            JsonType::Object
        );
    }
}
