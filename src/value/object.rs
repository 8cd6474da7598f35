//! Represents a JSON object view.
use std::{collections::BTreeMap, ops::Deref};

use faststr::FastStr;
use ref_cast::RefCast;

use super::{guard::DataMut, handle::Json, node::Node};

/// Object is a [`Json`] handle known to reference an object node.
///
/// Members are kept in a [`BTreeMap`], so iteration always follows lexicographic key order
/// and keys are unique. Insertion order is not preserved.
///
/// Converting a handle of any other kind into an `Object` does not fail: the view is backed
/// by the shared `null` node instead.
///
/// # Examples
/// ```
/// use refjson::{object, Json};
///
/// let obj = object! {"b": 2, "a": 1};
/// let keys: Vec<String> = obj.data().keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["a", "b"]);
///
/// assert!(Json::from(1).to_object().is_null());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, RefCast)]
#[repr(transparent)]
pub struct Object(pub(crate) Json);

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl Object {
    /// Create a new empty object.
    #[inline]
    pub fn new() -> Object {
        Object(Json::new())
    }

    /// Returns the inner handle.
    #[inline]
    pub fn into_value(self) -> Json {
        self.0
    }

    /// Returns the number of members.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    #[track_caller]
    pub fn len(&self) -> usize {
        self.0.expect_object().read_recursive().len()
    }

    /// Returns true if the object has no members.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    #[track_caller]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the backing mapping. Values share their nodes with the stored
    /// members.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    #[track_caller]
    pub fn data(&self) -> BTreeMap<FastStr, Json> {
        self.0.expect_object().read_recursive().clone()
    }

    /// Returns an editable copy of the mapping that replaces the backing one when it is
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    #[track_caller]
    pub fn data_mut(&self) -> DataMut<'_, BTreeMap<FastStr, Json>> {
        DataMut::new(self.0.expect_object())
    }
}

impl Deref for Object {
    type Target = Json;

    #[inline]
    fn deref(&self) -> &Json {
        &self.0
    }
}

impl AsRef<Json> for Object {
    #[inline]
    fn as_ref(&self) -> &Json {
        &self.0
    }
}

impl From<Json> for Object {
    /// Wraps `value` if it is an object, otherwise yields a view backed by `null`.
    fn from(value: Json) -> Self {
        if value.is_object() {
            Object(value)
        } else {
            tracing::debug!(found = %value.get_type(), "object view degraded to null");
            Object(Json::null())
        }
    }
}

impl From<Object> for Json {
    #[inline]
    fn from(val: Object) -> Self {
        val.0
    }
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl<K: AsRef<str>, V: Into<Json>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let members: BTreeMap<FastStr, Json> = iter
            .into_iter()
            .map(|(k, v)| (FastStr::new(k.as_ref()), v.into()))
            .collect();
        Object(Json::from_node(Node::new_object(members)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::object;

    #[test]
    fn test_view_of_object_shares_node() {
        let json = Json::new();
        let view = json.to_object();
        assert!(view.ptr_eq(&json));
        view.insert("a", 1);
        assert_eq!(json.get("a"), 1);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_degrade_to_null() {
        let view = Json::from(true).to_object();
        assert!(view.is_null());
        assert!(!view.is_object());
    }

    #[test]
    #[should_panic(expected = "type mismatch: expected object, found null")]
    fn test_degraded_len_panics() {
        Json::from(0.5).to_object().len();
    }

    #[test]
    fn test_key_order_iteration() {
        let obj = object! {"zeta": 1, "alpha": 2, "mid": 3};
        let data = obj.data();
        let keys: Vec<&str> = data.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_bulk_mutation() {
        let obj = object! {"a": 1, "b": 2};
        let alias = obj.clone();
        for value in obj.data_mut().values_mut() {
            *value = Json::from(value.to_int() * 10);
        }
        assert_eq!(alias.get("b"), 20);
    }

    #[test]
    fn test_collect() {
        let obj: Object = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("y"), 2);
    }
}
