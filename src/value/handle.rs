use std::{collections::BTreeMap, fmt, sync::Arc};

use faststr::FastStr;
use parking_lot::RwLock;
use ref_cast::RefCast;

use super::{
    array::Array, guard::JsonMut, node::Node, object::Object, shared, value_trait::JsonType,
};
use crate::error::{violated, Error, Result};

/// A handle to a JSON value.
///
/// Cloning a `Json` is O(1): the clone shares the backing node with the original. Mutating
/// an array or an object through one handle is visible through every alias. Assigning a new
/// value to a variable (`json = Json::from(5)`) only rebinds that variable; the aliases keep
/// the node they already had.
///
/// Typed accessors never coerce. `to_int` on a string, or `push` on an object, is a
/// programming error and panics. Check [`Json::get_type`] or an `is_*` predicate first, or
/// use the `as_*` / `try_*` forms.
///
/// # Examples
/// ```
/// use refjson::Json;
///
/// let a = Json::from(vec![1, 2]);
/// let b = a.clone();
/// a.push(3);
/// assert_eq!(b.len(), 3);
///
/// let mut a = a;
/// a = Json::from(5);
/// assert!(a.is_integer());
/// assert_eq!(b.len(), 3);
/// ```
#[derive(Clone)]
pub struct Json {
    node: Arc<Node>,
}

impl Default for Json {
    /// Same as [`Json::new`]: an empty object.
    fn default() -> Self {
        Self::new()
    }
}

impl Json {
    /// Creates a handle to a new, empty object.
    #[inline]
    pub fn new() -> Self {
        Self::from_node(Node::new_object(BTreeMap::new()))
    }

    /// Returns a handle to the shared `null` node.
    #[inline]
    pub fn null() -> Self {
        Self {
            node: shared::null(),
        }
    }

    #[inline]
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    #[inline]
    pub(crate) fn from_shared(node: Arc<Node>) -> Self {
        Self { node }
    }

    /// The backing node. Used by comparison and by the views.
    #[inline]
    pub(crate) fn node(&self) -> &Arc<Node> {
        &self.node
    }

    /// Returns true if both handles reference the same backing node.
    ///
    /// # Examples
    /// ```
    /// use refjson::Json;
    ///
    /// let a = Json::from("x");
    /// assert!(a.ptr_eq(&a.clone()));
    /// assert!(!a.ptr_eq(&Json::from("x")));
    /// ```
    #[inline]
    pub fn ptr_eq(&self, other: &Json) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Gets the type of the backing node.
    #[inline]
    pub fn get_type(&self) -> JsonType {
        self.node.get_type()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.get_type() == JsonType::Null
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.get_type() == JsonType::Boolean
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.get_type() == JsonType::Integer
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.get_type() == JsonType::Number
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        self.get_type() == JsonType::String
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.get_type() == JsonType::Array
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.get_type() == JsonType::Object
    }

    #[cold]
    fn mismatch(&self, expected: JsonType) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.get_type(),
        }
    }
}

//////////////////////////////////////////////////////////////////////////////
// Scalars

impl Json {
    /// Returns the boolean payload, or `None` for any other kind.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self.node {
            Node::Boolean(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for any other kind. A `Number` is never
    /// converted.
    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match *self.node {
            Node::Integer(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the floating-point payload, or `None` for any other kind. An `Integer` is
    /// never converted.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match *self.node {
            Node::Number(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for any other kind.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match &*self.node {
            Node::String(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Returns the string payload as a cheaply clonable [`FastStr`].
    #[inline]
    pub fn as_faststr(&self) -> Option<&FastStr> {
        match &*self.node {
            Node::String(val) => Some(val),
            _ => None,
        }
    }

    pub fn try_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| self.mismatch(JsonType::Boolean))
    }

    pub fn try_int(&self) -> Result<i32> {
        self.as_int().ok_or_else(|| self.mismatch(JsonType::Integer))
    }

    pub fn try_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| self.mismatch(JsonType::Number))
    }

    pub fn try_str(&self) -> Result<&str> {
        self.as_str().ok_or_else(|| self.mismatch(JsonType::String))
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a boolean.
    #[track_caller]
    pub fn to_bool(&self) -> bool {
        match self.try_bool() {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }

    /// Returns the integer payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an integer, including when it is a `Number`.
    #[track_caller]
    pub fn to_int(&self) -> i32 {
        match self.try_int() {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }

    /// Returns the floating-point payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number, including when it is an `Integer`.
    #[track_caller]
    pub fn to_number(&self) -> f64 {
        match self.try_number() {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[track_caller]
    pub fn to_str(&self) -> &str {
        match self.try_str() {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }
}

//////////////////////////////////////////////////////////////////////////////
// Arrays

impl Json {
    pub(crate) fn array_lock(&self) -> Result<&RwLock<Vec<Json>>> {
        match &*self.node {
            Node::Array(items) => Ok(items),
            _ => Err(self.mismatch(JsonType::Array)),
        }
    }

    #[track_caller]
    pub(crate) fn expect_array(&self) -> &RwLock<Vec<Json>> {
        match self.array_lock() {
            Ok(items) => items,
            Err(err) => violated(err),
        }
    }

    /// Returns the number of elements of an array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array. Use [`Object::len`] for member counts.
    #[track_caller]
    pub fn len(&self) -> usize {
        self.expect_array().read_recursive().len()
    }

    /// Returns true if an array has no elements.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`. The result shares its node with the stored child.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array, or if `index >= len`.
    #[track_caller]
    pub fn at(&self, index: usize) -> Json {
        match self.try_at(index) {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }

    pub fn try_at(&self, index: usize) -> Result<Json> {
        let items = self.array_lock()?.read_recursive();
        items.get(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Returns a mutable reference to the stored child at `index`. The array never grows.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array, or if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use refjson::{array, Json};
    ///
    /// let arr = Json::from(array![true, 2]);
    /// let alias = arr.clone();
    /// *arr.at_mut(0) = Json::from(5);
    /// assert_eq!(alias.at(0), 5);
    /// ```
    #[track_caller]
    pub fn at_mut(&self, index: usize) -> JsonMut<'_> {
        let lock = self.expect_array();
        let child = match self.try_at(index) {
            Ok(child) => child,
            Err(err) => violated(err),
        };
        JsonMut::element(lock, index, child)
    }

    /// Appends an element to an array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn push<T: Into<Json>>(&self, value: T) {
        let value = value.into();
        self.expect_array().write().push(value);
    }

    /// Removes the last element of an array and returns it, or `None` if it is empty.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn pop(&self) -> Option<Json> {
        self.expect_array().write().pop()
    }

    /// Creates an array view sharing this handle's node. Degrades to a `null` view when the
    /// value is not an array.
    #[inline]
    pub fn to_array(&self) -> Array {
        Array::from(self.clone())
    }

    /// Borrows this handle as an array view if it is one.
    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        if self.is_array() {
            Some(Array::ref_cast(self))
        } else {
            None
        }
    }
}

//////////////////////////////////////////////////////////////////////////////
// Objects

impl Json {
    pub(crate) fn object_lock(&self) -> Result<&RwLock<BTreeMap<FastStr, Json>>> {
        match &*self.node {
            Node::Object(members) => Ok(members),
            _ => Err(self.mismatch(JsonType::Object)),
        }
    }

    #[track_caller]
    pub(crate) fn expect_object(&self) -> &RwLock<BTreeMap<FastStr, Json>> {
        match self.object_lock() {
            Ok(members) => members,
            Err(err) => violated(err),
        }
    }

    /// Returns the member stored under `key`, or `null` if there is none. Never inserts.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    ///
    /// # Examples
    /// ```
    /// use refjson::Json;
    ///
    /// let obj = Json::new();
    /// assert!(obj.get("missing").is_null());
    /// assert_eq!(obj.to_object().len(), 0);
    /// ```
    #[track_caller]
    pub fn get(&self, key: &str) -> Json {
        match self.try_get(key) {
            Ok(val) => val,
            Err(err) => violated(err),
        }
    }

    pub fn try_get(&self, key: &str) -> Result<Json> {
        let members = self.object_lock()?.read_recursive();
        Ok(members.get(key).cloned().unwrap_or_else(Json::null))
    }

    /// Returns a mutable reference to the member stored under `key`, inserting a `null`
    /// member first when the key is absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    ///
    /// # Examples
    /// ```
    /// use refjson::Json;
    ///
    /// let obj = Json::new();
    /// *obj.get_or_insert("two") = Json::from(2);
    /// assert_eq!(obj.get("two"), 2);
    ///
    /// assert!(obj.get_or_insert("nothing").is_null());
    /// assert_eq!(obj.to_object().len(), 2);
    /// ```
    #[track_caller]
    pub fn get_or_insert(&self, key: &str) -> JsonMut<'_> {
        let lock = self.expect_object();
        let key = FastStr::new(key);
        let child = lock
            .write()
            .entry(key.clone())
            .or_insert_with(Json::null)
            .clone();
        JsonMut::member(lock, key, child)
    }

    /// Stores `value` under `key`, returning the previous member if any.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn insert<T: Into<Json>>(&self, key: &str, value: T) -> Option<Json> {
        let value = value.into();
        self.expect_object()
            .write()
            .insert(FastStr::new(key), value)
    }

    /// Returns true if an object has a member named `key`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn contains_key(&self, key: &str) -> bool {
        self.expect_object().read_recursive().contains_key(key)
    }

    /// Removes the member named `key` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn remove(&self, key: &str) -> Option<Json> {
        self.expect_object().write().remove(key)
    }

    /// Creates an object view sharing this handle's node. Degrades to a `null` view when the
    /// value is not an object.
    #[inline]
    pub fn to_object(&self) -> Object {
        Object::from(self.clone())
    }

    /// Borrows this handle as an object view if it is one.
    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        if self.is_object() {
            Some(Object::ref_cast(self))
        } else {
            None
        }
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Null => f.write_str("null"),
            Node::Boolean(val) => fmt::Debug::fmt(val, f),
            Node::Integer(val) => fmt::Debug::fmt(val, f),
            Node::Number(val) => fmt::Debug::fmt(val, f),
            Node::String(val) => fmt::Debug::fmt(val.as_str(), f),
            Node::Array(items) => f.debug_list().entries(items.read_recursive().iter()).finish(),
            Node::Object(members) => f
                .debug_map()
                .entries(members.read_recursive().iter().map(|(k, v)| (k.as_str(), v)))
                .finish(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object};

    #[test]
    fn test_default_is_empty_object() {
        let json = Json::default();
        assert!(json.is_object());
        assert_eq!(json.to_object().len(), 0);
        assert!(Json::new().is_object());
    }

    #[test]
    fn test_scalars() {
        let mut var = Json::null();
        assert!(var.is_null());
        assert_eq!(var.get_type(), JsonType::Null);

        var = Json::from(5);
        assert!(var.is_integer());
        assert_eq!(var.to_int(), 5);
        assert_eq!(var.as_number(), None);

        var = Json::from(true);
        assert!(var.is_boolean());
        assert!(var.to_bool());

        var = Json::from(3.0);
        assert!(var.is_number());
        assert_eq!(var.to_number(), 3.0);
        assert_eq!(var.as_int(), None);

        var = Json::from("Hello World");
        assert!(var.is_str());
        assert_eq!(var.to_str(), "Hello World");
    }

    #[test]
    fn test_try_accessors() {
        let json = Json::from("text");
        assert_eq!(
            json.try_int(),
            Err(Error::TypeMismatch {
                expected: JsonType::Integer,
                found: JsonType::String,
            })
        );
        assert!(json.try_bool().unwrap_err().is_type_mismatch());
        assert!(json.try_number().is_err());
        assert_eq!(json.try_str(), Ok("text"));
        assert!(json.try_at(0).unwrap_err().is_type_mismatch());
        assert!(json.try_get("k").unwrap_err().is_type_mismatch());
    }

    #[test]
    #[should_panic(expected = "type mismatch: expected integer, found string")]
    fn test_to_int_on_string_panics() {
        Json::from("5").to_int();
    }

    #[test]
    #[should_panic(expected = "type mismatch: expected integer, found number")]
    fn test_to_int_on_number_panics() {
        Json::from(1.0).to_int();
    }

    #[test]
    #[should_panic(expected = "type mismatch: expected array, found object")]
    fn test_push_on_object_panics() {
        Json::new().push(1);
    }

    #[test]
    #[should_panic(expected = "type mismatch: expected object, found array")]
    fn test_key_access_on_array_panics() {
        Json::from(array![1]).get("a");
    }

    #[test]
    #[should_panic(expected = "index 2 out of range (len: 2)")]
    fn test_at_out_of_range_panics() {
        Json::from(array![1, 2]).at(2);
    }

    #[test]
    #[should_panic(expected = "index 0 out of range (len: 0)")]
    fn test_at_mut_never_grows() {
        let arr = Json::from(array![]);
        *arr.at_mut(0) = Json::from(1);
    }

    #[test]
    fn test_array_ops() {
        let val = Json::from(array![]);
        assert!(val.is_array());
        assert!(!val.to_array().is_null());
        assert!(val.is_empty());

        val.push(true);
        val.push(2);
        assert_eq!(val.len(), 2);
        assert_eq!(val.at(0), true);

        *val.at_mut(0) = Json::from(5);
        assert_eq!(val.at(0), 5);

        let second = Json::from(array![5, 2]);
        assert_eq!(second, val);
        *second.at_mut(1) = Json::from(3);
        assert_ne!(second, val);

        assert_ne!(val, true);
        assert_ne!(val, 5);
        assert_ne!(val, 2.5);
        assert_ne!(val, Json::from("Hello World!"));

        assert_eq!(val.pop(), Some(Json::from(2)));
        assert_eq!(val.len(), 1);
    }

    #[test]
    fn test_at_shares_child() {
        let child = Json::from(array![1]);
        let arr = Json::from(array![]);
        arr.push(child.clone());
        assert!(arr.at(0).ptr_eq(&child));
        arr.at(0).push(2);
        assert_eq!(child.len(), 2);
    }

    #[test]
    fn test_object_ops() {
        let val = Json::new();
        *val.get_or_insert("two") = Json::from(2);
        *val.get_or_insert("truth") = Json::from(false);
        assert_eq!(val.get("two"), 2);
        assert!(!val.get("truth").to_bool());

        let obj = Json::new();
        *obj.get_or_insert("foo") = Json::new();
        *obj.get("foo").get_or_insert("bar") = Json::from("Hello");
        assert_eq!(obj.get("foo").get("bar").to_str(), "Hello");

        let val = Json::from(object! {"foo": "bar"});
        assert!(obj != val);
        assert!(obj != Json::from(array![]));

        assert!(val.contains_key("foo"));
        assert_eq!(val.insert("foo", 1), Some(Json::from("bar")));
        assert_eq!(val.remove("foo"), Some(Json::from(1)));
        assert!(!val.contains_key("foo"));
    }

    #[test]
    fn test_fetch_or_null_does_not_insert() {
        let obj = Json::from(object! {"a": 1});
        assert!(obj.get("missing").is_null());
        assert_eq!(obj.to_object().len(), 1);

        assert!(obj.get_or_insert("missing").is_null());
        assert_eq!(obj.to_object().len(), 2);
        assert!(obj.contains_key("missing"));
    }

    #[test]
    fn test_push_aliasing() {
        let a = Json::from(array![1]);
        let b = a.clone();
        a.push("x");
        assert_eq!(b.len(), 2);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_rebind_breaks_alias() {
        let mut a = Json::from(object! {"k": 1});
        let b = a.clone();
        a = Json::from(5);
        assert!(a.is_integer());
        assert!(b.is_object());
        assert_eq!(b.get("k"), 1);
    }

    #[test]
    fn test_slot_rebind_is_shared() {
        let obj = Json::new();
        let alias = obj.clone();
        let old_child = Json::from(array![1]);
        *obj.get_or_insert("k") = old_child.clone();
        *obj.get_or_insert("k") = Json::from("new");
        assert_eq!(alias.get("k"), "new");
        assert_eq!(old_child.len(), 1);
    }

    #[test]
    fn test_as_views() {
        let arr = Json::from(array![1]);
        assert_eq!(arr.as_array().map(|a| a.len()), Some(1));
        assert!(arr.as_object().is_none());

        let obj = Json::new();
        assert!(obj.as_object().is_some());
        assert!(obj.as_array().is_none());
    }

    #[test]
    fn test_debug() {
        let json = Json::from(object! {"b": [1, 2.5, "s"], "a": null, "c": true});
        assert_eq!(
            format!("{:?}", json),
            r#"{"a": null, "b": [1, 2.5, "s"], "c": true}"#
        );
    }

    #[test]
    fn test_concurrent_reads() {
        let doc = Json::from(object! {"list": [1, 2, 3], "name": "x"});
        let sums: Vec<i32> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let doc = doc.clone();
                    s.spawn(move || {
                        let list = doc.get("list");
                        (0..list.len()).map(|i| list.at(i).to_int()).sum::<i32>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(sums.iter().all(|&s| s == 6));
    }
}
