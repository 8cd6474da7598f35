use std::ops::Deref;

use ref_cast::RefCast;

use super::{guard::DataMut, handle::Json, node::Node};

/// Array is a [`Json`] handle known to reference an array node.
///
/// Every `Json` operation is available through `Deref`. In addition the view exposes the
/// backing `Vec<Json>` through [`Array::data`] and [`Array::data_mut`] for bulk access.
/// Both work on a copy of the element handles, so no lock is held while the caller uses
/// them.
///
/// Converting a handle of any other kind into an `Array` does not fail: the view is backed
/// by the shared `null` node instead. Re-check [`Json::is_array`] when the source kind was
/// not known.
///
/// # Example
/// ```
/// use refjson::{array, Array, Json};
///
/// let arr = array![1, 2, 3];
/// let sum: i32 = arr.data().iter().map(|v| v.to_int()).sum();
/// assert_eq!(sum, 6);
///
/// let degraded = Array::from(Json::from("text"));
/// assert!(degraded.is_null());
/// assert!(!degraded.is_array());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, RefCast)]
#[repr(transparent)]
pub struct Array(pub(crate) Json);

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl Array {
    /// Constructs a new, empty `Array`.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Array` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Json::from_node(Node::new_array(Vec::with_capacity(
            capacity,
        ))))
    }

    /// Returns the inner handle.
    #[inline]
    pub fn into_value(self) -> Json {
        self.0
    }

    /// Returns the elements. Each one shares its node with the stored child.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    #[track_caller]
    pub fn data(&self) -> Vec<Json> {
        self.0.expect_array().read_recursive().clone()
    }

    /// Returns an editable copy of the elements that replaces the backing sequence when it
    /// is dropped. The result is then visible through every alias.
    ///
    /// # Panics
    ///
    /// Panics if the view degraded to `null`.
    ///
    /// # Examples
    /// ```
    /// use refjson::{array, Json};
    ///
    /// let arr = array![3, 1, 2];
    /// let alias = Json::from(arr.clone());
    /// arr.data_mut().sort();
    /// assert_eq!(alias, Json::from(array![1, 2, 3]));
    /// ```
    #[track_caller]
    pub fn data_mut(&self) -> DataMut<'_, Vec<Json>> {
        DataMut::new(self.0.expect_array())
    }
}

impl Deref for Array {
    type Target = Json;

    #[inline]
    fn deref(&self) -> &Json {
        &self.0
    }
}

impl AsRef<Json> for Array {
    #[inline]
    fn as_ref(&self) -> &Json {
        &self.0
    }
}

impl From<Json> for Array {
    /// Wraps `value` if it is an array, otherwise yields a view backed by `null`.
    fn from(value: Json) -> Self {
        if value.is_array() {
            Array(value)
        } else {
            tracing::debug!(found = %value.get_type(), "array view degraded to null");
            Array(Json::null())
        }
    }
}

impl From<Array> for Json {
    #[inline]
    fn from(val: Array) -> Self {
        val.0
    }
}

impl std::fmt::Debug for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: Into<Json>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<Json> = iter.into_iter().map(Into::into).collect();
        Array(Json::from_node(Node::new_array(items)))
    }
}

impl<T: Into<Json>> Extend<T> for Array {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<Json> = iter.into_iter().map(Into::into).collect();
        self.0.expect_array().write().extend(items);
    }
}
