use std::{borrow::Cow, collections::BTreeMap};

use faststr::FastStr;

use super::{array::Array, handle::Json, node::Node, object::Object, shared};

impl From<bool> for Json {
    /// Convert `bool` to a boolean `Json`. Both values come from the shared cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use refjson::Json;
    ///
    /// let x: Json = true.into();
    /// assert!(x.to_bool());
    /// assert!(x.ptr_eq(&Json::from(true)));
    /// ```
    #[inline]
    fn from(val: bool) -> Self {
        Json::from_shared(shared::boolean(val))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Json {
                #[inline]
                fn from(val: $ty) -> Self {
                    Json::from_node(Node::Integer(i32::from(val)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, u8, u16);

impl From<f64> for Json {
    /// Convert `f64` to a `Number`. The value is stored as is, non-finite values included.
    #[inline]
    fn from(val: f64) -> Self {
        Json::from_node(Node::Number(val))
    }
}

impl From<f32> for Json {
    #[inline]
    fn from(val: f32) -> Self {
        Json::from_node(Node::Number(f64::from(val)))
    }
}

impl From<&str> for Json {
    /// Convert a string slice to a string `Json`. The text is copied.
    #[inline]
    fn from(val: &str) -> Self {
        Json::from_node(Node::String(FastStr::new(val)))
    }
}

impl From<String> for Json {
    #[inline]
    fn from(val: String) -> Self {
        Json::from_node(Node::String(FastStr::from_string(val)))
    }
}

impl From<&String> for Json {
    #[inline]
    fn from(val: &String) -> Self {
        Json::from(val.as_str())
    }
}

impl From<FastStr> for Json {
    #[inline]
    fn from(val: FastStr) -> Self {
        Json::from_node(Node::String(val))
    }
}

impl<'a> From<Cow<'a, str>> for Json {
    /// Convert copy-on-write string to a string `Json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    ///
    /// use refjson::Json;
    ///
    /// let s1: Cow<str> = Cow::Borrowed("hello");
    /// let s2: Cow<str> = Cow::Owned("hello".to_string());
    ///
    /// assert_eq!(Json::from(s1), Json::from(s2));
    /// ```
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        match value {
            Cow::Borrowed(s) => Json::from(s),
            Cow::Owned(s) => Json::from(s),
        }
    }
}

impl From<char> for Json {
    #[inline]
    fn from(val: char) -> Self {
        Json::from(val.to_string())
    }
}

impl From<()> for Json {
    /// Convert `()` to the shared `null`.
    #[inline]
    fn from(_: ()) -> Self {
        Json::null()
    }
}

impl From<&Json> for Json {
    /// Clones the handle. The result aliases `val`.
    #[inline]
    fn from(val: &Json) -> Self {
        val.clone()
    }
}

impl<T> From<Option<T>> for Json
where
    T: Into<Json>,
{
    /// Convert `Option` to a `Json`, `None` becoming `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use refjson::Json;
    ///
    /// assert_eq!(Json::from(Some(123)), 123);
    /// assert!(Json::from(None::<i32>).is_null());
    /// ```
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Json::null(),
            Some(value) => value.into(),
        }
    }
}

impl<T: Into<Json>> From<Vec<T>> for Json {
    /// Convert a `Vec` to an array `Json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use refjson::{array, Json};
    ///
    /// assert_eq!(Json::from(vec!["hi", "hello"]), array!["hi", "hello"]);
    /// assert_eq!(Json::from(Vec::<i32>::new()).len(), 0);
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        val.into_iter().collect::<Array>().into()
    }
}

impl<T: Clone + Into<Json>> From<&[T]> for Json {
    #[inline]
    fn from(val: &[T]) -> Self {
        val.iter().cloned().collect::<Array>().into()
    }
}

impl<K: AsRef<str>, V: Into<Json>> From<BTreeMap<K, V>> for Json {
    /// Convert a map to an object `Json`.
    #[inline]
    fn from(val: BTreeMap<K, V>) -> Self {
        val.into_iter().collect::<Object>().into()
    }
}

impl<T: Into<Json>> FromIterator<T> for Json {
    /// Create an array `Json` by collecting an iterator of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use refjson::Json;
    ///
    /// let x: Json = std::iter::repeat(6).take(3).collect();
    /// assert_eq!(x, Json::from(vec![6, 6, 6]));
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Array>().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::JsonType;

    #[test]
    fn test_from_scalars() {
        assert_eq!(Json::from(7u8).get_type(), JsonType::Integer);
        assert_eq!(Json::from(-7i16).to_int(), -7);
        assert_eq!(Json::from(1.5f32).to_number(), 1.5);
        assert_eq!(Json::from('c').to_str(), "c");
        assert_eq!(Json::from(String::from("s")), "s");
        assert_eq!(Json::from(FastStr::from_static_str("fs")), "fs");
        assert!(Json::from(()).is_null());
    }

    #[test]
    fn test_null_and_bools_are_cached() {
        assert!(Json::null().ptr_eq(&Json::from(())));
        assert!(Json::from(false).ptr_eq(&Json::from(false)));
        assert!(!Json::from(1).ptr_eq(&Json::from(1)));
    }

    #[test]
    fn test_from_ref_aliases() {
        let arr = Json::from(vec![1]);
        let alias = Json::from(&arr);
        assert!(alias.ptr_eq(&arr));
    }

    #[test]
    fn test_from_map() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        let json = Json::from(map);
        assert!(json.is_object());
        assert_eq!(json.get("a"), 1);
        assert_eq!(json.to_object().len(), 2);
    }

    #[test]
    fn test_from_slice() {
        let json = Json::from(&["x", "y"][..]);
        assert_eq!(json.len(), 2);
        assert_eq!(json.at(1), "y");
    }
}
