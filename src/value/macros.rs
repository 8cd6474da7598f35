// The file is copied from `serde_json` and modified.

/// Construct a `refjson::Json` from a JSON literal.
///
/// ```
/// # use refjson::json;
/// #
/// let value = json!({
///     "code": 200,
///     "success": true,
///     "payload": {
///         "features": [
///             "shared",
///             "ordered"
///         ],
///         "homepage": null
///     }
/// });
/// assert_eq!(value.get("code"), 200);
/// ```
///
/// Variables or expressions can be interpolated into the literal. Any type interpolated into an
/// array element or object value must implement `Into<Json>`, while any type interpolated into an
/// object key must implement `AsRef<str>`.
///
/// ```
/// # use refjson::json;
/// #
/// let code = 200;
/// let features = vec!["shared", "ordered"];
///
/// let value = json!({
///     "code": code,
///     "success": code == 200,
///     "payload": {
///         "features": features.clone(),
///         features[0]: features[1]
///     }
/// });
/// assert_eq!(value.get("payload").get("features").at(0), "shared");
/// assert_eq!(value.get("payload").get("shared"), "ordered");
/// ```
///
/// Trailing commas are allowed inside both arrays and objects.
///
/// ```
/// # use refjson::json;
/// #
/// let value = json!(["notice", "the", "trailing", "comma -->",]);
/// assert_eq!(value.len(), 4);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! json {
    // Hide distracting implementation details from the generated rustdoc.
    ($($json:tt)+) => {
        json_internal!($($json)+)
    };
}

/// Construct a `refjson::Array` from a JSON array literal.
///
/// ```
/// use refjson::{array, json};
///
/// let local = "foo";
/// let array = array![null, local, true, false, 123, "hello", 1 == 2, array![1, 2, 3], {"key": "value"}];
/// assert!(array.at(0).is_null());
/// assert_eq!(array.at(1).as_str(), Some("foo"));
/// assert_eq!(array.at(array.len() - 2).at(0).as_int(), Some(1));
/// assert_eq!(array.at(array.len() - 1), json!({"key": "value"}));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! array {
    () => {
        $crate::value::Array::new()
    };

    ($($tt:tt)+) => {
        $crate::value::Array::from(json_internal!([$($tt)+]))
    };
}

/// Construct a `refjson::Object` from a JSON object literal.
///
/// ```
/// # use refjson::object;
/// #
/// let code = 200;
/// let features = vec!["shared", "ordered"];
///
/// let object = object! {
///     "code": code,
///     "success": code == 200,
///     "payload": {
///         "features": features.clone(),
///         features[0]: features[1]
///     }
/// };
/// assert_eq!(object.get("code"), 200);
/// assert_eq!(object.get("payload").get("features").at(0), "shared");
/// ```
#[macro_export(local_inner_macros)]
macro_rules! object {
    () => {
        $crate::value::Object::new()
    };

    ($($tt:tt)+) => {
        $crate::value::Object::from(json_internal!({$($tt)+}))
    };
}

#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! json_internal {
    //////////////////////////////////////////////////////////////////////////
    // TT muncher for parsing the inside of an array [...]. Produces a list
    // of element expressions.
    //
    // Must be invoked as: json_internal!(@array [] $($tt)*)
    //////////////////////////////////////////////////////////////////////////

    // Done with trailing comma.
    (@array [$($elems:expr,)*]) => {
        json_internal_array![$($elems)*]
    };

    // Done without trailing comma.
    (@array [$($elems:expr),*]) => {
        json_internal_array![$($elems)*]
    };

    // Next element is `null`.
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!(null)] $($rest)*)
    };

    // Next element is `true`.
    (@array [$($elems:expr,)*] true $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!(true)] $($rest)*)
    };

    // Next element is `false`.
    (@array [$($elems:expr,)*] false $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!(false)] $($rest)*)
    };

    // Next element is an array.
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!([$($array)*])] $($rest)*)
    };

    // Next element is a map.
    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!({$($map)*})] $($rest)*)
    };

    // Next element is an expression followed by comma.
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        json_internal!(@array [$($elems,)* json_internal!($next),] $($rest)*)
    };

    // Last element is an expression with no trailing comma.
    (@array [$($elems:expr,)*] $last:expr) => {
        json_internal!(@array [$($elems,)* json_internal!($last)])
    };

    // Comma after the most recent element.
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        json_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Unexpected token after most recent element.
    (@array [$($elems:expr),*] $unexpected:tt $($rest:tt)*) => {
        json_unexpected!($unexpected)
    };

    //////////////////////////////////////////////////////////////////////////
    // TT muncher for parsing the inside of an object {...}. Each entry is
    // inserted into the given object variable.
    //
    // Must be invoked as: json_internal!(@object $object () ($($tt)*) ($($tt)*))
    //
    // Two copies of the input tokens are kept so that one copy is matched on
    // and errors are triggered on the other.
    //////////////////////////////////////////////////////////////////////////

    // Done.
    (@object $object:ident () () ()) => {};

    // Insert the current entry followed by trailing comma.
    (@object $object:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        let _ = $object.insert(::core::convert::AsRef::<str>::as_ref(&($($key)+)), $value);
        json_internal!(@object $object () ($($rest)*) ($($rest)*));
    };

    // Current entry followed by unexpected token.
    (@object $object:ident [$($key:tt)+] ($value:expr) $unexpected:tt $($rest:tt)*) => {
        json_unexpected!($unexpected);
    };

    // Insert the last entry without trailing comma.
    (@object $object:ident [$($key:tt)+] ($value:expr)) => {
        let _ = $object.insert(::core::convert::AsRef::<str>::as_ref(&($($key)+)), $value);
    };

    // Next value is `null`.
    (@object $object:ident ($($key:tt)+) (: null $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!(null)) $($rest)*);
    };

    // Next value is `true`.
    (@object $object:ident ($($key:tt)+) (: true $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!(true)) $($rest)*);
    };

    // Next value is `false`.
    (@object $object:ident ($($key:tt)+) (: false $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!(false)) $($rest)*);
    };

    // Next value is an array.
    (@object $object:ident ($($key:tt)+) (: [$($array:tt)*] $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!([$($array)*])) $($rest)*);
    };

    // Next value is a map.
    (@object $object:ident ($($key:tt)+) (: {$($map:tt)*} $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!({$($map)*})) $($rest)*);
    };

    // Next value is an expression followed by comma.
    (@object $object:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!($value)) , $($rest)*);
    };

    // Last value is an expression with no trailing comma.
    (@object $object:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        json_internal!(@object $object [$($key)+] (json_internal!($value)));
    };

    // Missing value for last entry. Trigger a reasonable error message.
    (@object $object:ident ($($key:tt)+) (:) $copy:tt) => {
        // "unexpected end of macro invocation"
        json_internal!();
    };

    // Missing colon and value for last entry. Trigger a reasonable error
    // message.
    (@object $object:ident ($($key:tt)+) () $copy:tt) => {
        // "unexpected end of macro invocation"
        json_internal!();
    };

    // Misplaced colon. Trigger a reasonable error message.
    (@object $object:ident () (: $($rest:tt)*) ($colon:tt $($copy:tt)*)) => {
        // Takes no arguments so "no rules expected the token `:`".
        json_unexpected!($colon);
    };

    // Found a comma inside a key. Trigger a reasonable error message.
    (@object $object:ident ($($key:tt)*) (, $($rest:tt)*) ($comma:tt $($copy:tt)*)) => {
        // Takes no arguments so "no rules expected the token `,`".
        json_unexpected!($comma);
    };

    // Key is fully parenthesized. This avoids clippy double_parens false
    // positives because the parenthesization may be necessary here.
    (@object $object:ident () (($key:expr) : $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object ($key) (: $($rest)*) (: $($rest)*));
    };

    // Refuse to absorb colon token into key expression.
    (@object $object:ident ($($key:tt)*) (: $($unexpected:tt)+) $copy:tt) => {
        json_expect_expr_comma!($($unexpected)+);
    };

    // Munch a token into the current key.
    (@object $object:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        json_internal!(@object $object ($($key)* $tt) ($($rest)*) ($($rest)*));
    };

    //////////////////////////////////////////////////////////////////////////
    // The main implementation.
    //
    // Must be invoked as: json_internal!($($json)+)
    //////////////////////////////////////////////////////////////////////////

    (null) => {
        $crate::Json::null()
    };

    (true) => {
        $crate::Json::from(true)
    };

    (false) => {
        $crate::Json::from(false)
    };

    ([]) => {
        $crate::value::Array::new().into_value()
    };

    ([ $($tt:tt)+ ]) => {
        json_internal!(@array [] $($tt)+)
    };

    ({}) => {
        $crate::Json::new()
    };

    ({ $($tt:tt)+ }) => {
        {
            let obj_value = $crate::Json::new();
            json_internal!(@object obj_value () ($($tt)+) ($($tt)+));
            obj_value
        }
    };

    // Anything convertible into a handle: numbers, strings, views, variables etc.
    // Must be below every other rule.
    ($other:expr) => {
        $crate::Json::from($other)
    };
}

// The json_internal macro above cannot invoke vec directly because it uses
// local_inner_macros. Elements are pushed one by one here instead.
#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! json_internal_array {
    ($($content:tt)*) => {
        {
            let arr_value = $crate::value::Array::new();
            $(
                arr_value.push($content);
            )*
            arr_value.into_value()
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! json_unexpected {
    () => {};
}

#[macro_export]
#[doc(hidden)]
macro_rules! json_expect_expr_comma {
    ($e:expr , $($tt:tt)*) => {};
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use crate::{Json, JsonType};

    #[test]
    fn test_json_macro() {
        assert!(json!(true).to_bool());
        assert!(!json!(false).to_bool());
        assert!(json!(null).is_null());
        assert!(json!("123").is_str());
        assert!(json!(vec![1]).is_array());
        assert!(json!({}).is_object());
        assert!(json!([]).is_array());
        assert_eq!(json!(vec![1, 2, 3][2]).as_int(), Some(3));

        let buf = json!([1, 2, 3]);
        let arr = json!([true, false, null, 1, 2, 3, "hi", 1 == 2, buf.at(1) == buf.at(2)]);
        assert!(arr.is_array());
        assert!(!arr.at(arr.len() - 1).to_bool());

        let key = "i";
        let key2 = String::from("\"i\"");
        let obj = json!({
            "a": true,
            "b": false,
            "c": null,
            "array": vec![1, 2, 3],
            "map": ({
                let mut map = BTreeMap::new();
                map.insert("a", "b");
                map
            }),
            "f": 2.333,
            "g": "hi",
            "h": 1 == 2,
            key: {
                key2: [buf.at(1) == buf.at(2), 1],
            },
        });
        assert!(obj.is_object());
        assert!(obj.get("a").to_bool());
        assert_eq!(obj.get("array").at(0), 1);
        assert_eq!(obj.get("map").get("a"), "b");
        assert_eq!(obj.get(key).get(&key2).at(1), 1);

        let obj = json!({
            "a": { "b" : {"c": [[[]], {}, {}]} }
        });
        assert!(obj.get("a").get("b").get("c").at(0).at(0).is_array());
        assert!(obj.get("a").get("b").get("c").at(1).is_object());
    }

    #[test]
    fn test_macro_literals_use_shared_singletons() {
        assert!(json!(null).ptr_eq(&Json::null()));
        assert!(json!(true).ptr_eq(&Json::from(true)));
        let arr = array![null, false];
        assert!(arr.at(0).ptr_eq(&Json::null()));
        assert!(arr.at(1).ptr_eq(&Json::from(false)));
    }

    #[test]
    fn test_array_macro() {
        let arr = array![];
        assert!(arr.is_array());
        assert!(arr.is_empty());

        let arr = array![true, false, null, 1, 2, 3, "hi", 1 == 2];
        assert!(!arr.at(arr.len() - 1).to_bool());
        assert_eq!(arr.at(5).get_type(), JsonType::Integer);

        let buf = array![1, 2, 3];
        let arr = array![true, false, null, 1, 2, 3, "hi", 1 == 2, buf.at(1) == buf.at(2)];
        assert!(!arr.at(arr.len() - 1).to_bool());

        let nested = array![buf.clone()];
        assert!(nested.at(0).ptr_eq(&buf));
    }

    #[test]
    fn test_object_macro() {
        let obj = object! {};
        assert!(obj.is_object());
        assert!(obj.is_empty());

        let obj = object! {
            "a": true,
            "b": false,
            "c": null,
            "d": 1,
            "e": 2.5,
            "g": "hi",
            "h": 1 == 2,
        };
        assert!(obj.get("a").to_bool());
        assert_eq!(obj.get("e"), 2.5);
        assert_eq!(obj.len(), 7);

        let buf = array![1, 2, 3];
        let obj = object! {
            "i": {
                "i": [buf.at(1) == buf.at(2), 1],
            },
            ("computed".to_string()): [],
        };
        assert!(!obj.get("i").get("i").at(0).to_bool());
        assert!(obj.get("computed").is_array());
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let obj = object! {"k": 1, "k": 2};
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("k"), 2);
    }
}
