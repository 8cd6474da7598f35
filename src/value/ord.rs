//! The total order over JSON values.

use std::cmp::Ordering;

use super::{handle::Json, node::Node};

/// Three-way comparison of two values.
///
/// Values of different kinds order by kind: `null < boolean < integer < number < string <
/// array < object`. Within a kind:
///
/// - booleans order `false < true`,
/// - integers and numbers order numerically,
/// - strings order lexicographically by bytes,
/// - arrays order by length first, then element by element,
/// - objects order by member count first, then member by member in key order, comparing
///   the key before the value.
///
/// An `Integer` never compares equal to a `Number`, whatever their values: `Json::from(1)` sorts
/// before `Json::from(1.0)`. Numbers use IEEE comparison (`-0.0 == 0.0`); a NaN falls back to
/// [`f64::total_cmp`] so the order stays total.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
///
/// use refjson::{array, compare, object, Json};
///
/// assert_eq!(compare(&Json::from(1), &Json::from(1.0)), Ordering::Less);
/// assert_eq!(compare(&array![2].into(), &array![1, 2, 3].into()), Ordering::Less);
/// assert_eq!(
///     compare(&object! {"a": 1}.into(), &object! {"b": 0}.into()),
///     Ordering::Less
/// );
/// ```
pub fn compare(lhs: &Json, rhs: &Json) -> Ordering {
    let (lnode, rnode) = (&**lhs.node(), &**rhs.node());
    match (lnode, rnode) {
        (Node::Null, Node::Null) => Ordering::Equal,
        (Node::Boolean(l), Node::Boolean(r)) => l.cmp(r),
        (Node::Integer(l), Node::Integer(r)) => l.cmp(r),
        (Node::Number(l), Node::Number(r)) => compare_f64(*l, *r),
        (Node::String(l), Node::String(r)) => l.as_str().cmp(r.as_str()),
        (Node::Array(l), Node::Array(r)) => {
            let (l, r) = (l.read_recursive(), r.read_recursive());
            l.len().cmp(&r.len()).then_with(|| {
                l.iter()
                    .zip(r.iter())
                    .map(|(a, b)| compare(a, b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
        }
        (Node::Object(l), Node::Object(r)) => {
            let (l, r) = (l.read_recursive(), r.read_recursive());
            l.len().cmp(&r.len()).then_with(|| {
                l.iter()
                    .zip(r.iter())
                    .map(|((lk, lv), (rk, rv))| {
                        lk.as_str()
                            .cmp(rk.as_str())
                            .then_with(|| compare(lv, rv))
                    })
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
        }
        _ => lnode.get_type().cmp(&rnode.get_type()),
    }
}

#[inline]
fn compare_f64(l: f64, r: f64) -> Ordering {
    l.partial_cmp(&r).unwrap_or_else(|| l.total_cmp(&r))
}

impl PartialOrd for Json {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Json {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        compare(self, other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object, Array};

    fn ladder() -> Vec<Json> {
        vec![
            Json::null(),
            Json::from(false),
            Json::from(true),
            Json::from(-3),
            Json::from(7),
            Json::from(f64::NEG_INFINITY),
            Json::from(-0.5),
            Json::from(2.5),
            Json::from(""),
            Json::from("a"),
            Json::from("ab"),
            Json::from("b"),
            array![].into(),
            array!["z"].into(),
            array![1, 2].into(),
            array![1, 3].into(),
            array![1, 2, 3].into(),
            object! {}.into(),
            object! {"a": 1}.into(),
            object! {"a": 2}.into(),
            object! {"b": 0}.into(),
            object! {"a": 1, "b": 1}.into(),
        ]
    }

    #[test]
    fn test_ladder_is_strictly_increasing() {
        let values = ladder();
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(compare(a, b), i.cmp(&j), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_antisymmetry_and_transitivity() {
        let values = ladder();
        for a in &values {
            for b in &values {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                for c in &values {
                    if compare(a, b).is_le() && compare(b, c).is_le() {
                        assert!(compare(a, c).is_le());
                    }
                }
            }
        }
    }

    #[test]
    fn test_integer_and_number_never_equal() {
        let int = Json::from(1);
        let num = Json::from(1.0);
        assert_eq!(compare(&int, &num), Ordering::Less);
        assert_eq!(compare(&num, &int), Ordering::Greater);
        assert_ne!(int, num);
    }

    #[test]
    fn test_array_length_first() {
        let short: Json = array![9].into();
        let long: Json = array![1, 2, 3].into();
        assert_eq!(compare(&short, &long), Ordering::Less);
        assert!(Json::from(array![1, 2]) < Json::from(array![1, 2, 3]));
    }

    #[test]
    fn test_object_size_then_keys() {
        let empty: Json = object! {}.into();
        let one: Json = object! {"a": 1}.into();
        assert_eq!(compare(&empty, &one), Ordering::Less);

        let a: Json = object! {"a": 100}.into();
        let b: Json = object! {"b": 0}.into();
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_structurally_equal() {
        let a: Json = object! {"x": [1, {"y": null}], "z": "s"}.into();
        let b: Json = object! {"z": "s", "x": [1, {"y": null}]}.into();
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_reflexive() {
        for value in ladder() {
            assert_eq!(compare(&value, &value), Ordering::Equal);
            assert_eq!(value, value.clone());
        }
    }

    #[test]
    fn test_build_through_mutation() {
        let doc = Json::new();
        *doc.get_or_insert("name") = Json::from("x");
        *doc.get_or_insert("tags") = Array::new().into();
        doc.get("tags").push("a");
        doc.get("tags").push("b");
        *doc.get_or_insert("count") = Json::from(2);

        assert_eq!(doc.get("tags").len(), 2);
        assert_eq!(doc.get("tags").at(0).to_str(), "a");
        assert_eq!(doc.get("count").to_int(), 2);

        let other: Json = object! {"name": "x", "tags": ["a", "b"], "count": 2}.into();
        assert_eq!(compare(&doc, &other), Ordering::Equal);
        assert_eq!(doc, other);
        assert!(!doc.ptr_eq(&other));
    }

    #[test]
    fn test_float_edges() {
        assert_eq!(
            compare(&Json::from(-0.0), &Json::from(0.0)),
            Ordering::Equal
        );
        let nan = Json::from(f64::NAN);
        assert_eq!(compare(&nan, &nan), Ordering::Equal);
        assert_eq!(compare(&Json::from(f64::INFINITY), &nan), Ordering::Less);
    }

    #[test]
    fn test_self_compare_does_not_deadlock() {
        let arr: Json = array![1, [2]].into();
        assert_eq!(compare(&arr, &arr), Ordering::Equal);
    }

    #[test]
    fn test_sort_and_dedup() {
        let mut values: Vec<Json> = vec![
            Json::from("b"),
            Json::from(2),
            Json::null(),
            Json::from("b"),
            Json::from(2.0),
            Json::from(2),
        ];
        values.sort();
        values.dedup();
        assert_eq!(
            values,
            vec![
                Json::null(),
                Json::from(2),
                Json::from(2.0),
                Json::from("b")
            ]
        );
    }
}
