use std::{collections::BTreeMap, fmt};

use faststr::FastStr;
use serde::de::{self, Deserialize, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{array::Array, handle::Json, node::Node, object::Object};
use crate::{config::DeserializeCfg, error::Error};

/// A [`DeserializeSeed`] that builds a [`Json`] under a [`DeserializeCfg`].
///
/// `Json::deserialize` is the same as `JsonSeed::default()`: integers outside the 32-bit range
/// are rejected.
///
/// # Examples
/// ```
/// use refjson::{DeserializeCfg, JsonSeed};
/// use serde::de::DeserializeSeed;
///
/// let mut de = serde_json::Deserializer::from_str("5000000000");
/// assert!(JsonSeed::default().deserialize(&mut de).is_err());
///
/// let mut de = serde_json::Deserializer::from_str("5000000000");
/// let cfg = DeserializeCfg { widen_integers: true };
/// assert_eq!(JsonSeed::new(cfg).deserialize(&mut de).unwrap(), 5e9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSeed {
    cfg: DeserializeCfg,
}

impl JsonSeed {
    pub fn new(cfg: DeserializeCfg) -> Self {
        Self { cfg }
    }
}

impl<'de> DeserializeSeed<'de> for JsonSeed {
    type Value = Json;

    fn deserialize<D>(self, deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonVisitor { cfg: self.cfg })
    }
}

struct JsonVisitor {
    cfg: DeserializeCfg,
}

impl JsonVisitor {
    fn wide_integer<E: de::Error>(&self, val: i128) -> Result<Json, E> {
        if let Ok(v) = i32::try_from(val) {
            return Ok(Json::from(v));
        }
        if self.cfg.widen_integers {
            tracing::trace!(value = %val, "integer widened to number");
            Ok(Json::from_node(Node::Number(val as f64)))
        } else {
            Err(E::custom(Error::IntegerOutOfRange(val)))
        }
    }
}

impl<'de> Visitor<'de> for JsonVisitor {
    type Value = Json;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    #[inline]
    fn visit_bool<E>(self, value: bool) -> Result<Json, E> {
        Ok(Json::from(value))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Json, E> {
        self.wide_integer(i128::from(value))
    }

    #[inline]
    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Json, E> {
        self.wide_integer(value)
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Json, E> {
        self.wide_integer(i128::from(value))
    }

    #[inline]
    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Json, E> {
        match i128::try_from(value) {
            Ok(v) => self.wide_integer(v),
            Err(_) if self.cfg.widen_integers => Ok(Json::from(value as f64)),
            Err(_) => Err(E::custom(format_args!(
                "integer {} out of range for a json integer",
                value
            ))),
        }
    }

    #[inline]
    fn visit_f64<E>(self, value: f64) -> Result<Json, E> {
        Ok(Json::from(value))
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<Json, E> {
        Ok(Json::from(value))
    }

    #[inline]
    fn visit_string<E>(self, value: String) -> Result<Json, E> {
        Ok(Json::from(value))
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Json, E> {
        Ok(Json::null())
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonSeed { cfg: self.cfg }.deserialize(deserializer)
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Json, E> {
        Ok(Json::null())
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Json, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let seed = JsonSeed { cfg: self.cfg };
        let mut items = Vec::with_capacity(visitor.size_hint().unwrap_or(0).min(4096));
        while let Some(elem) = visitor.next_element_seed(seed)? {
            items.push(elem);
        }
        Ok(Json::from_node(Node::new_array(items)))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Json, V::Error>
    where
        V: MapAccess<'de>,
    {
        let seed = JsonSeed { cfg: self.cfg };
        let mut members = BTreeMap::new();
        while let Some(key) = visitor.next_key::<FastStr>()? {
            let value = visitor.next_value_seed(seed)?;
            members.insert(key, value);
        }
        Ok(Json::from_node(Node::new_object(members)))
    }
}

impl<'de> Deserialize<'de> for Json {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonSeed::default().deserialize(deserializer)
    }
}

fn unexpected(value: &Json) -> de::Unexpected<'_> {
    match &**value.node() {
        Node::Null => de::Unexpected::Unit,
        Node::Boolean(b) => de::Unexpected::Bool(*b),
        Node::Integer(i) => de::Unexpected::Signed(i64::from(*i)),
        Node::Number(n) => de::Unexpected::Float(*n),
        Node::String(s) => de::Unexpected::Str(s.as_str()),
        Node::Array(_) => de::Unexpected::Seq,
        Node::Object(_) => de::Unexpected::Map,
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D>(deserializer: D) -> Result<Array, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        if value.is_array() {
            Ok(Array(value))
        } else {
            Err(de::Error::invalid_type(unexpected(&value), &"an array"))
        }
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D>(deserializer: D) -> Result<Object, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        if value.is_object() {
            Ok(Object(value))
        } else {
            Err(de::Error::invalid_type(unexpected(&value), &"an object"))
        }
    }
}
