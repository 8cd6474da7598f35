/// Options applied when a [`Json`](crate::Json) is built through serde.
///
/// # Examples
/// ```
/// use refjson::{DeserializeCfg, JsonSeed};
/// use serde::de::DeserializeSeed;
///
/// let cfg = DeserializeCfg { widen_integers: true };
/// let mut de = serde_json::Deserializer::from_str("[1, 4294967296]");
/// let json = JsonSeed::new(cfg).deserialize(&mut de).unwrap();
/// assert!(json.at(0).is_integer());
/// assert!(json.at(1).is_number());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeserializeCfg {
    /// Store integers outside the 32-bit range as `Number` instead of failing with
    /// [`Error::IntegerOutOfRange`](crate::Error::IntegerOutOfRange).
    pub widen_integers: bool,
}
