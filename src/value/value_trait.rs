use std::fmt;

use crate::error::Error;

/// JsonType is an enum that represents the type of a JSON value.
///
/// The declaration order is significant: it is the primary key of the total order
/// implemented by [`compare`](crate::compare), so `Null < Boolean < Integer < Number < String <
/// Array < Object`.
///
/// # Examples
/// ```
/// use refjson::{Json, JsonType};
///
/// assert_eq!(Json::from(1).get_type(), JsonType::Integer);
/// assert_eq!(Json::from(1.0).get_type(), JsonType::Number);
/// assert!(JsonType::Integer < JsonType::Number);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum JsonType {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Number = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl JsonType {
    /// The position of this type in the fixed declaration order.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human readable name, also used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl TryFrom<u8> for JsonType {
    type Error = Error;

    /// Recovers a type tag from its ordinal. Any value outside the closed set means the
    /// caller holds a tag that was never produced by this crate.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(JsonType::Null),
            1 => Ok(JsonType::Boolean),
            2 => Ok(JsonType::Integer),
            3 => Ok(JsonType::Number),
            4 => Ok(JsonType::String),
            5 => Ok(JsonType::Array),
            6 => Ok(JsonType::Object),
            _ => Err(Error::CorruptedState(format!(
                "invalid json type ordinal {}",
                value
            ))),
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
