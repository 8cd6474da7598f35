//! Errors raised by the value model and the layers built on it.
//!
//! Accessors such as [`Json::to_int`](crate::Json::to_int) treat a mismatch as a broken
//! precondition and panic with the `Display` text of the matching [`Error`]. Their `try_*`
//! twins hand the same variant back as an `Err` instead.

use core::fmt::Display;
use core::result;

use serde::{de, ser};
use thiserror::Error;

use crate::value::JsonType;

/// Alias for a `Result` with the error type `refjson::Error`.
pub type Result<T> = result::Result<T, Error>;

/// This type represents all possible errors of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An accessor was invoked on a handle whose node has another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: JsonType, found: JsonType },

    /// An array position outside `[0, len)`.
    #[error("index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// An internal invariant no longer holds.
    #[error("corrupted state: {0}")]
    CorruptedState(String),

    /// Neither a registered codec nor an `Encode` impl can encode the type.
    #[error("no encoder for `{0}`")]
    NoEncoder(&'static str),

    /// Neither a registered codec nor a `Decode` impl can decode the type.
    #[error("no decoder for `{0}`")]
    NoDecoder(&'static str),

    /// A required member of an object codec is absent or null.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A variant codec found no alternative registered under the decoded index.
    #[error("unknown variant index {0}")]
    UnknownVariant(i32),

    /// A variant codec has no alternative whose extractor matches the value.
    #[error("no alternative of `{0}` matches the value")]
    UnmatchedVariant(&'static str),

    /// An integer that does not fit in a 32-bit JSON integer.
    #[error("integer {0} out of range for a json integer")]
    IntegerOutOfRange(i128),

    /// Catchall for messages raised through serde.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Returns true if this error reports a kind mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Returns true if this error reports an array position out of bounds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

/// Surfaces a precondition violation. Never returns.
#[cold]
#[track_caller]
pub(crate) fn violated(err: Error) -> ! {
    panic!("{}", err)
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        Error::Message(msg.to_string())
    }

    #[cold]
    fn invalid_type(unexp: de::Unexpected, exp: &dyn de::Expected) -> Self {
        if let de::Unexpected::Unit = unexp {
            Error::Message(format!("invalid type: null, expected {}", exp))
        } else {
            Error::Message(format!("invalid type: {}, expected {}", unexp, exp))
        }
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        Error::Message(msg.to_string())
    }
}
