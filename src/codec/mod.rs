//! Typed conversion between Rust values and [`Json`](crate::Json).
//!
//! Two layers cooperate:
//!
//! - the [`Encode`] and [`Decode`] traits, implemented for the common scalar and container
//!   types,
//! - a runtime registry held by a [`Serializer`], where a [`Codec`] such as an [`ObjectCodec`]
//!   or a [`VariantCodec`] can be installed for any `'static` type.
//!
//! [`Serializer::encode`] and [`Serializer::decode`] consult the registry first and fall back
//! to the trait impl. A type that is only ever handled through a registered codec implements
//! the traits with their default bodies, which fail with
//! [`Error::NoEncoder`](crate::Error::NoEncoder) and [`Error::NoDecoder`](crate::Error::NoDecoder).
//!
//! # Examples
//! ```
//! use refjson::codec::{Decode, Encode, ObjectCodec, Serializer};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Encode for Point {}
//! impl Decode for Point {}
//!
//! let mut s = Serializer::new();
//! s.add_codec(
//!     ObjectCodec::<Point>::new()
//!         .field("x", |p| &p.x, |p, v| p.x = v)
//!         .field("y", |p| &p.y, |p, v| p.y = v),
//! );
//!
//! let json = s.encode(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(json.get("y"), 2);
//! assert_eq!(s.decode::<Point>(&json).unwrap(), Point { x: 1, y: 2 });
//! ```

mod impls;
mod object;
mod serializer;
mod variant;

use crate::{error::Error, value::Json};

#[doc(inline)]
pub use self::object::ObjectCodec;
#[doc(inline)]
pub use self::serializer::{Codec, Serializer};
#[doc(inline)]
pub use self::variant::VariantCodec;

/// Converts a value into a [`Json`].
pub trait Encode {
    /// Encodes `self`. Nested values should go through [`Serializer::encode`] so registered
    /// codecs apply to them too.
    fn encode(&self, s: &Serializer) -> crate::Result<Json> {
        let _ = s;
        Err(Error::NoEncoder(std::any::type_name::<Self>()))
    }
}

/// Builds a value from a [`Json`].
pub trait Decode: Sized {
    /// Decodes a value. A kind mismatch is reported as
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch), never as a panic.
    fn decode(s: &Serializer, data: &Json) -> crate::Result<Self> {
        let _ = (s, data);
        Err(Error::NoDecoder(std::any::type_name::<Self>()))
    }
}
