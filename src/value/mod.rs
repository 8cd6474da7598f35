//! A dynamic, reference-counted type representing any valid JSON value.

pub mod array;
pub(crate) mod de;
mod from;
mod guard;
mod handle;
pub(crate) mod node;
pub mod object;
mod ord;
mod shared;
mod tryfrom;
#[macro_use]
mod macros;
mod partial_eq;
mod ser;
mod value_trait;

#[doc(inline)]
pub use self::array::Array;
#[doc(inline)]
pub use self::de::JsonSeed;
#[doc(inline)]
pub use self::guard::{DataMut, JsonMut};
#[doc(inline)]
pub use self::handle::Json;
#[doc(inline)]
pub use self::object::Object;
#[doc(inline)]
pub use self::ord::compare;
#[doc(inline)]
pub use self::value_trait::JsonType;
