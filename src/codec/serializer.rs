use std::{
    any::{Any, TypeId},
    fmt,
};

use ahash::AHashMap;

use super::{Decode, Encode};
use crate::{
    error::{Error, Result},
    value::Json,
};

/// A type-erased converter installed in a [`Serializer`] for one target type.
///
/// `encode` receives the value as `&dyn Any` and `decode` hands back a boxed value; both must
/// be of the type named by [`Codec::target_type`].
pub trait Codec: Send + Sync {
    fn target_type(&self) -> TypeId;

    fn target_name(&self) -> &'static str;

    fn encode(&self, s: &Serializer, value: &dyn Any) -> Result<Json>;

    fn decode(&self, s: &Serializer, data: &Json) -> Result<Box<dyn Any>>;
}

/// Entry point of typed conversion: a registry of [`Codec`]s keyed by target type.
#[derive(Default)]
pub struct Serializer {
    codecs: AHashMap<TypeId, Box<dyn Codec>>,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `codec` for its target type, returning the codec it replaces.
    pub fn add_codec<C: Codec + 'static>(&mut self, codec: C) -> Option<Box<dyn Codec>> {
        let name = codec.target_name();
        let prev = self.codecs.insert(codec.target_type(), Box::new(codec));
        if prev.is_some() {
            tracing::debug!(target_type = name, "codec replaced");
        } else {
            tracing::trace!(target_type = name, "codec registered");
        }
        prev
    }

    /// Returns true if a codec is registered for `T`.
    pub fn has_codec<T: 'static>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    /// Encodes `value` with the codec registered for `T`, or with its [`Encode`] impl.
    pub fn encode<T: Encode + 'static>(&self, value: &T) -> Result<Json> {
        match self.codecs.get(&TypeId::of::<T>()) {
            Some(codec) => {
                tracing::trace!(target_type = codec.target_name(), "encode through codec");
                codec.encode(self, value)
            }
            None => value.encode(self),
        }
    }

    /// Decodes a `T` with the codec registered for it, or with its [`Decode`] impl.
    pub fn decode<T: Decode + 'static>(&self, data: &Json) -> Result<T> {
        match self.codecs.get(&TypeId::of::<T>()) {
            Some(codec) => {
                tracing::trace!(target_type = codec.target_name(), "decode through codec");
                let value = codec.decode(self, data)?;
                value.downcast::<T>().map(|v| *v).map_err(|_| {
                    Error::CorruptedState(format!(
                        "codec for `{}` produced another type",
                        codec.target_name()
                    ))
                })
            }
            None => T::decode(self, data),
        }
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.codecs.values().map(|c| c.target_name()))
            .finish()
    }
}
