use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
    marker::PhantomData,
};

use super::{Codec, Decode, Encode, Serializer};
use crate::{
    error::{Error, Result},
    value::Json,
};

/// One alternative of a [`VariantCodec`].
trait Alternative<T>: Send + Sync {
    /// Returns `None` when `value` is not this alternative.
    fn encode(&self, s: &Serializer, value: &T) -> Option<Result<Json>>;

    fn decode(&self, s: &Serializer, data: &Json) -> Result<T>;
}

struct Case<E, W, M> {
    extract: E,
    wrap: W,
    _marker: PhantomData<fn() -> M>,
}

impl<T, M, E, W> Alternative<T> for Case<E, W, M>
where
    M: Encode + Decode + 'static,
    E: Fn(&T) -> Option<&M> + Send + Sync,
    W: Fn(M) -> T + Send + Sync,
{
    fn encode(&self, s: &Serializer, value: &T) -> Option<Result<Json>> {
        (self.extract)(value).map(|payload| s.encode(payload))
    }

    fn decode(&self, s: &Serializer, data: &Json) -> Result<T> {
        s.decode::<M>(data).map(&self.wrap)
    }
}

/// A [`Codec`] for a sum type, typically an enum whose variants each carry one payload.
///
/// Every alternative is registered under an integer index with a closure that extracts its
/// payload and one that wraps a payload back into `T`. A value encodes as
/// `{"index": <index>, "value": <payload>}`, using the first alternative, in index order,
/// whose extractor matches.
///
/// Decoding fails with [`Error::MissingField`] when `index` is absent or `null`, and with
/// [`Error::UnknownVariant`] when no alternative is registered under it. Encoding a value
/// no extractor matches fails with [`Error::UnmatchedVariant`].
///
/// # Examples
/// ```
/// use refjson::{
///     codec::{Decode, Encode, Serializer, VariantCodec},
///     json, Error,
/// };
///
/// #[derive(Debug, PartialEq)]
/// enum Id {
///     Num(i32),
///     Name(String),
/// }
///
/// impl Encode for Id {}
/// impl Decode for Id {}
///
/// let mut s = Serializer::new();
/// s.add_codec(
///     VariantCodec::<Id>::new()
///         .alternative(0, |id| match id { Id::Num(n) => Some(n), _ => None }, Id::Num)
///         .alternative(1, |id| match id { Id::Name(n) => Some(n), _ => None }, Id::Name),
/// );
///
/// let json = s.encode(&Id::Name("ada".into())).unwrap();
/// assert_eq!(json, json!({"index": 1, "value": "ada"}));
/// assert_eq!(s.decode::<Id>(&json).unwrap(), Id::Name("ada".into()));
///
/// let err = s.decode::<Id>(&json!({"index": 5, "value": 1})).unwrap_err();
/// assert_eq!(err, Error::UnknownVariant(5));
/// ```
pub struct VariantCodec<T> {
    alternatives: BTreeMap<i32, Box<dyn Alternative<T>>>,
}

impl<T> Default for VariantCodec<T> {
    fn default() -> Self {
        Self {
            alternatives: BTreeMap::new(),
        }
    }
}

impl<T> VariantCodec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the alternative stored under `index`. An index registered twice keeps the
    /// last closures.
    pub fn alternative<M, E, W>(mut self, index: i32, extract: E, wrap: W) -> Self
    where
        M: Encode + Decode + 'static,
        E: Fn(&T) -> Option<&M> + Send + Sync + 'static,
        W: Fn(M) -> T + Send + Sync + 'static,
        T: 'static,
    {
        let case = Case {
            extract,
            wrap,
            _marker: PhantomData,
        };
        self.alternatives.insert(index, Box::new(case));
        self
    }

    /// Registered indices, ascending.
    pub fn indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.alternatives.keys().copied()
    }
}

impl<T: 'static> Codec for VariantCodec<T> {
    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn target_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn encode(&self, s: &Serializer, value: &dyn Any) -> Result<Json> {
        let value = value.downcast_ref::<T>().ok_or_else(|| {
            Error::CorruptedState(format!("variant codec expected `{}`", self.target_name()))
        })?;
        for (&index, alternative) in &self.alternatives {
            if let Some(payload) = alternative.encode(s, value) {
                let result = Json::new();
                result.insert("index", index);
                result.insert("value", payload?);
                return Ok(result);
            }
        }
        Err(Error::UnmatchedVariant(self.target_name()))
    }

    fn decode(&self, s: &Serializer, data: &Json) -> Result<Box<dyn Any>> {
        let index = data.try_get("index")?;
        if index.is_null() {
            return Err(Error::MissingField("index".to_string()));
        }
        let index = index.try_int()?;
        let Some(alternative) = self.alternatives.get(&index) else {
            tracing::debug!(target_type = self.target_name(), index, "unknown variant index");
            return Err(Error::UnknownVariant(index));
        };
        let value = alternative.decode(s, &data.try_get("value")?)?;
        Ok(Box::new(value))
    }
}
