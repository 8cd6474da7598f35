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

/// One named member of an [`ObjectCodec`].
trait Field<T>: Send + Sync {
    fn encode(&self, s: &Serializer, object: &T) -> Result<Json>;

    fn decode(&self, s: &Serializer, object: &mut T, data: &Json) -> Result<()>;
}

struct Accessor<G, S, M> {
    getter: G,
    setter: S,
    _marker: PhantomData<fn() -> M>,
}

impl<T, M, G, S> Field<T> for Accessor<G, S, M>
where
    M: Encode + Decode + 'static,
    G: Fn(&T) -> &M + Send + Sync,
    S: Fn(&mut T, M) + Send + Sync,
{
    fn encode(&self, s: &Serializer, object: &T) -> Result<Json> {
        s.encode((self.getter)(object))
    }

    fn decode(&self, s: &Serializer, object: &mut T, data: &Json) -> Result<()> {
        (self.setter)(object, s.decode::<M>(data)?);
        Ok(())
    }
}

struct Member<T> {
    optional: bool,
    field: Box<dyn Field<T>>,
}

/// A [`Codec`] mapping a struct to an object, one member per registered field.
///
/// Encoding produces an object holding every field. Decoding starts from `T::default()` and
/// reads each field by name. A field whose member is absent or `null` fails with
/// [`Error::MissingField`], unless it was registered through
/// [`ObjectCodec::optional_field`], in which case it keeps its default. Members that match
/// no field are ignored.
///
/// # Examples
/// ```
/// use refjson::{
///     codec::{Decode, Encode, ObjectCodec, Serializer},
///     json, Error,
/// };
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     name: String,
///     nickname: Option<String>,
/// }
///
/// impl Encode for User {}
/// impl Decode for User {}
///
/// let mut s = Serializer::new();
/// s.add_codec(
///     ObjectCodec::<User>::new()
///         .field("name", |u| &u.name, |u, v| u.name = v)
///         .optional_field("nickname", |u| &u.nickname, |u, v| u.nickname = v),
/// );
///
/// let user: User = s.decode(&json!({"name": "ada"})).unwrap();
/// assert_eq!(user.nickname, None);
///
/// let err = s.decode::<User>(&json!({"nickname": "x"})).unwrap_err();
/// assert_eq!(err, Error::MissingField("name".into()));
/// ```
pub struct ObjectCodec<T> {
    fields: BTreeMap<String, Member<T>>,
}

impl<T> Default for ObjectCodec<T> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }
}

impl<T> ObjectCodec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a required field. A field registered twice keeps the last accessors.
    pub fn field<M, G, S>(self, name: &str, getter: G, setter: S) -> Self
    where
        M: Encode + Decode + 'static,
        G: Fn(&T) -> &M + Send + Sync + 'static,
        S: Fn(&mut T, M) + Send + Sync + 'static,
        T: 'static,
    {
        self.add(name, false, getter, setter)
    }

    /// Registers a field that may be absent or `null` when decoding.
    pub fn optional_field<M, G, S>(self, name: &str, getter: G, setter: S) -> Self
    where
        M: Encode + Decode + 'static,
        G: Fn(&T) -> &M + Send + Sync + 'static,
        S: Fn(&mut T, M) + Send + Sync + 'static,
        T: 'static,
    {
        self.add(name, true, getter, setter)
    }

    fn add<M, G, S>(mut self, name: &str, optional: bool, getter: G, setter: S) -> Self
    where
        M: Encode + Decode + 'static,
        G: Fn(&T) -> &M + Send + Sync + 'static,
        S: Fn(&mut T, M) + Send + Sync + 'static,
        T: 'static,
    {
        let field = Accessor {
            getter,
            setter,
            _marker: PhantomData,
        };
        self.fields.insert(
            name.to_string(),
            Member {
                optional,
                field: Box::new(field),
            },
        );
        self
    }

    /// Names of the registered fields, in key order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<T: Default + 'static> Codec for ObjectCodec<T> {
    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn target_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn encode(&self, s: &Serializer, value: &dyn Any) -> Result<Json> {
        let object = value.downcast_ref::<T>().ok_or_else(|| {
            Error::CorruptedState(format!("object codec expected `{}`", self.target_name()))
        })?;
        let result = Json::new();
        for (name, member) in &self.fields {
            result.insert(name, member.field.encode(s, object)?);
        }
        Ok(result)
    }

    fn decode(&self, s: &Serializer, data: &Json) -> Result<Box<dyn Any>> {
        let mut object = T::default();
        for (name, member) in &self.fields {
            let field_data = data.try_get(name)?;
            if field_data.is_null() {
                if member.optional {
                    continue;
                }
                tracing::debug!(
                    target_type = self.target_name(),
                    field = name.as_str(),
                    "required field missing"
                );
                return Err(Error::MissingField(name.clone()));
            }
            member.field.decode(s, &mut object, &field_data)?;
        }
        Ok(Box::new(object))
    }
}
