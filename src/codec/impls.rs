use std::collections::BTreeMap;

use faststr::FastStr;

use super::{Decode, Encode, Serializer};
use crate::{
    error::{Error, Result},
    value::{Json, JsonType},
};

#[inline]
fn mismatch(expected: JsonType, data: &Json) -> Error {
    Error::TypeMismatch {
        expected,
        found: data.get_type(),
    }
}

macro_rules! impl_scalar_codec {
    ($($ty:ty => $try:ident),* $(,)?) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, _s: &Serializer) -> Result<Json> {
                    Ok(Json::from(*self))
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(_s: &Serializer, data: &Json) -> Result<Self> {
                    data.$try()
                }
            }
        )*
    };
}

impl_scalar_codec! {
    bool => try_bool,
    i32 => try_int,
    f64 => try_number,
}

impl Encode for String {
    #[inline]
    fn encode(&self, _s: &Serializer) -> Result<Json> {
        Ok(Json::from(self.as_str()))
    }
}

impl Decode for String {
    #[inline]
    fn decode(_s: &Serializer, data: &Json) -> Result<Self> {
        data.try_str().map(str::to_owned)
    }
}

impl Encode for FastStr {
    #[inline]
    fn encode(&self, _s: &Serializer) -> Result<Json> {
        Ok(Json::from(self.clone()))
    }
}

impl Decode for FastStr {
    #[inline]
    fn decode(_s: &Serializer, data: &Json) -> Result<Self> {
        data.as_faststr()
            .cloned()
            .ok_or_else(|| mismatch(JsonType::String, data))
    }
}

impl Encode for Json {
    /// Aliases the handle, no copy is made.
    #[inline]
    fn encode(&self, _s: &Serializer) -> Result<Json> {
        Ok(self.clone())
    }
}

impl Decode for Json {
    #[inline]
    fn decode(_s: &Serializer, data: &Json) -> Result<Self> {
        Ok(data.clone())
    }
}

impl<T: Encode + 'static> Encode for Vec<T> {
    fn encode(&self, s: &Serializer) -> Result<Json> {
        let items = self
            .iter()
            .map(|item| s.encode(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Json::from(items))
    }
}

impl<T: Decode + 'static> Decode for Vec<T> {
    fn decode(s: &Serializer, data: &Json) -> Result<Self> {
        let array = data
            .as_array()
            .ok_or_else(|| mismatch(JsonType::Array, data))?;
        let items = array.data();
        items.iter().map(|item| s.decode::<T>(item)).collect()
    }
}

impl<T: Encode + 'static> Encode for Option<T> {
    /// `None` encodes as `null`.
    fn encode(&self, s: &Serializer) -> Result<Json> {
        match self {
            Some(value) => s.encode(value),
            None => Ok(Json::null()),
        }
    }
}

impl<T: Decode + 'static> Decode for Option<T> {
    /// `null` decodes as `None`.
    fn decode(s: &Serializer, data: &Json) -> Result<Self> {
        if data.is_null() {
            return Ok(None);
        }
        s.decode::<T>(data).map(Some)
    }
}

impl<T: Encode + 'static> Encode for BTreeMap<String, T> {
    fn encode(&self, s: &Serializer) -> Result<Json> {
        let result = Json::new();
        for (key, value) in self {
            result.insert(key, s.encode(value)?);
        }
        Ok(result)
    }
}

impl<T: Decode + 'static> Decode for BTreeMap<String, T> {
    fn decode(s: &Serializer, data: &Json) -> Result<Self> {
        let object = data
            .as_object()
            .ok_or_else(|| mismatch(JsonType::Object, data))?;
        let members = object.data();
        members
            .iter()
            .map(|(key, value)| s.decode::<T>(value).map(|v| (key.to_string(), v)))
            .collect()
    }
}
