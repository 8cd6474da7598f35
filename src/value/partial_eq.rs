use std::cmp::Ordering;

use faststr::FastStr;

use super::{array::Array, handle::Json, object::Object, ord::compare};

impl Eq for Json {}

impl PartialEq for Json {
    /// Structural equality: both values have the same kind and [`compare`] finds them equal.
    /// An `Integer` never equals a `Number`.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        if self.get_type() != other.get_type() {
            return false;
        }

        compare(self, other) == Ordering::Equal
    }
}

macro_rules! impl_str_eq {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    $eq(self, s)
                }
            }

            impl PartialEq<Json> for $ty {
                #[inline]
                fn eq(&self, other: &Json) -> bool {
                    let s: &str = self.as_ref();
                    $eq(other, s)
                }
            }

            impl PartialEq<$ty> for &Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    $eq(*self, s)
                }
            }
        )*)*
    }
}

impl_str_eq! {
    eq_str[str String FastStr]
}

impl PartialEq<&str> for Json {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<Json> for &str {
    #[inline]
    fn eq(&self, other: &Json) -> bool {
        eq_str(other, self)
    }
}

impl PartialEq<()> for Json {
    /// `json == ()` holds exactly when the value is `null`, mirroring `Json::from(())`.
    #[inline]
    fn eq(&self, _other: &()) -> bool {
        self.is_null()
    }
}

impl PartialEq<Json> for () {
    #[inline]
    fn eq(&self, other: &Json) -> bool {
        other.is_null()
    }
}

// Scalar comparisons never coerce between kinds: `Json::from(1) != 1.0`.

#[inline]
fn eq_i64(value: &Json, other: i64) -> bool {
    value.as_int().map_or(false, |i| i64::from(i) == other)
}

#[inline]
fn eq_u64(value: &Json, other: u64) -> bool {
    value
        .as_int()
        .and_then(|i| u64::try_from(i).ok())
        .map_or(false, |i| i == other)
}

#[inline]
fn eq_f64(value: &Json, other: f64) -> bool {
    value.as_number().map_or(false, |n| n == other)
}

#[inline]
fn eq_bool(value: &Json, other: bool) -> bool {
    value.as_bool().map_or(false, |b| b == other)
}

#[inline]
fn eq_str(value: &Json, other: &str) -> bool {
    value.as_str().map_or(false, |s| s == other)
}

macro_rules! impl_numeric_eq {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Json> for $ty {
                #[inline]
                fn eq(&self, other: &Json) -> bool {
                    $eq(other, *self as _)
                }
            }

            impl PartialEq<$ty> for &Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

impl_numeric_eq! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_u64[u8 u16 u32 u64 usize]
    eq_f64[f32 f64]
    eq_bool[bool]
}

//////////////////////////////////////////////////////////////////////////////

macro_rules! impl_slice_eq {
    ([$($vars:tt)*], $rhs:ty) => {
        impl<U, $($vars)*> PartialEq<$rhs> for Json
        where
            Json: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                let Ok(items) = self.array_lock() else {
                    return false;
                };
                let items = items.read_recursive();
                let other: &[U] = other.as_ref();
                items.len() == other.len() && items.iter().zip(other).all(|(a, b)| *a == *b)
            }
        }

        impl<U, $($vars)*> PartialEq<$rhs> for Array
        where
            Json: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                <Json as PartialEq<$rhs>>::eq(&self.0, other)
            }
        }

        impl<U, $($vars)*> PartialEq<Json> for $rhs
        where
            Json: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &Json) -> bool {
                other == self
            }
        }

        impl<U, $($vars)*> PartialEq<Array> for $rhs
        where
            Json: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &Array) -> bool {
                <Json as PartialEq<$rhs>>::eq(&other.0, self)
            }
        }
    };
}

impl_slice_eq!([], &[U]);
impl_slice_eq!([], [U]);
impl_slice_eq!([const N: usize], [U; N]);
impl_slice_eq!([const N: usize], &[U; N]);
impl_slice_eq!([], Vec<U>);

//////////////////////////////////////////////////////////////////////////////

macro_rules! impl_container_eq {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self == &other.0
                }
            }

            impl PartialEq<Json> for $ty {
                #[inline]
                fn eq(&self, other: &Json) -> bool {
                    other == &self.0
                }
            }

            impl PartialEq<$ty> for &Json {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    *self == &other.0
                }
            }

            impl PartialEq<Json> for &$ty {
                #[inline]
                fn eq(&self, other: &Json) -> bool {
                    other == &self.0
                }
            }
        )*
    }
}

impl_container_eq!(Array Object);
