use super::{handle::Json, node::Node};
use crate::error::Error;

macro_rules! impl_try_from_integer {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<$ty> for Json {
                type Error = Error;

                /// Try convert a wide integer to an `Integer`. Values outside the 32-bit range
                /// are rejected, they never turn into a `Number` silently.
                #[inline]
                fn try_from(val: $ty) -> Result<Self, Self::Error> {
                    i32::try_from(val)
                        .map(|v| Json::from_node(Node::Integer(v)))
                        .map_err(|_| Error::IntegerOutOfRange(val as i128))
                }
            }
        )*
    };
}

impl_try_from_integer!(i64, isize, u32, u64, usize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_from_wide_integers() {
        let json = Json::try_from(42_i64).unwrap();
        assert_eq!(json.to_int(), 42);
        assert_eq!(Json::try_from(i32::MAX as u64).unwrap(), i32::MAX);

        assert_eq!(
            Json::try_from(u32::MAX).unwrap_err(),
            Error::IntegerOutOfRange(u32::MAX as i128)
        );
        assert!(Json::try_from(i64::MIN).is_err());
    }
}
