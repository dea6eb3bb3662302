//! Formats some integer types using quotes.
//!
//! E.g., `1` serializes as `"1"`.
//!
//! Quotes are optional during decoding.

use serde::{Deserializer, Serializer};
use std::convert::TryFrom;
use std::marker::PhantomData;

macro_rules! define_mod {
    ($int: ty) => {
        /// Accepts a quoted or unquoted integer.
        pub struct QuotedIntVisitor<T> {
            _phantom: PhantomData<T>,
        }

        impl<'a, T> serde::de::Visitor<'a> for QuotedIntVisitor<T>
        where
            T: From<$int> + Into<$int> + Copy + TryFrom<u64>,
        {
            type Value = T;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a quoted or unquoted integer")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                s.parse::<$int>()
                    .map(T::from)
                    .map_err(serde::de::Error::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                T::try_from(v).map_err(|_| serde::de::Error::custom("invalid integer"))
            }
        }

        /// Serialize with quotes.
        pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: From<$int> + Into<$int> + Copy,
        {
            let v: $int = (*value).into();
            serializer.serialize_str(&format!("{}", v))
        }

        /// Deserialize with or without quotes.
        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
        where
            D: Deserializer<'de>,
            T: From<$int> + Into<$int> + Copy + TryFrom<u64>,
        {
            deserializer.deserialize_any(QuotedIntVisitor {
                _phantom: PhantomData,
            })
        }
    };
}

pub mod quoted_u8 {
    use super::*;

    define_mod!(u8);
}

pub mod quoted_u64 {
    use super::*;

    define_mod!(u64);
}

#[cfg(test)]
mod test {
    use serde_derive::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Obj {
        #[serde(with = "crate::quoted_u64")]
        slot: u64,
        #[serde(with = "crate::quoted_u8")]
        flags: u8,
    }

    #[test]
    fn serializes_with_quotes() {
        let obj = Obj { slot: 42, flags: 7 };
        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"slot":"42","flags":"7"}"#
        );
    }

    #[test]
    fn quotes_are_optional() {
        let quoted: Obj = serde_json::from_str(r#"{"slot":"42","flags":"7"}"#).unwrap();
        let unquoted: Obj = serde_json::from_str(r#"{"slot":42,"flags":7}"#).unwrap();
        assert_eq!(quoted, unquoted);
    }

    #[test]
    fn out_of_range() {
        serde_json::from_str::<Obj>(r#"{"slot":"1","flags":"256"}"#).unwrap_err();
        serde_json::from_str::<Obj>(r#"{"slot":"1","flags":256}"#).unwrap_err();
        serde_json::from_str::<Obj>(r#"{"slot":"-1","flags":0}"#).unwrap_err();
    }
}
