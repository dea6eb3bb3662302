//! Formats `FixedVector<u64, N>` using quotes.
//!
//! E.g., `FixedVector::from_elem(0)` serializes as `["0", "0", ...]`.
//!
//! Quotes are optional during decoding. The number of values must equal `N`.

use crate::FixedVector;
use serde::{Deserializer, Serializer};
use serde_utils::quoted_u64_vec::QuotedIntVecVisitor;
use typenum::Unsigned;

pub fn serialize<S, N>(value: &FixedVector<u64, N>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    N: Unsigned,
{
    serde_utils::quoted_u64_vec::serialize(value, serializer)
}

pub fn deserialize<'de, D, N>(deserializer: D) -> Result<FixedVector<u64, N>, D::Error>
where
    D: Deserializer<'de>,
    N: Unsigned,
{
    let vec = deserializer.deserialize_seq(QuotedIntVecVisitor)?;
    FixedVector::new(vec)
        .map_err(|e| serde::de::Error::custom(format!("invalid fixed vector: {:?}", e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_derive::{Deserialize, Serialize};
    use typenum::U4;

    #[derive(Debug, Serialize, Deserialize)]
    struct Obj {
        #[serde(with = "crate::serde_utils::quoted_u64_fixed_vec")]
        values: FixedVector<u64, U4>,
    }

    #[test]
    fn quoted_list_success() {
        let obj: Obj = serde_json::from_str(r#"{ "values": ["1", "2", "3", "4"] }"#).unwrap();
        assert_eq!(&obj.values[..], &[1, 2, 3, 4]);
        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"values":["1","2","3","4"]}"#
        );
    }

    #[test]
    fn mixed_list_success() {
        let obj: Obj = serde_json::from_str(r#"{ "values": ["1", 2, "3", "4"] }"#).unwrap();
        assert_eq!(&obj.values[..], &[1, 2, 3, 4]);
    }

    #[test]
    fn short_list_err() {
        serde_json::from_str::<Obj>(r#"{ "values": [1, 2] }"#).unwrap_err();
    }

    #[test]
    fn long_list_err() {
        serde_json::from_str::<Obj>(r#"{ "values": [1, 2, 3, 4, 5] }"#).unwrap_err();
    }
}
