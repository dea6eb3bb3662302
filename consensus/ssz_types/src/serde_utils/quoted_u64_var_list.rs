//! Formats `VariableList<u64, N>` using quotes.
//!
//! E.g., `VariableList::new(vec![0, 1, 2])` serializes as `["0", "1", "2"]`.
//!
//! Quotes are optional during decoding. More than `N` values is an error.

use crate::VariableList;
use serde::{Deserializer, Serializer};
use serde_utils::quoted_u64_vec::QuotedIntVecVisitor;
use typenum::Unsigned;

pub fn serialize<S, N>(value: &VariableList<u64, N>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    N: Unsigned,
{
    serde_utils::quoted_u64_vec::serialize(value, serializer)
}

pub fn deserialize<'de, D, N>(deserializer: D) -> Result<VariableList<u64, N>, D::Error>
where
    D: Deserializer<'de>,
    N: Unsigned,
{
    let vec = deserializer.deserialize_seq(QuotedIntVecVisitor)?;
    VariableList::new(vec)
        .map_err(|e| serde::de::Error::custom(format!("invalid variable list: {:?}", e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_derive::{Deserialize, Serialize};
    use typenum::U4;

    #[derive(Debug, Serialize, Deserialize)]
    struct Obj {
        #[serde(with = "crate::serde_utils::quoted_u64_var_list")]
        values: VariableList<u64, U4>,
    }

    #[test]
    fn quoted_list_success() {
        let obj: Obj = serde_json::from_str(r#"{ "values": ["1", "2"] }"#).unwrap();
        assert_eq!(&obj.values[..], &[1, 2]);
    }

    #[test]
    fn empty_list_success() {
        let obj: Obj = serde_json::from_str(r#"{ "values": [] }"#).unwrap();
        assert!(obj.values.is_empty());
    }

    #[test]
    fn long_list_err() {
        serde_json::from_str::<Obj>(r#"{ "values": [1, 2, 3, 4, 5] }"#).unwrap_err();
    }
}
