//! Serialize `VariableList<u8, N>` as a 0x-prefixed hex string.
use crate::VariableList;
use serde::{Deserializer, Serializer};
use serde_utils::hex::{self, PrefixedHexVisitor};
use typenum::Unsigned;

pub fn serialize<S, N>(bytes: &VariableList<u8, N>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    N: Unsigned,
{
    serializer.serialize_str(&hex::encode(&**bytes))
}

pub fn deserialize<'de, D, N>(deserializer: D) -> Result<VariableList<u8, N>, D::Error>
where
    D: Deserializer<'de>,
    N: Unsigned,
{
    let bytes = deserializer.deserialize_str(PrefixedHexVisitor)?;
    VariableList::new(bytes)
        .map_err(|e| serde::de::Error::custom(format!("invalid variable list: {:?}", e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_derive::{Deserialize, Serialize};
    use typenum::U4;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Wrapper {
        #[serde(with = "super")]
        val: VariableList<u8, U4>,
    }

    #[test]
    fn round_trip() {
        let wrapper = Wrapper {
            val: VariableList::new(vec![1, 2]).unwrap(),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, "\"0x0102\"");
        assert_eq!(serde_json::from_str::<Wrapper>(&json).unwrap(), wrapper);

        assert_eq!(
            serde_json::from_str::<Wrapper>("\"0x\"").unwrap(),
            Wrapper {
                val: VariableList::empty()
            }
        );
    }

    #[test]
    fn too_long() {
        serde_json::from_str::<Wrapper>("\"0x0102030405\"").unwrap_err();
    }
}
