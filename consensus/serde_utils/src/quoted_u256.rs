//! Formats `U256` as a quoted decimal string, e.g. `"1000000000"`.

use ethereum_types::U256;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub struct DecimalU256Visitor;

impl<'de> Visitor<'de> for DecimalU256Visitor {
    type Value = U256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a quoted decimal integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        U256::from_dec_str(value).map_err(|e| de::Error::custom(format!("invalid u256: {:?}", e)))
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(DecimalU256Visitor)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_derive::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Wrapper {
        #[serde(with = "super")]
        val: U256,
    }

    #[test]
    fn encoding() {
        assert_eq!(
            serde_json::to_string(&Wrapper { val: U256::zero() }).unwrap(),
            "\"0\""
        );
        assert_eq!(
            serde_json::to_string(&Wrapper {
                val: U256::from(1_000_000_000u64)
            })
            .unwrap(),
            "\"1000000000\""
        );
        assert_eq!(
            serde_json::to_string(&Wrapper { val: U256::max_value() }).unwrap(),
            "\"115792089237316195423570985008687907853269984665640564039457584007913129639935\""
        );
    }

    #[test]
    fn decoding() {
        assert_eq!(
            serde_json::from_str::<Wrapper>("\"7\"").unwrap(),
            Wrapper { val: U256::from(7u64) }
        );
        serde_json::from_str::<Wrapper>("7").unwrap_err();
        serde_json::from_str::<Wrapper>("\"0x07\"").unwrap_err();
    }
}
