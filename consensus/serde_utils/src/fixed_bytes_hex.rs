//! Formats `[u8; N]` as a 0x-prefixed hex string.
//!
//! E.g., `[0, 1, 2, 3]` serializes as `"0x00010203"`.

use crate::hex::{self, PrefixedHexVisitor};
use serde::de::Error;
use serde::{Deserializer, Serializer};

pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let decoded = deserializer.deserialize_str(PrefixedHexVisitor)?;

    if decoded.len() != N {
        return Err(D::Error::custom(format!(
            "expected {} bytes for array, got {}",
            N,
            decoded.len()
        )));
    }

    let mut array = [0; N];
    array.copy_from_slice(&decoded);
    Ok(array)
}
