//! Serialize `VariableList<VariableList<u8, M>, N>` as a list of 0x-prefixed hex strings.
use crate::VariableList;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;
use typenum::Unsigned;

#[derive(Deserialize)]
#[serde(transparent)]
pub struct WrappedListOwned<N: Unsigned>(
    #[serde(with = "crate::serde_utils::hex_var_list")] VariableList<u8, N>,
);

#[derive(Serialize)]
#[serde(transparent)]
pub struct WrappedListRef<'a, N: Unsigned>(
    #[serde(with = "crate::serde_utils::hex_var_list")] &'a VariableList<u8, N>,
);

pub fn serialize<S, M, N>(
    list: &VariableList<VariableList<u8, M>, N>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    M: Unsigned,
    N: Unsigned,
{
    let mut seq = serializer.serialize_seq(Some(list.len()))?;
    for bytes in list {
        seq.serialize_element(&WrappedListRef(bytes))?;
    }
    seq.end()
}

#[derive(Default)]
pub struct Visitor<M, N> {
    _phantom_m: PhantomData<M>,
    _phantom_n: PhantomData<N>,
}

impl<'a, M, N> serde::de::Visitor<'a> for Visitor<M, N>
where
    M: Unsigned,
    N: Unsigned,
{
    type Value = VariableList<VariableList<u8, M>, N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a list of 0x-prefixed hex bytes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'a>,
    {
        let mut list: VariableList<VariableList<u8, M>, N> = <_>::default();

        while let Some(val) = seq.next_element::<WrappedListOwned<M>>()? {
            list.push(val.0).map_err(|e| {
                serde::de::Error::custom(format!("failed to push value to list: {:?}.", e))
            })?;
        }

        Ok(list)
    }
}

pub fn deserialize<'de, D, M, N>(
    deserializer: D,
) -> Result<VariableList<VariableList<u8, M>, N>, D::Error>
where
    D: Deserializer<'de>,
    M: Unsigned,
    N: Unsigned,
{
    deserializer.deserialize_seq(Visitor::default())
}

#[cfg(test)]
mod test {
    use super::*;
    use typenum::{U2, U4};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Transactions {
        #[serde(with = "super")]
        val: VariableList<VariableList<u8, U4>, U2>,
    }

    #[test]
    fn round_trip() {
        let transactions = Transactions {
            val: VariableList::new(vec![
                VariableList::new(vec![0xaa]).unwrap(),
                VariableList::empty(),
            ])
            .unwrap(),
        };

        let json = serde_json::to_string(&transactions).unwrap();
        assert_eq!(json, r#"["0xaa","0x"]"#);
        assert_eq!(
            serde_json::from_str::<Transactions>(&json).unwrap(),
            transactions
        );
    }

    #[test]
    fn too_many_items() {
        serde_json::from_str::<Transactions>(r#"["0x01","0x02","0x03"]"#).unwrap_err();
    }

    #[test]
    fn item_too_long() {
        serde_json::from_str::<Transactions>(r#"["0x0102030405"]"#).unwrap_err();
    }
}
