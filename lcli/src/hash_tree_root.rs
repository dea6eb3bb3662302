use crate::records::{read_ssz_file, resolve_fork};
use clap::ArgMatches;
use ssz::Decode;
use std::path::PathBuf;
use std::str::FromStr;
use tree_hash::TreeHash;
use types::{ChainSpec, ForkVersioned, Hash256, Role, SigningData};

/// The roots of a decoded record.
#[derive(Debug, PartialEq)]
pub struct Roots {
    pub tree_hash_root: Hash256,
    pub signing_root: Option<Hash256>,
}

pub fn run(spec: &ChainSpec, matches: &ArgMatches) -> Result<(), String> {
    let type_str = matches
        .get_one::<String>("type")
        .ok_or("No type supplied")?;
    let filename = matches
        .get_one::<PathBuf>("ssz-file")
        .ok_or("No file supplied")?;
    let domain = matches
        .get_one::<String>("domain")
        .map(|s| parse_domain(s))
        .transpose()?;

    let bytes = read_ssz_file(filename)?;
    info!("Type: {}, {} bytes", type_str, bytes.len());

    let roots = match Role::from_str(type_str) {
        Ok(role) => {
            let fork_name = resolve_fork(matches, spec)?;
            info!("Decoding {} at the {} fork", role, fork_name);
            let versioned = ForkVersioned::from_ssz_bytes(&bytes, fork_name, role)
                .map_err(|e| format!("SSZ decode failed: {:?}", e))?;
            Roots {
                tree_hash_root: versioned.tree_hash_root(),
                signing_root: domain.map(|domain| versioned.signing_root(domain)),
            }
        }
        Err(_) => dispatch_fixed_record!(type_str.as_str(), decode_and_hash(&bytes, domain))
            .ok_or_else(|| format!("Unknown type: {}", type_str))??,
    };

    println!("hash_tree_root: {:?}", roots.tree_hash_root);
    if let Some(signing_root) = roots.signing_root {
        println!("signing_root: {:?}", signing_root);
    }

    Ok(())
}

/// Decodes a fork-invariant record and computes its roots.
///
/// The signing root covers the record as given, so signed envelopes should be passed as their
/// inner message.
fn decode_and_hash<T: Decode + TreeHash>(
    bytes: &[u8],
    domain: Option<Hash256>,
) -> Result<Roots, String> {
    let item = T::from_ssz_bytes(bytes).map_err(|e| format!("SSZ decode failed: {:?}", e))?;
    let tree_hash_root = item.tree_hash_root();

    Ok(Roots {
        tree_hash_root,
        signing_root: domain.map(|domain| {
            SigningData {
                object_root: tree_hash_root,
                domain,
            }
            .tree_hash_root()
        }),
    })
}

/// Parses a 32-byte domain given as hex, with or without a `0x` prefix.
pub fn parse_domain(s: &str) -> Result<Hash256, String> {
    let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))
        .map_err(|e| format!("Invalid domain hex {}: {}", s, e))?;

    if bytes.len() != Hash256::len_bytes() {
        return Err(format!(
            "Domain must be {} bytes, got {}",
            Hash256::len_bytes(),
            bytes.len()
        ));
    }

    Ok(Hash256::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;
    use types::{Checkpoint, Epoch, SignedRoot};

    #[test]
    fn domain_parsing() {
        let hex = "07".repeat(32);
        assert_eq!(parse_domain(&hex), Ok(Hash256::repeat_byte(7)));
        assert_eq!(
            parse_domain(&format!("0x{}", hex)),
            Ok(Hash256::repeat_byte(7))
        );
        assert!(parse_domain("0x0707").is_err());
        assert!(parse_domain("zz").is_err());
    }

    #[test]
    fn fixed_record_roots() {
        let checkpoint = Checkpoint {
            epoch: Epoch::new(5),
            root: Hash256::repeat_byte(1),
        };
        let domain = Hash256::repeat_byte(9);

        let roots =
            decode_and_hash::<Checkpoint>(&checkpoint.as_ssz_bytes(), Some(domain)).unwrap();
        assert_eq!(roots.tree_hash_root, checkpoint.tree_hash_root());
        assert_eq!(
            roots.signing_root,
            Some(checkpoint.tree_hash_root().signing_root(domain))
        );

        let roots = decode_and_hash::<Checkpoint>(&checkpoint.as_ssz_bytes(), None).unwrap();
        assert_eq!(roots.signing_root, None);
    }
}
