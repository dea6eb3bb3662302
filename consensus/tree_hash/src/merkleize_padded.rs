use super::{get_zero_hash, Hash256, BYTES_PER_CHUNK};
use ethereum_hashing::hash32_concat;

/// Merkleize `bytes` and return the root, treating the tree as if it held at least `min_leaves`
/// leaves.
///
/// The tree is built one layer at a time from the bottom up. Only chunks derived from `bytes` are
/// stored; a layer with an odd number of nodes is paired with the zero hash of that height, and
/// once a layer has shrunk to a single node the remaining heights are filled in the same way. A
/// huge capacity therefore costs one hash per level rather than memory for the padding.
///
/// `MerkleHasher` computes the same root in a single streaming pass and is what `TreeHash` uses.
/// This function is kept as the reference it is checked against.
///
/// ## Panics
///
/// Panics if the tree would be deeper than `MAX_TREE_DEPTH`.
pub fn merkleize_padded(bytes: &[u8], min_leaves: usize) -> Hash256 {
    let chunks = (bytes.len() + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK;
    let leaves = std::cmp::max(chunks, min_leaves);

    if leaves <= 1 {
        let mut root = [0; BYTES_PER_CHUNK];
        root[..bytes.len()].copy_from_slice(bytes);
        return Hash256::from_slice(&root);
    }

    let depth = leaves.next_power_of_two().trailing_zeros() as usize;

    if chunks == 0 {
        return Hash256::from_slice(get_zero_hash(depth));
    }

    let mut layer: Vec<[u8; BYTES_PER_CHUNK]> = bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut leaf = [0; BYTES_PER_CHUNK];
            leaf[..chunk.len()].copy_from_slice(chunk);
            leaf
        })
        .collect();

    for height in 0..depth {
        layer = layer
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash32_concat(left, right),
                [left] => hash32_concat(left, get_zero_hash(height)),
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect();
    }

    Hash256::from_slice(&layer[0])
}

#[cfg(test)]
mod test {
    use super::*;
    use ethereum_hashing::hash;

    fn chunk(byte: u8) -> [u8; BYTES_PER_CHUNK] {
        [byte; BYTES_PER_CHUNK]
    }

    #[test]
    fn empty() {
        assert_eq!(merkleize_padded(&[], 0), Hash256::zero());
        assert_eq!(merkleize_padded(&[], 1), Hash256::zero());
        assert_eq!(
            merkleize_padded(&[], 4),
            Hash256::from_slice(get_zero_hash(2))
        );
    }

    #[test]
    fn single_chunk_is_padded() {
        let mut expected = [0; BYTES_PER_CHUNK];
        expected[0] = 5;

        assert_eq!(merkleize_padded(&[5], 0), Hash256::from_slice(&expected));
    }

    #[test]
    fn two_chunks() {
        let mut bytes = chunk(1).to_vec();
        bytes.extend_from_slice(&chunk(2));

        assert_eq!(
            merkleize_padded(&bytes, 0),
            Hash256::from_slice(&hash(&bytes))
        );
    }

    #[test]
    fn three_chunks_pad_to_four() {
        let mut bytes = chunk(1).to_vec();
        bytes.extend_from_slice(&chunk(2));
        bytes.extend_from_slice(&chunk(3));

        let left = hash32_concat(&chunk(1), &chunk(2));
        let right = hash32_concat(&chunk(3), &[0; BYTES_PER_CHUNK]);
        let expected = hash32_concat(&left, &right);

        assert_eq!(merkleize_padded(&bytes, 3), Hash256::from_slice(&expected));
    }

    #[test]
    fn min_leaves_pads_with_zero_subtrees() {
        let bytes = chunk(9);

        let mut expected = chunk(9);
        for height in 0..3 {
            expected = hash32_concat(&expected, get_zero_hash(height));
        }

        assert_eq!(merkleize_padded(&bytes, 8), Hash256::from_slice(&expected));
        assert_eq!(merkleize_padded(&bytes, 5), Hash256::from_slice(&expected));
    }
}
