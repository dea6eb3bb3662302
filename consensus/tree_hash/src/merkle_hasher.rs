use crate::{get_zero_hash, Hash256, HASHSIZE};
use ethereum_hashing::{Context, Sha256Context, HASH_LEN};
use smallvec::SmallVec;
use std::mem;

type SmallVec8<T> = SmallVec<[T; 8]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// More leaves were written than the tree has room for.
    MaximumLeavesExceeded { max_leaves: usize },
}

impl Error {
    pub fn kind(&self) -> ssz::ErrorKind {
        match self {
            Error::MaximumLeavesExceeded { .. } => ssz::ErrorKind::CapacityExceeded,
        }
    }
}

/// The value of a node: either a digest computed here or a 32-byte slice supplied by the caller.
enum Preimage<'a> {
    Digest([u8; HASH_LEN]),
    Slice(&'a [u8]),
}

impl<'a> Preimage<'a> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Preimage::Digest(digest) => digest.as_ref(),
            Preimage::Slice(slice) => slice,
        }
    }
}

/// A node whose left child has been hashed into `context` and which awaits its right child.
struct HalfNode {
    context: Context,
    /// The root has id `1`; the children of node `i` are `2i` and `2i + 1`.
    id: usize,
}

impl HalfNode {
    fn new(id: usize, left: Preimage) -> Self {
        let mut context = Context::new();
        context.update(left.as_bytes());

        Self { context, id }
    }

    fn finish(mut self, right: Preimage) -> [u8; HASH_LEN] {
        self.context.update(right.as_bytes());
        self.context.finalize()
    }
}

/// A streaming Merkle-root hasher.
///
/// Bytes may be written in slices of any length; they are cut into 32-byte leaves as they arrive.
/// Leaves that are never written are taken to be `[0; 32]`, and the subtrees made only of such
/// leaves are filled in from pre-computed zero hashes rather than being hashed.
///
/// The tree is folded up as leaves arrive, so at most one half-finished node per level is held
/// in memory. Hashing a list with a capacity of 2^40 leaves but only three values costs three
/// leaves plus one zero hash per level.
///
/// ```ignore
///           1          After writing leaves 4 and 5, node 2 is complete and node 1 holds it
///          / \         as its left child. Writing leaf 6 creates the half node 3. `finish`
///         2   3        completes node 3 with the zero leaf 7 and then node 1.
///        / \ / \
///       4  5 6  7
/// ```
pub struct MerkleHasher {
    /// Nodes awaiting their right child, deepest last.
    half_nodes: SmallVec8<HalfNode>,
    /// Number of layers in the tree, counting the leaves. A tree of one leaf has a depth of 1.
    depth: usize,
    /// The id of the next leaf to be processed.
    next_leaf: usize,
    /// Bytes of a leaf that has only been partially written.
    buffer: [u8; HASHSIZE],
    buffer_len: usize,
    /// Set once the root of the tree is known.
    root: Option<Hash256>,
}

/// Returns the parent of node with id `i`.
fn get_parent(i: usize) -> usize {
    i / 2
}

/// Gets the depth of a node with an id of `i`, where the root (`i == 1`) has depth 0.
///
/// It is a logic error to provide `i == 0`.
fn get_depth(i: usize) -> usize {
    let total_bits = mem::size_of::<usize>() * 8;
    total_bits - i.leading_zeros() as usize - 1
}

impl MerkleHasher {
    /// Instantiate a hasher for a tree with a given number of leaves, rounded up to the next power
    /// of two.
    ///
    /// If `num_leaves == 0`, a tree of depth 1 will be created. If no leaves are provided it will
    /// return a root of `[0; 32]`.
    pub fn with_leaves(num_leaves: usize) -> Self {
        let depth = get_depth(num_leaves.next_power_of_two()) + 1;
        Self::with_depth(depth)
    }

    /// Instantiates a new, empty hasher for a tree with `depth` layers which will have capacity
    /// for `1 << (depth - 1)` leaf nodes.
    ///
    /// ## Panics
    ///
    /// Panics if `depth == 0`.
    fn with_depth(depth: usize) -> Self {
        assert!(depth > 0, "merkle tree cannot have a depth of zero");

        Self {
            half_nodes: SmallVec::with_capacity(depth - 1),
            depth,
            next_leaf: 1 << (depth - 1),
            buffer: [0; HASHSIZE],
            buffer_len: 0,
            root: None,
        }
    }

    /// Write some bytes to the hasher.
    ///
    /// ## Errors
    ///
    /// Returns an error if the given bytes would create more leaves than the tree can hold.
    pub fn write(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
        // Top up a partially written leaf first.
        if self.buffer_len > 0 {
            let take = std::cmp::min(HASHSIZE - self.buffer_len, bytes.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&bytes[..take]);
            self.buffer_len += take;
            bytes = &bytes[take..];

            if self.buffer_len < HASHSIZE {
                return Ok(());
            }

            let leaf = self.buffer;
            self.buffer_len = 0;
            self.process_leaf(&leaf)?;
        }

        let mut leaves = bytes.chunks_exact(HASHSIZE);
        for leaf in &mut leaves {
            self.process_leaf(leaf)?;
        }

        let remainder = leaves.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffer_len = remainder.len();

        Ok(())
    }

    /// Process the next leaf in the tree.
    fn process_leaf(&mut self, leaf: &[u8]) -> Result<(), Error> {
        debug_assert_eq!(leaf.len(), HASHSIZE, "a leaf must be 32 bytes");

        if self.next_leaf >= 1 << self.depth {
            return Err(Error::MaximumLeavesExceeded {
                max_leaves: 1 << (self.depth - 1),
            });
        } else if self.next_leaf == 1 {
            // A tree of depth one has a root that is equal to the first given leaf.
            self.root = Some(Hash256::from_slice(leaf))
        } else if self.next_leaf % 2 == 0 {
            self.process_left_node(self.next_leaf, Preimage::Slice(leaf))
        } else {
            self.process_right_node(self.next_leaf, Preimage::Slice(leaf))
        }

        self.next_leaf += 1;

        Ok(())
    }

    /// Returns the root of the Merkle tree, treating all leaves not yet written as `[0; 32]`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the bytes remaining in the buffer would create a leaf that does not fit
    /// in the tree.
    pub fn finish(mut self) -> Result<Hash256, Error> {
        if self.buffer_len > 0 {
            let mut leaf = [0; HASHSIZE];
            leaf[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            self.process_leaf(&leaf)?
        }

        loop {
            if let Some(root) = self.root {
                break Ok(root);
            } else if let Some(node) = self.half_nodes.last() {
                let right_child = node.id * 2 + 1;
                self.process_right_node(right_child, self.zero_hash(right_child));
            } else if self.next_leaf == 1 {
                // A depth-one tree that was given no leaf.
                break Ok(Hash256::zero());
            } else {
                // No leaves were written at all. Seed the tree with a zero leaf; every later step
                // goes through `process_right_node`.
                self.process_left_node(self.next_leaf, self.zero_hash(self.next_leaf))
            }
        }
    }

    /// Push a half node for the parent of the left child `id`.
    fn process_left_node(&mut self, id: usize, preimage: Preimage) {
        self.half_nodes
            .push(HalfNode::new(get_parent(id), preimage))
    }

    /// Supply the right child `id`, completing its parent and then every ancestor that was only
    /// waiting for that parent.
    fn process_right_node(&mut self, id: usize, mut preimage: Preimage) {
        let mut parent = get_parent(id);

        loop {
            match self.half_nodes.pop() {
                Some(node) if node.id == parent => {
                    preimage = Preimage::Digest(node.finish(preimage));

                    if parent == 1 {
                        self.root = Some(Hash256::from_slice(preimage.as_bytes()));
                        break;
                    } else {
                        parent = get_parent(parent);
                    }
                }
                other => {
                    if let Some(node) = other {
                        self.half_nodes.push(node);
                    }
                    self.half_nodes.push(HalfNode::new(parent, preimage));
                    break;
                }
            }
        }
    }

    /// The root of an all-zero subtree rooted at node `id`.
    fn zero_hash(&self, id: usize) -> Preimage<'static> {
        Preimage::Slice(get_zero_hash(self.depth - (get_depth(id) + 1)))
    }
}
