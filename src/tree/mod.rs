//! Binary merkle tree
//!
//! Every leaf holds the digest of a data block and every internal node holds
//! the digest of its left child's hash followed by its right child's hash.
//! Trees are built bottom-up by merging existing subtrees under a new root.

mod node;
mod traversal;

pub use node::MerkleNode;
pub use traversal::{height_of, level_order_of, LevelOrder};
