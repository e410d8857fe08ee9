//! # bimerkle
//!
//! A binary merkle tree with pluggable digest algorithms.
//!
//! Leaves hold the digest of a data block; internal nodes hold the digest of
//! their two children's hashes, left then right. Trees are composed
//! bottom-up by merging subtrees under a fresh root.
//!
//! ## Core Concepts
//!
//! - **MerkleNode**: an empty, leaf or internal node that owns its children
//! - **MerkleHasher**: the digest primitive a node is bound to (SHA-256 by default)
//! - **Level order**: breadth-first traversal, used for height and visiting
//!
//! ## Example
//!
//! ```
//! use bimerkle::{Algorithm, MerkleNode};
//!
//! let left = MerkleNode::leaf(Some(b"block one".as_slice()), Algorithm::Sha256);
//! let right = MerkleNode::leaf(Some(b"block two".as_slice()), Algorithm::Sha256);
//!
//! let mut root = MerkleNode::new(Algorithm::Sha256);
//! root.merge(Some(left), Some(right));
//!
//! assert_eq!(root.height(), 2);
//! root.visit(|node| println!("{} leaf={}", node.hash_code().unwrap(), node.is_leaf()));
//! ```

pub mod hasher;
pub mod model;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use hasher::{DigestHasher, MerkleHasher};
pub use model::{Algorithm, Hash};
pub use tree::{height_of, level_order_of, LevelOrder, MerkleNode};
