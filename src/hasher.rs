//! Pluggable digest primitives
//!
//! A [`MerkleHasher`] is stateless: every call builds a fresh digest context,
//! feeds it the given parts in order and finalizes it. Nothing is reset or
//! reused between calls, so a hasher bound to a node can be shared freely.

use crate::model::{Algorithm, Hash};
use digest::Digest;
use std::fmt;
use std::marker::PhantomData;

/// A digest algorithm usable by [`MerkleNode`](crate::MerkleNode)
pub trait MerkleHasher {
    /// Hash the concatenation of `parts`
    fn digest_parts(&self, parts: &[&[u8]]) -> Hash;

    /// Hash a single block of data
    fn digest(&self, data: &[u8]) -> Hash {
        self.digest_parts(&[data])
    }

    /// Human readable algorithm name, used in logs and demo output
    fn name(&self) -> &str;
}

impl MerkleHasher for Algorithm {
    fn digest_parts(&self, parts: &[&[u8]]) -> Hash {
        match self {
            Algorithm::Sha256 => digest_with::<sha2::Sha256>(parts),
            Algorithm::Sha1 => digest_with::<sha1::Sha1>(parts),
            Algorithm::Sha512 => digest_with::<sha2::Sha512>(parts),
            Algorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                for part in parts {
                    hasher.update(part);
                }
                Hash::from_slice(hasher.finalize().as_bytes())
            }
        }
    }

    fn name(&self) -> &str {
        Algorithm::name(self)
    }
}

/// Adapter turning any RustCrypto [`Digest`] into a [`MerkleHasher`]
///
/// ```
/// use bimerkle::{DigestHasher, MerkleNode};
///
/// let leaf = MerkleNode::leaf(Some(b"block".as_slice()), DigestHasher::<sha2::Sha384>::new());
/// assert_eq!(leaf.hash_code().unwrap().len(), 48);
/// ```
pub struct DigestHasher<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self {
        DigestHasher {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        DigestHasher {
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestHasher<{}>", std::any::type_name::<D>())
    }
}

impl<D: Digest> MerkleHasher for DigestHasher<D> {
    fn digest_parts(&self, parts: &[&[u8]]) -> Hash {
        digest_with::<D>(parts)
    }

    fn name(&self) -> &str {
        std::any::type_name::<D>()
    }
}

fn digest_with<D: Digest>(parts: &[&[u8]]) -> Hash {
    let mut context = D::new();
    for part in parts {
        context.update(part);
    }
    Hash::from_vec(context.finalize().to_vec())
}
