//! Merkle tree node

use crate::hasher::MerkleHasher;
use crate::model::{Algorithm, Hash};

/// A node in a binary merkle tree
///
/// A node is in one of three states:
/// - empty: no hash and no children (fresh from [`MerkleNode::new`])
/// - leaf: a hash derived from a data block, no children
/// - internal: two children, and a hash equal to
///   `digest(left.hash || right.hash)`
///
/// A node exclusively owns its children. Both are present or both are absent.
#[derive(Clone, Debug)]
pub struct MerkleNode<H: MerkleHasher = Algorithm> {
    hash: Option<Hash>,
    left: Option<Box<MerkleNode<H>>>,
    right: Option<Box<MerkleNode<H>>>,
    hasher: H,
}

impl<H: MerkleHasher> MerkleNode<H> {
    /// Create an empty node bound to `hasher`
    pub fn new(hasher: H) -> Self {
        MerkleNode {
            hash: None,
            left: None,
            right: None,
            hasher,
        }
    }

    /// Create a leaf holding the digest of `data`
    ///
    /// Missing data is not an error: the node is left empty and can be
    /// hashed or merged later.
    pub fn leaf(data: Option<&[u8]>, hasher: H) -> Self {
        let mut node = Self::new(hasher);
        node.hash(data);
        node
    }

    /// Create an internal node over two existing subtrees
    pub fn merged(hasher: H, left: MerkleNode<H>, right: MerkleNode<H>) -> Self {
        let mut node = Self::new(hasher);
        node.merge(Some(left), Some(right));
        node
    }

    /// Set this node's hash to the digest of `data`
    ///
    /// Overwrites any previous hash. Does nothing when `data` is `None`.
    pub fn hash(&mut self, data: Option<&[u8]>) -> &mut Self {
        let Some(data) = data else {
            return self;
        };

        let hash = self.hasher.digest(data);
        log::trace!(
            "hashed {} byte block with {}: {}",
            data.len(),
            self.hasher.name(),
            hash.short()
        );
        self.hash = Some(hash);
        self
    }

    /// Attach `left` and `right` as this node's children and rehash
    ///
    /// The new hash is the digest of the left child's hash followed by the
    /// right child's hash. Merging an internal node again replaces its
    /// children and hash.
    ///
    /// If either child is `None` this node is left unchanged, but the other
    /// child is still consumed and dropped. Keep a clone if the subtree is
    /// needed afterwards.
    ///
    /// ```
    /// use bimerkle::{Algorithm, MerkleNode};
    ///
    /// let leaf = MerkleNode::leaf(Some(b"data".as_slice()), Algorithm::Sha256);
    /// let mut root = MerkleNode::new(Algorithm::Sha256);
    ///
    /// root.merge(Some(leaf.clone()), None);
    /// assert!(root.is_empty());
    ///
    /// root.merge(Some(leaf.clone()), Some(leaf));
    /// assert!(root.is_internal());
    /// ```
    pub fn merge(
        &mut self,
        left: Option<MerkleNode<H>>,
        right: Option<MerkleNode<H>>,
    ) -> &mut Self {
        let (Some(left), Some(right)) = (left, right) else {
            log::debug!("merge skipped: both children are required");
            return self;
        };

        if self.is_internal() {
            log::debug!("re-merging internal node {:?}", self.hash);
        }

        self.left = Some(Box::new(left));
        self.right = Some(Box::new(right));
        self.update_hash_code();
        self
    }

    /// The current hash, if one has been computed
    pub fn hash_code(&self) -> Option<&Hash> {
        self.hash.as_ref()
    }

    /// Left subtree, if this node is internal
    pub fn left_tree(&self) -> Option<&MerkleNode<H>> {
        self.left.as_deref()
    }

    /// Right subtree, if this node is internal
    pub fn right_tree(&self) -> Option<&MerkleNode<H>> {
        self.right.as_deref()
    }

    /// The digest algorithm this node is bound to
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// True if this node has a hash and no children
    pub fn is_leaf(&self) -> bool {
        self.hash.as_ref().is_some_and(|h| !h.is_empty())
            && self.left.is_none()
            && self.right.is_none()
    }

    /// True if this node has both children
    pub fn is_internal(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// True if this node has neither a hash nor children
    pub fn is_empty(&self) -> bool {
        self.hash.is_none() && self.left.is_none() && self.right.is_none()
    }

    fn update_hash_code(&mut self) {
        let (Some(left), Some(right)) = (self.left.as_deref(), self.right.as_deref()) else {
            return;
        };

        let hash = self
            .hasher
            .digest_parts(&[child_bytes(left), child_bytes(right)]);
        log::trace!(
            "merged {:?} + {:?} -> {}",
            left.hash,
            right.hash,
            hash.short()
        );
        self.hash = Some(hash);
    }
}

impl<H: MerkleHasher + Default> Default for MerkleNode<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

// Children are unlinked onto a heap stack so dropping a deep, lopsided tree
// does not recurse once per level.
impl<H: MerkleHasher> Drop for MerkleNode<H> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<MerkleNode<H>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// An empty child contributes no bytes.
fn child_bytes<H: MerkleHasher>(node: &MerkleNode<H>) -> &[u8] {
    node.hash.as_ref().map(Hash::as_bytes).unwrap_or_default()
}
