//! Level-order traversal and height

use super::MerkleNode;
use crate::hasher::MerkleHasher;
use std::collections::VecDeque;

/// Breadth-first iterator over a tree
///
/// Yields `(level, node)` pairs, root at level 1, every node of a level
/// before any node of the next. Within a level, left subtrees come first.
pub struct LevelOrder<'a, H: MerkleHasher> {
    queue: VecDeque<(u32, &'a MerkleNode<H>)>,
}

impl<'a, H: MerkleHasher> LevelOrder<'a, H> {
    fn new(root: Option<&'a MerkleNode<H>>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = root {
            queue.push_back((1, root));
        }
        LevelOrder { queue }
    }
}

impl<'a, H: MerkleHasher> Iterator for LevelOrder<'a, H> {
    type Item = (u32, &'a MerkleNode<H>);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.queue.pop_front()?;

        // Either child may be missing; only present ones are expanded
        for child in [node.left_tree(), node.right_tree()].into_iter().flatten() {
            self.queue.push_back((level + 1, child));
        }

        Some((level, node))
    }
}

impl<H: MerkleHasher> MerkleNode<H> {
    /// Iterate over every node of this tree in level order
    pub fn level_order(&self) -> LevelOrder<'_, H> {
        LevelOrder::new(Some(self))
    }

    /// Number of levels in this tree
    ///
    /// A node without children has height 1. Subtrees of unequal depth are
    /// fine: the deepest path wins.
    pub fn height(&self) -> u32 {
        if self.is_leaf() {
            return 1;
        }
        self.level_order().map(|(level, _)| level).max().unwrap_or(0)
    }

    /// Call `visit` on every node, level by level, starting with this one
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&MerkleNode<H>),
    {
        for (_, node) in self.level_order() {
            visit(node);
        }
    }

    /// Total number of nodes in this tree, including this one
    pub fn node_count(&self) -> usize {
        self.level_order().count()
    }
}

/// Height of a possibly absent tree; an absent tree has height 0
pub fn height_of<H: MerkleHasher>(tree: Option<&MerkleNode<H>>) -> u32 {
    tree.map_or(0, MerkleNode::height)
}

/// Level-order walk of a possibly absent tree; an absent tree yields nothing
pub fn level_order_of<H: MerkleHasher>(tree: Option<&MerkleNode<H>>) -> LevelOrder<'_, H> {
    LevelOrder::new(tree)
}
