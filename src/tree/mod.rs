//! Owner binary search tree
//!
//! Plain unbalanced BST keyed by case-folded owner name. No rebalancing:
//! depth is O(log n) expected, O(n) worst case.
//!
//! The handle owns the root link and the node count; there is no global
//! root. Deletion of a node with two children moves the in-order
//! successor's data into the doomed node, so node identity does not survive
//! a delete. Re-resolve owners by name afterwards.

mod node;
mod ranking;
mod traversal;

pub use node::{OwnerEntry, OwnerNode};
pub use ranking::OwnerSummary;
pub use traversal::{walk, TraversalOrder};

use std::fmt;

use crate::catalog::SpeciesRecord;
use crate::util::fold_name;
use crate::RosterError;
use node::Link;

/// Owner tree handle: root link plus node count
#[derive(Default)]
pub struct OwnerTree {
    root: Link,
    len: usize,
}

impl OwnerTree {
    /// Empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of owners
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no owners
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&OwnerNode> {
        self.root.as_deref()
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> usize {
        self.root().map_or(0, OwnerNode::height)
    }

    /// Register a new owner whose roster starts with `starter`
    ///
    /// Fails with `DuplicateOwner` if a case-insensitively equal name is
    /// present; the tree is left unchanged in that case.
    pub fn insert(
        &mut self,
        name: &str,
        starter: SpeciesRecord,
    ) -> Result<&mut OwnerNode, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyOwnerName);
        }

        let new = Box::new(OwnerNode::new(name, starter));
        match node::insert(&mut self.root, new) {
            Some(node) => {
                self.len += 1;
                Ok(node)
            }
            None => Err(RosterError::DuplicateOwner(name.to_string())),
        }
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&OwnerNode> {
        node::find(&self.root, &fold_name(name.trim()))
    }

    /// Case-insensitive lookup for roster mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut OwnerNode> {
        node::find_mut(&mut self.root, &fold_name(name.trim()))
    }

    /// Whether an owner with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove an owner, returning their name and roster
    ///
    /// An absent name leaves the tree structurally unchanged.
    pub fn delete(&mut self, name: &str) -> Option<OwnerEntry> {
        let removed = node::remove(&mut self.root, &fold_name(name.trim()));
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Visit owners in the given order
    pub fn visit<'a, F>(&'a self, order: TraversalOrder, visit: F)
    where
        F: FnMut(&'a OwnerNode),
    {
        walk(self.root(), order, visit);
    }

    /// Collect owners in the given order
    pub fn walk(&self, order: TraversalOrder) -> Vec<&OwnerNode> {
        let mut nodes = Vec::with_capacity(self.len);
        self.visit(order, |node| nodes.push(node));
        nodes
    }

    /// Display names in the given order
    pub fn names(&self, order: TraversalOrder) -> Vec<&str> {
        self.walk(order).into_iter().map(OwnerNode::name).collect()
    }

    /// Owners sorted by roster size, then folded name
    pub fn ranked_by_roster_size(&self) -> Vec<OwnerSummary> {
        ranking::rank(self.walk(TraversalOrder::LevelOrder))
    }
}

impl fmt::Debug for OwnerTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl Drop for OwnerTree {
    // Unlink through an explicit stack; the derived drop of a list-shaped
    // tree would recurse once per level
    fn drop(&mut self) {
        let mut pending: Vec<Box<OwnerNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
