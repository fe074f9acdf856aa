//! Owner tree node and the link-level BST primitives
//!
//! Node = (display name, folded key, roster, left, right)
//! Ordering uses the folded key only:
//!   Left subtree:  keys < node.key
//!   Right subtree: keys > node.key
//!
//! The free functions work on `&mut Link` cursors and never recurse, so a
//! degenerate (list-shaped) tree costs depth in time but not in stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::catalog::SpeciesRecord;
use crate::roster::Roster;
use crate::util::fold_name;

/// Owned, optional child link
pub(crate) type Link = Option<Box<OwnerNode>>;

/// One owner and their roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerNode {
    /// Name as entered, kept for display
    name: String,

    /// Lowercase fold of `name`; the comparison key
    key: String,

    /// Exclusively owned roster
    roster: Roster,

    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// Name and roster detached from a removed node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerEntry {
    /// Display name of the removed owner
    pub name: String,

    /// Roster the owner held at removal
    pub roster: Roster,
}

impl OwnerNode {
    /// New leaf whose roster holds only the starter
    pub fn new(name: impl Into<String>, starter: SpeciesRecord) -> Self {
        let name = name.into();
        Self {
            key: fold_name(&name),
            name,
            roster: Roster::with_starter(starter),
            left: None,
            right: None,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-folded comparison key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The owner's roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access for add / release / evolve
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Left child
    pub fn left(&self) -> Option<&OwnerNode> {
        self.left.as_deref()
    }

    /// Right child
    pub fn right(&self) -> Option<&OwnerNode> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here (a leaf has height 1)
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        deepest
    }

    fn into_entry(self) -> OwnerEntry {
        OwnerEntry {
            name: self.name,
            roster: self.roster,
        }
    }
}

impl fmt::Display for OwnerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner: {}", self.name)
    }
}

/// Walk down to the link that holds `key`, or the empty link where it
/// would be attached
fn locate<'a>(mut cursor: &'a mut Link, key: &str) -> &'a mut Link {
    loop {
        let go_left = match cursor.as_deref() {
            Some(node) if key != node.key => key < node.key.as_str(),
            _ => return cursor,
        };
        let node = cursor.as_mut().unwrap();
        cursor = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Attach `new` below `link`, returning the attached node; an equal key
/// leaves the subtree untouched and yields `None`
pub(crate) fn insert(link: &mut Link, new: Box<OwnerNode>) -> Option<&mut OwnerNode> {
    let slot = locate(link, &new.key);
    if slot.is_some() {
        return None;
    }
    Some(&mut **slot.insert(new))
}

/// Descend to the node with `key`
pub(crate) fn find<'a>(link: &'a Link, key: &str) -> Option<&'a OwnerNode> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match key.cmp(node.key.as_str()) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Mutable descent to the node with `key`
pub(crate) fn find_mut<'a>(link: &'a mut Link, key: &str) -> Option<&'a mut OwnerNode> {
    locate(link, key).as_deref_mut()
}

/// Remove the node with `key` from the subtree
///
/// Two-child case: the in-order successor is detached from the right
/// subtree and its name, key and roster are moved into this node, so the
/// surviving node object now represents a different owner.
pub(crate) fn remove(link: &mut Link, key: &str) -> Option<OwnerEntry> {
    let slot = locate(link, key);
    let node = slot.as_mut()?;

    if node.left.is_some() && node.right.is_some() {
        let successor = detach_leftmost(&mut node.right)?;
        let OwnerNode {
            name, key, roster, ..
        } = *successor;
        node.key = key;
        return Some(OwnerEntry {
            name: mem::replace(&mut node.name, name),
            roster: mem::replace(&mut node.roster, roster),
        });
    }

    let mut node = slot.take()?;
    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.into_entry())
}

/// Split off the minimum node of a subtree, promoting its right child
fn detach_leftmost(link: &mut Link) -> Option<Box<OwnerNode>> {
    let mut cursor = link;
    while cursor.as_ref().is_some_and(|node| node.left.is_some()) {
        cursor = &mut cursor.as_mut().unwrap().left;
    }
    let mut min = cursor.take()?;
    *cursor = min.right.take();
    Some(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Box<OwnerNode> {
        Box::new(OwnerNode::new(
            name,
            SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true),
        ))
    }

    fn build(names: &[&str]) -> Link {
        let mut root = None;
        for name in names {
            assert!(insert(&mut root, leaf(name)).is_some(), "{} should insert", name);
        }
        root
    }

    #[test]
    fn test_insert_places_by_folded_key() {
        let root = build(&["Misty", "ash", "Brock"]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.name(), "Misty");
        assert_eq!(node.left().unwrap().name(), "ash");
        assert_eq!(node.left().unwrap().right().unwrap().name(), "Brock");
        assert!(node.right().is_none());
    }

    #[test]
    fn test_insert_rejects_case_variant() {
        let mut root = build(&["Ash"]);
        assert!(insert(&mut root, leaf("ASH")).is_none());
        assert_eq!(root.as_deref().unwrap().name(), "Ash");
        assert!(root.as_deref().unwrap().is_leaf());
    }

    #[test]
    fn test_two_child_remove_copies_successor_up() {
        //        m
        //      /   \
        //     d     t
        //          / \
        //         p   z
        let mut root = build(&["m", "d", "t", "p", "z"]);
        let removed = remove(&mut root, "m");
        assert_eq!(removed.unwrap().name, "m");

        let node = root.as_deref().unwrap();
        assert_eq!(node.name(), "p");
        assert_eq!(node.key(), "p");
        assert_eq!(node.right().unwrap().name(), "t");
        assert!(node.right().unwrap().left().is_none());
        assert!(find(&root, "m").is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut root = build(&["b", "a", "c"]);
        let before = root.clone();
        let removed = remove(&mut root, "q");
        assert!(removed.is_none());
        assert_eq!(root, before);
    }

    #[test]
    fn test_height() {
        let root = build(&["a", "b", "c"]);
        assert_eq!(root.as_deref().unwrap().height(), 3);
        let root = build(&["b", "a", "c", "d"]);
        assert_eq!(root.as_deref().unwrap().height(), 3);
    }

    #[test]
    fn test_remove_single_child_promotes() {
        let mut root = build(&["b", "a", "d", "c"]);
        assert_eq!(remove(&mut root, "d").unwrap().name, "d");
        let node = root.as_deref().unwrap();
        assert_eq!(node.right().unwrap().name(), "c");
        assert!(remove(&mut root, "a").is_some());
        assert!(node_count_is(&root, 2));
    }

    #[test]
    fn test_detach_leftmost_promotes_right_child() {
        //   c
        //  /
        // a
        //  \
        //   b
        let mut root = build(&["c", "a", "b"]);
        let min = detach_leftmost(&mut root).unwrap();
        assert_eq!(min.name(), "a");
        assert!(min.is_leaf());
        assert_eq!(root.as_deref().unwrap().left().unwrap().name(), "b");
    }

    fn node_count_is(root: &Link, expected: usize) -> bool {
        let mut count = 0;
        let mut pending: Vec<&OwnerNode> = root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count == expected
    }
}
