//! Tree traversals
//!
//! All four orders run on an explicit stack or queue, so a degenerate
//! (list-shaped) tree costs heap, not call stack.
//!
//! Level-order: root, depth 1 left-to-right, depth 2, ...
//! Pre-order:   node, left, right
//! In-order:    left, node, right (ascending folded names)
//! Post-order:  left, right, node

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use super::OwnerNode;

/// Enumeration strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Breadth-first, left to right within a level
    #[default]
    LevelOrder,
    /// Node before its subtrees
    PreOrder,
    /// Left subtree, node, right subtree
    InOrder,
    /// Node after its subtrees
    PostOrder,
}

impl TraversalOrder {
    /// Every order, in menu order
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::LevelOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
    ];
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "level" | "level-order" => Ok(TraversalOrder::LevelOrder),
            "pre" | "pre-order" => Ok(TraversalOrder::PreOrder),
            "in" | "in-order" => Ok(TraversalOrder::InOrder),
            "post" | "post-order" => Ok(TraversalOrder::PostOrder),
            other => Err(format!("unknown traversal order '{}'", other)),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TraversalOrder::LevelOrder => "BFS",
            TraversalOrder::PreOrder => "Pre-Order",
            TraversalOrder::InOrder => "In-Order",
            TraversalOrder::PostOrder => "Post-Order",
        };
        f.write_str(label)
    }
}

/// Visit every node below `root` in the given order
pub fn walk<'a, F>(root: Option<&'a OwnerNode>, order: TraversalOrder, visit: F)
where
    F: FnMut(&'a OwnerNode),
{
    let Some(root) = root else {
        return;
    };

    match order {
        TraversalOrder::LevelOrder => level_order(root, visit),
        TraversalOrder::PreOrder => pre_order(root, visit),
        TraversalOrder::InOrder => in_order(root, visit),
        TraversalOrder::PostOrder => post_order(root, visit),
    }
}

fn level_order<'a>(root: &'a OwnerNode, mut visit: impl FnMut(&'a OwnerNode)) {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

fn pre_order<'a>(root: &'a OwnerNode, mut visit: impl FnMut(&'a OwnerNode)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        // Right first so left is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn in_order<'a>(root: &'a OwnerNode, mut visit: impl FnMut(&'a OwnerNode)) {
    let mut stack = Vec::new();
    let mut current = Some(root);
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        visit(node);
        current = node.right();
    }
}

fn post_order<'a>(root: &'a OwnerNode, visit: impl FnMut(&'a OwnerNode)) {
    // Reverse of (node, right, left) pre-order
    let mut pending = vec![root];
    let mut output = Vec::new();
    while let Some(node) = pending.pop() {
        output.push(node);
        pending.extend(node.left());
        pending.extend(node.right());
    }
    output.into_iter().rev().for_each(visit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesRecord;
    use crate::tree::node::{insert, Link};

    //          d
    //        /   \
    //       b     f
    //      / \   / \
    //     a   c e   g
    fn sample() -> Link {
        let mut root = None;
        for name in ["d", "b", "f", "a", "c", "e", "g"] {
            let starter = SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true);
            insert(&mut root, Box::new(OwnerNode::new(name, starter)));
        }
        root
    }

    fn names(root: &Link, order: TraversalOrder) -> String {
        let mut out = String::new();
        walk(root.as_deref(), order, |node| out.push_str(node.name()));
        out
    }

    #[test]
    fn test_all_orders() {
        let root = sample();
        assert_eq!(names(&root, TraversalOrder::LevelOrder), "dbfaceg");
        assert_eq!(names(&root, TraversalOrder::PreOrder), "dbacfeg");
        assert_eq!(names(&root, TraversalOrder::InOrder), "abcdefg");
        assert_eq!(names(&root, TraversalOrder::PostOrder), "acbegfd");
    }

    #[test]
    fn test_empty_tree_visits_nothing() {
        for order in TraversalOrder::ALL {
            assert_eq!(names(&None, order), "");
        }
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("BFS".parse::<TraversalOrder>(), Ok(TraversalOrder::LevelOrder));
        assert_eq!("post".parse::<TraversalOrder>(), Ok(TraversalOrder::PostOrder));
        assert!("sideways".parse::<TraversalOrder>().is_err());
    }
}
