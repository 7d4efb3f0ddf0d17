//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

use crate::tree::node::{BinaryNode, Link};
use std::cmp::Ordering;

fn rotate_left(mut node: Box<BinaryNode>) -> Box<BinaryNode> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    node.set_right(child.left.take());
    node.update_height();
    child.set_left(Some(node));
    child.update_height();
    child
}

fn rotate_right(mut node: Box<BinaryNode>) -> Box<BinaryNode> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    node.set_left(child.right.take());
    node.update_height();
    child.set_right(Some(node));
    child.update_height();
    child
}

/// Inserts `value` into an AVL tree and returns the new root. Inserting a value that is already
/// present returns the tree unchanged.
///
/// After the recursive insert the height of every node on the path is recomputed. A node whose
/// balance leaves `[-1, 1]` is rotated; the double rotation is chosen by comparing the inserted
/// value against the heavy child.
///
/// # Examples
/// ```
/// use classic_collections::tree::insert_avl;
///
/// let root = [1, 2, 3].iter().fold(None, |root, &value| Some(insert_avl(root, value))).unwrap();
/// assert_eq!(root.value, 2);
/// assert_eq!(root.height, Some(2));
/// ```
pub fn insert_avl(root: Link, value: i64) -> Box<BinaryNode> {
    let mut node = match root {
        None => return Box::new(BinaryNode::with_height(value)),
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Equal => return node,
        Ordering::Less => {
            let left = node.left.take();
            node.set_left(Some(insert_avl(left, value)));
        },
        Ordering::Greater => {
            let right = node.right.take();
            node.set_right(Some(insert_avl(right, value)));
        },
    }

    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if let Some(child) = node.left.take() {
            if value > child.value {
                debug!("avl: left-right rotation at {}", node.value);
                node.set_left(Some(rotate_left(child)));
            } else {
                node.left = Some(child);
            }
        }
        debug!("avl: right rotation at {}", node.value);
        return rotate_right(node);
    }

    if balance < -1 {
        if let Some(child) = node.right.take() {
            if value < child.value {
                debug!("avl: right-left rotation at {}", node.value);
                node.set_right(Some(rotate_right(child)));
            } else {
                node.right = Some(child);
            }
        }
        debug!("avl: left rotation at {}", node.value);
        return rotate_left(node);
    }

    node
}
