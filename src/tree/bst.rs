use crate::tree::node::{BinaryNode, Link};
use std::cmp::Ordering;

/// Inserts `value` into an unbalanced binary search tree and returns the root. Inserting a value
/// that is already present returns the tree unchanged.
///
/// # Examples
/// ```
/// use classic_collections::tree::insert_bst;
///
/// let root = [5, 3, 8, 3].iter().fold(None, |root, &value| Some(insert_bst(root, value)));
/// assert_eq!(root.unwrap().in_order(), vec![3, 5, 8]);
/// ```
pub fn insert_bst(root: Link, value: i64) -> Box<BinaryNode> {
    let mut root = match root {
        None => return Box::new(BinaryNode::new(value)),
        Some(root) => root,
    };

    let mut node = &mut root;
    loop {
        let slot = match value.cmp(&node.value) {
            Ordering::Equal => break,
            Ordering::Less => node.left_slot(),
            Ordering::Greater => node.right_slot(),
        };
        match slot {
            Some(next) => node = next,
            None => {
                *slot = Some(Box::new(BinaryNode::new(value)));
                break;
            },
        }
    }
    root
}

/// Returns `true` if `value` is stored in the tree.
pub fn contains(tree: &Link, value: i64) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Equal => return true,
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{contains, insert_bst};
    use crate::tree::node::Link;

    fn build(values: &[i64]) -> Link {
        values.iter().fold(None, |root, &value| Some(insert_bst(root, value)))
    }

    #[test]
    fn test_insert_shape() {
        let root = build(&[5, 3, 8, 1, 4]).unwrap();
        assert_eq!(root.value, 5);
        assert_eq!(root.left.as_ref().unwrap().value, 3);
        assert_eq!(root.right.as_ref().unwrap().value, 8);
        assert_eq!(root.left.as_ref().unwrap().left.as_ref().unwrap().value, 1);
        assert_eq!(root.left.as_ref().unwrap().right.as_ref().unwrap().value, 4);
        assert_eq!(root.height, None);
    }

    #[test]
    fn test_insert_duplicate() {
        let once = build(&[5, 3, 8]);
        let twice = build(&[5, 3, 8, 3, 5]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let root = build(&[1, 2, 3, 4]).unwrap();
        assert_eq!(root.depth(), 4);
        assert!(!root.is_balanced());
        assert_eq!(root.in_order(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[5, 3, 8]);
        assert!(contains(&tree, 3));
        assert!(!contains(&tree, 4));
        assert!(!contains(&None, 4));
    }

    #[test]
    fn test_long_sorted_input() {
        let count = 20_000;
        let mut root = None;
        for value in 0..count {
            root = Some(insert_bst(root, value));
        }
        assert!(contains(&root, count - 1));
        assert!(!contains(&root, count));
        let root = root.unwrap();
        assert_eq!(root.len(), count as usize);
        assert_eq!(root.depth(), count as usize);
        assert_eq!(root.in_order().len(), count as usize);
        drop(root);
    }

    #[test]
    fn test_json_keeps_assigned_slots() {
        let root = build(&[5, 8, 7]).unwrap();
        assert_eq!(
            serde_json::to_string(&root).unwrap(),
            r#"{"value":5,"children":[null,{"value":8,"children":[{"value":7,"children":[]}]}]}"#,
        );
    }

    #[test]
    fn test_negative_values() {
        let root = build(&[0, -5, 5, -10]).unwrap();
        assert_eq!(root.in_order(), vec![-10, -5, 0, 5]);
    }
}
