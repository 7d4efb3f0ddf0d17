use crate::tree::node::BTreeNode;
use std::mem;

/// Maximum number of values a node holds before it is split.
pub const LEAF_CAPACITY: usize = 3;

/// Index of the value promoted when an overfull node is split.
const SPLIT_INDEX: usize = 1;

/// Inserts `value` into a B-Tree and returns the new root.
///
/// Leaves keep their values sorted and ignore values they already hold. Internal nodes descend
/// into the first child whose separator is not less than `value`. A node that exceeds
/// `LEAF_CAPACITY` values is split around index 1 into a new two-child node, which replaces the
/// node in its parent's child list. Splits do not push the promoted value into the parent, so the
/// tree grows in depth below the split point instead of rebalancing its ancestors.
///
/// # Examples
/// ```
/// use classic_collections::tree::insert_btree;
///
/// let root = [1, 2, 3, 4].iter().fold(None, |root, &value| Some(insert_btree(root, value))).unwrap();
/// assert_eq!(root.values, vec![2]);
/// assert_eq!(root.children[0].values, vec![1]);
/// assert_eq!(root.children[1].values, vec![3, 4]);
/// ```
pub fn insert_btree(root: Option<BTreeNode>, value: i64) -> BTreeNode {
    let mut root = match root {
        None => return BTreeNode::new(value),
        Some(root) => root,
    };

    let mut node = &mut root;
    loop {
        if node.is_leaf() {
            if let Err(index) = node.values.binary_search(&value) {
                node.values.insert(index, value);
            }
            if node.values.len() > LEAF_CAPACITY {
                split(node);
            }
            break;
        }

        let index = node
            .values
            .iter()
            .position(|&separator| value <= separator)
            .unwrap_or(node.values.len());
        if index >= node.children.len() {
            node.children.push(BTreeNode::new(value));
            break;
        }
        node = &mut node.children[index];
    }
    root
}

// Replaces an overfull node with a two-child node holding the promoted value.
fn split(node: &mut BTreeNode) {
    let mut left = mem::replace(node, BTreeNode::default());
    let right_values = left.values.split_off(SPLIT_INDEX + 1);
    let right_children = if left.children.len() > SPLIT_INDEX + 1 {
        left.children.split_off(SPLIT_INDEX + 1)
    } else {
        Vec::new()
    };
    let promoted = left.values[SPLIT_INDEX];
    left.values.truncate(SPLIT_INDEX);
    debug!("b-tree: split promoting {}", promoted);

    *node = BTreeNode {
        values: vec![promoted],
        children: vec![
            left,
            BTreeNode {
                values: right_values,
                children: right_children,
            },
        ],
    };
}
