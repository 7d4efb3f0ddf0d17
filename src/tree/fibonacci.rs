use crate::tree::node::BinaryNode;

/// Builds a Fibonacci tree of the given depth.
///
/// Trees of depth 0 or 1 are a single node of value 1. Otherwise the left subtree has depth
/// `depth - 1`, the right subtree has depth `depth - 2`, and the node's value is the sum of its
/// children's values, so every node holds a Fibonacci number. The result is not a search tree.
///
/// # Examples
/// ```
/// use classic_collections::tree::build_fibonacci_tree;
///
/// let root = build_fibonacci_tree(5);
/// assert_eq!(root.value, 8);
/// assert_eq!(root.len(), 15);
/// ```
pub fn build_fibonacci_tree(depth: usize) -> Box<BinaryNode> {
    if depth <= 1 {
        return Box::new(BinaryNode::new(1));
    }

    let left = build_fibonacci_tree(depth - 1);
    let right = build_fibonacci_tree(depth - 2);
    let mut node = Box::new(BinaryNode::new(left.value + right.value));
    node.set_left(Some(left));
    node.set_right(Some(right));
    node
}
