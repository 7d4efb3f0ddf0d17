use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use std::cmp;
use std::mem;

pub type Link = Option<Box<BinaryNode>>;

/// A node of a binary tree (binary search, AVL, or Fibonacci).
///
/// Only AVL nodes carry a height; it is serialized between `value` and `children` so that the
/// JSON form of each tree kind is stable for fingerprinting.
///
/// The serialized children array has one slot per child position ever assigned through
/// `set_left` or `set_right`, and it never shrinks. An assigned position whose child is absent
/// serializes as `null`, so a node that lost its children to a rotation keeps its holes.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryNode {
    pub value: i64,
    pub height: Option<usize>,
    pub left: Link,
    pub right: Link,
    slots: u8,
}

impl BinaryNode {
    pub fn new(value: i64) -> Self {
        BinaryNode {
            value,
            height: None,
            left: None,
            right: None,
            slots: 0,
        }
    }

    pub fn with_height(value: i64) -> Self {
        BinaryNode {
            value,
            height: Some(1),
            left: None,
            right: None,
            slots: 0,
        }
    }

    /// Replaces the left child, claiming the first slot of the children array.
    pub fn set_left(&mut self, link: Link) {
        *self.left_slot() = link;
    }

    /// Replaces the right child, claiming both slots of the children array.
    pub fn set_right(&mut self, link: Link) {
        *self.right_slot() = link;
    }

    pub(crate) fn left_slot(&mut self) -> &mut Link {
        self.slots = cmp::max(self.slots, 1);
        &mut self.left
    }

    pub(crate) fn right_slot(&mut self) -> &mut Link {
        self.slots = 2;
        &mut self.right
    }

    // Slots written to the children array; a present child always has its slot.
    fn slot_count(&self) -> usize {
        let occupied = match (&self.left, &self.right) {
            (_, Some(_)) => 2,
            (Some(_), None) => 1,
            (None, None) => 0,
        };
        cmp::max(usize::from(self.slots), occupied)
    }

    pub fn update_height(&mut self) {
        let BinaryNode { height, left, right, .. } = self;
        *height = Some(cmp::max(self::height(left), self::height(right)) + 1);
    }

    /// Returns `height(left) - height(right)`.
    pub fn balance(&self) -> i64 {
        (height(&self.left) as i64) - (height(&self.right) as i64)
    }

    /// Returns the immediate children in left-to-right order.
    pub fn children(&self) -> Vec<&BinaryNode> {
        self.left.iter().chain(self.right.iter()).map(|node| &**node).collect()
    }

    /// Returns the values of the tree rooted at this node in sorted (in-order) order.
    pub fn in_order(&self) -> Vec<i64> {
        let mut ret = Vec::new();
        let mut stack = Vec::new();
        let mut curr = Some(self);
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left.as_ref().map(|left| &**left);
            }
            match stack.pop() {
                Some(node) => {
                    ret.push(node.value);
                    curr = node.right.as_ref().map(|right| &**right);
                },
                None => return ret,
            }
        }
    }

    /// Returns the number of nodes in the tree rooted at this node.
    pub fn len(&self) -> usize {
        let mut ret = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ret += 1;
            stack.extend(node.children());
        }
        ret
    }

    // Post-order walk returning the structural depth and whether every node is balanced.
    fn depth_and_balance(&self) -> (usize, bool) {
        let mut balanced = true;
        let mut depths: Vec<usize> = Vec::new();
        let mut stack = vec![(self, false)];
        while let Some((node, visited)) = stack.pop() {
            if visited {
                let left = if node.left.is_some() { depths.pop().unwrap_or(0) } else { 0 };
                let right = if node.right.is_some() { depths.pop().unwrap_or(0) } else { 0 };
                balanced &= (left as i64 - right as i64).abs() <= 1;
                depths.push(cmp::max(left, right) + 1);
            } else {
                stack.push((node, true));
                stack.extend(node.children().into_iter().map(|child| (child, false)));
            }
        }
        (depths.pop().unwrap_or(0), balanced)
    }

    /// Returns the number of nodes on the longest root-to-leaf path, computed structurally rather
    /// than from the stored heights.
    pub fn depth(&self) -> usize {
        self.depth_and_balance().0
    }

    /// Checks that the depths of the two subtrees differ by at most one at every node.
    pub fn is_balanced(&self) -> bool {
        self.depth_and_balance().1
    }

    /// Checks the strict search-tree ordering of the tree rooted at this node.
    pub fn is_search_tree(&self) -> bool {
        self.in_order().windows(2).all(|pair| pair[0] < pair[1])
    }
}

/// Returns the stored height of a subtree, or 0 for an absent subtree.
pub fn height(tree: &Link) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height.unwrap_or(1),
    }
}

// Drops the subtrees from an explicit stack so that a degenerate tree does not recurse once per
// level.
impl Drop for BinaryNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BinaryNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

struct Children<'a>(&'a BinaryNode);

impl<'a> Serialize for Children<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.0.slot_count();
        let mut seq = serializer.serialize_seq(Some(len))?;
        for link in [&self.0.left, &self.0.right].iter().take(len) {
            seq.serialize_element(link)?;
        }
        seq.end()
    }
}

impl Serialize for BinaryNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let field_count = if self.height.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("BinaryNode", field_count)?;
        state.serialize_field("value", &self.value)?;
        if let Some(height) = self.height {
            state.serialize_field("height", &height)?;
        }
        state.serialize_field("children", &Children(self))?;
        state.end()
    }
}

/// A node of the B-Tree. Leaves have no children.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BTreeNode {
    pub values: Vec<i64>,
    pub children: Vec<BTreeNode>,
}

impl BTreeNode {
    pub fn new(value: i64) -> Self {
        BTreeNode {
            values: vec![value],
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in the tree rooted at this node.
    pub fn len(&self) -> usize {
        let mut ret = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ret += 1;
            stack.extend(node.children.iter());
        }
        ret
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut ret = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            ret = cmp::max(ret, depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        ret
    }

    /// Returns every stored key, in the order a pre-order traversal visits them.
    pub fn keys(&self) -> Vec<i64> {
        let mut ret = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ret.extend(node.values.iter().cloned());
            stack.extend(node.children.iter().rev());
        }
        ret
    }
}

impl Drop for BTreeNode {
    fn drop(&mut self) {
        let mut stack = mem::replace(&mut self.children, Vec::new());
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
