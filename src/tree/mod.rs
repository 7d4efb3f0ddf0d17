//! Tree builders sharing a common node vocabulary.
//!
//! Every builder consumes the previous root and returns the new one, so a tree is produced by
//! folding the input values through repeated single-value insertion. Insertion order determines
//! the shape of the binary search, AVL and B-Tree results.

mod avl;
mod bst;
mod btree;
mod export;
mod fibonacci;
mod node;

pub use self::avl::insert_avl;
pub use self::bst::{contains, insert_bst};
pub use self::btree::{insert_btree, LEAF_CAPACITY};
pub use self::export::{table_rows, TableRow};
pub use self::fibonacci::build_fibonacci_tree;
pub use self::node::{height, BTreeNode, BinaryNode, Link};

use crate::error::{Error, Result};
use crate::util;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Smallest depth drawn for a generated Fibonacci tree.
pub const MIN_FIB_DEPTH: usize = 5;

/// Largest depth drawn for a generated Fibonacci tree.
pub const MAX_FIB_DEPTH: usize = 10;

/// Deepest tree that is fingerprinted. Deeper trees are rejected before serialization.
pub const MAX_TREE_DEPTH: usize = 256;

/// The tree-building algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bst")]
    Bst,
    #[serde(rename = "avl")]
    Avl,
    #[serde(rename = "b-tree")]
    BTree,
    #[serde(rename = "fib-tree")]
    FibTree,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bst,
        Algorithm::Avl,
        Algorithm::BTree,
        Algorithm::FibTree,
    ];

    /// Returns the selector name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bst => "bst",
            Algorithm::Avl => "avl",
            Algorithm::BTree => "b-tree",
            Algorithm::FibTree => "fib-tree",
        }
    }

    /// Returns the upper-cased label used in the export header.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bst => "BST",
            Algorithm::Avl => "AVL",
            Algorithm::BTree => "B-TREE",
            Algorithm::FibTree => "FIB-TREE",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Algorithm::ALL
            .iter()
            .cloned()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }
}

/// A built tree of either node kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tree {
    Binary(Box<BinaryNode>),
    BTree(BTreeNode),
}

impl Tree {
    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        match self {
            Tree::Binary(root) => root.len(),
            Tree::BTree(root) => root.len(),
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Binary(root) => root.depth(),
            Tree::BTree(root) => root.depth(),
        }
    }
}

/// A generated tree together with its content fingerprint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeData {
    pub hash: String,
    pub tree: Option<Tree>,
}

impl TreeData {
    /// Fingerprints `tree`. Fails with `Error::TreeTooDeep` if the tree is deeper than
    /// `MAX_TREE_DEPTH`.
    pub fn new(tree: Option<Tree>) -> Result<Self> {
        let depth = tree.as_ref().map_or(0, Tree::depth);
        if depth > MAX_TREE_DEPTH {
            warn!("tree: refusing to fingerprint a tree of depth {}", depth);
            return Err(Error::TreeTooDeep(depth));
        }
        let hash = util::fingerprint(&tree)?;
        Ok(TreeData { hash, tree })
    }
}

fn fold_binary<F>(values: &[i64], insert: F) -> Option<Tree>
where
    F: Fn(Link, i64) -> Box<BinaryNode>,
{
    values
        .iter()
        .fold(None, |root, &value| Some(insert(root, value)))
        .map(Tree::Binary)
}

/// Builds the tree for `algorithm` by inserting `values` in order. Returns `None` for an empty
/// input. Fibonacci trees ignore `values` and are built at `MAX_FIB_DEPTH`.
pub fn build(algorithm: Algorithm, values: &[i64]) -> Option<Tree> {
    match algorithm {
        Algorithm::Bst => fold_binary(values, insert_bst),
        Algorithm::Avl => fold_binary(values, insert_avl),
        Algorithm::BTree => values
            .iter()
            .fold(None, |root, &value| Some(insert_btree(root, value)))
            .map(Tree::BTree),
        Algorithm::FibTree => Some(Tree::Binary(build_fibonacci_tree(MAX_FIB_DEPTH))),
    }
}

/// Builds the tree for `algorithm` and fingerprints it. Fibonacci trees are built at a depth drawn
/// uniformly from `[MIN_FIB_DEPTH, MAX_FIB_DEPTH]` using `rng`.
pub fn generate_tree_data_with_rng<R: Rng>(
    algorithm: Algorithm,
    values: &[i64],
    rng: &mut R,
) -> Result<TreeData> {
    let tree = match algorithm {
        Algorithm::FibTree => {
            let depth = rng.gen_range(MIN_FIB_DEPTH, MAX_FIB_DEPTH + 1);
            debug!("fib-tree: generated depth {}", depth);
            Some(Tree::Binary(build_fibonacci_tree(depth)))
        },
        _ => build(algorithm, values),
    };
    TreeData::new(tree)
}

/// Builds the tree for `algorithm` and fingerprints it, drawing Fibonacci depths from the thread
/// RNG.
///
/// # Examples
/// ```
/// use classic_collections::tree::{generate_tree_data, Algorithm};
///
/// let first = generate_tree_data(Algorithm::Bst, &[3, 1, 2]).unwrap();
/// let second = generate_tree_data(Algorithm::Bst, &[3, 1, 2]).unwrap();
/// assert_eq!(first.hash, second.hash);
/// ```
pub fn generate_tree_data(algorithm: Algorithm, values: &[i64]) -> Result<TreeData> {
    generate_tree_data_with_rng(algorithm, values, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::{
        build, generate_tree_data, generate_tree_data_with_rng, Algorithm, Tree, TreeData,
        MAX_TREE_DEPTH,
    };
    use crate::error::Error;
    use crate::util;
    use rand::{SeedableRng, XorShiftRng};

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("bst".parse::<Algorithm>().unwrap(), Algorithm::Bst);
        assert_eq!("avl".parse::<Algorithm>().unwrap(), Algorithm::Avl);
        assert_eq!("b-tree".parse::<Algorithm>().unwrap(), Algorithm::BTree);
        assert_eq!("fib-tree".parse::<Algorithm>().unwrap(), Algorithm::FibTree);
        assert!("red-black".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_display_round_trip() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), *algorithm);
        }
    }

    #[test]
    fn test_empty_input() {
        let data = generate_tree_data(Algorithm::Avl, &[]).unwrap();
        assert_eq!(data.tree, None);
        assert_eq!(data.hash, util::to_hex(util::rolling_hash("null")));
    }

    #[test]
    fn test_fingerprint_matches_json() {
        let data = generate_tree_data(Algorithm::Bst, &[2, 1]).unwrap();
        let json = r#"{"value":2,"children":[{"value":1,"children":[]}]}"#;
        assert_eq!(data.hash, util::to_hex(util::rolling_hash(json)));
    }

    #[test]
    fn test_fingerprint_order_sensitive() {
        let first = generate_tree_data(Algorithm::Bst, &[1, 2, 3]).unwrap();
        let second = generate_tree_data(Algorithm::Bst, &[2, 1, 3]).unwrap();
        assert_ne!(first.hash, second.hash);
        assert_ne!(first.tree, second.tree);
    }

    #[test]
    fn test_btree_dispatch() {
        match build(Algorithm::BTree, &[1, 2, 3, 4]) {
            Some(Tree::BTree(root)) => assert_eq!(root.values, vec![2]),
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_fib_depth_in_range() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        for _ in 0..50 {
            let data = generate_tree_data_with_rng(Algorithm::FibTree, &[], &mut rng).unwrap();
            let depth = data.tree.as_ref().map(Tree::depth).unwrap();
            assert!(depth >= 5 && depth <= 10);
        }
    }

    #[test]
    fn test_tree_data_rejects_deep_tree() {
        let values: Vec<i64> = (0..=MAX_TREE_DEPTH as i64).collect();
        match TreeData::new(build(Algorithm::Bst, &values)) {
            Err(Error::TreeTooDeep(depth)) => assert_eq!(depth, MAX_TREE_DEPTH + 1),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(TreeData::new(build(Algorithm::Avl, &values)).is_ok());
    }

    #[test]
    fn test_tree_data_new() {
        let data = TreeData::new(build(Algorithm::Avl, &[1, 2, 3])).unwrap();
        assert_eq!(data.tree.as_ref().map(Tree::len), Some(3));
    }
}
