use crate::arena::{Arena, NodeId};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::cmp;

/// Default number of levels of a skip list.
pub const DEFAULT_MAX_LEVEL: usize = 4;

/// Probability that a new node is promoted one level further.
pub const PROMOTION_PROBABILITY: f64 = 0.33;

struct Node {
    // `None` only for the head sentinel
    value: Option<i64>,
    forward: Vec<Option<NodeId>>,
}

/// A value in the bottom level of a skip list together with the number of levels it spans.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SkipEntry {
    pub value: i64,
    pub level: usize,
}

/// An ordered list of integers implemented by a skiplist.
///
/// A skiplist is a probabilistic data structure that maintains a linked hierarchy of
/// subsequences. The bottom level is a sorted linked list of every value, and each node is
/// promoted to the next level with probability `PROMOTION_PROBABILITY`, up to `max_level` levels.
/// Searches start at the highest occupied level and drop down a level whenever the next node
/// would overshoot, so search, insertion and removal take expected logarithmic time.
///
/// Duplicate values are allowed and sit next to each other in the bottom level.
///
/// # Examples
/// ```
/// use classic_collections::skiplist::SkipList;
///
/// let mut list = SkipList::new();
/// list.insert(5);
/// list.insert(1);
/// list.insert(3);
///
/// assert!(list.search(3));
/// assert!(!list.search(2));
/// assert_eq!(list.values(), vec![1, 3, 5]);
///
/// assert!(list.remove(3));
/// assert!(!list.remove(3));
/// assert_eq!(list.len(), 2);
/// ```
pub struct SkipList {
    nodes: Arena<Node>,
    head: NodeId,
    level: usize,
    max_level: usize,
    rng: XorShiftRng,
    len: usize,
}

impl SkipList {
    /// Constructs a new, empty `SkipList` with `DEFAULT_MAX_LEVEL` levels.
    pub fn new() -> Self {
        SkipList::with_max_level(DEFAULT_MAX_LEVEL)
    }

    /// Constructs a new, empty `SkipList` with at most `max_level` levels. A `max_level` of zero is
    /// raised to one.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::skiplist::SkipList;
    ///
    /// let list = SkipList::with_max_level(8);
    /// assert_eq!(list.max_level(), 8);
    /// ```
    pub fn with_max_level(max_level: usize) -> Self {
        SkipList::from_rng(max_level, XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `SkipList` whose level draws are seeded with `seed`. An all-zero
    /// seed falls back to the default unseeded generator.
    pub fn with_seed(max_level: usize, seed: [u32; 4]) -> Self {
        let rng = if seed.iter().all(|&word| word == 0) {
            XorShiftRng::new_unseeded()
        } else {
            XorShiftRng::from_seed(seed)
        };
        SkipList::from_rng(max_level, rng)
    }

    fn from_rng(max_level: usize, rng: XorShiftRng) -> Self {
        let max_level = cmp::max(max_level, 1);
        let mut nodes = Arena::new();
        let head = nodes.allocate(Node {
            value: None,
            forward: vec![None; max_level],
        });
        SkipList {
            nodes,
            head,
            level: 0,
            max_level,
            rng,
            len: 0,
        }
    }

    /// Draws a node level in `[1, max_level]`. Each draw below `PROMOTION_PROBABILITY` adds a
    /// level until the cap is reached.
    pub fn random_level(&mut self) -> usize {
        let mut level = 1;
        while self.rng.next_f64() < PROMOTION_PROBABILITY && level < self.max_level {
            level += 1;
        }
        level
    }

    fn is_before(&self, id: NodeId, value: i64) -> bool {
        self.nodes[id].value.map_or(false, |stored| stored < value)
    }

    // Returns, for every level, the rightmost node whose value is less than `value`. Levels above
    // the current level point at the head.
    fn find_predecessors(&self, value: i64) -> Vec<NodeId> {
        let mut update = vec![self.head; self.max_level];
        let mut curr = self.head;
        for i in (0..self.level).rev() {
            while let Some(next) = self.nodes[curr].forward[i] {
                if !self.is_before(next, value) {
                    break;
                }
                curr = next;
            }
            update[i] = curr;
        }
        update
    }

    /// Inserts `value` at its sorted position.
    pub fn insert(&mut self, value: i64) {
        let update = self.find_predecessors(value);
        let new_level = self.random_level();
        if new_level > self.level {
            debug!("skiplist: level raised from {} to {}", self.level, new_level);
            self.level = new_level;
        }

        let new_node = self.nodes.allocate(Node {
            value: Some(value),
            forward: vec![None; new_level],
        });
        for (i, &prev) in update.iter().enumerate().take(new_level) {
            self.nodes[new_node].forward[i] = self.nodes[prev].forward[i];
            self.nodes[prev].forward[i] = Some(new_node);
        }
        self.len += 1;
    }

    /// Removes one node holding `value`. Returns `false` if no node holds it.
    pub fn remove(&mut self, value: i64) -> bool {
        let update = self.find_predecessors(value);
        let target = match self.nodes[update[0]].forward[0] {
            Some(id) if self.nodes[id].value == Some(value) => id,
            _ => return false,
        };

        for (i, &prev) in update.iter().enumerate().take(self.level) {
            // the target does not reach this level
            if self.nodes[prev].forward[i] != Some(target) {
                break;
            }
            self.nodes[prev].forward[i] = self.nodes[target].forward[i];
        }
        self.nodes.free(target);
        self.len -= 1;
        true
    }

    /// Checks if `value` is stored in the list.
    pub fn search(&self, value: i64) -> bool {
        let update = self.find_predecessors(value);
        match self.nodes[update[0]].forward[0] {
            Some(id) => self.nodes[id].value == Some(value),
            None => false,
        }
    }

    /// Returns every value in order with the number of levels its node spans.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::skiplist::SkipList;
    ///
    /// let mut list = SkipList::with_max_level(1);
    /// list.insert(2);
    /// list.insert(1);
    /// let entries = list.to_vec();
    /// assert_eq!(entries[0].value, 1);
    /// assert_eq!(entries[0].level, 1);
    /// ```
    pub fn to_vec(&self) -> Vec<SkipEntry> {
        self.iter_nodes()
            .map(|id| SkipEntry {
                value: self.nodes[id].value.unwrap_or_default(),
                level: self.nodes[id].forward.len(),
            })
            .collect()
    }

    /// Returns every value in order.
    pub fn values(&self) -> Vec<i64> {
        self.iter_nodes().filter_map(|id| self.nodes[id].value).collect()
    }

    /// Returns the values linked at `level`, in order.
    pub fn level_values(&self, level: usize) -> Vec<i64> {
        let mut ret = Vec::new();
        if level >= self.max_level {
            return ret;
        }
        let mut curr = self.nodes[self.head].forward[level];
        while let Some(id) = curr {
            ret.extend(self.nodes[id].value);
            curr = self.nodes[id].forward[level];
        }
        ret
    }

    fn iter_nodes<'a>(&'a self) -> impl Iterator<Item = NodeId> + 'a {
        let mut curr = self.nodes[self.head].forward[0];
        std::iter::from_fn(move || {
            let id = curr?;
            curr = self.nodes[id].forward[0];
            Some(id)
        })
    }

    /// Removes every value and resets the level to zero.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = self.nodes.allocate(Node {
            value: None,
            forward: vec![None; self.max_level],
        });
        self.level = 0;
        self.len = 0;
    }

    /// Returns the number of levels currently in use.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SkipList {
    fn default() -> Self {
        SkipList::new()
    }
}
