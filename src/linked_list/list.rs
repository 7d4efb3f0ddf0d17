use crate::arena::{Arena, NodeId};
use crate::linked_list::kmp;

struct Node {
    value: i64,
    next: Option<NodeId>,
}

/// The self-organizing heuristic applied to a successful search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Heuristic {
    None,
    /// Relinks the found node as the head of the list.
    MoveToFront,
    /// Swaps the found value with the value of its predecessor.
    Transpose,
}

impl Heuristic {
    /// Combines the two heuristic flags. Move-to-front wins when both are set.
    pub fn from_flags(move_to_front: bool, transpose: bool) -> Self {
        if move_to_front {
            Heuristic::MoveToFront
        } else if transpose {
            Heuristic::Transpose
        } else {
            Heuristic::None
        }
    }
}

/// The outcome of a search: the position of the hit and the values around it.
///
/// `prev` and `current` are read after the heuristic has been applied, so a transposed hit
/// reports the searched value as `prev` and the displaced value as `current`. `next` is read
/// before the heuristic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub prev: Option<i64>,
    pub current: Option<i64>,
    pub next: Option<i64>,
}

impl SearchResult {
    pub fn miss() -> Self {
        SearchResult {
            index: None,
            prev: None,
            current: None,
            next: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.index.is_some()
    }
}

/// The head of the list and its successor.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeadDetails {
    pub head: Option<i64>,
    pub next: Option<i64>,
}

/// A singly linked list of unique integers that reorganizes itself on search.
///
/// Nodes are stored in an arena and linked by index. A successful search can move the found node
/// to the front of the list or transpose it with its predecessor, so that frequently searched
/// values drift towards the head.
///
/// # Examples
/// ```
/// use classic_collections::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// assert!(list.insert(3));
/// assert!(list.insert(1));
/// assert!(list.insert(4));
/// assert!(!list.insert(1));
///
/// let result = list.search(4, true, false);
/// assert_eq!(result.index, Some(2));
/// assert_eq!(list.to_vec(), vec![4, 3, 1]);
///
/// assert_eq!(list.kmp_search("31"), Some(1));
/// ```
pub struct LinkedList {
    nodes: Arena<Node>,
    head: Option<NodeId>,
    len: usize,
}

impl LinkedList {
    /// Constructs a new, empty `LinkedList`.
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            len: 0,
        }
    }

    /// Checks if `value` is stored in the list.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|stored| stored == value)
    }

    /// Appends `value` at the tail. Returns `false`, leaving the list unchanged, if the value is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.insert(1));
    /// assert!(!list.insert(1));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i64) -> bool {
        let mut tail = None;
        let mut curr = self.head;
        while let Some(id) = curr {
            if self.nodes[id].value == value {
                return false;
            }
            tail = curr;
            curr = self.nodes[id].next;
        }

        let new_node = self.nodes.allocate(Node { value, next: None });
        match tail {
            Some(id) => self.nodes[id].next = Some(new_node),
            None => self.head = Some(new_node),
        }
        self.len += 1;
        true
    }

    /// Removes the node holding `value`. Returns `false` if no node holds it.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.insert(1);
    /// list.insert(2);
    /// assert!(list.remove(1));
    /// assert!(!list.remove(1));
    /// assert_eq!(list.to_vec(), vec![2]);
    /// ```
    pub fn remove(&mut self, value: i64) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut curr = self.head;
        while let Some(id) = curr {
            let next = self.nodes[id].next;
            if self.nodes[id].value == value {
                match prev {
                    Some(prev_id) => self.nodes[prev_id].next = next,
                    None => self.head = next,
                }
                self.nodes.free(id);
                self.len -= 1;
                return true;
            }
            prev = curr;
            curr = next;
        }
        false
    }

    /// Searches for `value`, applying move-to-front or transpose to a hit that is not already the
    /// head. If both flags are set only move-to-front is applied.
    pub fn search(&mut self, value: i64, move_to_front: bool, transpose: bool) -> SearchResult {
        self.search_with(value, Heuristic::from_flags(move_to_front, transpose))
    }

    /// Searches for `value`, applying `heuristic` to a hit that is not already the head.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::linked_list::{Heuristic, LinkedList};
    ///
    /// let mut list = LinkedList::new();
    /// list.insert(1);
    /// list.insert(2);
    /// list.insert(3);
    ///
    /// let result = list.search_with(3, Heuristic::Transpose);
    /// assert_eq!(result.index, Some(2));
    /// assert_eq!(list.to_vec(), vec![1, 3, 2]);
    /// ```
    pub fn search_with(&mut self, value: i64, heuristic: Heuristic) -> SearchResult {
        let mut prev: Option<NodeId> = None;
        let mut curr = self.head;
        let mut index = 0;

        while let Some(id) = curr {
            let next_id = self.nodes[id].next;
            if self.nodes[id].value == value {
                let next = next_id.map(|next_id| self.nodes[next_id].value);
                if let Some(prev_id) = prev {
                    match heuristic {
                        Heuristic::MoveToFront => {
                            self.nodes[prev_id].next = next_id;
                            self.nodes[id].next = self.head;
                            self.head = Some(id);
                            debug!("linked list: moved {} to front from {}", value, index);
                        },
                        Heuristic::Transpose => {
                            let prev_value = self.nodes[prev_id].value;
                            self.nodes[prev_id].value = self.nodes[id].value;
                            self.nodes[id].value = prev_value;
                            debug!("linked list: transposed {} with {}", value, prev_value);
                        },
                        Heuristic::None => {},
                    }
                }

                return SearchResult {
                    index: Some(index),
                    prev: prev.map(|prev_id| self.nodes[prev_id].value),
                    current: Some(self.nodes[id].value),
                    next,
                };
            }
            prev = curr;
            curr = next_id;
            index += 1;
        }
        SearchResult::miss()
    }

    /// Finds the first run of consecutive values equal to the digits of `pattern`, using the
    /// Knuth-Morris-Pratt algorithm. Returns the index where the run starts, or `None` if the
    /// list or pattern is empty, the pattern contains a non-digit, or there is no match.
    pub fn kmp_search(&self, pattern: &str) -> Option<usize> {
        if self.head.is_none() {
            return None;
        }
        let digits = kmp::parse_pattern(pattern)?;
        kmp::find(self.iter(), &digits)
    }

    /// Returns the head value and the value after it.
    pub fn head(&self) -> HeadDetails {
        match self.head {
            None => HeadDetails::default(),
            Some(id) => HeadDetails {
                head: Some(self.nodes[id].value),
                next: self.nodes[id].next.map(|next_id| self.nodes[next_id].value),
            },
        }
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    /// Returns the values from head to tail.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Returns an iterator over the values from head to tail.
    pub fn iter(&self) -> LinkedListIter {
        LinkedListIter {
            list: self,
            curr: self.head,
        }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        LinkedList::new()
    }
}

/// An iterator over the values of a `LinkedList`.
pub struct LinkedListIter<'a> {
    list: &'a LinkedList,
    curr: Option<NodeId>,
}

impl<'a> Iterator for LinkedListIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.curr?;
        let node = &self.list.nodes[id];
        self.curr = node.next;
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i64;
    type IntoIter = LinkedListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{HeadDetails, Heuristic, LinkedList, SearchResult};

    fn from(values: &[i64]) -> LinkedList {
        let mut list = LinkedList::new();
        for &value in values {
            list.insert(value);
        }
        list
    }

    #[test]
    fn test_len_empty() {
        let list = LinkedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.head(), HeadDetails::default());
    }

    #[test]
    fn test_insert_appends() {
        let list = from(&[3, 1, 2]);
        assert_eq!(list.to_vec(), vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut list = from(&[3, 1, 2]);
        assert!(!list.insert(1));
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut list = from(&[3, 1, 2]);
        assert!(list.remove(3));
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert!(list.remove(2));
        assert_eq!(list.to_vec(), vec![1]);
        assert!(!list.remove(7));
        assert_eq!(list.len(), 1);
        assert!(list.remove(1));
        assert!(list.is_empty());
        assert!(!list.remove(1));
    }

    #[test]
    fn test_remove_then_insert() {
        let mut list = from(&[1, 2, 3]);
        list.remove(2);
        assert!(list.insert(2));
        assert_eq!(list.to_vec(), vec![1, 3, 2]);
    }

    #[test]
    fn test_search_plain() {
        let mut list = from(&[3, 1, 4, 5]);
        assert_eq!(
            list.search(4, false, false),
            SearchResult {
                index: Some(2),
                prev: Some(1),
                current: Some(4),
                next: Some(5),
            },
        );
        assert_eq!(list.to_vec(), vec![3, 1, 4, 5]);
    }

    #[test]
    fn test_search_miss() {
        let mut list = from(&[3, 1]);
        assert_eq!(list.search(9, true, false), SearchResult::miss());
        assert!(!list.search(9, false, false).is_hit());
        let mut empty = LinkedList::new();
        assert_eq!(empty.search(1, false, true), SearchResult::miss());
    }

    #[test]
    fn test_move_to_front() {
        let mut list = from(&[3, 1, 4, 5]);
        let result = list.search(4, true, false);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.prev, Some(1));
        assert_eq!(result.next, Some(5));
        assert_eq!(list.to_vec(), vec![4, 3, 1, 5]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.head(), HeadDetails { head: Some(4), next: Some(3) });
    }

    #[test]
    fn test_move_to_front_tail() {
        let mut list = from(&[3, 1, 4]);
        list.search(4, true, false);
        assert_eq!(list.to_vec(), vec![4, 3, 1]);
        assert!(list.insert(9));
        assert_eq!(list.to_vec(), vec![4, 3, 1, 9]);
    }

    #[test]
    fn test_move_to_front_head_is_noop() {
        let mut list = from(&[3, 1, 4]);
        let result = list.search(3, true, false);
        assert_eq!(result.index, Some(0));
        assert_eq!(result.prev, None);
        assert_eq!(list.to_vec(), vec![3, 1, 4]);
    }

    #[test]
    fn test_transpose_swaps_values() {
        let mut list = from(&[3, 1, 4, 5]);
        let result = list.search(4, false, true);
        assert_eq!(
            result,
            SearchResult {
                index: Some(2),
                prev: Some(4),
                current: Some(1),
                next: Some(5),
            },
        );
        assert_eq!(list.to_vec(), vec![3, 4, 1, 5]);
        assert_eq!(list.search(4, false, true).index, Some(1));
        assert_eq!(list.to_vec(), vec![4, 3, 1, 5]);
    }

    #[test]
    fn test_both_flags_moves_to_front() {
        let mut list = from(&[3, 1, 4, 5]);
        list.search(5, true, true);
        assert_eq!(list.to_vec(), vec![5, 3, 1, 4]);
        assert_eq!(Heuristic::from_flags(true, true), Heuristic::MoveToFront);
    }

    #[test]
    fn test_kmp_search() {
        let list = from(&[3, 1, 4, 5, 9, 2]);
        assert_eq!(list.kmp_search("41"), None);
        assert_eq!(list.kmp_search("45"), Some(2));
        assert_eq!(list.kmp_search("3"), Some(0));
        assert_eq!(list.kmp_search("92"), Some(4));
        assert_eq!(list.kmp_search(""), None);
        assert_eq!(list.kmp_search("4a"), None);
        assert_eq!(LinkedList::new().kmp_search("1"), None);
    }

    #[test]
    fn test_kmp_matches_single_digit_run() {
        let list = from(&[12, 1, 2]);
        assert_eq!(list.kmp_search("12"), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut list = from(&[3, 1, 4]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_vec(), Vec::<i64>::new());
        assert!(list.insert(3));
        assert_eq!(list.to_vec(), vec![3]);
    }

    #[test]
    fn test_into_iter() {
        let list = from(&[2, 7]);
        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 9);
    }
}
