//! Index-addressed node storage for the linked structures.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a node allocated in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Block<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// A typed arena of nodes linked by `NodeId` instead of pointers.
///
/// Freed blocks are threaded onto a free list and reused by later allocations, so a structure
/// that repeatedly inserts and removes does not grow without bound. Handles to freed blocks are
/// not invalidated eagerly: `get` on a vacant block returns `None`, but a handle may later refer
/// to a different object once its block is reused.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), Some(2));
/// assert_eq!(arena.get(x), None);
/// ```
pub struct Arena<T> {
    head: Option<NodeId>,
    blocks: Vec<Block<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena {
            head: None,
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns its handle, reusing a freed block if there is
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// arena.free(x);
    /// assert_eq!(arena.allocate(5), x);
    /// ```
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                NodeId(self.blocks.len() - 1)
            },
            Some(id) => {
                let vacant_block = mem::replace(&mut self.blocks[id.0], Block::Occupied(value));
                if let Block::Vacant(next_id) = vacant_block {
                    self.head = next_id;
                }
                id
            },
        }
    }

    /// Frees the object at `id` and returns it. Returns `None` if `id` is out of bounds or
    /// already vacant.
    pub fn free(&mut self, id: NodeId) -> Option<T> {
        match self.blocks.get(id.0) {
            Some(Block::Occupied(_)) => {},
            _ => return None,
        }
        let old_block = mem::replace(&mut self.blocks[id.0], Block::Vacant(self.head.take()));
        self.head = Some(id);
        self.len -= 1;
        match old_block {
            Block::Occupied(value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.blocks.get(id.0) {
            Some(Block::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.blocks.get_mut(id.0) {
            Some(Block::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and forgets the free list.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node id refers to a vacant block.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node id refers to a vacant block.")
    }
}
