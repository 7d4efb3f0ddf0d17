//! Classic in-memory data structures and the algorithms that build them.
//!
//! The crate contains binary search, AVL, B-Tree and Fibonacci tree builders that share a common
//! node vocabulary, a self-organizing singly linked list with Knuth-Morris-Pratt pattern search,
//! a probabilistic skip list, a fixed-capacity hash table with four placement strategies, and a
//! benchmark harness that times the tree builders.

extern crate base64;
#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

mod error;
pub mod arena;
pub mod benchmark;
pub mod hash;
pub mod linked_list;
pub mod session;
pub mod skiplist;
pub mod tree;
pub mod util;

pub use self::error::{Error, Result};
