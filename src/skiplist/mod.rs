//! Probabilistic multi-level linked list of integers.

mod list;

pub use self::list::{SkipEntry, SkipList, DEFAULT_MAX_LEVEL, PROMOTION_PROBABILITY};
