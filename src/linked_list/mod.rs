//! Self-organizing singly linked list with move-to-front and transpose heuristics and
//! Knuth-Morris-Pratt pattern search.

mod kmp;
mod list;

pub use self::kmp::{find, parse_pattern, prefix_table};
pub use self::list::{HeadDetails, Heuristic, LinkedList, LinkedListIter, SearchResult};
