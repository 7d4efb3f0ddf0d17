//! Fixed-capacity hash table with multiplicative, universal, linear-probing and double-hashing
//! placement.

mod strategy;
mod table;

pub use self::strategy::Strategy;
pub use self::table::{HashTable, DEFAULT_TABLE_SIZE, UNIVERSAL_A, UNIVERSAL_B};
