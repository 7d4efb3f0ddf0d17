use crate::error::{Error, Result};
use crate::hash::strategy::Strategy;

/// Number of slots of a table built with `HashTable::default`.
pub const DEFAULT_TABLE_SIZE: usize = 10;

const KNUTH_MULTIPLIER: i128 = 2_654_435_761;
const WORD_MODULUS: i128 = 1 << 32;

/// Default coefficients of `HashTable::universal_hash`.
pub const UNIVERSAL_A: i64 = 31;
pub const UNIVERSAL_B: i64 = 17;
const UNIVERSAL_PRIME: i128 = 101;

/// A fixed-capacity table of integer keys with a selectable placement strategy.
///
/// The table is a plain slot array with no buckets and no tombstones. The overwriting strategies
/// (`Knuth`, `Universal`) store each key at its hash and silently replace whatever was there. The
/// probing strategies (`Linear`, `Double`) search for an open slot and report a full table as
/// `Error::TableFull` without writing anything.
///
/// # Examples
/// ```
/// use classic_collections::hash::{HashTable, Strategy};
///
/// let mut table = HashTable::new(5, Strategy::Double).unwrap();
/// for key in &[10, 15, 20, 25, 30] {
///     assert!(table.insert(*key).unwrap().is_some());
/// }
/// assert!(table.is_full());
/// assert!(table.insert(35).is_err());
///
/// assert_eq!(table.remove(20), Some(3));
/// assert_eq!(table.insert(35).unwrap(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HashTable {
    slots: Vec<Option<i64>>,
    strategy: Strategy,
}

impl HashTable {
    /// Constructs an empty table with `table_size` slots. Returns `Error::InvalidTableSize` if
    /// `table_size` is zero.
    pub fn new(table_size: usize, strategy: Strategy) -> Result<Self> {
        if table_size == 0 {
            return Err(Error::InvalidTableSize(table_size));
        }
        Ok(HashTable {
            slots: vec![None; table_size],
            strategy,
        })
    }

    /// Changes the number of slots. The table is emptied even if the size is unchanged.
    pub fn set_table_size(&mut self, table_size: usize) -> Result<()> {
        if table_size == 0 {
            return Err(Error::InvalidTableSize(table_size));
        }
        debug!("hash table: reset to {} slots", table_size);
        self.slots = vec![None; table_size];
        Ok(())
    }

    /// Changes the strategy used for later insertions. Stored keys stay where they are.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<i64>] {
        &self.slots
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn contains(&self, key: i64) -> bool {
        self.slots.contains(&Some(key))
    }

    fn reduce(&self, value: i128) -> usize {
        value.rem_euclid(self.slots.len() as i128) as usize
    }

    /// Multiplicative hash: `(key * 2654435761 mod 2^32) mod table_size`.
    pub fn knuth_hash(&self, key: i64) -> usize {
        self.reduce((i128::from(key) * KNUTH_MULTIPLIER).rem_euclid(WORD_MODULUS))
    }

    /// Universal hash with the default coefficients.
    pub fn universal_hash(&self, key: i64) -> usize {
        self.universal_hash_with(key, UNIVERSAL_A, UNIVERSAL_B)
    }

    /// Universal hash: `((a * key + b) mod 101) mod table_size`.
    pub fn universal_hash_with(&self, key: i64, a: i64, b: i64) -> usize {
        let value = i128::from(a) * i128::from(key) + i128::from(b);
        self.reduce(value.rem_euclid(UNIVERSAL_PRIME))
    }

    /// Returns the first open slot at or after `knuth_hash(key)`, wrapping around the table.
    /// Returns `None` if every slot is occupied.
    pub fn linear_probing(&self, key: i64) -> Option<usize> {
        let size = self.slots.len();
        let start = self.knuth_hash(key);
        (0..size)
            .map(|offset| (start + offset) % size)
            .find(|&index| self.slots[index].is_none())
    }

    /// Returns the first open slot of the probe sequence `(h1 + i * h2) mod table_size` for
    /// `i` in `0..table_size`, where `h1 = knuth_hash(key)` and
    /// `h2 = 1 + key mod (table_size - 1)`. Returns `None` if no probed slot is open.
    pub fn double_hashing(&self, key: i64) -> Option<usize> {
        let size = self.slots.len() as u128;
        let h1 = self.knuth_hash(key) as u128;
        let h2 = if size > 1 {
            1 + i128::from(key).rem_euclid(size as i128 - 1) as u128
        } else {
            1
        };
        (0..size)
            .map(|i| ((h1 + i * h2) % size) as usize)
            .find(|&index| self.slots[index].is_none())
    }

    /// Returns the slot the current strategy would place `key` in.
    pub fn index_for(&self, key: i64) -> Option<usize> {
        match self.strategy {
            Strategy::Knuth => Some(self.knuth_hash(key)),
            Strategy::Universal => Some(self.universal_hash(key)),
            Strategy::Linear => self.linear_probing(key),
            Strategy::Double => self.double_hashing(key),
        }
    }

    /// Places `key` with the current strategy and returns its slot.
    ///
    /// Returns `Ok(None)` without changing the table if `key` is already stored, and
    /// `Err(Error::TableFull)` if a probing strategy finds no open slot.
    pub fn insert(&mut self, key: i64) -> Result<Option<usize>> {
        if self.contains(key) {
            return Ok(None);
        }

        let index = match self.index_for(key) {
            Some(index) => index,
            None => {
                warn!("hash table: no open slot for {} with {} strategy", key, self.strategy);
                return Err(Error::TableFull);
            },
        };
        if let Some(previous) = self.slots[index] {
            debug!("hash table: {} overwrites {} at slot {}", key, previous, index);
        }
        self.slots[index] = Some(key);
        Ok(Some(index))
    }

    /// Inserts `keys` in order. A key that does not fit is rejected on its own and the remaining
    /// keys are still inserted.
    pub fn insert_all(&mut self, keys: &[i64]) -> Vec<Result<Option<usize>>> {
        keys.iter().map(|&key| self.insert(key)).collect()
    }

    /// Clears the first slot holding `key` and returns its index.
    pub fn remove(&mut self, key: i64) -> Option<usize> {
        let index = self.slots.iter().position(|&slot| slot == Some(key))?;
        self.slots[index] = None;
        Some(index)
    }

    /// Empties every slot, keeping the size.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        HashTable {
            slots: vec![None; DEFAULT_TABLE_SIZE],
            strategy: Strategy::default(),
        }
    }
}
