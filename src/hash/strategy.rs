use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The slot placement strategies of a `HashTable`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Multiplicative hashing; a colliding key overwrites the slot.
    #[serde(rename = "knuth")]
    Knuth,
    /// Universal hashing with fixed coefficients; a colliding key overwrites the slot.
    #[serde(rename = "universal")]
    Universal,
    /// Knuth hashing with linear probing for the next open slot.
    #[serde(rename = "linear")]
    Linear,
    /// Knuth hashing with a second hash as the probe step.
    #[serde(rename = "double")]
    Double,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Knuth,
        Strategy::Universal,
        Strategy::Linear,
        Strategy::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Knuth => "knuth",
            Strategy::Universal => "universal",
            Strategy::Linear => "linear",
            Strategy::Double => "double",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Knuth
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Strategy::ALL
            .iter()
            .cloned()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| Error::UnknownStrategy(name.to_string()))
    }
}
