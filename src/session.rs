//! Input handling and shareable state for an interactive run.
//!
//! A `Session` owns the value list every structure is built from, the selected tree algorithm and
//! the number of values to draw on regeneration. Its state round-trips through a Base64 JSON
//! payload that can be embedded in a link.

use crate::benchmark::{self, BenchmarkReport};
use crate::error::{Error, Result};
use crate::tree::{self, Algorithm, TableRow, TreeData};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;
use std::collections::HashSet;

/// Upper bound on the number of values drawn by a session.
pub const MAX_VERTICES: usize = 100;

/// Random values are drawn from `[0, VALUE_RANGE)`.
pub const VALUE_RANGE: usize = 1000;

/// Number of values drawn by a new session.
pub const DEFAULT_VERTICES: usize = 7;

/// Returns `size` distinct values drawn uniformly from `[0, VALUE_RANGE)`. `size` is capped at
/// `VALUE_RANGE`.
///
/// # Examples
/// ```
/// use classic_collections::session;
///
/// let values = session::generate_random_values(20, &mut rand::thread_rng());
/// assert_eq!(values.len(), 20);
/// assert!(values.iter().all(|&value| value >= 0 && value < 1000));
/// ```
pub fn generate_random_values<R: Rng>(size: usize, rng: &mut R) -> Vec<i64> {
    let size = if size > VALUE_RANGE { VALUE_RANGE } else { size };
    let mut seen = HashSet::with_capacity(size);
    let mut values = Vec::with_capacity(size);
    while values.len() < size {
        let value = rng.gen_range(0, VALUE_RANGE as i64);
        if seen.insert(value) {
            values.push(value);
        }
    }
    values
}

/// Parses a single integer, ignoring surrounding whitespace.
pub fn parse_value(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(input.to_string()))
}

/// Parses a comma-separated list of integers, skipping entries that do not parse.
///
/// # Examples
/// ```
/// use classic_collections::session;
///
/// assert_eq!(session::parse_value_list("4, x, -2,,7"), vec![4, -2, 7]);
/// ```
pub fn parse_value_list(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|entry| parse_value(entry).ok())
        .collect()
}

/// Checks that `count` does not exceed `MAX_VERTICES`.
pub fn validate_vertex_count(count: usize) -> Result<usize> {
    if count > MAX_VERTICES {
        return Err(Error::TooManyVertices(count));
    }
    Ok(count)
}

/// The shareable part of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub random_values: Vec<i64>,
    pub selected_algorithm: Algorithm,
    pub num_vertices: usize,
}

impl SessionState {
    /// Serializes the state to JSON and encodes it with the standard Base64 alphabet.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::session::SessionState;
    /// use classic_collections::tree::Algorithm;
    ///
    /// let state = SessionState {
    ///     random_values: vec![1, 2],
    ///     selected_algorithm: Algorithm::Bst,
    ///     num_vertices: 2,
    /// };
    /// let payload = state.encode().unwrap();
    /// assert_eq!(SessionState::decode(&payload).unwrap(), state);
    /// ```
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decodes a payload produced by `encode`. Any malformed payload is reported as
    /// `Error::InvalidLink`.
    pub fn decode(payload: &str) -> Result<SessionState> {
        let bytes = STANDARD.decode(payload.trim())?;
        let json = String::from_utf8(bytes)?;
        let state: SessionState =
            serde_json::from_str(&json).map_err(|err| Error::InvalidLink(err.to_string()))?;
        if state.num_vertices > MAX_VERTICES {
            return Err(Error::InvalidLink(
                Error::TooManyVertices(state.num_vertices).to_string(),
            ));
        }
        Ok(state)
    }

    /// Returns a link to `origin` carrying the encoded state in its `data` query parameter.
    pub fn share_url(&self, origin: &str) -> Result<String> {
        Ok(format!("{}?data={}", origin, self.encode()?))
    }
}

/// The mutable state of an interactive run.
///
/// # Examples
/// ```
/// use classic_collections::session::Session;
/// use classic_collections::tree::Algorithm;
///
/// let mut session = Session::new(&mut rand::thread_rng());
/// assert_eq!(session.values().len(), 7);
///
/// session.set_algorithm(Algorithm::Avl);
/// let link = session.share_url("http://localhost").unwrap();
/// let payload = link.splitn(2, "?data=").nth(1).unwrap();
///
/// let mut other = Session::new(&mut rand::thread_rng());
/// other.restore_from_link(payload).unwrap();
/// assert_eq!(other.state(), session.state());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Constructs a session with `DEFAULT_VERTICES` random values and the binary search tree
    /// selected.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Session::from_state(SessionState {
            random_values: generate_random_values(DEFAULT_VERTICES, rng),
            selected_algorithm: Algorithm::Bst,
            num_vertices: DEFAULT_VERTICES,
        })
    }

    pub fn from_state(state: SessionState) -> Self {
        Session { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn values(&self) -> &[i64] {
        &self.state.random_values
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state.selected_algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.state.selected_algorithm = algorithm;
    }

    pub fn num_vertices(&self) -> usize {
        self.state.num_vertices
    }

    /// Sets the number of values drawn by `regenerate`. Counts above `MAX_VERTICES` are rejected
    /// and leave the session unchanged.
    pub fn set_num_vertices(&mut self, count: usize) -> Result<()> {
        self.state.num_vertices = validate_vertex_count(count)?;
        Ok(())
    }

    /// Parses `input` and appends it to the values. Returns `Ok(false)` if the value is already
    /// present.
    pub fn add_value(&mut self, input: &str) -> Result<bool> {
        let value = parse_value(input)?;
        if self.state.random_values.contains(&value) {
            return Ok(false);
        }
        self.state.random_values.push(value);
        Ok(true)
    }

    /// Parses `input` and removes every occurrence of it. Returns `Ok(false)` if the value was
    /// absent.
    pub fn remove_value(&mut self, input: &str) -> Result<bool> {
        let value = parse_value(input)?;
        let len = self.state.random_values.len();
        self.state.random_values.retain(|&stored| stored != value);
        Ok(self.state.random_values.len() != len)
    }

    /// Replaces the values with `num_vertices` fresh random values.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.state.random_values = generate_random_values(self.state.num_vertices, rng);
        debug!("session: regenerated {} values", self.state.random_values.len());
    }

    /// Builds and fingerprints the tree of the selected algorithm.
    pub fn tree_data(&self) -> Result<TreeData> {
        tree::generate_tree_data(self.state.selected_algorithm, &self.state.random_values)
    }

    /// Returns the tabular export of `data`, or `None` if there is no tree to export.
    pub fn table_rows(&self, data: &TreeData) -> Option<Vec<TableRow>> {
        data.tree.as_ref().map(|tree| {
            tree::table_rows(
                Some(tree),
                self.state.selected_algorithm,
                &self.state.random_values,
            )
        })
    }

    pub fn benchmark(&self) -> BenchmarkReport {
        benchmark::run(&self.state.random_values)
    }

    pub fn share_url(&self, origin: &str) -> Result<String> {
        self.state.share_url(origin)
    }

    /// Replaces the state with the one encoded in `payload`. On failure the session is left
    /// unchanged.
    pub fn restore_from_link(&mut self, payload: &str) -> Result<()> {
        match SessionState::decode(payload) {
            Ok(state) => {
                self.state = state;
                Ok(())
            },
            Err(err) => {
                warn!("session: rejected link payload: {}", err);
                Err(err)
            },
        }
    }
}
