//! Wall-clock timing of the tree builders over a shared input.

use crate::tree::{self, BTreeNode, BinaryNode};
use std::fmt;
use std::time::{Duration, Instant};

/// Depth of the Fibonacci tree built by every benchmark run.
pub const BENCHMARK_FIB_DEPTH: usize = 10;

/// The structures timed by a benchmark run.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Structure {
    #[serde(rename = "BST")]
    Bst,
    #[serde(rename = "AVL")]
    Avl,
    #[serde(rename = "B-Tree")]
    BTree,
    #[serde(rename = "Fib-Tree")]
    FibTree,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::Bst,
        Structure::Avl,
        Structure::BTree,
        Structure::FibTree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Structure::Bst => "BST",
            Structure::Avl => "AVL",
            Structure::BTree => "B-Tree",
            Structure::FibTree => "Fib-Tree",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Elapsed build time of every structure in a benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkReport {
    pub bst: Duration,
    pub avl: Duration,
    pub btree: Duration,
    pub fib_tree: Duration,
}

impl BenchmarkReport {
    pub fn get(&self, structure: Structure) -> Duration {
        match structure {
            Structure::Bst => self.bst,
            Structure::Avl => self.avl,
            Structure::BTree => self.btree,
            Structure::FibTree => self.fib_tree,
        }
    }

    /// Returns every entry in `Structure::ALL` order.
    pub fn entries(&self) -> Vec<(Structure, Duration)> {
        Structure::ALL
            .iter()
            .map(|&structure| (structure, self.get(structure)))
            .collect()
    }

    /// Returns every entry as a label and a millisecond figure with four decimals.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::benchmark;
    ///
    /// let report = benchmark::run(&[3, 1, 2]);
    /// let rows = report.formatted();
    /// assert_eq!(rows[0].0, "BST");
    /// assert_eq!(rows[3].0, "Fib-Tree");
    /// assert!(rows.iter().all(|(_, millis)| millis.split('.').nth(1).unwrap().len() == 4));
    /// ```
    pub fn formatted(&self) -> Vec<(&'static str, String)> {
        self.entries()
            .into_iter()
            .map(|(structure, elapsed)| (structure.label(), format_millis(elapsed)))
            .collect()
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, millis) in self.formatted() {
            writeln!(f, "{}: {}ms", label, millis)?;
        }
        Ok(())
    }
}

/// Converts `duration` into fractional milliseconds.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs() as f64 * 1e3 + f64::from(duration.subsec_nanos()) / 1e6
}

/// Formats `duration` as milliseconds with four decimals.
pub fn format_millis(duration: Duration) -> String {
    format!("{:.4}", as_millis_f64(duration))
}

fn measure<F>(callback: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    callback();
    start.elapsed()
}

// Builds the Fibonacci tree, then sums the cost of timing each node on its own.
fn measure_fibonacci(depth: usize) -> Duration {
    let root = tree::build_fibonacci_tree(depth);
    let mut total = Duration::new(0, 0);
    let mut stack: Vec<&BinaryNode> = vec![&root];
    while let Some(node) = stack.pop() {
        total += measure(|| {});
        stack.extend(node.children());
    }
    total
}

/// Builds a binary search tree, an AVL tree and a B-Tree from `values`, and a Fibonacci tree of
/// depth `BENCHMARK_FIB_DEPTH`, timing each.
///
/// # Examples
/// ```
/// use classic_collections::benchmark::{self, Structure};
///
/// let report = benchmark::run(&[5, 3, 8, 1]);
/// assert_eq!(report.entries().len(), 4);
/// assert_eq!(report.entries()[2].0, Structure::BTree);
/// ```
pub fn run(values: &[i64]) -> BenchmarkReport {
    let bst = measure(|| {
        let root = values
            .iter()
            .fold(None, |root, &value| Some(tree::insert_bst(root, value)));
        drop(root);
    });
    trace!("benchmark: BST over {} values took {:?}", values.len(), bst);

    let avl = measure(|| {
        let root = values
            .iter()
            .fold(None, |root, &value| Some(tree::insert_avl(root, value)));
        drop(root);
    });
    trace!("benchmark: AVL over {} values took {:?}", values.len(), avl);

    let btree = measure(|| {
        let root: Option<BTreeNode> = values
            .iter()
            .fold(None, |root, &value| Some(tree::insert_btree(root, value)));
        drop(root);
    });
    trace!("benchmark: B-Tree over {} values took {:?}", values.len(), btree);

    let fib_tree = measure_fibonacci(BENCHMARK_FIB_DEPTH);
    trace!("benchmark: Fib-Tree of depth {} took {:?}", BENCHMARK_FIB_DEPTH, fib_tree);

    BenchmarkReport {
        bst,
        avl,
        btree,
        fib_tree,
    }
}

#[cfg(test)]
mod tests {
    use super::{as_millis_f64, format_millis, run, Structure};
    use std::time::Duration;

    #[test]
    fn test_as_millis_f64() {
        assert_eq!(as_millis_f64(Duration::new(1, 500_000)), 1000.5);
        assert_eq!(as_millis_f64(Duration::new(0, 0)), 0.0);
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(Duration::new(0, 1_234_567)), "1.2346");
        assert_eq!(format_millis(Duration::new(0, 0)), "0.0000");
        assert_eq!(format_millis(Duration::new(2, 0)), "2000.0000");
    }

    #[test]
    fn test_run_empty() {
        let report = run(&[]);
        let labels: Vec<&str> = report.formatted().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["BST", "AVL", "B-Tree", "Fib-Tree"]);
    }

    #[test]
    fn test_run_does_not_mutate_input() {
        let values = vec![9, 2, 7, 4];
        run(&values);
        assert_eq!(values, vec![9, 2, 7, 4]);
    }

    #[test]
    fn test_run_sorted_input() {
        let values = (0..10_000).collect::<Vec<i64>>();
        let report = run(&values);
        assert_eq!(report.entries().len(), 4);
    }

    #[test]
    fn test_display() {
        let report = run(&[1, 2, 3]);
        let output = report.to_string();
        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("BST: "));
        assert!(output.lines().all(|line| line.ends_with("ms")));
    }

    #[test]
    fn test_get() {
        let report = run(&[1]);
        for &structure in &Structure::ALL {
            assert!(report.entries().contains(&(structure, report.get(structure))));
        }
    }
}
