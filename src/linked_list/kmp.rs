//! Knuth-Morris-Pratt search over sequences of integers.

/// Converts a pattern string into its digit sequence. Returns `None` if the pattern contains a
/// character that is not a decimal digit, since such a pattern cannot match any stored value.
pub fn parse_pattern(pattern: &str) -> Option<Vec<i64>> {
    pattern.chars().map(|c| c.to_digit(10).map(i64::from)).collect()
}

/// Computes the prefix table of `pattern`: entry `i` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
///
/// # Examples
/// ```
/// use classic_collections::linked_list::prefix_table;
///
/// assert_eq!(prefix_table(&[1, 2, 1, 2, 3]), vec![0, 0, 1, 2, 0]);
/// ```
pub fn prefix_table(pattern: &[i64]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }
    table
}

/// Returns the starting index of the first occurrence of `pattern` as a contiguous run of
/// `values`. An empty pattern matches nothing.
pub fn find<I>(values: I, pattern: &[i64]) -> Option<usize>
where
    I: IntoIterator<Item = i64>,
{
    if pattern.is_empty() {
        return None;
    }

    let table = prefix_table(pattern);
    let mut matched = 0;
    for (index, value) in values.into_iter().enumerate() {
        while matched > 0 && value != pattern[matched] {
            matched = table[matched - 1];
        }
        if value == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            return Some(index + 1 - pattern.len());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{find, parse_pattern, prefix_table};

    #[test]
    fn test_parse_pattern() {
        assert_eq!(parse_pattern("41"), Some(vec![4, 1]));
        assert_eq!(parse_pattern(""), Some(vec![]));
        assert_eq!(parse_pattern("4,1"), None);
        assert_eq!(parse_pattern("-1"), None);
    }

    #[test]
    fn test_prefix_table() {
        assert_eq!(prefix_table(&[]), Vec::<usize>::new());
        assert_eq!(prefix_table(&[7]), vec![0]);
        assert_eq!(prefix_table(&[1, 1, 1, 1]), vec![0, 1, 2, 3]);
        assert_eq!(prefix_table(&[1, 2, 1, 1, 2, 1, 2]), vec![0, 0, 1, 1, 2, 3, 2]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(vec![3, 1, 4, 1, 5, 9], &[4, 1]), Some(2));
        assert_eq!(find(vec![3, 1, 4, 1, 5, 9], &[3]), Some(0));
        assert_eq!(find(vec![3, 1, 4, 1, 5, 9], &[5, 9]), Some(4));
        assert_eq!(find(vec![3, 1, 4, 1, 5, 9], &[9, 3]), None);
        assert_eq!(find(vec![3, 1], &[3, 1, 4]), None);
        assert_eq!(find(vec![3, 1], &[]), None);
    }

    #[test]
    fn test_find_after_partial_match() {
        // the match begins inside the failed attempt
        assert_eq!(find(vec![1, 1, 2, 1, 1, 2, 1, 1, 3], &[1, 1, 2, 1, 1, 3]), Some(3));
        assert_eq!(find(vec![1, 1, 1, 2], &[1, 1, 2]), Some(1));
    }
}
