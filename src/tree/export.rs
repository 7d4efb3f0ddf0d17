use crate::tree::node::{BTreeNode, BinaryNode};
use crate::tree::{Algorithm, Tree};

/// A row of the tabular export of a tree.
///
/// The first row describes the input, every following row describes one node in pre-order.
/// B-Tree nodes render their keys joined by `", "`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableRow {
    Header {
        #[serde(rename = "type")]
        kind: String,
        values: String,
    },
    Node {
        value: String,
        parent: Option<String>,
        children: String,
    },
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<String>>().join(", ")
}

fn push_binary(rows: &mut Vec<TableRow>, root: &BinaryNode) {
    let mut stack: Vec<(&BinaryNode, Option<String>)> = vec![(root, None)];
    while let Some((node, parent)) = stack.pop() {
        let label = node.value.to_string();
        let children = node.children();
        rows.push(TableRow::Node {
            value: label.clone(),
            parent,
            children: join(&children.iter().map(|child| child.value).collect::<Vec<i64>>()),
        });
        stack.extend(children.into_iter().rev().map(|child| (child, Some(label.clone()))));
    }
}

fn push_btree(rows: &mut Vec<TableRow>, root: &BTreeNode) {
    let mut stack: Vec<(&BTreeNode, Option<String>)> = vec![(root, None)];
    while let Some((node, parent)) = stack.pop() {
        let label = join(&node.values);
        rows.push(TableRow::Node {
            value: label.clone(),
            parent,
            children: node
                .children
                .iter()
                .map(|child| join(&child.values))
                .collect::<Vec<String>>()
                .join(", "),
        });
        stack.extend(node.children.iter().rev().map(|child| (child, Some(label.clone()))));
    }
}

/// Flattens a tree into export rows: a header naming the algorithm and its input values, then one
/// row per node with its parent and immediate children.
///
/// # Examples
/// ```
/// use classic_collections::tree::{self, Algorithm, TableRow};
///
/// let values = [2, 1, 3];
/// let tree = tree::build(Algorithm::Bst, &values);
/// let rows = tree::table_rows(tree.as_ref(), Algorithm::Bst, &values);
///
/// assert_eq!(rows.len(), 4);
/// assert_eq!(
///     rows[1],
///     TableRow::Node {
///         value: String::from("2"),
///         parent: None,
///         children: String::from("1, 3"),
///     },
/// );
/// ```
pub fn table_rows(tree: Option<&Tree>, algorithm: Algorithm, values: &[i64]) -> Vec<TableRow> {
    let mut rows = vec![TableRow::Header {
        kind: algorithm.label().to_string(),
        values: join(values),
    }];
    match tree {
        Some(Tree::Binary(root)) => push_binary(&mut rows, root),
        Some(Tree::BTree(root)) => push_btree(&mut rows, root),
        None => {},
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{table_rows, TableRow};
    use crate::tree::{self, Algorithm};

    fn node(value: &str, parent: Option<&str>, children: &str) -> TableRow {
        TableRow::Node {
            value: value.to_string(),
            parent: parent.map(|parent| parent.to_string()),
            children: children.to_string(),
        }
    }

    #[test]
    fn test_header_only() {
        let rows = table_rows(None, Algorithm::Avl, &[]);
        assert_eq!(
            rows,
            vec![TableRow::Header {
                kind: String::from("AVL"),
                values: String::new(),
            }],
        );
    }

    #[test]
    fn test_binary_pre_order() {
        let values = [5, 3, 8, 1];
        let tree = tree::build(Algorithm::Bst, &values);
        let rows = table_rows(tree.as_ref(), Algorithm::Bst, &values);
        assert_eq!(
            rows,
            vec![
                TableRow::Header {
                    kind: String::from("BST"),
                    values: String::from("5, 3, 8, 1"),
                },
                node("5", None, "3, 8"),
                node("3", Some("5"), "1"),
                node("1", Some("3"), ""),
                node("8", Some("5"), ""),
            ],
        );
    }

    #[test]
    fn test_btree_rows() {
        let values = [1, 2, 3, 4];
        let tree = tree::build(Algorithm::BTree, &values);
        let rows = table_rows(tree.as_ref(), Algorithm::BTree, &values);
        assert_eq!(rows[0], TableRow::Header {
            kind: String::from("B-TREE"),
            values: String::from("1, 2, 3, 4"),
        });
        assert_eq!(rows[1], node("2", None, "1, 3, 4"));
        assert_eq!(rows[2], node("1", Some("2"), ""));
        assert_eq!(rows[3], node("3, 4", Some("2"), ""));
    }

    #[test]
    fn test_rows_serialize() {
        let rows = table_rows(None, Algorithm::FibTree, &[1, 2]);
        assert_eq!(
            serde_json::to_string(&rows).unwrap(),
            r#"[{"type":"FIB-TREE","values":"1, 2"}]"#,
        );
    }

    #[test]
    fn test_sorted_input_rows() {
        let values = (0..20_000).collect::<Vec<i64>>();
        let tree = tree::build(Algorithm::Bst, &values);
        let rows = table_rows(tree.as_ref(), Algorithm::Bst, &values);
        assert_eq!(rows.len(), values.len() + 1);
        assert_eq!(rows[2], node("1", Some("0"), "2"));
        assert_eq!(rows[values.len()], node("19999", Some("19998"), ""));
    }
}
