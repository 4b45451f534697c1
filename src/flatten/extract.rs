//! Tree walking and value extraction
//!
//! Resolves one path specification against a JSON document, producing the
//! ordered list of leaves it reaches. Arrays encountered anywhere along the
//! path branch the walk into every element, recording the element index;
//! this is how a single path specification yields many values (and, later,
//! many rows).

use crate::flatten::path::PathSpec;
use serde_json::Value;

/// The ordered array indices traversed to reach one leaf. Empty for a path
/// that crossed no arrays.
pub type IndexPath = Vec<usize>;

/// The result of resolving one path specification against one document:
/// `(index-path, leaf)` pairs in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    pub leaves: Vec<(IndexPath, Value)>,
}

impl Extraction {
    /// True when the extraction is a single value reached through no
    /// arrays. Such a column broadcasts into every output row.
    pub fn is_scalar(&self) -> bool {
        self.leaves.len() == 1 && self.leaves[0].0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// Resolve `spec` against `doc`.
///
/// Walk rules, applied at every node:
/// - a sequence branches into each element before a segment is consumed,
///   so terminal arrays also expand (a leaf array of N scalars produces
///   N leaves, not one array value);
/// - a mapping consumes the next segment by key, or yields nothing if the
///   key is absent;
/// - a scalar with segments remaining yields nothing;
/// - exhausted segments on a non-sequence node yield that node as a leaf,
///   original JSON type intact.
///
/// Absent branches are not errors, they simply contribute no leaves.
pub fn extract(doc: &Value, spec: &PathSpec) -> Extraction {
    let mut extraction = Extraction::default();
    let mut prefix = IndexPath::new();
    walk(doc, spec.segments(), &mut prefix, &mut extraction);
    extraction
}

fn walk(node: &Value, segments: &[String], prefix: &mut IndexPath, out: &mut Extraction) {
    if let Value::Array(items) = node {
        for (idx, item) in items.iter().enumerate() {
            prefix.push(idx);
            walk(item, segments, prefix, out);
            prefix.pop();
        }
        return;
    }

    match segments.split_first() {
        None => out.leaves.push((prefix.clone(), node.clone())),
        Some((segment, rest)) => {
            if let Value::Object(map) = node {
                if let Some(child) = map.get(segment.as_str()) {
                    walk(child, rest, prefix, out);
                }
            }
            // Scalar with segments remaining, or key absent: no leaf.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(expr: &str) -> PathSpec {
        PathSpec::parse(expr).unwrap()
    }

    #[test]
    fn test_scalar_path() {
        let doc = json!({"meta": {"total": 7}});
        let extraction = extract(&doc, &spec("/meta/total"));

        assert!(extraction.is_scalar());
        assert_eq!(extraction.leaves, vec![(vec![], json!(7))]);
    }

    #[test]
    fn test_array_branches_with_indices() {
        let doc = json!({"data": [{"name": "X"}, {"name": "Y"}]});
        let extraction = extract(&doc, &spec("/data/name"));

        assert_eq!(
            extraction.leaves,
            vec![(vec![0], json!("X")), (vec![1], json!("Y"))],
        );
    }

    #[test]
    fn test_nested_arrays_stack_indices() {
        let doc = json!({
            "results": [
                {"data": [{"date": "2020-01-01"}, {"date": "2020-01-02"}]},
                {"data": [{"date": "2020-01-03"}]}
            ]
        });
        let extraction = extract(&doc, &spec("/results/data/date"));

        assert_eq!(
            extraction.leaves,
            vec![
                (vec![0, 0], json!("2020-01-01")),
                (vec![0, 1], json!("2020-01-02")),
                (vec![1, 0], json!("2020-01-03")),
            ],
        );
    }

    #[test]
    fn test_terminal_array_expands() {
        let doc = json!({"data": [{"values": [1, 2]}]});
        let extraction = extract(&doc, &spec("/data/values"));

        assert_eq!(
            extraction.leaves,
            vec![(vec![0, 0], json!(1)), (vec![0, 1], json!(2))],
        );
    }

    #[test]
    fn test_missing_key_yields_no_leaves() {
        let doc = json!({"data": [{"name": "X"}]});
        assert!(extract(&doc, &spec("/data/missing")).is_empty());
        assert!(extract(&doc, &spec("/absent/whatever")).is_empty());
    }

    #[test]
    fn test_scalar_mid_path_yields_no_leaves() {
        let doc = json!({"data": "just a string"});
        assert!(extract(&doc, &spec("/data/deeper")).is_empty());
    }

    #[test]
    fn test_missing_branch_is_partial_not_fatal() {
        let doc = json!({"data": [{"id": 1}, {"name": "only-name"}, {"id": 3}]});
        let extraction = extract(&doc, &spec("/data/id"));

        // The middle element contributes nothing; the others keep their indices
        assert_eq!(
            extraction.leaves,
            vec![(vec![0], json!(1)), (vec![2], json!(3))],
        );
    }

    #[test]
    fn test_leaf_types_are_preserved() {
        let doc = json!({"data": [{"v": 1.5}, {"v": true}, {"v": null}, {"v": {"k": 1}}]});
        let extraction = extract(&doc, &spec("/data/v"));

        assert_eq!(extraction.leaves[0].1, json!(1.5));
        assert_eq!(extraction.leaves[1].1, json!(true));
        assert_eq!(extraction.leaves[2].1, Value::Null);
        assert_eq!(extraction.leaves[3].1, json!({"k": 1}));
    }
}
